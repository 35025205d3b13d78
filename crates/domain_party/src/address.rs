//! Postal address value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// A customer's postal address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street line
    pub line1: String,
    /// Apartment, suite, unit
    pub line2: Option<String>,
    /// City
    pub city: String,
    /// State or province code
    pub state: String,
    /// Postal or ZIP code
    pub postal_code: String,
}

impl Address {
    pub fn new(
        line1: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            line1: line1.into(),
            line2: None,
            city: city.into(),
            state: state.into(),
            postal_code: postal_code.into(),
        }
    }

    /// Sets the second address line
    pub fn with_line2(mut self, line2: impl Into<String>) -> Self {
        self.line2 = Some(line2.into());
        self
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.line1)?;
        if let Some(line2) = &self.line2 {
            write!(f, ", {}", line2)?;
        }
        write!(f, ", {} {} {}", self.city, self.state, self.postal_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let address = Address::new("100 Main St", "Springfield", "IL", "62701")
            .with_line2("Suite 4");
        assert_eq!(
            address.to_string(),
            "100 Main St, Suite 4, Springfield IL 62701"
        );
    }
}
