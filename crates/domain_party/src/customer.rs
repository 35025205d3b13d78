//! Customer entity
//!
//! Customers hold lease/loan contracts and owe the receivables tracked by
//! this system. Individuals and businesses are the same entity with
//! different name shapes.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use core_kernel::CustomerId;

use crate::address::Address;
use crate::error::PartyError;

/// Customer account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerStatus {
    /// In good standing
    Active,
    /// Temporarily blocked from new contracts
    Suspended,
    /// Relationship ended
    Closed,
}

/// The legal name of a customer
///
/// A customer is either a natural person or a business entity. The variant
/// carries exactly the fields that exist for that kind of customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerName {
    /// A natural person
    Individual {
        first_name: String,
        last_name: String,
    },
    /// A business entity
    Business { name: String },
}

impl CustomerName {
    /// Returns the name formatted for display
    pub fn display_name(&self) -> String {
        match self {
            CustomerName::Individual {
                first_name,
                last_name,
            } => format!("{} {}", first_name, last_name),
            CustomerName::Business { name } => name.clone(),
        }
    }

    /// Returns true if this is a business customer
    pub fn is_business(&self) -> bool {
        matches!(self, CustomerName::Business { .. })
    }
}

impl fmt::Display for CustomerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A customer record
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Customer {
    /// Unique identifier
    pub id: CustomerId,
    /// Legal name
    pub name: CustomerName,
    /// Contact email
    #[validate(email)]
    pub email: String,
    /// Contact phone number
    pub phone: Option<String>,
    /// Postal address
    pub address: Option<Address>,
    /// Tax identifier (SSN/EIN)
    pub tax_id: Option<String>,
    /// Credit score at origination
    pub credit_score: Option<u16>,
    /// Account status
    pub status: CustomerStatus,
    /// Created timestamp
    pub created_date: NaiveDateTime,
    /// Last modified timestamp
    pub modified_date: NaiveDateTime,
}

impl Customer {
    /// Creates a new active customer
    ///
    /// # Errors
    ///
    /// Returns `PartyError::Validation` if the email address is malformed
    /// or the name is blank.
    pub fn new(
        name: CustomerName,
        email: impl Into<String>,
        created_at: NaiveDateTime,
    ) -> Result<Self, PartyError> {
        let customer = Self {
            id: CustomerId::new_v7(),
            name,
            email: email.into(),
            phone: None,
            address: None,
            tax_id: None,
            credit_score: None,
            status: CustomerStatus::Active,
            created_date: created_at,
            modified_date: created_at,
        };

        if customer.name.display_name().trim().is_empty() {
            return Err(PartyError::Validation("Customer name is blank".into()));
        }
        customer
            .validate()
            .map_err(|e| PartyError::Validation(e.to_string()))?;

        Ok(customer)
    }

    /// Sets the phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the postal address
    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    /// Sets the tax identifier
    pub fn with_tax_id(mut self, tax_id: impl Into<String>) -> Self {
        self.tax_id = Some(tax_id.into());
        self
    }

    /// Sets the credit score
    pub fn with_credit_score(mut self, score: u16) -> Self {
        self.credit_score = Some(score);
        self
    }

    /// Suspends the customer
    pub fn suspend(&mut self, at: NaiveDateTime) {
        self.status = CustomerStatus::Suspended;
        self.modified_date = at;
    }

    /// Closes the customer account
    pub fn close(&mut self, at: NaiveDateTime) {
        self.status = CustomerStatus::Closed;
        self.modified_date = at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_individual_display_name() {
        let name = CustomerName::Individual {
            first_name: "Maria".into(),
            last_name: "Santos".into(),
        };
        assert_eq!(name.display_name(), "Maria Santos");
        assert!(!name.is_business());
    }

    #[test]
    fn test_business_display_name() {
        let name = CustomerName::Business {
            name: "Acme Fleet Services LLC".into(),
        };
        assert_eq!(name.display_name(), "Acme Fleet Services LLC");
        assert!(name.is_business());
    }

    #[test]
    fn test_new_customer_is_active() {
        let customer = Customer::new(
            CustomerName::Business {
                name: "Acme Fleet Services LLC".into(),
            },
            "ap@acmefleet.example",
            now(),
        )
        .unwrap();

        assert_eq!(customer.status, CustomerStatus::Active);
        assert!(customer.phone.is_none());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let result = Customer::new(
            CustomerName::Individual {
                first_name: "Maria".into(),
                last_name: "Santos".into(),
            },
            "not-an-email",
            now(),
        );

        assert!(matches!(result, Err(PartyError::Validation(_))));
    }

    #[test]
    fn test_blank_name_rejected() {
        let result = Customer::new(
            CustomerName::Business { name: "  ".into() },
            "ap@acmefleet.example",
            now(),
        );

        assert!(matches!(result, Err(PartyError::Validation(_))));
    }

    #[test]
    fn test_suspend_updates_modified_date() {
        let mut customer = Customer::new(
            CustomerName::Business {
                name: "Acme Fleet Services LLC".into(),
            },
            "ap@acmefleet.example",
            now(),
        )
        .unwrap();

        let later = now() + chrono::Duration::days(3);
        customer.suspend(later);

        assert_eq!(customer.status, CustomerStatus::Suspended);
        assert_eq!(customer.modified_date, later);
    }
}
