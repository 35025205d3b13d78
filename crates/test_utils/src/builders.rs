//! Test Data Builders
//!
//! Builders with sensible defaults so tests specify only the fields they
//! care about.

use chrono::NaiveDateTime;
use core_kernel::{ContractId, CustomerId, Money, Rate};
use domain_contract::{Contract, ContractType};
use domain_payment::{Payment, PaymentMethod};
use domain_receivable::{Receivable, ReceivableType};
use rust_decimal_macros::dec;

use crate::fixtures::{MoneyFixtures, TemporalFixtures};

/// Builder for test receivables
pub struct ReceivableBuilder {
    customer_id: CustomerId,
    receivable_type: ReceivableType,
    original_amount: Money,
    due_date: Option<NaiveDateTime>,
    contract_id: Option<ContractId>,
    created_at: NaiveDateTime,
}

impl Default for ReceivableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceivableBuilder {
    pub fn new() -> Self {
        Self {
            customer_id: CustomerId::new_v7(),
            receivable_type: ReceivableType::MonthlyPayment,
            original_amount: MoneyFixtures::monthly_installment(),
            due_date: None,
            contract_id: None,
            created_at: TemporalFixtures::jan_15_2024(),
        }
    }

    pub fn with_customer(mut self, customer_id: CustomerId) -> Self {
        self.customer_id = customer_id;
        self
    }

    pub fn with_type(mut self, receivable_type: ReceivableType) -> Self {
        self.receivable_type = receivable_type;
        self
    }

    pub fn with_amount(mut self, amount: Money) -> Self {
        self.original_amount = amount;
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDateTime) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_contract(mut self, contract_id: ContractId) -> Self {
        self.contract_id = Some(contract_id);
        self
    }

    pub fn with_created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn build(self) -> Receivable {
        let mut receivable = Receivable::new(
            self.customer_id,
            self.receivable_type,
            self.original_amount,
            self.created_at,
        )
        .expect("valid test receivable");
        if let Some(due_date) = self.due_date {
            receivable = receivable.with_due_date(due_date);
        }
        if let Some(contract_id) = self.contract_id {
            receivable = receivable.with_contract(contract_id);
        }
        receivable
    }
}

/// Builder for test payments
pub struct PaymentBuilder {
    customer_id: CustomerId,
    amount: Money,
    method: PaymentMethod,
    payment_date: NaiveDateTime,
}

impl Default for PaymentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentBuilder {
    pub fn new() -> Self {
        Self {
            customer_id: CustomerId::new_v7(),
            amount: MoneyFixtures::monthly_installment(),
            method: PaymentMethod::Ach,
            payment_date: TemporalFixtures::jan_15_2024(),
        }
    }

    pub fn with_customer(mut self, customer_id: CustomerId) -> Self {
        self.customer_id = customer_id;
        self
    }

    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_method(mut self, method: PaymentMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_payment_date(mut self, payment_date: NaiveDateTime) -> Self {
        self.payment_date = payment_date;
        self
    }

    pub fn build(self) -> Payment {
        Payment::new(self.customer_id, self.amount, self.method, self.payment_date)
            .expect("valid test payment")
    }
}

/// Builder for test contracts
pub struct ContractBuilder {
    customer_id: CustomerId,
    contract_number: String,
    contract_type: ContractType,
    term_months: u32,
    monthly_payment: Money,
    down_payment: Option<Money>,
    start_date: NaiveDateTime,
}

impl Default for ContractBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractBuilder {
    pub fn new() -> Self {
        Self {
            customer_id: CustomerId::new_v7(),
            contract_number: "LSE-2024-0042".to_string(),
            contract_type: ContractType::Lease,
            term_months: 36,
            monthly_payment: MoneyFixtures::monthly_installment(),
            down_payment: None,
            start_date: TemporalFixtures::jan_15_2024(),
        }
    }

    pub fn with_customer(mut self, customer_id: CustomerId) -> Self {
        self.customer_id = customer_id;
        self
    }

    pub fn with_contract_number(mut self, number: impl Into<String>) -> Self {
        self.contract_number = number.into();
        self
    }

    pub fn with_type(mut self, contract_type: ContractType) -> Self {
        self.contract_type = contract_type;
        self
    }

    pub fn with_term_months(mut self, term_months: u32) -> Self {
        self.term_months = term_months;
        self
    }

    pub fn with_monthly_payment(mut self, monthly_payment: Money) -> Self {
        self.monthly_payment = monthly_payment;
        self
    }

    pub fn with_down_payment(mut self, down_payment: Money) -> Self {
        self.down_payment = Some(down_payment);
        self
    }

    pub fn with_start_date(mut self, start_date: NaiveDateTime) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn build(self) -> Contract {
        let end_date = TemporalFixtures::days_after(
            self.start_date,
            30 * self.term_months as i64,
        );
        let mut contract = Contract::new(
            self.customer_id,
            self.contract_number,
            self.contract_type,
            self.start_date,
            end_date,
            MoneyFixtures::usd(dec!(28000.00)),
            Rate::from_percentage(dec!(4.9)),
            self.term_months,
            self.monthly_payment,
            self.start_date,
        )
        .expect("valid test contract");
        if let Some(down_payment) = self.down_payment {
            contract = contract.with_down_payment(down_payment);
        }
        contract
    }
}
