//! Loan inputs and boundary parsing

mod data;
pub mod form;

pub use data::{LoanInput, PaymentFrequency};
pub use form::LoanForm;
