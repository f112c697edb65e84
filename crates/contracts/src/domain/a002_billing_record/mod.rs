pub mod aggregate;

pub use aggregate::{BillingRecord, BillingStatus};
