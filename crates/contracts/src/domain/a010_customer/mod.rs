pub mod aggregate;

pub use aggregate::CustomerDetail;
