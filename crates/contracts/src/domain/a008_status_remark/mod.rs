pub mod aggregate;

pub use aggregate::StatusRemark;
