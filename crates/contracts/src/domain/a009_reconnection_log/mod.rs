pub mod aggregate;

pub use aggregate::ReconnectionLog;
