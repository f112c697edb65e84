pub mod aggregate;

pub use aggregate::LcpNapLocation;
