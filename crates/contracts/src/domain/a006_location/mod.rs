pub mod aggregate;

pub use aggregate::{cities_in_region, City, Region};
