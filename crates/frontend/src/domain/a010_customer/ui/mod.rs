pub mod details;
pub mod lookup;

pub use details::CustomerBillingDetail;
pub use lookup::CustomerLookup;
