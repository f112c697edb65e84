//! Types shared between the ISP portal frontend and its REST backend.
//!
//! Module numbering follows the frontend tab keys:
//! - `a0xx` domain aggregates (one per backend resource)
//! - `p9xx` projections derived from aggregates
//! - `d4xx` dashboards

pub mod dashboards;
pub mod domain;
pub mod projections;
pub mod shared;
pub mod system;
