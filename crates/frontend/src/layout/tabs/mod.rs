//! Tab management
//!
//! - `page`: TabPage wrapper for a tab's content
//! - `registry`: tab key to view mapping
//! - `tab_labels`: tab titles

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{customer_detail_key, detail_tab_label, tab_label_for_key, title_for_key};
