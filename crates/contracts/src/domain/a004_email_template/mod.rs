pub mod aggregate;

pub use aggregate::{EmailTemplate, EmailTemplateDto};
