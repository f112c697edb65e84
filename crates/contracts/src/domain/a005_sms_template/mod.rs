pub mod aggregate;

pub use aggregate::{SmsTemplate, SmsTemplateDto};
