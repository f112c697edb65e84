use crate::shared::text::extract_placeholders;
use serde::{Deserialize, Serialize};

const SINGLE_SEGMENT: usize = 160;
const MULTI_SEGMENT: usize = 153;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmsTemplate {
    pub id: i64,
    pub template_name: String,
    #[serde(default)]
    pub template_type: Option<String>,
    pub message_content: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_active() -> bool {
    true
}

impl SmsTemplate {
    pub fn placeholders(&self) -> Vec<String> {
        extract_placeholders(&self.message_content)
    }
}

/// Number of SMS parts needed for `text` (160 chars single, 153 per part otherwise).
pub fn segment_count(text: &str) -> usize {
    let chars = text.chars().count();
    match chars {
        0 => 0,
        n if n <= SINGLE_SEGMENT => 1,
        n => n.div_ceil(MULTI_SEGMENT),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SmsTemplateDto {
    #[serde(default, skip_serializing)]
    pub id: Option<i64>,
    pub template_name: String,
    pub template_type: Option<String>,
    pub message_content: String,
    pub is_active: bool,
}

impl SmsTemplateDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.template_name.trim().is_empty() {
            return Err("Template name is required".into());
        }
        if self.message_content.trim().is_empty() {
            return Err("Message is required".into());
        }
        Ok(())
    }

    pub fn segments(&self) -> usize {
        segment_count(&self.message_content)
    }
}

impl From<SmsTemplate> for SmsTemplateDto {
    fn from(t: SmsTemplate) -> Self {
        Self {
            id: Some(t.id),
            template_name: t.template_name,
            template_type: t.template_type,
            message_content: t.message_content,
            is_active: t.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_count() {
        assert_eq!(segment_count(""), 0);
        assert_eq!(segment_count(&"a".repeat(160)), 1);
        assert_eq!(segment_count(&"a".repeat(161)), 2);
        assert_eq!(segment_count(&"a".repeat(306)), 2);
        assert_eq!(segment_count(&"a".repeat(307)), 3);
    }

    #[test]
    fn test_validate() {
        let dto = SmsTemplateDto {
            template_name: "Due reminder".into(),
            message_content: "Hi {{name}}, your bill is due.".into(),
            is_active: true,
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        assert_eq!(dto.segments(), 1);
        assert!(SmsTemplateDto::default().validate().is_err());
    }
}
