use crate::shared::text::extract_placeholders;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailTemplate {
    pub id: i64,
    pub template_code: String,
    pub subject_line: String,
    #[serde(default)]
    pub body_html: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_active() -> bool {
    true
}

impl EmailTemplate {
    /// Placeholders used in subject and body.
    pub fn placeholders(&self) -> Vec<String> {
        let mut names = extract_placeholders(&self.subject_line);
        for name in extract_placeholders(&self.body_html) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EmailTemplateDto {
    #[serde(default, skip_serializing)]
    pub id: Option<i64>,
    pub template_code: String,
    pub subject_line: String,
    pub body_html: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl EmailTemplateDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.template_code.trim().is_empty() {
            return Err("Template code is required".into());
        }
        if self
            .template_code
            .chars()
            .any(|c| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
        {
            return Err("Template code may contain only letters, digits, '_' and '-'".into());
        }
        if self.subject_line.trim().is_empty() {
            return Err("Subject is required".into());
        }
        if self.body_html.trim().is_empty() {
            return Err("Body is required".into());
        }
        Ok(())
    }
}

impl From<EmailTemplate> for EmailTemplateDto {
    fn from(t: EmailTemplate) -> Self {
        Self {
            id: Some(t.id),
            template_code: t.template_code,
            subject_line: t.subject_line,
            body_html: t.body_html,
            description: t.description,
            is_active: t.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_merge_subject_and_body() {
        let t = EmailTemplate {
            id: 1,
            template_code: "SOA_NOTICE".into(),
            subject_line: "Statement for {{account_no}}".into(),
            body_html: "<p>Dear {{customer_name}}, account {{account_no}}</p>".into(),
            description: None,
            is_active: true,
            updated_at: None,
        };
        assert_eq!(t.placeholders(), vec!["account_no", "customer_name"]);
    }

    #[test]
    fn test_validate_code() {
        let mut dto = EmailTemplateDto {
            template_code: "DUE_REMINDER".into(),
            subject_line: "Reminder".into(),
            body_html: "<p>Pay now</p>".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        dto.template_code = "due reminder".into();
        assert!(dto.validate().is_err());
    }
}
