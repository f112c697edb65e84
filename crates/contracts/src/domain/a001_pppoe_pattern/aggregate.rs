use serde::{Deserialize, Serialize};

// ============================================================================
// Component kinds
// ============================================================================

/// Token kinds a credential pattern is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    FirstName,
    FirstNameInitial,
    MiddleNameInitial,
    LastName,
    LastNameInitial,
    MobileNumber,
    #[serde(rename = "mobile_number_last_4")]
    MobileNumberLast4,
    #[serde(rename = "mobile_number_last_6")]
    MobileNumberLast6,
    AccountNo,
    #[serde(rename = "random_4_digits")]
    Random4Digits,
    #[serde(rename = "random_6_digits")]
    Random6Digits,
    #[serde(rename = "random_4_letters")]
    Random4Letters,
    /// Free text typed by the operator. Password patterns only.
    CustomPassword,
    /// Username typed by the technician on site. Username patterns only.
    TechInput,
}

impl ComponentType {
    pub fn label(&self) -> &'static str {
        match self {
            ComponentType::FirstName => "First Name",
            ComponentType::FirstNameInitial => "First Name Initial",
            ComponentType::MiddleNameInitial => "Middle Initial",
            ComponentType::LastName => "Last Name",
            ComponentType::LastNameInitial => "Last Name Initial",
            ComponentType::MobileNumber => "Mobile Number",
            ComponentType::MobileNumberLast4 => "Mobile (Last 4)",
            ComponentType::MobileNumberLast6 => "Mobile (Last 6)",
            ComponentType::AccountNo => "Account No.",
            ComponentType::Random4Digits => "Random 4 Digits",
            ComponentType::Random6Digits => "Random 6 Digits",
            ComponentType::Random4Letters => "Random 4 Letters",
            ComponentType::CustomPassword => "Custom Password",
            ComponentType::TechInput => "Tech Input",
        }
    }

    /// Wire name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::FirstName => "first_name",
            ComponentType::FirstNameInitial => "first_name_initial",
            ComponentType::MiddleNameInitial => "middle_name_initial",
            ComponentType::LastName => "last_name",
            ComponentType::LastNameInitial => "last_name_initial",
            ComponentType::MobileNumber => "mobile_number",
            ComponentType::MobileNumberLast4 => "mobile_number_last_4",
            ComponentType::MobileNumberLast6 => "mobile_number_last_6",
            ComponentType::AccountNo => "account_no",
            ComponentType::Random4Digits => "random_4_digits",
            ComponentType::Random6Digits => "random_6_digits",
            ComponentType::Random4Letters => "random_4_letters",
            ComponentType::CustomPassword => "custom_password",
            ComponentType::TechInput => "tech_input",
        }
    }

    pub fn all() -> [ComponentType; 14] {
        [
            ComponentType::FirstName,
            ComponentType::FirstNameInitial,
            ComponentType::MiddleNameInitial,
            ComponentType::LastName,
            ComponentType::LastNameInitial,
            ComponentType::MobileNumber,
            ComponentType::MobileNumberLast4,
            ComponentType::MobileNumberLast6,
            ComponentType::AccountNo,
            ComponentType::Random4Digits,
            ComponentType::Random6Digits,
            ComponentType::Random4Letters,
            ComponentType::CustomPassword,
            ComponentType::TechInput,
        ]
    }

    /// Whether the palette of a `pattern_type` builder offers this kind.
    pub fn is_available_in(&self, pattern_type: PatternType) -> bool {
        match self {
            ComponentType::CustomPassword => pattern_type == PatternType::Password,
            ComponentType::TechInput => pattern_type == PatternType::Username,
            _ => true,
        }
    }

    /// Kinds that, when present, must be the only item of the sequence.
    pub fn is_singleton(&self) -> bool {
        matches!(self, ComponentType::CustomPassword | ComponentType::TechInput)
    }

    /// Palette for a builder mode, in display order.
    pub fn palette(pattern_type: PatternType) -> Vec<ComponentType> {
        Self::all()
            .into_iter()
            .filter(|c| c.is_available_in(pattern_type))
            .collect()
    }
}

// ============================================================================
// Pattern type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PatternType {
    #[default]
    Username,
    Password,
}

impl PatternType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternType::Username => "username",
            PatternType::Password => "password",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PatternType::Username => "Username Pattern",
            PatternType::Password => "Password Pattern",
        }
    }

    /// The singleton kind this mode accepts.
    pub fn constrained_singleton(&self) -> ComponentType {
        match self {
            PatternType::Username => ComponentType::TechInput,
            PatternType::Password => ComponentType::CustomPassword,
        }
    }

    pub fn all() -> [PatternType; 2] {
        [PatternType::Username, PatternType::Password]
    }
}

// ============================================================================
// Sequence item
// ============================================================================

/// One placed token. `id` is stable for the lifetime of a placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceItem {
    pub id: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl SequenceItem {
    /// Fresh item for a palette drag; every call yields a new id.
    pub fn from_palette(component_type: ComponentType) -> Self {
        Self {
            id: format!("{}-{}", component_type.as_str(), uuid::Uuid::new_v4()),
            component_type,
            label: component_type.label().to_string(),
            value: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

// ============================================================================
// Persisted pattern
// ============================================================================

/// Pattern record as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PppoePattern {
    pub id: i64,
    pub pattern_name: String,
    pub pattern_type: PatternType,
    #[serde(default)]
    pub sequence: Vec<SequenceItem>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl PppoePattern {
    /// The pattern the UI treats as active for a type: the first one found.
    pub fn find_by_type(patterns: &[PppoePattern], pattern_type: PatternType) -> Option<&PppoePattern> {
        patterns.iter().find(|p| p.pattern_type == pattern_type)
    }
}

/// Body of POST/PUT `/pppoe-patterns`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PppoePatternDto {
    pub pattern_name: String,
    pub pattern_type: PatternType,
    pub sequence: Vec<SequenceItem>,
    #[serde(default)]
    pub created_by: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_wire_names_match_serde() {
        for c in ComponentType::all() {
            let json = serde_json::to_string(&c).unwrap();
            assert_eq!(json, format!("\"{}\"", c.as_str()));
        }
    }

    #[test]
    fn test_palette_per_mode() {
        let username = ComponentType::palette(PatternType::Username);
        assert!(username.contains(&ComponentType::TechInput));
        assert!(!username.contains(&ComponentType::CustomPassword));

        let password = ComponentType::palette(PatternType::Password);
        assert!(password.contains(&ComponentType::CustomPassword));
        assert!(!password.contains(&ComponentType::TechInput));
    }

    #[test]
    fn test_sequence_item_json_shape() {
        let item = SequenceItem {
            id: "custom_password-1".to_string(),
            component_type: ComponentType::CustomPassword,
            label: "Custom Password".to_string(),
            value: Some("Abc123".to_string()),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "custom_password");
        assert_eq!(json["value"], "Abc123");

        let plain = SequenceItem::from_palette(ComponentType::FirstName);
        let json = serde_json::to_value(&plain).unwrap();
        assert!(json.get("value").is_none());
    }

    #[test]
    fn test_palette_items_get_distinct_ids() {
        let a = SequenceItem::from_palette(ComponentType::AccountNo);
        let b = SequenceItem::from_palette(ComponentType::AccountNo);
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("account_no-"));
    }

    #[test]
    fn test_pattern_deserializes_backend_record() {
        let body = r#"{
            "id": 3,
            "pattern_name": "Default username",
            "pattern_type": "username",
            "sequence": [
                {"id": "a", "type": "first_name_initial", "label": "First Name Initial"},
                {"id": "b", "type": "mobile_number_last_4", "label": "Mobile (Last 4)"}
            ],
            "created_by": "admin@isp.local"
        }"#;
        let pattern: PppoePattern = serde_json::from_str(body).unwrap();
        assert_eq!(pattern.pattern_type, PatternType::Username);
        assert_eq!(pattern.sequence.len(), 2);
        assert_eq!(pattern.sequence[1].component_type, ComponentType::MobileNumberLast4);
        assert_eq!(pattern.updated_at, None);
    }
}
