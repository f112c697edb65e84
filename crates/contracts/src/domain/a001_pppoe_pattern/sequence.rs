//! Drag-and-drop sequence builder for PPPoE credential patterns.
//!
//! The builder owns the transient sequence while an operator edits a
//! pattern. It enforces one invariant: a constrained singleton
//! (`custom_password` in password mode, `tech_input` in username mode),
//! when present, is the only item of the sequence.

use super::aggregate::{ComponentType, PatternType, PppoePattern, PppoePatternDto, SequenceItem};
use thiserror::Error;

const TECH_INPUT_MARKER: &str = "<Tech Input>";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternValidationError {
    #[error("Pattern name is required")]
    EmptyName,
    #[error("Add at least one component to the sequence")]
    EmptySequence,
    #[error("Custom password value is required")]
    MissingCustomPasswordValue,
    #[error("{component} cannot be used in a {pattern}")]
    ComponentNotAllowed {
        component: &'static str,
        pattern: &'static str,
    },
    #[error("{0} must be the only component of the sequence")]
    SingletonNotAlone(&'static str),
}

/// Drop tokens the pattern type does not offer and, when a singleton is
/// present, keep only the first one.
fn normalize_sequence(pattern_type: PatternType, sequence: &[SequenceItem]) -> Vec<SequenceItem> {
    let allowed: Vec<SequenceItem> = sequence
        .iter()
        .filter(|i| i.component_type.is_available_in(pattern_type))
        .cloned()
        .collect();
    match allowed.iter().position(|i| i.component_type.is_singleton()) {
        Some(index) => vec![allowed[index].clone()],
        None => allowed,
    }
}

/// Check the tokens of a sequence against its pattern type.
pub fn validate_sequence(
    pattern_type: PatternType,
    sequence: &[SequenceItem],
) -> Result<(), PatternValidationError> {
    if let Some(item) = sequence
        .iter()
        .find(|i| !i.component_type.is_available_in(pattern_type))
    {
        return Err(PatternValidationError::ComponentNotAllowed {
            component: item.component_type.label(),
            pattern: pattern_type.display_name(),
        });
    }
    if sequence.len() > 1 {
        if let Some(item) = sequence.iter().find(|i| i.component_type.is_singleton()) {
            return Err(PatternValidationError::SingletonNotAlone(item.component_type.label()));
        }
    }
    Ok(())
}

/// Transient builder state for one pattern type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SequenceBuilder {
    pattern_type: PatternType,
    items: Vec<SequenceItem>,
    dragging: Option<SequenceItem>,
    /// Mirror of the custom-password text field.
    custom_password_input: String,
}

impl SequenceBuilder {
    pub fn new(pattern_type: PatternType) -> Self {
        Self {
            pattern_type,
            ..Self::default()
        }
    }

    /// Builder pre-populated from a persisted pattern. A stored sequence
    /// that breaks the singleton rule is normalized on load.
    pub fn from_pattern(pattern: &PppoePattern) -> Self {
        let items = normalize_sequence(pattern.pattern_type, &pattern.sequence);
        let custom_password_input = items
            .iter()
            .find(|i| i.component_type == ComponentType::CustomPassword)
            .and_then(|i| i.value.clone())
            .unwrap_or_default();
        Self {
            pattern_type: pattern.pattern_type,
            items,
            dragging: None,
            custom_password_input,
        }
    }

    pub fn pattern_type(&self) -> PatternType {
        self.pattern_type
    }

    pub fn items(&self) -> &[SequenceItem] {
        &self.items
    }

    pub fn dragging(&self) -> Option<&SequenceItem> {
        self.dragging.as_ref()
    }

    pub fn custom_password_input(&self) -> &str {
        &self.custom_password_input
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The singleton currently occupying the sequence, if any.
    fn placed_singleton(&self) -> Option<&SequenceItem> {
        self.items.iter().find(|i| i.component_type.is_singleton())
    }

    /// Whether `item` may enter (or move within) the sequence.
    pub fn can_accept(&self, item: &SequenceItem) -> bool {
        if !item.component_type.is_available_in(self.pattern_type) {
            return false;
        }
        match self.placed_singleton() {
            // A placed singleton only ever lets itself be moved.
            Some(existing) => existing.id == item.id,
            None => true,
        }
    }

    /// Whether a fresh palette item of `kind` would be accepted.
    pub fn can_accept_kind(&self, kind: ComponentType) -> bool {
        kind.is_available_in(self.pattern_type) && self.placed_singleton().is_none()
    }

    /// Begin dragging `item`. Returns false and leaves the state unchanged
    /// when the item would break the singleton invariant.
    pub fn start_drag(&mut self, item: SequenceItem) -> bool {
        if !self.can_accept(&item) {
            return false;
        }
        self.dragging = Some(item);
        true
    }

    pub fn end_drag(&mut self) {
        self.dragging = None;
    }

    /// Drop the item currently being dragged.
    pub fn drop_dragged(&mut self, target_index: Option<usize>) -> bool {
        match self.dragging.take() {
            Some(item) => self.drop(item, target_index),
            None => false,
        }
    }

    /// Place `item` at `target_index` (or append). Returns false when the
    /// drop is ignored.
    pub fn drop(&mut self, mut item: SequenceItem, target_index: Option<usize>) -> bool {
        self.dragging = None;
        if !self.can_accept(&item) {
            return false;
        }

        if item.component_type.is_singleton() {
            if item.component_type == ComponentType::CustomPassword {
                match item.value.as_deref() {
                    Some(v) => self.custom_password_input = v.to_string(),
                    None => item.value = Some(self.custom_password_input.clone()),
                }
            }
            self.items = vec![item];
            return true;
        }

        self.items.retain(|i| i.id != item.id);
        let index = target_index.unwrap_or(self.items.len()).min(self.items.len());
        self.items.insert(index, item);
        true
    }

    pub fn remove_item(&mut self, id: &str) {
        let removed_custom = self
            .items
            .iter()
            .any(|i| i.id == id && i.component_type == ComponentType::CustomPassword);
        self.items.retain(|i| i.id != id);
        if removed_custom {
            self.custom_password_input.clear();
        }
    }

    pub fn set_custom_password_value(&mut self, text: &str) {
        self.custom_password_input = text.to_string();
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.component_type == ComponentType::CustomPassword)
        {
            item.value = Some(text.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.dragging = None;
        self.custom_password_input.clear();
    }

    pub fn preview(&self) -> String {
        preview(&self.items)
    }
}

/// Human-readable rendering of a sequence.
pub fn preview(sequence: &[SequenceItem]) -> String {
    sequence
        .iter()
        .map(|item| match item.component_type {
            ComponentType::CustomPassword => item.value.clone().unwrap_or_default(),
            ComponentType::TechInput => TECH_INPUT_MARKER.to_string(),
            _ => format!("[{}]", item.label),
        })
        .collect()
}

/// How a validated pattern must be persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum SavePlan {
    Create { dto: PppoePatternDto },
    Update { id: i64, dto: PppoePatternDto },
}

impl SavePlan {
    pub fn dto(&self) -> &PppoePatternDto {
        match self {
            SavePlan::Create { dto } | SavePlan::Update { dto, .. } => dto,
        }
    }
}

/// Validate a pattern and decide between create and update.
///
/// A pattern of the same type already on the server is replaced.
pub fn plan_save(
    existing: &[PppoePattern],
    pattern_name: &str,
    pattern_type: PatternType,
    sequence: &[SequenceItem],
    created_by: Option<String>,
) -> Result<SavePlan, PatternValidationError> {
    let pattern_name = pattern_name.trim();
    if pattern_name.is_empty() {
        return Err(PatternValidationError::EmptyName);
    }
    if sequence.is_empty() {
        return Err(PatternValidationError::EmptySequence);
    }
    validate_sequence(pattern_type, sequence)?;
    let blank_custom = sequence.iter().any(|i| {
        i.component_type == ComponentType::CustomPassword
            && i.value.as_deref().map_or(true, |v| v.trim().is_empty())
    });
    if blank_custom {
        return Err(PatternValidationError::MissingCustomPasswordValue);
    }

    let dto = PppoePatternDto {
        pattern_name: pattern_name.to_string(),
        pattern_type,
        sequence: sequence.to_vec(),
        created_by,
    };
    Ok(match PppoePattern::find_by_type(existing, pattern_type) {
        Some(current) => SavePlan::Update { id: current.id, dto },
        None => SavePlan::Create { dto },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(c: ComponentType) -> SequenceItem {
        SequenceItem::from_palette(c)
    }

    fn singleton_invariant_holds(seq: &[SequenceItem]) -> bool {
        let singletons = seq.iter().filter(|i| i.component_type.is_singleton()).count();
        singletons == 0 || (singletons == 1 && seq.len() == 1)
    }

    fn stored(id: i64, pattern_type: PatternType) -> PppoePattern {
        PppoePattern {
            id,
            pattern_name: "existing".to_string(),
            pattern_type,
            sequence: vec![item(ComponentType::FirstName)],
            created_by: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_username_scenario_preview() {
        let mut b = SequenceBuilder::new(PatternType::Username);
        assert!(b.drop(item(ComponentType::FirstNameInitial), None));
        assert!(b.drop(item(ComponentType::MobileNumberLast4), None));
        assert_eq!(b.preview(), "[First Name Initial][Mobile (Last 4)]");
    }

    #[test]
    fn test_custom_password_replaces_sequence() {
        let mut b = SequenceBuilder::new(PatternType::Password);
        b.drop(item(ComponentType::LastName), None);
        b.drop(item(ComponentType::Random4Digits), None);
        b.drop(item(ComponentType::AccountNo), None);
        assert_eq!(b.items().len(), 3);

        let custom = item(ComponentType::CustomPassword).with_value("Abc123");
        assert!(b.drop(custom, Some(1)));
        assert_eq!(b.items().len(), 1);
        assert_eq!(b.items()[0].component_type, ComponentType::CustomPassword);
        assert_eq!(b.preview(), "Abc123");
        assert_eq!(b.custom_password_input(), "Abc123");
    }

    #[test]
    fn test_second_tech_input_is_ignored() {
        let mut b = SequenceBuilder::new(PatternType::Username);
        assert!(b.drop(item(ComponentType::TechInput), None));
        let before = b.clone();

        let second = item(ComponentType::TechInput);
        assert!(!b.start_drag(second.clone()));
        assert!(!b.drop(second, None));
        assert_eq!(b.items(), before.items());
    }

    #[test]
    fn test_singleton_blocks_other_tokens() {
        let mut b = SequenceBuilder::new(PatternType::Password);
        b.drop(item(ComponentType::CustomPassword).with_value("x"), None);
        assert!(!b.start_drag(item(ComponentType::FirstName)));
        assert!(!b.drop(item(ComponentType::FirstName), Some(0)));
        assert!(singleton_invariant_holds(b.items()));
    }

    #[test]
    fn test_placed_singleton_can_be_moved() {
        let mut b = SequenceBuilder::new(PatternType::Username);
        let tech = item(ComponentType::TechInput);
        b.drop(tech.clone(), None);
        assert!(b.start_drag(tech.clone()));
        assert!(b.drop_dragged(Some(0)));
        assert_eq!(b.items(), &[tech]);
    }

    #[test]
    fn test_mode_restricts_kinds() {
        let mut username = SequenceBuilder::new(PatternType::Username);
        assert!(!username.start_drag(item(ComponentType::CustomPassword)));

        let mut password = SequenceBuilder::new(PatternType::Password);
        assert!(!password.drop(item(ComponentType::TechInput), None));
        assert!(password.is_empty());
    }

    #[test]
    fn test_palette_availability_follows_singleton() {
        let mut b = SequenceBuilder::new(PatternType::Username);
        assert!(b.can_accept_kind(ComponentType::FirstName));
        assert!(!b.can_accept_kind(ComponentType::CustomPassword));
        b.drop(item(ComponentType::TechInput), None);
        assert!(!b.can_accept_kind(ComponentType::FirstName));
        assert!(!b.can_accept_kind(ComponentType::TechInput));
    }

    #[test]
    fn test_reorder_moves_existing_item() {
        let mut b = SequenceBuilder::new(PatternType::Username);
        let first = item(ComponentType::FirstName);
        let last = item(ComponentType::LastName);
        let acct = item(ComponentType::AccountNo);
        b.drop(first.clone(), None);
        b.drop(last.clone(), None);
        b.drop(acct.clone(), None);

        assert!(b.start_drag(acct.clone()));
        assert!(b.drop_dragged(Some(0)));
        let ids: Vec<&str> = b.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec![acct.id.as_str(), first.id.as_str(), last.id.as_str()]);
        assert!(b.dragging().is_none());
    }

    #[test]
    fn test_target_index_is_clamped() {
        let mut b = SequenceBuilder::new(PatternType::Username);
        b.drop(item(ComponentType::FirstName), None);
        let acct = item(ComponentType::AccountNo);
        b.drop(acct.clone(), Some(99));
        assert_eq!(b.items().last(), Some(&acct));
    }

    #[test]
    fn test_drop_without_drag_payload_is_noop() {
        let mut b = SequenceBuilder::new(PatternType::Username);
        assert!(!b.drop_dragged(None));
        assert!(b.is_empty());
    }

    #[test]
    fn test_removed_value_not_resurrected() {
        let mut b = SequenceBuilder::new(PatternType::Password);
        let custom = item(ComponentType::CustomPassword);
        b.drop(custom.clone(), None);
        b.set_custom_password_value("Secret9");
        assert_eq!(b.items()[0].value.as_deref(), Some("Secret9"));

        b.remove_item(&custom.id);
        assert!(b.is_empty());

        let again = item(ComponentType::CustomPassword);
        assert_ne!(again.id, custom.id);
        b.drop(again, None);
        assert_eq!(b.items()[0].value.as_deref(), Some(""));
        assert_eq!(b.preview(), "");
    }

    #[test]
    fn test_custom_value_typed_before_drop_is_used() {
        let mut b = SequenceBuilder::new(PatternType::Password);
        b.set_custom_password_value("Typed1");
        b.drop(item(ComponentType::CustomPassword), None);
        assert_eq!(b.preview(), "Typed1");
    }

    #[test]
    fn test_preview_markers() {
        let seq = vec![
            item(ComponentType::TechInput),
            item(ComponentType::LastNameInitial),
        ];
        assert_eq!(preview(&seq), "<Tech Input>[Last Name Initial]");
        assert_eq!(preview(&seq), preview(&seq.clone()));
        assert_eq!(preview(&[]), "");
    }

    #[test]
    fn test_from_pattern_restores_custom_input() {
        let pattern = PppoePattern {
            id: 9,
            pattern_name: "pw".to_string(),
            pattern_type: PatternType::Password,
            sequence: vec![item(ComponentType::CustomPassword).with_value("Abc123")],
            created_by: None,
            created_at: None,
            updated_at: None,
        };
        let b = SequenceBuilder::from_pattern(&pattern);
        assert_eq!(b.pattern_type(), PatternType::Password);
        assert_eq!(b.custom_password_input(), "Abc123");
        assert_eq!(b.items(), pattern.sequence.as_slice());
    }

    #[test]
    fn test_save_rejects_empty_name_and_sequence() {
        let seq = vec![item(ComponentType::FirstName)];
        assert_eq!(
            plan_save(&[], "  ", PatternType::Username, &seq, None),
            Err(PatternValidationError::EmptyName)
        );
        assert_eq!(
            plan_save(&[], "Default", PatternType::Username, &[], None),
            Err(PatternValidationError::EmptySequence)
        );
    }

    #[test]
    fn test_save_rejects_blank_custom_password() {
        let seq = vec![item(ComponentType::CustomPassword).with_value(" ")];
        assert_eq!(
            plan_save(&[], "pw", PatternType::Password, &seq, None),
            Err(PatternValidationError::MissingCustomPasswordValue)
        );
    }

    #[test]
    fn test_save_rejects_singleton_with_other_tokens() {
        let seq = vec![
            item(ComponentType::CustomPassword).with_value("Abc123"),
            item(ComponentType::FirstName),
        ];
        assert_eq!(
            plan_save(&[], "pw", PatternType::Password, &seq, None),
            Err(PatternValidationError::SingletonNotAlone("Custom Password"))
        );
    }

    #[test]
    fn test_save_rejects_component_of_other_mode() {
        let seq = vec![item(ComponentType::TechInput)];
        let err = plan_save(&[], "pw", PatternType::Password, &seq, None).unwrap_err();
        assert!(matches!(err, PatternValidationError::ComponentNotAllowed { .. }));
        assert!(validate_sequence(PatternType::Username, &seq).is_ok());
    }

    #[test]
    fn test_from_pattern_normalizes_broken_sequence() {
        let tech = item(ComponentType::TechInput);
        let pattern = PppoePattern {
            id: 3,
            pattern_name: "user".to_string(),
            pattern_type: PatternType::Username,
            sequence: vec![
                item(ComponentType::CustomPassword).with_value("x"),
                item(ComponentType::FirstName),
                tech.clone(),
            ],
            created_by: None,
            created_at: None,
            updated_at: None,
        };
        let b = SequenceBuilder::from_pattern(&pattern);
        assert_eq!(b.items(), &[tech]);
        assert!(validate_sequence(b.pattern_type(), b.items()).is_ok());
    }

    #[test]
    fn test_save_updates_existing_pattern_of_same_type() {
        let existing = vec![stored(4, PatternType::Password), stored(7, PatternType::Username)];
        let seq = vec![item(ComponentType::AccountNo)];

        let plan = plan_save(&existing, " Main ", PatternType::Username, &seq, Some("ops".into()))
            .unwrap();
        match plan {
            SavePlan::Update { id, ref dto } => {
                assert_eq!(id, 7);
                assert_eq!(dto.pattern_name, "Main");
                assert_eq!(dto.created_by.as_deref(), Some("ops"));
            }
            other => panic!("expected update, got {:?}", other),
        }

        let plan = plan_save(&existing[1..], "pw", PatternType::Password, &seq, None).unwrap();
        assert!(matches!(plan, SavePlan::Create { .. }));
    }

    #[test]
    fn test_invariant_under_mixed_operations() {
        let mut b = SequenceBuilder::new(PatternType::Password);
        let kinds = ComponentType::palette(PatternType::Password);
        for (n, kind) in kinds.iter().cycle().take(40).enumerate() {
            let candidate = item(*kind).with_value("v");
            if n % 5 == 0 {
                if let Some(first) = b.items().first().cloned() {
                    b.remove_item(&first.id);
                }
            }
            b.drop(candidate, Some(n % 3));
            assert!(singleton_invariant_holds(b.items()));
        }
    }
}
