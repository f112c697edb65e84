use super::super::api;
use crate::config::config;
use crate::shared::mounted::MountGuard;
use contracts::domain::a001_pppoe_pattern::{
    plan_save, PatternType, PatternValidationError, PppoePattern, SavePlan, SequenceBuilder,
    SequenceItem,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Which half of the screen is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternEditorMode {
    #[default]
    List,
    Edit {
        pattern_type: PatternType,
        existing_id: Option<i64>,
    },
}

impl PatternEditorMode {
    /// Mode and builder for editing `pattern_type`; pre-populated when a
    /// pattern of that type is already stored.
    pub fn open(
        patterns: &[PppoePattern],
        pattern_type: PatternType,
    ) -> (Self, SequenceBuilder, String) {
        match PppoePattern::find_by_type(patterns, pattern_type) {
            Some(existing) => (
                PatternEditorMode::Edit {
                    pattern_type,
                    existing_id: Some(existing.id),
                },
                SequenceBuilder::from_pattern(existing),
                existing.pattern_name.clone(),
            ),
            None => (
                PatternEditorMode::Edit {
                    pattern_type,
                    existing_id: None,
                },
                SequenceBuilder::new(pattern_type),
                String::new(),
            ),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, PatternEditorMode::Edit { .. })
    }

    /// Validate the builder and plan the request. A pattern known when the
    /// editor was opened is always updated, never created a second time.
    pub fn plan(
        &self,
        patterns: &[PppoePattern],
        pattern_name: &str,
        builder: &SequenceBuilder,
        created_by: Option<String>,
    ) -> Result<SavePlan, PatternValidationError> {
        let plan = plan_save(
            patterns,
            pattern_name,
            builder.pattern_type(),
            builder.items(),
            created_by,
        )?;
        Ok(match (plan, *self) {
            (
                SavePlan::Create { dto },
                PatternEditorMode::Edit {
                    existing_id: Some(id),
                    ..
                },
            ) => SavePlan::Update { id, dto },
            (plan, _) => plan,
        })
    }
}

/// State and commands of the PPPoE pattern screen.
#[derive(Clone, Copy)]
pub struct PppoePatternViewModel {
    pub patterns: RwSignal<Vec<PppoePattern>>,
    pub mode: RwSignal<PatternEditorMode>,
    pub builder: RwSignal<SequenceBuilder>,
    pub pattern_name: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    /// Set once the pattern list has been fetched successfully.
    pub loaded: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    guard: StoredValue<MountGuard>,
}

impl PppoePatternViewModel {
    pub fn new() -> Self {
        Self {
            patterns: RwSignal::new(Vec::new()),
            mode: RwSignal::new(PatternEditorMode::List),
            builder: RwSignal::new(SequenceBuilder::default()),
            pattern_name: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            loaded: RwSignal::new(false),
            saving: RwSignal::new(false),
            guard: StoredValue::new(MountGuard::new()),
        }
    }

    pub fn pattern_for(&self, pattern_type: PatternType) -> Option<PppoePattern> {
        self.patterns
            .with(|list| PppoePattern::find_by_type(list, pattern_type).cloned())
    }

    pub fn load(&self) {
        let this = *self;
        let guard = self.guard.get_value();
        self.loading.set(true);
        spawn_local(async move {
            let result = api::fetch_patterns().await;
            if !guard.is_mounted() {
                return;
            }
            match result {
                Ok(list) => {
                    this.patterns.set(list);
                    this.loaded.set(true);
                    this.error.set(None);
                }
                Err(e) => this.error.set(Some(format!("Failed to load patterns: {}", e))),
            }
            this.loading.set(false);
        });
    }

    /// Editing waits for a successful load so an existing pattern is
    /// never mistaken for a missing one.
    pub fn can_edit(&self) -> bool {
        self.loaded.get() && !self.loading.get()
    }

    /// New or Edit: both open the editor, pre-populated if a pattern of
    /// the type exists.
    pub fn edit(&self, pattern_type: PatternType) {
        if !self.loaded.get_untracked() || self.loading.get_untracked() {
            return;
        }
        let (mode, builder, name) =
            self.patterns.with_untracked(|list| PatternEditorMode::open(list, pattern_type));
        self.builder.set(builder);
        self.pattern_name.set(name);
        self.error.set(None);
        self.mode.set(mode);
    }

    pub fn cancel(&self) {
        self.builder.update(|b| b.clear());
        self.error.set(None);
        self.mode.set(PatternEditorMode::List);
    }

    // The drag payload is not rendered. Notifying here would rebuild the
    // canvas row that started the drag and the browser would abort it.
    pub fn start_drag(&self, item: SequenceItem) -> bool {
        self.builder.update_untracked(|b| b.start_drag(item))
    }

    pub fn end_drag(&self) {
        self.builder.update_untracked(|b| b.end_drag());
    }

    pub fn drop_at(&self, index: Option<usize>) {
        self.builder.update(|b| {
            b.drop_dragged(index);
        });
    }

    pub fn append(&self, item: SequenceItem) {
        self.builder.update(|b| {
            b.drop(item, None);
        });
    }

    pub fn remove(&self, id: &str) {
        self.builder.update(|b| b.remove_item(id));
    }

    pub fn set_custom_password(&self, text: &str) {
        self.builder.update(|b| b.set_custom_password_value(text));
    }

    /// Validate, then create or update. Returns to the list on success.
    pub fn save(&self) {
        let builder = self.builder.get_untracked();
        let mode = self.mode.get_untracked();
        let plan = self.patterns.with_untracked(|list| {
            mode.plan(
                list,
                &self.pattern_name.get_untracked(),
                &builder,
                config().operator.clone(),
            )
        });
        let plan = match plan {
            Ok(plan) => plan,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };

        let this = *self;
        let guard = self.guard.get_value();
        self.saving.set(true);
        spawn_local(async move {
            let result = api::execute_save(&plan).await;
            if !guard.is_mounted() {
                return;
            }
            this.saving.set(false);
            match result {
                Ok(()) => {
                    log::info!("saved {} pattern", plan.dto().pattern_type.as_str());
                    this.builder.update(|b| b.clear());
                    this.mode.set(PatternEditorMode::List);
                    this.load();
                }
                Err(e) => this.error.set(Some(format!("Failed to save pattern: {}", e))),
            }
        });
    }

    pub fn delete(&self, id: i64) {
        let this = *self;
        let guard = self.guard.get_value();
        spawn_local(async move {
            let result = api::delete_pattern(id).await;
            if !guard.is_mounted() {
                return;
            }
            match result {
                Ok(()) => this.load(),
                Err(e) => this.error.set(Some(format!("Failed to delete pattern: {}", e))),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_pppoe_pattern::ComponentType;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn stored(id: i64, pattern_type: PatternType) -> PppoePattern {
        PppoePattern {
            id,
            pattern_name: "Default".to_string(),
            pattern_type,
            sequence: vec![SequenceItem::from_palette(ComponentType::AccountNo)],
            created_by: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_open_existing_pattern() {
        let patterns = vec![stored(4, PatternType::Password)];
        let (mode, builder, name) = PatternEditorMode::open(&patterns, PatternType::Password);
        assert_eq!(
            mode,
            PatternEditorMode::Edit {
                pattern_type: PatternType::Password,
                existing_id: Some(4)
            }
        );
        assert_eq!(builder.items().len(), 1);
        assert_eq!(name, "Default");
    }

    #[test]
    fn test_known_pattern_is_updated_even_when_list_is_empty() {
        let (mode, mut builder, _) =
            PatternEditorMode::open(&[stored(4, PatternType::Password)], PatternType::Password);
        builder.clear();
        builder.drop(SequenceItem::from_palette(ComponentType::LastName), None);

        let plan = mode.plan(&[], "Default", &builder, None).unwrap();
        assert!(matches!(plan, SavePlan::Update { id: 4, .. }));

        let (fresh, _, _) = PatternEditorMode::open(&[], PatternType::Password);
        let plan = fresh.plan(&[], "Default", &builder, None).unwrap();
        assert!(matches!(plan, SavePlan::Create { .. }));
    }

    #[test]
    fn test_plan_surfaces_validation_errors() {
        let (mode, builder, _) = PatternEditorMode::open(&[], PatternType::Username);
        assert_eq!(
            mode.plan(&[], "Default", &builder, None),
            Err(PatternValidationError::EmptySequence)
        );
    }

    #[test]
    fn test_drag_start_does_not_rerender_canvas() {
        let owner = Owner::new();
        owner.set();
        let vm = PppoePatternViewModel::new();
        vm.builder.set(SequenceBuilder::new(PatternType::Username));
        vm.append(SequenceItem::from_palette(ComponentType::FirstName));
        vm.append(SequenceItem::from_palette(ComponentType::AccountNo));

        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let rows = Memo::new(move |_| {
            counter.fetch_add(1, Ordering::Relaxed);
            vm.builder.with(|b| b.items().to_vec())
        });
        assert_eq!(rows.get().len(), 2);

        let moved = vm.builder.with_untracked(|b| b.items()[1].clone());
        assert!(vm.start_drag(moved.clone()));
        assert_eq!(rows.get().len(), 2);
        assert_eq!(runs.load(Ordering::Relaxed), 1);

        vm.drop_at(Some(0));
        assert_eq!(rows.get()[0].id, moved.id);
        assert_eq!(runs.load(Ordering::Relaxed), 2);
        assert!(vm.builder.with_untracked(|b| b.dragging().is_none()));
    }

    #[test]
    fn test_edit_waits_for_load() {
        let owner = Owner::new();
        owner.set();
        let vm = PppoePatternViewModel::new();
        vm.edit(PatternType::Username);
        assert!(!vm.mode.get_untracked().is_editing());

        vm.loaded.set(true);
        vm.edit(PatternType::Username);
        assert!(vm.mode.get_untracked().is_editing());
    }

    #[test]
    fn test_open_new_pattern() {
        let patterns = vec![stored(4, PatternType::Password)];
        let (mode, builder, name) = PatternEditorMode::open(&patterns, PatternType::Username);
        assert!(mode.is_editing());
        assert!(builder.is_empty());
        assert_eq!(builder.pattern_type(), PatternType::Username);
        assert!(name.is_empty());
        assert!(!PatternEditorMode::List.is_editing());
    }
}
