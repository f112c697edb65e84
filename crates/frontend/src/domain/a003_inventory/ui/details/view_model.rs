use super::super::super::api;
use contracts::domain::a003_inventory::InventoryItemDto;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct InventoryDetailsViewModel {
    pub form: RwSignal<InventoryItemDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl InventoryDetailsViewModel {
    pub fn new(initial: InventoryItemDto) -> Self {
        Self {
            form: RwSignal::new(initial),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Err(e) = current.validate() {
            self.error.set(Some(e));
            return;
        }

        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        spawn_local(async move {
            let result = api::save_item(&current).await;
            saving.try_set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    error.try_set(Some(e.to_string()));
                }
            }
        });
    }
}
