//! Reactive state shared by the list screens: rows, load status,
//! search filter and local pagination.

use crate::config::config;
use crate::shared::list_utils::{clamp_page, filter_list, page_slice, total_pages, Searchable};
use crate::shared::mounted::MountGuard;
use contracts::shared::ApiError;
use leptos::prelude::*;
use std::future::Future;
use wasm_bindgen_futures::spawn_local;

pub struct ListState<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub filter: RwSignal<String>,
    pub page: RwSignal<usize>,
    pub page_size: RwSignal<usize>,
    guard: StoredValue<MountGuard>,
}

impl<T: Send + Sync + 'static> Clone for ListState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListState<T> {}

impl<T> ListState<T>
where
    T: Searchable + Clone + Send + Sync + 'static,
{
    /// Must be called inside the owning component.
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            filter: RwSignal::new(String::new()),
            page: RwSignal::new(0),
            page_size: RwSignal::new(config().page_size),
            guard: StoredValue::new(MountGuard::new()),
        }
    }

    pub fn guard(&self) -> MountGuard {
        self.guard.get_value()
    }

    pub fn filtered(&self) -> Vec<T> {
        let filter = self.filter.get();
        self.items.with(|items| filter_list(items, &filter))
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_count(), self.page_size.get())
    }

    /// Rows of the current page after filtering.
    pub fn visible(&self) -> Vec<T> {
        page_slice(&self.filtered(), self.page.get(), self.page_size.get())
    }

    pub fn set_filter(&self, filter: String) {
        self.filter.set(filter);
        self.page.set(0);
    }

    pub fn set_page_size(&self, size: usize) {
        self.page_size.set(size.max(1));
        self.page.set(0);
    }

    pub fn clear_error(&self) {
        self.error.set(None);
    }

    /// Fetch rows and replace the list.
    ///
    /// A silent load keeps the current rows on screen without the
    /// spinner. Results arriving after unmount are discarded.
    pub fn load<F, Fut>(&self, silent: bool, fetch: F)
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    {
        let this = *self;
        let guard = self.guard();
        if !silent {
            self.loading.set(true);
        }
        spawn_local(async move {
            let result = fetch().await;
            if !guard.is_mounted() {
                return;
            }
            match result {
                Ok(rows) => {
                    let count = this
                        .filter
                        .with_untracked(|f| filter_list(&rows, f).len());
                    this.items.set(rows);
                    this.error.set(None);
                    this.page.update(|p| {
                        *p = clamp_page(*p, count, this.page_size.get_untracked())
                    });
                }
                Err(e) => this.error.set(Some(e.to_string())),
            }
            if !silent {
                this.loading.set(false);
            }
        });
    }
}
