/// Shared list helpers: search filter, local pagination, search input
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Minimum filter length before a search is applied.
pub const MIN_FILTER_LEN: usize = 3;

/// Row types that can be matched against the search box.
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

pub fn is_filter_active(filter: &str) -> bool {
    filter.trim().chars().count() >= MIN_FILTER_LEN
}

/// Rows matching `filter`; short filters return everything.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if !is_filter_active(filter) {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Rows of page `page` (0-indexed). Out-of-range pages are empty.
pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let start = page.saturating_mul(page_size);
    if page_size == 0 || start >= items.len() {
        return Vec::new();
    }
    let end = (start + page_size).min(items.len());
    items[start..end].to_vec()
}

/// Page index that stays valid after the row count shrank.
pub fn clamp_page(page: usize, count: usize, page_size: usize) -> usize {
    page.min(total_pages(count, page_size).saturating_sub(1))
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value (for the active highlight)
    #[prop(into)]
    value: Signal<String>,
    /// Receives the debounced value
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        format!("Search (min. {} characters)...", MIN_FILTER_LEN)
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(String::new());
    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };
        if let Some(timeout_id) = debounce_timeout.get_value() {
            window.clear_timeout_with_handle(timeout_id);
        }

        let closure = wasm_bindgen::closure::Closure::once(move || {
            on_change.run(new_value);
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            300,
        ) {
            Ok(timeout_id) => {
                closure.forget();
                debounce_timeout.set_value(Some(timeout_id));
            }
            Err(e) => log::warn!("setTimeout failed: {:?}", e),
        }
    };

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || is_filter_active(&value.get())
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str);

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.0.to_lowercase().contains(&filter.trim().to_lowercase())
        }
    }

    #[test]
    fn test_filter_requires_min_length() {
        let rows = vec![Row("Tanauan"), Row("Lipa"), Row("Batangas")];
        assert_eq!(filter_list(&rows, "ta").len(), 3);
        assert_eq!(filter_list(&rows, "tan"), vec![Row("Tanauan"), Row("Batangas")]);
        assert_eq!(filter_list(&rows, "nau"), vec![Row("Tanauan")]);
        assert_eq!(filter_list(&rows, " BAT "), vec![Row("Batangas")]);
    }

    #[test]
    fn test_pagination() {
        let rows: Vec<usize> = (0..23).collect();
        assert_eq!(total_pages(rows.len(), 10), 3);
        assert_eq!(page_slice(&rows, 2, 10), vec![20, 21, 22]);
        assert!(page_slice(&rows, 3, 10).is_empty());
        assert!(page_slice(&rows, 0, 0).is_empty());
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(5, 23, 10), 2);
        assert_eq!(clamp_page(1, 0, 10), 0);
        assert_eq!(clamp_page(1, 23, 10), 1);
    }
}
