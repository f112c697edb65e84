use crate::shared::icons::icon;
use leptos::prelude::*;

const DEFAULT_PAGE_SIZES: [usize; 3] = [25, 50, 100];
/// Numbered buttons shown on each side of the current page.
const WINDOW: usize = 2;

/// Navigation state derived from the current page and the page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNav {
    pub page: usize,
    pub total_pages: usize,
}

impl PageNav {
    pub fn new(page: usize, total_pages: usize) -> Self {
        Self { page, total_pages }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    pub fn last(&self) -> usize {
        self.total_pages.saturating_sub(1)
    }

    /// Page indices for the numbered buttons around the current page.
    pub fn window(&self) -> Vec<usize> {
        if self.total_pages == 0 {
            return Vec::new();
        }
        let start = self.page.saturating_sub(WINDOW);
        let end = (self.page + WINDOW).min(self.last());
        (start..=end).collect()
    }

    pub fn info(&self, total_count: usize) -> String {
        format!(
            "Page {} of {} ({} items)",
            self.page + 1,
            self.total_pages.max(1),
            total_count
        )
    }
}

/// First/previous/numbered/next/last buttons with a page size selector.
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)]
    total_pages: Signal<usize>,
    /// Rows after filtering
    #[prop(into)]
    total_count: Signal<usize>,
    #[prop(into)]
    page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let sizes = page_size_options.unwrap_or_else(|| DEFAULT_PAGE_SIZES.to_vec());
    let nav = Memo::new(move |_| PageNav::new(current_page.get(), total_pages.get()));
    let go = move |page: usize| {
        if page != current_page.get_untracked() {
            on_page_change.run(page);
        }
    };

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                title="First page"
                disabled=move || !nav.get().has_prev()
                on:click=move |_| go(0)
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                title="Previous page"
                disabled=move || !nav.get().has_prev()
                on:click=move |_| go(nav.get_untracked().page.saturating_sub(1))
            >
                {icon("chevron-left")}
            </button>

            {move || nav.get().window().into_iter().map(|page| view! {
                <button
                    class="pagination-btn pagination-btn--number"
                    class:pagination-btn--current=move || nav.get().page == page
                    on:click=move |_| go(page)
                >
                    {page + 1}
                </button>
            }).collect_view()}

            <button
                class="pagination-btn"
                title="Next page"
                disabled=move || !nav.get().has_next()
                on:click=move |_| {
                    let n = nav.get_untracked();
                    if n.has_next() {
                        go(n.page + 1);
                    }
                }
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                title="Last page"
                disabled=move || !nav.get().has_next()
                on:click=move |_| go(nav.get_untracked().last())
            >
                {icon("chevrons-right")}
            </button>

            <span class="pagination-info">{move || nav.get().info(total_count.get())}</span>

            <select
                class="page-size-select"
                prop:value=move || page_size.get().to_string()
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_page_size_change.run(size);
                    }
                }
            >
                {sizes.into_iter().map(|size| view! {
                    <option value=size.to_string() selected=move || page_size.get() == size>
                        {size}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_is_clamped() {
        assert_eq!(PageNav::new(0, 10).window(), vec![0, 1, 2]);
        assert_eq!(PageNav::new(5, 10).window(), vec![3, 4, 5, 6, 7]);
        assert_eq!(PageNav::new(9, 10).window(), vec![7, 8, 9]);
        assert!(PageNav::new(0, 0).window().is_empty());
    }

    #[test]
    fn test_prev_next() {
        let only = PageNav::new(0, 1);
        assert!(!only.has_prev());
        assert!(!only.has_next());
        assert_eq!(PageNav::new(0, 0).info(0), "Page 1 of 1 (0 items)");
        assert!(PageNav::new(1, 3).has_next());
    }
}
