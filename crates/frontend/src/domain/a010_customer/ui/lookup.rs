use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{customer_detail_key, title_for_key};
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Trimmed account number, or `None` when nothing usable was typed.
pub fn normalize_account_no(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.contains(char::is_whitespace) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[component]
pub fn CustomerLookup() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().unwrap_or_default();
    let (account_no, set_account_no) = signal(String::new());
    let (hint, set_hint) = signal(None::<String>);

    let open = move || match normalize_account_no(&account_no.get_untracked()) {
        Some(account) => {
            set_hint.set(None);
            let key = customer_detail_key(&account);
            ctx.open_tab(&key, &title_for_key(&key));
        }
        None => set_hint.set(Some("Enter a single account number".to_string())),
    };

    view! {
        <div class="page">
            <PageHeader title="Customer Lookup" subtitle="Open the billing detail of an account" />

            <form
                class="lookup-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    open();
                }
            >
                <label class="form__label" for="account-no">"Account number"</label>
                <div class="lookup-form__row">
                    <input
                        id="account-no"
                        class="form__input"
                        type="text"
                        autocomplete="off"
                        placeholder="e.g. 202400123"
                        prop:value=move || account_no.get()
                        on:input=move |ev| set_account_no.set(event_target_value(&ev))
                    />
                    <button class="button button--primary" type="submit">
                        {icon("search")}
                        "Open"
                    </button>
                </div>
                {move || hint.get().map(|h| view! { <div class="form__hint form__hint--error">{h}</div> })}
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_account_no() {
        assert_eq!(normalize_account_no("  202400123 "), Some("202400123".to_string()));
        assert_eq!(normalize_account_no("   "), None);
        assert_eq!(normalize_account_no("2024 00123"), None);
    }
}
