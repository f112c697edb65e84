use crate::shared::icons::icon;
use leptos::prelude::*;

/// Dismissable error message with an optional Retry button.
///
/// Renders nothing while `message` is `None`.
#[component]
pub fn ErrorBanner(
    #[prop(into)]
    message: Signal<Option<String>>,
    #[prop(optional)]
    on_retry: Option<Callback<()>>,
    #[prop(optional)]
    on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class="error-banner" role="alert">
                    <span class="error-banner__text">{text}</span>
                    {on_retry.map(|retry| view! {
                        <button class="button button--secondary button--small" on:click=move |_| retry.run(())>
                            {icon("refresh")}
                            "Retry"
                        </button>
                    })}
                    {on_dismiss.map(|dismiss| view! {
                        <button class="button button--icon" title="Dismiss" on:click=move |_| dismiss.run(())>
                            {icon("x")}
                        </button>
                    })}
                </div>
            }
        })
    }
}
