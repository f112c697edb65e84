//! Application top bar: sidebar toggle, title, notifications and theme.

use crate::config::config;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeSelector;
use crate::system::notifications::NotificationBell;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().unwrap_or_default();
    let is_sidebar_visible = move || ctx.left_open.get();
    let operator = config().operator.clone();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"ISP Back Office"</span>
            </div>

            <div class="top-header__actions">
                <NotificationBell />
                <ThemeSelector />
                {operator.map(|name| view! {
                    <div class="top-header__user">
                        {icon("user")}
                        <span>{name}</span>
                    </div>
                })}
            </div>
        </div>
    }
}
