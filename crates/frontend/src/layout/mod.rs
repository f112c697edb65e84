pub mod center;
pub mod global_context;
pub mod left;
pub mod tabs;
pub mod top_header;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |    Content (tabs)            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_context::<AppGlobalContext>().unwrap_or_default();

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <aside
                    data-zone="left"
                    class="app-sidebar"
                    class:app-sidebar--collapsed=move || !ctx.left_open.get()
                >
                    {left()}
                </aside>
                <div class="app-main">
                    {center()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn MainLayout() -> impl IntoView {
    if let Some(ctx) = use_context::<AppGlobalContext>() {
        ctx.init_router_integration(|key| tabs::title_for_key(key));
    }

    view! {
        <Shell
            left=|| view! { <left::Sidebar /> }.into_any()
            center=|| view! { <center::Center /> }.into_any()
        />
    }
}
