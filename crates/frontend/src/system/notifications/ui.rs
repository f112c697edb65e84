use super::api;
use crate::config::config;
use crate::shared::date_utils::format_optional;
use crate::shared::icons::icon;
use crate::shared::mounted::MountGuard;
use crate::shared::polling::spawn_poll;
use contracts::system::notifications::{unread_count, Notification};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Text for the unread badge; hidden at zero.
pub fn badge_text(unread: usize) -> Option<String> {
    match unread {
        0 => None,
        1..=99 => Some(unread.to_string()),
        _ => Some("99+".to_string()),
    }
}

/// Header bell that polls `/notifications` and shows the unread count.
#[component]
pub fn NotificationBell() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Notification>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (open, set_open) = signal(false);

    let guard = MountGuard::new();
    {
        let guard = guard.clone();
        spawn_poll(config().notification_poll_ms, guard.clone(), move || {
            let guard = guard.clone();
            async move {
                let result = api::fetch_notifications().await;
                if !guard.is_mounted() {
                    return;
                }
                match result {
                    Ok(list) => {
                        set_items.set(list);
                        set_error.set(None);
                    }
                    Err(e) => set_error.set(Some(e.to_string())),
                }
            }
        });
    }

    let mark_read = move |id: i64| {
        let guard = guard.clone();
        spawn_local(async move {
            match api::mark_read(id).await {
                Ok(()) if guard.is_mounted() => set_items.update(|list| {
                    if let Some(n) = list.iter_mut().find(|n| n.id == id) {
                        n.is_read = true;
                    }
                }),
                Ok(()) => {}
                Err(e) => log::warn!("failed to mark notification {} read: {}", id, e),
            }
        });
    };
    let mark_read = Callback::new(mark_read);

    view! {
        <div class="notification-bell" style="position: relative;">
            <button
                class="top-header__icon-btn"
                title="Notifications"
                on:click=move |_| set_open.update(|v| *v = !*v)
            >
                {icon("bell")}
                {move || badge_text(unread_count(&items.get())).map(|text| view! {
                    <span class="notification-bell__badge">{text}</span>
                })}
            </button>

            <Show when=move || open.get()>
                <div class="notification-dropdown">
                    {move || error.get().map(|e| view! {
                        <div class="notification-dropdown__error">{e}</div>
                    })}
                    <Show
                        when=move || !items.with(|list| list.is_empty())
                        fallback=|| view! { <div class="notification-dropdown__empty">"No notifications"</div> }
                    >
                        <For
                            each=move || items.get()
                            key=|n| (n.id, n.is_read)
                            children=move |n: Notification| {
                                let id = n.id;
                                view! {
                                    <div
                                        class="notification-dropdown__item"
                                        class:notification-dropdown__item--unread=!n.is_read
                                        on:click=move |_| mark_read.run(id)
                                    >
                                        <div class="notification-dropdown__title">{n.title.clone()}</div>
                                        <div class="notification-dropdown__message">{n.message.clone()}</div>
                                        <div class="notification-dropdown__time">{format_optional(&n.created_at)}</div>
                                    </div>
                                }
                            }
                        />
                    </Show>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_text() {
        assert_eq!(badge_text(0), None);
        assert_eq!(badge_text(7).as_deref(), Some("7"));
        assert_eq!(badge_text(150).as_deref(), Some("99+"));
    }
}
