//! Sidebar with collapsible menu groups.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn menu_item(id: &'static str, icon_name: &'static str) -> (&'static str, &'static str, &'static str) {
    (id, tab_label_for_key(id), icon_name)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "customers",
            label: "Customers & Billing",
            icon: "user",
            items: vec![
                menu_item("a010_customer", "search"),
                menu_item("a002_billing_record", "receipt"),
                menu_item("a009_reconnection_log", "history"),
            ],
        },
        MenuGroup {
            id: "network",
            label: "Network",
            icon: "network",
            items: vec![
                menu_item("a001_pppoe_pattern", "key"),
                menu_item("a007_lcp_nap_location", "map-pin"),
                menu_item("d400_monitor", "activity"),
            ],
        },
        MenuGroup {
            id: "communications",
            label: "Communications",
            icon: "mail",
            items: vec![
                menu_item("a004_email_template", "mail"),
                menu_item("a005_sms_template", "message"),
            ],
        },
        MenuGroup {
            id: "references",
            label: "References",
            icon: "list",
            items: vec![
                menu_item("a003_inventory", "package"),
                menu_item("a006_location", "map-pin"),
                menu_item("a008_status_remark", "list"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().unwrap_or_default();

    let expanded_groups = RwSignal::new(
        get_menu_groups()
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>(),
    );

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id;
                let items = group.items;

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                expanded_groups.update(|ids| {
                                    if let Some(pos) = ids.iter().position(|x| x == group_id) {
                                        ids.remove(pos);
                                    } else {
                                        ids.push(group_id.to_string());
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || {
                                    expanded_groups.with(|ids| ids.iter().any(|x| x == group_id))
                                }
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.with(|ids| ids.iter().any(|x| x == group_id))>
                            <div class="app-sidebar__children">
                                {items.iter().map(|&(id, label, icon_name)| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.with(|a| a.as_deref() == Some(id))
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(id, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_item_has_a_label() {
        for group in get_menu_groups() {
            for (id, label, _) in group.items {
                assert!(!label.is_empty(), "missing label for {}", id);
            }
        }
    }
}
