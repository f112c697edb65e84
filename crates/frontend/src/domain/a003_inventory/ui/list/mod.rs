use super::super::api;
use super::details::InventoryDetails;
use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls};
use crate::shared::date_utils::{format_money, format_optional};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{SearchInput, Searchable};
use crate::shared::modal::{ConfirmDialog, Modal};
use contracts::domain::a003_inventory::{InventoryItem, InventoryItemDto};
use contracts::shared::text::any_contains;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

impl Searchable for InventoryItem {
    fn matches_filter(&self, filter: &str) -> bool {
        any_contains(
            &[
                self.item_name.as_str(),
                self.category.as_deref().unwrap_or_default(),
                self.serial_no.as_deref().unwrap_or_default(),
                self.supplier.as_deref().unwrap_or_default(),
            ],
            filter,
        )
    }
}

#[component]
pub fn InventoryList() -> impl IntoView {
    let list = ListState::<InventoryItem>::new();
    let (editing, set_editing) = signal::<Option<InventoryItemDto>>(None);
    let (pending_delete, set_pending_delete) = signal::<Option<InventoryItem>>(None);

    let fetch = move || list.load(false, api::fetch_items);
    fetch();

    let delete_item = move |id: i64| {
        let guard = list.guard();
        spawn_local(async move {
            let result = api::delete_item(id).await;
            if !guard.is_mounted() {
                return;
            }
            match result {
                Ok(()) => fetch(),
                Err(e) => list.error.set(Some(format!("Failed to delete item: {}", e))),
            }
        });
    };

    let low_stock = move || list.items.with(|items| items.iter().filter(|i| i.is_low_stock()).count());

    view! {
        <div class="page">
            <PageHeader title="Inventory">
                <SearchInput
                    value=list.filter
                    on_change=Callback::new(move |v| list.set_filter(v))
                    placeholder="Search name, category, serial..."
                />
                <button class="button button--primary" on:click=move |_| set_editing.set(Some(InventoryItemDto::default()))>
                    {icon("plus")}
                    "New item"
                </button>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <ErrorBanner
                message=list.error
                on_retry=Callback::new(move |_| fetch())
                on_dismiss=Callback::new(move |_| list.clear_error())
            />

            <Show when=move || { low_stock() > 0 }>
                <div class="warning-box">
                    <span class="warning-box__text">
                        {move || format!("{} item(s) at or below reorder level", low_stock())}
                    </span>
                </div>
            </Show>

            <Show
                when=move || !list.loading.get()
                fallback=|| view! { <div class="loading">"Loading inventory..."</div> }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Item"</th>
                                <th class="table__header-cell">"Category"</th>
                                <th class="table__header-cell">"Serial no."</th>
                                <th class="table__header-cell table__header-cell--right">"Qty"</th>
                                <th class="table__header-cell table__header-cell--right">"Unit cost"</th>
                                <th class="table__header-cell table__header-cell--right">"Value"</th>
                                <th class="table__header-cell">"Supplier"</th>
                                <th class="table__header-cell">"Updated"</th>
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || list.visible().into_iter().map(|row| {
                                let for_edit = row.clone();
                                let for_delete = row.clone();
                                let qty = match row.unit.as_deref() {
                                    Some(unit) => format!("{} {}", row.quantity, unit),
                                    None => row.quantity.to_string(),
                                };
                                view! {
                                    <tr
                                        class="table__row table__row--clickable"
                                        class:table__row--warning=row.is_low_stock()
                                        on:click=move |_| set_editing.set(Some(for_edit.clone().into()))
                                    >
                                        <td class="table__cell">{row.item_name.clone()}</td>
                                        <td class="table__cell">{row.category.clone().unwrap_or_else(|| "-".into())}</td>
                                        <td class="table__cell">{row.serial_no.clone().unwrap_or_else(|| "-".into())}</td>
                                        <td class="table__cell table__cell--right">{qty}</td>
                                        <td class="table__cell table__cell--right">{format_money(row.unit_cost)}</td>
                                        <td class="table__cell table__cell--right">{format_money(row.total_value())}</td>
                                        <td class="table__cell">{row.supplier.clone().unwrap_or_else(|| "-".into())}</td>
                                        <td class="table__cell">{format_optional(&row.updated_at)}</td>
                                        <td class="table__cell">
                                            <button
                                                class="button button--icon"
                                                title="Delete"
                                                on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    set_pending_delete.set(Some(for_delete.clone()));
                                                }
                                            >
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </Show>

            <PaginationControls
                current_page=list.page
                total_pages=Signal::derive(move || list.total_pages())
                total_count=Signal::derive(move || list.filtered_count())
                page_size=list.page_size
                on_page_change=Callback::new(move |p| list.page.set(p))
                on_page_size_change=Callback::new(move |s| list.set_page_size(s))
            />

            {move || editing.get().map(|dto| {
                let title = if dto.id.is_some() { "Edit item" } else { "New item" };
                view! {
                    <Modal title=title on_close=Callback::new(move |_| set_editing.set(None))>
                        <InventoryDetails
                            initial=dto
                            on_saved=Callback::new(move |_| {
                                set_editing.set(None);
                                fetch();
                            })
                            on_cancel=Callback::new(move |_| set_editing.set(None))
                        />
                    </Modal>
                }
            })}

            {move || pending_delete.get().map(|item| view! {
                <ConfirmDialog
                    title="Delete item"
                    message=format!("Delete \"{}\" from inventory?", item.item_name)
                    on_confirm=Callback::new(move |_| {
                        set_pending_delete.set(None);
                        delete_item(item.id);
                    })
                    on_cancel=Callback::new(move |_| set_pending_delete.set(None))
                />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_fields() {
        let item: InventoryItem = serde_json::from_str(
            r#"{"id":1,"item_name":"ONU Router","category":"CPE","serial_no":"ZTE-88812","quantity":4,"unit_cost":1450}"#,
        )
        .unwrap();
        assert!(item.matches_filter("zte-888"));
        assert!(item.matches_filter("cpe"));
        assert!(!item.matches_filter("splitter"));
    }
}
