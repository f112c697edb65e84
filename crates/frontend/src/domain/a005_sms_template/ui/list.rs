use super::super::api;
use super::details::SmsTemplateDetails;
use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls};
use crate::shared::date_utils::format_optional;
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{SearchInput, Searchable};
use crate::shared::modal::{ConfirmDialog, Modal};
use contracts::domain::a005_sms_template::aggregate::segment_count;
use contracts::domain::a005_sms_template::{SmsTemplate, SmsTemplateDto};
use contracts::shared::text::any_contains;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

impl Searchable for SmsTemplate {
    fn matches_filter(&self, filter: &str) -> bool {
        any_contains(
            &[
                self.template_name.as_str(),
                self.template_type.as_deref().unwrap_or_default(),
                self.message_content.as_str(),
            ],
            filter,
        )
    }
}

fn new_template() -> SmsTemplateDto {
    SmsTemplateDto {
        is_active: true,
        ..Default::default()
    }
}

#[component]
pub fn SmsTemplateList() -> impl IntoView {
    let list = ListState::<SmsTemplate>::new();
    let (editing, set_editing) = signal::<Option<SmsTemplateDto>>(None);
    let (pending_delete, set_pending_delete) = signal::<Option<SmsTemplate>>(None);

    let fetch = move || list.load(false, api::fetch_templates);
    fetch();

    let delete_template = move |id: i64| {
        let guard = list.guard();
        spawn_local(async move {
            let result = api::delete_template(id).await;
            if !guard.is_mounted() {
                return;
            }
            match result {
                Ok(()) => fetch(),
                Err(e) => list.error.set(Some(format!("Failed to delete template: {}", e))),
            }
        });
    };

    view! {
        <div class="page">
            <PageHeader title="SMS Templates">
                <SearchInput
                    value=list.filter
                    on_change=Callback::new(move |v| list.set_filter(v))
                    placeholder="Search name, type, message..."
                />
                <button class="button button--primary" on:click=move |_| set_editing.set(Some(new_template()))>
                    {icon("plus")}
                    "New template"
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

            <Show
                when=move || !list.loading.get()
                fallback=|| view! { <div class="loading">"Loading templates..."</div> }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Name"</th>
                                <th class="table__header-cell">"Type"</th>
                                <th class="table__header-cell">"Message"</th>
                                <th class="table__header-cell table__header-cell--right">"Parts"</th>
                                <th class="table__header-cell">"Active"</th>
                                <th class="table__header-cell">"Updated"</th>
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || list.visible().into_iter().map(|row| {
                                let for_edit = row.clone();
                                let for_delete = row.clone();
                                view! {
                                    <tr
                                        class="table__row table__row--clickable"
                                        on:click=move |_| set_editing.set(Some(for_edit.clone().into()))
                                    >
                                        <td class="table__cell">{row.template_name.clone()}</td>
                                        <td class="table__cell">{row.template_type.clone().unwrap_or_else(|| "-".into())}</td>
                                        <td class="table__cell table__cell--truncate" title=row.message_content.clone()>{row.message_content.clone()}</td>
                                        <td class="table__cell table__cell--right">{segment_count(&row.message_content)}</td>
                                        <td class="table__cell">{if row.is_active { "Yes" } else { "No" }}</td>
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
                let title = if dto.id.is_some() { "Edit SMS template" } else { "New SMS template" };
                view! {
                    <Modal title=title on_close=Callback::new(move |_| set_editing.set(None))>
                        <SmsTemplateDetails
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

            {move || pending_delete.get().map(|t| view! {
                <ConfirmDialog
                    title="Delete template"
                    message=format!("Delete template {}?", t.template_name)
                    on_confirm=Callback::new(move |_| {
                        set_pending_delete.set(None);
                        delete_template(t.id);
                    })
                    on_cancel=Callback::new(move |_| set_pending_delete.set(None))
                />
            })}
        </div>
    }
}
