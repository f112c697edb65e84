use super::super::api;
use super::details::EmailTemplateDetails;
use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls};
use crate::shared::date_utils::format_optional;
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{SearchInput, Searchable};
use crate::shared::modal::{ConfirmDialog, Modal};
use contracts::domain::a004_email_template::{EmailTemplate, EmailTemplateDto};
use contracts::shared::text::any_contains;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

impl Searchable for EmailTemplate {
    fn matches_filter(&self, filter: &str) -> bool {
        any_contains(
            &[
                self.template_code.as_str(),
                self.subject_line.as_str(),
                self.description.as_deref().unwrap_or_default(),
            ],
            filter,
        )
    }
}

fn new_template() -> EmailTemplateDto {
    EmailTemplateDto {
        is_active: true,
        ..Default::default()
    }
}

#[component]
pub fn EmailTemplateList() -> impl IntoView {
    let list = ListState::<EmailTemplate>::new();
    let (editing, set_editing) = signal::<Option<EmailTemplateDto>>(None);
    let (pending_delete, set_pending_delete) = signal::<Option<EmailTemplate>>(None);

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
            <PageHeader title="Email Templates">
                <SearchInput value=list.filter on_change=Callback::new(move |v| list.set_filter(v)) />
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
                                <th class="table__header-cell">"Code"</th>
                                <th class="table__header-cell">"Subject"</th>
                                <th class="table__header-cell">"Placeholders"</th>
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
                                        <td class="table__cell"><code>{row.template_code.clone()}</code></td>
                                        <td class="table__cell">{row.subject_line.clone()}</td>
                                        <td class="table__cell">{row.placeholders().join(", ")}</td>
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
                let title = if dto.id.is_some() { "Edit email template" } else { "New email template" };
                view! {
                    <Modal title=title on_close=Callback::new(move |_| set_editing.set(None))>
                        <EmailTemplateDetails
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
                    message=format!("Delete template {}?", t.template_code)
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
