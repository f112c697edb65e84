use super::view_model::PppoePatternViewModel;
use crate::shared::date_utils::format_optional;
use crate::shared::icons::icon;
use crate::shared::modal::ConfirmDialog;
use contracts::domain::a001_pppoe_pattern::{preview, PatternType};
use leptos::prelude::*;

/// One card per pattern type with its stored sequence.
#[component]
pub fn PatternCards(vm: PppoePatternViewModel) -> impl IntoView {
    let (pending_delete, set_pending_delete) = signal::<Option<i64>>(None);

    view! {
        <div class="pattern-cards">
            {PatternType::all().into_iter().map(|pattern_type| {
                let pattern = move || vm.pattern_for(pattern_type);
                view! {
                    <div class="pattern-card">
                        <div class="pattern-card__header">
                            <h3 class="pattern-card__title">{pattern_type.display_name()}</h3>
                            <div class="pattern-card__actions">
                                <button
                                    class="button button--primary button--small"
                                    disabled=move || !vm.can_edit()
                                    on:click=move |_| vm.edit(pattern_type)
                                >
                                    {move || if pattern().is_some() { icon("edit") } else { icon("plus") }}
                                    {move || if pattern().is_some() { "Edit" } else { "New" }}
                                </button>
                                {move || pattern().map(|p| p.id).map(|id| view! {
                                    <button
                                        class="button button--secondary button--small"
                                        on:click=move |_| set_pending_delete.set(Some(id))
                                    >
                                        {icon("delete")}
                                        "Delete"
                                    </button>
                                })}
                            </div>
                        </div>
                        {move || match pattern() {
                            Some(p) => view! {
                                <div class="pattern-card__body">
                                    <div class="pattern-card__name">{p.pattern_name.clone()}</div>
                                    <code class="pattern-card__preview">{preview(&p.sequence)}</code>
                                    <div class="pattern-card__meta">
                                        {format!(
                                            "Updated {} by {}",
                                            format_optional(&p.updated_at),
                                            p.created_by.clone().unwrap_or_else(|| "-".to_string())
                                        )}
                                    </div>
                                </div>
                            }.into_any(),
                            None => view! {
                                <div class="pattern-card__empty">"No pattern configured"</div>
                            }.into_any(),
                        }}
                    </div>
                }
            }).collect_view()}

            {move || pending_delete.get().map(|id| view! {
                <ConfirmDialog
                    title="Delete pattern"
                    message="The pattern will no longer be used to generate credentials."
                    on_confirm=Callback::new(move |_| {
                        set_pending_delete.set(None);
                        vm.delete(id);
                    })
                    on_cancel=Callback::new(move |_| set_pending_delete.set(None))
                />
            })}
        </div>
    }
}
