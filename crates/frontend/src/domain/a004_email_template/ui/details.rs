use super::super::api;
use crate::shared::form_utils::{non_empty, show_optional};
use crate::shared::icons::icon;
use contracts::domain::a004_email_template::EmailTemplateDto;
use contracts::shared::text::extract_placeholders;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Placeholders of subject and body, subject first, without duplicates.
pub fn form_placeholders(dto: &EmailTemplateDto) -> Vec<String> {
    let mut names = extract_placeholders(&dto.subject_line);
    for name in extract_placeholders(&dto.body_html) {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

#[component]
pub fn EmailTemplateDetails(
    initial: EmailTemplateDto,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(initial);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let (show_preview, set_show_preview) = signal(false);

    let save = move || {
        let current = form.get_untracked();
        if let Err(e) = current.validate() {
            set_error.set(Some(e));
            return;
        }
        set_saving.set(true);
        spawn_local(async move {
            let result = api::save_template(&current).await;
            set_saving.try_set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    set_error.try_set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="details-container email-template-details">
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-row">
                    <div class="form-group">
                        <label for="template_code">"Template code"</label>
                        <input
                            type="text"
                            id="template_code"
                            prop:value=move || form.with(|f| f.template_code.clone())
                            on:input=move |ev| form.update(|f| f.template_code = event_target_value(&ev))
                            placeholder="SOA_NOTICE"
                        />
                    </div>
                    <div class="form-group form-group--checkbox">
                        <label>
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.is_active)
                                on:change=move |ev| form.update(|f| f.is_active = event_target_checked(&ev))
                            />
                            " Active"
                        </label>
                    </div>
                </div>
                <div class="form-group">
                    <label for="subject_line">"Subject"</label>
                    <input
                        type="text"
                        id="subject_line"
                        prop:value=move || form.with(|f| f.subject_line.clone())
                        on:input=move |ev| form.update(|f| f.subject_line = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="body_html">"Body (HTML)"</label>
                    <textarea
                        id="body_html"
                        rows="10"
                        prop:value=move || form.with(|f| f.body_html.clone())
                        on:input=move |ev| form.update(|f| f.body_html = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="description">"Description"</label>
                    <input
                        type="text"
                        id="description"
                        prop:value=move || form.with(|f| show_optional(&f.description))
                        on:input=move |ev| form.update(|f| f.description = non_empty(event_target_value(&ev)))
                    />
                </div>
                <div class="placeholder-list">
                    <span class="placeholder-list__label">"Placeholders: "</span>
                    {move || {
                        let names = form.with(form_placeholders);
                        if names.is_empty() {
                            view! { <span class="placeholder-list__empty">"none"</span> }.into_any()
                        } else {
                            names.into_iter()
                                .map(|n| view! { <code class="placeholder-list__item">{format!("{{{{{}}}}}", n)}</code> })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </div>

            <Show when=move || show_preview.get()>
                <div class="email-preview">
                    <div class="email-preview__subject">{move || form.with(|f| f.subject_line.clone())}</div>
                    <div class="email-preview__body" inner_html=move || form.with(|f| f.body_html.clone())></div>
                </div>
            </Show>

            <div class="details-actions">
                <button class="button button--primary" on:click=move |_| save() disabled=move || saving.get()>
                    {icon("save")}
                    {move || if form.with(|f| f.id.is_some()) { "Save" } else { "Create" }}
                </button>
                <button class="button button--secondary" on:click=move |_| set_show_preview.update(|v| *v = !*v)>
                    {icon("mail")}
                    {move || if show_preview.get() { "Hide preview" } else { "Preview" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    {icon("cancel")}
                    "Cancel"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_placeholders() {
        let dto = EmailTemplateDto {
            subject_line: "Due date for {{account_no}}".into(),
            body_html: "<p>{{customer_name}} owes {{amount}} on {{account_no}}</p>".into(),
            ..Default::default()
        };
        assert_eq!(form_placeholders(&dto), vec!["account_no", "customer_name", "amount"]);
    }
}
