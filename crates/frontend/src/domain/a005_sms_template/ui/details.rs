use super::super::api;
use crate::shared::form_utils::{non_empty, show_optional};
use crate::shared::icons::icon;
use contracts::domain::a005_sms_template::SmsTemplateDto;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const TEMPLATE_TYPES: [&str; 4] = ["billing", "outage", "reminder", "general"];

/// Counter shown under the message box.
pub fn length_hint(dto: &SmsTemplateDto) -> String {
    let chars = dto.message_content.chars().count();
    match dto.segments() {
        0 | 1 => format!("{} characters", chars),
        n => format!("{} characters, {} SMS parts", chars, n),
    }
}

#[component]
pub fn SmsTemplateDetails(
    initial: SmsTemplateDto,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(initial);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

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
        <div class="details-container sms-template-details">
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-row">
                    <div class="form-group">
                        <label for="template_name">"Name"</label>
                        <input
                            type="text"
                            id="template_name"
                            prop:value=move || form.with(|f| f.template_name.clone())
                            on:input=move |ev| form.update(|f| f.template_name = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="template_type">"Type"</label>
                        <select
                            id="template_type"
                            prop:value=move || form.with(|f| show_optional(&f.template_type))
                            on:change=move |ev| form.update(|f| f.template_type = non_empty(event_target_value(&ev)))
                        >
                            <option value="">"-"</option>
                            {TEMPLATE_TYPES.iter().map(|t| view! { <option value=*t>{*t}</option> }).collect_view()}
                        </select>
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
                    <label for="message_content">"Message"</label>
                    <textarea
                        id="message_content"
                        rows="5"
                        prop:value=move || form.with(|f| f.message_content.clone())
                        on:input=move |ev| form.update(|f| f.message_content = event_target_value(&ev))
                    />
                    <div class="form-hint">{move || form.with(length_hint)}</div>
                </div>
            </div>

            <div class="details-actions">
                <button class="button button--primary" on:click=move |_| save() disabled=move || saving.get()>
                    {icon("save")}
                    {move || if form.with(|f| f.id.is_some()) { "Save" } else { "Create" }}
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
    fn test_length_hint() {
        let mut dto = SmsTemplateDto {
            message_content: "Hi {{name}}".into(),
            ..Default::default()
        };
        assert_eq!(length_hint(&dto), "11 characters");
        dto.message_content = "x".repeat(200);
        assert_eq!(length_hint(&dto), "200 characters, 2 SMS parts");
    }
}
