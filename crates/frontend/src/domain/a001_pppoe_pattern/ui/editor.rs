use super::view_model::PppoePatternViewModel;
use crate::shared::icons::icon;
use contracts::domain::a001_pppoe_pattern::{ComponentType, SequenceItem};
use leptos::prelude::*;
use web_sys::DragEvent;

fn mark_drag(ev: &DragEvent, id: &str) {
    // Firefox refuses to start a drag without payload data.
    if let Some(dt) = ev.data_transfer() {
        let _ = dt.set_data("text/plain", id);
        dt.set_effect_allowed("move");
    }
}

/// Drop target between two items. `index` is the insert position.
#[component]
fn DropZone(vm: PppoePatternViewModel, index: usize) -> impl IntoView {
    let (hover, set_hover) = signal(false);
    view! {
        <div
            class="sequence-canvas__drop-zone"
            class:sequence-canvas__drop-zone--hover=move || hover.get()
            on:dragover=move |ev: DragEvent| {
                ev.prevent_default();
                set_hover.set(true);
            }
            on:dragleave=move |_| set_hover.set(false)
            on:drop=move |ev: DragEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                set_hover.set(false);
                vm.drop_at(Some(index));
            }
        ></div>
    }
}

#[component]
fn Palette(vm: PppoePatternViewModel) -> impl IntoView {
    let kinds = ComponentType::palette(vm.builder.get_untracked().pattern_type());

    view! {
        <div class="sequence-palette">
            <h4 class="sequence-palette__title">"Components"</h4>
            {kinds.into_iter().map(|kind| {
                let available = move || vm.builder.with(|b| b.can_accept_kind(kind));
                view! {
                    <div
                        class="sequence-palette__item"
                        class:sequence-palette__item--disabled=move || !available()
                        draggable="true"
                        title="Drag into the sequence or click to append"
                        on:dragstart=move |ev: DragEvent| {
                            let item = SequenceItem::from_palette(kind);
                            let id = item.id.clone();
                            if vm.start_drag(item) {
                                mark_drag(&ev, &id);
                            } else {
                                ev.prevent_default();
                            }
                        }
                        on:dragend=move |_| vm.end_drag()
                        on:click=move |_| vm.append(SequenceItem::from_palette(kind))
                    >
                        {icon("grip")}
                        <span>{kind.label()}</span>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn SequenceCanvas(vm: PppoePatternViewModel) -> impl IntoView {
    let items = move || vm.builder.with(|b| b.items().to_vec());

    view! {
        <div
            class="sequence-canvas"
            on:dragover=move |ev: DragEvent| ev.prevent_default()
            on:drop=move |ev: DragEvent| {
                ev.prevent_default();
                vm.drop_at(None);
            }
        >
            <Show
                when=move || !vm.builder.with(|b| b.is_empty())
                fallback=|| view! {
                    <div class="sequence-canvas__empty">"Drop components here"</div>
                }
            >
                {move || {
                    let items = items();
                    let count = items.len();
                    let rows = items.into_iter().enumerate().map(|(index, item)| {
                        let id = StoredValue::new(item.id.clone());
                        let drag_item = StoredValue::new(item.clone());
                        view! {
                            <DropZone vm=vm index=index />
                            <div
                                class="sequence-canvas__item"
                                draggable="true"
                                on:dragstart=move |ev: DragEvent| {
                                    if vm.start_drag(drag_item.get_value()) {
                                        id.with_value(|id| mark_drag(&ev, id));
                                    } else {
                                        ev.prevent_default();
                                    }
                                }
                                on:dragend=move |_| vm.end_drag()
                            >
                                {icon("grip")}
                                <span class="sequence-canvas__label">{item.label.clone()}</span>
                                <button
                                    class="button button--icon sequence-canvas__remove"
                                    title="Remove"
                                    on:click=move |_| id.with_value(|id| vm.remove(id))
                                >
                                    {icon("x")}
                                </button>
                            </div>
                        }
                    }).collect_view();
                    view! {
                        {rows}
                        <DropZone vm=vm index=count />
                    }
                }}
            </Show>
        </div>
    }
}

/// Editor for one pattern type: palette, canvas, preview and save.
#[component]
pub fn PatternEditor(vm: PppoePatternViewModel) -> impl IntoView {
    let pattern_type = move || vm.builder.with(|b| b.pattern_type());
    let is_password = move || {
        pattern_type().constrained_singleton() == ComponentType::CustomPassword
    };

    view! {
        <div class="pattern-editor">
            <div class="pattern-editor__header">
                <h3>{move || pattern_type().display_name()}</h3>
                <div class="pattern-editor__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| vm.save()
                        disabled=move || vm.saving.get()
                    >
                        {icon("save")}
                        {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                    </button>
                    <button class="button button--secondary" on:click=move |_| vm.cancel()>
                        {icon("cancel")}
                        "Cancel"
                    </button>
                </div>
            </div>

            <div class="form-group">
                <label for="pattern-name">"Pattern name"</label>
                <input
                    type="text"
                    id="pattern-name"
                    prop:value=move || vm.pattern_name.get()
                    on:input=move |ev| vm.pattern_name.set(event_target_value(&ev))
                    placeholder="e.g. Default username"
                />
            </div>

            <div class="pattern-editor__workspace">
                <Palette vm=vm />
                <SequenceCanvas vm=vm />
            </div>

            <Show when=is_password>
                <div class="form-group">
                    <label for="custom-password">"Custom password"</label>
                    <input
                        type="text"
                        id="custom-password"
                        prop:value=move || vm.builder.with(|b| b.custom_password_input().to_string())
                        on:input=move |ev| vm.set_custom_password(&event_target_value(&ev))
                        placeholder="Used when the Custom Password component is placed"
                    />
                </div>
            </Show>

            <div class="pattern-editor__preview">
                <span class="pattern-editor__preview-label">"Preview"</span>
                <code>{move || vm.builder.with(|b| b.preview())}</code>
            </div>
        </div>
    }
}
