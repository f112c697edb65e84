use super::view_model::InventoryDetailsViewModel;
use crate::shared::form_utils::{non_empty, parse_f64_or, parse_i64_or, parse_optional_i64, show_optional};
use crate::shared::icons::icon;
use contracts::domain::a003_inventory::InventoryItemDto;
use leptos::prelude::*;

#[component]
pub fn InventoryDetails(
    initial: InventoryItemDto,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = InventoryDetailsViewModel::new(initial);
    let form = vm.form;

    view! {
        <div class="details-container inventory-details">
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="item_name">"Item name"</label>
                    <input
                        type="text"
                        id="item_name"
                        prop:value=move || form.with(|f| f.item_name.clone())
                        on:input=move |ev| form.update(|f| f.item_name = event_target_value(&ev))
                        placeholder="e.g. ONU Router"
                    />
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="category">"Category"</label>
                        <input
                            type="text"
                            id="category"
                            prop:value=move || form.with(|f| show_optional(&f.category))
                            on:input=move |ev| form.update(|f| f.category = non_empty(event_target_value(&ev)))
                        />
                    </div>
                    <div class="form-group">
                        <label for="serial_no">"Serial no."</label>
                        <input
                            type="text"
                            id="serial_no"
                            prop:value=move || form.with(|f| show_optional(&f.serial_no))
                            on:input=move |ev| form.update(|f| f.serial_no = non_empty(event_target_value(&ev)))
                        />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="quantity">"Quantity"</label>
                        <input
                            type="number"
                            id="quantity"
                            min="0"
                            prop:value=move || form.with(|f| f.quantity.to_string())
                            on:input=move |ev| form.update(|f| f.quantity = parse_i64_or(&event_target_value(&ev), 0))
                        />
                    </div>
                    <div class="form-group">
                        <label for="unit">"Unit"</label>
                        <input
                            type="text"
                            id="unit"
                            prop:value=move || form.with(|f| show_optional(&f.unit))
                            on:input=move |ev| form.update(|f| f.unit = non_empty(event_target_value(&ev)))
                            placeholder="pcs, m, roll"
                        />
                    </div>
                    <div class="form-group">
                        <label for="unit_cost">"Unit cost"</label>
                        <input
                            type="number"
                            id="unit_cost"
                            min="0"
                            step="0.01"
                            prop:value=move || form.with(|f| f.unit_cost.to_string())
                            on:input=move |ev| form.update(|f| f.unit_cost = parse_f64_or(&event_target_value(&ev), 0.0))
                        />
                    </div>
                    <div class="form-group">
                        <label for="reorder_level">"Reorder level"</label>
                        <input
                            type="number"
                            id="reorder_level"
                            min="0"
                            prop:value=move || form.with(|f| show_optional(&f.reorder_level))
                            on:input=move |ev| form.update(|f| f.reorder_level = parse_optional_i64(&event_target_value(&ev)))
                        />
                    </div>
                </div>
                <div class="form-group">
                    <label for="supplier">"Supplier"</label>
                    <input
                        type="text"
                        id="supplier"
                        prop:value=move || form.with(|f| show_optional(&f.supplier))
                        on:input=move |ev| form.update(|f| f.supplier = non_empty(event_target_value(&ev)))
                    />
                </div>
                <div class="form-group">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        rows="3"
                        prop:value=move || form.with(|f| show_optional(&f.description))
                        on:input=move |ev| form.update(|f| f.description = non_empty(event_target_value(&ev)))
                    />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click=move |_| vm.save_command(on_saved)
                    disabled=move || vm.saving.get()
                >
                    {icon("save")}
                    {move || if vm.is_edit_mode() { "Save" } else { "Create" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    {icon("cancel")}
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
