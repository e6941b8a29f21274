//! One editable variant row (size, color, quantity, prices).
//!
//! DESIGN
//! ======
//! Rows are keyed by index and read their values from the form signal on
//! every render, so removing a middle row shifts later values up without
//! rebuilding the inputs.

use leptos::prelude::*;

use crate::state::attributes::{AttributeField, PRICE_RANGE, QUANTITY_RANGE, is_removable};
use crate::state::catalog::{CatalogState, SelectOption};
use crate::state::product_form::ProductForm;

#[component]
pub fn AttributeRowEditor(index: usize, form: RwSignal<ProductForm>, catalog: RwSignal<CatalogState>) -> impl IntoView {
    let value_of = move |field: AttributeField| {
        form.with(|f| f.attributes.rows().get(index).map(|row| row.get(field).to_owned()).unwrap_or_default())
    };
    let on_change = move |field: AttributeField, value: String| {
        form.update(|f| {
            f.set_attribute(index, field, value);
        });
    };
    let row_errors = move || {
        form.with(|f| {
            f.attribute_errors()
                .iter()
                .filter(|e| e.index == index)
                .map(|e| e.message.clone())
                .collect::<Vec<_>>()
                .join("; ")
        })
    };
    let on_remove = move |_| {
        form.update(|f| {
            f.remove_attribute(index);
        });
    };

    view! {
        <div class="attribute-row">
            <div class="d-flex">
                <OptionSelect
                    name=AttributeField::Size.name()
                    placeholder="Select Size"
                    options=Signal::derive(move || catalog.with(CatalogState::size_options))
                    value=Signal::derive(move || value_of(AttributeField::Size))
                    on_change=Callback::new(move |v| on_change(AttributeField::Size, v))
                />
                <OptionSelect
                    name=AttributeField::Color.name()
                    placeholder="Select Color"
                    options=Signal::derive(move || catalog.with(CatalogState::color_options))
                    value=Signal::derive(move || value_of(AttributeField::Color))
                    on_change=Callback::new(move |v| on_change(AttributeField::Color, v))
                />
                <NumberInput
                    name=AttributeField::Quantity.name()
                    placeholder="Quantity"
                    range=QUANTITY_RANGE
                    value=Signal::derive(move || value_of(AttributeField::Quantity))
                    on_change=Callback::new(move |v| on_change(AttributeField::Quantity, v))
                />
                <NumberInput
                    name=AttributeField::Price.name()
                    placeholder="Price"
                    range=PRICE_RANGE
                    value=Signal::derive(move || value_of(AttributeField::Price))
                    on_change=Callback::new(move |v| on_change(AttributeField::Price, v))
                />
                <NumberInput
                    name=AttributeField::BuyingPrice.name()
                    placeholder="Purchased Price"
                    range=PRICE_RANGE
                    value=Signal::derive(move || value_of(AttributeField::BuyingPrice))
                    on_change=Callback::new(move |v| on_change(AttributeField::BuyingPrice, v))
                />
                <Show when=move || is_removable(index)>
                    <button type="button" class="btn btn-danger btn-sm" on:click=on_remove>
                        "Remove"
                    </button>
                </Show>
            </div>
            <div class="error text-danger">{row_errors}</div>
        </div>
    }
}

#[component]
fn OptionSelect(
    name: &'static str,
    placeholder: &'static str,
    options: Signal<Vec<SelectOption>>,
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            name=name
            class="form-select w-100"
            required=true
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">{placeholder}</option>
            {move || {
                options
                    .get()
                    .into_iter()
                    .map(|opt| view! { <option value=opt.value>{opt.label}</option> })
                    .collect_view()
            }}
        </select>
    }
}

#[component]
fn NumberInput(
    name: &'static str,
    placeholder: &'static str,
    range: (u32, u32),
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            type="number"
            name=name
            class="form-control w-100"
            placeholder=placeholder
            min=range.0.to_string()
            max=range.1.to_string()
            required=true
            prop:value=move || value.get()
            on:input=move |ev| on_change.run(event_target_value(&ev))
        />
    }
}
