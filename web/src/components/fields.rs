//! Form inputs bound to a [`SearchForm`] field.
//!
//! Both inputs write through on every change and mark the field touched on
//! blur; the helper line under each one shows `visible_error`.

use flightsearch::{Field, SearchForm};
use leptos::prelude::*;

/// Free-text input
#[component]
pub fn TextField(
    form: RwSignal<SearchForm>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let error = move || form.with(|f| f.visible_error(field));

    view! {
        <div class="field" class:invalid=move || error().is_some()>
            <label for=field.name()>{label}</label>
            <input
                id=field.name()
                name=field.name()
                type="text"
                autocomplete="off"
                placeholder=placeholder
                prop:value=move || form.with(|f| f.values().get(field).to_string())
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                on:blur=move |_| form.update(|f| f.touch(field))
            />
            <p class="helper">{move || error().unwrap_or_default()}</p>
        </div>
    }
}

/// Drop-down over a fixed option list
#[component]
pub fn SelectField(
    form: RwSignal<SearchForm>,
    field: Field,
    label: &'static str,
    options: Vec<String>,
) -> impl IntoView {
    let error = move || form.with(|f| f.visible_error(field));
    let nothing_selected = move || form.with(|f| f.values().get(field).is_empty());

    let choices = options
        .into_iter()
        .map(|option| {
            let text = option.clone();
            let current = option.clone();
            view! {
                <option
                    value=option
                    prop:selected=move || form.with(|f| f.values().get(field) == current)
                >
                    {text}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="field" class:invalid=move || error().is_some()>
            <label for=field.name()>{label}</label>
            <select
                id=field.name()
                name=field.name()
                on:change=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                on:blur=move |_| form.update(|f| f.touch(field))
            >
                <option value="" disabled=true prop:selected=nothing_selected>
                    "Select..."
                </option>
                {choices}
            </select>
            <p class="helper">{move || error().unwrap_or_default()}</p>
        </div>
    }
}
