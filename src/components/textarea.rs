//! Labeled multi-line text input.

use leptos::prelude::*;

/// Textarea bound to an `RwSignal<String>`, with an optional field label.
#[component]
pub fn Textarea(
    value: RwSignal<String>,
    #[prop(into, default = String::new())] label: String,
    #[prop(into, default = String::new())] placeholder: String,
    #[prop(default = 4)] rows: i32,
) -> impl IntoView {
    let label = (!label.is_empty()).then(|| view! { <span class="field__label">{label}</span> });

    view! {
        <label class="field">
            {label}
            <textarea
                class="field__textarea"
                rows=rows.to_string()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </label>
    }
}
