use leptos::prelude::*;

/// Required select of a form. `placeholder`, when given, adds an empty first option.
#[component]
pub fn FormSelect(
    #[prop(into)] label: String,
    /// (value, caption) pairs
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into, optional)] placeholder: Option<String>,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <select
                class="form__select"
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {placeholder.map(|p| view! { <option value="">{p}</option> })}
                {move || {
                    let current = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|(v, caption)| {
                            let selected = v == current;
                            view! { <option value=v selected=selected>{caption}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}
