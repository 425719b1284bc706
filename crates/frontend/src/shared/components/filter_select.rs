use leptos::prelude::*;

/// Native select bound to an optional value; the empty option means "All"
#[component]
pub fn FilterSelect(
    #[prop(into)] label: String,
    /// (value, caption) pairs
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(into)] value: Signal<Option<String>>,
    on_change: Callback<Option<String>>,
    #[prop(into, optional)] all_label: Option<String>,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    let all_label = all_label.unwrap_or_else(|| "All".to_string());
    view! {
        <label class="filter-select">
            <span class="filter-select__label">{label}</span>
            <select
                class="filter-select__control"
                disabled=move || disabled.get()
                prop:value=move || value.get().unwrap_or_default()
                on:change=move |ev| {
                    let v = event_target_value(&ev);
                    on_change.run(if v.is_empty() { None } else { Some(v) });
                }
            >
                <option value="">{all_label}</option>
                {move || {
                    let current = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|(v, caption)| {
                            let selected = current.as_deref() == Some(v.as_str());
                            view! { <option value=v selected=selected>{caption}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}
