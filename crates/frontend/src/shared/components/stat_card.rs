use crate::shared::icons::icon;
use leptos::prelude::*;

/// Summary figure. Clickable cards act as list presets and show an active state.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into, optional)]
    icon_name: Option<String>,
    /// Formatted primary value
    #[prop(into)]
    value: Signal<String>,
    /// Optional line below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
    /// Extra modifier class, e.g. "stat-card--success"
    #[prop(into, optional)]
    variant: Signal<String>,
    #[prop(into, optional)]
    active: Signal<bool>,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
) -> impl IntoView {
    let clickable = on_click.is_some();
    let class = move || {
        let mut cls = "stat-card".to_string();
        let variant = variant.get();
        if !variant.is_empty() {
            cls.push(' ');
            cls.push_str(&variant);
        }
        if clickable {
            cls.push_str(" stat-card--clickable");
        }
        if active.get() {
            cls.push_str(" stat-card--active");
        }
        cls
    };

    view! {
        <div
            class=class
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            {icon_name.map(|name| view! { <div class="stat-card__icon">{icon(&name)}</div> })}
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}
