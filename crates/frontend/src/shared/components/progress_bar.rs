use contracts::dashboards::d400_sales_dashboard::metrics::bar_width;
use leptos::prelude::*;

/// Horizontal bar filled to `pct`, clamped to 0..=100
#[component]
pub fn ProgressBar(
    #[prop(into)] pct: Signal<f64>,
    #[prop(into, optional)] color: Option<String>,
) -> impl IntoView {
    let color = color.unwrap_or_else(|| "var(--color-primary)".to_string());
    view! {
        <div class="progress">
            <div
                class="progress__fill"
                style=move || format!("width: {:.1}%; background: {};", bar_width(pct.get()), color)
            ></div>
        </div>
    }
}
