use contracts::dashboards::d400_sales_dashboard::dto::KpiBlock;
use contracts::shared::format::{format_idr, format_percent_1, format_rupiah};
use leptos::prelude::*;

use crate::shared::components::progress_bar::ProgressBar;

/// Realized value against its target, with a progress bar
#[component]
pub fn KpiCard(
    #[prop(into)] title: String,
    #[prop(into)] block: Signal<KpiBlock>,
    #[prop(into)] color: String,
) -> impl IntoView {
    view! {
        <div class="kpi-card">
            <div class="kpi-card__title">{title}</div>
            <div class="kpi-card__value">{move || format_rupiah(block.get().value)}</div>
            <div class="kpi-card__pct">{move || format!("{}%", format_percent_1(block.get().pct))}</div>
            <ProgressBar pct=Signal::derive(move || block.get().pct) color=color />
            <div class="kpi-card__range">
                <span>"0"</span>
                <span>{move || format_idr(block.get().target)}</span>
            </div>
        </div>
    }
}
