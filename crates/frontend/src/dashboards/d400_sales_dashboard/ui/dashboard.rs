use contracts::dashboards::d400_sales_dashboard::metrics::{
    achievement_pct, breakdown_map, breakdown_value, cumulative, customer_options,
    funnel_cumulative, normalize_forecast_to_year, ordered_pipeline, trend_year,
};
use contracts::dashboards::d400_sales_dashboard::dto::{BreakdownItem, KpiBlock};
use contracts::dashboards::d400_sales_dashboard::{DashboardFilters, DashboardResponse};
use contracts::enums::{ProjectStatus, ProjectType};
use contracts::shared::format::{format_idr, format_percent_1, format_rupiah};
use contracts::shared::month::{current_year, month_label};
use contracts::shared::request_seq::RequestSequencer;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use super::filter_bar::FilterBar;
use super::kpi_card::KpiCard;
use crate::dashboards::d400_sales_dashboard::api;
use crate::shared::charts::{BarList, ChartSeries, DonutChart, LineChart, PALETTE};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};

fn count_label(value: f64) -> String {
    format!("{}", value as i64)
}

fn breakdown_pairs(items: &[BreakdownItem]) -> Vec<(String, f64)> {
    items.iter().map(|i| (i.label.clone(), i.value)).collect()
}

/// Sales dashboard: KPIs, cumulative trend, funnel and breakdowns for the filter bar
#[component]
pub fn SalesDashboard() -> impl IntoView {
    let filters = RwSignal::new(DashboardFilters::default());
    let data = RwSignal::new(Option::<DashboardResponse>::None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(false);
    let known_customers = RwSignal::new(Vec::<String>::new());
    let sequencer = StoredValue::new(RequestSequencer::new());

    let fetch = move |current: DashboardFilters| {
        let seq = sequencer.get_value();
        let tag = seq.issue();
        set_is_loading.set(true);
        spawn_local(async move {
            let result = api::fetch_dashboard(&current).await;
            if !seq.is_current(tag) {
                log::debug!("Dropping stale dashboard response {:?}", tag);
                return;
            }
            match result {
                Ok(response) => {
                    let names = customer_options(&response.customer_table);
                    known_customers.update(|known| {
                        known.extend(names);
                        known.sort();
                        known.dedup();
                    });
                    data.set(Some(response));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to fetch dashboard: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_is_loading.set(false);
        });
    };

    Effect::new(move |_| fetch(filters.get()));

    let kpi = move |pick: fn(&DashboardResponse) -> KpiBlock| {
        Signal::derive(move || data.with(|d| d.as_ref().map(pick).unwrap_or_default()))
    };

    let budget_block = Signal::derive(move || {
        data.with(|d| {
            d.as_ref()
                .map(|d| KpiBlock {
                    value: d.budget.total_realization,
                    target: d.budget.total_budget,
                    pct: achievement_pct(d.budget.total_realization, d.budget.total_budget),
                })
                .unwrap_or_default()
        })
    });

    let year = Memo::new(move |_| {
        filters.with(|f| {
            data.with(|d| {
                let forecast = d.as_ref().map(|d| d.forecast.as_slice()).unwrap_or(&[]);
                trend_year(f, forecast, current_year())
            })
        })
    });
    let year_points = Memo::new(move |_| {
        data.with(|d| {
            let forecast = d.as_ref().map(|d| d.forecast.as_slice()).unwrap_or(&[]);
            normalize_forecast_to_year(forecast, year.get())
        })
    });
    let trend_labels = Signal::derive(move || {
        year_points.with(|points| points.iter().map(|p| month_label(&p.month)).collect::<Vec<_>>())
    });
    let trend_series = Signal::derive(move || {
        year_points.with(|points| {
            let targets: Vec<f64> = points.iter().map(|p| p.target).collect();
            let realizations: Vec<f64> = points.iter().map(|p| p.realization).collect();
            vec![
                ChartSeries::new("Cumulative Target", PALETTE[0], cumulative(&targets)),
                ChartSeries::new("Cumulative Realization", PALETTE[1], cumulative(&realizations)),
            ]
        })
    });

    let funnel = Signal::derive(move || {
        data.with(|d| {
            let stages = ordered_pipeline(d.as_ref().map(|d| d.pipeline.stages.as_slice()).unwrap_or(&[]));
            let counts: Vec<i64> = stages.iter().map(|s| s.count).collect();
            stages
                .into_iter()
                .zip(funnel_cumulative(&counts))
                .map(|(stage, total)| (stage.label, total as f64))
                .collect::<Vec<_>>()
        })
    });

    let customer_share = Signal::derive(move || {
        data.with(|d| d.as_ref().map(|d| breakdown_pairs(&d.customer_contribution)).unwrap_or_default())
    });
    let division_breakdown = Signal::derive(move || {
        data.with(|d| d.as_ref().map(|d| breakdown_pairs(&d.division_breakdown)).unwrap_or_default())
    });
    let type_breakdown = Signal::derive(move || {
        data.with(|d| d.as_ref().map(|d| breakdown_pairs(&d.type_breakdown)).unwrap_or_default())
    });

    // Status and type totals always list every known label, zero when absent
    let status_totals = Signal::derive(move || {
        data.with(|d| {
            let map = breakdown_map(d.as_ref().map(|d| d.status_breakdown.as_slice()).unwrap_or(&[]));
            ProjectStatus::all()
                .into_iter()
                .map(|s| (s.code().to_string(), breakdown_value(&map, s.code())))
                .collect::<Vec<_>>()
        })
    });
    let type_totals = Signal::derive(move || {
        data.with(|d| {
            let map = breakdown_map(d.as_ref().map(|d| d.type_breakdown.as_slice()).unwrap_or(&[]));
            ProjectType::all()
                .into_iter()
                .map(|t| (t.code().to_string(), breakdown_value(&map, t.code())))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <PageFrame page_id="d400_sales_dashboard--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("dashboard")}
                    <h1 class="page__title">"Sales Dashboard"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| fetch(filters.get_untracked())
                        disabled=Signal::derive(move || is_loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <FilterBar filters=filters customers=known_customers />

                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Show
                    when=move || data.with(|d| d.is_some())
                    fallback=|| view! { <div class="page__loading">"Loading..."</div> }
                >
                    <div class="kpi-grid">
                        <KpiCard title="Total Sales" block=kpi(|d| d.kpis.total_sales) color=PALETTE[1] />
                        <KpiCard title="Total Carry Over" block=kpi(|d| d.kpis.carry_over) color=PALETTE[0] />
                        <KpiCard title="Total Project Based" block=kpi(|d| d.kpis.project_based) color=PALETTE[4] />
                        <KpiCard title="Total Recurring" block=kpi(|d| d.kpis.recurring) color=PALETTE[2] />
                        <KpiCard title="Total New Recurring" block=kpi(|d| d.kpis.new_recurring) color=PALETTE[3] />
                        <div class="kpi-card">
                            <div class="kpi-card__title">"Total Opportunity"</div>
                            <div class="kpi-card__value">
                                {move || data.with(|d| format_rupiah(d.as_ref().map(|d| d.kpis.opportunity.target).unwrap_or(0.0)))}
                            </div>
                            <div class="kpi-card__pct">
                                {move || data.with(|d| {
                                    let conversion = d.as_ref().map(|d| d.kpis.opportunity.conversion).unwrap_or(0.0);
                                    format!("Conversion {}%", format_percent_1(conversion * 100.0))
                                })}
                            </div>
                            <div class="kpi-card__range">
                                {move || data.with(|d| {
                                    format!("Across {} projects", d.as_ref().map(|d| d.totals.total_projects).unwrap_or(0))
                                })}
                            </div>
                        </div>
                        <KpiCard title="Total Budget" block=budget_block color=PALETTE[5] />
                    </div>

                    <div class="dashboard-row">
                        <div class="chart-panel chart-panel--narrow">
                            <h3 class="chart-panel__title">"Customer Contribution"</h3>
                            <DonutChart items=customer_share />
                            <div class="chart-panel__subtitle">"Top Customers"</div>
                            <ul class="top-list">
                                {move || customer_share
                                    .get()
                                    .into_iter()
                                    .take(5)
                                    .map(|(label, value)| view! {
                                        <li class="top-list__item">
                                            <span class="top-list__label">{label}</span>
                                            <span class="top-list__value">{format_idr(value)}</span>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                        <div class="chart-panel chart-panel--wide">
                            <h3 class="chart-panel__title">"Cumulative Target vs Realization"</h3>
                            <div class="chart-panel__subtitle">{move || format!("Year: {}", year.get())}</div>
                            <LineChart labels=trend_labels series=trend_series />
                        </div>
                        <div class="chart-panel chart-panel--narrow">
                            <h3 class="chart-panel__title">"Sales Funnel (Cumulative)"</h3>
                            <div class="chart-panel__subtitle">"Total deals that have reached this stage or beyond"</div>
                            <BarList items=funnel format=count_label />
                            <div class="chart-panel__footer">
                                {move || data.with(|d| {
                                    d.as_ref()
                                        .and_then(|d| d.pipeline.total_weighted_revenue)
                                        .map(|w| format!("Weighted pipeline: {}", format_rupiah(w)))
                                })}
                            </div>
                        </div>
                    </div>

                    <div class="dashboard-row">
                        <div class="chart-panel chart-panel--narrow">
                            <h3 class="chart-panel__title">"Division Breakdown"</h3>
                            <BarList items=division_breakdown color=PALETTE[0] />
                        </div>
                        <div class="chart-panel chart-panel--wide">
                            <h3 class="chart-panel__title">"Customer Performance (Sorted by Realization)"</h3>
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell min_width=200.0>"Customer"</TableHeaderCell>
                                        <TableHeaderCell min_width=140.0>"Target Revenue"</TableHeaderCell>
                                        <TableHeaderCell min_width=140.0>"Realization"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {move || data.with(|d| {
                                        d.as_ref()
                                            .map(|d| d.customer_table.clone())
                                            .unwrap_or_default()
                                            .into_iter()
                                            .map(|row| view! {
                                                <TableRow>
                                                    <TableCell><TableCellLayout truncate=true>{row.customer}</TableCellLayout></TableCell>
                                                    <TableCell class="table__cell--number"><TableCellLayout>{format_idr(row.total_target)}</TableCellLayout></TableCell>
                                                    <TableCell class="table__cell--number"><TableCellLayout>{format_idr(row.total_real)}</TableCellLayout></TableCell>
                                                </TableRow>
                                            })
                                            .collect_view()
                                    })}
                                </TableBody>
                            </Table>
                        </div>
                        <div class="chart-panel chart-panel--narrow">
                            <h3 class="chart-panel__title">"Project Type Breakdown"</h3>
                            <BarList items=type_breakdown color=PALETTE[1] />
                        </div>
                    </div>

                    <div class="dashboard-row">
                        <div class="chart-panel">
                            <h3 class="chart-panel__title">"Status Totals"</h3>
                            <BarList items=status_totals color=PALETTE[2] />
                        </div>
                        <div class="chart-panel">
                            <h3 class="chart-panel__title">"Type Totals"</h3>
                            <BarList items=type_totals color=PALETTE[4] />
                        </div>
                        <div class="chart-panel chart-panel--wide">
                            <h3 class="chart-panel__title">"Top Projects"</h3>
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell min_width=240.0>"Project"</TableHeaderCell>
                                        <TableHeaderCell min_width=140.0>"Target Revenue"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {move || data.with(|d| {
                                        d.as_ref()
                                            .map(|d| d.top_projects.clone())
                                            .unwrap_or_default()
                                            .into_iter()
                                            .map(|p| view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            <A href=format!("/projects/{}", p.id) attr:class="table__link">{p.name}</A>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell class="table__cell--number"><TableCellLayout>{format_idr(p.target_revenue)}</TableCellLayout></TableCell>
                                                </TableRow>
                                            })
                                            .collect_view()
                                    })}
                                </TableBody>
                            </Table>
                        </div>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}
