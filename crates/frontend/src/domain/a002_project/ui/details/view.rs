use contracts::domain::a002_project::revenue::{row_gap, row_percent, RowLevel};
use contracts::domain::a002_project::{ProjectDetail, RevenuePlanItem, RevenueTotals};
use contracts::domain::common::AggregateId;
use contracts::shared::format::{format_idr, format_rupiah};
use contracts::shared::month::month_label;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::*;

use super::post_po::PostPoPanel;
use super::realization::RealizationModal;
use crate::domain::a002_project::api;
use crate::domain::a002_project::ui::form::ProjectFormModal;
use crate::shared::charts::{ChartSeries, LineChart, PALETTE};
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};

#[component]
pub fn ProjectDetails() -> impl IntoView {
    let params = use_params_map();
    let project_id = Memo::new(move |_| {
        params.with(|p| p.get("id").and_then(|id| <i64 as AggregateId>::from_string(&id).ok()))
    });

    let detail = RwSignal::new(Option::<ProjectDetail>::None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(false);
    let editing_month = RwSignal::new(Option::<RevenuePlanItem>::None);
    let show_edit = RwSignal::new(false);

    let fetch = move || {
        let Some(id) = project_id.get_untracked() else {
            set_error.set(Some("Invalid project id.".to_string()));
            return;
        };
        set_is_loading.set(true);
        spawn_local(async move {
            match api::fetch_project(id).await {
                Ok(d) => {
                    detail.set(Some(d));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to fetch project {}: {}", id, e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_is_loading.set(false);
        });
    };

    Effect::new(move |_| {
        project_id.track();
        fetch();
    });

    let totals = Memo::new(move |_| {
        detail.with(|d| {
            d.as_ref()
                .map(|d| RevenueTotals::compute(&d.revenue_plans, d.project.sales_stage))
        })
    });

    let trend_labels = Signal::derive(move || {
        detail.with(|d| {
            d.as_ref()
                .map(|d| d.revenue_plans.iter().map(|p| month_label(&p.month)).collect())
                .unwrap_or_default()
        })
    });
    let trend_series = Signal::derive(move || {
        detail.with(|d| {
            let plans = d.as_ref().map(|d| d.revenue_plans.as_slice()).unwrap_or(&[]);
            vec![
                ChartSeries::new("Target", PALETTE[0], plans.iter().map(|p| p.target_revenue).collect()),
                ChartSeries::new("Realization", PALETTE[1], plans.iter().map(|p| p.target_realization).collect()),
            ]
        })
    });

    let post_po_key = Memo::new(move |_| {
        detail.with(|d| d.as_ref().map(|d| (d.project.id, d.project.sales_stage)))
    });

    view! {
        <PageFrame page_id="a002_project--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <A href="/projects" attr:class="page__back">
                        {icon("arrow-left")}
                    </A>
                    <h1 class="page__title">
                        {move || detail.with(|d| d.as_ref().map(|d| d.project.project_code.clone()).unwrap_or_else(|| "Project".to_string()))}
                    </h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| show_edit.set(true)
                        disabled=Signal::derive(move || detail.with(|d| d.is_none()))
                    >
                        {icon("edit")}
                        " Edit"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| fetch()
                        disabled=Signal::derive(move || is_loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                {move || detail.get().map(|d| {
                    let p = d.project;
                    let stage = p.stage().map(|s| s.display()).unwrap_or_else(|| "-".to_string());
                    view! {
                        <div class="info-grid">
                            <div class="info-grid__item"><span class="info-grid__label">"Description"</span><span>{p.description.clone()}</span></div>
                            <div class="info-grid__item"><span class="info-grid__label">"Customer"</span><span>{p.customer_label().to_string()}</span></div>
                            <div class="info-grid__item"><span class="info-grid__label">"Division"</span><span>{p.division.clone()}</span></div>
                            <div class="info-grid__item"><span class="info-grid__label">"Status"</span><span>{p.status.clone()}</span></div>
                            <div class="info-grid__item"><span class="info-grid__label">"Project Type"</span><span>{p.project_type.clone()}</span></div>
                            <div class="info-grid__item"><span class="info-grid__label">"Sales Stage"</span><span>{stage}</span></div>
                            <div class="info-grid__item"><span class="info-grid__label">"SPH"</span><span>{
                                format!("{} {}", p.sph_release(), p.sph_number.clone().unwrap_or_default())
                            }</span></div>
                            <div class="info-grid__item"><span class="info-grid__label">"SPH Status"</span><span>{p.sph_status_kind().to_string()}</span></div>
                        </div>
                    }
                })}

                <div class="stat-cards">
                    <StatCard
                        label="Target Revenue"
                        value=Signal::derive(move || format_rupiah(totals.get().map(|t| t.target).unwrap_or(0.0)))
                    />
                    <StatCard
                        label="Realization"
                        value=Signal::derive(move || format_rupiah(totals.get().map(|t| t.realization).unwrap_or(0.0)))
                    />
                    <StatCard
                        label="Achievement"
                        value=Signal::derive(move || format!("{}%", totals.get().map(|t| t.achievement_pct).unwrap_or(0)))
                        variant=Signal::derive(move || {
                            let pct = totals.get().map(|t| t.achievement_pct).unwrap_or(0);
                            match RowLevel::of(pct) {
                                RowLevel::OnTarget => "stat-card--success",
                                RowLevel::Near => "stat-card--warning",
                                RowLevel::Behind => "stat-card--error",
                            }
                            .to_string()
                        })
                    />
                    <StatCard
                        label="Weighted Forecast"
                        value=Signal::derive(move || format_rupiah(totals.get().map(|t| t.weighted_forecast).unwrap_or(0.0)))
                    />
                </div>

                <h2 class="section__title">"Revenue Plan"</h2>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Month"</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>"Target"</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>"Realization"</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>"Gap"</TableHeaderCell>
                            <TableHeaderCell>"%"</TableHeaderCell>
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || detail.with(|d| d.as_ref().map(|d| d.revenue_plans.clone()).unwrap_or_default())
                            key=|p| (p.month.clone(), p.target_revenue.to_bits(), p.target_realization.to_bits())
                            children=move |item| {
                                let gap = row_gap(&item);
                                let pct = row_percent(&item);
                                let pct_class = pct.map(|v| RowLevel::of(v).css_class()).unwrap_or("");
                                let for_edit = item.clone();
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{month_label(&item.month)}</TableCellLayout></TableCell>
                                        <TableCell class="table__cell--number"><TableCellLayout>{format_idr(item.target_revenue)}</TableCellLayout></TableCell>
                                        <TableCell class="table__cell--number"><TableCellLayout>{format_idr(item.target_realization)}</TableCellLayout></TableCell>
                                        <TableCell class="table__cell--number">
                                            <TableCellLayout>
                                                <span class=if gap < 0.0 { "text--error" } else { "text--success" }>{format_idr(gap)}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class=pct_class>{pct.map(|v| format!("{}%", v)).unwrap_or_else(|| "-".to_string())}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Button appearance=ButtonAppearance::Subtle on_click=move |_| editing_month.set(Some(for_edit.clone()))>
                                                    {icon("edit")}
                                                </Button>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>

                <h2 class="section__title">"Target vs Realization"</h2>
                <LineChart labels=trend_labels series=trend_series />

                {move || post_po_key.get().map(|(id, stage)| view! {
                    <PostPoPanel project_id=id sales_stage=stage detail=detail />
                })}
            </div>

            {move || {
                let id = project_id.get()?;
                editing_month.get().map(|item| view! {
                    <RealizationModal
                        project_id=id
                        item=item
                        detail=detail
                        on_close=Callback::new(move |_| editing_month.set(None))
                        on_reconcile=Callback::new(move |_| fetch())
                    />
                })
            }}

            <Show when=move || show_edit.get()>
                {move || project_id.get().map(|id| view! {
                    <ProjectFormModal
                        project_id=Some(id)
                        on_saved=Callback::new(move |_| {
                            show_edit.set(false);
                            fetch();
                        })
                        on_cancel=Callback::new(move |_| show_edit.set(false))
                    />
                })}
            </Show>
        </PageFrame>
    }
}
