use contracts::domain::a003_budget::achievement::{detail_achievement_level, remaining_is_negative};
use contracts::domain::a003_budget::realization::{
    category_totals, export_filename, format_created_date, visible_realizations,
};
use contracts::domain::a003_budget::{BudgetDetail, BudgetRealization, RealizationForm};
use contracts::domain::common::AggregateId;
use contracts::enums::BudgetCategory;
use contracts::shared::csv_export::ExportError;
use contracts::shared::format::{format_idr, format_percent_1};
use contracts::shared::month::month_label;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::*;

use super::realization::RealizationModal;
use crate::domain::a003_budget::api;
use crate::shared::charts::{BarList, DonutChart};
use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::stat_card::StatCard;
use crate::shared::export::{alert, confirm, export_csv};
use crate::shared::icons::icon;
use crate::shared::list_utils::display_options;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};

#[component]
pub fn BudgetDetails() -> impl IntoView {
    let params = use_params_map();
    let budget_id = Memo::new(move |_| {
        params.with(|p| p.get("id").and_then(|id| <i64 as AggregateId>::from_string(&id).ok()))
    });

    let detail = RwSignal::new(Option::<BudgetDetail>::None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(false);
    let category = RwSignal::new(Option::<String>::None);
    let editing = RwSignal::new(Option::<RealizationForm>::None);

    let fetch = move || {
        let Some(id) = budget_id.get_untracked() else {
            set_error.set(Some("Invalid budget id.".to_string()));
            return;
        };
        set_is_loading.set(true);
        spawn_local(async move {
            match api::fetch_budget(id).await {
                Ok(d) => {
                    detail.set(Some(d));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to fetch budget {}: {}", id, e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_is_loading.set(false);
        });
    };

    Effect::new(move |_| {
        budget_id.track();
        fetch();
    });

    let rows = Memo::new(move |_| {
        detail.with(|d| {
            d.as_ref()
                .map(|d| visible_realizations(&d.realization, category.get().as_deref()))
                .unwrap_or_default()
        })
    });
    let totals = Signal::derive(move || {
        detail.with(|d| d.as_ref().map(|d| category_totals(&d.realization)).unwrap_or_default())
    });

    let handle_delete = move |row: BudgetRealization| {
        let Some(id) = budget_id.get_untracked() else {
            return;
        };
        if !confirm(&format!("Delete the {} realization of {}?", row.category, format_idr(row.amount))) {
            return;
        }
        spawn_local(async move {
            match api::delete_realization(id, row.id).await {
                Ok(()) => fetch(),
                Err(e) => {
                    log::error!("Failed to delete realization {}: {}", row.id, e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let handle_export = move || {
        let Some((rows, filename)) = detail.with_untracked(|d| {
            d.as_ref()
                .map(|d| (visible_realizations(&d.realization, None), export_filename(&d.budget)))
        }) else {
            return;
        };
        match export_csv(&rows, &filename) {
            Ok(()) => log::debug!("Exported {} realizations to {}", rows.len(), filename),
            Err(ExportError::NoData) => alert("No realization data."),
            Err(e) => {
                log::error!("Realization export failed: {}", e);
                alert(&e.to_string());
            }
        }
    };

    view! {
        <PageFrame page_id="a003_budget--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <A href="/budgets" attr:class="page__back">
                        {icon("arrow-left")}
                    </A>
                    <h1 class="page__title">
                        {move || detail.with(|d| {
                            d.as_ref()
                                .map(|d| format!("{} · {}", d.budget.division, month_label(&d.budget.month)))
                                .unwrap_or_else(|| "Budget".to_string())
                        })}
                    </h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(RealizationForm::default()))
                        disabled=Signal::derive(move || detail.with(|d| d.is_none()))
                    >
                        {icon("plus")}
                        " Add Realization"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| handle_export()>
                        {icon("download")}
                        " Export CSV"
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
                    let b = d.budget;
                    let achievement = b.achievement();
                    let remaining = b.remaining();
                    let remaining_variant = if remaining_is_negative(remaining) { "stat-card--error" } else { "" };
                    let achievement_class = detail_achievement_level(achievement).css_class();
                    view! {
                        <div class="stat-cards">
                            <StatCard label="Budget" icon_name="budgets" value=format_idr(b.budget_amount) />
                            <StatCard label="Realization" icon_name="target" value=format_idr(b.total_realization()) />
                            <StatCard label="Remaining" value=format_idr(remaining) variant=remaining_variant />
                            <StatCard
                                label="Achievement"
                                value=format!("{}%", format_percent_1(achievement))
                                variant=achievement_class
                            />
                        </div>
                    }
                })}

                <div class="chart-grid">
                    <div class="chart-panel">
                        <h3 class="chart-panel__title">"Realization by Category"</h3>
                        <DonutChart items=totals />
                    </div>
                    <div class="chart-panel">
                        <h3 class="chart-panel__title">"Category Totals"</h3>
                        <BarList items=totals format=format_idr />
                    </div>
                </div>

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <FilterSelect
                            label="Category"
                            options=display_options(BudgetCategory::all())
                            value=Signal::derive(move || category.get())
                            on_change=Callback::new(move |v: Option<String>| category.set(v))
                        />
                    </Flex>
                </div>

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=110.0>"Date"</TableHeaderCell>
                            <TableHeaderCell min_width=200.0>"Category"</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>"Amount"</TableHeaderCell>
                            <TableHeaderCell min_width=220.0>"Note"</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || rows.get()
                            key=|r| (r.id, r.amount.to_bits(), r.category.clone(), r.note.clone())
                            children=move |row| {
                                let for_edit = row.clone();
                                let for_delete = row.clone();
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{format_created_date(&row.created_at)}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{row.category.clone()}</TableCellLayout></TableCell>
                                        <TableCell class="table__cell--number">
                                            <TableCellLayout>{format_idr(row.amount)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout truncate=true>{row.note.clone()}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing.set(Some(RealizationForm::from_realization(&for_edit)))
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button appearance=ButtonAppearance::Subtle on_click=move |_| handle_delete(for_delete.clone())>
                                                    {icon("delete")}
                                                </Button>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                        <Show when=move || rows.with(|r| r.is_empty()) && !is_loading.get()>
                            <TableRow>
                                <TableCell attr:colspan="5" class="table__empty">
                                    <TableCellLayout>"No realization recorded."</TableCellLayout>
                                </TableCell>
                            </TableRow>
                        </Show>
                    </TableBody>
                </Table>

            </div>

            {move || {
                let id = budget_id.get()?;
                editing.get().map(|form| view! {
                    <RealizationModal
                        budget_id=id
                        form=form
                        on_saved=Callback::new(move |_| {
                            editing.set(None);
                            fetch();
                        })
                        on_cancel=Callback::new(move |_| editing.set(None))
                    />
                })
            }}
        </PageFrame>
    }
}
