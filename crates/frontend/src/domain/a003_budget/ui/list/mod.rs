use contracts::domain::a003_budget::achievement::list_achievement_level;
use contracts::domain::a003_budget::list_filter::{filtered, new_list_state, year_options};
use contracts::domain::a003_budget::{Budget, TrendPoint};
use contracts::domain::common::AggregateRoot;
use contracts::enums::Division;
use contracts::shared::csv_export::ExportError;
use contracts::shared::format::{format_idr, format_percent_1};
use contracts::shared::list_query::Page;
use contracts::shared::month::month_label;
use contracts::shared::request_seq::RequestSequencer;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::domain::a003_budget::api;
use crate::domain::a003_budget::ui::form::{BudgetCreateModal, BudgetEditModal};
use crate::shared::charts::{ChartSeries, LineChart, PALETTE};
use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::client_config;
use crate::shared::export::{alert, confirm, export_csv};
use crate::shared::icons::icon;
use crate::shared::list_utils::display_options;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

#[derive(Clone)]
enum BudgetModal {
    Create,
    Edit(Budget),
}

#[component]
pub fn BudgetList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Budget>>(Vec::new());
    let (trend, set_trend) = signal::<Vec<TrendPoint>>(Vec::new());
    let (trend_error, set_trend_error) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(false);
    let state = RwSignal::new(new_list_state(client_config().lists.page_size));
    let search = RwSignal::new(String::new());
    let trend_sequencer = StoredValue::new(RequestSequencer::new());
    let modal = RwSignal::new(Option::<BudgetModal>::None);

    let fetch = move || {
        set_is_loading.set(true);
        spawn_local(async move {
            match api::fetch_budgets().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to fetch budgets: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_is_loading.set(false);
        });
    };

    // Trend follows the division/year filter; older responses are discarded
    let trend_path = Memo::new(move |_| state.with(|s| s.filter.trend_path()));
    Effect::new(move |_| {
        let seq = trend_sequencer.get_value();
        let tag = seq.issue();
        let Some(path) = trend_path.get() else {
            set_trend.set(Vec::new());
            set_trend_error.set(None);
            return;
        };
        spawn_local(async move {
            let result = api::fetch_trend(&path).await;
            if !seq.is_current(tag) {
                log::debug!("Dropping stale budget trend response {:?}", tag);
                return;
            }
            match result {
                Ok(points) => {
                    set_trend.set(points);
                    set_trend_error.set(None);
                }
                Err(e) => {
                    log::warn!("Failed to fetch budget trend: {}", e);
                    set_trend.set(Vec::new());
                    set_trend_error.set(Some(e.to_string()));
                }
            }
        });
    });

    Effect::new(move |_| {
        let q = search.get();
        state.update(|s| s.set_search(q));
    });

    let page: Memo<Page<Budget>> = Memo::new(move |_| {
        state.with(|s| items.with(|items| s.apply(items, |b, f| f.matches(b))))
    });
    let years = Signal::derive(move || {
        items.with(|items| {
            year_options(items)
                .into_iter()
                .map(|y| (y.clone(), y))
                .collect::<Vec<_>>()
        })
    });

    let trend_labels = Signal::derive(move || {
        trend.with(|t| t.iter().map(|p| month_label(&p.month)).collect::<Vec<_>>())
    });
    let trend_series = Signal::derive(move || {
        trend.with(|t| {
            vec![
                ChartSeries::new("Budget", PALETTE[0], t.iter().map(|p| p.budget).collect()),
                ChartSeries::new("Realization", PALETTE[1], t.iter().map(|p| p.realization).collect()),
            ]
        })
    });

    let handle_delete = move |budget: Budget| {
        let message = format!(
            "Delete the {} budget for {}?",
            budget.division,
            month_label(&budget.month)
        );
        if !confirm(&message) {
            return;
        }
        spawn_local(async move {
            match api::delete_budget(budget.id).await {
                Ok(()) => fetch(),
                Err(e) => {
                    log::error!("Failed to delete budget {}: {}", budget.id, e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let handle_export = move || {
        let (rows, filename) = state.with_untracked(|s| {
            (
                items.with_untracked(|items| filtered(s, items)),
                s.filter.export_filename(),
            )
        });
        match export_csv(&rows, &filename) {
            Ok(()) => log::debug!("Exported {} budgets to {}", rows.len(), filename),
            Err(ExportError::NoData) => alert("No data to export."),
            Err(e) => {
                log::error!("Budget export failed: {}", e);
                alert(&e.to_string());
            }
        }
    };

    fetch();

    view! {
        <PageFrame page_id="a003_budget--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("budgets")}
                    <h1 class="page__title">{Budget::list_name()}</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| modal.set(Some(BudgetModal::Create))>
                        {icon("plus")}
                        " Add Budget"
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
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End style="flex-wrap: wrap;">
                        <div class="form__group">
                            <Label>"Search"</Label>
                            <Input value=search placeholder="Division or month" />
                        </div>
                        <FilterSelect
                            label="Division"
                            options=display_options(Division::all())
                            value=Signal::derive(move || state.with(|s| s.filter.division.clone()))
                            on_change=Callback::new(move |v: Option<String>| state.update(|s| s.update_filter(move |f| f.division = v)))
                        />
                        <FilterSelect
                            label="Year"
                            options=years
                            value=Signal::derive(move || state.with(|s| s.filter.year.clone()))
                            on_change=Callback::new(move |v: Option<String>| state.update(|s| s.update_filter(move |f| f.year = v)))
                        />
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| {
                                search.set(String::new());
                                state.update(|s| s.reset_filters());
                            }
                        >
                            {icon("filter")}
                            " Reset"
                        </Button>
                    </Flex>
                </div>

                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                {move || {
                    if trend_path.get().is_none() {
                        return view! {
                            <div class="chart-panel chart-panel--hint">
                                "Choose a division and a year to see the monthly trend."
                            </div>
                        }
                        .into_any();
                    }
                    view! {
                        <div class="chart-panel">
                            <h3 class="chart-panel__title">"Budget vs Realization"</h3>
                            {move || trend_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                            <LineChart labels=trend_labels series=trend_series />
                        </div>
                    }
                    .into_any()
                }}

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=120.0>"Month"</TableHeaderCell>
                            <TableHeaderCell min_width=160.0>"Division"</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>"Budget"</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>"Realization"</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>"Remaining"</TableHeaderCell>
                            <TableHeaderCell>"Achievement"</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || page.get().items
                            key=|b| (b.id, b.budget_amount.to_bits(), b.total_realization().to_bits())
                            children=move |budget| {
                                let id = budget.id;
                                let for_edit = budget.clone();
                                let for_delete = budget.clone();
                                let achievement = budget.achievement();
                                let level = list_achievement_level(achievement);
                                let month = month_label(&budget.month);
                                let division = budget.division.clone();
                                let budget_amount = format_idr(budget.budget_amount);
                                let total_realization = format_idr(budget.total_realization());
                                let remaining = format_idr(budget.remaining());
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <A href=format!("/budgets/{}", id) attr:class="table__link">
                                                    {month}
                                                </A>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{division}</TableCellLayout></TableCell>
                                        <TableCell class="table__cell--number">
                                            <TableCellLayout>{budget_amount}</TableCellLayout>
                                        </TableCell>
                                        <TableCell class="table__cell--number">
                                            <TableCellLayout>{total_realization}</TableCellLayout>
                                        </TableCell>
                                        <TableCell class="table__cell--number">
                                            <TableCellLayout>{remaining}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class=level.css_class()>{format!("{}%", format_percent_1(achievement))}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| modal.set(Some(BudgetModal::Edit(for_edit.clone())))
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
                        <Show when=move || page.with(|p| p.total_count == 0) && !is_loading.get()>
                            <TableRow>
                                <TableCell attr:colspan="7" class="table__empty">
                                    <TableCellLayout>"No budgets found."</TableCellLayout>
                                </TableCell>
                            </TableRow>
                        </Show>
                    </TableBody>
                </Table>

                <PaginationControls
                    current_page=Signal::derive(move || page.with(|p| p.page))
                    total_pages=Signal::derive(move || page.with(|p| p.total_pages))
                    total_count=Signal::derive(move || page.with(|p| p.total_count))
                    on_page_change=Callback::new(move |p| state.update(|s| s.set_page(p)))
                />
            </div>

            {move || {
                let on_saved = Callback::new(move |_| {
                    modal.set(None);
                    fetch();
                });
                let on_cancel = Callback::new(move |_| modal.set(None));
                modal.get().map(|m| match m {
                    BudgetModal::Create => view! {
                        <BudgetCreateModal on_saved=on_saved on_cancel=on_cancel />
                    }
                    .into_any(),
                    BudgetModal::Edit(budget) => view! {
                        <BudgetEditModal budget=budget on_saved=on_saved on_cancel=on_cancel />
                    }
                    .into_any(),
                })
            }}
        </PageFrame>
    }
}
