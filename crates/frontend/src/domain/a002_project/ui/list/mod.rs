use contracts::domain::a001_customer::Customer;
use contracts::domain::a002_project::list_filter::{export_request, new_list_state, sph_status_counts};
use contracts::domain::a002_project::{CardMode, ExecutionFilter, Project, ProjectSummary};
use contracts::domain::common::AggregateRoot;
use contracts::enums::{Division, ProjectStatus, ProjectType, SalesStage, SphReleaseStatus, SphStatus};
use contracts::shared::format::{format_idr, format_rupiah};
use contracts::shared::list_query::Page;
use contracts::shared::month::{current_year, month_label, normalize_month};
use contracts::shared::request_seq::RequestSequencer;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::domain::a001_customer::api as customer_api;
use crate::domain::a002_project::api;
use crate::domain::a002_project::ui::form::ProjectFormModal;
use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatCard;
use crate::shared::config::client_config;
use crate::shared::export::{alert, confirm, save_bytes};
use crate::shared::icons::icon;
use crate::shared::list_utils::{display_options, SortableHeaderCell};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

#[component]
pub fn ProjectList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Project>>(Vec::new());
    let (summary, set_summary) = signal(ProjectSummary::default());
    let (customers, set_customers) = signal::<Vec<Customer>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(false);
    let (is_exporting, set_is_exporting) = signal(false);
    let state = RwSignal::new(new_list_state(client_config().lists.page_size));
    let search = RwSignal::new(String::new());
    let sequencer = StoredValue::new(RequestSequencer::new());
    let navigate = use_navigate();

    // Modal: Some(None) creates, Some(Some(id)) edits
    let editing = RwSignal::new(Option::<Option<i64>>::None);

    let fetch = move || {
        let seq = sequencer.get_value();
        let tag = seq.issue();
        set_is_loading.set(true);
        spawn_local(async move {
            let projects = api::fetch_projects().await;
            let totals = api::fetch_summary().await;
            if !seq.is_current(tag) {
                log::debug!("Dropping stale projects response {:?}", tag);
                return;
            }
            match projects {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to fetch projects: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            match totals {
                Ok(s) => set_summary.set(s),
                Err(e) => log::warn!("Failed to fetch project summary: {}", e),
            }
            set_is_loading.set(false);
        });
    };

    spawn_local(async move {
        match customer_api::fetch_customers().await {
            Ok(mut list) => {
                list.sort_by(|a, b| a.name.cmp(&b.name));
                set_customers.set(list);
            }
            Err(e) => log::warn!("Failed to fetch customers: {}", e),
        }
    });

    Effect::new(move |_| {
        let q = search.get();
        state.update(|s| s.set_search(q));
    });

    let page: Memo<Page<Project>> = Memo::new(move |_| {
        state.with(|s| items.with(|items| s.apply(items, |p, f| f.matches(p))))
    });
    let sph_counts = Memo::new(move |_| state.with(|s| items.with(|items| sph_status_counts(items, s))));

    let card_mode = move || state.with(|s| s.filter.card_mode);
    let select_card = move |mode: CardMode| {
        state.update(|s| s.update_filter(|f| f.apply_card(mode)));
    };

    let handle_delete = move |project: Project| {
        if !confirm(&format!("Delete project \"{}\"?", project.project_code)) {
            return;
        }
        spawn_local(async move {
            match api::delete_project(project.id).await {
                Ok(()) => fetch(),
                Err(e) => {
                    log::error!("Failed to delete project {}: {}", project.id, e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let handle_export = move || {
        let (path, filename) = state.with_untracked(|s| export_request(s, current_year()));
        set_is_exporting.set(true);
        spawn_local(async move {
            match api::export_csv(&path).await {
                Ok(bytes) => {
                    if let Err(e) = save_bytes(&bytes, &filename) {
                        log::error!("Failed to save {}: {}", filename, e);
                        alert(&format!("Export failed: {}", e));
                    }
                }
                Err(e) => {
                    log::error!("Project export failed: {}", e);
                    alert(&format!("Export failed: {}", e));
                }
            }
            set_is_exporting.set(false);
        });
    };

    let on_sort = Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)));
    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_direction = Signal::derive(move || state.with(|s| s.sort_direction));

    let customer_options = Signal::derive(move || {
        customers
            .get()
            .into_iter()
            .map(|c| (c.id.to_string(), c.name))
            .collect::<Vec<_>>()
    });
    let stage_options = SalesStage::all()
        .into_iter()
        .map(|s| (s.number().to_string(), s.display()))
        .collect::<Vec<_>>();
    let execution_options = vec![
        (ExecutionFilter::InExecution.code().to_string(), "In Execution".to_string()),
        (ExecutionFilter::Completed.code().to_string(), "Completed".to_string()),
    ];

    fetch();

    view! {
        <PageFrame page_id="a002_project--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("projects")}
                    <h1 class="page__title">{Project::list_name()}</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                        {icon("plus")}
                        " New "
                        {Project::element_name()}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| handle_export()
                        disabled=Signal::derive(move || is_exporting.get())
                    >
                        {icon("download")}
                        {move || if is_exporting.get() { " Exporting..." } else { " Export CSV" }}
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
                <div class="stat-cards">
                    <StatCard
                        label="All Projects"
                        icon_name="projects"
                        value=Signal::derive(move || summary.get().total_projects.to_string())
                        active=Signal::derive(move || card_mode() == CardMode::All)
                        on_click=Callback::new(move |_| select_card(CardMode::All))
                    />
                    <StatCard
                        label="Pipeline"
                        icon_name="trending-up"
                        value=Signal::derive(move || summary.get().prospect_projects.to_string())
                        active=Signal::derive(move || card_mode() == CardMode::Pipeline)
                        on_click=Callback::new(move |_| select_card(CardMode::Pipeline))
                    />
                    <StatCard
                        label="Closing"
                        icon_name="target"
                        value=Signal::derive(move || summary.get().closing_projects.to_string())
                        active=Signal::derive(move || card_mode() == CardMode::Closing)
                        on_click=Callback::new(move |_| select_card(CardMode::Closing))
                    />
                    <StatCard
                        label="In Execution"
                        value=Signal::derive(move || summary.get().in_execution_projects.to_string())
                        variant="stat-card--warning"
                        active=Signal::derive(move || card_mode() == CardMode::InExecution)
                        on_click=Callback::new(move |_| select_card(CardMode::InExecution))
                    />
                    <StatCard
                        label="Completed"
                        value=Signal::derive(move || summary.get().completed_projects.to_string())
                        variant="stat-card--success"
                        active=Signal::derive(move || card_mode() == CardMode::Completed)
                        on_click=Callback::new(move |_| select_card(CardMode::Completed))
                    />
                    <StatCard
                        label="Total Target Revenue"
                        value=Signal::derive(move || format_rupiah(summary.get().total_target_revenue))
                    />
                </div>

                <div class="stat-cards stat-cards--compact">
                    {move || {
                        let active = state.with(|s| s.filter.sph_status);
                        sph_counts
                            .get()
                            .into_iter()
                            .map(|(status, count)| {
                                view! {
                                    <StatCard
                                        label=format!("SPH {}", status)
                                        value=count.to_string()
                                        active=active == Some(status)
                                        on_click=Callback::new(move |_| {
                                            state.update(|s| s.update_filter(|f| f.toggle_sph_status(status)))
                                        })
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End style="flex-wrap: wrap;">
                        <div class="form__group">
                            <Label>"Search"</Label>
                            <Input value=search placeholder="Project code or description" />
                        </div>
                        <FilterSelect
                            label="Division"
                            options=display_options(Division::all())
                            value=Signal::derive(move || state.with(|s| s.filter.division.clone()))
                            on_change=Callback::new(move |v: Option<String>| state.update(|s| s.update_filter(move |f| f.division = v)))
                        />
                        <FilterSelect
                            label="Customer"
                            options=customer_options
                            value=Signal::derive(move || state.with(|s| s.filter.customer_id.map(|c| c.to_string())))
                            on_change=Callback::new(move |v: Option<String>| {
                                state.update(|s| s.update_filter(move |f| f.customer_id = v.and_then(|c| c.parse().ok())))
                            })
                        />
                        <FilterSelect
                            label="Status"
                            options=display_options(ProjectStatus::all())
                            value=Signal::derive(move || state.with(|s| s.filter.status.clone()))
                            on_change=Callback::new(move |v: Option<String>| state.update(|s| s.update_filter(move |f| f.status = v)))
                        />
                        <FilterSelect
                            label="SPH Released"
                            options=display_options(SphReleaseStatus::all())
                            value=Signal::derive(move || state.with(|s| s.filter.sph_released.map(|r| r.to_string())))
                            on_change=Callback::new(move |v: Option<String>| {
                                state.update(|s| s.update_filter(move |f| {
                                    f.sph_released = v.as_deref().map(SphReleaseStatus::normalize)
                                }))
                            })
                        />
                        <FilterSelect
                            label="SPH Status"
                            options=display_options(SphStatus::all())
                            value=Signal::derive(move || state.with(|s| s.filter.sph_status.map(|r| r.to_string())))
                            on_change=Callback::new(move |v: Option<String>| {
                                state.update(|s| s.update_filter(move |f| {
                                    f.sph_status = v.as_deref().and_then(SphStatus::from_code)
                                }))
                            })
                        />
                        <FilterSelect
                            label="Project Type"
                            options=display_options(ProjectType::all())
                            value=Signal::derive(move || state.with(|s| s.filter.project_type.clone()))
                            on_change=Callback::new(move |v: Option<String>| state.update(|s| s.update_filter(move |f| f.project_type = v)))
                        />
                        <FilterSelect
                            label="Sales Stage"
                            options=stage_options
                            value=Signal::derive(move || state.with(|s| s.filter.sales_stage.map(|n| n.to_string())))
                            on_change=Callback::new(move |v: Option<String>| {
                                state.update(|s| s.update_filter(move |f| f.sales_stage = v.and_then(|n| n.parse().ok())))
                            })
                        />
                        <FilterSelect
                            label="Execution"
                            options=execution_options
                            value=Signal::derive(move || state.with(|s| {
                                (s.filter.execution != ExecutionFilter::All)
                                    .then(|| s.filter.execution.code().to_string())
                            }))
                            on_change=Callback::new(move |v: Option<String>| {
                                state.update(|s| s.update_filter(move |f| {
                                    f.execution = match v.as_deref() {
                                        Some("in_execution") => ExecutionFilter::InExecution,
                                        Some("completed") => ExecutionFilter::Completed,
                                        _ => ExecutionFilter::All,
                                    }
                                }))
                            })
                        />
                        <div class="form__group">
                            <Label>"From month"</Label>
                            <input
                                type="month"
                                class="form__input"
                                prop:value=move || state.with(|s| s.filter.months.start.clone().unwrap_or_default())
                                on:change=move |ev| {
                                    let v = normalize_month(&event_target_value(&ev));
                                    state.update(|s| s.update_filter(move |f| f.months.start = v));
                                }
                            />
                        </div>
                        <div class="form__group">
                            <Label>"To month"</Label>
                            <input
                                type="month"
                                class="form__input"
                                prop:value=move || state.with(|s| s.filter.months.end.clone().unwrap_or_default())
                                on:change=move |ev| {
                                    let v = normalize_month(&event_target_value(&ev));
                                    state.update(|s| s.update_filter(move |f| f.months.end = v));
                                }
                            />
                        </div>
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

                <Table>
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="Code" sort_field="project_code" current_sort_field=sort_field sort_direction=sort_direction on_sort=on_sort min_width=130.0 />
                            <TableHeaderCell min_width=220.0>"Description"</TableHeaderCell>
                            <TableHeaderCell min_width=160.0>"Customer"</TableHeaderCell>
                            <SortableHeaderCell label="Division" sort_field="division" current_sort_field=sort_field sort_direction=sort_direction on_sort=on_sort min_width=160.0 />
                            <SortableHeaderCell label="Status" sort_field="status" current_sort_field=sort_field sort_direction=sort_direction on_sort=on_sort />
                            <SortableHeaderCell label="Type" sort_field="project_type" current_sort_field=sort_field sort_direction=sort_direction on_sort=on_sort min_width=130.0 />
                            <TableHeaderCell min_width=150.0>"Stage"</TableHeaderCell>
                            <TableHeaderCell>"Period"</TableHeaderCell>
                            <SortableHeaderCell label="Target" sort_field="total_revenue" current_sort_field=sort_field sort_direction=sort_direction on_sort=on_sort min_width=130.0 />
                            <SortableHeaderCell label="Realization" sort_field="total_realization" current_sort_field=sort_field sort_direction=sort_direction on_sort=on_sort min_width=130.0 />
                            <TableHeaderCell min_width=120.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || page.get().items
                            key=|p| (p.id, p.project_code.clone(), p.total_realization.map(f64::to_bits), p.sales_stage)
                            children=move |project| {
                                let id = project.id;
                                let for_delete = project.clone();
                                let navigate = navigate.clone();
                                let stage = project
                                    .stage()
                                    .map(|s| s.display())
                                    .unwrap_or_else(|| "-".to_string());
                                let period = format!(
                                    "{} - {}",
                                    project.start_month.as_deref().map(month_label).unwrap_or_else(|| "-".to_string()),
                                    project.end_month.as_deref().map(month_label).unwrap_or_else(|| "-".to_string()),
                                );
                                let project_code = project.project_code.clone();
                                let description = project.description.clone();
                                let customer_label = project.customer_label().to_string();
                                let division = project.division.clone();
                                let status = project.status.clone();
                                let project_type = project.project_type.clone();
                                let total_revenue = format_idr(project.total_revenue.unwrap_or(0.0));
                                let total_realization = format_idr(project.total_realization.unwrap_or(0.0));
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <a
                                                    href=format!("/projects/{}", id)
                                                    class="table__link"
                                                    on:click=move |e| {
                                                        e.prevent_default();
                                                        navigate(&format!("/projects/{}", id), Default::default());
                                                    }
                                                >
                                                    {project_code}
                                                </a>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout truncate=true>{description}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout truncate=true>{customer_label}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{division}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{status}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{project_type}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{stage}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{period}</TableCellLayout></TableCell>
                                        <TableCell class="table__cell--number">
                                            <TableCellLayout>{total_revenue}</TableCellLayout>
                                        </TableCell>
                                        <TableCell class="table__cell--number">
                                            <TableCellLayout>{total_realization}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Button appearance=ButtonAppearance::Subtle on_click=move |_| editing.set(Some(Some(id)))>
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
                                <TableCell attr:colspan="11" class="table__empty">
                                    <TableCellLayout>"No projects found."</TableCellLayout>
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

            {move || editing.get().map(|project_id| view! {
                <ProjectFormModal
                    project_id=project_id
                    on_saved=Callback::new(move |_| {
                        editing.set(None);
                        fetch();
                    })
                    on_cancel=Callback::new(move |_| editing.set(None))
                />
            })}
        </PageFrame>
    }
}
