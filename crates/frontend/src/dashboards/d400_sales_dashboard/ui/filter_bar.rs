use contracts::dashboards::d400_sales_dashboard::filters::{toggle_value, ALL};
use contracts::dashboards::d400_sales_dashboard::DashboardFilters;
use contracts::enums::{Division, ProjectStatus, ProjectType, SalesStage};
use contracts::shared::month::normalize_month;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Which multi-select list a checkbox group edits
#[derive(Clone, Copy, PartialEq)]
enum MultiField {
    Status,
    Stage,
    ProjectType,
}

fn values_of(filters: &DashboardFilters, field: MultiField) -> &Vec<String> {
    match field {
        MultiField::Status => &filters.status,
        MultiField::Stage => &filters.sales_stage,
        MultiField::ProjectType => &filters.project_type,
    }
}

fn values_of_mut(filters: &mut DashboardFilters, field: MultiField) -> &mut Vec<String> {
    match field {
        MultiField::Status => &mut filters.status,
        MultiField::Stage => &mut filters.sales_stage,
        MultiField::ProjectType => &mut filters.project_type,
    }
}

#[component]
fn CheckboxGroup(
    #[prop(into)] title: String,
    options: Vec<(String, String)>,
    filters: RwSignal<DashboardFilters>,
    field: MultiField,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let count = move || filters.with(|f| values_of(f, field).len());
    let all_values: Vec<String> = options.iter().map(|(v, _)| v.clone()).collect();
    let caption = title.clone();

    view! {
        <div class="checkbox-group">
            <button class="checkbox-group__trigger" on:click=move |_| open.update(|o| *o = !*o)>
                {move || {
                    let n = count();
                    if n > 0 { format!("{} ({})", caption, n) } else { caption.clone() }
                }}
            </button>
            <Show when=move || open.get()>
                <div class="checkbox-group__panel">
                    <div class="checkbox-group__title">{title.clone()}</div>
                    {options
                        .clone()
                        .into_iter()
                        .map(|(value, label)| {
                            let for_checked = value.clone();
                            view! {
                                <label class="checkbox-group__item">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || filters.with(|f| values_of(f, field).contains(&for_checked))
                                        on:change=move |_| filters.update(|f| toggle_value(values_of_mut(f, field), &value))
                                    />
                                    <span>{label}</span>
                                </label>
                            }
                        })
                        .collect_view()}
                    <div class="checkbox-group__actions">
                        <button
                            class="checkbox-group__action"
                            on:click={
                                let all_values = all_values.clone();
                                move |_| filters.update(|f| *values_of_mut(f, field) = all_values.clone())
                            }
                        >
                            "Select all"
                        </button>
                        <button
                            class="checkbox-group__action"
                            on:click=move |_| filters.update(|f| values_of_mut(f, field).clear())
                        >
                            "Clear"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Filter bar of the sales dashboard. Every change triggers a refetch.
#[component]
pub fn FilterBar(
    filters: RwSignal<DashboardFilters>,
    /// Customer names offered by the customer select
    #[prop(into)]
    customers: Signal<Vec<String>>,
) -> impl IntoView {
    let status_options = ProjectStatus::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.code().to_string()))
        .collect::<Vec<_>>();
    let stage_options = SalesStage::all()
        .into_iter()
        .map(|s| (s.number().to_string(), s.display()))
        .collect::<Vec<_>>();
    let type_options = ProjectType::all()
        .into_iter()
        .map(|t| (t.code().to_string(), t.code().to_string()))
        .collect::<Vec<_>>();

    view! {
        <div class="dashboard-filters">
            <div class="dashboard-filters__summary">
                <span>{move || format!("Status: {}", filters.with(|f| f.status_label()))}</span>
                <Show when=move || filters.with(|f| f.is_default_status())>
                    <span class="badge">"Default: Prospect + Carry Over"</span>
                </Show>
            </div>
            <Flex gap=FlexGap::Small align=FlexAlign::Center style="flex-wrap: wrap;">
                <CheckboxGroup title="Status" options=status_options filters=filters field=MultiField::Status />
                <CheckboxGroup title="Sales Stage" options=stage_options filters=filters field=MultiField::Stage />
                <CheckboxGroup title="Project Type" options=type_options filters=filters field=MultiField::ProjectType />
                <select
                    class="form__select"
                    prop:value=move || filters.with(|f| f.division.clone())
                    on:change=move |ev| {
                        let v = event_target_value(&ev);
                        filters.update(|f| f.division = v);
                    }
                >
                    <option value=ALL>"All Division"</option>
                    {Division::all()
                        .into_iter()
                        .map(|d| view! { <option value=d.code()>{d.code()}</option> })
                        .collect_view()}
                </select>
                <select
                    class="form__select"
                    prop:value=move || filters.with(|f| f.customer.clone())
                    on:change=move |ev| {
                        let v = event_target_value(&ev);
                        filters.update(|f| f.customer = v);
                    }
                >
                    <option value=ALL>"All Customers"</option>
                    {move || {
                        let selected = filters.with(|f| f.customer.clone());
                        customers
                            .get()
                            .into_iter()
                            .map(|c| {
                                let is_selected = c == selected;
                                view! { <option value=c.clone() selected=is_selected>{c.clone()}</option> }
                            })
                            .collect_view()
                    }}
                </select>
                <input
                    type="month"
                    class="form__input"
                    prop:value=move || filters.with(|f| f.from_month.clone())
                    on:change=move |ev| {
                        let v = normalize_month(&event_target_value(&ev)).unwrap_or_default();
                        filters.update(|f| f.from_month = v);
                    }
                />
                <span>"to"</span>
                <input
                    type="month"
                    class="form__input"
                    prop:value=move || filters.with(|f| f.to_month.clone())
                    on:change=move |ev| {
                        let v = normalize_month(&event_target_value(&ev)).unwrap_or_default();
                        filters.update(|f| f.to_month = v);
                    }
                />
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| filters.update(|f| f.reset())>
                    {icon("filter")}
                    " Reset"
                </Button>
            </Flex>
        </div>
    }
}
