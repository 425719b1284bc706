//! Project create/edit modal

use contracts::domain::a001_customer::Customer;
use contracts::domain::a002_project::ProjectForm;
use contracts::enums::{
    Division, LossReasonCategory, ProjectStatus, ProjectType, SalesStage, SphReleaseStatus,
    SphStatus,
};
use contracts::shared::error::ValidationError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_customer::api as customer_api;
use crate::domain::a002_project::api;
use crate::shared::components::form_select::FormSelect;
use crate::shared::date_utils::date_input_value;
use crate::shared::icons::icon;
use crate::shared::list_utils::display_options;
use crate::shared::modal_frame::ModalFrame;
use crate::system::auth::context::use_auth;

#[component]
pub fn ProjectFormModal(
    /// Project to edit, `None` to create
    project_id: Option<i64>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let auth_state = use_auth();
    let locked_division = auth_state
        .with_untracked(|s| s.locked_division())
        .and_then(|d| Division::from_code(&d));

    let form = RwSignal::new(ProjectForm::new(locked_division));
    let (customers, set_customers) = signal::<Vec<Customer>>(Vec::new());
    let error = RwSignal::new(Option::<ValidationError>::None);
    let (load_error, set_load_error) = signal::<Option<String>>(None);
    let (is_saving, set_is_saving) = signal(false);

    spawn_local(async move {
        match customer_api::fetch_customers().await {
            Ok(mut list) => {
                list.sort_by(|a, b| a.name.cmp(&b.name));
                set_customers.set(list);
            }
            Err(e) => {
                log::error!("Failed to fetch customers: {}", e);
                set_load_error.set(Some(e.to_string()));
            }
        }
    });

    if let Some(id) = project_id {
        spawn_local(async move {
            match api::fetch_project(id).await {
                Ok(detail) => form.set(ProjectForm::from_project(
                    &detail.project,
                    &detail.revenue_plans,
                    locked_division,
                )),
                Err(e) => {
                    log::error!("Failed to load project {}: {}", id, e);
                    set_load_error.set(Some(e.to_string()));
                }
            }
        });
    }

    let handle_save = move || {
        let dto = match form.with(|f| f.validate()) {
            Ok(dto) => dto,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };
        error.set(None);
        set_is_saving.set(true);
        spawn_local(async move {
            let result = match project_id {
                Some(id) => api::update_project(id, &dto).await,
                None => api::create_project(&dto).await,
            };
            set_is_saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("Failed to save project: {}", e);
                    set_load_error.set(Some(e.to_string()));
                }
            }
        });
    };

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

    let is_recurring = Memo::new(move |_| form.with(|f| f.project_type.is_recurring()));
    let row_count = Memo::new(move |_| form.with(|f| f.plan_rows.len()));
    let sph_number_error = move || {
        error.get() == Some(ValidationError::SphNumberRequired)
    };

    let title = if project_id.is_some() { "Edit Project" } else { "New Project" };

    view! {
        <ModalFrame title=title.to_string() on_close=on_cancel modal_class="modal--wide">
            <div class="modal-body">
                {move || load_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || {
                    error
                        .get()
                        .filter(|e| *e != ValidationError::SphNumberRequired)
                        .map(|e| view! { <div class="alert alert--error">{e.to_string()}</div> })
                }}

                <div class="form__grid">
                    <FormSelect
                        label="Customer *"
                        options=customer_options
                        value=Signal::derive(move || form.with(|f| f.customer_id.map(|c| c.to_string()).unwrap_or_default()))
                        on_change=Callback::new(move |v: String| form.update(|f| f.customer_id = v.parse().ok()))
                        placeholder="Select customer"
                    />
                    <FormSelect
                        label="Division"
                        options=display_options(Division::all())
                        value=Signal::derive(move || form.with(|f| f.locked_division.unwrap_or(f.division).to_string()))
                        on_change=Callback::new(move |v: String| {
                            if let Some(d) = Division::from_code(&v) {
                                form.update(|f| f.division = d);
                            }
                        })
                        disabled=Signal::derive(move || form.with(|f| f.division_locked()))
                    />
                    <FormSelect
                        label="Status"
                        options=display_options(ProjectStatus::all())
                        value=Signal::derive(move || form.with(|f| f.status.to_string()))
                        on_change=Callback::new(move |v: String| {
                            if let Some(s) = ProjectStatus::from_code(&v) {
                                form.update(|f| f.set_status(s));
                            }
                        })
                    />
                    <FormSelect
                        label="Project Type"
                        options=Signal::derive(move || form.with(|f| display_options(f.project_type_options())))
                        value=Signal::derive(move || form.with(|f| f.project_type.to_string()))
                        on_change=Callback::new(move |v: String| {
                            if let Some(t) = ProjectType::from_code(&v) {
                                form.update(|f| f.project_type = t);
                            }
                        })
                    />
                    <FormSelect
                        label="Sales Stage"
                        options=stage_options
                        value=Signal::derive(move || form.with(|f| f.sales_stage.number().to_string()))
                        on_change=Callback::new(move |v: String| {
                            if let Some(s) = v.parse::<i32>().ok().and_then(SalesStage::from_number) {
                                form.update(|f| f.sales_stage = s);
                            }
                        })
                    />
                </div>

                <div class="form__group">
                    <label class="form__label">"Description"</label>
                    <textarea
                        class="form__textarea"
                        rows="2"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </div>

                <h3 class="form__section-title">"SPH"</h3>
                <div class="form__grid">
                    <FormSelect
                        label="SPH Released"
                        options=display_options(SphReleaseStatus::all())
                        value=Signal::derive(move || form.with(|f| f.sph_release_status.to_string()))
                        on_change=Callback::new(move |v: String| {
                            form.update(|f| f.set_sph_release_status(SphReleaseStatus::normalize(&v)))
                        })
                    />
                    <div class="form__group">
                        <label class="form__label">"SPH Number"</label>
                        <input
                            type="text"
                            class="form__input"
                            class:form__input--error=sph_number_error
                            disabled=move || form.with(|f| f.sph_release_status == SphReleaseStatus::No)
                            prop:value=move || form.with(|f| f.sph_number.clone())
                            on:input=move |ev| form.update(|f| f.sph_number = event_target_value(&ev))
                        />
                        <Show when=sph_number_error>
                            <span class="form__error">{ValidationError::SphNumberRequired.to_string()}</span>
                        </Show>
                    </div>
                    <div class="form__group">
                        <label class="form__label">"SPH Release Date"</label>
                        <input
                            type="date"
                            class="form__input"
                            prop:value=move || form.with(|f| date_input_value(&f.sph_release_date))
                            on:input=move |ev| form.update(|f| f.sph_release_date = event_target_value(&ev))
                        />
                    </div>
                    <FormSelect
                        label="SPH Status"
                        options=display_options(SphStatus::all())
                        value=Signal::derive(move || form.with(|f| f.sph_status.map(|s| s.to_string()).unwrap_or_default()))
                        on_change=Callback::new(move |v: String| form.update(|f| f.set_sph_status(SphStatus::from_code(&v))))
                        placeholder="-"
                    />
                </div>

                <Show when=move || form.with(|f| f.requires_reason())>
                    <div class="form__grid">
                        <FormSelect
                            label="Reason Category *"
                            options=display_options(LossReasonCategory::all())
                            value=Signal::derive(move || form.with(|f| f.reason_category.map(|c| c.to_string()).unwrap_or_default()))
                            on_change=Callback::new(move |v: String| {
                                form.update(|f| f.set_reason_category(LossReasonCategory::from_code(&v)))
                            })
                            placeholder="Select reason"
                        />
                        <Show when=move || form.with(|f| f.reason_category == Some(LossReasonCategory::Other))>
                            <div class="form__group">
                                <label class="form__label">"Reason Note *"</label>
                                <textarea
                                    class="form__textarea"
                                    rows="2"
                                    prop:value=move || form.with(|f| f.reason_note.clone())
                                    on:input=move |ev| form.update(|f| f.reason_note = event_target_value(&ev))
                                ></textarea>
                            </div>
                        </Show>
                    </div>
                </Show>

                <h3 class="form__section-title">"Revenue Plan"</h3>
                <div class="plan-rows">
                    {move || {
                        let count = if is_recurring.get() { row_count.get() } else { row_count.get().min(1) };
                        (0..count).map(|i| view! { <PlanRowEditor form=form index=i /> }).collect_view()
                    }}
                </div>
                <Show when=move || is_recurring.get()>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| form.update(|f| f.add_plan_row())>
                        {icon("plus")}
                        " Add month"
                    </Button>
                    <Show when=move || form.with(|f| f.has_duplicate_months())>
                        <span class="form__error">{ValidationError::RevenuePlanDuplicateMonth.to_string()}</span>
                    </Show>
                </Show>
            </div>
            <div class="modal-footer">
                <Flex gap=FlexGap::Small justify=FlexJustify::End>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                        disabled=Signal::derive(move || is_saving.get())
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| handle_save()
                        disabled=Signal::derive(move || is_saving.get())
                    >
                        {icon("save")}
                        {move || if is_saving.get() { " Saving..." } else { " Save" }}
                    </Button>
                </Flex>
            </div>
        </ModalFrame>
    }
}

#[component]
fn PlanRowEditor(form: RwSignal<ProjectForm>, index: usize) -> impl IntoView {
    let row_error = move || {
        form.with(|f| f.row_errors().get(index).cloned().flatten())
    };
    let recurring = move || form.with(|f| f.project_type.is_recurring());

    view! {
        <div class="plan-row">
            <input
                type="month"
                class="form__input"
                prop:value=move || form.with(|f| f.plan_rows.get(index).map(|r| r.month.clone()).unwrap_or_default())
                on:input=move |ev| {
                    let v = event_target_value(&ev);
                    form.update(|f| {
                        if let Some(r) = f.plan_rows.get_mut(index) {
                            r.month = v;
                        }
                    })
                }
            />
            <input
                type="number"
                min="0"
                class="form__input"
                placeholder="Target revenue"
                prop:value=move || form.with(|f| f.plan_rows.get(index).map(|r| r.target_revenue.clone()).unwrap_or_default())
                on:input=move |ev| {
                    let v = event_target_value(&ev);
                    form.update(|f| {
                        if let Some(r) = f.plan_rows.get_mut(index) {
                            r.target_revenue = v;
                        }
                    })
                }
            />
            <Show when=move || recurring() && form.with(|f| f.plan_rows.len() > 1)>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| form.update(|f| f.remove_plan_row(index))>
                    {icon("delete")}
                </Button>
            </Show>
            {move || row_error().map(|e| view! { <span class="form__error">{e.to_string()}</span> })}
        </div>
    }
}
