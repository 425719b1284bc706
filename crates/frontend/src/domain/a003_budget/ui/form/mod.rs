//! Add and edit budget modals

use contracts::domain::a003_budget::{Budget, BudgetCreateForm, BudgetEditForm};
use contracts::enums::Division;
use contracts::shared::format::format_idr;
use contracts::shared::month::{current_month, month_label, normalize_month};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_budget::api;
use crate::shared::components::form_select::FormSelect;
use crate::shared::icons::icon;
use crate::shared::list_utils::display_options;
use crate::shared::modal_frame::ModalFrame;
use crate::system::auth::context::use_auth;

#[component]
pub fn BudgetCreateModal(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let auth_state = use_auth();
    let form = RwSignal::new(BudgetCreateForm {
        month: current_month(),
        ..BudgetCreateForm::new(auth_state.with_untracked(|a| a.locked_division()))
    });
    let amount = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_saving, set_is_saving) = signal(false);

    let handle_save = move || {
        form.update(|f| f.amount = amount.get_untracked());
        let dto = match form.with_untracked(|f| f.validate()) {
            Ok(dto) => dto,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_is_saving.set(true);
        spawn_local(async move {
            match api::create_budget(&dto).await {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("Failed to create budget: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_is_saving.set(false);
        });
    };

    view! {
        <ModalFrame title="Add Budget".to_string() on_close=on_cancel>
            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <FormSelect
                    label="Division *"
                    options=display_options(Division::all())
                    value=Signal::derive(move || form.with(|f| f.division.clone()))
                    on_change=Callback::new(move |v: String| form.update(|f| f.division = v))
                    placeholder="Select division"
                    disabled=Signal::derive(move || form.with(|f| f.division_locked()))
                />
                <div class="form__group">
                    <label class="form__label">"Month *"</label>
                    <input
                        type="month"
                        class="form__input"
                        prop:value=move || form.with(|f| f.month.clone())
                        on:change=move |ev| {
                            let v = normalize_month(&event_target_value(&ev)).unwrap_or_default();
                            form.update(|f| f.month = v);
                        }
                    />
                </div>
                <div class="form__group">
                    <Label>"Budget Amount (IDR) *"</Label>
                    <Input value=amount input_type=InputType::Number placeholder="0" />
                </div>
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
pub fn BudgetEditModal(
    budget: Budget,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = StoredValue::new(BudgetEditForm::from_budget(&budget));
    let amount = RwSignal::new(form.with_value(|f| f.amount.clone()));
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_saving, set_is_saving) = signal(false);
    let title = format!("Edit Budget: {} {}", budget.division, month_label(&budget.month));

    let handle_save = move || {
        form.update_value(|f| f.amount = amount.get_untracked());
        let (budget_id, result) = form.with_value(|f| (f.budget_id, f.validate()));
        let dto = match result {
            Ok(dto) => dto,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_is_saving.set(true);
        spawn_local(async move {
            match api::update_budget(budget_id, &dto).await {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("Failed to update budget {}: {}", budget_id, e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_is_saving.set(false);
        });
    };

    view! {
        <ModalFrame title=title on_close=on_cancel>
            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="form__group">
                    <Label>"Budget Amount (IDR) *"</Label>
                    <Input value=amount input_type=InputType::Number />
                    <span class="form__hint">
                        {format!("Realized so far: {}", format_idr(form.with_value(|f| f.total_realization)))}
                    </span>
                </div>
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
