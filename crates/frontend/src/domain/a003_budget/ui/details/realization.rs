use contracts::domain::a003_budget::RealizationForm;
use contracts::enums::BudgetCategory;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_budget::api;
use crate::shared::components::form_select::FormSelect;
use crate::shared::icons::icon;
use crate::shared::list_utils::display_options;
use crate::shared::modal_frame::ModalFrame;

/// Add or edit one realization row of a budget
#[component]
pub fn RealizationModal(
    budget_id: i64,
    form: RealizationForm,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let title = if form.is_edit() { "Edit Realization" } else { "Add Realization" };
    let realization_id = form.realization_id;
    let category = RwSignal::new(form.category);
    let amount = RwSignal::new(form.amount.clone());
    let note = RwSignal::new(form.note.clone());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_saving, set_is_saving) = signal(false);

    let handle_save = move || {
        let current = RealizationForm {
            realization_id,
            category: category.get_untracked(),
            amount: amount.get_untracked(),
            note: note.get_untracked(),
        };
        let dto = match current.validate() {
            Ok(dto) => dto,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_is_saving.set(true);
        spawn_local(async move {
            let result = match realization_id {
                Some(rid) => api::update_realization(budget_id, rid, &dto).await,
                None => api::create_realization(budget_id, &dto).await,
            };
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("Failed to save realization of budget {}: {}", budget_id, e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_is_saving.set(false);
        });
    };

    view! {
        <ModalFrame title=title.to_string() on_close=on_cancel>
            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <FormSelect
                    label="Category *"
                    options=display_options(BudgetCategory::all())
                    value=Signal::derive(move || category.get().map(|c| c.code().to_string()).unwrap_or_default())
                    on_change=Callback::new(move |v: String| category.set(BudgetCategory::from_code(&v)))
                    placeholder="Select category"
                />
                <div class="form__group">
                    <Label>"Amount (IDR) *"</Label>
                    <Input value=amount input_type=InputType::Number placeholder="0" />
                </div>
                <div class="form__group">
                    <Label>"Note"</Label>
                    <Input value=note placeholder="Optional" />
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
