use contracts::domain::a002_project::revenue::apply_realization_edit;
use contracts::domain::a002_project::{ProjectDetail, RealizationEdit, RevenuePlanItem};
use contracts::shared::error::ValidationError;
use contracts::shared::format::{format_idr, parse_amount};
use contracts::shared::month::month_label;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_project::api;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;

/// Edit the realization of one plan month, optionally booking it to another month.
///
/// After the PUT succeeds the nested plan is patched locally and `on_reconcile`
/// asks the page to re-fetch the project.
#[component]
pub fn RealizationModal(
    project_id: i64,
    item: RevenuePlanItem,
    detail: RwSignal<Option<ProjectDetail>>,
    on_close: Callback<()>,
    on_reconcile: Callback<()>,
) -> impl IntoView {
    let source_month = item.month.clone();
    let amount = RwSignal::new(if item.target_realization > 0.0 {
        item.target_realization.to_string()
    } else {
        String::new()
    });
    let apply_month = RwSignal::new(item.month.clone());
    let move_enabled = RwSignal::new(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_saving, set_is_saving) = signal(false);

    // unchecking the move puts the booking back on the source month
    {
        let source_month = source_month.clone();
        Effect::new(move |_| {
            if !move_enabled.get() {
                apply_month.set(source_month.clone());
            }
        });
    }

    let handle_save = {
        let source_month = source_month.clone();
        move || {
            let Some(realization) = parse_amount(&amount.get()).filter(|v| *v >= 0.0) else {
                set_error.set(Some(ValidationError::NegativeRealization.to_string()));
                return;
            };
            let edit = RealizationEdit {
                source_month: source_month.clone(),
                realization,
                apply_month: apply_month.get(),
                move_enabled: move_enabled.get(),
            };
            set_error.set(None);
            set_is_saving.set(true);
            spawn_local(async move {
                let result = api::update_realization(project_id, &edit.source_month, &edit.request()).await;
                set_is_saving.set(false);
                match result {
                    Ok(()) => {
                        detail.update(|d| {
                            if let Some(d) = d.as_mut() {
                                apply_realization_edit(&mut d.revenue_plans, &edit);
                            }
                        });
                        on_close.run(());
                        log::debug!("Realization saved for {}, reconciling project {}", edit.source_month, project_id);
                        on_reconcile.run(());
                    }
                    Err(e) => {
                        log::error!("Failed to update realization: {}", e);
                        set_error.set(Some(e.to_string()));
                    }
                }
            });
        }
    };

    let title = format!("Realization - {}", month_label(&source_month));

    view! {
        <ModalFrame title=title on_close=on_close>
            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <p class="text--muted">{format!("Target: Rp {}", format_idr(item.target_revenue))}</p>

                <div class="form__group">
                    <Label>"Realization"</Label>
                    <Input value=amount input_type=InputType::Number placeholder="0" />
                </div>
                <div class="form__group">
                    <Checkbox checked=move_enabled label="Book to another month" />
                </div>
                <Show when=move || move_enabled.get()>
                    <div class="form__group">
                        <label class="form__label">"Apply to month"</label>
                        <input
                            type="month"
                            class="form__input"
                            prop:value=move || apply_month.get()
                            on:input=move |ev| apply_month.set(event_target_value(&ev))
                        />
                    </div>
                </Show>
            </div>
            <div class="modal-footer">
                <Flex gap=FlexGap::Small justify=FlexJustify::End>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| handle_save()
                        disabled=Signal::derive(move || is_saving.get())
                    >
                        {icon("save")}
                        " Save"
                    </Button>
                </Flex>
            </div>
        </ModalFrame>
    }
}
