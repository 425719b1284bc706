use contracts::domain::a002_project::post_po::{is_unlocked, stage_name, STAGE_COUNT};
use contracts::domain::a002_project::{PostPoMonitoring, PostPoStageUpdate, ProjectDetail};
use contracts::enums::PostPoStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_project::api;
use crate::shared::date_utils::date_input_value;
use crate::shared::components::progress_bar::ProgressBar;
use crate::shared::icons::icon;
use crate::shared::list_utils::display_options;

/// Five-stage execution checklist, editable once the deal is closing
#[component]
pub fn PostPoPanel(
    project_id: i64,
    sales_stage: i32,
    detail: RwSignal<Option<ProjectDetail>>,
) -> impl IntoView {
    let monitoring = Memo::new(move |_| {
        detail.with(|d| {
            d.as_ref()
                .and_then(|d| d.project.postpo_monitoring.clone())
                .unwrap_or_default()
        })
    });

    view! {
        <section class="panel">
            <h2 class="section__title">"Post-PO Monitoring"</h2>
            {if !is_unlocked(sales_stage) {
                view! {
                    <p class="text--muted">
                        "Post-PO monitoring becomes available once the project reaches sales stage 6 (Closing)."
                    </p>
                }
                .into_any()
            } else {
                view! {
                    <div class="post-po__progress">
                        <span>{move || format!("Progress: {}%", monitoring.get().progress_pct())}</span>
                        <ProgressBar pct=Signal::derive(move || monitoring.get().progress_pct() as f64) />
                    </div>
                    {(1..=STAGE_COUNT)
                        .map(|stage| view! { <PostPoStageRow project_id=project_id stage=stage monitoring=monitoring detail=detail /> })
                        .collect_view()}
                }
                .into_any()
            }}
        </section>
    }
}

#[component]
fn PostPoStageRow(
    project_id: i64,
    stage: usize,
    monitoring: Memo<PostPoMonitoring>,
    detail: RwSignal<Option<ProjectDetail>>,
) -> impl IntoView {
    let current = monitoring.get_untracked().stage(stage).unwrap_or_default();
    let status = RwSignal::new(current.status);
    let date = RwSignal::new(date_input_value(current.date.as_deref().unwrap_or_default()));
    let note = RwSignal::new(current.note.unwrap_or_default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_saving, set_is_saving) = signal(false);

    let handle_save = move || {
        let update = PostPoStageUpdate::new(stage, status.get(), &date.get(), &note.get());
        set_is_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = api::update_post_po(project_id, &update).await;
            set_is_saving.set(false);
            match result {
                Ok(()) => detail.update(|d| {
                    if let Some(d) = d.as_mut() {
                        d.project
                            .postpo_monitoring
                            .get_or_insert_with(PostPoMonitoring::default)
                            .apply(&update);
                    }
                }),
                Err(e) => {
                    log::error!("Failed to update post-PO stage {}: {}", stage, e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="post-po__stage">
            <div class="post-po__stage-name">
                {format!("{}. {}", stage, stage_name(stage).unwrap_or("-"))}
            </div>
            <select
                class="form__select"
                prop:value=move || status.get().to_string()
                on:change=move |ev| status.set(PostPoStatus::normalize(&event_target_value(&ev)))
            >
                {display_options(PostPoStatus::all())
                    .into_iter()
                    .map(|(value, caption)| view! { <option value=value>{caption}</option> })
                    .collect_view()}
            </select>
            <input
                type="date"
                class="form__input"
                prop:value=move || date.get()
                on:input=move |ev| date.set(event_target_value(&ev))
            />
            <input
                type="text"
                class="form__input"
                placeholder="Note"
                prop:value=move || note.get()
                on:input=move |ev| note.set(event_target_value(&ev))
            />
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| handle_save()
                disabled=Signal::derive(move || is_saving.get())
            >
                {icon("save")}
            </Button>
            {move || error.get().map(|e| view! { <span class="form__error">{e}</span> })}
        </div>
    }
}
