use contracts::enums::{Division, Role};
use contracts::system::users::{User, UserForm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::form_select::FormSelect;
use crate::shared::icons::icon;
use crate::shared::list_utils::display_options;
use crate::shared::modal_frame::ModalFrame;
use crate::system::users::api;

/// Create a user, or edit one when `existing` is set.
/// On edit a blank password keeps the current one.
#[component]
pub fn UserDetails(
    existing: Option<User>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let initial = existing.as_ref().map(UserForm::from_user).unwrap_or_default();
    let is_edit = initial.is_edit();
    let user_id = initial.user_id;
    let username = RwSignal::new(initial.username.clone());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(initial.role);
    let division = RwSignal::new(initial.division.clone());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_saving, set_is_saving) = signal(false);

    let handle_save = move || {
        let form = UserForm {
            user_id,
            username: username.get_untracked(),
            password: password.get_untracked(),
            role: role.get_untracked(),
            division: division.get_untracked(),
        };
        let dto = match form.validate() {
            Ok(dto) => dto,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_is_saving.set(true);
        spawn_local(async move {
            let result = match user_id {
                Some(id) => api::update_user(id, &dto).await,
                None => api::create_user(&dto).await,
            };
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("Failed to save user {}: {}", dto.username, e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_is_saving.set(false);
        });
    };

    let title = if is_edit { "Edit User" } else { "New User" };
    let password_label = if is_edit {
        "Password (leave blank to keep)"
    } else {
        "Password *"
    };

    view! {
        <ModalFrame title=title.to_string() on_close=on_cancel>
            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="form__group">
                    <Label>"Username *"</Label>
                    <Input value=username />
                </div>
                <div class="form__group">
                    <Label>{password_label}</Label>
                    <Input value=password input_type=InputType::Password />
                </div>
                <FormSelect
                    label="Role"
                    options=display_options(Role::all())
                    value=Signal::derive(move || role.get().code().to_string())
                    on_change=Callback::new(move |v: String| role.set(Role::parse(&v)))
                />
                <FormSelect
                    label="Division *"
                    options=display_options(Division::all())
                    value=Signal::derive(move || division.get())
                    on_change=Callback::new(move |v: String| division.set(v))
                    placeholder="Select division"
                />
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
