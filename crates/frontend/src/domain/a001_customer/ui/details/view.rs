use contracts::domain::a001_customer::Customer;
use leptos::prelude::*;
use thaw::*;

use super::view_model::CustomerDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;

#[component]
pub fn CustomerDetails(
    /// Customer being edited, `None` to create
    existing: Option<Customer>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CustomerDetailsViewModel::new(existing.as_ref());
    let title = if vm.is_edit_mode() { "Edit Customer" } else { "New Customer" };

    view! {
        <ModalFrame title=title.to_string() on_close=on_cancel>
            <div class="modal-body">
                {move || vm.error.get().map(|e| view! {
                    <div class="alert alert--error">{e}</div>
                })}

                <div class="form__group">
                    <Label>"Name *"</Label>
                    <Input value=vm.name placeholder="Customer name" />
                </div>
                <div class="form__group">
                    <Label>"Industry"</Label>
                    <Input value=vm.industry placeholder="e.g. Banking" />
                </div>
                <div class="form__group">
                    <Label>"Region"</Label>
                    <Input value=vm.region placeholder="e.g. Jakarta" />
                </div>
            </div>
            <div class="modal-footer">
                <Flex gap=FlexGap::Small justify=FlexJustify::End>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                        disabled=vm.is_saving
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save_command(on_saved)
                        disabled=vm.is_saving
                    >
                        {icon("save")}
                        {move || if vm.is_saving.get() { " Saving..." } else { " Save" }}
                    </Button>
                </Flex>
            </div>
        </ModalFrame>
    }
}
