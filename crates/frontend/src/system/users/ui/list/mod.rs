use contracts::domain::common::AggregateRoot;
use contracts::shared::list_query::{ListState, Page, SortDirection};
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::client_config;
use crate::shared::date_utils::format_datetime;
use crate::shared::export::confirm;
use crate::shared::icons::icon;
use crate::shared::list_utils::SortableHeaderCell;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::system::auth::guard::RequireAdmin;
use crate::system::users::api;
use crate::system::users::ui::details::UserDetails;

/// User administration, admins only
#[component]
pub fn UsersListPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <UserList />
        </RequireAdmin>
    }
}

#[component]
fn UserList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<User>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(false);
    let state = RwSignal::new(
        ListState::<()>::new("username", SortDirection::Asc)
            .with_page_size(client_config().lists.page_size),
    );
    let search = RwSignal::new(String::new());
    // Some(None) creates, Some(Some(user)) edits
    let editing = RwSignal::new(Option::<Option<User>>::None);

    let fetch = move || {
        set_is_loading.set(true);
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to fetch users: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_is_loading.set(false);
        });
    };

    Effect::new(move |_| {
        let q = search.get();
        state.update(|s| s.set_search(q));
    });

    let page: Memo<Page<User>> =
        Memo::new(move |_| state.with(|s| items.with(|items| s.apply(items, |_, _| true))));

    let handle_delete = move |user: User| {
        if !confirm(&format!("Delete user {}?", user.username)) {
            return;
        }
        spawn_local(async move {
            match api::delete_user(user.id).await {
                Ok(()) => fetch(),
                Err(e) => {
                    log::error!("Failed to delete user {}: {}", user.id, e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let on_sort = Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)));
    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_direction = Signal::derive(move || state.with(|s| s.sort_direction));

    fetch();

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("users")}
                    <h1 class="page__title">{User::list_name()}</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                        {icon("plus")}
                        " New "
                        {User::element_name()}
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
                    <div class="form__group">
                        <Label>"Search"</Label>
                        <Input value=search placeholder="Username or division" />
                    </div>
                </div>

                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Table>
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="Username" sort_field="username" current_sort_field=sort_field sort_direction=sort_direction on_sort=on_sort min_width=180.0 />
                            <SortableHeaderCell label="Role" sort_field="role" current_sort_field=sort_field sort_direction=sort_direction on_sort=on_sort />
                            <SortableHeaderCell label="Division" sort_field="division" current_sort_field=sort_field sort_direction=sort_direction on_sort=on_sort min_width=200.0 />
                            <TableHeaderCell min_width=150.0>"Created"</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || page.get().items
                            key=|u| (u.id, u.username.clone(), u.role.clone(), u.division.clone())
                            children=move |user| {
                                let for_edit = user.clone();
                                let for_delete = user.clone();
                                let created = user.created_at.as_deref().map(format_datetime).unwrap_or_default();
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{user.username.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{user.role.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{user.division.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{created}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing.set(Some(Some(for_edit.clone())))
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
                                <TableCell attr:colspan="5" class="table__empty">
                                    <TableCellLayout>"No users found."</TableCellLayout>
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

            {move || editing.get().map(|existing| view! {
                <UserDetails
                    existing=existing
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
