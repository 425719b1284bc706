use contracts::domain::a001_customer::Customer;
use contracts::domain::common::AggregateRoot;
use contracts::shared::list_query::{ListState, Page, SortDirection};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_customer::api;
use crate::domain::a001_customer::ui::details::CustomerDetails;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::client_config;
use crate::shared::export::confirm;
use crate::shared::icons::icon;
use crate::shared::list_utils::SortableHeaderCell;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

pub type CustomerListState = ListState<()>;

fn new_list_state() -> CustomerListState {
    ListState::new("name", SortDirection::Asc).with_page_size(client_config().lists.page_size)
}

#[component]
pub fn CustomerList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Customer>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(false);
    let state = RwSignal::new(new_list_state());
    let search = RwSignal::new(String::new());

    // Modal: Some(None) creates, Some(Some(c)) edits
    let editing = RwSignal::new(Option::<Option<Customer>>::None);

    let fetch = move || {
        set_is_loading.set(true);
        spawn_local(async move {
            match api::fetch_customers().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to fetch customers: {}", e);
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

    let page: Memo<Page<Customer>> =
        Memo::new(move |_| state.with(|s| items.with(|items| s.apply(items, |_, _| true))));

    let handle_delete = move |customer: Customer| {
        if !confirm(&format!("Delete customer \"{}\"?", customer.name)) {
            return;
        }
        spawn_local(async move {
            match api::delete_customer(customer.id).await {
                Ok(()) => fetch(),
                Err(e) => {
                    log::error!("Failed to delete customer {}: {}", customer.id, e);
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
        <PageFrame page_id="a001_customer--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("customers")}
                    <h1 class="page__title">{Customer::list_name()}</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                        {icon("plus")}
                        " New "
                        {Customer::element_name()}
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
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div class="form__group">
                            <Label>"Search"</Label>
                            <Input value=search placeholder="Name, industry or region" />
                        </div>
                    </Flex>
                </div>

                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Table>
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="Name" sort_field="name" current_sort_field=sort_field sort_direction=sort_direction on_sort=on_sort min_width=220.0 />
                            <SortableHeaderCell label="Industry" sort_field="industry" current_sort_field=sort_field sort_direction=sort_direction on_sort=on_sort min_width=160.0 />
                            <SortableHeaderCell label="Region" sort_field="region" current_sort_field=sort_field sort_direction=sort_direction on_sort=on_sort min_width=160.0 />
                            <TableHeaderCell min_width=120.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || page.get().items
                            key=|c| (c.id, c.name.clone(), c.industry.clone(), c.region.clone())
                            children=move |customer| {
                                let for_edit = customer.clone();
                                let for_delete = customer.clone();
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{customer.name}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout truncate=true>{customer.industry}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout truncate=true>{customer.region}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing.set(Some(Some(for_edit.clone())))
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| handle_delete(for_delete.clone())
                                                >
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
                                <TableCell attr:colspan="4" class="table__empty">
                                    <TableCellLayout>"No customers found."</TableCellLayout>
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
                <CustomerDetails
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
