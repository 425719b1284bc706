//! Sort indicators, sortable table headers and select options

use contracts::shared::list_query::SortDirection;
use leptos::prelude::*;
use thaw::*;

/// Arrow shown next to a column header
pub fn get_sort_indicator(current_field: &str, field: &str, direction: SortDirection) -> &'static str {
    if current_field == field {
        if direction.is_ascending() {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Header cell that toggles sorting by `sort_field` when clicked
#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,
    #[prop(into)] sort_field: String,
    #[prop(into)] current_sort_field: Signal<String>,
    #[prop(into)] sort_direction: Signal<SortDirection>,
    on_sort: Callback<String>,
    #[prop(optional, default = 100.0)] min_width: f64,
) -> impl IntoView {
    let field_for_click = sort_field.clone();
    let field_for_class = sort_field.clone();

    view! {
        <TableHeaderCell min_width=min_width>
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| on_sort.run(field_for_click.clone())
            >
                {label}
                <span class=move || get_sort_class(&current_sort_field.get(), &field_for_class)>
                    {move || get_sort_indicator(&current_sort_field.get(), &sort_field, sort_direction.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}

/// (value, caption) pairs of a select, both taken from `Display`
pub fn display_options<T: std::fmt::Display>(items: impl IntoIterator<Item = T>) -> Vec<(String, String)> {
    items
        .into_iter()
        .map(|item| {
            let code = item.to_string();
            (code.clone(), code)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("month", "month", SortDirection::Asc), " ▲");
        assert_eq!(get_sort_indicator("month", "month", SortDirection::Desc), " ▼");
        assert_eq!(get_sort_indicator("month", "division", SortDirection::Asc), " ⇅");
    }

    #[test]
    fn test_display_options() {
        let opts = display_options(["Yes", "No"]);
        assert_eq!(opts[1], ("No".to_string(), "No".to_string()));
    }
}
