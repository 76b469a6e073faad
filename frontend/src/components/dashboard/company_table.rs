use domain::DashboardAction;
use shared::{SortColumn, SortState, TableRow};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CompanyTableProps {
    pub rows: Vec<TableRow>,
    pub sort: SortState,
    pub on_action: Callback<DashboardAction>,
}

/// Header classes: every header sorts; the active one shows its direction
fn header_class(column: SortColumn, sort: SortState) -> Classes {
    let mut classes = classes!("sortable");
    if column == sort.column {
        classes.push(sort.direction.css_class());
    }
    classes
}

#[function_component(CompanyTable)]
pub fn company_table(props: &CompanyTableProps) -> Html {
    html! {
        <div class="table-container">
            <table class="company-table">
                <thead>
                    <tr>
                        {for SortColumn::ALL.iter().map(|&column| {
                            let on_action = props.on_action.clone();
                            let onclick = Callback::from(move |_: MouseEvent| {
                                on_action.emit(DashboardAction::HeaderClicked(column));
                            });
                            html! {
                                <th
                                    data-column={column.key()}
                                    class={header_class(column, props.sort)}
                                    onclick={onclick}
                                >
                                    {column.title()}
                                </th>
                            }
                        })}
                    </tr>
                </thead>
                <tbody id="tableBody">
                    {for props.rows.iter().map(|row| {
                        let on_action = props.on_action.clone();
                        let name = row.name.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            on_action.emit(DashboardAction::CompanyClicked(name.clone()));
                        });
                        html! {
                            <tr>
                                <td class="company-name" data-company={row.name.clone()} onclick={onclick}>
                                    {&row.name}
                                </td>
                                {for row.cells.iter().map(|cell| html! {
                                    <td class={cell.class.css_class()}>{&cell.text}</td>
                                })}
                                <td>
                                    <span class={classes!("trend-indicator", row.trend.css_class())}></span>
                                    {row.trend.glyph()}
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
