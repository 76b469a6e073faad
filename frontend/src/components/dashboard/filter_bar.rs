use domain::{DashboardAction, DashboardError, ViewState};
use shared::{FiscalYear, PageSize, ProfitFilter};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub state: ViewState,
    pub page_size_options: Vec<PageSize>,
    pub on_action: Callback<DashboardAction>,
    pub on_parsed: Callback<Result<DashboardAction, DashboardError>>,
}

fn profit_filter_label(filter: ProfitFilter) -> &'static str {
    match filter {
        ProfitFilter::All => "전체",
        ProfitFilter::Profit => "흑자 기업",
        ProfitFilter::Loss => "적자 기업",
    }
}

fn page_size_label(size: PageSize) -> String {
    match size {
        PageSize::Limited(n) => format!("{}개씩 보기", n),
        PageSize::All => "전체 보기".to_string(),
    }
}

/// Select `onchange` handler that parses the selected value into an action
fn on_select(
    on_parsed: &Callback<Result<DashboardAction, DashboardError>>,
    parse: fn(&str) -> Result<DashboardAction, DashboardError>,
) -> Callback<Event> {
    let on_parsed = on_parsed.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        on_parsed.emit(parse(&select.value()));
    })
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let query = &props.state.query;

    let on_search = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_action.emit(DashboardAction::SearchChanged(input.value()));
        })
    };

    html! {
        <div class="controls">
            <input
                type="text"
                id="searchInput"
                class="search-input"
                placeholder="기업명 검색..."
                value={query.search.clone()}
                oninput={on_search}
            />
            <select id="profitFilter" onchange={on_select(&props.on_parsed, DashboardAction::profit_filter)}>
                {for ProfitFilter::ALL.iter().map(|&filter| html! {
                    <option value={filter.key()} selected={filter == query.profit_filter}>
                        {profit_filter_label(filter)}
                    </option>
                })}
            </select>
            <select id="yearFilter" onchange={on_select(&props.on_parsed, DashboardAction::active_year)}>
                {for FiscalYear::ALL.iter().map(|&year| html! {
                    <option value={year.code()} selected={year == query.active_year}>
                        {format!("{} 기준", year.label())}
                    </option>
                })}
            </select>
            <select id="perPage" onchange={on_select(&props.on_parsed, DashboardAction::page_size)}>
                {for props.page_size_options.iter().map(|&size| html! {
                    <option value={size.to_string()} selected={size == props.state.page_size}>
                        {page_size_label(size)}
                    </option>
                })}
            </select>
        </div>
    }
}
