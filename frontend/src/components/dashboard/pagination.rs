use domain::DashboardAction;
use shared::PaginationInfo;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub info: PaginationInfo,
    pub on_action: Callback<DashboardAction>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let on_prev = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(DashboardAction::PreviousPage))
    };
    let on_next = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(DashboardAction::NextPage))
    };

    html! {
        <div class="pagination">
            <button id="prevBtn" class="btn" disabled={!props.info.has_previous} onclick={on_prev}>
                {"이전"}
            </button>
            <span id="pageInfo" class="page-info">{&props.info.summary}</span>
            <button id="nextBtn" class="btn" disabled={!props.info.has_next} onclick={on_next}>
                {"다음"}
            </button>
        </div>
    }
}
