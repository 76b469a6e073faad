use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub company_count: usize,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{"기업 재무 대시보드"}</h1>
                <span class="header-subtitle">
                    {format!("2022–2024년 매출 · 영업이익 ({}개 기업, 단위: 억원)", props.company_count)}
                </span>
            </div>
        </header>
    }
}
