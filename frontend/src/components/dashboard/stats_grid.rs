use shared::StatCard;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatsGridProps {
    pub cards: Vec<StatCard>,
}

#[function_component(StatsGrid)]
pub fn stats_grid(props: &StatsGridProps) -> Html {
    html! {
        <section class="stats-grid" id="statsGrid">
            {for props.cards.iter().map(|card| {
                html! {
                    <div class="stat-card">
                        <div class="label">{&card.title}</div>
                        <div class="value">{&card.value}</div>
                        {if let Some(change) = &card.change {
                            html! { <div class={change.tone.css_class()}>{&change.text}</div> }
                        } else {
                            html! {}
                        }}
                    </div>
                }
            })}
        </section>
    }
}
