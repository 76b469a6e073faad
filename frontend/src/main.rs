use yew::prelude::*;
use domain::DashboardConfig;
use shared::Company;
use std::rc::Rc;

mod components;
mod hooks;
mod services;

use components::dashboard::{CompanyModal, CompanyTable, FilterBar, Pagination, StatsGrid};
use components::header::Header;
use hooks::use_dashboard;
use services::logging::{ConsoleLogger, Logger};
use services::page_data::load_inputs;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub companies: Rc<Vec<Company>>,
    pub config: DashboardConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let dashboard = use_dashboard(props.companies.clone(), props.config.clone());
    let model = &dashboard.model;

    html! {
        <>
            <Header company_count={props.companies.len()} />
            <main class="container">
                <StatsGrid cards={model.stats.clone()} />
                <section class="table-section">
                    <FilterBar
                        state={dashboard.state.clone()}
                        page_size_options={props.config.page_size_options.clone()}
                        on_action={dashboard.dispatch.clone()}
                        on_parsed={dashboard.dispatch_parsed.clone()}
                    />
                    <CompanyTable
                        rows={model.rows.clone()}
                        sort={model.sort}
                        on_action={dashboard.dispatch.clone()}
                    />
                    <Pagination info={model.pagination.clone()} on_action={dashboard.dispatch.clone()} />
                </section>
            </main>
            <CompanyModal
                is_open={model.modal_open}
                detail={model.detail.clone()}
                chart_tab={model.chart_tab}
                on_action={dashboard.dispatch.clone()}
            />
        </>
    }
}

#[derive(Properties, PartialEq)]
struct StartupErrorProps {
    message: String,
}

#[function_component(StartupError)]
fn startup_error(props: &StartupErrorProps) -> Html {
    html! {
        <div class="error-panel">
            <h2>{"대시보드를 불러오지 못했습니다"}</h2>
            <pre>{&props.message}</pre>
        </div>
    }
}

fn main() {
    ConsoleLogger::init(false);

    match load_inputs() {
        Ok((companies, config)) => {
            ConsoleLogger::init(config.debug_logging);
            Logger::info_with_component("App", &format!("Starting dashboard with {} companies", companies.len()));
            yew::Renderer::<App>::with_props(AppProps {
                companies: Rc::new(companies),
                config,
            })
            .render();
        }
        Err(e) => {
            Logger::error_with_component("App", &format!("{:#}", e));
            yew::Renderer::<StartupError>::with_props(StartupErrorProps {
                message: format!("{:#}", e),
            })
            .render();
        }
    }
}
