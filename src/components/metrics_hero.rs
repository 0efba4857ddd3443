use crate::models::{currency::format_price, order::Statistics};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MetricsHeroProps {
    pub total_revenue_isk: f64,
    pub total_currencies: usize,
    pub total_orders: u64,
    pub statistics: Statistics,
}

/// Headline revenue, order count and average order value.
#[function_component(MetricsHero)]
pub fn metrics_hero(props: &MetricsHeroProps) -> Html {
    let stats = &props.statistics;

    html! {
        <div class="hero-card">
            <div class="hero-grid">
                <div class="hero-item">
                    <h3>
                        {"Total Revenue "}
                        <span class="badge badge-green">{"Estimated"}</span>
                    </h3>
                    <p class="hero-value">
                        {format_price(props.total_revenue_isk.round() as i64, "ISK")}
                    </p>
                    <p class="hero-caption">{format!("{} currencies", props.total_currencies)}</p>
                </div>
                <div class="hero-item">
                    <h3>{"Total Orders"}</h3>
                    <p class="hero-value">{props.total_orders.to_string()}</p>
                    <p class="hero-caption">{format!("{} today", stats.today_orders)}</p>
                </div>
                <div class="hero-item">
                    <h3>{"Average Order"}</h3>
                    <p class="hero-value">
                        {format_price(stats.average_order_value.round() as i64, "ISK")}
                    </p>
                    <p class="hero-caption">{format!("{} pending", stats.pending_orders)}</p>
                </div>
            </div>
        </div>
    }
}
