use chrono::{DateTime, Local};
use std::rc::Rc;
use yew::prelude::*;

use crate::components::{
    currency_breakdown::CurrencyBreakdown,
    metrics_hero::MetricsHero,
    orders_table::OrdersTable,
    revenue_chart::{MultiCurrencyChart, RevenueChart},
    status::{ErrorCard, LoadingSkeleton},
};
use crate::config::Config;
use crate::hooks::{use_orders::use_orders, use_summary::use_summary};
use crate::models::currency::{currency_breakdown, total_revenue_isk};
use crate::models::order::{Order, Statistics, StatusFilter, apply_filters};

/// "Last updated" time after an orders fetch. Every successful poll counts,
/// whether or not the orders changed; an empty list leaves the time alone.
pub fn refresh_stamp(
    orders: &[Order],
    loaded_at: Option<DateTime<Local>>,
) -> Option<DateTime<Local>> {
    loaded_at.filter(|_| !orders.is_empty())
}

/// Internal reporting page: metrics, currency breakdown, trend charts and
/// the recent-orders table, all refreshed on the polling interval.
#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let summary = use_summary();
    let orders = use_orders();

    let status_filter = use_state(StatusFilter::default);
    let search_query = use_state(String::new);
    let last_refresh = use_state(Local::now);

    let all_orders: Rc<Vec<Order>> = orders.state.data().cloned().unwrap_or_default();

    let filtered = use_memo(
        (all_orders.clone(), *status_filter, (*search_query).clone()),
        |(orders, filter, query)| apply_filters(orders, *filter, query),
    );

    {
        let last_refresh = last_refresh.clone();
        let all_orders = all_orders.clone();
        use_effect_with(orders.loaded_at, move |loaded_at| {
            if let Some(stamp) = refresh_stamp(&all_orders, *loaded_at) {
                last_refresh.set(stamp);
            }
            || ()
        });
    }

    let handle_refresh = {
        let refresh_summary = summary.refresh.clone();
        let refresh_orders = orders.refresh.clone();
        let last_refresh = last_refresh.clone();

        Callback::from(move |()| {
            refresh_summary.emit(());
            refresh_orders.emit(());
            last_refresh.set(Local::now());
        })
    };

    if summary.state.is_loading() || orders.state.is_loading() {
        return html! { <LoadingSkeleton /> };
    }

    if let Some(message) = summary.state.error().or_else(|| orders.state.error()) {
        return html! { <ErrorCard message={message.to_string()} on_retry={handle_refresh} /> };
    }

    let statistics = Statistics::from_orders(&all_orders);

    let (total_isk, breakdown, total_currencies, total_orders) = match summary.state.data() {
        Some(s) => (
            total_revenue_isk(&s.total_revenue),
            currency_breakdown(&s.total_revenue),
            s.total_revenue.len(),
            s.total_orders,
        ),
        None => (0.0, Vec::new(), 0, 0),
    };

    let on_status_change = {
        let status_filter = status_filter.clone();
        Callback::from(move |filter: StatusFilter| status_filter.set(filter))
    };

    let on_search_change = {
        let search_query = search_query.clone();
        Callback::from(move |query: String| search_query.set(query))
    };

    html! {
        <div class="dashboard">
            <header class="app-header">
                <h1>{"Admin Dashboard"}</h1>
                <p>{format!(
                    "Order overview, refreshed every {} seconds",
                    Config::POLLING_INTERVAL_MS / 1000
                )}</p>
            </header>

            <MetricsHero
                total_revenue_isk={total_isk}
                {total_currencies}
                {total_orders}
                {statistics}
            />

            <CurrencyBreakdown breakdown={Rc::new(breakdown)} total_revenue_isk={total_isk} />

            if let Some(s) = summary.state.data().filter(|s| !s.revenue_per_day.is_empty()) {
                <>
                    <RevenueChart summary={s.clone()} />
                    <MultiCurrencyChart summary={s.clone()} />
                </>
            }

            <OrdersTable
                filtered={filtered}
                status_filter={*status_filter}
                search_query={(*search_query).clone()}
                last_refresh={*last_refresh}
                {on_status_change}
                {on_search_change}
                on_refresh={handle_refresh}
            />

            <footer class="app-footer">
                <p>{"ISK equivalents use approximate static exchange rates and are for comparison only."}</p>
            </footer>
        </div>
    }
}
