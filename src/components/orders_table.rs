use chrono::{DateTime, Local};
use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::config::Config;
use crate::models::currency::format_price;
use crate::models::order::{Order, OrderStatus, StatusFilter};

#[derive(Properties, PartialEq)]
pub struct OrdersTableProps {
    /// Orders left after the status and search filters
    pub filtered: Rc<Vec<Order>>,
    pub status_filter: StatusFilter,
    pub search_query: String,
    pub last_refresh: DateTime<Local>,
    pub on_status_change: Callback<StatusFilter>,
    pub on_search_change: Callback<String>,
    pub on_refresh: Callback<()>,
}

#[function_component(OrdersTable)]
pub fn orders_table(props: &OrdersTableProps) -> Html {
    let is_refreshing = use_state(|| false);
    let show_success = use_state(|| false);

    let on_refresh_click = {
        let is_refreshing = is_refreshing.clone();
        let show_success = show_success.clone();
        let on_refresh = props.on_refresh.clone();

        Callback::from(move |_: MouseEvent| {
            is_refreshing.set(true);
            show_success.set(false);
            on_refresh.emit(());

            let is_refreshing = is_refreshing.clone();
            let show_success = show_success.clone();
            spawn_local(async move {
                // Spinner floor, independent of how fast the fetch returns
                TimeoutFuture::new(Config::MIN_REFRESH_SPINNER_MS).await;
                is_refreshing.set(false);
                show_success.set(true);

                TimeoutFuture::new(Config::REFRESH_SUCCESS_MS).await;
                show_success.set(false);
            });
        })
    };

    let on_search = {
        let callback = props.on_search_change.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            callback.emit(target.value());
        })
    };

    let on_status = {
        let callback = props.on_status_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(filter) = target.value().parse::<StatusFilter>() {
                callback.emit(filter);
            }
        })
    };

    let clear_search = {
        let callback = props.on_search_change.clone();
        Callback::from(move |_: MouseEvent| callback.emit(String::new()))
    };

    let show_all = {
        let callback = props.on_status_change.clone();
        Callback::from(move |_: MouseEvent| callback.emit(StatusFilter::All))
    };

    let count = props.filtered.len();
    let has_query = !props.search_query.is_empty();
    let has_status = props.status_filter != StatusFilter::All;

    html! {
        <div class="card" role="region" aria-label="Recent orders table">
            <div class="card-header">
                <div>
                    <h2>{"Recent Orders"}</h2>
                    <p class="card-subtitle">
                        {format!("Last updated: {}", props.last_refresh.format("%H:%M:%S"))}
                    </p>
                </div>
                <div class="refresh-wrapper">
                    <button
                        class="button button-outline"
                        onclick={on_refresh_click}
                        disabled={*is_refreshing}
                        aria-label="Refresh orders data"
                    >
                        if *is_refreshing {
                            <><span class="spinner spinner-small"></span>{" Refreshing..."}</>
                        } else {
                            {"Refresh"}
                        }
                    </button>
                    if *show_success {
                        <span class="refresh-success">{"👍"}</span>
                    }
                </div>
            </div>

            <div class="filters">
                <input
                    class="input"
                    placeholder="Search by Order ID or Customer..."
                    value={props.search_query.clone()}
                    oninput={on_search}
                />
                <select class="select" onchange={on_status} aria-label="Filter orders by status">
                    <option value="all" selected={!has_status}>{"All Statuses"}</option>
                    {
                        OrderStatus::all().iter().map(|status| html! {
                            <option
                                value={status.as_str()}
                                selected={props.status_filter == StatusFilter::Only(*status)}
                            >
                                {status.label()}
                            </option>
                        }).collect::<Html>()
                    }
                </select>
            </div>

            if has_query {
                <div class="search-results">
                    {format!("Found {} result{}", count, if count == 1 { "" } else { "s" })}
                    <button class="button button-ghost" onclick={clear_search.clone()}>{"Clear"}</button>
                </div>
            }

            if count == 0 {
                <div class="empty-state">
                    <span class="badge badge-gray">{"NO RESULTS"}</span>
                    <h3>{"No Orders Found"}</h3>
                    <p>{empty_message(&props.search_query, props.status_filter)}</p>
                    if has_query {
                        <button class="button button-outline" onclick={clear_search}>{"Clear Search"}</button>
                    }
                    if has_status {
                        <button class="button button-outline" onclick={show_all}>{"Show All"}</button>
                    }
                </div>
            } else {
                <div class="table-wrapper">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"Order ID"}</th>
                                <th>{"Customer"}</th>
                                <th>{"Amount"}</th>
                                <th>{"Status"}</th>
                                <th>{"Date"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { props.filtered.iter().map(order_row).collect::<Html>() }
                        </tbody>
                    </table>
                </div>
            }
        </div>
    }
}

fn order_row(order: &Order) -> Html {
    html! {
        <tr key={order.id.to_string()}>
            <td class="mono">{&order.order_id}</td>
            <td>{&order.customer_id}</td>
            <td>{format_price(order.total_amount, &order.currency)}</td>
            <td><span class={order.status.css_class()}>{order.status.as_str()}</span></td>
            <td class="muted">{order.formatted_date()}</td>
        </tr>
    }
}

/// Explains an empty table in terms of whatever filter emptied it.
pub fn empty_message(search_query: &str, status_filter: StatusFilter) -> String {
    if !search_query.is_empty() {
        format!("No orders match \"{search_query}\"")
    } else if let StatusFilter::Only(status) = status_filter {
        format!("No {status} orders at the moment")
    } else {
        "Create your first order to get started".to_string()
    }
}
