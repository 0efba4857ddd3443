use chrono::Utc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::notification::{Notification, NotificationKind};
use crate::models::catalog::{FORM_CURRENCIES, NewOrder, PRODUCTS, find_product, order_total};
use crate::models::currency::format_price;
use crate::models::error::AppError;
use crate::services::api::submit_order;

const FALLBACK_ERROR: &str = "Failed to create order";

#[derive(Clone, PartialEq)]
struct NoticeState {
    kind: NotificationKind,
    title: String,
    message: String,
}

/// Text shown when an order could not be placed: the backend's own
/// explanation when it sent one.
pub fn submission_error_message(error: &AppError) -> String {
    match error {
        AppError::Rejected(detail)
        | AppError::AuthError(detail)
        | AppError::NotFound(detail)
        | AppError::DataError(detail) => detail.clone(),
        AppError::ApiError(_) | AppError::ConfigError(_) => FALLBACK_ERROR.to_string(),
    }
}

fn input_value(e: &InputEvent) -> String {
    let target: HtmlInputElement = e.target_unchecked_into();
    target.value()
}

fn select_value(e: &Event) -> String {
    let target: HtmlSelectElement = e.target_unchecked_into();
    target.value()
}

/// Customer-facing order form.
#[function_component(OrderForm)]
pub fn order_form() -> Html {
    let customer_name = use_state(String::new);
    let email = use_state(String::new);
    let product_id = use_state(String::new);
    let quantity = use_state(|| 1u32);
    let currency = use_state(|| "ISK".to_string());
    let is_submitting = use_state(|| false);
    let notice = use_state(|| None::<NoticeState>);

    let total = order_total(&product_id, *quantity, &currency);
    let selected_product = find_product(&product_id);

    let onsubmit = {
        let customer_name = customer_name.clone();
        let email = email.clone();
        let product_id = product_id.clone();
        let quantity = quantity.clone();
        let currency = currency.clone();
        let is_submitting = is_submitting.clone();
        let notice = notice.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let order = match NewOrder::from_form(
                &customer_name,
                &product_id,
                *quantity,
                &currency,
                Utc::now(),
            ) {
                Ok(order) => order,
                Err(err) => {
                    notice.set(Some(NoticeState {
                        kind: NotificationKind::Error,
                        title: "Order Failed".to_string(),
                        message: submission_error_message(&err),
                    }));
                    return;
                }
            };

            is_submitting.set(true);

            let customer_name = customer_name.clone();
            let email = email.clone();
            let product_id = product_id.clone();
            let quantity = quantity.clone();
            let is_submitting = is_submitting.clone();
            let notice = notice.clone();

            spawn_local(async move {
                match submit_order(&order).await {
                    Ok(created) => {
                        gloo::console::log!(format!("Order {} created", created.order_id));
                        notice.set(Some(NoticeState {
                            kind: NotificationKind::Success,
                            title: "Order Placed Successfully!".to_string(),
                            message: format!("Order {} has been created.", created.order_id),
                        }));

                        customer_name.set(String::new());
                        email.set(String::new());
                        product_id.set(String::new());
                        quantity.set(1);
                    }
                    Err(err) => {
                        gloo::console::error!(format!("Order submission failed: {err}"));
                        notice.set(Some(NoticeState {
                            kind: NotificationKind::Error,
                            title: "Order Failed".to_string(),
                            message: submission_error_message(&err),
                        }));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let on_name = {
        let customer_name = customer_name.clone();
        Callback::from(move |e: InputEvent| customer_name.set(input_value(&e)))
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| email.set(input_value(&e)))
    };
    let on_product = {
        let product_id = product_id.clone();
        Callback::from(move |e: Event| product_id.set(select_value(&e)))
    };
    let on_quantity = {
        let quantity = quantity.clone();
        Callback::from(move |e: InputEvent| {
            quantity.set(input_value(&e).parse::<u32>().unwrap_or(1).max(1));
        })
    };
    let on_currency = {
        let currency = currency.clone();
        Callback::from(move |e: Event| currency.set(select_value(&e)))
    };
    let on_dismiss = {
        let notice = notice.clone();
        Callback::from(move |()| notice.set(None))
    };

    html! {
        <div class="order-page">
            <header class="app-header">
                <h1>{"66°North"}</h1>
                <p>{"Place your order"}</p>
            </header>

            if let Some(n) = (*notice).clone() {
                <Notification kind={n.kind} title={n.title} message={n.message} {on_dismiss} />
            }

            <form class="card order-form" {onsubmit}>
                <section>
                    <h2>{"Customer Information"}</h2>
                    <label class="field">
                        {"Full Name"}
                        <input class="input" required={true} placeholder="Jón Jónsson"
                            value={(*customer_name).clone()} oninput={on_name} />
                    </label>
                    <label class="field">
                        {"Email Address"}
                        <input class="input" type="email" required={true} placeholder="jon@example.is"
                            value={(*email).clone()} oninput={on_email} />
                    </label>
                </section>

                <section>
                    <h2>{"Product Selection"}</h2>
                    <label class="field">
                        {"Product"}
                        <select class="select" required={true} onchange={on_product}>
                            <option value="" selected={product_id.is_empty()}>{"Choose a product"}</option>
                            {
                                PRODUCTS.iter().map(|p| html! {
                                    <option value={p.id} selected={p.id == product_id.as_str()}>
                                        {format!("{} - {}", p.name, format_price(p.price_isk, "ISK"))}
                                    </option>
                                }).collect::<Html>()
                            }
                        </select>
                    </label>
                    <div class="field-row">
                        <label class="field">
                            {"Quantity"}
                            <input class="input" type="number" min="1" max="10" required={true}
                                value={quantity.to_string()} oninput={on_quantity} />
                        </label>
                        <label class="field">
                            {"Currency"}
                            <select class="select" onchange={on_currency}>
                                {
                                    FORM_CURRENCIES.iter().map(|c| html! {
                                        <option value={c.code} selected={c.code == currency.as_str()}>
                                            {format!("{} ({})", c.code, c.symbol)}
                                        </option>
                                    }).collect::<Html>()
                                }
                            </select>
                        </label>
                    </div>
                </section>

                if let Some(product) = selected_product {
                    <section class="order-summary">
                        <h2>{"Order Summary"}</h2>
                        <div class="summary-row">
                            <span>{product.name}</span>
                            <span>{format_price(product.price_isk, "ISK")}</span>
                        </div>
                        <div class="summary-row">
                            <span>{"Quantity"}</span>
                            <span>{format!("× {}", *quantity)}</span>
                        </div>
                        <div class="summary-row summary-total">
                            <span>{"Total"}</span>
                            <span>{format_price(total, &currency)}</span>
                        </div>
                    </section>
                }

                <button
                    class="button button-solid button-wide"
                    type="submit"
                    disabled={*is_submitting || selected_product.is_none()}
                >
                    if *is_submitting {
                        <><span class="spinner spinner-small"></span>{" Placing order..."}</>
                    } else {
                        {"Place Order"}
                    }
                </button>
            </form>
        </div>
    }
}
