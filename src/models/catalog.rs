use super::{error::AppError, order::OrderStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Every generated order id starts with this.
pub const ORDER_ID_PREFIX: &str = "ORD-2025-";
pub const CUSTOMER_ID_PREFIX: &str = "CUST-";

/// A product offered on the order form, priced in ISK.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub price_isk: i64,
}

pub const PRODUCTS: &[Product] = &[
    Product { id: "snaefell-parka", name: "Snæfell Parka", price_isk: 89_990 },
    Product { id: "vatnajokull-jacket", name: "Vatnajökull Primaloft Jacket", price_isk: 79_990 },
    Product { id: "tindur-jacket", name: "Tindur Technical Jacket", price_isk: 119_990 },
    Product { id: "esja-jacket", name: "Esja Light Jacket", price_isk: 49_990 },
    Product { id: "hengill-jacket", name: "Hengill Hooded Jacket", price_isk: 59_990 },
    Product { id: "vik-sweater", name: "Vik Hooded Sweater", price_isk: 29_990 },
    Product { id: "kaldi-gloves", name: "Kaldi Gloves", price_isk: 12_990 },
    Product { id: "vikur-beanie", name: "Víkur Beanie", price_isk: 8_990 },
];

/// A currency the customer can pay in. `rate` converts ISK into it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormCurrency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub rate: f64,
}

pub const FORM_CURRENCIES: &[FormCurrency] = &[
    FormCurrency { code: "ISK", symbol: "kr", rate: 1.0 },
    FormCurrency { code: "USD", symbol: "$", rate: 0.0072 },
    FormCurrency { code: "EUR", symbol: "€", rate: 0.0065 },
    FormCurrency { code: "GBP", symbol: "£", rate: 0.0055 },
];

pub fn find_product(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

pub fn find_currency(code: &str) -> Option<&'static FormCurrency> {
    FORM_CURRENCIES.iter().find(|c| c.code == code)
}

/// Derives a customer id from a name: letters only, upper-cased, character
/// codes summed, first five digits of the sum kept.
///
/// Different names can share an id; the backend does not care.
pub fn customer_id(name: &str) -> String {
    let hash: u32 = name
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| u32::from(c.to_ascii_uppercase()))
        .sum();

    let digits: String = hash.to_string().chars().take(5).collect();
    format!("{CUSTOMER_ID_PREFIX}{digits}")
}

/// Order id from the last six digits of the epoch-millisecond clock.
pub fn order_id(now: DateTime<Utc>) -> String {
    let millis = now.timestamp_millis().to_string();
    let tail = &millis[millis.len().saturating_sub(6)..];
    format!("{ORDER_ID_PREFIX}{tail}")
}

/// Price of `quantity` units of a product in the chosen currency, rounded to
/// a whole unit. Unknown products cost nothing.
pub fn order_total(product_id: &str, quantity: u32, currency: &str) -> i64 {
    let Some(product) = find_product(product_id) else {
        return 0;
    };

    let rate = find_currency(currency).map_or(1.0, |c| c.rate);
    let total_isk = product.price_isk * i64::from(quantity);
    (total_isk as f64 * rate).round() as i64
}

/// Body of `POST /orders/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrder {
    pub order_id: String,
    pub customer_id: String,
    pub total_amount: i64,
    pub currency: String,
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,
}

impl NewOrder {
    /// Builds a pending order from the form fields.
    pub fn from_form(
        customer_name: &str,
        product_id: &str,
        quantity: u32,
        currency: &str,
        now: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        if find_product(product_id).is_none() {
            return Err(AppError::DataError("Please choose a product".to_string()));
        }
        if quantity == 0 {
            return Err(AppError::DataError("Quantity must be at least 1".to_string()));
        }

        Ok(Self {
            order_id: order_id(now),
            customer_id: customer_id(customer_name),
            total_amount: order_total(product_id, quantity, currency),
            currency: currency.to_string(),
            status: OrderStatus::Pending,
            order_date: now,
        })
    }
}
