use super::error::AppError;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of an order, lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn all() -> &'static [OrderStatus] {
        &[
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ]
    }

    /// Value used by the backend and in filter selects.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Returns CSS class name for the status badge
    pub fn css_class(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "badge badge-yellow",
            OrderStatus::Confirmed => "badge badge-blue",
            OrderStatus::Processing => "badge badge-purple",
            OrderStatus::Shipped => "badge badge-cyan",
            OrderStatus::Delivered => "badge badge-green",
            OrderStatus::Completed => "badge badge-gray",
            OrderStatus::Cancelled => "badge badge-red",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::all()
            .iter()
            .find(|status| status.as_str() == s)
            .copied()
            .ok_or_else(|| AppError::DataError(format!("Unknown order status: {s}")))
    }
}

/// Status selection in the orders table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn matches(&self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

/// An order as stored by the backend. The client never mutates one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub order_id: String,
    pub customer_id: String,
    /// Amount in the smallest unit of `currency`
    pub total_amount: i64,
    pub currency: String,
    pub status: OrderStatus,
    #[serde(deserialize_with = "deserialize_flexible_datetime")]
    pub order_date: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_flexible_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Order date in the browser's timezone, e.g. `05 Mar 2025, 14:07`.
    pub fn formatted_date(&self) -> String {
        self.order_date
            .with_timezone(&Local)
            .format("%d %b %Y, %H:%M")
            .to_string()
    }
}

/// Parses backend timestamps: RFC 3339, or naive ISO-8601 taken as UTC.
fn parse_flexible_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = s.trim_end_matches('Z');
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(naive, fmt).ok())
        .map(|dt| DateTime::from_naive_utc_and_offset(dt, Utc))
}

fn deserialize_flexible_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;

    parse_flexible_datetime(&s)
        .ok_or_else(|| serde::de::Error::custom(format!("Failed to parse datetime '{s}'")))
}

fn deserialize_optional_datetime<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Deserialize::deserialize(deserializer)?;

    match s {
        None => Ok(None),
        Some(s) => parse_flexible_datetime(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("Failed to parse datetime '{s}'"))),
    }
}

/// Keeps orders matching `filter`, preserving order.
pub fn filter_by_status(orders: &[Order], filter: StatusFilter) -> Vec<Order> {
    orders
        .iter()
        .filter(|o| filter.matches(o.status))
        .cloned()
        .collect()
}

/// Keeps orders whose order id or customer id contains `query`, ignoring case.
/// An empty query keeps everything.
pub fn filter_by_search(orders: &[Order], query: &str) -> Vec<Order> {
    if query.is_empty() {
        return orders.to_vec();
    }

    let query = query.to_lowercase();
    orders
        .iter()
        .filter(|o| {
            o.order_id.to_lowercase().contains(&query)
                || o.customer_id.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Status stage first, then search.
pub fn apply_filters(orders: &[Order], filter: StatusFilter, query: &str) -> Vec<Order> {
    let by_status = filter_by_status(orders, filter);
    filter_by_search(&by_status, query)
}

/// Headline numbers derived from the loaded order list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Statistics {
    pub average_order_value: f64,
    pub today_orders: usize,
    pub pending_orders: usize,
}

impl Statistics {
    pub fn from_orders(orders: &[Order]) -> Self {
        Self::from_orders_at(orders, &Local::now())
    }

    /// "Today" is the calendar day of `now` in `now`'s own timezone.
    pub fn from_orders_at<Tz: TimeZone>(orders: &[Order], now: &DateTime<Tz>) -> Self {
        if orders.is_empty() {
            return Self::default();
        }

        let tz = now.timezone();
        let today = now.date_naive();

        let sum: i64 = orders.iter().map(|o| o.total_amount).sum();
        let today_orders = orders
            .iter()
            .filter(|o| o.order_date.with_timezone(&tz).date_naive() == today)
            .count();
        let pending_orders = orders
            .iter()
            .filter(|o| o.status == OrderStatus::Pending)
            .count();

        Self {
            average_order_value: sum as f64 / orders.len() as f64,
            today_orders,
            pending_orders,
        }
    }
}
