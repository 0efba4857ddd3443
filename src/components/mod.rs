pub mod currency_breakdown;
pub mod metrics_hero;
pub mod notification;
pub mod orders_table;
pub mod revenue_chart;
pub mod status;
