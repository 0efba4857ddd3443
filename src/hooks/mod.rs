pub mod data_state;
pub mod use_orders;
pub mod use_summary;
