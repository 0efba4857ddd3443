pub mod admin;
pub mod order_form;
