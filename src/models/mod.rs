pub mod catalog;
pub mod currency;
pub mod error;
pub mod order;
pub mod summary;
