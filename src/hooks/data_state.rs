use chrono::{DateTime, Local};
use std::rc::Rc;
use yew::Callback;

/// Fetch state of a polled backend resource.
#[derive(Clone, PartialEq, Debug)]
pub enum DataState<T> {
    Loading,
    Loaded(Rc<T>),
    Error(String),
}

impl<T> DataState<T> {
    /// Returns true until the first fetch completes
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the data if it is loaded
    pub const fn data(&self) -> Option<&Rc<T>> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// What a polling hook hands to its component.
#[derive(Clone, PartialEq)]
pub struct ResourceHandle<T> {
    pub state: DataState<T>,
    /// Time of the latest successful fetch, even one returning unchanged data.
    pub loaded_at: Option<DateTime<Local>>,
    /// Re-fetches immediately, outside the polling schedule.
    pub refresh: Callback<()>,
}
