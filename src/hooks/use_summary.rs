use chrono::Local;
use std::rc::Rc;
use yew::prelude::*;

use crate::config::Config;
use crate::hooks::data_state::{DataState, ResourceHandle};
use crate::models::summary::Summary;
use crate::services::api::fetch_summary;
use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;

#[hook]
pub fn use_summary() -> ResourceHandle<Summary> {
    let state = use_state(|| DataState::Loading);
    let loaded_at = use_state(|| None);

    let refresh = {
        let state = state.clone();
        let loaded_at = loaded_at.clone();
        use_callback((), move |(), _| {
            let state = state.clone();
            let loaded_at = loaded_at.clone();

            spawn_local(async move {
                // Previous data stays visible until this resolves
                match fetch_summary().await {
                    Ok(summary) => {
                        state.set(DataState::Loaded(Rc::new(summary)));
                        loaded_at.set(Some(Local::now()));
                    }
                    Err(e) => {
                        gloo::console::error!(format!("Summary fetch failed: {e}"));
                        state.set(DataState::Error(e.to_string()));
                    }
                }
            });
        })
    };

    {
        let refresh = refresh.clone();

        use_effect_with((), move |_| {
            refresh.emit(());

            let poller = Config::ENABLE_AUTO_REFRESH.then(|| {
                Interval::new(Config::POLLING_INTERVAL_MS, move || refresh.emit(()))
            });

            move || drop(poller) // Cleanup
        });
    }

    ResourceHandle {
        state: (*state).clone(),
        loaded_at: *loaded_at,
        refresh,
    }
}
