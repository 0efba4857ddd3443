use yew::prelude::*;

/// Placeholder cards shown until the first fetch of both resources returns.
#[function_component(LoadingSkeleton)]
pub fn loading_skeleton() -> Html {
    html! {
        <div class="status loading" aria-busy="true">
            <div class="skeleton skeleton-title"></div>
            <div class="skeleton skeleton-subtitle"></div>
            <div class="skeleton-grid">
                <div class="card"><div class="skeleton skeleton-line"></div><div class="skeleton skeleton-value"></div></div>
                <div class="card"><div class="skeleton skeleton-line"></div><div class="skeleton skeleton-value"></div></div>
            </div>
            <div class="card"><div class="skeleton skeleton-chart"></div></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorCardProps {
    pub message: String,
    pub on_retry: Callback<()>,
}

#[function_component(ErrorCard)]
pub fn error_card(props: &ErrorCardProps) -> Html {
    let onclick = {
        let on_retry = props.on_retry.clone();
        Callback::from(move |_: MouseEvent| on_retry.emit(()))
    };

    html! {
        <div class="status error">
            <div class="card error-card">
                <span class="badge badge-red">{"ERROR"}</span>
                <h1>{"Failed to Load Dashboard"}</h1>
                <p>{&props.message}</p>
                <button class="button button-solid" {onclick}>{"Try Again"}</button>
            </div>
        </div>
    }
}
