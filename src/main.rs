use orders_dashboard::pages::{admin::AdminDashboard, order_form::OrderForm};
use yew::prelude::*;

/// Which page the current URL asks for.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Page {
    OrderForm,
    Admin,
}

fn current_page() -> Page {
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();

    if path.starts_with("/admin") {
        Page::Admin
    } else {
        Page::OrderForm
    }
}

#[function_component(App)]
fn app() -> Html {
    let page = use_memo((), |_| current_page());

    html! {
        <div class="app-container">
            <nav class="app-nav">
                <a href="/">{"Order"}</a>
                <a href="/admin">{"Admin"}</a>
            </nav>

            <main class="app-main">
                {
                    match *page {
                        Page::Admin => html! { <AdminDashboard /> },
                        Page::OrderForm => html! { <OrderForm /> },
                    }
                }
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
