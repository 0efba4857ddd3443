use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification notification-success",
            NotificationKind::Error => "notification notification-error",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub on_dismiss: Callback<()>,
}

/// Inline result banner for the order form.
#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class={props.kind.css_class()} role="status">
            <div>
                <strong>{&props.title}</strong>
                <p>{&props.message}</p>
            </div>
            <button class="notification-close" aria-label="Dismiss" {onclick}>{"×"}</button>
        </div>
    }
}
