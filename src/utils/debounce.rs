use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::EventTarget;

/// Listens for `event_type` on `target` and runs `callback` once the events
/// have stopped for `delay_ms`.
///
/// Used for window resizes, which fire many times a second while dragging
/// and would otherwise re-render every chart on each one. Dropping the
/// returned listener also cancels any pending call.
///
/// ```rust,ignore
/// let window = web_sys::window().unwrap();
/// let listener = debounced_listener(&window, "resize", 150, move || redraw());
/// move || drop(listener)
/// ```
pub fn debounced_listener<F>(
    target: &EventTarget,
    event_type: &'static str,
    delay_ms: u32,
    callback: F,
) -> EventListener
where
    F: Fn() + 'static,
{
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    EventListener::new(target, event_type, move |_| {
        let cb = callback.clone();
        // Replacing the handle drops, and so cancels, the previous timeout
        pending
            .borrow_mut()
            .replace(Timeout::new(delay_ms, move || cb()));
    })
}
