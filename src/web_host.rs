use std::time::Duration;

use serde_json::json;
use thiserror::Error;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Event, MouseEvent, Window};

use crate::logging::{log_event, LogLevel};
use crate::presentation::{Host, PointerPosition};

#[derive(Debug, Error)]
pub enum HostError {
    #[error("no window available")]
    NoWindow,
    #[error("failed to add {event} listener: {message}")]
    Listener { event: &'static str, message: String },
    #[error("failed to schedule timer: {0}")]
    Timer(String),
}

fn describe_js_error(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}

pub struct WebTimer {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

/// A window listener together with the closure it was registered with, so the
/// same function reference can be removed later.
pub struct WebListener {
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

pub struct WebHost {
    window: Window,
}

impl WebHost {
    pub fn new() -> Result<Self, HostError> {
        let window = window().ok_or(HostError::NoWindow)?;
        Ok(Self { window })
    }

    fn listen(
        &self,
        event: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<WebListener, HostError> {
        self.window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|error| HostError::Listener {
                event,
                message: describe_js_error(&error),
            })?;
        Ok(WebListener { event, callback })
    }

    fn scroll_y(window: &Window) -> f64 {
        window.scroll_y().unwrap_or(0.0)
    }
}

impl Host for WebHost {
    type Timer = WebTimer;
    type Listener = WebListener;
    type Error = HostError;

    fn schedule_once(
        &self,
        delay: Duration,
        callback: Box<dyn FnOnce()>,
    ) -> Result<WebTimer, HostError> {
        let mut callback = Some(callback);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(callback) = callback.take() {
                callback();
            }
        });
        let timeout_ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        let handle = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                timeout_ms,
            )
            .map_err(|error| HostError::Timer(describe_js_error(&error)))?;

        Ok(WebTimer {
            handle,
            _callback: closure,
        })
    }

    fn cancel(&self, timer: WebTimer) {
        self.window.clear_timeout_with_handle(timer.handle);
    }

    fn listen_pointer(
        &self,
        mut callback: Box<dyn FnMut(PointerPosition)>,
    ) -> Result<WebListener, HostError> {
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                callback(PointerPosition::new(
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                ));
            }
        });
        self.listen("mousemove", closure)
    }

    fn listen_scroll(&self, mut callback: Box<dyn FnMut(f64)>) -> Result<WebListener, HostError> {
        let window = self.window.clone();
        let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            callback(Self::scroll_y(&window));
        });
        self.listen("scroll", closure)
    }

    fn unlisten(&self, listener: WebListener) {
        if let Err(error) = self.window.remove_event_listener_with_callback(
            listener.event,
            listener.callback.as_ref().unchecked_ref(),
        ) {
            log_event(
                LogLevel::Debug,
                "listener_remove_failed",
                json!({ "event": listener.event, "error": describe_js_error(&error) }),
            );
        }
    }
}
