//! Transient view state mirrored from the host page.
//!
//! `PresentationState` is a plain value updated by `PresentationAction`s. The
//! `PresentationController` owns the host resources (one reveal timer plus the
//! pointer and scroll listeners) that feed those actions, and releases all of
//! them when stopped or dropped.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use serde_json::json;

use crate::logging::{log_event, LogLevel};

pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PresentationAction {
    Reveal,
    PointerMoved(PointerPosition),
    Scrolled(f64),
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PresentationState {
    pub visibility: Visibility,
    pub pointer: PointerPosition,
    pub scroll_offset: f64,
}

impl PresentationState {
    pub fn is_visible(&self) -> bool {
        matches!(self.visibility, Visibility::Visible)
    }

    /// Returns the state after `action`. Visibility never goes back to hidden.
    pub fn apply(self, action: PresentationAction) -> Self {
        match action {
            PresentationAction::Reveal => Self {
                visibility: Visibility::Visible,
                ..self
            },
            PresentationAction::PointerMoved(pointer) => Self { pointer, ..self },
            PresentationAction::Scrolled(scroll_offset) => Self {
                scroll_offset,
                ..self
            },
        }
    }
}

/// Timer and event subscription points of the page hosting the view.
pub trait Host {
    type Timer;
    type Listener;
    type Error: std::fmt::Display;

    fn schedule_once(
        &self,
        delay: Duration,
        callback: Box<dyn FnOnce()>,
    ) -> Result<Self::Timer, Self::Error>;

    /// Cancelling a timer that already fired is a no-op.
    fn cancel(&self, timer: Self::Timer);

    fn listen_pointer(
        &self,
        callback: Box<dyn FnMut(PointerPosition)>,
    ) -> Result<Self::Listener, Self::Error>;

    fn listen_scroll(&self, callback: Box<dyn FnMut(f64)>) -> Result<Self::Listener, Self::Error>;

    fn unlisten(&self, listener: Self::Listener);
}

pub type ActionSink = Rc<dyn Fn(PresentationAction)>;

pub struct PresentationController<H: Host> {
    host: H,
    active: Rc<Cell<bool>>,
    reveal_fired: Rc<Cell<bool>>,
    mounted: bool,
    reveal_timer: Option<H::Timer>,
    pointer_listener: Option<H::Listener>,
    scroll_listener: Option<H::Listener>,
}

impl<H: Host> PresentationController<H> {
    /// Schedules the reveal and subscribes to pointer and scroll events.
    ///
    /// On failure every resource registered so far is released before the
    /// error is returned.
    pub fn start(host: H, reveal_delay: Duration, sink: ActionSink) -> Result<Self, H::Error> {
        let active = Rc::new(Cell::new(true));
        let reveal_fired = Rc::new(Cell::new(false));
        let mut controller = Self {
            host,
            active: active.clone(),
            reveal_fired: reveal_fired.clone(),
            mounted: false,
            reveal_timer: None,
            pointer_listener: None,
            scroll_listener: None,
        };

        let reveal = {
            let active = active.clone();
            let sink = sink.clone();
            Box::new(move || {
                if !active.get() {
                    return;
                }
                reveal_fired.set(true);
                log_event(LogLevel::Debug, "presentation_revealed", json!({}));
                sink(PresentationAction::Reveal);
            })
        };
        controller.reveal_timer = Some(controller.host.schedule_once(reveal_delay, reveal)?);

        let on_pointer = {
            let active = active.clone();
            let sink = sink.clone();
            Box::new(move |pointer: PointerPosition| {
                if active.get() {
                    sink(PresentationAction::PointerMoved(pointer));
                }
            })
        };
        controller.pointer_listener = Some(controller.host.listen_pointer(on_pointer)?);

        let on_scroll = Box::new(move |offset: f64| {
            if active.get() {
                sink(PresentationAction::Scrolled(offset));
            }
        });
        controller.scroll_listener = Some(controller.host.listen_scroll(on_scroll)?);
        controller.mounted = true;

        log_event(
            LogLevel::Info,
            "presentation_mounted",
            json!({ "reveal_delay_ms": reveal_delay.as_millis() as u64 }),
        );

        Ok(controller)
    }

    #[cfg(test)]
    fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Releases the timer and both listeners. Safe to call more than once.
    pub fn stop(&mut self) {
        if !self.active.replace(false) {
            return;
        }

        let reveal_pending = !self.reveal_fired.get();
        if let Some(timer) = self.reveal_timer.take() {
            self.host.cancel(timer);
        }
        if let Some(listener) = self.pointer_listener.take() {
            self.host.unlisten(listener);
        }
        if let Some(listener) = self.scroll_listener.take() {
            self.host.unlisten(listener);
        }

        if !self.mounted {
            return;
        }
        log_event(
            LogLevel::Info,
            "presentation_unmounted",
            json!({ "reveal_pending": reveal_pending }),
        );
    }
}

impl<H: Host> Drop for PresentationController<H> {
    fn drop(&mut self) {
        self.stop();
    }
}
