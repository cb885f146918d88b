use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use web_sys::{Event, EventTarget};

#[derive(Clone, Debug)]
pub struct EventOptions {
    pub passive: bool,
    pub capture: bool,
}

impl Default for EventOptions {
    fn default() -> Self {
        Self { passive: true, capture: false }
    }
}

impl EventOptions {
    /// Listener allowed to call `preventDefault` (wheel zoom must not scroll
    /// the page).
    pub fn active() -> Self {
        Self { passive: false, ..Self::default() }
    }

    fn to_gloo(&self) -> EventListenerOptions {
        EventListenerOptions {
            phase: if self.capture { EventListenerPhase::Capture } else { EventListenerPhase::Bubble },
            passive: self.passive,
        }
    }
}

/// Attach `cb` to `target`. The listener is removed when the returned handle
/// is dropped.
pub fn listen_with_options(
    target: &EventTarget,
    event_name: &'static str,
    options: &EventOptions,
    cb: impl FnMut(&Event) + 'static,
) -> EventListener {
    EventListener::new_with_options(target, event_name, options.to_gloo(), cb)
}

/// Same as [`listen_with_options`] on `window`; `None` outside a browser.
pub fn window_listener(
    event_name: &'static str,
    options: &EventOptions,
    cb: impl FnMut(&Event) + 'static,
) -> Option<EventListener> {
    let window = web_sys::window()?;
    let target: &EventTarget = &window;
    Some(listen_with_options(target, event_name, options, cb))
}
