use leptos::*;
use log::{debug, error};
use std::rc::Rc;

/// Blocking notice shown to the user. Validation failures and the sign-up
/// confirmation go through here.
pub trait AlertSink {
    fn show(&self, message: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserAlert;

impl AlertSink for BrowserAlert {
    fn show(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            error!("No window object; dropping alert: {message}");
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            error!("Failed to display alert: {:?}", err);
        }
    }
}

#[derive(Clone)]
pub struct AlertChannel {
    sink: Rc<dyn AlertSink>,
}

impl AlertChannel {
    pub fn new(sink: impl AlertSink + 'static) -> Self {
        Self {
            sink: Rc::new(sink),
        }
    }

    pub fn browser() -> Self {
        Self::new(BrowserAlert)
    }

    pub fn show(&self, message: &str) {
        debug!("alert: {message}");
        self.sink.show(message);
    }
}

pub fn provide_alert_channel(channel: AlertChannel) {
    provide_context(channel);
}

pub fn use_alert_channel() -> AlertChannel {
    use_context::<AlertChannel>().unwrap_or_else(AlertChannel::browser)
}
