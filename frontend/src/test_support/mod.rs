#[cfg(not(target_arch = "wasm32"))]
pub mod ssr;

pub mod helpers {
    use crate::components::alert::{provide_alert_channel, AlertChannel, AlertSink};
    use crate::state::session::Session;
    use leptos::*;
    use std::{cell::RefCell, rc::Rc};

    /// Alert sink that keeps every message instead of opening a dialog.
    #[derive(Clone, Default)]
    pub struct RecordingAlerts {
        messages: Rc<RefCell<Vec<String>>>,
    }

    impl RecordingAlerts {
        pub fn messages(&self) -> Vec<String> {
            self.messages.borrow().clone()
        }
    }

    impl AlertSink for RecordingAlerts {
        fn show(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    pub fn provide_recording_alerts() -> RecordingAlerts {
        let recorder = RecordingAlerts::default();
        provide_alert_channel(AlertChannel::new(recorder.clone()));
        recorder
    }

    pub fn provide_session(session: Session) -> (ReadSignal<Session>, WriteSignal<Session>) {
        let ctx = create_signal(session);
        provide_context(ctx);
        ctx
    }
}
