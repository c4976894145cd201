use super::utils::{self, AuthMode, LoginFields};
use crate::components::alert::{use_alert_channel, AlertChannel};
use leptos::*;
use log::warn;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
    pub mode: RwSignal<AuthMode>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            confirm_password: create_rw_signal(String::new()),
            mode: create_rw_signal(AuthMode::Login),
        }
    }
}

impl LoginFormState {
    pub fn fields(&self) -> LoginFields {
        LoginFields {
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
            confirm_password: self.confirm_password.get_untracked(),
        }
    }
}

#[derive(Clone)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    alerts: AlertChannel,
    on_login: Callback<String>,
}

impl LoginViewModel {
    pub fn new(on_login: Callback<String>, alerts: AlertChannel) -> Self {
        Self {
            form: LoginFormState::default(),
            alerts,
            on_login,
        }
    }

    pub fn set_mode(&self, mode: AuthMode) {
        self.form.mode.set(mode);
    }

    pub fn submit(&self) {
        let mode = self.form.mode.get_untracked();
        match utils::evaluate_submission(mode, &self.form.fields()) {
            Ok(outcome) => {
                if let Some(notice) = outcome.notice() {
                    self.alerts.show(notice);
                }
                self.on_login.call(outcome.into_identity());
            }
            Err(err) => {
                warn!("Rejected {:?} submission: {err}", mode);
                self.alerts.show(&err.to_string());
            }
        }
    }
}

pub fn use_login_view_model(on_login: Callback<String>) -> LoginViewModel {
    LoginViewModel::new(on_login, use_alert_channel())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::{self, Session};
    use crate::test_support::{helpers::RecordingAlerts, ssr::with_runtime};
    use std::{cell::RefCell, rc::Rc};

    fn recording_vm() -> (LoginViewModel, RecordingAlerts, Rc<RefCell<Vec<String>>>) {
        let recorder = RecordingAlerts::default();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        let on_login = Callback::new(move |identity: String| sink.borrow_mut().push(identity));
        let vm = LoginViewModel::new(on_login, AlertChannel::new(recorder.clone()));
        (vm, recorder, calls)
    }

    #[test]
    fn login_view_model_defaults_empty_in_login_mode() {
        with_runtime(|| {
            let (vm, _, _) = recording_vm();
            assert_eq!(vm.form.mode.get(), AuthMode::Login);
            assert_eq!(vm.form.fields(), LoginFields::default());
        });
    }

    #[test]
    fn missing_password_alerts_without_login() {
        with_runtime(|| {
            let (vm, alerts, calls) = recording_vm();
            vm.form.email.set("a@b.com".into());
            vm.submit();
            assert!(calls.borrow().is_empty());
            assert_eq!(alerts.messages(), vec!["Please enter both email and password"]);
        });
    }

    #[test]
    fn filled_login_calls_back_with_email() {
        with_runtime(|| {
            let (vm, alerts, calls) = recording_vm();
            vm.form.email.set("a@b.com".into());
            vm.form.password.set("x".into());
            vm.submit();
            assert_eq!(*calls.borrow(), vec!["a@b.com".to_string()]);
            assert!(alerts.messages().is_empty());
        });
    }

    #[test]
    fn sign_up_mismatch_alerts_and_keeps_form_usable() {
        with_runtime(|| {
            let (vm, alerts, calls) = recording_vm();
            vm.set_mode(AuthMode::SignUp);
            vm.form.email.set("a@b.com".into());
            vm.form.password.set("one".into());
            vm.form.confirm_password.set("two".into());
            vm.submit();
            assert!(calls.borrow().is_empty());
            assert_eq!(alerts.messages(), vec!["Passwords do not match"]);

            vm.form.confirm_password.set("one".into());
            vm.submit();
            assert_eq!(*calls.borrow(), vec!["a@b.com".to_string()]);
        });
    }

    #[test]
    fn sign_up_success_announces_account_then_logs_in() {
        with_runtime(|| {
            let (vm, alerts, calls) = recording_vm();
            vm.set_mode(AuthMode::SignUp);
            vm.form.email.set("new@b.com".into());
            vm.form.password.set("pw".into());
            vm.form.confirm_password.set("pw".into());
            vm.submit();
            assert_eq!(alerts.messages(), vec!["Account created successfully!"]);
            assert_eq!(*calls.borrow(), vec!["new@b.com".to_string()]);
        });
    }

    #[test]
    fn switching_modes_keeps_typed_values() {
        with_runtime(|| {
            let (vm, _, _) = recording_vm();
            vm.form.email.set("a@b.com".into());
            vm.set_mode(AuthMode::SignUp);
            vm.set_mode(AuthMode::Login);
            assert_eq!(vm.form.email.get(), "a@b.com");
        });
    }

    #[test]
    fn submit_drives_session_through_callback() {
        with_runtime(|| {
            let (session, set_session) = create_signal(Session::default());
            let on_login = Callback::new(move |identity: String| session::login(set_session, identity));
            let recorder = RecordingAlerts::default();
            let vm = LoginViewModel::new(on_login, AlertChannel::new(recorder.clone()));

            vm.form.email.set("a@b.com".into());
            vm.submit();
            assert_eq!(session.get(), Session::LoggedOut);

            vm.form.password.set("x".into());
            vm.submit();
            assert_eq!(session.get(), Session::LoggedIn("a@b.com".into()));
        });
    }
}
