use leptos::*;
use log::info;

type SessionContext = (ReadSignal<Session>, WriteSignal<Session>);

/// Who is signed in. The dashboard is shown iff this is `LoggedIn`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn(String),
}

impl Session {
    pub fn identity(&self) -> Option<&str> {
        match self {
            Session::LoggedOut => None,
            Session::LoggedIn(identity) => Some(identity),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Session::LoggedIn(_))
    }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let ctx = create_signal(Session::default());
    provide_context::<SessionContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(Session::default()))
}

/// Credentials are never checked; any identity is accepted.
pub fn login(set_session: WriteSignal<Session>, identity: String) {
    info!("Session started for {identity}");
    set_session.set(Session::LoggedIn(identity));
}

pub fn logout(set_session: WriteSignal<Session>) {
    info!("Session ended");
    set_session.set(Session::LoggedOut);
}
