use crate::{
    components::alert::{provide_alert_channel, AlertChannel},
    pages::{dashboard::DashboardPage, login::LoginPage},
    state::session::{self, use_session, Session, SessionProvider},
};
use leptos::*;
use leptos_meta::provide_meta_context;

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_alert_channel(AlertChannel::browser());
    view! {
        <SessionProvider>
            <SessionGate />
        </SessionProvider>
    }
}

/// Shows the login screen while logged out and the dashboard once an identity
/// is set. Each switch mounts a fresh view, so form state never survives a
/// logout.
#[component]
pub fn SessionGate() -> impl IntoView {
    let (session, set_session) = use_session();

    let on_login = Callback::new(move |identity: String| session::login(set_session, identity));
    let on_logout = Callback::new(move |_: ()| session::logout(set_session));

    view! {
        <div>
            {move || match session.get() {
                Session::LoggedOut => view! { <LoginPage on_login=on_login /> }.into_view(),
                Session::LoggedIn(identity) => {
                    view! { <DashboardPage identity=identity on_logout=on_logout /> }.into_view()
                }
            }}
        </div>
    }
}
