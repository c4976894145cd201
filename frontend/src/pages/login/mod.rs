use crate::config;
use leptos::*;
use leptos_meta::Title;

pub mod components;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::LoginPanel;

#[component]
pub fn LoginPage(on_login: Callback<String>) -> impl IntoView {
    let title = format!("{} - Sign in", config::current().app_name);
    view! {
        <Title text=title />
        <LoginPanel on_login=on_login />
    }
}
