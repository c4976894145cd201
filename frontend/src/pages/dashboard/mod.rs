use crate::config;
use leptos::*;
use leptos_meta::Title;

pub mod components;
pub mod layout;
pub mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::DashboardPanel;

#[component]
pub fn DashboardPage(#[prop(into)] identity: String, on_logout: Callback<()>) -> impl IntoView {
    let title = format!("{} - Dashboard", config::current().app_name);
    view! {
        <Title text=title />
        <DashboardPanel identity=identity on_logout=on_logout />
    }
}
