use crate::pages::dashboard::{
    components::{ScheduleCard, WeatherCard},
    layout::DashboardFrame,
    view_model::use_dashboard_view_model,
};
use leptos::*;

#[component]
pub fn DashboardPanel(#[prop(into)] identity: String, on_logout: Callback<()>) -> impl IntoView {
    let vm = use_dashboard_view_model();

    view! {
        <DashboardFrame identity=identity on_logout=on_logout>
            <WeatherCard snapshot=vm.weather.get_value() />
            <ScheduleCard entries=vm.schedule.get_value() />
        </DashboardFrame>
    }
}
