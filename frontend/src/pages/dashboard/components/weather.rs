use crate::{
    components::icons::CloudIcon,
    pages::dashboard::{
        repository::{ForecastDay, WeatherSnapshot},
        utils::format_range,
    },
};
use leptos::*;

#[component]
pub fn WeatherCard(snapshot: WeatherSnapshot) -> impl IntoView {
    let WeatherSnapshot {
        location,
        temperature,
        condition,
        forecast,
    } = snapshot;

    view! {
        <section class="bg-white rounded-xl shadow-lg p-6 mb-6">
            <div class="flex items-center justify-between mb-4">
                <div>
                    <h2 class="text-2xl font-bold text-gray-800">{location}</h2>
                    <p class="text-gray-600">{condition.label()}</p>
                </div>
                <div class="text-right">
                    <div class="text-4xl font-bold text-gray-800">{temperature.to_string()}</div>
                    <CloudIcon size=32 class="mx-auto mt-2" />
                </div>
            </div>
            <div class="grid grid-cols-3 gap-4 mt-4">
                {forecast
                    .into_iter()
                    .map(|day| view! { <ForecastTile day=day /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ForecastTile(day: ForecastDay) -> impl IntoView {
    view! {
        <div class="text-center p-3 bg-gray-50 rounded-lg">
            <div class="font-medium text-gray-800">{day.day}</div>
            <div class="text-sm text-gray-600">{day.condition.label()}</div>
            <div class="text-sm font-bold text-gray-800">{format_range(day.high, day.low)}</div>
        </div>
    }
}
