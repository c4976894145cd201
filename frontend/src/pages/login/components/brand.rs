use crate::{
    components::icons::{CalendarIcon, CloudIcon, SunIcon},
    config,
};
use leptos::*;

#[component]
pub fn Brand() -> impl IntoView {
    let app_name = config::current().app_name;
    view! {
        <div class="text-center mb-8">
            <div class="flex justify-center items-center gap-2 mb-4">
                <SunIcon size=32 />
                <CloudIcon size=32 />
                <CalendarIcon size=32 />
            </div>
            <h1 class="text-2xl font-bold text-gray-800">{app_name}</h1>
        </div>
    }
}
