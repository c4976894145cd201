use crate::pages::dashboard::repository::{self, ScheduleEntry, WeatherSnapshot};
use leptos::*;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub weather: StoredValue<WeatherSnapshot>,
    pub schedule: StoredValue<Vec<ScheduleEntry>>,
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    DashboardViewModel {
        weather: store_value(repository::weather_snapshot()),
        schedule: store_value(repository::todays_schedule()),
    }
}
