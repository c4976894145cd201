//! Fixed weather and schedule data. Nothing here is fetched or mutated; the
//! values stand in for a weather/calendar service.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
    Clear,
}

impl Condition {
    pub fn label(self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::PartlyCloudy => "Partly Cloudy",
            Condition::Cloudy => "Cloudy",
            Condition::Rainy => "Rainy",
            Condition::Clear => "Clear",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Fahrenheit,
    Celsius,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Temperature {
    pub degrees: i32,
    pub unit: TemperatureUnit,
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.unit {
            TemperatureUnit::Fahrenheit => "F",
            TemperatureUnit::Celsius => "C",
        };
        write!(f, "{}°{}", self.degrees, suffix)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub day: String,
    pub high: i32,
    pub low: i32,
    pub condition: Condition,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: String,
    pub temperature: Temperature,
    pub condition: Condition,
    pub forecast: Vec<ForecastDay>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: u32,
    pub title: String,
    pub time: NaiveTime,
    pub weather: Condition,
}

fn forecast_day(day: &str, high: i32, low: i32, condition: Condition) -> ForecastDay {
    ForecastDay {
        day: day.into(),
        high,
        low,
        condition,
    }
}

fn entry(id: u32, title: &str, hour: u32, weather: Condition) -> ScheduleEntry {
    ScheduleEntry {
        id,
        title: title.into(),
        time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or_default(),
        weather,
    }
}

pub fn weather_snapshot() -> WeatherSnapshot {
    WeatherSnapshot {
        location: "New York".into(),
        temperature: Temperature {
            degrees: 72,
            unit: TemperatureUnit::Fahrenheit,
        },
        condition: Condition::PartlyCloudy,
        forecast: vec![
            forecast_day("Today", 75, 65, Condition::Sunny),
            forecast_day("Tomorrow", 73, 63, Condition::Cloudy),
            forecast_day("Saturday", 70, 60, Condition::Rainy),
        ],
    }
}

pub fn todays_schedule() -> Vec<ScheduleEntry> {
    vec![
        entry(1, "Morning Run", 7, Condition::Sunny),
        entry(2, "Lunch Meeting", 12, Condition::Cloudy),
        entry(3, "Evening Walk", 18, Condition::Clear),
    ]
}
