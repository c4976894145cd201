pub mod schedule;
pub mod weather;

pub use schedule::ScheduleCard;
pub use weather::WeatherCard;
