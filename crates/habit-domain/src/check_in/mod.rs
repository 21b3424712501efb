mod repository;
mod value_objects;


pub use repository::CheckInRepository;
pub use value_objects::{
    CheckInEntry, DayData, DayStats, Metric, MAX_SCREEN_TIME_HOURS, MAX_SLEEP_HOURS,
    MAX_WATER_GLASSES,
};
