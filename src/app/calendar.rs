//! 星期名称查询

use axum::response::Json;
use chrono::{Datelike, Utc, Weekday};
use serde::Serialize;

use crate::core::response::ApiResponse;

/// 以星期日为第 0 天
pub const DAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub fn day_name(weekday: Weekday) -> &'static str {
    DAYS[weekday.num_days_from_sunday() as usize]
}

/// 当天（UTC）的星期名称
pub fn today() -> &'static str {
    day_name(Utc::now().weekday())
}

#[derive(Debug, Serialize)]
pub struct DayView {
    pub day: &'static str,
}

pub async fn get_day() -> Json<ApiResponse<DayView>> {
    Json(ApiResponse::success(DayView { day: today() }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sunday_first() {
        assert_eq!(day_name(Weekday::Sun), "Sunday");
        assert_eq!(day_name(Weekday::Mon), "Monday");
        assert_eq!(day_name(Weekday::Sat), "Saturday");
    }

    #[test]
    fn today_matches_clock() {
        // 跨午夜时两次读取可能不同，允许相邻一天
        let before = Utc::now().weekday();
        let name = today();
        let after = Utc::now().weekday();
        assert!(name == day_name(before) || name == day_name(after));
    }
}
