//! Display-ready values derived from raw records

use chrono::{Datelike, Local, NaiveDate};
use prospect_data::Player;

/// Age in whole years on a given day
///
/// Calendar-year difference, minus one if `today` falls before the birthday.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Age in whole years as of the local date
pub fn current_age(birth_date: NaiveDate) -> i32 {
    age_on(birth_date, Local::now().date_naive())
}

/// Height in feet and inches, e.g. `6' 9"`
pub fn format_height(inches: u32) -> String {
    format!("{}' {}\"", inches / 12, inches % 12)
}

/// Rank without trailing zeros for whole numbers, two decimals otherwise
pub fn format_rank(rank: f64) -> String {
    if rank.fract() == 0.0 {
        format!("{rank:.0}")
    } else {
        format!("{rank:.2}")
    }
}

/// Stat value, or a dash when the season log left it blank
pub fn format_stat(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

pub fn format_percentage(value: Option<f64>) -> String {
    value.map(|v| format!("{v}%")).unwrap_or_else(|| "-".to_string())
}

/// The player's photo, or `placeholder` when none is on file
pub fn photo_url_or<'a>(player: &'a Player, placeholder: &'a str) -> &'a str {
    player.photo_url.as_deref().filter(|url| !url.is_empty()).unwrap_or(placeholder)
}
