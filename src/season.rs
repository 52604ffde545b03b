use chrono::{Datelike, NaiveDate};

/// NBA season identifier ("2024-25") for the given date.
///
/// Seasons tip off in October, so October through December belong to the
/// season starting that year and January through September to the one that
/// started the year before.
pub fn season_for_date(date: NaiveDate) -> String {
    let year = date.year();
    let start_year = if date.month() >= 10 { year } else { year - 1 };
    format!("{}-{:02}", start_year, (start_year + 1).rem_euclid(100))
}

/// Season identifier for the server's current local date.
pub fn current_season() -> String {
    season_for_date(chrono::Local::now().date_naive())
}
