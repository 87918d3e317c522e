use chrono::{DateTime, Days, NaiveDate, Utc};

pub const STANDARD_DATE_FORMAT: &str = "%Y-%m-%d";

/// Today in UTC. The end of every download range.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn now_timestamp_ms() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn how_many_seconds_ago(past_timestamp_ms: i64) -> i64 {
    (now_timestamp_ms() - past_timestamp_ms) / 1000
}

fn unix_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).expect("epoch is a valid date")
}

/// Days since 1970-01-01. The x coordinate used by the plots.
pub fn epoch_days(date: NaiveDate) -> i64 {
    date.signed_duration_since(unix_epoch()).num_days()
}

pub fn date_from_epoch_days(days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        unix_epoch().checked_add_days(Days::new(days as u64))
    } else {
        unix_epoch().checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

pub fn epoch_sec_to_date(epoch_sec: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(epoch_sec, 0).map(|dt| dt.date_naive())
}

// Used for display purposes
pub fn format_date(date: NaiveDate) -> String {
    date.format(STANDARD_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_day_round_trip() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let days = epoch_days(date);
        assert_eq!(days, 18262);
        assert_eq!(date_from_epoch_days(days), Some(date));
    }

    #[test]
    fn epoch_sec_conversion() {
        // 2020-01-01T00:00:00Z
        assert_eq!(
            epoch_sec_to_date(1_577_836_800),
            NaiveDate::from_ymd_opt(2020, 1, 1)
        );
    }
}
