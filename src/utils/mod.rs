mod time_utils;

pub use time_utils::{
    STANDARD_DATE_FORMAT, date_from_epoch_days, epoch_days, epoch_sec_to_date, format_date,
    how_many_seconds_ago, now_timestamp_ms, today_utc,
};
