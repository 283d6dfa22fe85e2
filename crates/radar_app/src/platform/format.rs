//! Display-only formatting helpers for timestamps from the service.

use chrono::{DateTime, Local, NaiveDateTime};

/// Header label for the dataset's `last_update` stamp, `--` when absent or
/// unparseable.
pub fn last_update_label(timestamp: Option<&str>) -> String {
    match timestamp.and_then(parse_naive) {
        Some(stamp) => stamp.format("%m/%d %H:%M").to_string(),
        None => "--".to_string(),
    }
}

/// Relative-age badge for a summary section.
pub fn summary_age_badge(updated: Option<&str>, now: DateTime<Local>) -> String {
    let Some(stamp) = updated.and_then(parse_naive) else {
        return "pending update".to_string();
    };

    let minutes = (now.naive_local() - stamp).num_minutes();
    if minutes < 1 {
        "just updated".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if minutes < 1440 {
        format!("{}h ago", minutes / 60)
    } else {
        format!("{}d ago", minutes / 1440)
    }
}

// The service stamps with a naive local ISO datetime.
fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    raw.parse::<NaiveDateTime>().ok()
}
