use time::{macros::format_description, OffsetDateTime};

/// Formats a UNIX timestamp for display.
pub fn format_timestamp(timestamp: i64) -> String {
    OffsetDateTime::from_unix_timestamp(timestamp)
        .ok()
        .and_then(|dt| {
            dt.format(format_description!("[year]-[month]-[day] [hour]:[minute]"))
                .ok()
        })
        .unwrap_or_default()
}

/// Abbreviates an opaque backend user id for display.
pub fn short_author(id: &str) -> String {
    let short: String = id.chars().take(8).collect();
    if short == id {
        short
    } else {
        format!("{short}...")
    }
}

const PREVIEW_LEN: usize = 100;

pub fn truncate_preview(text: &str) -> String {
    let preview: String = text.chars().take(PREVIEW_LEN).collect();
    if preview == text {
        preview
    } else {
        format!("{preview}...")
    }
}
