//! Creation-time normalization and application.
//!
//! The remote service reports note creation times in three shapes: a
//! structured datetime, a bare epoch number, or a text date. Every write
//! operation funnels through [`apply_create_time`] after its content is
//! durable; a missing or unparseable timestamp never fails the write.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::{Duration, UNIX_EPOCH};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A note creation time as reported by the remote service.
///
/// Untagged variant order matters for deserialization: JSON numbers bind
/// to `Epoch`, RFC 3339 strings to `Structured`, anything else to `Text`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CreateTime {
    /// Seconds since the Unix epoch.
    Epoch(i64),
    /// Already-parsed datetime.
    Structured(DateTime<Utc>),
    /// `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD`, interpreted as UTC.
    Text(String),
}

impl CreateTime {
    /// Normalize to epoch seconds. `None` means "skip timestamp
    /// application" — never an error.
    pub fn to_epoch(&self) -> Option<i64> {
        match self {
            CreateTime::Epoch(secs) => Some(*secs),
            CreateTime::Structured(dt) => Some(dt.timestamp()),
            CreateTime::Text(text) => parse_text_timestamp(text),
        }
    }
}

impl From<i64> for CreateTime {
    fn from(secs: i64) -> Self {
        CreateTime::Epoch(secs)
    }
}

impl From<DateTime<Utc>> for CreateTime {
    fn from(dt: DateTime<Utc>) -> Self {
        CreateTime::Structured(dt)
    }
}

impl From<&str> for CreateTime {
    fn from(text: &str) -> Self {
        CreateTime::Text(text.to_string())
    }
}

impl From<String> for CreateTime {
    fn from(text: String) -> Self {
        CreateTime::Text(text)
    }
}

fn parse_text_timestamp(text: &str) -> Option<i64> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, DATETIME_FORMAT) {
        return Some(dt.and_utc().timestamp());
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, DATE_FORMAT) {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp());
    }
    None
}

/// Apply a note's creation time to a freshly written file.
///
/// Sets both access and modification time. Called after the content
/// write has succeeded; every failure here is logged and swallowed —
/// the written content, not the metadata, is the operation's success
/// criterion.
pub fn apply_create_time(path: &Path, create_time: Option<&CreateTime>) {
    let Some(create_time) = create_time else {
        log::info!(
            "[Store] No creation time for {}, leaving file times untouched",
            path.display()
        );
        return;
    };

    let Some(epoch) = create_time.to_epoch() else {
        log::warn!(
            "[Store] Unparseable creation time {:?} for {}, skipping file times",
            create_time,
            path.display()
        );
        return;
    };

    let instant = if epoch >= 0 {
        UNIX_EPOCH + Duration::from_secs(epoch as u64)
    } else {
        UNIX_EPOCH - Duration::from_secs(epoch.unsigned_abs())
    };
    let times = fs::FileTimes::new()
        .set_accessed(instant)
        .set_modified(instant);

    let result = fs::File::options()
        .write(true)
        .open(path)
        .and_then(|file| file.set_times(times));
    match result {
        Ok(()) => log::info!(
            "[Store] Set file times of {} to epoch {}",
            path.display(),
            epoch
        ),
        Err(e) => log::error!(
            "[Store] Failed to set file times of {}: {}",
            path.display(),
            e
        ),
    }
}
