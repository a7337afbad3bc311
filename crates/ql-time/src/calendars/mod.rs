//! Concrete holiday calendars and lookup by name.

pub mod target;

pub use target::Target;

use crate::calendar::{Calendar, NullCalendar, WeekendsOnly};
use ql_core::errors::{Error, Result};
use std::sync::Arc;

/// Look up a calendar by its display name (case-insensitive).
///
/// Recognised names: `TARGET`, `Weekends Only` / `WeekendsOnly`, `Null`.
pub fn calendar_from_name(name: &str) -> Result<Arc<dyn Calendar>> {
    let key: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    match key.as_str() {
        "target" => Ok(Arc::new(Target)),
        "weekendsonly" => Ok(Arc::new(WeekendsOnly)),
        "null" => Ok(Arc::new(NullCalendar)),
        _ => Err(Error::InvalidArgument(format!("unknown calendar '{name}'"))),
    }
}
