use std::time::Duration;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// How long a code block shows its "copied" acknowledgment.
pub const COPY_RESET: Duration = Duration::from_secs(2);

/// Seconds a health report is served from cache.
pub const HEALTH_CACHE_SECS: i64 = 5;

/// Latest posts shown on the home page.
pub const HOME_RECENT_POSTS: u32 = 3;

/// `limit` for the recent-posts endpoint when none is given.
pub const DEFAULT_RECENT_LIMIT: u32 = 5;
