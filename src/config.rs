//! Startup knobs read from `data-*` attributes on the mount element.
//!
//! Every value is optional. Anything missing, unparsable or out of bounds falls
//! back to the default.

use std::time::Duration;

use crate::decor::DecorMode;
use crate::logging::LogLevel;
use crate::presentation::DEFAULT_REVEAL_DELAY;

pub const REVEAL_DELAY_ATTR: &str = "data-reveal-delay-ms";
pub const NAV_THRESHOLD_ATTR: &str = "data-nav-threshold-px";
pub const DECOR_MODE_ATTR: &str = "data-decor-mode";
pub const LOG_LEVEL_ATTR: &str = "data-log-level";

const DEFAULT_REVEAL_DELAY_MS: u64 = DEFAULT_REVEAL_DELAY.as_millis() as u64;
const DEFAULT_NAV_OPAQUE_THRESHOLD_PX: u64 = 50;
const DEFAULT_DECOR_MODE: DecorMode = DecorMode::Memoized;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const REVEAL_DELAY_MS_BOUNDS: (u64, u64) = (0, 5_000);
const NAV_OPAQUE_THRESHOLD_PX_BOUNDS: (u64, u64) = (0, 2_000);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PortfolioConfig {
    pub reveal_delay: Duration,
    pub nav_opaque_threshold: f64,
    pub decor_mode: DecorMode,
    pub log_level: LogLevel,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            reveal_delay: Duration::from_millis(DEFAULT_REVEAL_DELAY_MS),
            nav_opaque_threshold: DEFAULT_NAV_OPAQUE_THRESHOLD_PX as f64,
            decor_mode: DEFAULT_DECOR_MODE,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl PortfolioConfig {
    /// Builds the config from an attribute lookup such as `Element::get_attribute`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let reveal_delay_ms = parse_u64_with_bounds(
            lookup(REVEAL_DELAY_ATTR),
            DEFAULT_REVEAL_DELAY_MS,
            REVEAL_DELAY_MS_BOUNDS,
        );
        let nav_opaque_threshold = parse_u64_with_bounds(
            lookup(NAV_THRESHOLD_ATTR),
            DEFAULT_NAV_OPAQUE_THRESHOLD_PX,
            NAV_OPAQUE_THRESHOLD_PX_BOUNDS,
        );
        let decor_mode = non_empty(lookup(DECOR_MODE_ATTR))
            .and_then(|value| DecorMode::from_str(&value))
            .unwrap_or(DEFAULT_DECOR_MODE);
        let log_level = non_empty(lookup(LOG_LEVEL_ATTR))
            .and_then(|value| LogLevel::from_str(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            reveal_delay: Duration::from_millis(reveal_delay_ms),
            nav_opaque_threshold: nav_opaque_threshold as f64,
            decor_mode,
            log_level,
        }
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_u64_with_bounds(raw: Option<String>, default: u64, bounds: (u64, u64)) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}
