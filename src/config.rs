use std::time::Duration;

use crate::telemetry::LogLevel;

const DEFAULT_SETTLE_DELAY_MS: u64 = 1_000;
const DEFAULT_ACTIVE_LOOKAHEAD_PX: u64 = 100;
const DEFAULT_VISIBILITY_THRESHOLD_PERCENT: u64 = 20;
const DEFAULT_VISIBILITY_FALLBACK_MS: u64 = 2_000;
const DEFAULT_NARROW_VIEWPORT_PX: u64 = 768;
const DEFAULT_STATUS_DISPLAY_MS: u64 = 10_000;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

const SETTLE_DELAY_MS_BOUNDS: (u64, u64) = (100, 10_000);
const ACTIVE_LOOKAHEAD_PX_BOUNDS: (u64, u64) = (0, 2_000);
const VISIBILITY_THRESHOLD_PERCENT_BOUNDS: (u64, u64) = (1, 100);
const VISIBILITY_FALLBACK_MS_BOUNDS: (u64, u64) = (0, 30_000);
const NARROW_VIEWPORT_PX_BOUNDS: (u64, u64) = (0, 4_096);
const STATUS_DISPLAY_MS_BOUNDS: (u64, u64) = (1_000, 120_000);

#[derive(Clone, PartialEq, Debug)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub endpoint: String,
}

#[derive(Clone, PartialEq, Debug)]
pub struct SiteConfig {
    pub settle_delay: Duration,
    pub active_lookahead_px: f64,
    pub visibility_threshold: f64,
    pub visibility_fallback: Duration,
    pub narrow_viewport_px: f64,
    pub status_display: Duration,
    pub log_level: LogLevel,
    pub emailjs: Option<EmailJsConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl SiteConfig {
    /// Reads the values baked in at build time by `trunk build`.
    pub fn from_build_env() -> Self {
        Self::from_lookup(build_env_var)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let settle_delay_ms = parse_u64_with_bounds(
            lookup("PORTFOLIO_SETTLE_DELAY_MS"),
            DEFAULT_SETTLE_DELAY_MS,
            SETTLE_DELAY_MS_BOUNDS,
        );
        let active_lookahead_px = parse_u64_with_bounds(
            lookup("PORTFOLIO_ACTIVE_LOOKAHEAD_PX"),
            DEFAULT_ACTIVE_LOOKAHEAD_PX,
            ACTIVE_LOOKAHEAD_PX_BOUNDS,
        );
        let visibility_threshold_percent = parse_u64_with_bounds(
            lookup("PORTFOLIO_VISIBILITY_THRESHOLD_PERCENT"),
            DEFAULT_VISIBILITY_THRESHOLD_PERCENT,
            VISIBILITY_THRESHOLD_PERCENT_BOUNDS,
        );
        let visibility_fallback_ms = parse_u64_with_bounds(
            lookup("PORTFOLIO_VISIBILITY_FALLBACK_MS"),
            DEFAULT_VISIBILITY_FALLBACK_MS,
            VISIBILITY_FALLBACK_MS_BOUNDS,
        );
        let narrow_viewport_px = parse_u64_with_bounds(
            lookup("PORTFOLIO_NARROW_VIEWPORT_PX"),
            DEFAULT_NARROW_VIEWPORT_PX,
            NARROW_VIEWPORT_PX_BOUNDS,
        );
        let status_display_ms = parse_u64_with_bounds(
            lookup("PORTFOLIO_STATUS_DISPLAY_MS"),
            DEFAULT_STATUS_DISPLAY_MS,
            STATUS_DISPLAY_MS_BOUNDS,
        );
        let log_level = lookup("PORTFOLIO_LOG_LEVEL")
            .as_deref()
            .and_then(LogLevel::from_str)
            .unwrap_or(DEFAULT_LOG_LEVEL);

        let emailjs = match (
            non_empty(lookup("EMAILJS_SERVICE_ID")),
            non_empty(lookup("EMAILJS_TEMPLATE_ID")),
            non_empty(lookup("EMAILJS_PUBLIC_KEY")),
        ) {
            (Some(service_id), Some(template_id), Some(public_key)) => Some(EmailJsConfig {
                service_id,
                template_id,
                public_key,
                endpoint: non_empty(lookup("EMAILJS_ENDPOINT"))
                    .filter(|value| value.starts_with("https://") || value.starts_with("http://"))
                    .unwrap_or_else(|| DEFAULT_EMAILJS_ENDPOINT.to_string()),
            }),
            _ => None,
        };

        Self {
            settle_delay: Duration::from_millis(settle_delay_ms),
            active_lookahead_px: active_lookahead_px as f64,
            visibility_threshold: visibility_threshold_percent as f64 / 100.0,
            visibility_fallback: Duration::from_millis(visibility_fallback_ms),
            narrow_viewport_px: narrow_viewport_px as f64,
            status_display: Duration::from_millis(status_display_ms),
            log_level,
            emailjs,
        }
    }
}

fn build_env_var(name: &str) -> Option<String> {
    let value = match name {
        "PORTFOLIO_SETTLE_DELAY_MS" => option_env!("PORTFOLIO_SETTLE_DELAY_MS"),
        "PORTFOLIO_ACTIVE_LOOKAHEAD_PX" => option_env!("PORTFOLIO_ACTIVE_LOOKAHEAD_PX"),
        "PORTFOLIO_VISIBILITY_THRESHOLD_PERCENT" => {
            option_env!("PORTFOLIO_VISIBILITY_THRESHOLD_PERCENT")
        }
        "PORTFOLIO_VISIBILITY_FALLBACK_MS" => option_env!("PORTFOLIO_VISIBILITY_FALLBACK_MS"),
        "PORTFOLIO_NARROW_VIEWPORT_PX" => option_env!("PORTFOLIO_NARROW_VIEWPORT_PX"),
        "PORTFOLIO_STATUS_DISPLAY_MS" => option_env!("PORTFOLIO_STATUS_DISPLAY_MS"),
        "PORTFOLIO_LOG_LEVEL" => option_env!("PORTFOLIO_LOG_LEVEL"),
        "EMAILJS_SERVICE_ID" => option_env!("EMAILJS_SERVICE_ID"),
        "EMAILJS_TEMPLATE_ID" => option_env!("EMAILJS_TEMPLATE_ID"),
        "EMAILJS_PUBLIC_KEY" => option_env!("EMAILJS_PUBLIC_KEY"),
        "EMAILJS_ENDPOINT" => option_env!("EMAILJS_ENDPOINT"),
        _ => None,
    };

    value.map(ToString::to_string)
}

fn parse_u64_with_bounds(value: Option<String>, default: u64, bounds: (u64, u64)) -> u64 {
    value
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
