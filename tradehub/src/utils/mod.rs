use std::fmt::Display;

use once_cell::sync::Lazy;
use regex::{Captures, NoExpand, Regex};

static TRAILING_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"/0(/?)$").expect("valid regex"));
static STANDALONE_ZERO: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b0\b").expect("valid regex"));
static CSRF_COOKIE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"csrftoken=([^;]+)").expect("valid regex"));

/// Substitutes `id` into an endpoint template that uses `0` as placeholder.
///
/// A trailing `/0` or `/0/` segment wins; otherwise the first standalone `0`
/// token is replaced. An empty template yields `None` so callers can fall back
/// to their literal path.
pub fn build_url(base: &str, id: impl Display) -> Option<String> {
    if base.is_empty() {
        return None;
    }
    let id = id.to_string();
    if TRAILING_ID.is_match(base) {
        let url = TRAILING_ID.replace(base, |caps: &Captures| format!("/{id}{}", &caps[1]));
        return Some(url.into_owned());
    }
    Some(STANDALONE_ZERO.replace(base, NoExpand(&id)).into_owned())
}

/// Compact display for counters shown on cards (`1.5K`, `2.5M`).
///
/// The notification badge never goes through this, it always shows the raw count.
pub fn format_number(num: i64) -> String {
    if num >= 1_000_000 {
        format!("{:.1}M", round_half_up(num as f64 / 100_000.0))
    } else if num >= 1_000 {
        format!("{:.1}K", round_half_up(num as f64 / 100.0))
    } else {
        num.to_string()
    }
}

/// Tenths, with ties going up (`12.5` becomes `1.3`); `{:.1}` alone rounds ties to even.
fn round_half_up(tenths: f64) -> f64 {
    tenths.round() / 10.0
}

/// Picks the CSRF token from, in order: the value injected into the page
/// configuration, the `csrfmiddlewaretoken` form field, the `csrftoken` cookie.
pub fn resolve_csrf_token(
    injected: Option<&str>,
    form_field: Option<&str>,
    cookies: &str,
) -> Option<String> {
    if let Some(token) = injected.filter(|t| !t.is_empty()) {
        return Some(token.to_string());
    }
    if let Some(token) = form_field.filter(|t| !t.is_empty()) {
        return Some(token.to_string());
    }
    CSRF_COOKIE
        .captures(cookies)
        .map(|caps| caps[1].to_string())
}

/// Body class for the persisted theme preference, `default` when unset.
pub fn theme_class(stored: Option<&str>, default: &str) -> String {
    let theme = stored.filter(|t| !t.is_empty()).unwrap_or(default);
    format!("{theme}-theme")
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Server counts are plain JSON numbers; anything below zero renders as zero.
pub fn clamp_count(count: i64) -> u32 {
    count.clamp(0, u32::MAX as i64) as u32
}
