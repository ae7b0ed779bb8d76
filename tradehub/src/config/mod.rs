use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::utils::build_url;

pub const MARK_READ_FALLBACK: &str = "/api/notifications/mark-read/0/";
pub const TOGGLE_BOOST_FALLBACK: &str = "/api/publication/0/toggle_boost/";
pub const TOGGLE_FOLLOW_FALLBACK: &str = "/api/user/0/toggle-follow/";

/// Page level settings injected once at start-up.
///
/// Every endpoint is optional. Notification listing and the unread counter have
/// no fallback and degrade to a no-op when unset; the state-changing endpoints
/// fall back to the literal paths above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub notifications_url: Option<String>,
    pub unread_count_url: Option<String>,
    pub mark_read_url_base: Option<String>,
    pub toggle_boost_url_base: Option<String>,
    pub toggle_follow_url_base: Option<String>,
    pub csrf_token: Option<String>,
    pub mobile_breakpoint: u32,
    pub default_theme: String,
    pub toast_lifetime_ms: u32,
    pub particle_lifetime_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notifications_url: None,
            unread_count_url: None,
            mark_read_url_base: None,
            toggle_boost_url_base: None,
            toggle_follow_url_base: None,
            csrf_token: None,
            mobile_breakpoint: 768,
            default_theme: "dark".to_string(),
            toast_lifetime_ms: 5000,
            particle_lifetime_ms: 1000,
        }
    }
}

/// Page globals that older templates define instead of a config object.
pub const LEGACY_GLOBALS: [&str; 5] = [
    "NOTIFICATIONS_API_URL",
    "UNREAD_NOTIFICATIONS_COUNT_API_URL",
    "MARK_NOTIFICATION_READ_API_URL_BASE",
    "TOGGLE_BOOST_API_URL_BASE",
    "CSRF_TOKEN",
];

impl Config {
    /// Fills unset fields from legacy page globals. Values already present win.
    pub fn with_legacy_globals(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let slots = [
            &mut self.notifications_url,
            &mut self.unread_count_url,
            &mut self.mark_read_url_base,
            &mut self.toggle_boost_url_base,
            &mut self.csrf_token,
        ];
        for (slot, name) in slots.into_iter().zip(LEGACY_GLOBALS) {
            if slot.as_deref().map_or(true, str::is_empty) {
                if let Some(value) = lookup(name).filter(|v| !v.is_empty()) {
                    debug!("Using page global {name}");
                    *slot = Some(value);
                }
            }
        }
        self
    }

    pub fn notifications_url(&self) -> Option<&str> {
        non_empty(&self.notifications_url)
    }

    pub fn unread_count_url(&self) -> Option<&str> {
        non_empty(&self.unread_count_url)
    }

    pub fn mark_read_url(&self, id: &str) -> String {
        endpoint(&self.mark_read_url_base, MARK_READ_FALLBACK, id)
    }

    pub fn toggle_boost_url(&self, pub_id: &str) -> String {
        endpoint(&self.toggle_boost_url_base, TOGGLE_BOOST_FALLBACK, pub_id)
    }

    pub fn toggle_follow_url(&self, username: &str) -> String {
        endpoint(&self.toggle_follow_url_base, TOGGLE_FOLLOW_FALLBACK, username)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn endpoint(base: &Option<String>, fallback: &str, id: &str) -> String {
    non_empty(base)
        .and_then(|base| build_url(base, id))
        .or_else(|| build_url(fallback, id))
        .unwrap_or_else(|| fallback.to_string())
}
