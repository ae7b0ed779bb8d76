use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ApiError;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Notification {
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    /// The listing endpoint only returns unread items and omits this field.
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl Notification {
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref().filter(|l| !l.is_empty())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct NotificationList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub notifications: Vec<Notification>,
    /// Authoritative count when present; otherwise the counter is re-fetched.
    #[serde(default)]
    pub unread_count: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UnreadCount {
    #[serde(default)]
    pub unread_count: Option<i64>,
}

/// Application level acknowledgement shared by every state-changing endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Ack {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl Ack {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    pub fn into_result(self) -> Result<(), ApiError> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(ApiError::Rejected {
                message: self.message,
            })
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct BoostReply {
    #[serde(flatten)]
    pub ack: Ack,
    #[serde(default)]
    pub boosted: bool,
    #[serde(default)]
    pub boost_count: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct FollowReply {
    #[serde(flatten)]
    pub ack: Ack,
    #[serde(default)]
    pub following: bool,
}

/// Body of a non-2xx response. DRF sends `detail`, plain views send `message`.
#[derive(Debug, Deserialize, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn parse(body: &str) -> Option<String> {
        let parsed = serde_json::from_str::<ErrorBody>(body).ok()?;
        parsed.detail.or(parsed.message).filter(|m| !m.is_empty())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn id_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Number(id) => Ok(id.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "unsupported notification id {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_listing_from_server() {
        let list: NotificationList = serde_json::from_str(
            r#"{
                "notifications": [
                    {"id": 12, "title": "New follower", "message": "@bob followed you",
                     "link": "/profile/bob/", "type": "FOLLOW", "created_at": "2024-03-01 10:00"},
                    {"id": "13", "title": null, "message": "m", "link": "", "created_at": "x"}
                ],
                "unread_count": 2
            }"#,
        )
        .unwrap();
        assert_eq!(list.unread_count, Some(2));
        assert_eq!(list.notifications[0].id, "12");
        assert!(!list.notifications[0].is_read);
        assert_eq!(list.notifications[0].kind.as_deref(), Some("FOLLOW"));
        assert_eq!(list.notifications[0].link(), Some("/profile/bob/"));
        assert_eq!(list.notifications[1].title, "");
        assert_eq!(list.notifications[1].link(), None);
    }

    #[test]
    fn missing_unread_count_is_none() {
        let list: NotificationList = serde_json::from_str(r#"{"notifications": []}"#).unwrap();
        assert_eq!(list.unread_count, None);
        let list: NotificationList = serde_json::from_str(r#"{"notifications": null}"#).unwrap();
        assert!(list.notifications.is_empty());
    }

    #[test]
    fn boost_reply_carries_ack() {
        let reply: BoostReply =
            serde_json::from_str(r#"{"status": "ok", "boosted": true, "boost_count": 4}"#).unwrap();
        assert!(reply.ack.is_ok());
        assert!(reply.boosted);
        assert_eq!(reply.boost_count, Some(4));

        let reply: BoostReply =
            serde_json::from_str(r#"{"status": "error", "message": "limit"}"#).unwrap();
        match reply.ack.into_result() {
            Err(ApiError::Rejected { message }) => assert_eq!(message.as_deref(), Some("limit")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn error_body_prefers_detail() {
        assert_eq!(
            ErrorBody::parse(r#"{"detail": "Not found.", "message": "x"}"#).as_deref(),
            Some("Not found.")
        );
        assert_eq!(
            ErrorBody::parse(r#"{"status": "error", "message": "You cannot follow yourself"}"#)
                .as_deref(),
            Some("You cannot follow yourself")
        );
        assert_eq!(ErrorBody::parse("<html>502</html>"), None);
    }
}
