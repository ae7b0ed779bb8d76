use std::rc::Rc;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::ApiError;
use crate::payloads::{Ack, BoostReply, ErrorBody, FollowReply, NotificationList, UnreadCount};
use crate::utils::clamp_count;

pub use self::transport::ReqwestTransport;

pub mod transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request with same-origin credentials.
///
/// Futures are not required to be `Send`: in the browser they run on the
/// page's single event loop.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport> Transport for Rc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).send(request).await
    }
}

pub type CsrfSource = Box<dyn Fn() -> Option<String>>;

/// Typed access to the REST endpoints the page talks to.
pub struct ApiClient<T> {
    transport: T,
    config: Rc<Config>,
    csrf: CsrfSource,
}

impl<T: Transport> ApiClient<T> {
    /// `csrf` is consulted on every state-changing request, the token may
    /// rotate during the page's lifetime.
    pub fn new(transport: T, config: Rc<Config>, csrf: CsrfSource) -> Self {
        Self {
            transport,
            config,
            csrf,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn notifications(&self) -> Result<NotificationList, ApiError> {
        let url = self
            .config
            .notifications_url()
            .ok_or(ApiError::MissingEndpoint("notifications"))?
            .to_string();
        self.exchange(self.get(url)).await
    }

    /// Unread total for the badge. Without a configured endpoint the count is 0.
    pub async fn unread_count(&self) -> Result<u32, ApiError> {
        let Some(url) = self.config.unread_count_url() else {
            debug!("Unread count endpoint not configured");
            return Ok(0);
        };
        let count: UnreadCount = self.exchange(self.get(url.to_string())).await?;
        Ok(clamp_count(count.unread_count.unwrap_or(0)))
    }

    pub async fn mark_read(&self, id: &str) -> Result<(), ApiError> {
        let url = self.config.mark_read_url(id);
        let ack: Ack = self.exchange(self.post(url, false)).await?;
        ack.into_result()
    }

    pub async fn toggle_boost(&self, pub_id: &str) -> Result<BoostReply, ApiError> {
        let url = self.config.toggle_boost_url(pub_id);
        let reply: BoostReply = self.exchange(self.post(url, true)).await?;
        if reply.ack.is_ok() {
            Ok(reply)
        } else {
            Err(ApiError::Rejected {
                message: reply.ack.message,
            })
        }
    }

    pub async fn toggle_follow(&self, username: &str) -> Result<FollowReply, ApiError> {
        let url = self.config.toggle_follow_url(username);
        let reply: FollowReply = self.exchange(self.post(url, false)).await?;
        if reply.ack.is_ok() {
            Ok(reply)
        } else {
            Err(ApiError::Rejected {
                message: reply.ack.message,
            })
        }
    }

    fn get(&self, url: String) -> HttpRequest {
        HttpRequest {
            method: Method::Get,
            url,
            headers: vec![("Accept", "application/json".to_string())],
        }
    }

    fn post(&self, url: String, json: bool) -> HttpRequest {
        let mut headers = vec![("Accept", "application/json".to_string())];
        match (self.csrf)() {
            Some(token) => headers.push(("X-CSRFToken", token)),
            None => warn!("No CSRF token available for {url}"),
        }
        if json {
            headers.push(("Content-Type", "application/json".to_string()));
        }
        HttpRequest {
            method: Method::Post,
            url,
            headers,
        }
    }

    async fn exchange<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, ApiError> {
        debug!("{:?} {}", request.method, request.url);
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                detail: ErrorBody::parse(&response.body),
            });
        }
        Ok(serde_json::from_str(&response.body)?)
    }
}
