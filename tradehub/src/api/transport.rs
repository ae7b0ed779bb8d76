use reqwest::Url;

use crate::error::ApiError;

use super::{HttpRequest, HttpResponse, Method, Transport};

/// `reqwest` backed transport. On `wasm32` reqwest drives the browser's
/// `fetch`, natively it uses its own connection pool.
pub struct ReqwestTransport {
    client: reqwest::Client,
    origin: Url,
}

impl ReqwestTransport {
    /// `origin` resolves the site-relative paths the page is configured with.
    pub fn new(origin: &str) -> Result<Self, ApiError> {
        let origin = Url::parse(origin).map_err(|e| ApiError::Transport(format!("{e:?}")))?;
        Ok(Self {
            client: reqwest::Client::new(),
            origin,
        })
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = self
            .origin
            .join(&request.url)
            .map_err(|e| ApiError::Transport(format!("{e:?}")))?;
        let mut builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_same_origin();

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}
