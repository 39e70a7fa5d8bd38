//! # Magnum HTTP Gateway
//!
//! File: cli/src/common/gateway/http.rs
//!
//! ## Overview
//!
//! `HttpGateway` implements the `Gateway` trait against the orchestration REST
//! API using `reqwest`. It is constructed once from a resolved `Connection` and
//! handed to the command handler; there is no global client.
//!
//! ## Wire Mapping
//!
//! | Call | Request |
//! |---|---|
//! | list | `GET <endpoint>/v1/<collection>` → `{"<collection>": [...]}` |
//! | get | `GET <endpoint>/v1/<collection>/<id>` |
//! | create | `POST <endpoint>/v1/<collection>` with a JSON body |
//! | delete | `DELETE <endpoint>/v1/<collection>/<id>` |
//! | container action | `PUT` (or `GET` for logs) `<endpoint>/v1/containers/<id>/<action>` |
//! | execute | `PUT <endpoint>/v1/containers/<id>/execute?command=<command>` |
//!
//! Non-2xx responses become `MagnumError::Api` carrying the server's message.
//!
use super::{check_creation_attributes, ContainerAction, Gateway};
use crate::core::config::Connection;
use crate::core::error::{MagnumError, Result};
use crate::core::resource::{Attributes, Resource, ResourceKind};
use anyhow::anyhow;
use reqwest::{header, Client, Method, RequestBuilder};
use serde_json::Value;
use tracing::{debug, instrument, trace};
use url::Url;

const API_VERSION: &str = "v1";

/// Gateway speaking HTTP to a single API endpoint.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base: Url,
    auth_token: Option<String>,
}

impl HttpGateway {
    /// Builds the HTTP client. No request is made here.
    pub fn new(connection: &Connection) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let mut builder = Client::builder()
            .user_agent(concat!("magnum-cli/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers);
        if let Some(timeout) = connection.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(MagnumError::from)?;

        Ok(Self {
            client,
            base: connection.url.clone(),
            auth_token: connection.auth_token.clone(),
        })
    }

    /// `<base>/v1/<segments...>`, with each segment percent-encoded.
    ///
    /// A base that already ends in `/v1` is used as-is.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        let has_version = url
            .path_segments()
            .and_then(|mut parts| parts.rfind(|part| !part.is_empty()))
            == Some(API_VERSION);
        if has_version {
            url.path_segments_mut()
                .map_err(|_| self.not_a_base())?
                .pop_if_empty()
                .pop();
        }
        url.path_segments_mut()
            .map_err(|_| self.not_a_base())?
            .pop_if_empty()
            .push(API_VERSION)
            .extend(segments);
        Ok(url)
    }

    fn not_a_base(&self) -> anyhow::Error {
        anyhow!(MagnumError::Config(format!(
            "Endpoint URL '{}' cannot be used as a base URL",
            self.base
        )))
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!("{} {}", method, url);
        let builder = self.client.request(method, url);
        match &self.auth_token {
            Some(token) => builder.header("X-Auth-Token", token),
            None => builder,
        }
    }

    /// Sends the request and decodes the body.
    ///
    /// Empty bodies yield `None`. Bodies that are not JSON are returned as a
    /// JSON string so action output (e.g. logs) survives verbatim.
    async fn send(&self, request: RequestBuilder) -> Result<Option<Value>> {
        let response = request.send().await.map_err(MagnumError::from)?;
        let status = response.status();
        let body = response.text().await.map_err(MagnumError::from)?;
        trace!("Response {}: {}", status, body);

        if !status.is_success() {
            let message = extract_error_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });
            return Err(MagnumError::Api {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        if body.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(
            serde_json::from_str(&body).unwrap_or(Value::String(body)),
        ))
    }

    async fn send_for_resource(&self, request: RequestBuilder) -> Result<Resource> {
        let body = self.send(request).await?.ok_or_else(|| {
            anyhow!(MagnumError::InvalidResponse(
                "empty response body".to_string()
            ))
        })?;
        Ok(Resource::from_value(body)?)
    }
}

impl Gateway for HttpGateway {
    #[instrument(skip(self))]
    async fn list(&self, kind: ResourceKind) -> Result<Vec<Resource>> {
        let url = self.endpoint(&[kind.collection()])?;
        let body = self.send(self.request(Method::GET, url)).await?;
        parse_collection(kind, body)
    }

    #[instrument(skip(self))]
    async fn get(&self, kind: ResourceKind, id: &str) -> Result<Resource> {
        let url = self.endpoint(&[kind.collection(), id])?;
        self.send_for_resource(self.request(Method::GET, url)).await
    }

    #[instrument(skip(self, attributes))]
    async fn create(&self, kind: ResourceKind, attributes: Attributes) -> Result<Resource> {
        check_creation_attributes(kind, &attributes)?;
        let url = self.endpoint(&[kind.collection()])?;
        let request = self.request(Method::POST, url).json(&attributes);
        self.send_for_resource(request).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, kind: ResourceKind, id: &str) -> Result<()> {
        let url = self.endpoint(&[kind.collection(), id])?;
        self.send(self.request(Method::DELETE, url)).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn container_action(&self, id: &str, action: ContainerAction) -> Result<Option<Value>> {
        let url = self.endpoint(&[ResourceKind::Container.collection(), id, action.path()])?;
        self.send(self.request(action.method(), url)).await
    }

    #[instrument(skip(self))]
    async fn container_execute(&self, id: &str, command: &str) -> Result<Option<Value>> {
        let mut url = self.endpoint(&[ResourceKind::Container.collection(), id, "execute"])?;
        url.query_pairs_mut().append_pair("command", command);
        self.send(self.request(Method::PUT, url)).await
    }
}

/// Pulls the item array out of a `{"<collection>": [...]}` list response.
fn parse_collection(kind: ResourceKind, body: Option<Value>) -> Result<Vec<Resource>> {
    let items = match body {
        Some(Value::Object(mut map)) => map.remove(kind.collection()),
        _ => None,
    };
    match items {
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| Resource::from_value(item).map_err(Into::into))
            .collect(),
        _ => Err(anyhow!(MagnumError::InvalidResponse(format!(
            "list response has no '{}' array",
            kind.collection()
        )))),
    }
}

/// Finds the human-readable message in an error body.
///
/// The API wraps errors as `{"error_message": "..."}`, where the inner string is
/// often itself JSON carrying a `faultstring`. Falls back to the raw body.
fn extract_error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) else {
        return Some(body.to_string());
    };
    match map.get("error_message") {
        Some(Value::String(inner)) => match serde_json::from_str::<Value>(inner) {
            Ok(Value::Object(fault)) => fault
                .get("faultstring")
                .and_then(Value::as_str)
                .map(str::to_string)
                .or_else(|| Some(inner.clone())),
            _ => Some(inner.clone()),
        },
        Some(Value::Object(fault)) => fault
            .get("faultstring")
            .and_then(Value::as_str)
            .map(str::to_string)
            .or_else(|| Some(body.to_string())),
        _ => Some(body.to_string()),
    }
}
