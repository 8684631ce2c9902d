//! Reqwest-backed directory source.
//!
//! Owns transport details only: endpoint construction, timeout, HTTP error
//! mapping, and JSON decoding into domain records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use rolodex_types::{Comment, Post, PostId, User, UserId};

use crate::error::{Error, Resource, Result};
use crate::source::DirectorySource;

/// Endpoint used when neither flag, environment, nor config file names one.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const USER_AGENT: &str = concat!("rolodex/", env!("CARGO_PKG_VERSION"));

/// Directory source that performs HTTP GET requests against one base endpoint.
pub struct HttpDirectory {
    client: Client,
    base_url: Url,
}

impl HttpDirectory {
    /// Build a source with the default request timeout.
    pub fn new(base_url: Url) -> std::result::Result<Self, reqwest::Error> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECONDS))
    }

    /// Build a source with an explicit request timeout.
    ///
    /// The timeout is transport hygiene for the whole client; a request that
    /// exceeds it surfaces as an ordinary transport error.
    pub fn with_timeout(
        base_url: Url,
        timeout: Duration,
    ) -> std::result::Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client, base_url })
    }

    async fn get_json<T: DeserializeOwned>(&self, resource: Resource) -> Result<T> {
        let url = request_url(&self.base_url, resource)?;
        debug!(%url, "dispatching directory request");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| transport_error(resource, &err))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%resource, status = status.as_u16(), "directory request failed");
            return Err(Error::Status {
                resource,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| transport_error(resource, &err))?;
        decode_body(resource, body.as_ref())
    }
}

#[async_trait]
impl DirectorySource for HttpDirectory {
    async fn fetch_users(&self) -> Result<Vec<User>> {
        self.get_json(Resource::Users).await
    }

    async fn fetch_user(&self, id: UserId) -> Result<User> {
        self.get_json(Resource::User(id)).await
    }

    async fn fetch_user_posts(&self, id: UserId) -> Result<Vec<Post>> {
        self.get_json(Resource::UserPosts(id)).await
    }

    async fn fetch_post_comments(&self, id: PostId) -> Result<Vec<Comment>> {
        self.get_json(Resource::PostComments(id)).await
    }
}

/// Build the request URL for a resource against a base endpoint.
///
/// Collection filters (`/posts?userId=`, `/comments?postId=`) follow the
/// upstream API's query convention. A trailing slash on the base is
/// tolerated.
fn request_url(base: &Url, resource: Resource) -> Result<Url> {
    let base = base.as_str().trim_end_matches('/');
    let raw = match resource {
        Resource::Users => format!("{base}/users"),
        Resource::User(id) => format!("{base}/users/{id}"),
        Resource::UserPosts(id) => format!("{base}/posts?userId={id}"),
        Resource::PostComments(id) => format!("{base}/comments?postId={id}"),
    };
    Url::parse(&raw).map_err(|err| Error::Transport {
        resource,
        message: format!("invalid endpoint {}: {}", raw, err),
    })
}

fn transport_error(resource: Resource, err: &reqwest::Error) -> Error {
    Error::Transport {
        resource,
        message: err.to_string(),
    }
}

fn decode_body<T: DeserializeOwned>(resource: Resource, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|err| Error::Decode {
        resource,
        message: err.to_string(),
    })
}
