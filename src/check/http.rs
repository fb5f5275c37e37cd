//! HTTP(S) GET check with status-code matching.

use std::time::Duration;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use reqwest::Client;
use url::Url;

use super::{DependencyCheck, NetTarget};

const USER_AGENT: &str = concat!("depwait/", env!("CARGO_PKG_VERSION"));

/// URL scheme of an [`HttpCheck`], fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

/// Succeeds once a GET to `scheme://host:port/path` answers with an accepted
/// status code.
///
/// An empty `success_codes` list accepts any status, so a `500` still counts
/// as "the server is up". Transport errors always fail the attempt, and a
/// single request is bounded by the check's timeout.
#[derive(Debug, Clone)]
pub struct HttpCheck {
    target: NetTarget,
    scheme: Scheme,
    path: String,
    success_codes: Vec<u16>,
    endpoint: Option<Url>,
    client: Client,
}

impl HttpCheck {
    pub fn new(
        scheme: Scheme,
        host: impl Into<String>,
        port: u16,
        timeout: Duration,
        path: impl Into<String>,
        success_codes: Vec<u16>,
    ) -> Self {
        let target = NetTarget::new(host, port, timeout);
        let path = path.into().trim_start_matches('/').to_string();
        let raw = endpoint_string(scheme, &target, &path);
        let endpoint = match Url::parse(&raw) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!(endpoint = %raw, error = %e, "Unparseable endpoint, check can never succeed");
                None
            }
        };

        Self {
            target,
            scheme,
            path,
            success_codes,
            endpoint,
            client: check_client(timeout),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether a received status code counts as ready.
    pub fn accepts(&self, status: u16) -> bool {
        self.success_codes.is_empty() || self.success_codes.contains(&status)
    }

    async fn get_once(&self) -> bool {
        let Some(endpoint) = self.endpoint.clone() else {
            return false;
        };

        match self.client.get(endpoint).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                let accepted = self.accepts(status);
                tracing::debug!(
                    address = %self.address(),
                    status,
                    accepted,
                    "HTTP check answered"
                );
                accepted
            }
            Err(e) => {
                tracing::debug!(address = %self.address(), error = %e, "HTTP request failed");
                false
            }
        }
    }
}

impl DependencyCheck for HttpCheck {
    fn attempt(&self) -> BoxFuture<'_, bool> {
        self.get_once().boxed()
    }

    fn timeout(&self) -> Duration {
        self.target.timeout
    }

    fn address(&self) -> String {
        endpoint_string(self.scheme, &self.target, &self.path)
    }
}

fn endpoint_string(scheme: Scheme, target: &NetTarget, path: &str) -> String {
    format!("{}://{}/{}", scheme.as_str(), target.authority(), path)
}

// Every attempt opens a fresh, direct connection to the dependency: no idle
// pooling and no proxy taken from the environment.
fn check_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(0)
        .no_proxy()
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_default()
}
