use anyhow::{Context, Result};
use log::debug;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde_json::json;

use crate::config::{ADMIN_STATS_PATH, LOGIN_PATH};
use crate::session::Session;

/// Client for the storefront API under test.
///
/// Both probes go through the same [`Session`], so whatever cookie the login
/// response sets is attached to the admin-stats request.
pub struct StoreClient {
    session: Session,
    base_url: String,
}

impl StoreClient {
    pub fn new(session: Session, base_url: impl Into<String>) -> Self {
        Self {
            session,
            base_url: base_url.into(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// POSTs the credentials to the login endpoint as JSON.
    ///
    /// The response is captured as-is; a 401 is a result worth looking at,
    /// not an error.
    pub async fn login(&self, email: &str, password: &str) -> Result<ProbeReport> {
        let url = format!("{}{}", self.base_url, LOGIN_PATH);
        debug!("POST {url}");

        let response = self
            .session
            .client()
            .post(&url)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .context("Failed to send login request")?;

        ProbeReport::from_response("Login", response).await
    }

    /// GETs the admin-stats endpoint over the shared session.
    pub async fn admin_stats(&self) -> Result<ProbeReport> {
        let url = format!("{}{}", self.base_url, ADMIN_STATS_PATH);
        debug!("GET {url}");

        let response = self
            .session
            .client()
            .get(&url)
            .send()
            .await
            .context("Failed to send admin stats request")?;

        ProbeReport::from_response("Admin stats", response).await
    }
}

/// Everything one probe observed about its response.
#[derive(Debug)]
pub struct ProbeReport {
    pub label: &'static str,
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl ProbeReport {
    /// Captures status and headers before consuming the body as text.
    pub async fn from_response(label: &'static str, response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .context("Failed to get response text")?;

        Ok(Self {
            label,
            status,
            headers,
            body,
        })
    }

    pub fn print(&self) {
        println!("{} status code: {}", self.label, self.status.as_u16());
        println!("{} response text: {}", self.label, self.body);
        println!("{} response headers: {:?}", self.label, self.headers);
    }
}
