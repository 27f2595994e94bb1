// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Blocking HTTP client for the registration, vaccination, and transaction endpoints.
//!
//! Requests are issued one at a time from the command worker. Every mutating
//! request echoes the `csrftoken` cookie in the `X-CSRFToken` header, which is
//! what the backend's CSRF protection expects from a browser session.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::REFERER;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::app::config::AppConfig;
use crate::models::player::Player;
use crate::models::registration::{RegistrationRequest, non_blank};
use crate::models::transactions::ValidationStats;
use crate::models::vaccination::{VaccinationRecord, VaccinationRequest};
use crate::utils::{cookie_value, guess_mime};

pub const REGISTRATION_PATH: &str = "api/registration";
pub const VACCINATION_PATH: &str = "api/vaccination";
pub const VALIDATE_TRANSACTIONS_PATH: &str = "api/validate-transactions";

/// Cookie holding the anti-forgery token.
pub const CSRF_COOKIE: &str = "csrftoken";
/// Header the token is echoed in.
pub const CSRF_HEADER: &str = "X-CSRFToken";
const SESSION_COOKIE: &str = "sessionid";

/// Failures from the backend client. `Display` yields the text shown to the user.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server explained why it refused the request.
    #[error("{message}")]
    Rejected { message: String },

    /// Non-2xx response without a usable message.
    #[error("Server returned an error: {reason} ({status})")]
    Status { status: u16, reason: String },

    /// Connection, timeout, or body decoding failure.
    #[error("An error occurred: {0}")]
    Transport(#[from] reqwest::Error),

    /// An upload could not be read from disk.
    #[error("Could not read {}: {source}", .path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid API address: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Session-aware client bound to one backend.
pub struct ApiClient {
    http: Client,
    jar: Arc<Jar>,
    base_url: Url,
}

impl ApiClient {
    /// Build a client, seeding the cookie jar with any configured session cookies.
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let jar = Arc::new(Jar::default());
        if let Some(token) = &config.csrf_token {
            jar.add_cookie_str(&format!("{CSRF_COOKIE}={token}"), &config.base_url);
        }
        if let Some(session) = &config.session_id {
            jar.add_cookie_str(&format!("{SESSION_COOKIE}={session}"), &config.base_url);
        }

        let http = Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .timeout(config.timeout)
            .user_agent(concat!("upai-desk/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            jar,
            base_url: config.base_url.clone(),
        })
    }

    /// Current anti-forgery token from the cookie jar, if the server has set one.
    pub fn csrf_token(&self) -> Option<String> {
        let header = self.jar.cookies(&self.base_url)?;
        let raw = header.to_str().ok()?;
        cookie_value(raw, CSRF_COOKIE).map(str::to_owned)
    }

    /// Create a player. The returned record carries the id later requests link to.
    pub fn register(&self, request: &RegistrationRequest) -> Result<Player, ApiError> {
        let response = self.post(REGISTRATION_PATH)?.json(request).send()?;
        let status = response.status();
        tracing::info!(
            endpoint = REGISTRATION_PATH,
            status = status.as_u16(),
            "registration response"
        );
        if !status.is_success() {
            return Err(rejection(response));
        }
        Ok(response.json::<Player>()?)
    }

    /// Store vaccination details (and the certificate, when vaccinated) for a player.
    pub fn submit_vaccination(
        &self,
        request: &VaccinationRequest,
    ) -> Result<VaccinationRecord, ApiError> {
        let mut form = Form::new().text("vaccination", request.form_document().to_string());
        if let Some(certificate) = request.certificate() {
            form = form.part("certificate", file_part(certificate)?);
        }

        let response = self.post(VACCINATION_PATH)?.multipart(form).send()?;
        let status = response.status();
        tracing::info!(
            endpoint = VACCINATION_PATH,
            status = status.as_u16(),
            player_id = request.player_id,
            "vaccination response"
        );
        if !status.is_success() {
            return Err(rejection(response));
        }
        Ok(response.json::<VaccinationRecord>()?)
    }

    /// Upload a bank statement CSV and return the reconciliation counts.
    pub fn validate_transactions(&self, statement: &Path) -> Result<ValidationStats, ApiError> {
        let form = Form::new().part("bank_statement", file_part(statement)?);

        let response = self
            .post(VALIDATE_TRANSACTIONS_PATH)?
            .multipart(form)
            .send()?;
        let status = response.status();
        tracing::info!(
            endpoint = VALIDATE_TRANSACTIONS_PATH,
            status = status.as_u16(),
            "transaction validation response"
        );
        if !status.is_success() {
            return Err(described_failure(response));
        }
        Ok(response.json::<ValidationStats>()?)
    }

    fn post(&self, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = self.base_url.join(path)?;
        tracing::debug!(%url, "POST");
        let mut request = self.http.post(url).header(REFERER, self.base_url.as_str());
        match self.csrf_token() {
            Some(token) => request = request.header(CSRF_HEADER, token),
            None => tracing::debug!("no CSRF cookie available, sending request without token"),
        }
        Ok(request)
    }
}

/// Read a file into a named multipart part with a guessed content type.
fn file_part(path: &Path) -> Result<Part, ApiError> {
    let bytes = std::fs::read(path).map_err(|source| ApiError::File {
        path: path.to_path_buf(),
        source,
    })?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    Ok(Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(&guess_mime(path))?)
}

/// 400 responses carry `{"message": ...}`; anything else is reported by status.
fn rejection(response: Response) -> ApiError {
    let status = response.status();
    if status == StatusCode::BAD_REQUEST
        && let Some(message) = response.text().ok().as_deref().and_then(message_field)
    {
        return ApiError::Rejected { message };
    }
    status_error(status)
}

/// Prefer the body's message, then the body itself, then the status line.
fn described_failure(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().unwrap_or_default();
    match describe_body(&body) {
        Some(message) => ApiError::Rejected { message },
        None => status_error(status),
    }
}

fn status_error(status: StatusCode) -> ApiError {
    ApiError::Status {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
    }
}

fn message_field(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    message_of(&value)
}

fn message_of(value: &Value) -> Option<String> {
    value
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_owned)
}

fn describe_body(body: &str) -> Option<String> {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => Some(message_of(&value).unwrap_or_else(|| value.to_string())),
        Err(_) => non_blank(body),
    }
}
