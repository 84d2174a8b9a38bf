pub mod cookies;
pub mod model;

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, info};

use crate::http::cookies::CookieBundle;
use crate::http::model::{ErrorBody, TransformReply, TransformRequest, is_bot_error};

const PUBLIC_API_URL: &str = "https://moodi-fy.onrender.com";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Failures talking to the transformation service, split the way the
/// UI reports them: connectivity, server-reported, credential, and
/// asset problems each read differently.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Could not reach the transformation service")]
    Unreachable(#[source] reqwest::Error),

    #[error("{0}")]
    Server(String),

    #[error("YouTube flagged the request as automated")]
    BotDetected,

    #[error("The service returned an unexpected response")]
    Malformed(#[source] serde_json::Error),

    #[error("Received empty audio file")]
    EmptyAudio,

    #[error("The service did not return audio (got {0})")]
    NotAudio(String),
}

impl ApiError {
    fn from_status(status: StatusCode, body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorBody>(body) {
            Ok(ErrorBody { error: Some(msg) }) if is_bot_error(&msg) => ApiError::BotDetected,
            Ok(ErrorBody { error: Some(msg) }) => ApiError::Server(msg),
            _ => ApiError::Server(format!("Failed to process audio (status {status})")),
        }
    }
}

/// Client for the transformer API: one connectivity probe, one job
/// request, one asset fetch.
pub struct ApiService {
    client: Client,
    base_url: String,
}

impl ApiService {
    pub fn new() -> color_eyre::Result<Arc<Self>> {
        let base_url = std::env::var("MOODIFY_API_URL")
            .unwrap_or_else(|_| PUBLIC_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let client = Client::builder()
            .default_headers(device_headers())
            .connect_timeout(CONNECT_TIMEOUT)
            .gzip(true)
            .build()?;

        info!("transformer api at {base_url}");
        Ok(Arc::new(Self { client, base_url }))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Where a finished asset can be fetched from again. This is the
    /// URL the share action copies.
    pub fn audio_url(&self, filename: &str) -> String {
        format!("{}/api/audio/{filename}", self.base_url)
    }

    /// Cheap reachability check, run before each submission so an
    /// unreachable service fails fast instead of after a long upload.
    pub async fn probe(&self) -> Result<(), ApiError> {
        let resp = self
            .client
            .get(format!("{}/api/test", self.base_url))
            .send()
            .await
            .map_err(ApiError::Unreachable)?;

        if resp.status().is_success() {
            Ok(())
        } else {
            Err(ApiError::Server(format!(
                "The transformation service is unavailable (status {})",
                resp.status()
            )))
        }
    }

    /// Submits one transformation job and returns the filename of the
    /// finished asset.
    pub async fn request_transform(
        &self,
        url: &str,
        effect: &str,
        cookies: Option<&CookieBundle>,
    ) -> Result<String, ApiError> {
        debug!(effect, "submitting transformation job");
        let body = TransformRequest {
            url,
            effect_type: effect,
            cookies,
        };

        let resp = self
            .client
            .post(format!("{}/api/download", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(ApiError::Unreachable)?;

        let status = resp.status();
        let bytes = resp.bytes().await.map_err(ApiError::Unreachable)?;

        if !status.is_success() {
            return Err(ApiError::from_status(status, &bytes));
        }

        let reply: TransformReply =
            serde_json::from_slice(&bytes).map_err(ApiError::Malformed)?;

        match reply {
            TransformReply {
                success: true,
                filename: Some(filename),
                ..
            } => Ok(filename),
            TransformReply {
                error: Some(msg), ..
            } if is_bot_error(&msg) => Err(ApiError::BotDetected),
            TransformReply {
                error: Some(msg), ..
            } => Err(ApiError::Server(msg)),
            _ => Err(ApiError::Server(
                "Failed to process YouTube link".to_string(),
            )),
        }
    }

    /// Fetches the finished asset. The payload must be non-empty and,
    /// when the service names a content type, an audio one.
    pub async fn fetch_audio(&self, filename: &str) -> Result<Vec<u8>, ApiError> {
        let resp = self
            .client
            .get(self.audio_url(filename))
            .send()
            .await
            .map_err(ApiError::Unreachable)?;

        let status = resp.status();
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = resp.bytes().await.map_err(ApiError::Unreachable)?;

        if !status.is_success() {
            return Err(ApiError::from_status(status, &bytes));
        }
        if bytes.is_empty() {
            return Err(ApiError::EmptyAudio);
        }
        if let Some(ct) = content_type
            && !ct.starts_with("audio/")
            && ct != "application/octet-stream"
        {
            return Err(ApiError::NotAudio(ct));
        }

        Ok(bytes.to_vec())
    }
}

/// Headers classifying this client, the closest native analog of the
/// browser's user-agent sniffing the service expects.
fn device_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();

    let agent = format!(
        "moodify/{} ({})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    );
    if let Ok(value) = HeaderValue::from_str(&agent) {
        headers.insert(USER_AGENT, value);
    }

    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert("X-Device-Type", HeaderValue::from_static("desktop"));

    let lang = std::env::var("LANG")
        .ok()
        .and_then(|l| l.split(['.', '@']).next().map(|s| s.replace('_', "-")))
        .filter(|l| !l.is_empty() && l != "C")
        .unwrap_or_else(|| "en".to_string());
    if let Ok(value) = HeaderValue::from_str(&lang) {
        headers.insert(ACCEPT_LANGUAGE, value);
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_surface_the_body_message() {
        let err = ApiError::from_status(
            StatusCode::BAD_REQUEST,
            br#"{"error":"This video is unavailable."}"#,
        );
        assert_eq!(err.to_string(), "This video is unavailable.");
    }

    #[test]
    fn bot_flagged_bodies_become_credential_errors() {
        let err = ApiError::from_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            br#"{"error":"bot detected"}"#,
        );
        assert!(matches!(err, ApiError::BotDetected));
    }

    #[test]
    fn unparseable_bodies_fall_back_to_a_generic_message() {
        let err = ApiError::from_status(StatusCode::BAD_GATEWAY, b"<html>oops</html>");
        assert_eq!(
            err.to_string(),
            "Failed to process audio (status 502 Bad Gateway)"
        );
    }

    #[test]
    fn device_headers_identify_the_client() {
        let headers = device_headers();
        let ua = headers.get(USER_AGENT).unwrap().to_str().unwrap();
        assert!(ua.starts_with("moodify/"));
        assert_eq!(headers.get("X-Device-Type").unwrap(), "desktop");
    }
}
