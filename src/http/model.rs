use serde::{Deserialize, Serialize};

use crate::http::cookies::CookieBundle;

/// Body of the job request. Cookies ride along only when a bundle is
/// stored.
#[derive(Debug, Clone, Serialize)]
pub struct TransformRequest<'a> {
    pub url: &'a str,
    pub effect_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookies: Option<&'a CookieBundle>,
}

/// Reply to the job request. On success `filename` names the asset to
/// fetch; on failure `error` explains.
#[derive(Debug, Clone, Deserialize)]
pub struct TransformReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Error-body shape shared by every endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// The service flags requests YouTube refused with a message
/// mentioning its bot check, in varying phrasings.
pub fn is_bot_error(message: &str) -> bool {
    message.to_ascii_lowercase().contains("bot")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_omits_absent_cookies() {
        let req = TransformRequest {
            url: "https://youtu.be/dQw4w9WgXcQ",
            effect_type: "dark",
            cookies: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["url"], "https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(json["effect_type"], "dark");
        assert!(json.get("cookies").is_none());
    }

    #[test]
    fn reply_parses_both_outcomes() {
        let ok: TransformReply =
            serde_json::from_str(r#"{"success":true,"filename":"abc.mp3"}"#).unwrap();
        assert!(ok.success);
        assert_eq!(ok.filename.as_deref(), Some("abc.mp3"));

        let err: TransformReply =
            serde_json::from_str(r#"{"success":false,"error":"no such video"}"#).unwrap();
        assert!(!err.success);
        assert_eq!(err.error.as_deref(), Some("no such video"));
    }

    #[test]
    fn bot_signature_is_case_insensitive() {
        assert!(is_bot_error("Sign in to confirm you're not a bot"));
        assert!(is_bot_error("BOT detected"));
        assert!(!is_bot_error("video unavailable"));
    }
}
