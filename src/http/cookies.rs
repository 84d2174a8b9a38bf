use keyring::Entry;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

const SERVICE: &str = "moodify";
const ACCOUNT: &str = "youtube_cookies";

/// The four YouTube cookies the service needs to fetch videos on the
/// user's behalf. Field names follow the cookie names on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieBundle {
    #[serde(rename = "VISITOR_INFO1_LIVE")]
    pub visitor_info: String,
    #[serde(rename = "LOGIN_INFO")]
    pub login_info: String,
    #[serde(rename = "SID")]
    pub sid: String,
    #[serde(rename = "HSID")]
    pub hsid: String,
}

impl CookieBundle {
    pub fn is_empty(&self) -> bool {
        self.visitor_info.is_empty()
            && self.login_info.is_empty()
            && self.sid.is_empty()
            && self.hsid.is_empty()
    }
}

/// Keychain-backed persistence for the cookie bundle. Absence and
/// read errors both come back as `None`; the bundle is re-entered
/// through the prompt either way.
pub struct CookieStore;

impl CookieStore {
    fn entry() -> keyring::Result<Entry> {
        Entry::new(SERVICE, ACCOUNT)
    }

    pub fn load() -> Option<CookieBundle> {
        let entry = Self::entry().ok()?;
        match entry.get_password() {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(bundle) => Some(bundle),
                Err(e) => {
                    warn!("stored cookie bundle unreadable: {e}");
                    None
                }
            },
            Err(keyring::Error::NoEntry) => None,
            Err(e) => {
                warn!("keychain read failed: {e}");
                None
            }
        }
    }

    pub fn save(bundle: &CookieBundle) -> color_eyre::Result<()> {
        let entry = Self::entry()?;
        entry.set_password(&serde_json::to_string(bundle)?)?;
        info!("cookie bundle saved");
        Ok(())
    }

    pub fn purge() {
        match Self::entry().and_then(|e| e.delete_credential()) {
            Ok(()) => info!("cookie bundle purged"),
            Err(keyring::Error::NoEntry) => {}
            Err(e) => warn!("keychain delete failed: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_serializes_under_cookie_names() {
        let bundle = CookieBundle {
            visitor_info: "v".into(),
            login_info: "l".into(),
            sid: "s".into(),
            hsid: "h".into(),
        };
        let json = serde_json::to_value(&bundle).unwrap();
        assert_eq!(json["VISITOR_INFO1_LIVE"], "v");
        assert_eq!(json["LOGIN_INFO"], "l");
        assert_eq!(json["SID"], "s");
        assert_eq!(json["HSID"], "h");
    }

    #[test]
    fn empty_bundle_knows_it_is_empty() {
        assert!(CookieBundle::default().is_empty());
        let partial = CookieBundle {
            sid: "s".into(),
            ..Default::default()
        };
        assert!(!partial.is_empty());
    }
}
