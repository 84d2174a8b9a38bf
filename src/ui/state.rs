use std::time::{Duration, Instant};

use crate::transform::asset::AssetSlot;
use crate::transform::controller::SubmissionController;

const BANNER_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Error,
    Info,
}

/// The single message slot below the URL field. Raising a new banner
/// replaces the old one; an expired banner is dropped on the next
/// tick.
#[derive(Debug, Clone)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
    raised_at: Instant,
}

impl Banner {
    fn new(kind: BannerKind, text: String) -> Self {
        Self {
            kind,
            text,
            raised_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.raised_at.elapsed() >= BANNER_TTL
    }
}

/// Mutable app state owned by the UI task: the submission lifecycle,
/// the single live asset, and the banner slot.
#[derive(Debug, Default)]
pub struct AppState {
    pub session: SubmissionController,
    pub assets: AssetSlot,
    pub banner: Option<Banner>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise_error(&mut self, text: impl Into<String>) {
        self.banner = Some(Banner::new(BannerKind::Error, text.into()));
    }

    pub fn raise_info(&mut self, text: impl Into<String>) {
        self.banner = Some(Banner::new(BannerKind::Info, text.into()));
    }

    pub fn clear_banner(&mut self) {
        self.banner = None;
    }

    /// Called on every tick; drops the banner once its time is up.
    pub fn expire_banner(&mut self) {
        if self.banner.as_ref().is_some_and(Banner::is_expired) {
            self.banner = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raising_replaces_the_previous_banner() {
        let mut state = AppState::new();
        state.raise_error("first");
        state.raise_info("second");
        let banner = state.banner.as_ref().unwrap();
        assert_eq!(banner.kind, BannerKind::Info);
        assert_eq!(banner.text, "second");
    }

    #[test]
    fn banner_expires_after_its_ttl() {
        let mut state = AppState::new();
        state.raise_info("short lived");
        let banner = state.banner.as_mut().unwrap();
        banner.raised_at = Instant::now() - BANNER_TTL - Duration::from_millis(1);
        assert!(banner.is_expired());
        state.expire_banner();
        assert!(state.banner.is_none());
    }

    #[test]
    fn fresh_banner_survives_the_tick() {
        let mut state = AppState::new();
        state.raise_error("still relevant");
        state.expire_banner();
        assert!(state.banner.is_some());
    }
}
