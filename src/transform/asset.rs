use std::sync::Arc;

/// The transformed clip as delivered by the service: the raw audio
/// bytes, the service-side filename and the remote URL the clip can be
/// fetched from again (the shareable form).
#[derive(Debug, Clone)]
pub struct ResultAsset {
    pub bytes: Arc<[u8]>,
    pub filename: String,
    pub remote_url: String,
    pub effect: String,
}

impl ResultAsset {
    pub fn download_name(&self) -> String {
        format!("moodify_{}.mp3", self.effect)
    }
}

/// Holds the single live clip. Installing a replacement drops the
/// previous buffer before the new one is stored; callers stop playback
/// of the old clip first.
#[derive(Debug, Default)]
pub struct AssetSlot {
    current: Option<ResultAsset>,
}

impl AssetSlot {
    pub fn current(&self) -> Option<&ResultAsset> {
        self.current.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    pub fn install(&mut self, asset: ResultAsset) -> &ResultAsset {
        self.release();
        self.current.insert(asset)
    }

    pub fn release(&mut self) {
        if let Some(old) = self.current.take() {
            drop(old);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(effect: &str, data: &[u8]) -> ResultAsset {
        ResultAsset {
            bytes: Arc::from(data),
            filename: format!("{effect}.mp3"),
            remote_url: format!("https://example.test/api/audio/{effect}.mp3"),
            effect: effect.to_string(),
        }
    }

    #[test]
    fn install_replaces_the_previous_asset() {
        let mut slot = AssetSlot::default();
        let first = asset("dark", b"aaaa");
        let first_bytes = first.bytes.clone();

        slot.install(first);
        assert_eq!(Arc::strong_count(&first_bytes), 2);

        slot.install(asset("happy", b"bbbb"));
        // The old buffer was released; only the test handle remains.
        assert_eq!(Arc::strong_count(&first_bytes), 1);
        assert_eq!(slot.current().unwrap().effect, "happy");
    }

    #[test]
    fn release_empties_the_slot() {
        let mut slot = AssetSlot::default();
        slot.install(asset("chill", b"cccc"));
        slot.release();
        assert!(slot.is_empty());
    }

    #[test]
    fn download_name_uses_the_effect() {
        assert_eq!(asset("slow_reverb", b"x").download_name(), "moodify_slow_reverb.mp3");
    }
}
