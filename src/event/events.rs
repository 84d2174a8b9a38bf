use crate::http::cookies::CookieBundle;
use crate::transform::asset::ResultAsset;

/// Everything that flows through the app channel: intents raised by
/// the views and results reported by background tasks. Task results
/// carry the generation of the submission they belong to.
#[derive(Debug, Clone)]
pub enum Event {
    // View intents
    MoodChosen { index: usize, url: String },
    SubmitRequested { url: String },
    SaveRequested,
    ShareRequested,
    RetryRequested,
    CookiesSubmitted(CookieBundle),
    CookiePromptDismissed,

    // Submission task results
    TransformQueued { filename: String, generation: u64 },
    AssetFetched { asset: ResultAsset, generation: u64 },
    SubmitFailed { message: String, generation: u64 },
    CredentialsRequired { generation: u64 },

    // Playback
    ClipEnded,
}
