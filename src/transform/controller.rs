use thiserror::Error;
use tracing::debug;

use crate::transform::mood::{Mood, mood_at};
use crate::transform::validate::is_valid_youtube_url;

/// Where the current submission stands. `Validating` only exists while
/// `begin` runs; it is observable to keep every transition explicit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Submitting,
    AwaitingAsset,
    Ready,
    Failed,
}

/// Input problems reported before anything touches the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a YouTube URL")]
    EmptyUrl,
    #[error("Please enter a valid YouTube URL")]
    InvalidUrl,
    #[error("Please select a mood first! Pick one of the emojis above.")]
    NoMoodSelected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BeginError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("A transformation is already running")]
    InFlight,
}

/// Everything needed to dispatch one job request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub url: String,
    pub effect: &'static str,
    pub generation: u64,
}

/// Owns the mood selection and the submission lifecycle. Each accepted
/// submission gets a fresh generation number; completions carrying a
/// stale generation are ignored, so a late response can never clobber a
/// newer one.
#[derive(Debug, Default)]
pub struct SubmissionController {
    phase: Phase,
    selected: Option<&'static Mood>,
    generation: u64,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected(&self) -> Option<&'static Mood> {
        self.selected
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Submitting | Phase::AwaitingAsset)
    }

    /// Marks the mood at `index` exclusively selected. Returns the mood
    /// so the caller can react to the change.
    pub fn select_mood(&mut self, index: usize) -> Option<&'static Mood> {
        self.selected = mood_at(index);
        self.selected
    }

    /// Validates and, on success, moves to `Submitting`. Fails closed:
    /// any input error returns the controller to `Idle` untouched, and a
    /// submission already in flight is rejected outright.
    pub fn begin(&mut self, url: &str) -> Result<Submission, BeginError> {
        if self.is_busy() {
            return Err(BeginError::InFlight);
        }

        self.phase = Phase::Validating;
        let url = url.trim();

        let outcome = if url.is_empty() {
            Err(InputError::EmptyUrl)
        } else if !is_valid_youtube_url(url) {
            Err(InputError::InvalidUrl)
        } else {
            match self.selected {
                None => Err(InputError::NoMoodSelected),
                Some(mood) => Ok(mood),
            }
        };

        match outcome {
            Err(err) => {
                self.phase = Phase::Idle;
                Err(err.into())
            }
            Ok(mood) => {
                self.generation += 1;
                self.phase = Phase::Submitting;
                Ok(Submission {
                    url: url.to_string(),
                    effect: mood.effect,
                    generation: self.generation,
                })
            }
        }
    }

    /// The job request was accepted and the binary fetch is underway.
    /// Returns false (and changes nothing) for a stale generation.
    pub fn asset_pending(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase != Phase::Submitting {
            debug!(generation, "stale asset_pending ignored");
            return false;
        }
        self.phase = Phase::AwaitingAsset;
        true
    }

    /// The asset arrived and was installed. Stale generations are
    /// ignored.
    pub fn complete(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.is_busy() {
            debug!(generation, "stale completion ignored");
            return false;
        }
        self.phase = Phase::Ready;
        true
    }

    /// Any failure after validation. Stale generations are ignored.
    pub fn fail(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.is_busy() {
            debug!(generation, "stale failure ignored");
            return false;
        }
        self.phase = Phase::Failed;
        true
    }

    /// The manual retry transition: clears the mood selection and
    /// returns to `Idle`. Callers release the asset slot and stop
    /// playback alongside.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://youtu.be/dQw4w9WgXcQ";

    fn controller_with_mood(index: usize) -> SubmissionController {
        let mut c = SubmissionController::new();
        c.select_mood(index);
        c
    }

    #[test]
    fn selection_is_exclusive() {
        let mut c = SubmissionController::new();
        c.select_mood(0);
        c.select_mood(3);
        assert_eq!(c.selected().unwrap().effect, "cute");
    }

    #[test]
    fn empty_url_fails_closed() {
        let mut c = controller_with_mood(1);
        assert_eq!(
            c.begin("   "),
            Err(BeginError::Input(InputError::EmptyUrl))
        );
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn invalid_url_fails_closed() {
        let mut c = controller_with_mood(1);
        assert_eq!(
            c.begin("https://vimeo.com/123"),
            Err(BeginError::Input(InputError::InvalidUrl))
        );
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn missing_mood_fails_closed() {
        let mut c = SubmissionController::new();
        assert_eq!(
            c.begin(URL),
            Err(BeginError::Input(InputError::NoMoodSelected))
        );
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn begin_carries_url_and_effect() {
        let mut c = controller_with_mood(1);
        let sub = c.begin(URL).unwrap();
        assert_eq!(sub.url, URL);
        assert_eq!(sub.effect, "energetic");
        assert_eq!(sub.generation, 1);
        assert_eq!(c.phase(), Phase::Submitting);
    }

    #[test]
    fn second_begin_while_in_flight_is_rejected() {
        let mut c = controller_with_mood(0);
        c.begin(URL).unwrap();
        assert_eq!(c.begin(URL), Err(BeginError::InFlight));
        assert_eq!(c.phase(), Phase::Submitting);
    }

    #[test]
    fn happy_path_reaches_ready() {
        let mut c = controller_with_mood(0);
        let sub = c.begin(URL).unwrap();
        assert!(c.asset_pending(sub.generation));
        assert_eq!(c.phase(), Phase::AwaitingAsset);
        assert!(c.complete(sub.generation));
        assert_eq!(c.phase(), Phase::Ready);
    }

    #[test]
    fn stale_generation_is_ignored() {
        let mut c = controller_with_mood(0);
        let first = c.begin(URL).unwrap();
        assert!(c.fail(first.generation));
        c.reset();
        c.select_mood(2);
        let second = c.begin(URL).unwrap();
        assert_ne!(first.generation, second.generation);

        // The first submission's outcome arrives late.
        assert!(!c.complete(first.generation));
        assert!(!c.fail(first.generation));
        assert_eq!(c.phase(), Phase::Submitting);
    }

    #[test]
    fn failure_then_reset_returns_to_idle() {
        let mut c = controller_with_mood(0);
        let sub = c.begin(URL).unwrap();
        assert!(c.fail(sub.generation));
        assert_eq!(c.phase(), Phase::Failed);
        c.reset();
        assert_eq!(c.phase(), Phase::Idle);
        assert!(c.selected().is_none());
    }
}
