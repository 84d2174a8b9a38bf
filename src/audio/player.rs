use std::io::Cursor;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, RwLock};

use flume::Sender;
use rodio::{Decoder, Source};
use tracing::debug;

use crate::audio::engine::PlaybackEngine;
use crate::audio::error::AudioError;
use crate::audio::progress::ClipProgress;
use crate::event::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

/// Plays the single current clip. All methods take `&self`; state
/// lives behind atomics and a lock so the monitor task and the UI
/// task share it freely.
pub struct ClipPlayer {
    engine: Arc<PlaybackEngine>,
    state: Arc<RwLock<PlaybackState>>,
    progress: Arc<ClipProgress>,
    volume: AtomicU8,
    event_tx: Sender<Event>,
}

impl ClipPlayer {
    pub fn new(event_tx: Sender<Event>) -> color_eyre::Result<Self> {
        let player = Self {
            engine: Arc::new(PlaybackEngine::new()?),
            state: Arc::new(RwLock::new(PlaybackState::Stopped)),
            progress: Arc::new(ClipProgress::new()),
            volume: AtomicU8::new(100),
            event_tx,
        };

        player.start_monitor();
        Ok(player)
    }

    fn start_monitor(&self) {
        let engine = self.engine.clone();
        let progress = self.progress.clone();
        let state = self.state.clone();
        let event_tx = self.event_tx.clone();

        tokio::spawn(async move {
            loop {
                tokio::time::sleep(std::time::Duration::from_millis(100)).await;

                let is_playing = {
                    let guard = state.read().unwrap();
                    *guard == PlaybackState::Playing
                };

                if is_playing {
                    progress.set_current_position(engine.get_pos());

                    if engine.is_empty() {
                        let mut guard = state.write().unwrap();
                        *guard = PlaybackState::Stopped;
                        drop(guard);
                        let _ = event_tx.send(Event::ClipEnded);
                    }
                }
            }
        });
    }

    /// Decodes and starts the clip from the beginning, replacing
    /// whatever was queued before.
    pub fn play(&self, bytes: Arc<[u8]>) -> Result<(), AudioError> {
        self.stop();

        let decoder = Decoder::new(Cursor::new(bytes))
            .map_err(|e| AudioError::DecodingError(e.to_string()))?;

        self.progress.reset();
        if let Some(total) = decoder.total_duration() {
            self.progress.set_total_duration(total);
        }

        self.apply_volume();
        self.engine.play_source(decoder);

        let mut guard = self.state.write().unwrap();
        *guard = PlaybackState::Playing;
        debug!("clip playback started");
        Ok(())
    }

    pub fn stop(&self) {
        self.engine.stop();
        self.progress.reset();
        let mut guard = self.state.write().unwrap();
        *guard = PlaybackState::Stopped;
    }

    pub fn pause(&self) {
        self.engine.pause();
        let mut guard = self.state.write().unwrap();
        if *guard == PlaybackState::Playing {
            *guard = PlaybackState::Paused;
        }
    }

    pub fn resume(&self) {
        self.engine.play();
        let mut guard = self.state.write().unwrap();
        if *guard == PlaybackState::Paused {
            *guard = PlaybackState::Playing;
        }
    }

    pub fn state(&self) -> PlaybackState {
        *self.state.read().unwrap()
    }

    pub fn is_playing(&self) -> bool {
        self.state() == PlaybackState::Playing
    }

    pub fn progress(&self) -> &ClipProgress {
        &self.progress
    }

    pub fn volume(&self) -> u8 {
        self.volume.load(Ordering::Relaxed)
    }

    pub fn volume_up(&self, amount: u8) {
        let current = self.volume.load(Ordering::Relaxed);
        self.set_volume(current.saturating_add(amount).min(100));
    }

    pub fn volume_down(&self, amount: u8) {
        let current = self.volume.load(Ordering::Relaxed);
        self.set_volume(current.saturating_sub(amount));
    }

    fn set_volume(&self, volume: u8) {
        self.volume.store(volume, Ordering::Relaxed);
        self.apply_volume();
    }

    fn apply_volume(&self) {
        let volume = self.volume.load(Ordering::Relaxed) as f32 / 100.0;
        self.engine.set_volume(volume);
    }
}
