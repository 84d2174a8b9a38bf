use rodio::{OutputStream, OutputStreamBuilder, Sink, Source};

use crate::audio::error::AudioError;

/// Thin wrapper over the rodio output stream and its sink. The stream
/// handle must stay alive as long as anything plays.
pub struct PlaybackEngine {
    _stream: OutputStream,
    sink: Sink,
}

impl PlaybackEngine {
    pub fn new() -> Result<Self, AudioError> {
        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| AudioError::DeviceError(e.to_string()))?;
        let sink = Sink::connect_new(stream.mixer());

        Ok(Self {
            _stream: stream,
            sink,
        })
    }

    pub fn play_source<S>(&self, source: S)
    where
        S: Source<Item = f32> + Send + 'static,
    {
        self.sink.append(source);
    }

    pub fn set_volume(&self, volume: f32) {
        self.sink.set_volume(volume);
    }

    pub fn pause(&self) {
        self.sink.pause();
    }

    pub fn play(&self) {
        self.sink.play();
    }

    pub fn stop(&self) {
        self.sink.stop();
    }

    pub fn is_paused(&self) -> bool {
        self.sink.is_paused()
    }

    pub fn is_empty(&self) -> bool {
        self.sink.empty()
    }

    pub fn get_pos(&self) -> std::time::Duration {
        self.sink.get_pos()
    }
}
