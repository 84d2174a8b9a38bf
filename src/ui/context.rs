use std::sync::Arc;

use flume::Sender;

use crate::audio::player::ClipPlayer;
use crate::event::events::Event;
use crate::http::ApiService;

/// Shared handles every view can reach: the API client, the clip
/// player, and the channel intents are raised on.
pub struct AppContext {
    pub api: Arc<ApiService>,
    pub player: ClipPlayer,
    pub event_tx: Sender<Event>,
}
