use std::path::PathBuf;
use std::sync::Arc;

use arboard::Clipboard;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{info, warn};

use crate::{
    audio::player::PlaybackState,
    event::events::Event,
    http::{ApiError, cookies::CookieStore},
    transform::{
        asset::ResultAsset,
        controller::BeginError,
        mood::mood_at,
        validate::is_valid_youtube_url,
    },
    ui::{
        app::App,
        input::InputHandler,
        traits::Action,
        tui::{TerminalEvent, Tui},
        views::CookiePrompt,
    },
};

const VOLUME_STEP: u8 = 5;

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<()> {
        if let Some(evt) = tui.next().await {
            Self::handle_event(app, evt, tui).await?;
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt).await;
        }

        Ok(())
    }

    pub async fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<()> {
        match evt {
            TerminalEvent::Init => {}
            TerminalEvent::Quit => app.should_quit = true,
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key).await,
            TerminalEvent::Paste(text) => app.router.on_paste(&text),
            TerminalEvent::Tick => app.state.expire_banner(),
            _ => {}
        }

        Ok(())
    }

    async fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.kind != KeyEventKind::Press {
            return;
        }

        if evt.code == KeyCode::Char('c') && evt.modifiers == KeyModifiers::CONTROL {
            app.should_quit = true;
            return;
        }

        let action = app.router.handle_input(evt, &app.state, &app.ctx).await;

        if let Some(action) = action {
            Self::dispatch_action(app, action);
            return;
        }

        if let Some(action) = InputHandler::handle_key(evt) {
            Self::dispatch_action(app, action);
        }
    }

    fn dispatch_action(app: &mut App, action: Action) {
        match action {
            Action::Quit => app.should_quit = true,
            Action::TogglePlayback => Self::toggle_playback(app),
            Action::VolumeUp => app.ctx.player.volume_up(VOLUME_STEP),
            Action::VolumeDown => app.ctx.player.volume_down(VOLUME_STEP),
            Action::OpenCookiePrompt => {
                app.router.set_overlay(Box::new(CookiePrompt::default()));
            }
            Action::Back => app.router.clear_overlay(),
            Action::None => {}
        }
    }

    fn toggle_playback(app: &mut App) {
        match app.ctx.player.state() {
            PlaybackState::Playing => app.ctx.player.pause(),
            PlaybackState::Paused => app.ctx.player.resume(),
            PlaybackState::Stopped => {
                // Replay the finished clip from the top.
                if let Some(asset) = app.state.assets.current() {
                    let bytes = asset.bytes.clone();
                    if let Err(e) = app.ctx.player.play(bytes) {
                        app.state.raise_error(e.to_string());
                    }
                }
            }
        }
    }

    pub async fn handle_action(app: &mut App, evt: Event) {
        app.router.on_event(&evt, &app.ctx).await;

        match evt {
            Event::MoodChosen { index, url } => Self::on_mood_chosen(app, index, &url),
            Event::SubmitRequested { url } => Self::on_submit(app, &url),
            Event::TransformQueued {
                filename,
                generation,
            } => {
                if app.state.session.asset_pending(generation) {
                    info!("transformation finished, fetching {filename}");
                }
            }
            Event::AssetFetched { asset, generation } => Self::on_asset(app, asset, generation),
            Event::SubmitFailed {
                message,
                generation,
            } => {
                if app.state.session.fail(generation) {
                    app.state.raise_error(message);
                }
            }
            Event::CredentialsRequired { generation } => {
                if app.state.session.fail(generation) {
                    CookieStore::purge();
                    app.router.set_overlay(Box::new(CookiePrompt::default()));
                }
            }
            Event::SaveRequested => Self::on_save(app),
            Event::ShareRequested => Self::on_share(app),
            Event::RetryRequested => Self::on_retry(app),
            Event::CookiesSubmitted(bundle) => {
                app.router.clear_overlay();
                match CookieStore::save(&bundle) {
                    Ok(()) => app.state.raise_info("YouTube cookies saved successfully!"),
                    Err(e) => app.state.raise_error(format!("Failed to save cookies: {e}")),
                }
            }
            Event::CookiePromptDismissed => app.router.clear_overlay(),
            Event::ClipEnded => info!("clip playback finished"),
        }
    }

    fn on_mood_chosen(app: &mut App, index: usize, url: &str) {
        let Some(mood) = mood_at(index) else {
            return;
        };
        app.state.session.select_mood(index);

        let url = url.trim();
        if url.is_empty() {
            app.state.raise_info(format!(
                "{} selected! Now paste a YouTube URL to transform your music.",
                mood.label
            ));
        } else if !is_valid_youtube_url(url) {
            app.state.raise_error("Please enter a valid YouTube URL");
        }
    }

    fn on_submit(app: &mut App, url: &str) {
        let submission = match app.state.session.begin(url) {
            Ok(submission) => submission,
            Err(BeginError::InFlight) => {
                app.state
                    .raise_info("Hold on, a transformation is already running");
                return;
            }
            Err(BeginError::Input(e)) => {
                app.state.raise_error(e.to_string());
                return;
            }
        };

        app.state.clear_banner();
        let api = app.ctx.api.clone();
        let tx = app.ctx.event_tx.clone();

        app.task_manager.spawn(
            "transform",
            tokio::spawn(async move {
                let generation = submission.generation;
                let cookies = CookieStore::load();

                if let Err(e) = api.probe().await {
                    let _ = tx.send(Event::SubmitFailed {
                        message: e.to_string(),
                        generation,
                    });
                    return;
                }

                match api
                    .request_transform(&submission.url, submission.effect, cookies.as_ref())
                    .await
                {
                    Ok(filename) => {
                        let _ = tx.send(Event::TransformQueued {
                            filename: filename.clone(),
                            generation,
                        });

                        match api.fetch_audio(&filename).await {
                            Ok(bytes) => {
                                let asset = ResultAsset {
                                    bytes: Arc::from(bytes),
                                    remote_url: api.audio_url(&filename),
                                    filename,
                                    effect: submission.effect.to_string(),
                                };
                                let _ = tx.send(Event::AssetFetched { asset, generation });
                            }
                            Err(e) => {
                                let _ = tx.send(Event::SubmitFailed {
                                    message: e.to_string(),
                                    generation,
                                });
                            }
                        }
                    }
                    Err(ApiError::BotDetected) => {
                        let _ = tx.send(Event::CredentialsRequired { generation });
                    }
                    Err(e) => {
                        let _ = tx.send(Event::SubmitFailed {
                            message: e.to_string(),
                            generation,
                        });
                    }
                }
            }),
        );
    }

    fn on_asset(app: &mut App, asset: ResultAsset, generation: u64) {
        if !app.state.session.complete(generation) {
            return;
        }

        // Release the outgoing clip before the replacement goes live.
        app.ctx.player.stop();
        let bytes = app.state.assets.install(asset).bytes.clone();

        if let Err(e) = app.ctx.player.play(bytes) {
            // The clip is still saveable, so a playback failure only logs.
            warn!("auto-play failed: {e}");
        }
    }

    fn on_save(app: &mut App) {
        let Some(asset) = app.state.assets.current() else {
            return;
        };

        let path = download_dir().join(asset.download_name());
        match std::fs::write(&path, &asset.bytes) {
            Ok(()) => {
                info!("clip saved to {}", path.display());
                app.state.raise_info(format!("Saved to {}", path.display()));
            }
            Err(e) => app.state.raise_error(format!("Failed to save audio: {e}")),
        }
    }

    fn on_share(app: &mut App) {
        let Some(asset) = app.state.assets.current() else {
            return;
        };

        let url = asset.remote_url.clone();
        match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(url)) {
            Ok(()) => app.state.raise_info("Audio URL copied to clipboard!"),
            Err(e) => app
                .state
                .raise_error(format!("Failed to copy URL to clipboard: {e}")),
        }
    }

    fn on_retry(app: &mut App) {
        app.ctx.player.stop();
        app.state.assets.release();
        app.state.session.reset();
        app.state.clear_banner();
    }
}

fn download_dir() -> PathBuf {
    directories::UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}
