use flume::Receiver;
use ratatui::Frame;

use crate::{
    audio::player::ClipPlayer,
    event::events::Event,
    http::ApiService,
    ui::{
        context::AppContext,
        layout::AppLayout,
        router::Router,
        state::AppState,
        tui,
        util::handler::EventHandler,
        views::Transform,
    },
    util::task::TaskManager,
};

pub struct App {
    pub ctx: AppContext,
    pub state: AppState,
    pub router: Router,
    pub task_manager: TaskManager,
    pub event_rx: Receiver<Event>,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();
        let api = ApiService::new()?;
        let player = ClipPlayer::new(event_tx.clone())?;

        Ok(Self {
            ctx: AppContext {
                api,
                player,
                event_tx,
            },
            state: AppState::new(),
            router: Router::new(Box::new(Transform::default())),
            task_manager: TaskManager::new(),
            event_rx,
            has_focus: true,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?;
        tui.enter()?;

        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.task_manager.abort_all();
        tui.exit()?;
        Ok(())
    }

    fn ui(&mut self, frame: &mut Frame) {
        if self.has_focus {
            let area = frame.area();
            AppLayout::new(self).render(frame, area);
        }
    }
}
