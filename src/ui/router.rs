use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use crate::event::events::Event;
use crate::ui::context::AppContext;
use crate::ui::state::AppState;
use crate::ui::traits::{Action, View};

/// One root view plus an optional modal overlay. While an overlay is
/// up it gets all input; the root keeps receiving events so it stays
/// current underneath.
pub struct Router {
    root: Box<dyn View>,
    overlay: Option<Box<dyn View>>,
}

impl Router {
    pub fn new(root: Box<dyn View>) -> Self {
        Self {
            root,
            overlay: None,
        }
    }

    pub fn set_overlay(&mut self, view: Box<dyn View>) {
        self.overlay = Some(view);
    }

    pub fn clear_overlay(&mut self) {
        self.overlay = None;
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext) {
        self.root.render(f, area, state, ctx);
        if let Some(overlay) = &mut self.overlay {
            overlay.render(f, area, state, ctx);
        }
    }

    pub async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        if let Some(overlay) = &mut self.overlay {
            overlay.handle_input(key, state, ctx).await
        } else {
            self.root.handle_input(key, state, ctx).await
        }
    }

    pub async fn on_event(&mut self, event: &Event, ctx: &AppContext) {
        self.root.on_event(event, ctx).await;
        if let Some(overlay) = &mut self.overlay {
            overlay.on_event(event, ctx).await;
        }
    }

    pub fn on_paste(&mut self, text: &str) {
        if let Some(overlay) = &mut self.overlay {
            overlay.on_paste(text);
        } else {
            self.root.on_paste(text);
        }
    }
}
