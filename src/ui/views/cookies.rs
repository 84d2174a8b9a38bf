use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::event::events::Event;
use crate::http::cookies::CookieBundle;
use crate::ui::{
    context::AppContext,
    state::AppState,
    traits::{Action, View},
};
use crate::util::colors;

const FIELDS: [&str; 4] = ["VISITOR_INFO1_LIVE", "LOGIN_INFO", "SID", "HSID"];

/// Modal that collects the four YouTube cookies. Saving hands the
/// bundle back through the event channel; Esc dismisses without
/// touching the stored bundle.
pub struct CookiePrompt {
    values: [String; 4],
    field: usize,
}

impl Default for CookiePrompt {
    fn default() -> Self {
        Self {
            values: Default::default(),
            field: 0,
        }
    }
}

impl CookiePrompt {
    fn bundle(&self) -> CookieBundle {
        CookieBundle {
            visitor_info: self.values[0].clone(),
            login_info: self.values[1].clone(),
            sid: self.values[2].clone(),
            hsid: self.values[3].clone(),
        }
    }

    fn centered(area: Rect) -> Rect {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(16),
                Constraint::Min(1),
            ])
            .split(area);
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(2),
                Constraint::Length(60),
                Constraint::Min(2),
            ])
            .split(vertical[1]);
        horizontal[1]
    }
}

#[async_trait]
impl View for CookiePrompt {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, _ctx: &AppContext) {
        let popup = Self::centered(area);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .title("YouTube authentication required")
            .border_style(Style::default().fg(colors::PRIMARY));
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let mut constraints = vec![Constraint::Length(2)];
        constraints.extend([Constraint::Length(3); 4]);
        constraints.push(Constraint::Min(1));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        let intro = Paragraph::new(
            "Open youtube.com logged in, inspect its cookies and copy these values:",
        )
        .style(Style::default().fg(colors::ACCENT));
        f.render_widget(intro, rows[0]);

        for (i, name) in FIELDS.iter().enumerate() {
            let style = if self.field == i {
                Style::default().fg(colors::PRIMARY)
            } else {
                Style::default().fg(colors::NEUTRAL)
            };
            let value = Paragraph::new(self.values[i].clone()).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(*name)
                    .border_style(style),
            );
            f.render_widget(value, rows[i + 1]);
        }

        let hint = Paragraph::new("Enter save   Tab next field   Esc cancel").style(
            Style::default()
                .fg(colors::NEUTRAL)
                .add_modifier(Modifier::ITALIC),
        );
        f.render_widget(hint, rows[5]);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => None,
            KeyCode::Tab | KeyCode::Down => {
                self.field = (self.field + 1) % FIELDS.len();
                Some(Action::None)
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.field = self.field.checked_sub(1).unwrap_or(FIELDS.len() - 1);
                Some(Action::None)
            }
            KeyCode::Enter => {
                let _ = ctx.event_tx.send(Event::CookiesSubmitted(self.bundle()));
                Some(Action::None)
            }
            KeyCode::Esc => {
                let _ = ctx.event_tx.send(Event::CookiePromptDismissed);
                Some(Action::None)
            }
            KeyCode::Char(c) => {
                self.values[self.field].push(c);
                Some(Action::None)
            }
            KeyCode::Backspace => {
                self.values[self.field].pop();
                Some(Action::None)
            }
            _ => Some(Action::None),
        }
    }

    fn on_paste(&mut self, text: &str) {
        self.values[self.field].push_str(text.trim());
    }
}
