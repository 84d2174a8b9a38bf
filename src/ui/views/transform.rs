use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::event::events::Event;
use crate::transform::controller::Phase;
use crate::transform::mood::MOODS;
use crate::ui::{
    components::{banner::BannerWidget, moods::MoodStrip, spinner::Spinner},
    context::AppContext,
    state::AppState,
    traits::{Action, View},
};
use crate::util::colors;

/// Pre-filled songs the user can transform without hunting for a
/// link.
const SHORTCUTS: [(&str, &str); 4] = [
    (
        "Rick Astley - Never Gonna Give You Up",
        "https://youtu.be/dQw4w9WgXcQ",
    ),
    ("PSY - Gangnam Style", "https://youtu.be/9bZkp7q19f0"),
    (
        "Luis Fonsi - Despacito ft. Daddy Yankee",
        "https://youtu.be/kJQP7kiw5Fk",
    ),
    ("Alan Walker - Faded", "https://youtu.be/60ItHLz5WEA"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Url,
    Moods,
    Shortcuts,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Url => Focus::Moods,
            Focus::Moods => Focus::Shortcuts,
            Focus::Shortcuts => Focus::Url,
        }
    }
}

/// The main screen: mood strip, URL field, banner slot, and a body
/// that is either the shortcut list, the busy spinner, or the result
/// panel depending on where the submission stands.
pub struct Transform {
    input: String,
    focus: Focus,
    mood_cursor: usize,
    shortcut_state: ListState,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            input: String::new(),
            focus: Focus::Url,
            mood_cursor: 0,
            shortcut_state: ListState::default(),
        }
    }
}

impl Transform {
    fn submit(&self, ctx: &AppContext) {
        let _ = ctx.event_tx.send(Event::SubmitRequested {
            url: self.input.clone(),
        });
    }

    fn choose_mood(&self, ctx: &AppContext) {
        let _ = ctx.event_tx.send(Event::MoodChosen {
            index: self.mood_cursor,
            url: self.input.clone(),
        });
    }

    fn selected_index(state: &AppState) -> Option<usize> {
        let selected = state.session.selected()?;
        MOODS.iter().position(|m| m.effect == selected.effect)
    }

    fn render_body(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext) {
        match state.session.phase() {
            Phase::Submitting => {
                let spinner = Spinner::default()
                    .with_style(Style::default().fg(colors::PRIMARY))
                    .with_label("Transforming your music...");
                f.render_widget(spinner, area);
            }
            Phase::AwaitingAsset => {
                let spinner = Spinner::default()
                    .with_style(Style::default().fg(colors::PRIMARY))
                    .with_label("Fetching your clip...");
                f.render_widget(spinner, area);
            }
            Phase::Ready if state.assets.current().is_some() => {
                self.render_result(f, area, state, ctx);
            }
            _ => self.render_shortcuts(f, area),
        }
    }

    fn render_result(&self, f: &mut Frame, area: Rect, state: &AppState, _ctx: &AppContext) {
        let Some(asset) = state.assets.current() else {
            return;
        };

        let lines = vec![
            format!("  {}", asset.download_name()),
            String::new(),
            "  [p] play/pause   [s] save   [c] copy link   [r] retry".to_string(),
        ];
        let panel = Paragraph::new(lines.join("\n")).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Your clip")
                .border_style(Style::default().fg(colors::PRIMARY)),
        );
        f.render_widget(panel, area);
    }

    fn render_shortcuts(&mut self, f: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Shortcuts;
        let items: Vec<ListItem> = SHORTCUTS
            .iter()
            .map(|(title, _)| ListItem::new(format!("  {title}")))
            .collect();

        let border_style = if focused {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Or try one of these")
                    .border_style(border_style),
            )
            .highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        if focused && self.shortcut_state.selected().is_none() {
            self.shortcut_state.select(Some(0));
        }
        f.render_stateful_widget(list, area, &mut self.shortcut_state);
    }
}

#[async_trait]
impl View for Transform {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(1),
            ])
            .split(area);

        let moods_area = chunks[0];
        let input_area = chunks[1];
        let banner_area = chunks[2];
        let body_area = chunks[3];

        let moods_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(colors::NEUTRAL));
        let moods_inner = moods_block.inner(moods_area);
        f.render_widget(moods_block, moods_area);
        f.render_widget(
            MoodStrip::new(
                Self::selected_index(state),
                self.mood_cursor,
                self.focus == Focus::Moods,
            ),
            moods_inner,
        );

        let input_style = if self.focus == Focus::Url {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };
        let input = Paragraph::new(self.input.clone()).block(
            Block::default()
                .borders(Borders::ALL)
                .title("YouTube link")
                .border_style(input_style),
        );
        f.render_widget(input, input_area);

        f.render_widget(BannerWidget::new(state.banner.as_ref()), banner_area);

        self.render_body(f, body_area, state, ctx);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        if key.code == KeyCode::Tab {
            self.focus = self.focus.next();
            return Some(Action::None);
        }

        // Clip actions work from either browse focus; while the URL
        // field has focus these characters are just typing. Save and
        // share need a clip, retry needs a finished submission.
        if self.focus != Focus::Url {
            let has_clip = state.assets.current().is_some();
            let can_retry = matches!(state.session.phase(), Phase::Ready | Phase::Failed);
            match key.code {
                KeyCode::Char('s') if has_clip => {
                    let _ = ctx.event_tx.send(Event::SaveRequested);
                    return Some(Action::None);
                }
                KeyCode::Char('c') if has_clip => {
                    let _ = ctx.event_tx.send(Event::ShareRequested);
                    return Some(Action::None);
                }
                KeyCode::Char('r') if can_retry => {
                    let _ = ctx.event_tx.send(Event::RetryRequested);
                    return Some(Action::None);
                }
                _ => {}
            }
        }

        match self.focus {
            Focus::Url => match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => None,
                KeyCode::Enter => {
                    self.submit(ctx);
                    Some(Action::None)
                }
                KeyCode::Char(c) => {
                    self.input.push(c);
                    Some(Action::None)
                }
                KeyCode::Backspace => {
                    self.input.pop();
                    Some(Action::None)
                }
                KeyCode::Esc => {
                    self.focus = Focus::Moods;
                    Some(Action::None)
                }
                _ => None,
            },
            Focus::Moods => match key.code {
                KeyCode::Left | KeyCode::Char('h') => {
                    self.mood_cursor = self.mood_cursor.checked_sub(1).unwrap_or(MOODS.len() - 1);
                    Some(Action::None)
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    self.mood_cursor = (self.mood_cursor + 1) % MOODS.len();
                    Some(Action::None)
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.choose_mood(ctx);
                    Some(Action::None)
                }
                KeyCode::Char('/') | KeyCode::Char('i') => {
                    self.focus = Focus::Url;
                    Some(Action::None)
                }
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    // 1 through 9 then 0 address the catalog in order.
                    let index = c.to_digit(10).map(|d| (d + 9) as usize % 10)?;
                    self.mood_cursor = index;
                    self.choose_mood(ctx);
                    Some(Action::None)
                }
                _ => None,
            },
            Focus::Shortcuts => match key.code {
                KeyCode::Down | KeyCode::Char('j') => {
                    let i = self.shortcut_state.selected().unwrap_or(0);
                    self.shortcut_state
                        .select(Some((i + 1).min(SHORTCUTS.len() - 1)));
                    Some(Action::None)
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    let i = self.shortcut_state.selected().unwrap_or(0);
                    self.shortcut_state.select(Some(i.saturating_sub(1)));
                    Some(Action::None)
                }
                KeyCode::Enter => {
                    if let Some(i) = self.shortcut_state.selected() {
                        let (_, url) = SHORTCUTS[i];
                        self.input = url.to_string();
                        self.submit(ctx);
                    }
                    Some(Action::None)
                }
                KeyCode::Char('/') | KeyCode::Char('i') => {
                    self.focus = Focus::Url;
                    Some(Action::None)
                }
                _ => None,
            },
        }
    }

    async fn on_event(&mut self, event: &Event, _ctx: &AppContext) {
        match event {
            Event::RetryRequested => {
                self.input.clear();
                self.focus = Focus::Url;
                self.shortcut_state.select(None);
            }
            // Land on the mood strip so the clip action keys are live.
            Event::AssetFetched { .. } => self.focus = Focus::Moods,
            _ => {}
        }
    }

    fn on_paste(&mut self, text: &str) {
        self.input.push_str(text.trim());
        self.focus = Focus::Url;
    }
}
