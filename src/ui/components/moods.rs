use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::transform::mood::MOODS;
use crate::util::colors;

/// The mood catalog as a horizontal strip: one cell per mood in
/// catalog order, the label line naming whatever the cursor is on.
pub struct MoodStrip {
    selected: Option<usize>,
    cursor: usize,
    focused: bool,
}

impl MoodStrip {
    pub fn new(selected: Option<usize>, cursor: usize, focused: bool) -> Self {
        Self {
            selected,
            cursor,
            focused,
        }
    }
}

impl Widget for MoodStrip {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut symbols = Line::default();
        for (i, mood) in MOODS.iter().enumerate() {
            let is_selected = self.selected == Some(i);
            let is_cursor = self.focused && self.cursor == i;

            let mut style = if is_selected {
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors::NEUTRAL)
            };
            if is_cursor {
                style = style.add_modifier(Modifier::UNDERLINED);
            }

            let marker = if is_selected { "▸" } else { " " };
            symbols.push_span(Span::styled(format!("{marker}{} ", mood.symbol), style));
        }
        buf.set_line(area.x + 1, area.y, &symbols, area.width.saturating_sub(1));

        if area.height > 1 {
            let hovered = &MOODS[self.cursor.min(MOODS.len() - 1)];
            let label = match self.selected {
                Some(i) if !self.focused => format!("selected: {}", MOODS[i].label),
                _ => hovered.label.to_string(),
            };
            buf.set_string(
                area.x + 1,
                area.y + 1,
                label,
                Style::default().fg(colors::ACCENT),
            );
        }
    }
}
