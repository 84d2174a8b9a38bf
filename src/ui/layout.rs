use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::border,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::{app::App, components::player::ClipPlayerWidget};
use crate::util::colors;

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(area);

        let content_area = chunks[0];
        let player_area = chunks[1];

        let content_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title("moodify")
            .title_alignment(Alignment::Center);
        let content_inner = content_block.inner(content_area);
        f.render_widget(content_block, content_area);

        self.app
            .router
            .render(f, content_inner, &self.app.state, &self.app.ctx);

        if let Some(asset) = self.app.state.assets.current() {
            let clip_name = asset.download_name();
            f.render_widget(
                ClipPlayerWidget::new(
                    self.app.ctx.player.progress(),
                    &clip_name,
                    self.app.ctx.player.is_playing(),
                ),
                player_area,
            );
        } else {
            let hint = Paragraph::new("Pick a mood, paste a YouTube link, press Enter")
                .style(Style::default().fg(colors::NEUTRAL))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_set(border::ROUNDED),
                );
            f.render_widget(hint, player_area);
        }
    }
}
