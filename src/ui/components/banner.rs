use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::ui::state::{Banner, BannerKind};
use crate::util::colors;

/// Renders the message slot. Errors read in the error color, hints in
/// the accent color; an empty slot renders nothing so the layout does
/// not jump.
pub struct BannerWidget<'a> {
    banner: Option<&'a Banner>,
}

impl<'a> BannerWidget<'a> {
    pub fn new(banner: Option<&'a Banner>) -> Self {
        Self { banner }
    }
}

impl Widget for BannerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(banner) = self.banner else {
            return;
        };

        let style = match banner.kind {
            BannerKind::Error => Style::default()
                .fg(colors::ERROR)
                .add_modifier(Modifier::BOLD),
            BannerKind::Info => Style::default().fg(colors::ACCENT),
        };

        buf.set_string(area.x + 1, area.y, &banner.text, style);
    }
}
