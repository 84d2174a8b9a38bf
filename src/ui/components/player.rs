use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    symbols::border,
    text::ToSpan,
    widgets::{Block, Borders, Gauge, Widget},
};

use crate::audio::progress::ClipProgress;
use crate::util::colors;

/// Progress strip for the current clip: name on top, elapsed over
/// total inside the gauge.
pub struct ClipPlayerWidget<'a> {
    progress: &'a ClipProgress,
    clip_name: &'a str,
    is_playing: bool,
}

impl<'a> ClipPlayerWidget<'a> {
    pub fn new(progress: &'a ClipProgress, clip_name: &'a str, is_playing: bool) -> Self {
        Self {
            progress,
            clip_name,
            is_playing,
        }
    }
}

impl Widget for ClipPlayerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (current, total) = self.progress.get_progress();
        let ratio = if total > 0 {
            (current as f64 / total as f64).min(1.0)
        } else {
            0.0
        };

        let icon = if self.is_playing { "▶" } else { "⏸" };
        let title = format!("{icon}  {}", self.clip_name);
        let duration = format!("{} / {}", format_duration(current), format_duration(total));

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title_top(title)
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_set(border::ROUNDED),
            )
            .gauge_style(Style::default().fg(colors::SECONDARY).bg(colors::NEUTRAL))
            .ratio(ratio)
            .label(duration.to_span().fg(Color::White));

        gauge.render(area, buf);
    }
}

fn format_duration(duration: u64) -> String {
    let total_seconds = duration / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_format_as_minutes_and_seconds() {
        assert_eq!(format_duration(0), "00:00");
        assert_eq!(format_duration(61_500), "01:01");
        assert_eq!(format_duration(600_000), "10:00");
    }
}
