//! Horizontal usage bar for budget consumption

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::trip::Severity;

/// Eighth-width block characters for the partially filled cell
const PARTIAL: [char; 8] = [' ', '▏', '▎', '▍', '▌', '▋', '▊', '▉'];
const FULL: char = '█';
const EMPTY: char = '░';

/// A one-line bar filled to a percentage, capped at 100
pub struct UsageBar {
    /// Percentage to show; values above 100 draw a full bar
    percent: f64,
    style: Style,
    empty_style: Style,
}

impl UsageBar {
    pub fn new(percent: f64) -> Self {
        Self {
            percent,
            style: Style::default().fg(Color::Green),
            empty_style: Style::default().fg(Color::DarkGray),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Colors the bar by budget severity
    pub fn severity(self, severity: Severity) -> Self {
        self.style(Style::default().fg(severity_color(severity)))
    }

    /// Filled width in eighths of a cell
    fn filled_eighths(&self, width: u16) -> usize {
        let ratio = if self.percent.is_finite() {
            (self.percent / 100.0).clamp(0.0, 1.0)
        } else {
            0.0
        };
        (ratio * width as f64 * 8.0).round() as usize
    }
}

/// Display color for a budget severity
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Ok => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Critical => Color::Red,
    }
}

impl Widget for UsageBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let eighths = self.filled_eighths(area.width);
        let full_cells = eighths / 8;
        let remainder = eighths % 8;

        for i in 0..area.width as usize {
            let (symbol, style) = if i < full_cells {
                (FULL, self.style)
            } else if i == full_cells && remainder > 0 {
                (PARTIAL[remainder], self.style)
            } else {
                (EMPTY, self.empty_style)
            };
            if let Some(cell) = buf.cell_mut((area.x + i as u16, area.y)) {
                cell.set_char(symbol).set_style(style);
            }
        }
    }
}
