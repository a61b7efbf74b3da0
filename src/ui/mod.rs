//! User interface module for the TUI application.
//!
//! The screen mirrors a simple checker page: an input box on top, the result
//! box below it, and a line of key hints at the bottom.

use ratatui::{style::{Color, Style, Stylize}, text::Line, widgets::{Paragraph, Widget}};

use crate::app::App;
use layout::AppLayout;

pub mod input;
pub mod layout;
pub mod result;

const HINTS: &str = " Enter: check | Ctrl+O: newline | Ctrl+V: paste | Ctrl+L: clear | Esc: quit ";

impl Widget for &App {
    fn render(self, area: ratatui::prelude::Rect, buf: &mut ratatui::prelude::Buffer) {
        let layout = AppLayout::build(area);

        let top = Line::from(" PhishCheck ".bold());
        AppLayout::outer_block().title(top).render(area, buf);

        self.tui_input.render(layout.input, buf);
        self.tui_result.render(layout.result, buf);

        let hints = Line::from(HINTS).style(Style::default().fg(Color::DarkGray));
        Paragraph::new(hints).render(layout.hints, buf);
    }
}
