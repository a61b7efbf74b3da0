//! Result box showing the last scan.

use ratatui::prelude::{Buffer, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::render::{advice, tier_label, title};
use crate::scan::{Evaluation, RiskTier};

#[derive(Debug, Default)]
pub struct TuiResult {
    evaluation: Option<Evaluation>,
}

impl TuiResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, evaluation: Evaluation) {
        self.evaluation = Some(evaluation);
    }

    pub fn clear(&mut self) {
        self.evaluation = None;
    }

    pub fn evaluation(&self) -> Option<&Evaluation> {
        self.evaluation.as_ref()
    }

    /// Build the display lines for a given content width.
    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let Some(evaluation) = &self.evaluation else {
            return vec![Line::styled(
                "Press Enter to check the pasted text.",
                Style::default().fg(Color::DarkGray),
            )];
        };

        let width = usize::from(width.max(10));
        let mut lines = Vec::new();

        let mut heading = vec![Span::from(title(evaluation)).bold()];
        if let Some(label) = tier_label(evaluation.tier) {
            heading.push(Span::raw(" "));
            heading.push(Span::styled(format!(" {} ", label), tier_style(evaluation.tier)));
        }
        lines.push(Line::from(heading));

        if !evaluation.is_empty_input() {
            lines.push(Line::default());
            for reason in &evaluation.reasons {
                for (i, part) in textwrap::wrap(reason.message(), width.saturating_sub(2).max(1))
                    .into_iter()
                    .enumerate()
                {
                    let bullet = if i == 0 { "• " } else { "  " };
                    lines.push(Line::raw(format!("{}{}", bullet, part)));
                }
            }
        }

        if let Some(text) = advice(evaluation.tier) {
            lines.push(Line::default());
            for part in textwrap::wrap(text, width) {
                lines.push(Line::styled(
                    part.into_owned(),
                    Style::default().add_modifier(Modifier::ITALIC),
                ));
            }
        }

        lines
    }
}

fn tier_style(tier: RiskTier) -> Style {
    let color = match tier {
        RiskTier::None => Color::Gray,
        RiskTier::Low => Color::Green,
        RiskTier::Medium => Color::Yellow,
        RiskTier::High => Color::Red,
    };
    Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD)
}

impl Widget for &TuiResult {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(" Result ");
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(self.lines(inner.width)).render(inner, buf);
    }
}
