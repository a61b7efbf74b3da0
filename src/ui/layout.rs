use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};

/// Screen regions, recomputed whenever the terminal size changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppLayout {
    pub full_area: Rect,
    /// Inside of the outer frame.
    pub inner: Rect,
    pub input: Rect,
    pub result: Rect,
    pub hints: Rect,
}

impl AppLayout {
    pub fn build(area: Rect) -> Self {
        let inner = Self::outer_block().inner(area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40), // Top: input box
                Constraint::Min(6),         // Middle: result box
                Constraint::Length(1),      // Bottom: key hints
            ])
            .split(inner);
        Self {
            full_area: area,
            inner,
            input: chunks[0],
            result: chunks[1],
            hints: chunks[2],
        }
    }

    pub fn outer_block() -> Block<'static> {
        Block::default().borders(Borders::ALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_stack_vertically() {
        let layout = AppLayout::build(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.inner, Rect::new(1, 1, 78, 22));
        assert_eq!(layout.input.y, 1);
        assert_eq!(layout.result.y, layout.input.y + layout.input.height);
        assert_eq!(layout.hints.height, 1);
        assert_eq!(layout.hints.y, 22);
    }
}
