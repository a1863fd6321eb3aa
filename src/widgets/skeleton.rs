use ratatui::{prelude::*, widgets::*};

use crate::widgets::MovieCard;

/// Placeholder strip shown while a row has no data yet.
///
/// Draws one empty card outline per viewport slot; also covers the case of an
/// empty result page, which is indistinguishable from "still loading".
#[derive(Clone, Copy, Debug, Default)]
pub struct SliderSkeleton;

impl Widget for SliderSkeleton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let slots = (area.width / MovieCard::WIDTH).max(1) as usize;
        let constraints = vec![Constraint::Length(MovieCard::WIDTH); slots];
        let chunks = Layout::new(Direction::Horizontal, constraints).split(area);

        for chunk in chunks.iter() {
            let block = Block::bordered().border_style(Style::default().fg(Color::DarkGray));
            let inner = block.inner(*chunk);
            block.render(*chunk, buf);

            let placeholder = Paragraph::new("...")
                .style(Style::default().fg(Color::DarkGray))
                .centered();
            placeholder.render(inner, buf);
        }
    }
}
