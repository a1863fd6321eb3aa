use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

use super::Component;
use crate::action::Action;
use crate::tui::Frame;

/// Footer: app identity on one line, transient messages on the other.
///
/// Shows "Loading..." until the first row fetch settles either way; a failed
/// row reports its own error inline, so nothing fatal ever surfaces here.
pub struct StatusBar {
    message: Option<String>,
    is_loading: bool,
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            message: None,
            is_loading: true,
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::CategoryLoaded(..) | Action::CategoryFailed(..) => self.is_loading = false,
            Action::SystemMessage(message) => self.message = Some(message),
            Action::Error(message) => self.message = Some(message),
            _ => {}
        };

        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ],
        )
        .split(area);
        f.render_widget(Clear, layout[1]);
        f.render_widget(Clear, layout[2]);

        let name = Span::styled(
            concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::Gray).italic(),
        );
        let status_line = Paragraph::new(name).style(Style::default().bg(Color::Black));
        f.render_widget(status_line, layout[1]);

        let message_line = if self.is_loading {
            Paragraph::new("Loading...")
        } else {
            Paragraph::new(self.message.clone().unwrap_or_default())
        };
        f.render_widget(message_line, layout[2]);

        Ok(())
    }
}
