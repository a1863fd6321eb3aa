use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc::UnboundedSender;

use super::{Component, MovieSlider};
use crate::{
    action::Action,
    config::Config,
    tmdb::Category,
    tui::{Event, Frame},
};

/// Rows reserved at the bottom of the screen for the status bar.
const STATUS_BAR_HEIGHT: u16 = 2;

/// The home screen composer: a fixed vertical arrangement of a header banner
/// and one catalog row per section.
///
/// Pure layout plus focus routing; all data concerns live in the child
/// sliders. Focus moves between rows with `SectionUp`/`SectionDown`, and the
/// focused row is the one that reacts to scroll and refresh actions.
pub struct Home {
    command_tx: Option<UnboundedSender<Action>>,
    config: Config,
    sliders: Vec<MovieSlider>,
    focused: usize,
}

impl Home {
    pub fn new() -> Self {
        let mut sliders: Vec<MovieSlider> = Category::sections()
            .into_iter()
            .map(MovieSlider::new)
            .collect();
        if let Some(first) = sliders.first_mut() {
            first.set_focused(true);
        }
        Self {
            command_tx: None,
            config: Config::default(),
            sliders,
            focused: 0,
        }
    }

    pub fn sliders(&self) -> &[MovieSlider] {
        &self.sliders
    }

    pub fn focused_section(&self) -> usize {
        self.focused
    }

    fn focus(&mut self, index: usize) {
        if index >= self.sliders.len() {
            return;
        }
        self.sliders[self.focused].set_focused(false);
        self.focused = index;
        self.sliders[self.focused].set_focused(true);
    }

    fn draw_header(&self, f: &mut Frame<'_>, area: Rect) {
        let title = Line::from(vec![
            Span::styled(
                "cinetui",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  movie discovery", Style::default().fg(Color::Gray)),
        ]);
        let hint = Line::from(Span::styled(
            "↑/↓ sections · ←/→ scroll · r refresh · q quit",
            Style::default().fg(Color::DarkGray),
        ));
        f.render_widget(Paragraph::new(vec![title, hint]), area);
    }
}

impl Default for Home {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Home {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        for slider in self.sliders.iter_mut() {
            slider.register_action_handler(tx.clone())?;
        }
        self.command_tx = Some(tx);
        Ok(())
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        for slider in self.sliders.iter_mut() {
            slider.register_config_handler(config.clone())?;
        }
        self.config = config;
        Ok(())
    }

    fn init(&mut self, area: Rect) -> Result<()> {
        for slider in self.sliders.iter_mut() {
            slider.init(area)?;
        }
        Ok(())
    }

    fn handle_events(&mut self, event: Option<Event>) -> Result<Option<Action>> {
        for slider in self.sliders.iter_mut() {
            if let Some(action) = slider.handle_events(event.clone())? {
                if let Some(tx) = &self.command_tx {
                    tx.send(action)?;
                }
            }
        }
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::SectionUp => self.focus(self.focused.saturating_sub(1)),
            Action::SectionDown => self.focus((self.focused + 1).min(self.sliders.len() - 1)),
            _ => {}
        }

        for slider in self.sliders.iter_mut() {
            if let Some(follow_up) = slider.update(action.clone())? {
                if let Some(tx) = &self.command_tx {
                    tx.send(follow_up)?;
                }
            }
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let mut constraints = vec![Constraint::Length(2)];
        constraints.extend(vec![Constraint::Fill(1); self.sliders.len()]);
        constraints.push(Constraint::Length(STATUS_BAR_HEIGHT));
        let layout = Layout::new(Direction::Vertical, constraints).split(area);

        self.draw_header(f, layout[0]);
        for (slider, section_area) in self.sliders.iter_mut().zip(layout.iter().skip(1)) {
            slider.draw(f, *section_area)?;
        }

        Ok(())
    }
}
