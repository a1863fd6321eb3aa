use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc::UnboundedSender;

use super::Component;
use crate::{
    action::Action,
    config::Config,
    tmdb::{Category, Movie},
    tui::Frame,
    widgets::{MovieCard, ScrollableRow, SliderSkeleton},
};

/// The one user-visible error class for a row; every failure kind collapses
/// into it.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching content. Please refresh.";

/// A horizontally scrollable strip of movie cards for one catalog slice.
///
/// State machine: empty + no error renders the skeleton (loading and "no
/// results" are not distinguished), an error renders the error line and wins
/// over anything else, otherwise the cards render. A fetch is issued on init
/// and again on category change or refresh; each fetch bumps `generation` so
/// a response from an older request is dropped instead of clobbering newer
/// state.
pub struct MovieSlider {
    command_tx: Option<UnboundedSender<Action>>,
    config: Config,
    category: Category,
    generation: u64,
    movies: Vec<Movie>,
    error: Option<String>,
    offset: usize,
    focused: bool,
    viewport_cards: usize,
}

impl MovieSlider {
    pub fn new(category: Category) -> Self {
        Self {
            command_tx: None,
            config: Config::default(),
            category,
            generation: 0,
            movies: Vec::new(),
            error: None,
            offset: 0,
            focused: false,
            viewport_cards: 1,
        }
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The hover analog: a focused row shows its scroll arrows and receives
    /// scroll actions.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Swap the catalog slice this row shows. Re-enters the loading state and
    /// issues a fresh fetch; anything still in flight for the old slice is
    /// outdated by the generation bump.
    pub fn set_category(&mut self, category: Category) -> Result<()> {
        self.category = category;
        self.refetch()
    }

    pub fn refresh(&mut self) -> Result<()> {
        self.refetch()
    }

    fn refetch(&mut self) -> Result<()> {
        self.generation += 1;
        self.movies.clear();
        self.error = None;
        self.offset = 0;
        self.request_fetch()
    }

    fn request_fetch(&mut self) -> Result<()> {
        if let Some(tx) = &self.command_tx {
            tx.send(Action::FetchCategory(self.category.key(), self.generation))?;
        }
        Ok(())
    }

    fn draw_error(&self, f: &mut Frame<'_>, area: Rect, message: &str) {
        let line = Line::from(vec![
            Span::styled("✖ ", Style::default().fg(Color::Red)),
            Span::styled(message.to_string(), Style::default().fg(Color::Red)),
        ]);
        let error = Paragraph::new(line).centered();
        f.render_widget(error, area);
    }

    fn draw_cards(&mut self, f: &mut Frame<'_>, area: Rect) {
        self.viewport_cards = (area.width / MovieCard::WIDTH).max(1) as usize;
        self.clamp_offset(self.viewport_cards);

        let end = (self.offset + self.viewport_cards).min(self.movies.len());
        let visible = &self.movies[self.offset..end];

        let constraints = vec![Constraint::Length(MovieCard::WIDTH); visible.len()];
        let chunks = Layout::new(Direction::Horizontal, constraints).split(area);
        for (movie, chunk) in visible.iter().zip(chunks.iter()) {
            let card = MovieCard::new(movie.clone(), self.config.image_base_url.clone());
            f.render_widget(card, *chunk);
        }

        if self.focused {
            self.draw_arrows(f, area);
        }
    }

    fn draw_arrows(&self, f: &mut Frame<'_>, area: Rect) {
        let y = area.y + area.height / 2;
        let left = Rect::new(area.x, y, 1, 1);
        let right = Rect::new(area.right().saturating_sub(1), y, 1, 1);
        let style = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        f.render_widget(Clear, left);
        f.render_widget(Paragraph::new("‹").style(style), left);
        f.render_widget(Clear, right);
        f.render_widget(Paragraph::new("›").style(style), right);
    }
}

impl ScrollableRow for MovieSlider {
    fn set_offset(&mut self, offset: usize) {
        self.offset = offset;
    }

    fn offset(&self) -> usize {
        self.offset
    }

    fn len(&self) -> usize {
        self.movies.len()
    }

    fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl Component for MovieSlider {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.command_tx = Some(tx);
        Ok(())
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.config = config;
        Ok(())
    }

    fn init(&mut self, _area: Rect) -> Result<()> {
        self.request_fetch()
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::CategoryLoaded(key, generation, movies) => {
                if key == self.category.key() && generation == self.generation {
                    self.movies = movies;
                    self.error = None;
                    self.offset = 0;
                }
            }
            Action::CategoryFailed(key, generation) => {
                if key == self.category.key() && generation == self.generation {
                    self.error = Some(String::from(FETCH_ERROR_MESSAGE));
                }
            }
            Action::ScrollLeft if self.focused => self.scroll_left(self.viewport_cards),
            Action::ScrollRight if self.focused => self.scroll_right(self.viewport_cards),
            Action::Refresh if self.focused => self.refresh()?,
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let layout = Layout::new(
            Direction::Vertical,
            [Constraint::Length(1), Constraint::Min(0)],
        )
        .split(area);

        let label_style = if self.focused {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        f.render_widget(
            Paragraph::new(self.category.label().to_string()).style(label_style),
            layout[0],
        );

        let body = layout[1];
        if let Some(message) = self.error.clone() {
            self.draw_error(f, body, &message);
        } else if self.movies.is_empty() {
            f.render_widget(SliderSkeleton, body);
        } else {
            self.draw_cards(f, body);
        }

        Ok(())
    }
}
