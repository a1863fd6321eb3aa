use ratatui::{prelude::*, widgets::*};

use crate::tmdb::Movie;
use crate::widgets::ShrinkText;

/// One image+caption cell in a catalog row.
///
/// A terminal cannot decode the backdrop, so the image area renders as a
/// dimmed band carrying the composed image address instead of pixels.
#[derive(Clone, Debug)]
pub struct MovieCard {
    movie: Movie,
    image_base_url: String,
}

impl MovieCard {
    /// Card width in terminal columns, image band included.
    pub const WIDTH: u16 = 32;

    pub fn new(movie: Movie, image_base_url: impl Into<String>) -> Self {
        Self {
            movie,
            image_base_url: image_base_url.into(),
        }
    }

    pub fn image_address(&self) -> String {
        self.movie
            .backdrop_url(&self.image_base_url)
            .unwrap_or_else(|| String::from("(no backdrop)"))
    }
}

impl Widget for MovieCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height < 3 {
            return;
        }

        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ],
        )
        .split(inner);

        let image = Paragraph::new(ShrinkText::new(
            self.image_address(),
            layout[0].width as usize,
            layout[0].height as usize,
        ))
        .style(Style::default().fg(Color::DarkGray));
        image.render(layout[0], buf);

        let title = Paragraph::new(ShrinkText::new(
            self.movie.title.clone(),
            layout[1].width as usize,
            1,
        ))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .centered();
        title.render(layout[1], buf);

        let release_date = Paragraph::new(self.movie.release_date.clone())
            .style(Style::default().fg(Color::Gray))
            .centered();
        release_date.render(layout[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(card: MovieCard, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|f| f.render_widget(card, f.area()))
            .expect("draw");
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_card_shows_title_and_release_date() {
        let movie = Movie {
            title: String::from("Title A"),
            backdrop_path: Some(String::from("/pathA.jpg")),
            release_date: String::from("2023-01-01"),
        };
        let rendered = render(
            MovieCard::new(movie, "https://image.tmdb.org/t/p/w500"),
            MovieCard::WIDTH,
            10,
        );
        assert!(rendered.contains("Title A"), "{rendered}");
        assert!(rendered.contains("2023-01-01"), "{rendered}");
    }

    #[test]
    fn test_card_image_address_concatenates_base_and_path() {
        let movie = Movie {
            title: String::from("Title A"),
            backdrop_path: Some(String::from("/pathA.jpg")),
            release_date: String::from("2023-01-01"),
        };
        let card = MovieCard::new(movie, "https://image.tmdb.org/t/p/w500");
        assert_eq!(
            card.image_address(),
            "https://image.tmdb.org/t/p/w500/pathA.jpg"
        );
    }

    #[test]
    fn test_card_without_backdrop_uses_placeholder() {
        let movie = Movie {
            title: String::from("No Art"),
            backdrop_path: None,
            release_date: String::from("2024-02-02"),
        };
        let card = MovieCard::new(movie, "https://image.tmdb.org/t/p/w500");
        assert_eq!(card.image_address(), "(no backdrop)");
    }
}
