use pretty_assertions::assert_eq;
use ratatui::backend::TestBackend;
use ratatui::prelude::Rect;
use ratatui::Terminal;
use tokio::sync::mpsc;

use cinetui::action::Action;
use cinetui::components::{Component, Home};
use cinetui::config::Config;
use cinetui::tmdb::CategoryKey;

fn new_home() -> (Home, mpsc::UnboundedReceiver<Action>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut home = Home::new();
    home.register_action_handler(tx).expect("handler");
    home.register_config_handler(Config::default()).expect("config");
    (home, rx)
}

#[test]
fn test_home_hosts_one_slider_per_section() {
    let home = Home::new();
    let labels: Vec<&str> = home
        .sliders()
        .iter()
        .map(|s| s.category().label())
        .collect();
    assert_eq!(
        labels,
        vec!["Trending", "Top Rated", "Popular", "Upcoming Trailers"]
    );
}

#[test]
fn test_init_fetches_every_section() {
    let (mut home, mut rx) = new_home();
    home.init(Rect::new(0, 0, 80, 40)).expect("init");

    let mut keys = Vec::new();
    while let Ok(action) = rx.try_recv() {
        if let Action::FetchCategory(key, generation) = action {
            assert_eq!(generation, 0);
            keys.push(key);
        }
    }
    assert_eq!(
        keys,
        vec![
            CategoryKey::Trending,
            CategoryKey::TopRated,
            CategoryKey::Popular,
            CategoryKey::Upcoming,
        ]
    );
}

#[test]
fn test_first_section_is_focused_initially() {
    let home = Home::new();
    assert_eq!(home.focused_section(), 0);
    assert!(home.sliders()[0].is_focused());
    assert!(!home.sliders()[1].is_focused());
}

#[test]
fn test_section_focus_moves_and_saturates() {
    let (mut home, _rx) = new_home();

    home.update(Action::SectionDown).expect("down");
    assert_eq!(home.focused_section(), 1);
    assert!(home.sliders()[1].is_focused());
    assert!(!home.sliders()[0].is_focused());

    home.update(Action::SectionUp).expect("up");
    home.update(Action::SectionUp).expect("up again");
    assert_eq!(home.focused_section(), 0, "saturates at the first section");

    for _ in 0..10 {
        home.update(Action::SectionDown).expect("down");
    }
    assert_eq!(
        home.focused_section(),
        home.sliders().len() - 1,
        "saturates at the last section"
    );
}

#[test]
fn test_refresh_refetches_only_the_focused_section() {
    let (mut home, mut rx) = new_home();
    home.init(Rect::new(0, 0, 80, 40)).expect("init");
    while rx.try_recv().is_ok() {}

    home.update(Action::SectionDown).expect("down");
    home.update(Action::Refresh).expect("refresh");

    let action = rx.try_recv().expect("one fetch request");
    assert_eq!(action, Action::FetchCategory(CategoryKey::TopRated, 1));
    assert!(rx.try_recv().is_err(), "no other section refetched");
}

#[test]
fn test_failed_section_does_not_affect_siblings() {
    let (mut home, _rx) = new_home();
    home.update(Action::CategoryFailed(CategoryKey::TopRated, 0))
        .expect("fail");
    home.update(Action::CategoryLoaded(
        CategoryKey::Popular,
        0,
        vec![cinetui::tmdb::Movie {
            title: String::from("Title A"),
            backdrop_path: Some(String::from("/pathA.jpg")),
            release_date: String::from("2023-01-01"),
        }],
    ))
    .expect("load");

    assert!(home.sliders()[1].error().is_some());
    assert!(home.sliders()[2].error().is_none());
    assert_eq!(home.sliders()[2].movies().len(), 1);
}

#[test]
fn test_home_draws_header_and_sections() {
    let (mut home, _rx) = new_home();
    let backend = TestBackend::new(120, 48);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal
        .draw(|f| home.draw(f, f.area()).expect("draw"))
        .expect("frame");

    let buffer = terminal.backend().buffer().clone();
    let mut rendered = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            rendered.push_str(buffer[(x, y)].symbol());
        }
        rendered.push('\n');
    }

    assert!(rendered.contains("cinetui"), "{rendered}");
    for label in ["Trending", "Top Rated", "Popular", "Upcoming Trailers"] {
        assert!(rendered.contains(label), "missing section {label}");
    }
}
