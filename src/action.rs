use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::tmdb::{CategoryKey, Movie};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Refresh,
    Error(String),
    Key(KeyEvent),
    ScrollLeft,
    ScrollRight,
    SectionUp,
    SectionDown,
    /// Ask the app to fetch one page of a catalog slice. The second field is
    /// the requesting widget's fetch generation; it is echoed back in the
    /// completion actions so stale responses can be told apart.
    FetchCategory(CategoryKey, u64),
    CategoryLoaded(CategoryKey, u64, Vec<Movie>),
    CategoryFailed(CategoryKey, u64),
    SystemMessage(String),
}
