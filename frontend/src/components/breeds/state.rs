//! Load state of the breed list.

use super::messages::Msg;
use common::model::breed::Breed;

/// What the list currently shows.
///
/// An empty catalog is its own state so the page can tell "nothing stored yet"
/// apart from "the request failed".
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded(Vec<Breed>),
    Empty,
    Failed(String),
}

pub struct BreedListComponent {
    pub state: LoadState,
    /// Guards the one-time fetch in `rendered`.
    pub requested: bool,
}

impl BreedListComponent {
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            requested: false,
        }
    }

    /// Applies `msg` and reports whether the view must re-render.
    pub fn apply(&mut self, msg: Msg) -> bool {
        self.state = match msg {
            Msg::Loaded(breeds) if breeds.is_empty() => LoadState::Empty,
            Msg::Loaded(breeds) => LoadState::Loaded(breeds),
            Msg::Failed(reason) => LoadState::Failed(reason),
        };
        true
    }
}
