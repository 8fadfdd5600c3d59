use crate::matchup::TypeGrid;

/// Token issued per query. Monotonically increasing, so a rendering from a
/// superseded query can be told apart from the latest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct QueryToken(u64);

/// What a completed lookup wants shown: the text fragment and the full set
/// of grid markings. Applying one replaces both wholesale, which is what
/// clears stale markings between searches.
#[derive(Debug, Clone, Default)]
pub struct Rendering {
    pub fragment: String,
    pub grid: TypeGrid,
}

impl Rendering {
    /// A bare message with no grid markings, for the failure paths.
    pub fn message(text: &str) -> Self {
        Self {
            fragment: format!("{}\n", text),
            grid: Vec::new(),
        }
    }
}

/// The single display target. Holds the current fragment and grid plus the
/// latest issued query token.
#[derive(Debug, Default)]
pub struct DisplayState {
    latest: u64,
    fragment: String,
    grid: TypeGrid,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the token for a new query. Renderings carrying an older token
    /// are discarded by `apply`.
    pub fn begin_query(&mut self) -> QueryToken {
        self.latest += 1;
        QueryToken(self.latest)
    }

    /// Applies a rendering if its token is still the latest. Returns whether
    /// it was applied.
    pub fn apply(&mut self, token: QueryToken, rendering: Rendering) -> bool {
        if token != QueryToken(self.latest) {
            return false;
        }
        self.fragment = rendering.fragment;
        self.grid = rendering.grid;
        true
    }

    /// Empties the fragment and removes every grid marking.
    pub fn clear(&mut self) {
        self.fragment.clear();
        self.grid.clear();
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn grid(&self) -> &TypeGrid {
        &self.grid
    }
}
