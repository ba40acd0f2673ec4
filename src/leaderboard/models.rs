use serde::Deserialize;
use serde_json::Number;
use std::fmt::Display;

/// Structure for a player entry in the top 10 response. Entries are
/// received already ordered by rank and any extra fields the server
/// includes are ignored
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PlayerScoreEntry {
    /// The name of the player
    pub name: String,
    /// The score of the player, kept as the numeric value the server
    /// sent so integers and decimals display the same way
    pub score: Number,
}

/// A single row of the rendered table, borrowed from the entry it
/// was created from
pub struct RenderedRow<'a> {
    /// 1-based position of the entry in the response
    pub rank: usize,
    pub name: &'a str,
    pub score: &'a Number,
}

impl<'a> RenderedRow<'a> {
    /// Creates the rows for the provided entries, ranks are assigned
    /// from the position within the slice
    pub fn from_entries(entries: &'a [PlayerScoreEntry]) -> Vec<RenderedRow<'a>> {
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| RenderedRow {
                rank: index + 1,
                name: &entry.name,
                score: &entry.score,
            })
            .collect()
    }
}

/// Diagnostic details recorded when a leaderboard request fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// HTTP status code of the response, 0 when no response was received
    pub status: u16,
    /// Raw response body text
    pub body: String,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "status: {}, body: {:?}", self.status, self.body)
    }
}

/// States the viewer moves through while loading the leaderboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewerState {
    #[default]
    Idle,
    Requesting,
    Rendered,
    Failed,
}
