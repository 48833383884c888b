use std::fmt;

/// Identifier for one selectable board (and thus one leaderboard).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardId(String);

impl BoardId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Durable-store key under which this board's hiscores are persisted.
    pub fn storage_key(&self) -> String {
        format!("{}.hiscores", self.0)
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BoardId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_key_appends_suffix() {
        let board = BoardId::new("13");
        assert_eq!(board.storage_key(), "13.hiscores");
    }
}
