//! Shared default for the player-name field of new drafts.

use std::sync::{Arc, RwLock};

/// Last name the player typed into any draft, used to pre-fill the next one.
///
/// One preset is shared by every board a [`crate::Runtime`] opens, so a name
/// entered on one leaderboard carries over to the next. Cheap to clone;
/// explicit instead of process-global state so tests can isolate it.
#[derive(Clone, Default)]
pub struct NamePreset {
    name: Arc<RwLock<String>>,
}

impl NamePreset {
    /// Creates an empty preset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a preset seeded with a name (e.g. restored from settings).
    pub fn seeded(name: impl Into<String>) -> Self {
        Self {
            name: Arc::new(RwLock::new(name.into())),
        }
    }

    pub fn get(&self) -> String {
        match self.name.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn set(&self, name: &str) {
        match self.name.write() {
            Ok(mut guard) => *guard = name.to_string(),
            Err(poisoned) => *poisoned.into_inner() = name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_same_name() {
        let preset = NamePreset::new();
        let other = preset.clone();

        preset.set("Zoe");
        assert_eq!(other.get(), "Zoe");
    }

    #[test]
    fn seeded_starts_with_the_given_name() {
        assert_eq!(NamePreset::seeded("AL").get(), "AL");
    }
}
