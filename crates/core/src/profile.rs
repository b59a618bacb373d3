use serde::{Deserialize, Serialize};

/// Player preferences, persisted outside the engine's lifetime. String
/// fields stay lowercase so stored profiles keep loading across versions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub difficulty: String,
    pub text_size: String,
    pub sound_effect: bool,
    pub vibration: bool,
    pub high_contrast: bool,
    pub tutorial_shown: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: "normal".to_string(),
            text_size: "normal".to_string(),
            sound_effect: true,
            vibration: true,
            high_contrast: false,
            tutorial_shown: false,
        }
    }
}

/// Persistence collaborator. The engine tolerates a missing or failing
/// store: loads degrade to defaults, writes may be dropped. The cumulative
/// coin wallet is the only state that outlives a match.
pub trait ProfileStore {
    fn load(&self) -> Settings;
    fn save(&mut self, settings: &Settings);
    /// Credits `amount` coins and returns the new total.
    fn add_coins(&mut self, amount: u64) -> u64;
    fn coins(&self) -> u64;
}

/// In-memory store for tests and for running without a profile on disk.
#[derive(Debug, Default)]
pub struct MemoryProfile {
    pub settings: Settings,
    pub coins: u64,
}

impl ProfileStore for MemoryProfile {
    fn load(&self) -> Settings {
        self.settings.clone()
    }

    fn save(&mut self, settings: &Settings) {
        self.settings = settings.clone();
    }

    fn add_coins(&mut self, amount: u64) -> u64 {
        self.coins = self.coins.saturating_add(amount);
        self.coins
    }

    fn coins(&self) -> u64 {
        self.coins
    }
}
