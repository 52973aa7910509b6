//! Persisted player profile: coins, lives and life regeneration.
//!
//! The game core never touches this; the binary consumes a life before
//! generating a board, refunds it when generation fails, and awards coins
//! on a win. State lives in a small JSON file next to the game.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use goods_sort_types::{LIFE_REGEN_SECS, MAX_LIVES, STARTING_COINS, WIN_COINS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub coins: u32,
    pub lives: u32,
    /// Unix timestamp (seconds) of the last regeneration step applied
    pub last_regen_secs: u64,
}

impl PlayerProfile {
    /// Fresh profile anchored at `now_secs`
    pub fn new(now_secs: u64) -> Self {
        Self {
            coins: STARTING_COINS,
            lives: MAX_LIVES,
            last_regen_secs: now_secs,
        }
    }

    /// Load a profile from disk, falling back to a fresh one when the file
    /// does not exist yet
    pub fn load(path: &Path, now_secs: u64) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new(now_secs));
        }
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading profile {}", path.display()))?;
        let profile = serde_json::from_str(&data)
            .with_context(|| format!("parsing profile {}", path.display()))?;
        Ok(profile)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data).with_context(|| format!("writing profile {}", path.display()))?;
        Ok(())
    }

    /// Apply life regeneration: one life per elapsed interval, capped at
    /// MAX_LIVES. The timestamp advances only by whole intervals so partial
    /// progress is never lost.
    pub fn regenerate(&mut self, now_secs: u64) {
        if self.lives >= MAX_LIVES {
            self.last_regen_secs = now_secs;
            return;
        }
        let elapsed = now_secs.saturating_sub(self.last_regen_secs);
        let gained = (elapsed / LIFE_REGEN_SECS) as u32;
        if gained == 0 {
            return;
        }
        self.lives = (self.lives + gained).min(MAX_LIVES);
        self.last_regen_secs += u64::from(gained) * LIFE_REGEN_SECS;
        if self.lives >= MAX_LIVES {
            self.last_regen_secs = now_secs;
        }
    }

    pub fn can_start(&self) -> bool {
        self.lives > 0
    }

    /// Spend one life to start a session; false when none remain
    pub fn consume_life(&mut self) -> bool {
        if self.lives == 0 {
            return false;
        }
        self.lives -= 1;
        true
    }

    /// Return the entry cost after a failed session start
    pub fn refund_life(&mut self) {
        self.lives = (self.lives + 1).min(MAX_LIVES);
    }

    pub fn award_win(&mut self) {
        self.coins += WIN_COINS;
    }
}
