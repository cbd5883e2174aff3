//! Test doubles shared by the unit tests of this crate.

use crate::channel::GameChannel;
use crate::error::Result;
use crate::game::GameVariant;
use crate::rng::FairRandom;
use async_trait::async_trait;
use luckybot_core::Participant;
use parking_lot::Mutex;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::collections::VecDeque;

/// Replays scripted faces, then falls back to a seeded die.
pub struct ScriptedChannel {
    faces: Mutex<VecDeque<u8>>,
    fallback: Mutex<FairRandom<ChaCha20Rng>>,
    pub announcements: Mutex<Vec<String>>,
    pub rolls: Mutex<Vec<GameVariant>>,
}

impl ScriptedChannel {
    pub fn new(faces: &[u8]) -> Self {
        Self::seeded(faces, 0)
    }

    pub fn seeded(faces: &[u8], seed: u64) -> Self {
        Self {
            faces: Mutex::new(faces.iter().copied().collect()),
            fallback: Mutex::new(FairRandom::with_rng(ChaCha20Rng::seed_from_u64(seed))),
            announcements: Mutex::new(Vec::new()),
            rolls: Mutex::new(Vec::new()),
        }
    }

    pub fn announcements(&self) -> Vec<String> {
        self.announcements.lock().clone()
    }

    pub fn roll_count(&self) -> usize {
        self.rolls.lock().len()
    }
}

#[async_trait]
impl GameChannel for ScriptedChannel {
    async fn roll(&self, variant: GameVariant) -> Result<u8> {
        self.rolls.lock().push(variant);
        let scripted = self.faces.lock().pop_front();
        Ok(scripted.unwrap_or_else(|| self.fallback.lock().roll_die()))
    }

    async fn announce(&self, text: &str) -> Result<()> {
        self.announcements.lock().push(text.to_string());
        Ok(())
    }
}

pub fn players(names: &[&str]) -> Vec<Participant> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Participant::new(i as i64 + 1, *name))
        .collect()
}
