//! Monte-Carlo projection of who ends the year on top.

use crate::rng::FairRandom;
use luckybot_core::Participant;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chance {
    pub participant: Participant,
    /// 0..=1
    pub probability: f64,
}

/// Simulate `draws_left` uniform daily picks on top of the current points,
/// `iterations` times. A shared first place is split evenly.
///
/// Result is sorted by probability, highest first; equal chances keep the
/// input order.
pub fn project<R: RngCore + CryptoRng>(
    participants: &[Participant],
    draws_left: u32,
    iterations: u32,
    random: &mut FairRandom<R>,
) -> Vec<Chance> {
    if participants.is_empty() || iterations == 0 {
        return Vec::new();
    }

    let base: Vec<u64> = participants.iter().map(|p| u64::from(p.points)).collect();
    let mut wins = vec![0f64; participants.len()];
    let mut points = base.clone();

    for _ in 0..iterations {
        points.copy_from_slice(&base);
        for _ in 0..draws_left {
            if let Some(index) = random.pick_index(points.len()) {
                points[index] += 1;
            }
        }

        let best = points.iter().copied().max().unwrap_or(0);
        let leaders = points.iter().filter(|p| **p == best).count() as f64;
        for (index, total) in points.iter().enumerate() {
            if *total == best {
                wins[index] += 1.0 / leaders;
            }
        }
    }

    let mut chances: Vec<Chance> = participants
        .iter()
        .zip(wins)
        .map(|(participant, won)| Chance {
            participant: participant.clone(),
            probability: won / f64::from(iterations),
        })
        .collect();

    chances.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    chances
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn with_points(entries: &[(&str, u32)]) -> Vec<Participant> {
        entries
            .iter()
            .enumerate()
            .map(|(i, (name, points))| Participant {
                id: i as i64,
                name: name.to_string(),
                points: *points,
            })
            .collect()
    }

    fn seeded() -> FairRandom<ChaCha20Rng> {
        FairRandom::with_rng(ChaCha20Rng::seed_from_u64(42))
    }

    #[test]
    fn test_no_draws_left_freezes_standings() {
        let field = with_points(&[("ann", 3), ("ben", 5), ("cid", 5)]);
        let chances = project(&field, 0, 100, &mut seeded());

        assert_eq!(chances[0].participant.name, "ben");
        assert_eq!(chances[0].probability, 0.5);
        assert_eq!(chances[1].participant.name, "cid");
        assert_eq!(chances[2].probability, 0.0);
    }

    #[test]
    fn test_unreachable_lead() {
        let field = with_points(&[("ann", 20), ("ben", 1)]);
        let chances = project(&field, 10, 500, &mut seeded());

        assert_eq!(chances[0].participant.name, "ann");
        assert_eq!(chances[0].probability, 1.0);
    }

    #[test]
    fn test_even_field_is_balanced() {
        let field = with_points(&[("ann", 0), ("ben", 0)]);
        let chances = project(&field, 31, 4_000, &mut seeded());

        let total: f64 = chances.iter().map(|c| c.probability).sum();
        assert!((total - 1.0).abs() < 1e-9);
        for chance in chances {
            assert!((0.45..=0.55).contains(&chance.probability));
        }
    }

    #[test]
    fn test_empty_field() {
        assert!(project(&[], 10, 10, &mut seeded()).is_empty());
    }
}
