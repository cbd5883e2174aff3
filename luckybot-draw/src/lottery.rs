use crate::channel::GameChannel;
use crate::error::{DrawError, Result};
use crate::narration;
use crate::rng::FairRandom;
use luckybot_core::Participant;
use rand::{CryptoRng, RngCore};

/// Shuffle-then-pick draw: no rounds, one uniformly chosen winner.
pub async fn random_pick<C, R>(
    channel: &C,
    random: &mut FairRandom<R>,
    participants: Vec<Participant>,
) -> Result<Participant>
where
    C: GameChannel + ?Sized,
    R: RngCore + CryptoRng + Send,
{
    let count = participants.len();
    let mut shuffled = random.shuffle(participants);
    let index = random
        .pick_index(shuffled.len())
        .ok_or(DrawError::NoParticipants)?;
    let winner = shuffled.swap_remove(index);

    channel.announce(&narration::shuffling(count)).await?;
    channel.announce(&narration::winner(&winner)).await?;

    tracing::info!("Random pick among {}: {}", count, winner.name);
    Ok(winner)
}
