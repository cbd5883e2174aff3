use super::{messages, LuckyBot};
use crate::chances;
use crate::channel::ChatChannel;
use crate::error::Result;
use crate::game::GameVariant;
use crate::gaps::missing_days;
use crate::lottery::random_pick;
use crate::progress::{days_remaining, year_progress};
use crate::rng::FairRandom;
use crate::schedule::{game_for_date, upcoming};
use crate::tournament::resolve;
use chrono::NaiveDate;
use luckybot_core::{
    format_date, ChatEvent, ChatId, DrawMode, Participant, ParticipantOrder, ParticipantStore,
    ResultRecord, ResultStore, Transport,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

impl<T: Transport> LuckyBot<T> {
    pub(super) async fn register(&self, event: &ChatEvent) -> Result<()> {
        let participants = ParticipantStore::new(&self.storage);
        let candidate = Participant::new(event.sender.id, event.sender.display_name());

        if let Some(existing) = participants.find(event.chat, candidate.id).await? {
            self.courier
                .message(event.chat, &messages::already_registered(&existing))
                .await?;
            return Ok(());
        }

        participants.insert(event.chat, &candidate).await?;
        tracing::info!("Registered {} in chat {}", candidate.name, event.chat);

        self.courier
            .message(event.chat, &messages::registered(&candidate))
            .await?;
        Ok(())
    }

    pub(super) async fn lucky(&self, event: &ChatEvent) -> Result<()> {
        let chat = event.chat;
        let today = event.sent_at.date();
        let key = format_date(today);

        if let Some(result) = ResultStore::new(&self.storage).find(chat, &key).await? {
            self.courier
                .message(chat, &messages::luck_is_over(&result.winner))
                .await?;
            return Ok(());
        }

        let participants = ParticipantStore::new(&self.storage)
            .list(chat, ParticipantOrder::Registration)
            .await?;
        if participants.is_empty() {
            self.courier.message(chat, messages::NO_PARTICIPANTS).await?;
            return Ok(());
        }

        self.courier
            .message(chat, &messages::found_participants(participants.len()))
            .await?;
        self.courier
            .message(chat, &messages::participant_list(&participants))
            .await?;

        let winner = self.draw(chat, game_for_date(today), participants).await?;
        self.award(chat, &key, winner).await
    }

    pub(super) async fn missing(&self, event: &ChatEvent) -> Result<()> {
        let chat = event.chat;
        let today = event.sent_at.date();

        let results = ResultStore::new(&self.storage).list(chat).await?;
        let gaps = missing_days(
            results.iter().map(|r| r.date.as_str()),
            self.config.epoch,
            today,
        );

        let Some(&date) = gaps.first() else {
            self.courier.message(chat, messages::NOTHING_MISSING).await?;
            return Ok(());
        };

        let participants = ParticipantStore::new(&self.storage)
            .list(chat, ParticipantOrder::Registration)
            .await?;
        if participants.is_empty() {
            self.courier.message(chat, messages::NO_PARTICIPANTS).await?;
            return Ok(());
        }

        let key = format_date(date);
        let variant = game_for_date(date);
        tracing::info!(
            "Chat {} misses {} results, replaying {} with {}",
            chat,
            gaps.len(),
            key,
            variant.name()
        );

        self.courier
            .message(chat, &messages::replaying(gaps.len(), &key, variant))
            .await?;

        let winner = self.draw(chat, variant, participants).await?;
        self.award(chat, &key, winner).await
    }

    pub(super) async fn top(&self, event: &ChatEvent) -> Result<()> {
        let ranking = ParticipantStore::new(&self.storage)
            .list(event.chat, ParticipantOrder::PointsDesc)
            .await?;

        let text = if ranking.is_empty() {
            messages::NO_PARTICIPANTS.to_string()
        } else {
            messages::ranking(&ranking)
        };
        self.courier.message(event.chat, &text).await?;
        Ok(())
    }

    pub(super) async fn schedule(&self, event: &ChatEvent) -> Result<()> {
        let days = upcoming(event.sent_at.date(), self.config.schedule_days);
        self.courier
            .message(event.chat, &messages::schedule(&days))
            .await?;
        Ok(())
    }

    pub(super) async fn progress(&self, event: &ChatEvent) -> Result<()> {
        let progress = year_progress(event.sent_at);
        self.courier.plain(event.chat, &progress.message()).await?;
        Ok(())
    }

    pub(super) async fn chances(&self, event: &ChatEvent) -> Result<()> {
        let chat = event.chat;
        let today = event.sent_at.date();

        let participants = ParticipantStore::new(&self.storage)
            .list(chat, ParticipantOrder::PointsDesc)
            .await?;
        if participants.is_empty() {
            self.courier.message(chat, messages::NO_PARTICIPANTS).await?;
            return Ok(());
        }

        let draws_left = self.draws_left(chat, today).await?;
        let mut random = FairRandom::with_rng(StdRng::from_entropy());
        let projection = chances::project(
            &participants,
            draws_left,
            self.config.chance_iterations,
            &mut random,
        );

        tracing::debug!(
            "Projected {} draws over {} iterations for chat {}",
            draws_left,
            self.config.chance_iterations,
            chat
        );

        self.courier
            .message(chat, &messages::chances(&projection))
            .await?;
        Ok(())
    }

    pub(super) async fn ping(&self, event: &ChatEvent) -> Result<()> {
        self.courier.plain(event.chat, messages::PONG).await?;
        Ok(())
    }

    async fn draws_left(&self, chat: ChatId, today: NaiveDate) -> Result<u32> {
        let remaining = days_remaining(today);
        let drawn_today = ResultStore::new(&self.storage)
            .find(chat, &format_date(today))
            .await?
            .is_some();

        Ok(if drawn_today { remaining - 1 } else { remaining })
    }

    async fn draw(
        &self,
        chat: ChatId,
        variant: GameVariant,
        participants: Vec<Participant>,
    ) -> Result<Participant> {
        let channel = ChatChannel::new(&self.courier, chat);

        match self.config.draw_mode {
            DrawMode::Tournament => Ok(resolve(&channel, variant, participants).await?.winner),
            DrawMode::RandomPick => {
                let mut random = FairRandom::new();
                random_pick(&channel, &mut random, participants).await
            }
        }
    }

    /// Persist the result for `date`, then give the winner their point.
    ///
    /// The result row is written first; if another draw already claimed the
    /// date, nothing is awarded and the existing winner is reported instead.
    async fn award(&self, chat: ChatId, date: &str, winner: Participant) -> Result<()> {
        self.courier.message(chat, messages::UPDATING_POINTS).await?;

        let results = ResultStore::new(&self.storage);
        let record = ResultRecord {
            date: date.to_string(),
            winner: winner.clone(),
        };

        if !results.insert_if_absent(chat, &record).await? {
            let stored = results.find(chat, date).await?.map(|r| r.winner);
            let current = stored.unwrap_or(winner);
            self.courier
                .message(chat, &messages::luck_is_over(&current))
                .await?;
            return Ok(());
        }

        let participants = ParticipantStore::new(&self.storage);
        if !participants.increment_points(chat, winner.id).await? {
            tracing::warn!(
                "Winner {} of {} is no longer registered in chat {}",
                winner.name,
                date,
                chat
            );
        }

        let standings = participants.list(chat, ParticipantOrder::PointsDesc).await?;
        let updated = standings
            .iter()
            .find(|p| p.id == winner.id)
            .cloned()
            .unwrap_or_else(|| Participant {
                points: winner.points + 1,
                ..winner
            });
        let is_goat = standings.iter().all(|p| p.points <= updated.points);

        tracing::info!(
            "{} won {} in chat {} ({} points{})",
            updated.name,
            date,
            chat,
            updated.points,
            if is_goat { ", GOAT" } else { "" }
        );

        if is_goat {
            self.courier.message(chat, messages::GOAT).await?;
            let caption = messages::goat_caption(&updated);
            match &self.config.goat_media {
                Some(media) => self.courier.media(chat, media, &caption).await?,
                None => self.courier.message(chat, &caption).await?,
            }
        } else {
            self.courier
                .message(chat, &messages::lucky_winner(&updated))
                .await?;
        }

        self.courier
            .message(chat, &messages::points_update(&updated))
            .await?;
        Ok(())
    }
}
