use types::GameResult;

use crate::{DatabaseError, KeyValueStore, StatisticsAggregate};

/// Lifetime quiz statistics backed by a [`KeyValueStore`].
///
/// The aggregate is read once in [`StatisticsStore::open`]; afterwards reads
/// are served from memory and every write goes through to the store.
pub struct StatisticsStore<S> {
    store: S,
    aggregate: StatisticsAggregate,
}

impl<S: KeyValueStore> StatisticsStore<S> {
    pub async fn open(store: S) -> Result<Self, DatabaseError> {
        let aggregate = StatisticsAggregate::load(&store).await?;
        tracing::debug!(
            "Loaded statistics: {} games, {} correct answers",
            aggregate.games_count,
            aggregate.correct_answers
        );
        Ok(Self {
            store,
            aggregate,
        })
    }

    /// Counts the round, adds its answers to the totals and keeps it if it is the
    /// new best game. Nothing changes unless the whole update is persisted.
    pub async fn record_round(&mut self, result: GameResult) -> Result<(), DatabaseError> {
        let (updated, is_new_best) = self.aggregate.with_round(result);
        self.store
            .set_many(&updated.to_entries(is_new_best))
            .await?;

        tracing::info!(
            "Recorded round {result}: {} games played{}",
            updated.games_count,
            if is_new_best { ", new best game" } else { "" }
        );
        self.aggregate = updated;
        Ok(())
    }

    /// Share of all asked questions answered correctly, in percent.
    pub fn current_accuracy(&self) -> f64 {
        self.aggregate.total_accuracy()
    }

    /// The best game so far. Before any record exists this is an empty
    /// result (`0/0`, dated now), which is not a real game.
    pub fn current_best(&self) -> GameResult {
        self.aggregate.best_or_empty()
    }

    pub fn games_count(&self) -> u32 {
        self.aggregate.games_count
    }

    pub fn correct_answers(&self) -> u64 {
        self.aggregate.correct_answers
    }

    pub fn aggregate(&self) -> &StatisticsAggregate {
        &self.aggregate
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}
