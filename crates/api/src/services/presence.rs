//! Background sweep that evicts inactive participants.

use std::time::Duration;

use parley_config::PresenceConfig;
use parley_database::{MessageRepository, NewMessage, ParticipantRepository, RoomResult};
use sqlx::SqlitePool;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info};

use super::{now_millis, LEAVE_NOTICE};

/// Recurring presence sweep.
///
/// Shares only the connection pool with request handlers; everything else is
/// owned. Each tick removes every participant whose last heartbeat predates
/// the idle timeout and broadcasts one leave notice per removed participant.
/// The removal is a single delete-returning statement, so the set of notices
/// matches the set of removed rows exactly.
pub struct PresenceReaper {
    participants: ParticipantRepository,
    messages: MessageRepository,
    sweep_interval: Duration,
    idle_timeout: Duration,
}

impl PresenceReaper {
    pub fn new(pool: SqlitePool, config: &PresenceConfig) -> Self {
        Self {
            participants: ParticipantRepository::new(pool.clone()),
            messages: MessageRepository::new(pool),
            sweep_interval: config.sweep_interval(),
            idle_timeout: config.idle_timeout(),
        }
    }

    /// Run the sweep on its own schedule until the task is aborted.
    ///
    /// A failed tick is logged and abandoned; the next tick starts from
    /// scratch. No retry state is carried across ticks.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.sweep_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick of `interval` completes immediately; consume it
            // so sweeps start one full period after startup.
            ticker.tick().await;

            info!(
                interval_seconds = self.sweep_interval.as_secs(),
                idle_timeout_seconds = self.idle_timeout.as_secs(),
                "presence reaper running"
            );

            loop {
                ticker.tick().await;
                match self.sweep().await {
                    Ok(0) => debug!("presence sweep found no stale participants"),
                    Ok(count) => info!(count, "presence sweep evicted stale participants"),
                    Err(error) => {
                        error!(?error, "presence sweep failed, retrying next tick");
                    }
                }
            }
        })
    }

    /// One sweep pass. Returns the number of evicted participants.
    pub async fn sweep(&self) -> RoomResult<usize> {
        let cutoff = now_millis() - self.idle_timeout.as_millis() as i64;

        let reaped = self.participants.delete_stale(cutoff).await?;
        if reaped.is_empty() {
            return Ok(0);
        }

        let notices: Vec<NewMessage> = reaped
            .iter()
            .map(|name| NewMessage::status_notice(name.clone(), LEAVE_NOTICE))
            .collect();
        self.messages.insert_many(&notices).await?;

        Ok(reaped.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::participant;
    use crate::test_support::test_repositories;
    use parley_database::MessageKind;

    fn reaper(
        participants: &ParticipantRepository,
        messages: &MessageRepository,
        idle_timeout: Duration,
    ) -> PresenceReaper {
        PresenceReaper {
            participants: participants.clone(),
            messages: messages.clone(),
            sweep_interval: Duration::from_secs(15),
            idle_timeout,
        }
    }

    #[tokio::test]
    async fn sweep_evicts_idle_participants_and_emits_one_notice_each() {
        let (participants, messages, _guard) = test_repositories().await;

        // Heartbeats far in the past relative to a zero timeout.
        participants.insert_if_absent("ann", 0).await.unwrap();
        participants.insert_if_absent("bob", 0).await.unwrap();

        let swept = reaper(&participants, &messages, Duration::from_millis(0))
            .sweep()
            .await
            .unwrap();
        assert_eq!(swept, 2);

        assert!(participants.list().await.unwrap().is_empty());

        let notices = messages.visible_to("carol", None).await.unwrap();
        assert_eq!(notices.len(), 2);
        for notice in &notices {
            assert_eq!(notice.kind, MessageKind::Status);
            assert_eq!(notice.text, LEAVE_NOTICE);
        }
    }

    #[tokio::test]
    async fn sweep_spares_recently_active_participants() {
        let (participants, messages, _guard) = test_repositories().await;

        participant::login(&participants, &messages, "ann").await.unwrap();

        let swept = reaper(&participants, &messages, Duration::from_secs(3600))
            .sweep()
            .await
            .unwrap();
        assert_eq!(swept, 0);

        assert_eq!(participants.list().await.unwrap().len(), 1);

        // Only the join notice exists; no leave notice was written.
        let notices = messages.visible_to("carol", None).await.unwrap();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].text, crate::services::ENTER_NOTICE);
    }

    #[tokio::test]
    async fn empty_registry_sweep_writes_nothing() {
        let (participants, messages, _guard) = test_repositories().await;

        let swept = reaper(&participants, &messages, Duration::from_millis(0))
            .sweep()
            .await
            .unwrap();
        assert_eq!(swept, 0);
        assert!(messages.visible_to("anyone", None).await.unwrap().is_empty());
    }
}
