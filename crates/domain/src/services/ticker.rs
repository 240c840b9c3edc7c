//! Live countdown ticker: re-classifies the countdown phase once per second
//! and hands each result to an observer owned by the presentation layer.

use std::sync::Arc;
use std::time::Duration;

use shared::clock::Clock;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use uuid::Uuid;

use super::countdown::{classify_countdown_phase, CountdownTick};
use crate::models::{EventFlags, EventSchedule};

/// Interval between countdown re-evaluations.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Receives every countdown evaluation; `None` means nothing should render.
#[async_trait::async_trait]
pub trait CountdownObserver: Send + Sync {
    async fn on_tick(&self, tick: Option<CountdownTick>);
}

/// Cooperative one-second ticker for a single event's countdown display.
///
/// The ticker owns no decision logic of its own: each tick reads the
/// injected clock and calls [`classify_countdown_phase`] with a fresh `now`.
/// It stops on its own once the event has ended, or deterministically via
/// [`CountdownTicker::shutdown`] when the display is torn down.
pub struct CountdownTicker {
    shutdown_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl CountdownTicker {
    /// Spawn the ticker task. The first evaluation fires immediately.
    pub fn start(
        event_id: Uuid,
        schedule: EventSchedule,
        flags: EventFlags,
        clock: Arc<dyn Clock>,
        observer: Arc<dyn CountdownObserver>,
    ) -> Self {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_INTERVAL);
            info!(event_id = %event_id, "Countdown ticker started");

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let now = clock.now();
                        let tick = classify_countdown_phase(now, &schedule, &flags);
                        let finished = now >= schedule.end_at;
                        observer.on_tick(tick).await;
                        if finished {
                            info!(event_id = %event_id, "Event ended, stopping countdown ticker");
                            break;
                        }
                    }
                    _ = shutdown_rx.changed() => {
                        if *shutdown_rx.borrow() {
                            info!(event_id = %event_id, "Countdown ticker shutting down");
                            break;
                        }
                    }
                }
            }
        });

        Self {
            shutdown_tx,
            handle,
        }
    }

    /// Signal the ticker to stop. Returns immediately.
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    /// Wait for the ticker task to finish, with a timeout.
    pub async fn wait_for_shutdown(self, timeout: Duration) {
        match tokio::time::timeout(timeout, self.handle).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!("Countdown ticker task panicked: {}", e),
            Err(_) => warn!("Countdown ticker shutdown timed out after {:?}", timeout),
        }
    }
}
