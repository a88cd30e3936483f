//! The alert lifecycle engine.

use alert_core::{
    classify, AckDecision, ForecastProvider, IntentSink, NotificationIntent,
};
use futures::{stream, StreamExt};
use tiretime_database::{alert, subscriber, Alert, Database, DatabaseError, Subscriber};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::error::EngineError;

/// What an acknowledgment did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckOutcome {
    /// The recommended tire type was applied and the alert closed.
    Applied,
    /// No alert was open for the subscriber; nothing to do.
    NothingPending,
    /// The subscriber deferred; the alert stays open for the next cycle.
    Deferred,
}

/// Counters for one evaluation cycle, for the caller/operator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// New alerts opened.
    pub opened: usize,
    /// Open alerts escalated and re-sent.
    pub resent: usize,
    /// Alerts auto-resolved (tire type applied).
    pub resolved: usize,
    /// Candidates skipped because their forecast was unavailable.
    pub forecast_failures: usize,
    /// Notifications whose delivery failed after the state change committed.
    pub delivery_failures: usize,
}

/// The alert lifecycle engine.
///
/// Exclusively owns alert state: it opens alerts when a subscriber's
/// forecast stops matching their tires, escalates them across cycles, and
/// resolves them on acknowledgment or when the escalation budget runs out.
/// All store mutations go through the conditional operations in the
/// database crate, so a resend sweep and a concurrent acknowledgment can
/// never both act on the same alert.
pub struct AlertEngine<F: ForecastProvider, S: IntentSink> {
    db: Database,
    forecast: F,
    sink: S,
    config: EngineConfig,
    /// Serializes overlapping cycle invocations; a second cycle waits for
    /// the first to finish instead of double-escalating alerts.
    cycle_lock: Mutex<()>,
}

impl<F: ForecastProvider, S: IntentSink> AlertEngine<F, S> {
    /// Create a new engine with the given collaborators.
    pub fn new(db: Database, forecast: F, sink: S, config: EngineConfig) -> Self {
        Self {
            db,
            forecast,
            sink,
            config,
            cycle_lock: Mutex::new(()),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the database handle.
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Get the notification sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run one evaluation cycle.
    ///
    /// 1. Snapshot the sweep set (all open alerts). Alerts opened later in
    ///    this same cycle are not in the snapshot and therefore never
    ///    escalated by the cycle that opened them.
    /// 2. For every subscriber without an alert, fetch the forecast and open
    ///    an alert when the classification diverges from their current
    ///    tires. Forecast failures skip the one candidate.
    /// 3. Sweep the snapshot: escalate each alert, or resolve it when the
    ///    escalation budget is exhausted.
    ///
    /// Every store mutation commits before its notification is sent;
    /// delivery failures are counted, never rolled back.
    pub async fn evaluate_cycle(&self) -> Result<CycleReport, EngineError> {
        let _cycle = self.cycle_lock.lock().await;
        let mut report = CycleReport::default();

        let mut sweep = alert::list_unsent(self.db.pool()).await?;
        sweep.extend(alert::list_sent(self.db.pool()).await?);

        let candidates = subscriber::list_unalerted(self.db.pool()).await?;
        info!(
            "Evaluation cycle: {} candidates, {} open alerts to sweep",
            candidates.len(),
            sweep.len()
        );

        let forecasts: Vec<_> = stream::iter(candidates)
            .map(|candidate| async move {
                let average = self
                    .forecast
                    .average_temperature(candidate.location(), self.config.forecast_days)
                    .await;
                (candidate, average)
            })
            .buffer_unordered(self.config.max_concurrent_forecasts.max(1))
            .collect()
            .await;

        for (candidate, average) in forecasts {
            match average {
                Ok(average) => self.open_if_mismatched(&candidate, average, &mut report).await?,
                Err(e) => {
                    warn!(
                        "Skipping subscriber {}: forecast unavailable: {}",
                        candidate.id, e
                    );
                    report.forecast_failures += 1;
                }
            }
        }

        for open in sweep {
            self.escalate_or_resolve(&open, &mut report).await?;
        }

        info!(
            "Cycle complete: {} opened, {} resent, {} resolved, {} forecast failures, {} delivery failures",
            report.opened,
            report.resent,
            report.resolved,
            report.forecast_failures,
            report.delivery_failures
        );

        Ok(report)
    }

    /// Handle a subscriber's reaction to a notification.
    ///
    /// Idempotent: acknowledging with no alert open (a re-ack, or a lost
    /// race against the resend sweep) is a no-op, not an error.
    pub async fn acknowledge(
        &self,
        subscriber_id: i64,
        decision: AckDecision,
    ) -> Result<AckOutcome, EngineError> {
        match decision {
            AckDecision::Defer => {
                debug!("Subscriber {} deferred; alert stays open", subscriber_id);
                Ok(AckOutcome::Deferred)
            }
            AckDecision::ApplyNow => {
                let Some(open) = alert::get_alert(self.db.pool(), subscriber_id).await? else {
                    debug!("Subscriber {} acknowledged with no open alert", subscriber_id);
                    return Ok(AckOutcome::NothingPending);
                };

                if alert::resolve(self.db.pool(), subscriber_id, open.recommended).await? {
                    info!(
                        "Subscriber {} applied {} tires (acknowledged at count {})",
                        subscriber_id, open.recommended, open.count
                    );
                    Ok(AckOutcome::Applied)
                } else {
                    debug!("Alert for subscriber {} already resolved", subscriber_id);
                    Ok(AckOutcome::NothingPending)
                }
            }
        }
    }

    /// Open an alert for a candidate whose forecast no longer matches their
    /// tires, and send the first notification.
    async fn open_if_mismatched(
        &self,
        candidate: &Subscriber,
        average: f64,
        report: &mut CycleReport,
    ) -> Result<(), EngineError> {
        let recommended = classify(average);
        if recommended == candidate.tire_type {
            debug!(
                "Subscriber {}: {:.1}°C still matches {} tires",
                candidate.id, average, candidate.tire_type
            );
            return Ok(());
        }

        match alert::create_alert(self.db.pool(), &Alert::open(candidate.id, recommended)).await {
            Ok(()) => {
                info!(
                    "Opened alert for subscriber {}: {:.1}°C average, recommend {} tires",
                    candidate.id, average, recommended
                );
                report.opened += 1;
                self.deliver(
                    NotificationIntent::opened(candidate.id, recommended, average),
                    report,
                )
                .await;
            }
            // Lost a race against a concurrent onboarding/cycle; the
            // existing alert stands.
            Err(DatabaseError::AlreadyExists { .. }) => {
                debug!("Subscriber {} already has an open alert", candidate.id);
            }
            Err(e) => return Err(e.into()),
        }

        Ok(())
    }

    /// Escalate one swept alert, or resolve it when the next send would
    /// reach the expiration threshold.
    async fn escalate_or_resolve(
        &self,
        open: &Alert,
        report: &mut CycleReport,
    ) -> Result<(), EngineError> {
        if open.count + 1 >= self.config.expiration_threshold {
            if alert::resolve(self.db.pool(), open.subscriber_id, open.recommended).await? {
                info!(
                    "Auto-applied {} tires for subscriber {} after {} reminders",
                    open.recommended, open.subscriber_id, open.count
                );
                report.resolved += 1;
                self.deliver(
                    NotificationIntent::resolved(open.subscriber_id, open.recommended, open.count),
                    report,
                )
                .await;
            } else {
                debug!(
                    "Alert for subscriber {} resolved concurrently; skipping",
                    open.subscriber_id
                );
            }
        } else if alert::increment_if_count(self.db.pool(), open.subscriber_id, open.count).await? {
            report.resent += 1;
            self.deliver(
                NotificationIntent::resend(open.subscriber_id, open.recommended, open.count + 1),
                report,
            )
            .await;
        } else {
            debug!(
                "Alert for subscriber {} changed concurrently; skipping resend",
                open.subscriber_id
            );
        }

        Ok(())
    }

    /// Best-effort delivery. The paired store mutation is already committed.
    async fn deliver(&self, intent: NotificationIntent, report: &mut CycleReport) {
        if let Err(e) = self.sink.deliver(&intent).await {
            warn!(
                "Failed to deliver {:?} notification to subscriber {}: {}",
                intent.kind, intent.subscriber_id, e
            );
            report.delivery_failures += 1;
        }
    }
}
