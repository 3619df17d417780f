use crate::notification::dispatch_due_reminders::DispatchDueRemindersUseCase;
use crate::shared::usecase::execute;
use stagepass_infra::StagePassContext;
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::watch;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerStatus {
    Running,
    Stopped,
}

impl SchedulerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchedulerStatus::Running => "running",
            SchedulerStatus::Stopped => "stopped",
        }
    }
}

struct RunningTicker {
    shutdown: watch::Sender<bool>,
}

/// Owns the background ticker that runs the reminder dispatch sweep.
/// The process boots with the ticker stopped; an admin starts it over
/// the API. `start` and `stop` may be called in any order and any
/// number of times.
pub struct SchedulerControl {
    ticker: Mutex<Option<RunningTicker>>,
}

impl SchedulerControl {
    pub fn new() -> Self {
        Self {
            ticker: Mutex::new(None),
        }
    }

    /// Launch the dispatch ticker. A ticker that is already running is
    /// shut down first, so at most one sweep loop exists per control.
    pub fn start(&self, ctx: StagePassContext) {
        let mut ticker = self.ticker.lock().unwrap();
        if let Some(previous) = ticker.take() {
            let _ = previous.shutdown.send(true);
        }

        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let tick_interval = Duration::from_millis(ctx.config.tick_interval_millis as u64);
        info!(
            "Starting reminder dispatch ticker with interval {:?}",
            tick_interval
        );

        actix_web::rt::spawn(async move {
            let mut interval = tokio::time::interval(tick_interval);
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        // The sweep itself is awaited here, outside the
                        // select: a stop signal takes effect between
                        // sweeps and never cuts one short, and ticks
                        // cannot overlap.
                        let _ = execute(DispatchDueRemindersUseCase::default(), &ctx).await;
                    }
                    _ = shutdown_rx.changed() => {
                        info!("Reminder dispatch ticker shutting down");
                        break;
                    }
                }
            }
        });

        *ticker = Some(RunningTicker {
            shutdown: shutdown_tx,
        });
    }

    /// Signal the ticker to shut down. A no-op when already stopped.
    pub fn stop(&self) {
        let mut ticker = self.ticker.lock().unwrap();
        if let Some(running) = ticker.take() {
            let _ = running.shutdown.send(true);
        }
    }

    pub fn status(&self) -> SchedulerStatus {
        if self.ticker.lock().unwrap().is_some() {
            SchedulerStatus::Running
        } else {
            SchedulerStatus::Stopped
        }
    }
}

impl Default for SchedulerControl {
    fn default() -> Self {
        Self::new()
    }
}
