// clock.rs - Fixed-interval ticker driving the simulation while it runs

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, Receiver};
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, trace};

/// Interval task on a tokio runtime that raises a tick once per period.
///
/// The UI thread polls [`Clock::take_tick`] and runs one generation per
/// tick, so the grid never leaves that thread. At most one tick is pending:
/// ticks that fire while the previous one is still untaken are coalesced.
/// Each start opens a fresh channel, so an aborted ticker cannot leak ticks
/// into the next run.
pub struct Clock {
    runtime: Handle,
    period: Duration,
    ticks: Option<Receiver<()>>,
    ticker: Option<JoinHandle<()>>,
}

impl Clock {
    pub fn new(runtime: Handle, period: Duration) -> Self {
        Self {
            runtime,
            period,
            ticks: None,
            ticker: None,
        }
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    /// Starts ticking; the first tick lands one full period from now.
    /// `on_tick` runs on the runtime each time the interval fires.
    pub fn start<F>(&mut self, on_tick: F)
    where
        F: Fn() + Send + 'static,
    {
        self.stop();

        let period = self.period;
        let (tx, rx) = mpsc::channel(1);
        let first = Instant::now() + period;

        self.ticks = Some(rx);
        self.ticker = Some(self.runtime.spawn(async move {
            let mut interval = time::interval_at(first, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                match tx.try_send(()) {
                    Ok(()) => {}
                    Err(TrySendError::Full(())) => trace!("tick coalesced"),
                    Err(TrySendError::Closed(())) => break,
                }
                on_tick();
            }
        }));
        debug!(period_ms = period.as_millis() as u64, "clock started");
    }

    /// Cancels the ticker and discards a tick that was not taken yet.
    pub fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
            let dropped = self.ticks.take().is_some_and(|mut rx| rx.try_recv().is_ok());
            debug!(dropped, "clock stopped");
        }
    }

    /// Whether a tick fired since the last call.
    pub fn take_tick(&mut self) -> bool {
        self.ticks.as_mut().is_some_and(|rx| rx.try_recv().is_ok())
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}
