//! Periodic task owned by a widget.
//!
//! A `ScopedInterval` runs its callback on a tokio runtime every `period`
//! until it is cancelled or dropped. Dropping the handle aborts the task, so a
//! widget that is torn down can never be ticked again.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

/// Callback a widget uses to ask its host for a redraw after a timer changed state
pub type RepaintHook = Arc<dyn Fn() + Send + Sync>;

const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug)]
enum Control {
    Restart,
}

pub struct ScopedInterval {
    period: Duration,
    control: mpsc::UnboundedSender<Control>,
    task: JoinHandle<()>,
}

impl ScopedInterval {
    /// Spawn the periodic task. The first tick fires one full period after spawning.
    pub fn spawn<F>(runtime: &Handle, period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let period = period.max(MIN_PERIOD);
        let (control, mut commands) = mpsc::unbounded_channel();

        let task = runtime.spawn(async move {
            let mut deadline = Instant::now() + period;
            loop {
                tokio::select! {
                    _ = time::sleep_until(deadline) => {
                        on_tick();
                        deadline += period;
                        let now = Instant::now();
                        if deadline <= now {
                            // Runtime stalled past a whole period; skip the backlog.
                            deadline = now + period;
                        }
                    }
                    command = commands.recv() => match command {
                        Some(Control::Restart) => deadline = Instant::now() + period,
                        None => break,
                    },
                }
            }
        });

        Self {
            period,
            control,
            task,
        }
    }

    /// Push the next tick a full period into the future
    pub fn restart(&self) {
        if self.control.send(Control::Restart).is_err() {
            log::debug!("restart requested on a finished interval");
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_active(&self) -> bool {
        !self.task.is_finished()
    }

    /// Stop the task. Equivalent to dropping the handle.
    pub fn cancel(self) {}
}

impl Drop for ScopedInterval {
    fn drop(&mut self) {
        self.task.abort();
    }
}
