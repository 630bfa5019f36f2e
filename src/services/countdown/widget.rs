use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;

use crate::models::countdown::Countdown;
use crate::models::settings::CountdownSettings;
use crate::services::timer::{RepaintHook, ScopedInterval};

/// Offer countdown that ticks once per period while mounted.
///
/// Every mount starts again from the configured value; nothing carries over
/// from a previous mount.
pub struct CountdownTimer {
    start: Countdown,
    tick_period: Duration,
    remaining: Arc<Mutex<Countdown>>,
    ticker: Option<ScopedInterval>,
}

impl CountdownTimer {
    pub fn new(settings: &CountdownSettings) -> Self {
        Self {
            start: settings.start,
            tick_period: Duration::from_millis(settings.tick_ms),
            remaining: Arc::new(Mutex::new(settings.start)),
            ticker: None,
        }
    }

    pub fn mount(&mut self, runtime: &Handle, repaint: RepaintHook) {
        *self.lock_remaining() = self.start;

        let remaining = Arc::clone(&self.remaining);
        let ticker = ScopedInterval::spawn(runtime, self.tick_period, move || {
            let changed = remaining
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .tick();
            if changed {
                repaint();
            }
        });

        log::info!("Countdown mounted at {} (tick every {:?})", self.start, ticker.period());
        self.ticker = Some(ticker);
    }

    pub fn unmount(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
            log::info!("Countdown unmounted at {}", self.remaining());
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.ticker.as_ref().is_some_and(ScopedInterval::is_active)
    }

    pub fn remaining(&self) -> Countdown {
        *self.lock_remaining()
    }

    pub fn is_finished(&self) -> bool {
        self.lock_remaining().is_zero()
    }

    fn lock_remaining(&self) -> MutexGuard<'_, Countdown> {
        self.remaining.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.unmount();
    }
}
