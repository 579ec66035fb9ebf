//! Ad-watch countdown: the reward claim unlocks when the timer runs out.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use log::{debug, info};

/// How long a sponsored ad runs, in seconds.
pub const AD_DURATION_SECS: u32 = 30;

/// Why a countdown operation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CountdownError {
    /// The countdown was never started.
    #[error("Ad has not been started")]
    NotStarted,

    /// The countdown is already running; it cannot be restarted.
    #[error("Ad is already playing")]
    AlreadyStarted,

    /// The countdown has not reached zero yet.
    #[error("Reward is not claimable yet")]
    NotReady,

    /// The reward was already claimed.
    #[error("Reward already claimed")]
    AlreadyClaimed,
}

#[derive(Debug)]
struct CountdownInner {
    total_secs: u32,
    remaining_secs: u32,
    reward_points: f64,
    started: bool,
    claimed: bool,
}

/// Shared countdown state for one ad view.
///
/// Cloning yields another handle to the same countdown, so a render loop
/// can observe the state a [`run`](AdCountdown::run) task is advancing.
/// Single writer: only the timer task calls [`tick`](AdCountdown::tick).
#[derive(Debug)]
pub struct AdCountdown {
    inner: Arc<RwLock<CountdownInner>>,
}

impl AdCountdown {
    /// A countdown of `total_secs` seconds unlocking `reward_points`.
    pub fn new(total_secs: u32, reward_points: f64) -> Self {
        Self {
            inner: Arc::new(RwLock::new(CountdownInner {
                total_secs,
                remaining_secs: total_secs,
                reward_points,
                started: false,
                claimed: false,
            })),
        }
    }

    /// Arm the countdown. A second start is refused: the source page
    /// drops its click handler after the first press for the same reason.
    pub fn start(&self) -> Result<(), CountdownError> {
        let mut guard = match self.inner.write() {
            Ok(guard) => guard,
            Err(_) => return Err(CountdownError::NotStarted),
        };
        if guard.started {
            return Err(CountdownError::AlreadyStarted);
        }
        guard.started = true;
        debug!("ad countdown started ({} s)", guard.total_secs);
        Ok(())
    }

    /// Advance one second and return the seconds left. A no-op before
    /// `start` and after reaching zero.
    pub fn tick(&self) -> u32 {
        if let Ok(mut guard) = self.inner.write() {
            if guard.started && guard.remaining_secs > 0 {
                guard.remaining_secs -= 1;
            }
            guard.remaining_secs
        } else {
            0
        }
    }

    /// Whether `start` has been called.
    pub fn is_started(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.started)
            .unwrap_or(false)
    }

    /// Seconds left.
    pub fn remaining_secs(&self) -> u32 {
        self.inner
            .read()
            .map(|guard| guard.remaining_secs)
            .unwrap_or(0)
    }

    /// Configured duration in seconds.
    pub fn total_secs(&self) -> u32 {
        self.inner
            .read()
            .map(|guard| guard.total_secs)
            .unwrap_or(0)
    }

    /// Share of time left, as a percentage for the progress bar.
    pub fn progress(&self) -> f64 {
        self.inner
            .read()
            .map(|guard| {
                if guard.total_secs == 0 {
                    0.0
                } else {
                    f64::from(guard.remaining_secs) / f64::from(guard.total_secs) * 100.0
                }
            })
            .unwrap_or(0.0)
    }

    /// Whether the reward can be claimed right now.
    pub fn is_claimable(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.started && guard.remaining_secs == 0 && !guard.claimed)
            .unwrap_or(false)
    }

    /// Message for the timer line once the countdown completes.
    pub fn status_message(&self) -> Option<&'static str> {
        if self.is_claimable() {
            Some("You can now claim your reward!")
        } else {
            None
        }
    }

    /// Claim the reward, returning the points. Refused until the
    /// countdown reaches zero and on every attempt after the first.
    pub fn claim(&self) -> Result<f64, CountdownError> {
        let mut guard = match self.inner.write() {
            Ok(guard) => guard,
            Err(_) => return Err(CountdownError::NotReady),
        };
        if !guard.started {
            return Err(CountdownError::NotStarted);
        }
        if guard.remaining_secs > 0 {
            return Err(CountdownError::NotReady);
        }
        if guard.claimed {
            return Err(CountdownError::AlreadyClaimed);
        }
        guard.claimed = true;
        info!("reward claimed: {} points", guard.reward_points);
        Ok(guard.reward_points)
    }

    /// Drive the countdown to zero with one tick per `tick_every`.
    ///
    /// Returns immediately if the countdown was never started. There is no
    /// cancellation contract; dropping the future mid-run just leaves the
    /// countdown where it was.
    pub async fn run_with_tick(&self, tick_every: Duration) {
        if !self.is_started() {
            return;
        }
        loop {
            tokio::time::sleep(tick_every).await;
            if self.tick() == 0 {
                break;
            }
        }
    }

    /// Drive the countdown at the page's one-second cadence.
    pub async fn run(&self) {
        self.run_with_tick(Duration::from_secs(1)).await;
    }
}

impl Clone for AdCountdown {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
