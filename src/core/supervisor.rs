//! Session supervision.
//!
//! Keeps the bot "always up": any session exit, error or clean return,
//! leads to a restart after a delay. Consecutive failures back off
//! exponentially from `initial_delay` up to `max_delay`; a session that
//! stays up for at least `reset_after` clears the failure count. After
//! `max_failures` consecutive failures the supervisor gives up with a typed
//! error naming the last failure, so a persistent misconfiguration surfaces
//! to the operator instead of spinning in an invisible restart loop.

use std::time::{Duration, Instant};

use tracing::{error, info, warn};

use crate::error::{Result, SupervisorError};

/// Restart behavior for a supervised session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestartPolicy {
    /// Delay before the first restart, and after any clean exit.
    pub initial_delay: Duration,
    /// Upper bound for the backoff delay.
    pub max_delay: Duration,
    /// Consecutive failures tolerated before giving up.
    pub max_failures: u32,
    /// Uptime after which the failure count resets.
    pub reset_after: Duration,
}

impl Default for RestartPolicy {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
            max_failures: 8,
            reset_after: Duration::from_secs(60),
        }
    }
}

/// Run `session` under the restart policy until it fails `max_failures`
/// times in a row.
///
/// # Errors
///
/// Returns `SupervisorError::TooManyFailures` once the failure threshold
/// is reached. Never returns `Ok`.
pub fn supervise<F>(policy: &RestartPolicy, mut session: F) -> Result<()>
where
    F: FnMut() -> Result<()>,
{
    let mut failures: u32 = 0;
    let mut delay = policy.initial_delay;

    loop {
        let started = Instant::now();
        match session() {
            Ok(()) => {
                info!("session ended cleanly; restarting");
                failures = 0;
                delay = policy.initial_delay;
                std::thread::sleep(policy.initial_delay);
            }
            Err(err) => {
                if started.elapsed() >= policy.reset_after {
                    failures = 0;
                    delay = policy.initial_delay;
                }
                failures += 1;

                if failures >= policy.max_failures {
                    error!(%err, failures, "session failed; giving up");
                    return Err(SupervisorError::TooManyFailures {
                        attempts: failures,
                        last: err.to_string(),
                    }
                    .into());
                }

                warn!(
                    %err,
                    failures,
                    delay_ms = delay.as_millis() as u64,
                    "session failed; restarting after backoff"
                );
                std::thread::sleep(delay);
                delay = next_delay(delay, policy);
            }
        }
    }
}

/// Double the delay, saturating at the policy maximum.
fn next_delay(delay: Duration, policy: &RestartPolicy) -> Duration {
    (delay * 2).min(policy.max_delay)
}
