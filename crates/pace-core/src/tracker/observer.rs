//! Reporting for side effects whose failures must not fail the caller.

use log::warn;

use crate::error::{PaceError, Result};

/// Receives failures of best-effort side effects.
pub trait SideEffectObserver {
    /// Called once per failed side effect.
    fn side_effect_failed(&self, effect: &str, error: &PaceError);
}

/// Logs failures at `warn` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl SideEffectObserver for LogObserver {
    fn side_effect_failed(&self, effect: &str, error: &PaceError) {
        warn!("{effect} failed: {error}");
    }
}

/// Runs `action`, reporting an error to `observer` instead of returning it.
/// Returns whether the action succeeded.
pub fn best_effort<O>(observer: &O, effect: &str, action: impl FnOnce() -> Result<()>) -> bool
where
    O: SideEffectObserver + ?Sized,
{
    match action() {
        Ok(()) => true,
        Err(error) => {
            observer.side_effect_failed(effect, &error);
            false
        }
    }
}
