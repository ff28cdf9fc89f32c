//! Portable Timers
//!
//! The controller runs both under tokio (server, tests) and inside the
//! browser event loop, which has no tokio time driver.

use std::future::Future;
use std::time::Duration;

use futures::future::{Either, select};
use futures::pin_mut;

/// Deadline passed before the wrapped future resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed;

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

/// Race `future` against a timer.
pub async fn timeout<F>(duration: Duration, future: F) -> Result<F::Output, Elapsed>
where
    F: Future,
{
    let delay = sleep(duration);
    pin_mut!(future);
    pin_mut!(delay);

    match select(future, delay).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(((), _)) => Err(Elapsed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_timeout_passes_fast_future_through() {
        let result = timeout(Duration::from_secs(1), async { 7 }).await;
        assert_eq!(result, Ok(7));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_fires_on_slow_future() {
        let slow = sleep(Duration::from_secs(5));
        let result = timeout(Duration::from_millis(100), slow).await;
        assert_eq!(result, Err(Elapsed));
    }
}
