// Refresher module entry point
// Background task that keeps the shared body in sync with the file on disk

pub mod reader;
mod signal;

pub use signal::StopSignal;

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::config::AppState;
use crate::logger;

/// Why the refresher's loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The stop signal was triggered
    Cancelled,
    /// A file read failed; the body is frozen at its last published value
    ReadFailed,
}

/// Spawn the refresher with the interval from configuration
pub fn spawn(state: Arc<AppState>) -> JoinHandle<StopReason> {
    let period = Duration::from_secs(state.config.refresh.interval_secs);
    tokio::spawn(run(state, period))
}

/// Poll the watched file every `period`, publishing each successful read.
///
/// The loop runs until cancellation or the first read failure. Failure is
/// terminal for the refresher only: the body stays frozen at its last
/// published value and the HTTP side keeps serving that stale snapshot.
/// A tick already in flight when the stop signal fires may still publish
/// once; the next iteration observes the signal and exits.
pub async fn run(state: Arc<AppState>, period: Duration) -> StopReason {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // interval fires immediately; swallow that tick so the first read
    // happens one full period after startup
    ticker.tick().await;

    loop {
        tokio::select! {
            () = state.stop.cancelled() => {
                logger::log_refresher_stopped("stop requested");
                return StopReason::Cancelled;
            }
            _ = ticker.tick() => {
                if state.stop.is_triggered() {
                    logger::log_refresher_stopped("stop requested");
                    return StopReason::Cancelled;
                }
                match reader::read_file(state.watched.path()).await {
                    Ok(body) => {
                        logger::log_refresh_published(body.len());
                        state.publish_body(body).await;
                    }
                    Err(err) => {
                        logger::log_refresh_failed(&err);
                        return StopReason::ReadFailed;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_support::test_state_watching;
    use std::path::PathBuf;
    use tokio::time::sleep;

    const PERIOD: Duration = Duration::from_millis(50);

    /// Long enough for at least two ticks at the test period
    const TWO_TICKS: Duration = Duration::from_millis(250);

    fn scenario_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("refresh-{}-{}", name, std::process::id()));
        std::fs::write(&path, contents).expect("write scenario file");
        path
    }

    #[tokio::test]
    async fn test_body_empty_until_first_tick() {
        let path = scenario_file("first-tick", "hello");
        let state = Arc::new(test_state_watching(&path));
        let handle = tokio::spawn(run(Arc::clone(&state), PERIOD));

        // Before any tick has fired the body is still the empty default
        assert_eq!(*state.body_snapshot().await, "");

        sleep(TWO_TICKS).await;
        assert_eq!(*state.body_snapshot().await, "hello");

        state.stop.trigger();
        handle.await.expect("refresher task must not panic");
        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_overwrite_is_picked_up_next_tick() {
        let path = scenario_file("overwrite", "hello");
        let state = Arc::new(test_state_watching(&path));
        let handle = tokio::spawn(run(Arc::clone(&state), PERIOD));

        sleep(TWO_TICKS).await;
        assert_eq!(*state.body_snapshot().await, "hello");

        std::fs::write(&path, "world").expect("overwrite scenario file");
        sleep(TWO_TICKS).await;
        assert_eq!(*state.body_snapshot().await, "world");

        state.stop.trigger();
        handle.await.expect("refresher task must not panic");
        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_read_failure_freezes_last_value() {
        let path = scenario_file("freeze", "world");
        let state = Arc::new(test_state_watching(&path));
        let handle = tokio::spawn(run(Arc::clone(&state), PERIOD));

        sleep(TWO_TICKS).await;
        assert_eq!(*state.body_snapshot().await, "world");

        std::fs::remove_file(&path).expect("delete scenario file");
        let reason = tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .expect("refresher must stop after a failed read")
            .expect("refresher task must not panic");
        assert_eq!(reason, StopReason::ReadFailed);

        // Stale-data mode: the last good value persists indefinitely
        assert_eq!(*state.body_snapshot().await, "world");
        sleep(TWO_TICKS).await;
        assert_eq!(*state.body_snapshot().await, "world");
    }

    #[tokio::test]
    async fn test_stop_halts_polling() {
        let path = scenario_file("stop", "world");
        let state = Arc::new(test_state_watching(&path));
        let handle = tokio::spawn(run(Arc::clone(&state), PERIOD));

        sleep(TWO_TICKS).await;
        assert_eq!(*state.body_snapshot().await, "world");

        state.stop.trigger();
        let reason = tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .expect("refresher must observe the stop signal")
            .expect("refresher task must not panic");
        assert_eq!(reason, StopReason::Cancelled);

        // Subsequent file changes are never picked up
        std::fs::write(&path, "new").expect("overwrite scenario file");
        sleep(TWO_TICKS).await;
        assert_eq!(*state.body_snapshot().await, "world");
        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_stop_before_first_tick_means_no_read_ever() {
        let path = scenario_file("early-stop", "hello");
        let state = Arc::new(test_state_watching(&path));

        state.stop.trigger();
        let reason = tokio::time::timeout(
            Duration::from_secs(2),
            tokio::spawn(run(Arc::clone(&state), PERIOD)),
        )
        .await
        .expect("already-stopped refresher must exit promptly")
        .expect("refresher task must not panic");
        assert_eq!(reason, StopReason::Cancelled);
        assert_eq!(*state.body_snapshot().await, "");
        std::fs::remove_file(&path).ok();
    }
}
