//! Cancellation-aware request scope tied to a screen mount.
//!
//! A fetch started through [`RequestScope::run`] yields `None` once the
//! scope is torn down, so callers never apply a result that arrives after
//! teardown. Dropping the scope tears it down.

use std::future::Future;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Default)]
pub struct RequestScope {
    token: CancellationToken,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token observing (and able to cancel) this scope.
    pub fn handle(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn teardown(&self) {
        self.token.cancel();
    }

    pub fn is_torn_down(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Drive `fut` to completion unless the scope is torn down first.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        if self.token.is_cancelled() {
            return None;
        }

        tokio::select! {
            biased;
            _ = self.token.cancelled() => None,
            out = fut => {
                // teardown may race with completion on another task
                if self.token.is_cancelled() { None } else { Some(out) }
            }
        }
    }

    /// Tear the scope down on Ctrl-C. The watcher exits on its own once
    /// the scope ends.
    pub fn teardown_on_interrupt(&self) -> JoinHandle<()> {
        let token = self.handle();
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                res = tokio::signal::ctrl_c() => {
                    if res.is_ok() {
                        tracing::info!("Interrupted, tearing down request scope");
                        token.cancel();
                    }
                }
            }
        })
    }
}

impl Drop for RequestScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
