//! # Navigator Seam
//!
//! The checkout flow ends with a full-page redirect of the user agent.
//! How that happens depends on the host (browser `location`, webview,
//! test harness), so it sits behind a trait.

use async_trait::async_trait;
use funnel_core::FunnelResult;
use tracing::info;

/// Navigates the user agent to a URL.
#[async_trait]
pub trait Navigator: Send + Sync {
    /// Perform a full-page redirect. There is no return to the calling
    /// flow once this succeeds in a real host.
    async fn navigate(&self, url: &str) -> FunnelResult<()>;
}

/// Navigator that only logs the target URL.
///
/// For headless hosts that surface the checkout URL through another
/// channel instead of redirecting.
pub struct NoopNavigator;

#[async_trait]
impl Navigator for NoopNavigator {
    async fn navigate(&self, url: &str) -> FunnelResult<()> {
        info!("Navigation requested (noop): url={}", url);
        Ok(())
    }
}
