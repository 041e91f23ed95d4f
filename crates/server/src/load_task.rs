use crate::page_handle::PageHandle;
use central_core::PageModel;
use std::time::Duration;
use tokio::time::sleep;

/// Simulate fetching page data: wait `delay`, then generate the model.
/// Aborting the task before the delay elapses leaves the page loading.
pub async fn run_load<P: PageModel + Send + 'static>(handle: PageHandle<P>, delay: Duration) {
    if !delay.is_zero() {
        sleep(delay).await;
    }

    handle.finish_loading().await;
    tracing::debug!(delay_ms = delay.as_millis() as u64, "page data loaded");
}

/// Spawn the simulated fetch as a tokio task.
pub fn spawn_load<P: PageModel + Send + 'static>(
    handle: PageHandle<P>,
    delay: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(run_load(handle, delay))
}
