use crate::errors::PageError;
use crate::types::PageStatus;
use central_core::PageModel;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, Notify};
use tokio::time::Instant;

/// Internal state of a page.
pub struct PageInner<P: PageModel> {
    pub params: P::Params,
    pub seed: u64,
    /// `None` until the simulated fetch completes.
    pub model: Option<P>,
    pub ready_notify: Arc<Notify>,
}

impl<P: PageModel> PageInner<P> {
    pub fn new(params: P::Params, seed: u64) -> Self {
        Self {
            params,
            seed,
            model: None,
            ready_notify: Arc::new(Notify::new()),
        }
    }

    pub fn status(&self) -> PageStatus {
        if self.model.is_some() {
            PageStatus::Ready
        } else {
            PageStatus::Loading
        }
    }
}

/// Thread-safe handle to one open page.
pub struct PageHandle<P: PageModel> {
    pub inner: Arc<Mutex<PageInner<P>>>,
}

impl<P: PageModel> Clone for PageHandle<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P: PageModel> PageHandle<P> {
    pub fn new(params: P::Params, seed: u64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(PageInner::new(params, seed))),
        }
    }

    /// Generate the page model. Later calls leave the loaded model alone.
    pub async fn finish_loading(&self) {
        let mut inner = self.inner.lock().await;
        if inner.model.is_some() {
            return;
        }

        let model = P::load(inner.params.clone(), inner.seed);
        inner.model = Some(model);
        inner.ready_notify.notify_waiters();
    }

    pub async fn status(&self) -> PageStatus {
        self.inner.lock().await.status()
    }

    /// Current view, or `None` while loading.
    pub async fn view(&self) -> Option<P::View> {
        let inner = self.inner.lock().await;
        inner.model.as_ref().map(P::view)
    }

    /// Apply an action and return the updated view.
    pub async fn apply(&self, action: P::Action) -> Result<P::View, PageError> {
        let mut inner = self.inner.lock().await;
        let model = inner.model.as_mut().ok_or(PageError::Loading)?;

        model
            .apply(action)
            .map_err(|e| PageError::Rejected(e.to_string()))?;
        Ok(model.view())
    }

    /// Wait until the page has loaded or `max_wait` elapses.
    /// Returns whether the page is ready.
    pub async fn wait_ready(&self, max_wait: Duration) -> bool {
        let deadline = Instant::now() + max_wait;

        loop {
            let notify = {
                let inner = self.inner.lock().await;
                if inner.model.is_some() {
                    return true;
                }
                Arc::clone(&inner.ready_notify)
            };

            let notified = notify.notified();
            let mut notified = std::pin::pin!(notified);
            // Register before re-checking so a load finishing in between is not missed.
            notified.as_mut().enable();

            if self.status().await == PageStatus::Ready {
                return true;
            }

            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            if tokio::time::timeout(remaining, notified).await.is_err() {
                return self.status().await == PageStatus::Ready;
            }
        }
    }
}
