use crate::errors::{OpenPageError, PageError};
use crate::load_task::spawn_load;
use crate::page_handle::PageHandle;
use crate::types::{PageInfo, PageStatus, PageToken, ServerConfig};
use central_core::PageModel;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

struct PageEntry<P: PageModel> {
    handle: PageHandle<P>,
    task: JoinHandle<()>,
}

/// Owns every open page. Each page holds its own model; nothing is shared
/// between pages and nothing outlives `close_page`.
pub struct PageServer<P: PageModel> {
    pub config: ServerConfig,
    pages: Arc<RwLock<HashMap<PageToken, PageEntry<P>>>>,
    next_token: AtomicU64,
    base_seed: u64,
}

impl<P: PageModel + Send + 'static> PageServer<P> {
    pub fn new(config: ServerConfig) -> Self {
        let base_seed = config.seed.unwrap_or_else(rand::random);
        Self {
            config,
            pages: Arc::new(RwLock::new(HashMap::new())),
            next_token: AtomicU64::new(1),
            base_seed,
        }
    }

    /// Close every page, cancelling loads still in flight.
    pub async fn shutdown(&self) {
        let mut pages = self.pages.write().await;

        for (_, entry) in pages.drain() {
            entry.task.abort();
            let _ = entry.task.await;
        }
    }

    /// Open a page and start its simulated fetch.
    pub async fn open_page(&self, params: P::Params) -> Result<PageToken, OpenPageError> {
        let mut pages = self.pages.write().await;
        if pages.len() >= self.config.max_pages {
            return Err(OpenPageError::TooManyPages);
        }

        let token = PageToken(self.next_token.fetch_add(1, Ordering::Relaxed));
        let seed = self.base_seed.wrapping_add(token.0);
        let handle = PageHandle::new(params, seed);
        let task = spawn_load(handle.clone(), self.config.load_delay);

        pages.insert(token, PageEntry { handle, task });
        tracing::info!(page = token.0, open_pages = pages.len(), "page opened");

        Ok(token)
    }

    /// Close a page and discard its state.
    pub async fn close_page(&self, token: PageToken) -> Result<(), PageError> {
        let entry = self
            .pages
            .write()
            .await
            .remove(&token)
            .ok_or(PageError::NotFound)?;

        if !entry.task.is_finished() {
            tracing::debug!(page = token.0, "cancelling pending load");
        }
        entry.task.abort();
        let _ = entry.task.await;

        tracing::info!(page = token.0, "page closed");
        Ok(())
    }

    /// List all open pages.
    pub async fn list_pages(&self) -> Vec<PageInfo<P::Params>> {
        let pages = self.pages.read().await;
        let mut infos = Vec::with_capacity(pages.len());

        for (&token, entry) in pages.iter() {
            let inner = entry.handle.inner.lock().await;
            infos.push(PageInfo {
                token,
                params: inner.params.clone(),
                status: inner.status(),
            });
        }

        infos.sort_by_key(|info| info.token);
        infos
    }

    pub async fn status(&self, token: PageToken) -> Result<PageStatus, PageError> {
        Ok(self.handle(token).await?.status().await)
    }

    /// Current view, or `None` while the page is loading.
    pub async fn view(&self, token: PageToken) -> Result<Option<P::View>, PageError> {
        Ok(self.handle(token).await?.view().await)
    }

    /// Apply a user action to a loaded page and return the new view.
    pub async fn apply(&self, token: PageToken, action: P::Action) -> Result<P::View, PageError> {
        let handle = self.handle(token).await?;
        let result = handle.apply(action).await;

        if let Err(e) = &result {
            tracing::debug!(page = token.0, error = %e, "action not applied");
        }
        result
    }

    /// Wait for a page to finish loading, up to `max_wait`.
    pub async fn wait_ready(&self, token: PageToken, max_wait: Duration) -> Result<bool, PageError> {
        let handle = self.handle(token).await?;
        Ok(handle.wait_ready(max_wait).await)
    }

    async fn handle(&self, token: PageToken) -> Result<PageHandle<P>, PageError> {
        let pages = self.pages.read().await;
        pages
            .get(&token)
            .map(|entry| entry.handle.clone())
            .ok_or(PageError::NotFound)
    }
}
