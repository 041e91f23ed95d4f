use std::time::Duration;

/// Identifies one open page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageToken(pub u64);

/// Tracks position in the toast stream for cursor-based retrieval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ToastCursor(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageStatus {
    /// Waiting for the simulated fetch to finish.
    Loading,
    Ready,
}

/// Information about an open page.
#[derive(Clone, Debug)]
pub struct PageInfo<P> {
    pub token: PageToken,
    pub params: P,
    pub status: PageStatus,
}

/// A notice with sequence number for cursor tracking.
#[derive(Clone, Debug, PartialEq)]
pub struct SequencedNotice<T> {
    pub sequence: u64,
    pub notice: T,
}

/// Configuration for the page server.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Artificial delay before page data appears.
    pub load_delay: Duration,
    /// Maximum number of concurrently open pages.
    pub max_pages: usize,
    /// Capacity of the toast ring buffer.
    pub toast_capacity: usize,
    /// Fixed seed for mock data. `None` draws one at startup.
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            load_delay: Duration::from_millis(1000),
            max_pages: 256,
            toast_capacity: 64,
            seed: None,
        }
    }
}
