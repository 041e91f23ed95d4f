pub mod errors;
pub mod load_task;
pub mod page_handle;
pub mod server;
pub mod toasts;
pub mod types;

pub use errors::{OpenPageError, PageError};
pub use page_handle::PageHandle;
pub use server::PageServer;
pub use toasts::ToastBuffer;
pub use types::{PageInfo, PageStatus, PageToken, SequencedNotice, ServerConfig, ToastCursor};
