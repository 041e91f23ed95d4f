pub mod page;
pub mod types;

pub use page::PageModel;
pub use types::{parse_match_number, MapName, MatchStatus, Mode, Platform, Region};
