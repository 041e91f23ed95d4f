pub mod actions;
pub mod errors;
pub mod generate;
pub mod model;
pub mod observe;
pub mod page;
pub mod systems;

pub use actions::RosterAction;
pub use errors::RosterError;
pub use generate::generate;
pub use model::{Host, Match, Player, Team};
pub use page::GamePage;
