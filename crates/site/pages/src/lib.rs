pub mod forms;
pub mod lobby;
pub mod routes;

pub use forms::{
    submit_host_game, submit_login, submit_onboarding, submit_signup, validate_host_game,
    validate_login, validate_onboarding, validate_signup,
};
pub use lobby::{Lobby, LobbyTab};
pub use routes::Route;
