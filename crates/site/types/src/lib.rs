//! Canonical serializable types for the PUBG Central site.
//!
//! Shared between `central_roster` / `central_pages` (which build them) and
//! `central-web` (which sends and receives them as JSON).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Match detail page
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct PlayerInfo {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitch_name: Option<String>,
    /// Link to the player's stream, present when they have a stream handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_url: Option<String>,
    pub avatar_url: String,
    /// Two-letter fallback shown when the avatar fails to load.
    pub initials: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct TeamInfo {
    pub id: String,
    /// 1-based position in the roster.
    pub team_number: usize,
    pub is_filled: bool,
    pub players: Vec<PlayerInfo>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct HostInfo {
    pub name: String,
    pub avatar_url: String,
    pub rank: String,
    pub initials: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct MatchDetail {
    pub id: String,
    pub name: String,
    pub mode: String,
    pub map: String,
    pub platform: String,
    pub region: String,
    pub max_players: u32,
    pub current_players: u32,
    /// One of `open`, `ongoing`, `completed`.
    pub status: String,
    /// Indicator text: `Recruiting`, `Live` or `Completed`.
    pub status_label: String,
    pub time_created: String,
    pub team_size: usize,
    pub host: HostInfo,
    pub teams: Vec<TeamInfo>,
}

/// Everything the match page renders, including the open dialog's choices.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct GamePageView {
    #[serde(rename = "match")]
    pub detail: MatchDetail,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_team: Option<usize>,
    /// Slots the selected team may swap with.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub swap_candidates: Vec<usize>,
    /// Empty slots the selected team may move to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub move_targets: Vec<usize>,
    pub can_start: bool,
    pub can_end: bool,
}

/// Roster edits accepted by a match page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RosterActionRequest {
    Start,
    End,
    SwapTeams { a: usize, b: usize },
    MoveTeam { from: usize, to: usize },
    RemoveTeam { index: usize },
    SelectTeam { index: usize },
    ClearSelection,
}

// ---------------------------------------------------------------------------
// Page sessions
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct OpenPageResult {
    pub page_token: u64,
    pub match_id: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct PageSnapshot {
    pub page_token: u64,
    pub loading: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<GamePageView>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct PageSummary {
    pub page_token: u64,
    pub match_id: String,
    pub loading: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ListPagesResult {
    pub pages: Vec<PageSummary>,
}

// ---------------------------------------------------------------------------
// Lobby
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct PlayerStatsInfo {
    pub name: String,
    pub matches_played: u32,
    pub win_rate: String,
    pub kills_per_match: f32,
    pub avatar_url: String,
}

/// Tab-specific part of a lobby card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LobbyCardDetail {
    Open {
        time_created: String,
    },
    Ongoing {
        time_started: String,
        players_alive: u32,
    },
    Completed {
        time_completed: String,
        winner: String,
        kills: u32,
        placement: String,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct LobbyMatchInfo {
    pub id: u64,
    pub name: String,
    pub players_joined: u8,
    pub max_players: u8,
    pub hosted_by: String,
    pub region: String,
    pub platform: String,
    pub map_name: String,
    /// Camera perspective, `TPP` or `FPP`.
    pub game_mode: String,
    /// Path of the match detail page.
    pub link: String,
    #[serde(flatten)]
    pub detail: LobbyCardDetail,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct LobbyListing {
    pub player_stats: PlayerStatsInfo,
    pub default_tab: String,
    pub open: Vec<LobbyMatchInfo>,
    pub ongoing: Vec<LobbyMatchInfo>,
    pub completed: Vec<LobbyMatchInfo>,
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub remember_me: Option<bool>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct SignupForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
    #[serde(default)]
    pub terms_accepted: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct OnboardingForm {
    #[serde(default)]
    pub pubg_username: String,
    #[serde(default = "default_platform")]
    pub platform: String,
    #[serde(default)]
    pub twitch_username: Option<String>,
}

impl Default for OnboardingForm {
    fn default() -> Self {
        Self {
            pubg_username: String::new(),
            platform: default_platform(),
            twitch_username: None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct HostGameForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default = "default_map_name")]
    pub map_name: String,
    #[serde(default = "default_platform")]
    pub platform: String,
    #[serde(default = "default_game_mode")]
    pub game_mode: String,
    #[serde(default = "default_match_type")]
    pub match_type: String,
    #[serde(default = "default_player_limit")]
    pub player_limit: String,
}

impl Default for HostGameForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            region: default_region(),
            map_name: default_map_name(),
            platform: default_platform(),
            game_mode: default_game_mode(),
            match_type: default_match_type(),
            player_limit: default_player_limit(),
        }
    }
}

fn default_platform() -> String {
    "pc".to_string()
}

fn default_region() -> String {
    "north-america".to_string()
}

fn default_map_name() -> String {
    "erangel".to_string()
}

fn default_game_mode() -> String {
    "tpp".to_string()
}

fn default_match_type() -> String {
    "squad".to_string()
}

fn default_player_limit() -> String {
    "100".to_string()
}

/// Per-field validation messages, keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct FieldErrors {
    pub errors: BTreeMap<String, String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct FormOutcome {
    pub toast: ToastInfo,
    /// Path the page navigates to after the toast, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

// ---------------------------------------------------------------------------
// Toasts and routes
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum ToastVariant {
    Default,
    Success,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ToastInfo {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub variant: ToastVariant,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct SequencedToast {
    pub sequence: u64,
    #[serde(flatten)]
    pub toast: ToastInfo,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct PollToastsResult {
    pub toasts: Vec<SequencedToast>,
    /// Pass back as `cursor` to receive only newer toasts.
    pub cursor: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct RouteInfo {
    pub path: String,
    pub page: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_id: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_action_tagging() {
        let action: RosterActionRequest =
            serde_json::from_str(r#"{"type":"move_team","from":3,"to":9}"#).unwrap();
        assert_eq!(action, RosterActionRequest::MoveTeam { from: 3, to: 9 });

        let action: RosterActionRequest = serde_json::from_str(r#"{"type":"start"}"#).unwrap();
        assert_eq!(action, RosterActionRequest::Start);
    }

    #[test]
    fn test_host_form_defaults() {
        let form: HostGameForm = serde_json::from_str(r#"{"name":"Scrims"}"#).unwrap();
        assert_eq!(form.region, "north-america");
        assert_eq!(form.map_name, "erangel");
        assert_eq!(form.platform, "pc");
        assert_eq!(form.game_mode, "tpp");
        assert_eq!(form.match_type, "squad");
        assert_eq!(form.player_limit, "100");
        assert!(form.description.is_empty());
    }

    #[test]
    fn test_lobby_card_flattens_detail() {
        let card = LobbyMatchInfo {
            id: 101,
            name: "Tournament Qualifier".to_string(),
            players_joined: 4,
            max_players: 4,
            hosted_by: "TourneyAdmin".to_string(),
            region: "North America".to_string(),
            platform: "PC".to_string(),
            map_name: "Erangel".to_string(),
            game_mode: "TPP".to_string(),
            link: "/game/101".to_string(),
            detail: LobbyCardDetail::Ongoing {
                time_started: "10 minutes ago".to_string(),
                players_alive: 56,
            },
        };
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["type"], "ongoing");
        assert_eq!(json["players_alive"], 56);
        assert_eq!(json["hosted_by"], "TourneyAdmin");
    }
}
