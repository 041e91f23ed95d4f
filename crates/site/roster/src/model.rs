use central_core::{MapName, MatchStatus, Mode, Platform, Region};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub twitch_name: Option<String>,
    pub avatar_url: String,
}

/// One roster slot. A team is filled exactly when it has players.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Team {
    pub id: String,
    pub players: Vec<Player>,
}

impl Team {
    /// Fresh unfilled team for the given slot.
    pub fn empty(slot: usize) -> Self {
        Self {
            id: format!("team-{slot}"),
            players: Vec::new(),
        }
    }

    #[inline]
    pub fn is_filled(&self) -> bool {
        !self.players.is_empty()
    }
}

/// Nominal organizer of a match. Displayed only, never part of the roster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Host {
    pub name: String,
    pub avatar_url: String,
    pub rank: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    pub id: String,
    pub name: String,
    pub mode: Mode,
    pub map: MapName,
    pub platform: Platform,
    pub region: Region,
    pub max_players: u32,
    pub current_players: u32,
    pub status: MatchStatus,
    pub time_created: String,
    pub host: Host,
    pub teams: Vec<Team>,
}

impl Match {
    #[inline]
    pub fn team_size(&self) -> usize {
        self.mode.team_size()
    }

    #[inline]
    pub fn slot_count(&self) -> usize {
        self.teams.len()
    }
}
