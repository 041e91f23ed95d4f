use central_core::{MapName, Platform, Region};
use central_types::{LobbyCardDetail, LobbyListing, LobbyMatchInfo, PlayerStatsInfo};
use std::fmt;
use std::str::FromStr;

/// Camera perspective a lobby match is played in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Perspective {
    Tpp,
    Fpp,
}

impl Perspective {
    pub const fn as_str(self) -> &'static str {
        match self {
            Perspective::Tpp => "TPP",
            Perspective::Fpp => "FPP",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LobbyTab {
    Open,
    Ongoing,
    Completed,
}

impl LobbyTab {
    pub const DEFAULT: LobbyTab = LobbyTab::Open;

    pub const fn as_str(self) -> &'static str {
        match self {
            LobbyTab::Open => "open",
            LobbyTab::Ongoing => "ongoing",
            LobbyTab::Completed => "completed",
        }
    }
}

impl fmt::Display for LobbyTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when a tab name is not one of the lobby tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTab(pub String);

impl fmt::Display for UnknownTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown lobby tab: {}", self.0)
    }
}

impl std::error::Error for UnknownTab {}

impl FromStr for LobbyTab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(LobbyTab::Open),
            "ongoing" => Ok(LobbyTab::Ongoing),
            "completed" => Ok(LobbyTab::Completed),
            other => Err(UnknownTab(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CardState {
    Open {
        time_created: &'static str,
    },
    Ongoing {
        time_started: &'static str,
        players_alive: u32,
    },
    Completed {
        time_completed: &'static str,
        winner: &'static str,
        kills: u32,
        placement: &'static str,
    },
}

impl CardState {
    pub fn tab(&self) -> LobbyTab {
        match self {
            CardState::Open { .. } => LobbyTab::Open,
            CardState::Ongoing { .. } => LobbyTab::Ongoing,
            CardState::Completed { .. } => LobbyTab::Completed,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LobbyMatch {
    pub id: u64,
    pub name: &'static str,
    pub players_joined: u8,
    pub max_players: u8,
    pub hosted_by: &'static str,
    pub region: Region,
    pub platform: Platform,
    pub map: MapName,
    pub perspective: Perspective,
    pub state: CardState,
}

impl LobbyMatch {
    pub fn link(&self) -> String {
        format!("/game/{}", self.id)
    }

    fn info(&self) -> LobbyMatchInfo {
        let detail = match &self.state {
            CardState::Open { time_created } => LobbyCardDetail::Open {
                time_created: time_created.to_string(),
            },
            CardState::Ongoing {
                time_started,
                players_alive,
            } => LobbyCardDetail::Ongoing {
                time_started: time_started.to_string(),
                players_alive: *players_alive,
            },
            CardState::Completed {
                time_completed,
                winner,
                kills,
                placement,
            } => LobbyCardDetail::Completed {
                time_completed: time_completed.to_string(),
                winner: winner.to_string(),
                kills: *kills,
                placement: placement.to_string(),
            },
        };

        LobbyMatchInfo {
            id: self.id,
            name: self.name.to_string(),
            players_joined: self.players_joined,
            max_players: self.max_players,
            hosted_by: self.hosted_by.to_string(),
            region: self.region.to_string(),
            platform: self.platform.to_string(),
            map_name: self.map.to_string(),
            game_mode: self.perspective.as_str().to_string(),
            link: self.link(),
            detail,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerStats {
    pub name: &'static str,
    pub matches_played: u32,
    pub win_rate: &'static str,
    pub kills_per_match: f32,
    pub avatar_url: &'static str,
}

/// The lobby page: the signed-in player's stats and the tabbed match list.
#[derive(Clone, Debug)]
pub struct Lobby {
    pub player_stats: PlayerStats,
    pub matches: Vec<LobbyMatch>,
}

impl Lobby {
    pub fn mock() -> Self {
        Self {
            player_stats: PlayerStats {
                name: "ShroudFan123",
                matches_played: 458,
                win_rate: "12.4%",
                kills_per_match: 3.2,
                avatar_url: "https://i.pravatar.cc/150?img=32",
            },
            matches: mock_matches(),
        }
    }

    pub fn tab(&self, tab: LobbyTab) -> impl Iterator<Item = &LobbyMatch> {
        self.matches.iter().filter(move |m| m.state.tab() == tab)
    }

    pub fn tab_info(&self, tab: LobbyTab) -> Vec<LobbyMatchInfo> {
        self.tab(tab).map(LobbyMatch::info).collect()
    }

    pub fn listing(&self) -> LobbyListing {
        let stats = &self.player_stats;
        LobbyListing {
            player_stats: PlayerStatsInfo {
                name: stats.name.to_string(),
                matches_played: stats.matches_played,
                win_rate: stats.win_rate.to_string(),
                kills_per_match: stats.kills_per_match,
                avatar_url: stats.avatar_url.to_string(),
            },
            default_tab: LobbyTab::DEFAULT.to_string(),
            open: self.tab_info(LobbyTab::Open),
            ongoing: self.tab_info(LobbyTab::Ongoing),
            completed: self.tab_info(LobbyTab::Completed),
        }
    }
}

impl Default for Lobby {
    fn default() -> Self {
        Self::mock()
    }
}

fn mock_matches() -> Vec<LobbyMatch> {
    vec![
        LobbyMatch {
            id: 1,
            name: "Squad Battle Royale",
            players_joined: 2,
            max_players: 4,
            hosted_by: "PUBGmaster",
            region: Region::NorthAmerica,
            platform: Platform::Pc,
            map: MapName::Erangel,
            perspective: Perspective::Tpp,
            state: CardState::Open {
                time_created: "15 minutes ago",
            },
        },
        LobbyMatch {
            id: 2,
            name: "Duo Havoc",
            players_joined: 1,
            max_players: 2,
            hosted_by: "SniperElite",
            region: Region::Europe,
            platform: Platform::Xbox,
            map: MapName::Miramar,
            perspective: Perspective::Fpp,
            state: CardState::Open {
                time_created: "32 minutes ago",
            },
        },
        LobbyMatch {
            id: 3,
            name: "Solo Practice",
            players_joined: 1,
            max_players: 1,
            hosted_by: "ProGamer99",
            region: Region::Asia,
            platform: Platform::Mobile,
            map: MapName::Sanhok,
            perspective: Perspective::Tpp,
            state: CardState::Open {
                time_created: "48 minutes ago",
            },
        },
        LobbyMatch {
            id: 101,
            name: "Tournament Qualifier",
            players_joined: 4,
            max_players: 4,
            hosted_by: "TourneyAdmin",
            region: Region::NorthAmerica,
            platform: Platform::Pc,
            map: MapName::Erangel,
            perspective: Perspective::Tpp,
            state: CardState::Ongoing {
                time_started: "10 minutes ago",
                players_alive: 56,
            },
        },
        LobbyMatch {
            id: 102,
            name: "Pro Scrimmage",
            players_joined: 4,
            max_players: 4,
            hosted_by: "ProLeague",
            region: Region::Europe,
            platform: Platform::Pc,
            map: MapName::Vikendi,
            perspective: Perspective::Fpp,
            state: CardState::Ongoing {
                time_started: "24 minutes ago",
                players_alive: 32,
            },
        },
        LobbyMatch {
            id: 201,
            name: "Weekly Cup Finals",
            players_joined: 4,
            max_players: 4,
            hosted_by: "CupAdmin",
            region: Region::NorthAmerica,
            platform: Platform::Pc,
            map: MapName::Erangel,
            perspective: Perspective::Tpp,
            state: CardState::Completed {
                time_completed: "2 hours ago",
                winner: "TeamDominant",
                kills: 28,
                placement: "#1",
            },
        },
        LobbyMatch {
            id: 202,
            name: "Casual Squad Game",
            players_joined: 3,
            max_players: 4,
            hosted_by: "RelaxedGamer",
            region: Region::SouthAmerica,
            platform: Platform::PlayStation,
            map: MapName::Miramar,
            perspective: Perspective::Tpp,
            state: CardState::Completed {
                time_completed: "4 hours ago",
                winner: "SurvivorsSquad",
                kills: 15,
                placement: "#3",
            },
        },
    ]
}
