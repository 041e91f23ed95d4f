use crate::model::{Host, Match, Player, Team};
use central_core::MatchStatus;
use central_types::{GamePageView, HostInfo, MatchDetail, PlayerInfo, TeamInfo};

pub fn build_match_detail(game: &Match) -> MatchDetail {
    MatchDetail {
        id: game.id.clone(),
        name: game.name.clone(),
        mode: game.mode.to_string(),
        map: game.map.to_string(),
        platform: game.platform.to_string(),
        region: game.region.to_string(),
        max_players: game.max_players,
        current_players: game.current_players,
        status: game.status.as_str().to_string(),
        status_label: game.status.label().to_string(),
        time_created: game.time_created.clone(),
        team_size: game.team_size(),
        host: host_info(&game.host),
        teams: game
            .teams
            .iter()
            .enumerate()
            .map(|(i, team)| team_info(i, team))
            .collect(),
    }
}

pub fn build_page_view(
    game: &Match,
    selected_team: Option<usize>,
    swap_candidates: Vec<usize>,
    move_targets: Vec<usize>,
) -> GamePageView {
    GamePageView {
        detail: build_match_detail(game),
        selected_team,
        swap_candidates,
        move_targets,
        can_start: game.status == MatchStatus::Open,
        can_end: game.status == MatchStatus::Ongoing,
    }
}

fn team_info(index: usize, team: &Team) -> TeamInfo {
    TeamInfo {
        id: team.id.clone(),
        team_number: index + 1,
        is_filled: team.is_filled(),
        players: team.players.iter().map(player_info).collect(),
    }
}

fn player_info(player: &Player) -> PlayerInfo {
    PlayerInfo {
        id: player.id.clone(),
        name: player.name.clone(),
        twitch_name: player.twitch_name.clone(),
        stream_url: player
            .twitch_name
            .as_ref()
            .filter(|handle| !handle.is_empty())
            .map(|handle| format!("https://twitch.tv/{handle}")),
        avatar_url: player.avatar_url.clone(),
        initials: initials(&player.name),
    }
}

fn host_info(host: &Host) -> HostInfo {
    HostInfo {
        name: host.name.clone(),
        avatar_url: host.avatar_url.clone(),
        rank: host.rank.clone(),
        initials: initials(&host.name),
    }
}

/// First two characters, upper-cased.
fn initials(name: &str) -> String {
    name.chars().take(2).collect::<String>().to_uppercase()
}
