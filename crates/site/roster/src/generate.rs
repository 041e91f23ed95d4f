use crate::model::{Host, Match, Player, Team};
use central_core::{parse_match_number, MapName, MatchStatus, Mode, Platform, Region};
use rand::Rng;

pub const MAX_PLAYERS: u32 = 100;

/// Chance that a generated slot holds a team.
pub const FILL_PROBABILITY: f64 = 0.7;

const AVATAR_POOL: usize = 70;

/// Build a mock match for `match_id`.
///
/// Mode, map, platform, region and status depend only on the id. Which slots
/// are filled and the current player count come from `rng`, so two calls with
/// the same id share categorical fields but not roster contents.
pub fn generate<R: Rng>(match_id: &str, rng: &mut R) -> Match {
    let n = parse_match_number(match_id);
    let mode = Mode::from_number(n);
    let team_size = mode.team_size();

    let teams = (0..mode.slot_count())
        .map(|slot| {
            if rng.gen_bool(FILL_PROBABILITY) {
                Team {
                    id: format!("team-{slot}"),
                    players: (0..team_size)
                        .map(|seat| mock_player(slot, seat, team_size))
                        .collect(),
                }
            } else {
                Team::empty(slot)
            }
        })
        .collect();

    // Independent of the roster above; the two can disagree.
    let current_players = rng.gen_range(0, MAX_PLAYERS);

    tracing::debug!(match_id, mode = %mode, current_players, "generated mock match");

    Match {
        id: match_id.to_string(),
        name: format!("Battle Royale {match_id}"),
        mode,
        map: MapName::from_number(n),
        platform: Platform::from_number(n),
        region: Region::from_number(n),
        max_players: MAX_PLAYERS,
        current_players,
        status: MatchStatus::from_number(n),
        time_created: "30 minutes ago".to_string(),
        host: mock_host(),
        teams,
    }
}

fn mock_player(slot: usize, seat: usize, team_size: usize) -> Player {
    Player {
        id: format!("player-{slot}-{seat}"),
        name: format!("Player{slot}{seat}"),
        twitch_name: Some(format!("twitchPlayer{slot}{seat}")),
        avatar_url: format!(
            "https://i.pravatar.cc/150?img={}",
            (slot * team_size + seat) % AVATAR_POOL
        ),
    }
}

fn mock_host() -> Host {
    Host {
        name: "HostPlayer123".to_string(),
        avatar_url: "https://i.pravatar.cc/150?img=1".to_string(),
        rank: "Diamond".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_six_is_open_solo_on_miramar() {
        let mut rng = StdRng::seed_from_u64(6);
        let m = generate("6", &mut rng);

        assert_eq!(m.mode, Mode::Solo);
        assert_eq!(m.teams.len(), 100);
        assert_eq!(m.map, MapName::Miramar);
        assert_eq!(m.platform, Platform::PlayStation);
        assert_eq!(m.region, Region::Europe);
        assert_eq!(m.status, MatchStatus::Open);
        assert_eq!(m.name, "Battle Royale 6");
        assert_eq!(m.max_players, 100);
        for team in &m.teams {
            assert!(team.players.len() <= 1);
        }
    }

    #[test]
    fn test_slot_counts_per_mode() {
        let mut rng = StdRng::seed_from_u64(1);
        for (id, slots, size) in [("3", 100, 1), ("4", 50, 2), ("5", 25, 4)] {
            let m = generate(id, &mut rng);
            assert_eq!(m.teams.len(), slots);
            for team in &m.teams {
                assert!(team.players.is_empty() || team.players.len() == size);
                assert_eq!(team.is_filled(), !team.players.is_empty());
            }
        }
    }

    #[test]
    fn test_categorical_fields_ignore_rng() {
        for id in ["0", "1", "17", "250", "999"] {
            let a = generate(id, &mut StdRng::seed_from_u64(1));
            let b = generate(id, &mut StdRng::seed_from_u64(2));
            assert_eq!(a.mode, b.mode);
            assert_eq!(a.map, b.map);
            assert_eq!(a.platform, b.platform);
            assert_eq!(a.region, b.region);
            assert_eq!(a.status, b.status);
        }
    }

    #[test]
    fn test_same_seed_same_roster() {
        let a = generate("11", &mut StdRng::seed_from_u64(99));
        let b = generate("11", &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_non_numeric_id_falls_back_to_zero() {
        let m = generate("lobby", &mut StdRng::seed_from_u64(3));
        assert_eq!(m.mode, Mode::Solo);
        assert_eq!(m.map, MapName::Erangel);
        assert_eq!(m.platform, Platform::Pc);
        assert_eq!(m.region, Region::NorthAmerica);
        assert_eq!(m.status, MatchStatus::Open);
        assert_eq!(m.id, "lobby");
    }

    #[test]
    fn test_player_naming() {
        let mut rng = StdRng::seed_from_u64(5);
        let m = generate("5", &mut rng);
        let (slot, team) = m
            .teams
            .iter()
            .enumerate()
            .find(|(_, t)| t.is_filled())
            .expect("some team should be filled");

        assert_eq!(team.id, format!("team-{slot}"));
        let p = &team.players[3];
        assert_eq!(p.id, format!("player-{slot}-3"));
        assert_eq!(p.name, format!("Player{slot}3"));
        assert_eq!(p.twitch_name.as_deref(), Some(format!("twitchPlayer{slot}3").as_str()));
        assert_eq!(
            p.avatar_url,
            format!("https://i.pravatar.cc/150?img={}", (slot * 4 + 3) % 70)
        );
    }

    #[test]
    fn test_current_players_below_max() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..50 {
            let m = generate("2", &mut rng);
            assert!(m.current_players < m.max_players);
        }
    }
}
