use crate::errors::RosterError;
use crate::model::{Match, Team};
use central_core::MatchStatus;

pub fn start(game: &mut Match) -> Result<(), RosterError> {
    transition(game, MatchStatus::Open, MatchStatus::Ongoing)
}

pub fn end(game: &mut Match) -> Result<(), RosterError> {
    transition(game, MatchStatus::Ongoing, MatchStatus::Completed)
}

fn transition(game: &mut Match, from: MatchStatus, to: MatchStatus) -> Result<(), RosterError> {
    if game.status != from {
        return Err(RosterError::InvalidTransition {
            from: game.status,
            to,
        });
    }

    game.status = to;
    tracing::info!(match_id = %game.id, status = %to, "match status changed");
    Ok(())
}

/// Exchange the teams in slots `a` and `b`. Team ids travel with their teams.
pub fn swap_teams(game: &mut Match, a: usize, b: usize) -> Result<(), RosterError> {
    check_slot(game, a)?;
    check_slot(game, b)?;
    if a == b {
        return Err(RosterError::SameSlot { index: a });
    }

    game.teams.swap(a, b);
    tracing::debug!(match_id = %game.id, a, b, "swapped teams");
    Ok(())
}

/// Move the team at `from` into the unfilled slot `to`. `from` is left with a
/// fresh empty team.
pub fn move_team(game: &mut Match, from: usize, to: usize) -> Result<(), RosterError> {
    check_slot(game, from)?;
    check_slot(game, to)?;
    if from == to {
        return Err(RosterError::SameSlot { index: from });
    }
    if game.teams[to].is_filled() {
        return Err(RosterError::SlotOccupied { index: to });
    }

    let moved = std::mem::replace(&mut game.teams[from], Team::empty(from));
    game.teams[to] = moved;
    tracing::debug!(match_id = %game.id, from, to, "moved team");
    Ok(())
}

/// Empty the slot at `index` and drop its players from the running count.
pub fn remove_team(game: &mut Match, index: usize) -> Result<(), RosterError> {
    check_slot(game, index)?;
    if !game.teams[index].is_filled() {
        return Err(RosterError::SlotEmpty { index });
    }

    game.teams[index] = Team::empty(index);
    let team_size = game.team_size() as u32;
    game.current_players = game.current_players.saturating_sub(team_size);
    tracing::debug!(
        match_id = %game.id,
        index,
        current_players = game.current_players,
        "removed team"
    );
    Ok(())
}

/// Filled slots other than `source`; the choices offered by the swap dialog.
pub fn swap_candidates(game: &Match, source: usize) -> Vec<usize> {
    game.teams
        .iter()
        .enumerate()
        .filter(|&(i, team)| i != source && team.is_filled())
        .map(|(i, _)| i)
        .collect()
}

/// Unfilled slots; the choices offered by the move dialog.
pub fn move_targets(game: &Match) -> Vec<usize> {
    game.teams
        .iter()
        .enumerate()
        .filter(|(_, team)| !team.is_filled())
        .map(|(i, _)| i)
        .collect()
}

/// Players actually seated in the roster. Not tied to `current_players`.
pub fn filled_player_count(game: &Match) -> usize {
    game.teams.iter().map(|team| team.players.len()).sum()
}

pub(crate) fn check_slot(game: &Match, index: usize) -> Result<(), RosterError> {
    if index >= game.teams.len() {
        return Err(RosterError::SlotOutOfRange {
            index,
            slots: game.teams.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Host, Player};
    use central_core::{MapName, Mode, Platform, Region};

    fn player(slot: usize, seat: usize) -> Player {
        Player {
            id: format!("player-{slot}-{seat}"),
            name: format!("Player{slot}{seat}"),
            twitch_name: None,
            avatar_url: String::new(),
        }
    }

    /// Duo match with slots 0 and 2 filled, everything else empty.
    fn duo_match() -> Match {
        let mut teams: Vec<Team> = (0..Mode::Duo.slot_count()).map(Team::empty).collect();
        for slot in [0, 2] {
            teams[slot].players = vec![player(slot, 0), player(slot, 1)];
        }
        Match {
            id: "1".to_string(),
            name: "Battle Royale 1".to_string(),
            mode: Mode::Duo,
            map: MapName::Miramar,
            platform: Platform::Xbox,
            region: Region::Europe,
            max_players: 100,
            current_players: 10,
            status: MatchStatus::Open,
            time_created: "30 minutes ago".to_string(),
            host: Host {
                name: "HostPlayer123".to_string(),
                avatar_url: String::new(),
                rank: "Diamond".to_string(),
            },
            teams,
        }
    }

    #[test]
    fn test_start_then_end() {
        let mut m = duo_match();
        start(&mut m).unwrap();
        assert_eq!(m.status, MatchStatus::Ongoing);
        end(&mut m).unwrap();
        assert_eq!(m.status, MatchStatus::Completed);
    }

    #[test]
    fn test_transitions_only_from_matching_status() {
        for status in MatchStatus::ALL {
            let mut m = duo_match();
            m.status = status;
            let result = start(&mut m);
            if status == MatchStatus::Open {
                assert!(result.is_ok());
                assert_eq!(m.status, MatchStatus::Ongoing);
            } else {
                assert!(result.is_err());
                assert_eq!(m.status, status);
            }

            let mut m = duo_match();
            m.status = status;
            let result = end(&mut m);
            if status == MatchStatus::Ongoing {
                assert!(result.is_ok());
                assert_eq!(m.status, MatchStatus::Completed);
            } else {
                assert_eq!(
                    result,
                    Err(RosterError::InvalidTransition {
                        from: status,
                        to: MatchStatus::Completed
                    })
                );
                assert_eq!(m.status, status);
            }
        }
    }

    #[test]
    fn test_swap_is_involution() {
        let mut m = duo_match();
        let before = m.teams.clone();
        swap_teams(&mut m, 0, 2).unwrap();
        assert_eq!(m.teams[0], before[2]);
        assert_eq!(m.teams[2], before[0]);
        swap_teams(&mut m, 0, 2).unwrap();
        assert_eq!(m.teams, before);
    }

    #[test]
    fn test_swap_rejects_same_slot_and_range() {
        let mut m = duo_match();
        let before = m.clone();
        assert_eq!(swap_teams(&mut m, 2, 2), Err(RosterError::SameSlot { index: 2 }));
        assert_eq!(
            swap_teams(&mut m, 0, 50),
            Err(RosterError::SlotOutOfRange { index: 50, slots: 50 })
        );
        assert_eq!(m, before);
    }

    #[test]
    fn test_move_to_unfilled_slot() {
        let mut m = duo_match();
        let players = m.teams[0].players.clone();
        let moved_id = m.teams[0].id.clone();

        move_team(&mut m, 0, 7).unwrap();

        assert!(m.teams[7].is_filled());
        assert_eq!(m.teams[7].players, players);
        assert_eq!(m.teams[7].id, moved_id);
        assert!(!m.teams[0].is_filled());
        assert!(m.teams[0].players.is_empty());
        assert_eq!(m.teams[0].id, "team-0");
        assert_eq!(m.teams.len(), 50);
    }

    #[test]
    fn test_move_onto_filled_slot_is_rejected() {
        let mut m = duo_match();
        let before = m.clone();
        assert_eq!(move_team(&mut m, 0, 2), Err(RosterError::SlotOccupied { index: 2 }));
        assert_eq!(move_team(&mut m, 5, 5), Err(RosterError::SameSlot { index: 5 }));
        assert_eq!(m, before);
    }

    #[test]
    fn test_remove_decrements_by_team_size() {
        let mut m = duo_match();
        remove_team(&mut m, 2).unwrap();
        assert!(!m.teams[2].is_filled());
        assert_eq!(m.teams[2].id, "team-2");
        assert_eq!(m.current_players, 8);
    }

    #[test]
    fn test_remove_saturates_at_zero() {
        let mut m = duo_match();
        m.current_players = 1;
        remove_team(&mut m, 0).unwrap();
        assert_eq!(m.current_players, 0);
    }

    #[test]
    fn test_remove_empty_slot_is_rejected() {
        let mut m = duo_match();
        assert_eq!(remove_team(&mut m, 1), Err(RosterError::SlotEmpty { index: 1 }));
        assert_eq!(m.current_players, 10);
    }

    #[test]
    fn test_dialog_choices() {
        let m = duo_match();
        assert_eq!(swap_candidates(&m, 0), vec![2]);
        assert_eq!(swap_candidates(&m, 9), vec![0, 2]);

        let targets = move_targets(&m);
        assert_eq!(targets.len(), 48);
        assert!(!targets.contains(&0));
        assert!(!targets.contains(&2));

        assert_eq!(filled_player_count(&m), 4);
    }
}
