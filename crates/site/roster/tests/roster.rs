use central_core::{MapName, MatchStatus, Mode};
use central_roster::systems::{end, move_team, move_targets, remove_team, start, swap_candidates, swap_teams};
use central_roster::{generate, Match};
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn assert_fill_invariant(m: &Match) {
    for team in &m.teams {
        assert_eq!(team.is_filled(), !team.players.is_empty());
        assert!(team.players.is_empty() || team.players.len() == m.mode.team_size());
    }
}

#[test]
fn test_end_to_end_generate_six() {
    let mut rng = StdRng::seed_from_u64(2024);
    let m = generate("6", &mut rng);

    assert_eq!(m.mode, Mode::Solo);
    assert_eq!(m.teams.len(), 100);
    assert_eq!(m.map, MapName::ALL[1]);
    assert_eq!(m.status, MatchStatus::Open);
    assert_fill_invariant(&m);
}

#[test]
fn test_scripted_source_gives_exact_roster() {
    // Always-zero draws: every slot filled, zero current players.
    let m = generate("7", &mut StepRng::new(0, 0));

    assert_eq!(m.mode, Mode::Duo);
    assert_eq!(m.teams.len(), 50);
    assert!(m.teams.iter().all(|t| t.players.len() == 2));
    assert_eq!(m.current_players, 0);
    assert_eq!(m.teams[49].players[1].name, "Player491");
    assert_eq!(m.teams[49].players[1].avatar_url, "https://i.pravatar.cc/150?img=29");
}

#[test]
fn test_invariant_holds_across_edit_sequence() {
    let mut rng = StdRng::seed_from_u64(77);
    for id in 0..12u32 {
        let mut m = generate(&id.to_string(), &mut rng);
        assert_fill_invariant(&m);

        let filled: Vec<usize> = (0..m.teams.len()).filter(|&i| m.teams[i].is_filled()).collect();
        if filled.len() >= 2 {
            swap_teams(&mut m, filled[0], filled[1]).unwrap();
            assert_fill_invariant(&m);
        }
        if let (Some(&from), Some(&to)) = (filled.first(), move_targets(&m).first()) {
            move_team(&mut m, from, to).unwrap();
            assert_fill_invariant(&m);
        }
        if let Some(&index) = filled.last() {
            if m.teams[index].is_filled() {
                let before = m.current_players;
                remove_team(&mut m, index).unwrap();
                assert_eq!(
                    m.current_players,
                    before.saturating_sub(m.mode.team_size() as u32)
                );
                assert_fill_invariant(&m);
            }
        }
    }
}

#[test]
fn test_swap_twice_restores_roster() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut m = generate("5", &mut rng);
    let original = m.teams.clone();

    swap_teams(&mut m, 0, 24).unwrap();
    swap_teams(&mut m, 0, 24).unwrap();
    assert_eq!(m.teams, original);
}

#[test]
fn test_move_then_dialog_choices_update() {
    let mut m = generate("1", &mut StepRng::new(0, 0));
    // Fully seated roster: nowhere to move until a slot is freed.
    assert!(move_targets(&m).is_empty());
    assert_eq!(swap_candidates(&m, 0).len(), 49);

    let before = m.current_players;
    remove_team(&mut m, 10).unwrap();
    assert_eq!(m.current_players, before.saturating_sub(2));
    assert_eq!(move_targets(&m), vec![10]);

    let players = m.teams[3].players.clone();
    move_team(&mut m, 3, 10).unwrap();
    assert_eq!(m.teams[10].players, players);
    assert!(m.teams[10].is_filled());
    assert!(!m.teams[3].is_filled());
    assert_eq!(move_targets(&m), vec![3]);
}

#[test]
fn test_status_machine_from_every_status() {
    let mut rng = StdRng::seed_from_u64(9);
    for id in ["0", "1", "2"] {
        let mut m = generate(id, &mut rng);
        let initial = m.status;

        let started = start(&mut m).is_ok();
        assert_eq!(started, initial == MatchStatus::Open);

        let after_start = m.status;
        let ended = end(&mut m).is_ok();
        assert_eq!(ended, after_start == MatchStatus::Ongoing);
    }
}

#[test]
fn test_open_start_end_start() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut m = generate("3", &mut rng);
    assert_eq!(m.status, MatchStatus::Open);

    start(&mut m).unwrap();
    end(&mut m).unwrap();
    assert_eq!(m.status, MatchStatus::Completed);

    assert!(start(&mut m).is_err());
    assert_eq!(m.status, MatchStatus::Completed);
}
