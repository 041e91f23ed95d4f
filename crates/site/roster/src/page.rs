use crate::actions::RosterAction;
use crate::errors::RosterError;
use crate::generate::generate;
use crate::model::Match;
use crate::observe::build_page_view;
use crate::systems;
use central_core::PageModel;
use central_types::GamePageView;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// State owned by one open match detail page.
pub struct GamePage {
    game: Match,
    selected_team: Option<usize>,
}

impl GamePage {
    pub fn new(game: Match) -> Self {
        Self {
            game,
            selected_team: None,
        }
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    pub fn selected_team(&self) -> Option<usize> {
        self.selected_team
    }

    fn select(&mut self, index: usize) -> Result<(), RosterError> {
        systems::check_slot(&self.game, index)?;
        if !self.game.teams[index].is_filled() {
            return Err(RosterError::SlotEmpty { index });
        }
        self.selected_team = Some(index);
        Ok(())
    }
}

impl PageModel for GamePage {
    type Params = String;
    type Action = RosterAction;
    type View = GamePageView;
    type Rejection = RosterError;

    fn load(match_id: Self::Params, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(generate(&match_id, &mut rng))
    }

    fn apply(&mut self, action: Self::Action) -> Result<(), Self::Rejection> {
        match action {
            RosterAction::Start => systems::start(&mut self.game),
            RosterAction::End => systems::end(&mut self.game),
            RosterAction::SelectTeam { index } => self.select(index),
            RosterAction::ClearSelection => {
                self.selected_team = None;
                Ok(())
            }
            RosterAction::SwapTeams { a, b } => {
                systems::swap_teams(&mut self.game, a, b)?;
                self.selected_team = None;
                Ok(())
            }
            RosterAction::MoveTeam { from, to } => {
                systems::move_team(&mut self.game, from, to)?;
                self.selected_team = None;
                Ok(())
            }
            RosterAction::RemoveTeam { index } => {
                systems::remove_team(&mut self.game, index)?;
                self.selected_team = None;
                Ok(())
            }
        }
    }

    fn view(&self) -> Self::View {
        let (swap_candidates, move_targets) = match self.selected_team {
            Some(source) => (
                systems::swap_candidates(&self.game, source),
                systems::move_targets(&self.game),
            ),
            None => (Vec::new(), Vec::new()),
        };
        build_page_view(&self.game, self.selected_team, swap_candidates, move_targets)
    }
}
