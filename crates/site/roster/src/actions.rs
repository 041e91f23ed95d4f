use central_types::RosterActionRequest;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RosterAction {
    Start,
    End,
    SwapTeams { a: usize, b: usize },
    MoveTeam { from: usize, to: usize },
    RemoveTeam { index: usize },
    /// Open the team dialog on a filled slot.
    SelectTeam { index: usize },
    ClearSelection,
}

impl From<RosterActionRequest> for RosterAction {
    fn from(request: RosterActionRequest) -> Self {
        match request {
            RosterActionRequest::Start => RosterAction::Start,
            RosterActionRequest::End => RosterAction::End,
            RosterActionRequest::SwapTeams { a, b } => RosterAction::SwapTeams { a, b },
            RosterActionRequest::MoveTeam { from, to } => RosterAction::MoveTeam { from, to },
            RosterActionRequest::RemoveTeam { index } => RosterAction::RemoveTeam { index },
            RosterActionRequest::SelectTeam { index } => RosterAction::SelectTeam { index },
            RosterActionRequest::ClearSelection => RosterAction::ClearSelection,
        }
    }
}
