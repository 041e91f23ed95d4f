use central_core::MatchStatus;
use std::fmt;

/// Rejected roster operation. The match is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Status change not allowed from the current status.
    InvalidTransition { from: MatchStatus, to: MatchStatus },
    /// Slot index past the end of the roster.
    SlotOutOfRange { index: usize, slots: usize },
    /// Both indices name the same slot.
    SameSlot { index: usize },
    /// Destination slot already holds a team.
    SlotOccupied { index: usize },
    /// Slot holds no team.
    SlotEmpty { index: usize },
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::InvalidTransition { from, to } => {
                write!(f, "cannot move match from {from} to {to}")
            }
            RosterError::SlotOutOfRange { index, slots } => {
                write!(f, "slot {index} is out of range (roster has {slots} slots)")
            }
            RosterError::SameSlot { index } => write!(f, "slot {index} cannot target itself"),
            RosterError::SlotOccupied { index } => write!(f, "slot {index} is already filled"),
            RosterError::SlotEmpty { index } => write!(f, "slot {index} is empty"),
        }
    }
}

impl std::error::Error for RosterError {}
