//! Event logging for match history.
//!
//! Every committed state change in a match is recorded as an [`Event`]. The
//! log answers questions like "when was player 3 ejected?" without the
//! caller replaying the match.
//!
//! # Event Types
//!
//! - **Placed**: player put on the board during setup
//! - **Moved**: on-board player walked one step
//! - **MinorViolation**: player ended its move too close to another
//! - **Ejected**: second minor violation escalated; player removed
//! - **ReEntered**: off-board player came back
//! - **ReEntryRefused**: player asked to come back but was not allowed
//!
//! # Example
//!
//! ```rust
//! use last_player_core_rs::models::{Event, EventLog};
//!
//! let mut log = EventLog::new();
//! log.log(Event::Ejected {
//!     turn: 12,
//!     player_id: "4".to_string(),
//!     major_violations: 1,
//! });
//!
//! assert_eq!(log.events_of_type("Ejected").len(), 1);
//! assert_eq!(log.events_at_turn(12)[0].event_type(), "Ejected");
//! ```

use crate::models::board::Position;

/// Why an off-board player's re-entry candidate was thrown away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefusalReason {
    /// Player has too many major violations to ever return
    Eliminated,
    /// Player was ejected too recently
    CoolingDown { turns_remaining: usize },
}

/// Match event capturing a state change.
///
/// Events are logged in roster order within a turn.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Placed {
        turn: usize,
        player_id: String,
        position: Position,
    },

    Moved {
        turn: usize,
        player_id: String,
        from: Position,
        to: Position,
    },

    /// `nearby` includes the moving player itself
    MinorViolation {
        turn: usize,
        player_id: String,
        nearby: usize,
    },

    Ejected {
        turn: usize,
        player_id: String,
        major_violations: u32,
    },

    ReEntered {
        turn: usize,
        player_id: String,
        position: Position,
    },

    ReEntryRefused {
        turn: usize,
        player_id: String,
        reason: RefusalReason,
    },
}

impl Event {
    /// Turn during which this event occurred
    pub fn turn(&self) -> usize {
        match self {
            Event::Placed { turn, .. } => *turn,
            Event::Moved { turn, .. } => *turn,
            Event::MinorViolation { turn, .. } => *turn,
            Event::Ejected { turn, .. } => *turn,
            Event::ReEntered { turn, .. } => *turn,
            Event::ReEntryRefused { turn, .. } => *turn,
        }
    }

    /// Short name of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::Placed { .. } => "Placed",
            Event::Moved { .. } => "Moved",
            Event::MinorViolation { .. } => "MinorViolation",
            Event::Ejected { .. } => "Ejected",
            Event::ReEntered { .. } => "ReEntered",
            Event::ReEntryRefused { .. } => "ReEntryRefused",
        }
    }

    /// Player the event relates to
    pub fn player_id(&self) -> &str {
        match self {
            Event::Placed { player_id, .. } => player_id,
            Event::Moved { player_id, .. } => player_id,
            Event::MinorViolation { player_id, .. } => player_id,
            Event::Ejected { player_id, .. } => player_id,
            Event::ReEntered { player_id, .. } => player_id,
            Event::ReEntryRefused { player_id, .. } => player_id,
        }
    }
}

/// Append-only event store with simple queries
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn events_at_turn(&self, turn: usize) -> Vec<&Event> {
        self.events.iter().filter(|e| e.turn() == turn).collect()
    }

    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Drop every event past the first `len`
    pub fn truncate(&mut self, len: usize) {
        self.events.truncate(len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moved(turn: usize, player_id: &str) -> Event {
        Event::Moved {
            turn,
            player_id: player_id.to_string(),
            from: Position::new(0.0, 0.0),
            to: Position::new(0.0, 1.0),
        }
    }

    #[test]
    fn test_event_accessors() {
        let event = Event::ReEntryRefused {
            turn: 9,
            player_id: "2".to_string(),
            reason: RefusalReason::CoolingDown { turns_remaining: 3 },
        };

        assert_eq!(event.turn(), 9);
        assert_eq!(event.event_type(), "ReEntryRefused");
        assert_eq!(event.player_id(), "2");
    }

    #[test]
    fn test_event_log_queries() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.log(moved(1, "0"));
        log.log(moved(1, "1"));
        log.log(moved(2, "0"));
        log.log(Event::MinorViolation {
            turn: 2,
            player_id: "0".to_string(),
            nearby: 2,
        });

        assert_eq!(log.len(), 4);
        assert_eq!(log.events_at_turn(1).len(), 2);
        assert_eq!(log.events_of_type("Moved").len(), 3);

        log.truncate(2);
        assert_eq!(log.len(), 2);
        assert!(log.events_at_turn(2).is_empty());
    }
}
