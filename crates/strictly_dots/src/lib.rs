//! Strictly Dots - rules engine for dots-and-boxes.
//!
//! Players take turns drawing edges between adjacent dots on a square grid.
//! Drawing the fourth edge of a cell claims it and earns another turn.
//!
//! # Architecture
//!
//! - **Topology**: dots, edges and cells of an `N×N` grid
//! - **Board**: drawn edges and cell owners
//! - **Rules**: completion detection and scoring
//! - **Game**: the turn controller, guarded by contracts and invariants
//! - **Config**: TOML game setup
//!
//! # Example
//!
//! ```
//! use strictly_dots::{Color, Dot, GameState, Player};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = GameState::new_game(
//!     2,
//!     vec![Player::new("Red", Color::RED), Player::new("Blue", Color::BLUE)],
//! )?;
//!
//! let outcome = game.attempt_move(Dot::new(0, 0), Dot::new(0, 1))?;
//! assert!(outcome.completed_cells().is_empty());
//!
//! let board = game.current_board();
//! assert_eq!(board.drawn_edges().len(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod config;
mod contracts;
mod game;
mod invariants;
mod player;
mod rules;
mod snapshot;
mod topology;

// Crate-level exports - Geometry
pub use topology::{Cell, Dot, Edge, Grid, GridError, Orientation, Side};

// Crate-level exports - Players
pub use player::{Color, Player, PlayerId, Roster};

// Crate-level exports - Board and rules
pub use board::{Board, BoardError};
pub use rules::{Scores, check_completions, is_enclosed, scores};

// Crate-level exports - Turn controller
pub use action::{Move, MoveError, MoveOutcome, SetupError};
pub use game::GameState;
pub use snapshot::BoardSnapshot;

// Crate-level exports - Contracts and invariants
pub use contracts::{
    ClaimsPreserved, Contract, EdgeUndrawn, LegalClaim, MoveContract, PlayersTurn, WithinGrid,
};
pub use invariants::{
    ClaimedIffEnclosedInvariant, DotsInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, ScoreBoundedInvariant, TurnRotationInvariant,
};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};
