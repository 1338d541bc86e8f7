//! Game rules for dots-and-boxes.
//!
//! Pure functions over board state. Rules are kept apart from board storage
//! so the turn controller and the invariant checks can share them.

pub mod completion;
pub mod score;

pub use completion::{check_completions, is_enclosed};
pub use score::{Scores, scores};
