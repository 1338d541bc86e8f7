//! Player identity, display colors and the fixed turn rotation.

use crate::action::SetupError;
use derive_getters::Getters;
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Index of a player in the turn rotation.
///
/// Board state records owners by id; the renderer looks the id up in the
/// [`Roster`] to find a name and color.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    From,
)]
#[display("player {_0}")]
pub struct PlayerId(usize);

impl PlayerId {
    /// Id of the player at `index` in the rotation.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of this player in the rotation.
    pub fn index(self) -> usize {
        self.0
    }
}

/// An RGB display color. The engine never inspects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
#[display("#{r:02x}{g:02x}{b:02x}")]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Creates a color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Red.
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// Green.
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    /// Blue.
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    /// Yellow.
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    /// Purple.
    pub const PURPLE: Color = Color::rgb(128, 0, 128);
    /// Orange.
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    /// Pink.
    pub const PINK: Color = Color::rgb(255, 192, 203);
    /// Brown.
    pub const BROWN: Color = Color::rgb(165, 42, 42);
    /// Cyan.
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    /// Magenta.
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    /// Aqua.
    pub const AQUA: Color = Color::rgb(100, 200, 200);
    /// Turquoise.
    pub const TURQUOISE: Color = Color::rgb(64, 224, 208);
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b]
    }
}

/// A participant: a name and the color their claims are drawn in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, derive_new::new)]
pub struct Player {
    /// Display name.
    #[new(into)]
    name: String,
    /// Display color.
    color: Color,
}

/// Players in their fixed turn order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Minimum number of players in a game.
    pub const MIN_PLAYERS: usize = 2;

    /// Creates a rotation from an ordered list of players.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::TooFewPlayers`] for fewer than two players.
    #[instrument(skip(players), fields(count = players.len()))]
    pub fn new(players: Vec<Player>) -> Result<Self, SetupError> {
        if players.len() < Self::MIN_PLAYERS {
            return Err(SetupError::TooFewPlayers(players.len()));
        }
        Ok(Self { players })
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always false; a roster holds at least two players.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// The player who moves first.
    pub fn first(&self) -> PlayerId {
        PlayerId(0)
    }

    /// The player after `id`, wrapping around.
    pub fn next(&self, id: PlayerId) -> PlayerId {
        PlayerId((id.0 + 1) % self.players.len())
    }

    /// Looks up a player.
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.0)
    }

    /// True iff `id` names a player in this rotation.
    pub fn contains(&self, id: PlayerId) -> bool {
        id.0 < self.players.len()
    }

    /// Players paired with their ids, in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players.iter().enumerate().map(|(i, p)| (PlayerId(i), p))
    }
}
