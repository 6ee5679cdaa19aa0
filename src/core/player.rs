//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for one of the two seats, `0` or `1`.
//! Seat 0 moves first unless the board configuration says otherwise.
//!
//! ## PlayerMap
//!
//! Fixed two-entry storage indexed by `PlayerId`, used for per-player
//! tallies such as disc counts.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut, Not};

/// Number of seats at a Reversi table.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier: seat `0` or seat `1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The first seat.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The second seat.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a player ID from a seat number.
    ///
    /// Returns `None` for anything other than `0` or `1`.
    #[must_use]
    pub const fn new(seat: u8) -> Option<Self> {
        match seat {
            0 | 1 => Some(Self(seat)),
            _ => None,
        }
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the seat as the digit used in move notation and board masks.
    #[must_use]
    pub const fn digit(self) -> char {
        match self.0 {
            0 => '0',
            _ => '1',
        }
    }

    /// Get the other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// Iterate over both seats in order.
    ///
    /// ```
    /// use reversi_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::FIRST, PlayerId::SECOND]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::FIRST, Self::SECOND].into_iter()
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = String;

    fn try_from(seat: u8) -> Result<Self, Self::Error> {
        Self::new(seat).ok_or_else(|| format!("seat {} is not 0 or 1", seat))
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> u8 {
        player.0
    }
}

impl Not for PlayerId {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        self.opponent()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use reversi_engine::core::{PlayerId, PlayerMap};
///
/// let mut discs: PlayerMap<usize> = PlayerMap::with_value(2);
/// discs[PlayerId::SECOND] += 1;
///
/// assert_eq!(discs[PlayerId::FIRST], 2);
/// assert_eq!(discs[PlayerId::SECOND], 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
