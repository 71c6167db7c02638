//! The two sides of the board.

use std::fmt;
use std::ops::Not;

/// A side: White or Black.
///
/// Scores throughout tempo are expressed from White's point of view, so
/// White is always the maximizing side of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Both colors, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// `true` when this side maximizes a White-relative score.
    #[inline]
    pub const fn is_maximizing(self) -> bool {
        matches!(self, Color::White)
    }

    /// `+1` for White, `-1` for Black.
    ///
    /// Multiplying a White-relative score by the sign of the side to move
    /// gives the side-to-move-relative score.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn flip_roundtrip() {
        assert_eq!(Color::White.flip(), Color::Black);
        assert_eq!(Color::Black.flip().flip(), Color::Black);
        assert_eq!(!Color::White, Color::Black);
    }

    #[test]
    fn white_maximizes() {
        assert!(Color::White.is_maximizing());
        assert!(!Color::Black.is_maximizing());
    }

    #[test]
    fn sign_matches_polarity() {
        assert_eq!(Color::White.sign(), 1);
        assert_eq!(Color::Black.sign(), -1);
        assert_eq!(250 * Color::Black.sign(), -250);
    }

    #[test]
    fn display() {
        assert_eq!(Color::White.to_string(), "white");
        assert_eq!(Color::Black.to_string(), "black");
    }
}
