//! Material balance.
//!
//! The whole static heuristic: piece counts weighted by a fixed table, from
//! White's perspective.

use tempo_core::{Color, PieceKind, Rules};

use crate::eval::score::Score;

/// Piece values in centipawns, indexed by [`PieceKind::index()`].
///
/// | Piece  | Value |
/// |--------|-------|
/// | Pawn   |   100 |
/// | Knight |   300 |
/// | Bishop |   300 |
/// | Rook   |   500 |
/// | Queen  |   900 |
/// | King   | 20000 |
pub const PIECE_VALUES: [Score; PieceKind::COUNT] = [100, 300, 300, 500, 900, 20_000];

/// Value of a single piece of the given kind.
#[inline]
pub const fn piece_value(kind: PieceKind) -> Score {
    PIECE_VALUES[kind.index()]
}

/// Sum of `(white_count - black_count) * value` over every piece kind.
pub fn material<R: Rules + ?Sized>(position: &R) -> Score {
    PieceKind::ALL
        .into_iter()
        .map(|kind| {
            let white = position.piece_count(Color::White, kind) as Score;
            let black = position.piece_count(Color::Black, kind) as Score;
            (white - black) * piece_value(kind)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use tempo_board::Game;

    use super::*;

    #[test]
    fn starting_position_is_balanced() {
        assert_eq!(material(&Game::new()), 0);
    }

    #[test]
    fn missing_black_queen() {
        let game: Game = "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
            .parse()
            .unwrap();
        assert_eq!(material(&game), 900);
    }

    #[test]
    fn black_ahead_is_negative() {
        // White is missing the a1 rook and the b1 knight.
        let game: Game = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/2BQKBNR w Kkq - 0 1"
            .parse()
            .unwrap();
        assert_eq!(material(&game), -800);
    }

    #[test]
    fn kings_cancel_out() {
        let game: Game = "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(material(&game), 100);
    }

    #[test]
    fn knight_and_bishop_are_equal() {
        assert_eq!(piece_value(PieceKind::Knight), piece_value(PieceKind::Bishop));
        assert_eq!(piece_value(PieceKind::King), 20_000);
    }
}
