//! Standard chess on top of `shakmaty`, with an undo stack.

use std::fmt;
use std::str::FromStr;

use shakmaty::fen::Fen;
use shakmaty::zobrist::{Zobrist64, ZobristHash};
use shakmaty::{CastlingMode, Chess, EnPassantMode, File, Move, Piece, Position, Role, Square};
use tracing::debug;

use tempo_core::{Color, PieceKind, Rules};

use crate::error::BoardError;

/// Halfmove clock value at which the seventy-five-move rule ends the game.
const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;

/// Occurrences of one position that end the game by repetition.
const FIVEFOLD: usize = 5;

/// Why a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The side to move is mated.
    Checkmate,
    /// The side to move has no legal move and is not in check.
    Stalemate,
    /// Neither side can possibly mate.
    InsufficientMaterial,
    /// 150 plies without a capture or pawn move.
    SeventyFiveMoves,
    /// The same position occurred five times.
    FivefoldRepetition,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Termination::Checkmate => "checkmate",
            Termination::Stalemate => "stalemate",
            Termination::InsufficientMaterial => "insufficient material",
            Termination::SeventyFiveMoves => "seventy-five-move rule",
            Termination::FivefoldRepetition => "fivefold repetition",
        };
        f.write_str(text)
    }
}

/// A chess game: the current position plus everything needed to take moves back.
///
/// `undo[i]` is the position before the `i`-th move made on this game and
/// `keys` holds the Zobrist key of every position reached, the current one
/// last. Repetition is judged against `keys`, so positions before the one the
/// game was created from are unknown to it.
#[derive(Clone, Debug)]
pub struct Game {
    position: Chess,
    undo: Vec<Chess>,
    keys: Vec<Zobrist64>,
}

impl Game {
    /// A game from the standard starting position.
    pub fn new() -> Self {
        Self::from_position(Chess::default())
    }

    /// A game from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        let parsed: Fen = fen.trim().parse().map_err(|e: shakmaty::fen::ParseFenError| {
            BoardError::InvalidFen {
                fen: fen.to_string(),
                reason: e.to_string(),
            }
        })?;
        let position: Chess =
            parsed
                .into_position(CastlingMode::Standard)
                .map_err(|e| BoardError::IllegalPosition {
                    fen: fen.to_string(),
                    reason: e.to_string(),
                })?;
        debug!(fen, "loaded position");
        Ok(Self::from_position(position))
    }

    fn from_position(position: Chess) -> Self {
        let key = position.zobrist_hash::<Zobrist64>(EnPassantMode::Legal);
        Self {
            position,
            undo: Vec::new(),
            keys: vec![key],
        }
    }

    /// The current position as FEN.
    pub fn fen(&self) -> String {
        Fen(self.position.clone().into_setup(EnPassantMode::Legal)).to_string()
    }

    /// Number of moves that can still be taken back.
    pub fn ply(&self) -> usize {
        self.undo.len()
    }

    fn current_key(&self) -> Zobrist64 {
        self.position.zobrist_hash::<Zobrist64>(EnPassantMode::Legal)
    }

    /// `true` when the current position has occurred five times.
    pub fn is_fivefold_repetition(&self) -> bool {
        let Some(current) = self.keys.last() else {
            return false;
        };
        self.keys.iter().filter(|&key| key == current).count() >= FIVEFOLD
    }

    /// `true` when 150 plies passed without a capture or pawn move.
    pub fn is_seventy_five_moves(&self) -> bool {
        self.position.halfmoves() >= SEVENTY_FIVE_MOVE_PLIES
    }

    /// Why the game is over, or `None` while it is still running.
    ///
    /// Checkmate wins over every draw rule.
    pub fn termination(&self) -> Option<Termination> {
        if self.position.is_checkmate() {
            Some(Termination::Checkmate)
        } else if self.position.is_stalemate() {
            Some(Termination::Stalemate)
        } else if self.position.is_insufficient_material() {
            Some(Termination::InsufficientMaterial)
        } else if self.is_seventy_five_moves() {
            Some(Termination::SeventyFiveMoves)
        } else if self.is_fivefold_repetition() {
            Some(Termination::FivefoldRepetition)
        } else {
            None
        }
    }

    /// Find the legal move written as `uci_move` (e.g. `e2e4`, `e7e8q`, `e1g1`).
    pub fn parse_uci(&self, uci_move: &str) -> Result<Move, BoardError> {
        let wanted = uci_move.trim().to_ascii_lowercase();
        self.position
            .legal_moves()
            .iter()
            .find(|mv| uci(mv) == wanted)
            .cloned()
            .ok_or_else(|| BoardError::InvalidMove {
                uci_move: uci_move.to_string(),
            })
    }

    /// Parse and play a UCI move.
    pub fn play_uci(&mut self, uci_move: &str) -> Result<(), BoardError> {
        let mv = self.parse_uci(uci_move)?;
        self.apply_move(&mv);
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Game {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_fen(s)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fen())
    }
}

impl Rules for Game {
    type Move = Move;
    type Square = Square;

    fn is_game_over(&self) -> bool {
        self.position.is_game_over() || self.is_seventy_five_moves() || self.is_fivefold_repetition()
    }

    fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    fn side_to_move(&self) -> Color {
        color_of(self.position.turn())
    }

    fn legal_moves(&self) -> Vec<Move> {
        self.position.legal_moves().to_vec()
    }

    fn is_capture(&self, mv: &Move) -> bool {
        mv.is_capture()
    }

    fn piece_kind_at(&self, square: Square) -> Option<PieceKind> {
        self.position.board().role_at(square).map(kind_of)
    }

    fn origin(mv: &Move) -> Square {
        mv.from().unwrap_or_else(|| mv.to())
    }

    fn destination(mv: &Move) -> Square {
        mv.to()
    }

    fn promotion_kind(mv: &Move) -> Option<PieceKind> {
        mv.promotion().map(kind_of)
    }

    fn piece_count(&self, side: Color, kind: PieceKind) -> u32 {
        let piece = Piece {
            color: shakmaty_color(side),
            role: role_of(kind),
        };
        self.position.board().by_piece(piece).count() as u32
    }

    fn apply_move(&mut self, mv: &Move) {
        let previous = self.position.clone();
        self.position.play_unchecked(mv);
        self.undo.push(previous);
        let key = self.current_key();
        self.keys.push(key);
    }

    /// # Panics
    ///
    /// Panics when no move has been made on this game.
    fn undo_last_move(&mut self) {
        let previous = self
            .undo
            .pop()
            .expect("undo_last_move called with no move to take back");
        self.position = previous;
        self.keys.pop();
    }
}

/// Format a move in UCI long algebraic notation (`e2e4`, `e7e8q`, `e1g1`).
pub fn uci(mv: &Move) -> String {
    match *mv {
        Move::Castle { king, rook } => {
            let file = if rook > king { File::G } else { File::C };
            format!("{king}{}", Square::from_coords(file, king.rank()))
        }
        Move::Put { role, to } => {
            format!("{}@{to}", kind_of(role).letter().to_ascii_uppercase())
        }
        _ => {
            let mut text = format!("{}{}", Game::origin(mv), mv.to());
            if let Some(kind) = Game::promotion_kind(mv) {
                text.push(kind.letter());
            }
            text
        }
    }
}

fn color_of(color: shakmaty::Color) -> Color {
    match color {
        shakmaty::Color::White => Color::White,
        shakmaty::Color::Black => Color::Black,
    }
}

fn shakmaty_color(color: Color) -> shakmaty::Color {
    match color {
        Color::White => shakmaty::Color::White,
        Color::Black => shakmaty::Color::Black,
    }
}

fn kind_of(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}

fn role_of(kind: PieceKind) -> Role {
    match kind {
        PieceKind::Pawn => Role::Pawn,
        PieceKind::Knight => Role::Knight,
        PieceKind::Bishop => Role::Bishop,
        PieceKind::Rook => Role::Rook,
        PieceKind::Queen => Role::Queen,
        PieceKind::King => Role::King,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::STARTING_FEN;

    fn find(game: &Game, uci_move: &str) -> Move {
        game.parse_uci(uci_move).unwrap()
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let game = Game::new();
        assert_eq!(game.legal_moves().len(), 20);
        assert_eq!(game.side_to_move(), Color::White);
        assert!(!game.is_game_over());
        assert_eq!(game.fen(), STARTING_FEN);
    }

    #[test]
    fn starting_piece_counts() {
        let game = Game::new();
        for side in Color::ALL {
            assert_eq!(game.piece_count(side, PieceKind::Pawn), 8);
            assert_eq!(game.piece_count(side, PieceKind::Knight), 2);
            assert_eq!(game.piece_count(side, PieceKind::Bishop), 2);
            assert_eq!(game.piece_count(side, PieceKind::Rook), 2);
            assert_eq!(game.piece_count(side, PieceKind::Queen), 1);
            assert_eq!(game.piece_count(side, PieceKind::King), 1);
        }
    }

    #[test]
    fn fen_roundtrip() {
        let fen = "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4";
        let game: Game = fen.parse().unwrap();
        assert_eq!(game.fen(), fen);
    }

    #[test]
    fn apply_then_undo_restores_everything() {
        let mut game = Game::new();
        let before_fen = game.fen();
        let before_key = game.current_key().0;

        let mv = find(&game, "e2e4");
        game.apply_move(&mv);
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.ply(), 1);
        assert_ne!(game.current_key().0, before_key);

        game.undo_last_move();
        assert_eq!(game.fen(), before_fen);
        assert_eq!(game.current_key().0, before_key);
        assert_eq!(game.ply(), 0);
    }

    #[test]
    #[should_panic(expected = "no move to take back")]
    fn undo_without_move_panics() {
        let mut game = Game::new();
        game.undo_last_move();
    }

    #[test]
    fn capture_and_victim() {
        // White queen on d4 can take the pawn on e5.
        let game: Game = "4k3/8/8/4p3/3Q4/8/8/4K3 w - - 0 1".parse().unwrap();
        let mv = find(&game, "d4e5");
        assert!(game.is_capture(&mv));
        assert_eq!(game.piece_kind_at(Game::destination(&mv)), Some(PieceKind::Pawn));
        assert_eq!(game.piece_kind_at(Game::origin(&mv)), Some(PieceKind::Queen));
    }

    #[test]
    fn en_passant_is_capture_onto_empty_square() {
        let game: Game = "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3"
            .parse()
            .unwrap();
        let mv = find(&game, "e5d6");
        assert!(game.is_capture(&mv));
        assert_eq!(game.piece_kind_at(Game::destination(&mv)), None);
    }

    #[test]
    fn promotion_kinds_and_notation() {
        let game: Game = "7k/4P3/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let queen = find(&game, "e7e8q");
        let knight = find(&game, "e7e8n");
        assert_eq!(Game::promotion_kind(&queen), Some(PieceKind::Queen));
        assert_eq!(Game::promotion_kind(&knight), Some(PieceKind::Knight));
        assert_eq!(uci(&queen), "e7e8q");
    }

    #[test]
    fn castling_uses_king_destination() {
        let game: Game = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1".parse().unwrap();
        let notations: Vec<String> = game.legal_moves().iter().map(uci).collect();
        assert!(notations.contains(&"e1g1".to_string()));
        assert!(notations.contains(&"e1c1".to_string()));
        let short = find(&game, "e1g1");
        assert!(!game.is_capture(&short));
    }

    #[test]
    fn checkmate_detected() {
        let game: Game = "7k/6Q1/5K2/8/8/8/8/8 b - - 0 1".parse().unwrap();
        assert!(game.is_game_over());
        assert!(game.is_checkmate());
        assert_eq!(game.termination(), Some(Termination::Checkmate));
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn stalemate_is_over_but_not_mate() {
        let game: Game = "k7/2K5/1Q6/8/8/8/8/8 b - - 0 1".parse().unwrap();
        assert!(game.is_game_over());
        assert!(!game.is_checkmate());
        assert_eq!(game.termination(), Some(Termination::Stalemate));
    }

    #[test]
    fn bare_kings_are_insufficient_material() {
        let game: Game = "8/8/8/4k3/8/8/8/4K3 w - - 0 1".parse().unwrap();
        assert!(game.is_game_over());
        assert!(!game.is_checkmate());
        assert_eq!(game.termination(), Some(Termination::InsufficientMaterial));
    }

    #[test]
    fn seventy_five_move_rule() {
        let mut game: Game = "8/8/8/4k3/8/8/8/R3K3 w - - 149 90".parse().unwrap();
        assert!(!game.is_game_over());
        game.play_uci("a1a2").unwrap();
        assert!(game.is_game_over());
        assert_eq!(game.termination(), Some(Termination::SeventyFiveMoves));
    }

    #[test]
    fn fivefold_repetition() {
        let mut game = Game::new();
        for _ in 0..3 {
            for mv in ["g1f3", "g8f6", "f3g1", "f6g8"] {
                game.play_uci(mv).unwrap();
            }
        }
        // Four occurrences of the starting position so far.
        assert!(!game.is_game_over());
        for mv in ["g1f3", "g8f6", "f3g1", "f6g8"] {
            game.play_uci(mv).unwrap();
        }
        assert!(game.is_fivefold_repetition());
        assert!(game.is_game_over());
        assert!(!game.is_checkmate());

        game.undo_last_move();
        assert!(!game.is_fivefold_repetition());
    }

    #[test]
    fn parse_uci_rejects_illegal_moves() {
        let game = Game::new();
        assert_eq!(
            game.parse_uci("e2e5"),
            Err(BoardError::InvalidMove {
                uci_move: "e2e5".to_string()
            })
        );
        assert!(game.parse_uci("zz").is_err());
    }

    #[test]
    fn malformed_fen_is_rejected() {
        let err = Game::from_fen("not a fen").unwrap_err();
        assert!(matches!(err, BoardError::InvalidFen { .. }));
    }

    #[test]
    fn position_without_kings_is_illegal() {
        let err = Game::from_fen("8/8/8/8/8/8/8/8 w - - 0 1").unwrap_err();
        assert!(matches!(err, BoardError::IllegalPosition { .. }));
    }
}
