//! A synthetic game tree for exercising the search without chess rules.
//!
//! Moves are node ids. Leaves carry a value in pawns, encoded as White or
//! Black pawns so that the material evaluation reads it back as
//! `100 * value`.

use tempo_core::{Color, PieceKind, Rules};

#[derive(Debug, Clone)]
pub(crate) enum Node {
    /// An inner node whose moves lead to the listed children.
    Branch(Vec<usize>),
    /// A non-terminal node with a static value in pawns.
    Leaf(i32),
    /// The side to move is checkmated.
    Mate,
    /// The game is drawn.
    Draw,
    /// Any query on this node panics.
    Explode,
}

#[derive(Debug, Clone)]
pub(crate) struct TreeGame {
    nodes: Vec<Node>,
    path: Vec<usize>,
    black_first: bool,
}

impl TreeGame {
    /// A tree from explicit nodes with White to move at `root`.
    pub(crate) fn new(nodes: Vec<Node>, root: usize) -> Self {
        Self {
            nodes,
            path: vec![root],
            black_first: false,
        }
    }

    /// A complete tree with `branching` children per inner node and the given
    /// leaf values, left to right.
    pub(crate) fn uniform(branching: usize, leaves: &[i32]) -> Self {
        let mut nodes: Vec<Node> = leaves.iter().map(|&v| Node::Leaf(v)).collect();
        let mut level: Vec<usize> = (0..nodes.len()).collect();
        while level.len() > 1 {
            assert_eq!(level.len() % branching, 0, "leaf count must be a power of the branching factor");
            level = level
                .chunks(branching)
                .map(|children| {
                    nodes.push(Node::Branch(children.to_vec()));
                    nodes.len() - 1
                })
                .collect();
        }
        let root = level[0];
        Self::new(nodes, root)
    }

    /// Make Black the side to move at the root.
    pub(crate) fn black_to_move(mut self) -> Self {
        self.black_first = true;
        self
    }

    /// The root's children, in move order.
    pub(crate) fn root_moves(&self) -> Vec<usize> {
        match &self.nodes[self.path[0]] {
            Node::Branch(children) => children.clone(),
            _ => Vec::new(),
        }
    }

    /// Number of moves currently applied.
    pub(crate) fn depth(&self) -> usize {
        self.path.len() - 1
    }

    fn current(&self) -> &Node {
        let node = &self.nodes[*self.path.last().expect("path always holds the root")];
        if matches!(node, Node::Explode) {
            panic!("exploding node reached");
        }
        node
    }
}

impl Rules for TreeGame {
    type Move = usize;
    type Square = ();

    fn is_game_over(&self) -> bool {
        matches!(self.current(), Node::Mate | Node::Draw)
    }

    fn is_checkmate(&self) -> bool {
        matches!(self.current(), Node::Mate)
    }

    fn side_to_move(&self) -> Color {
        let by_parity = if self.depth() % 2 == 0 { Color::White } else { Color::Black };
        if self.black_first { !by_parity } else { by_parity }
    }

    fn legal_moves(&self) -> Vec<usize> {
        match self.current() {
            Node::Branch(children) => children.clone(),
            _ => Vec::new(),
        }
    }

    fn is_capture(&self, _mv: &usize) -> bool {
        false
    }

    fn piece_kind_at(&self, _square: ()) -> Option<PieceKind> {
        None
    }

    fn origin(_mv: &usize) {}

    fn destination(_mv: &usize) {}

    fn promotion_kind(_mv: &usize) -> Option<PieceKind> {
        None
    }

    fn piece_count(&self, side: Color, kind: PieceKind) -> u32 {
        let value = match self.current() {
            Node::Leaf(value) if kind == PieceKind::Pawn => *value,
            _ => return 0,
        };
        match side {
            Color::White => value.max(0) as u32,
            Color::Black => (-value).max(0) as u32,
        }
    }

    fn apply_move(&mut self, mv: &usize) {
        self.path.push(*mv);
    }

    fn undo_last_move(&mut self) {
        assert!(self.path.len() > 1, "undo past the root");
        self.path.pop();
    }
}
