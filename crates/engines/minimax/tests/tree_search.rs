//! Alpha-beta against hand-built and random game trees.
//!
//! Every interior node belongs to the side to move; White moves at even
//! depths. Leaf values are absolute, so with White at the root they are
//! already the root side's scores.

use chess_core::{Color, GameState, PieceKind, SearchError};
use minimax_engine::{Evaluator, Score, SearchConfig, Searcher, INFINITY};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Default)]
struct Tree {
    children: Vec<Vec<usize>>,
    values: Vec<Score>,
}

impl Tree {
    fn with_root() -> Self {
        let mut tree = Tree::default();
        tree.add_node(0);
        tree
    }

    fn add_node(&mut self, value: Score) -> usize {
        self.children.push(Vec::new());
        self.values.push(value);
        self.children.len() - 1
    }

    fn add_child(&mut self, parent: usize, value: Score) -> usize {
        let id = self.add_node(value);
        self.children[parent].push(id);
        id
    }

    /// Root with one min node per group, each holding the given leaves.
    fn two_ply(groups: &[&[Score]]) -> Self {
        let mut tree = Tree::with_root();
        for leaves in groups {
            let node = tree.add_child(0, 0);
            for &value in *leaves {
                tree.add_child(node, value);
            }
        }
        tree
    }

    fn random(rng: &mut StdRng, depth: u8) -> Self {
        let mut tree = Tree::with_root();
        tree.grow(rng, 0, depth);
        tree
    }

    fn grow(&mut self, rng: &mut StdRng, node: usize, depth: u8) {
        if depth == 0 {
            return;
        }
        // Interior dead ends only below the root
        let branching = if node == 0 {
            rng.gen_range(1..=4)
        } else {
            rng.gen_range(0..=4)
        };
        for _ in 0..branching {
            let child = self.add_child(node, rng.gen_range(-100..=100));
            self.grow(rng, child, depth - 1);
        }
    }
}

struct TreeGame<'t> {
    tree: &'t Tree,
    current: usize,
    path: Vec<usize>,
}

impl<'t> TreeGame<'t> {
    fn new(tree: &'t Tree) -> Self {
        Self {
            tree,
            current: 0,
            path: Vec::new(),
        }
    }
}

impl GameState for TreeGame<'_> {
    type Move = usize;

    fn legal_moves_into(&self, out: &mut Vec<usize>) {
        out.clear();
        out.extend_from_slice(&self.tree.children[self.current]);
    }

    fn apply_move(&mut self, mv: usize) {
        assert!(self.tree.children[self.current].contains(&mv), "not a child: {mv}");
        self.path.push(self.current);
        self.current = mv;
    }

    fn undo_move(&mut self, mv: usize) {
        assert_eq!(self.current, mv, "undo out of order");
        self.current = self.path.pop().expect("undo at root");
    }

    fn is_checkmate(&self) -> bool {
        false
    }

    fn is_draw(&self) -> bool {
        false
    }

    fn side_to_move(&self) -> Color {
        if self.path.len() % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    fn piece_count(&self, _color: Color, _kind: PieceKind) -> u32 {
        0
    }
}

struct LeafValues;

impl Evaluator<TreeGame<'_>> for LeafValues {
    fn evaluate(&self, game: &TreeGame<'_>) -> Score {
        game.tree.values[game.current]
    }
}

/// Plain minimax straight off the tree, no window.
fn reference(tree: &Tree, node: usize, depth: u8, maximizing: bool) -> Score {
    if depth == 0 {
        return tree.values[node];
    }
    let scores = tree.children[node]
        .iter()
        .map(|&child| reference(tree, child, depth - 1, !maximizing));
    if maximizing {
        scores.max().unwrap_or(-INFINITY)
    } else {
        scores.min().unwrap_or(INFINITY)
    }
}

/// First root child with the best reference score.
fn reference_root(tree: &Tree, depth: u8) -> (usize, Score) {
    let mut best: Option<(usize, Score)> = None;
    for &child in &tree.children[0] {
        let score = reference(tree, child, depth - 1, false);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((child, score));
        }
    }
    best.expect("root has children")
}

fn plain_minimax() -> SearchConfig {
    SearchConfig {
        terminal_scoring: false,
        pruning: false,
        ..SearchConfig::default()
    }
}

fn alpha_beta() -> SearchConfig {
    SearchConfig {
        terminal_scoring: false,
        ..SearchConfig::default()
    }
}

#[test]
fn test_textbook_tree() {
    let tree = Tree::two_ply(&[&[3, 12, 8], &[2, 4, 6], &[14, 5, 2]]);
    let first_child = tree.children[0][0];

    let config = alpha_beta();
    let mut game = TreeGame::new(&tree);
    let pruned = Searcher::new(&LeafValues, &config).search(&mut game, 2).unwrap();
    assert_eq!(pruned.best_move, first_child);
    assert_eq!(pruned.score, 3);
    assert_eq!(pruned.leaves, 7);

    let config = plain_minimax();
    let mut game = TreeGame::new(&tree);
    let full = Searcher::new(&LeafValues, &config).search(&mut game, 2).unwrap();
    assert_eq!(full.best_move, first_child);
    assert_eq!(full.score, 3);
    assert_eq!(full.leaves, 9);
}

#[test]
fn test_pruning_matches_reference_on_random_trees() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for round in 0..300 {
        let depth = rng.gen_range(1..=4);
        let tree = Tree::random(&mut rng, depth);
        let (expected_move, expected_score) = reference_root(&tree, depth);

        for config in [alpha_beta(), plain_minimax()] {
            let mut game = TreeGame::new(&tree);
            let outcome = Searcher::new(&LeafValues, &config)
                .search(&mut game, depth)
                .unwrap();
            assert_eq!(outcome.score, expected_score, "round {round}, {config:?}");
            assert_eq!(outcome.best_move, expected_move, "round {round}, {config:?}");
            assert_eq!(game.current, 0);
            assert!(game.path.is_empty());
        }
    }
}

#[test]
fn test_pruning_never_visits_more_leaves() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..100 {
        let tree = Tree::random(&mut rng, 4);

        let config = alpha_beta();
        let pruned = Searcher::new(&LeafValues, &config)
            .search(&mut TreeGame::new(&tree), 4)
            .unwrap();
        let config = plain_minimax();
        let full = Searcher::new(&LeafValues, &config)
            .search(&mut TreeGame::new(&tree), 4)
            .unwrap();

        assert!(pruned.leaves <= full.leaves);
        assert!(pruned.nodes <= full.nodes);
    }
}

#[test]
fn test_dead_end_returns_sentinel() {
    let mut tree = Tree::with_root();
    let dead_end = tree.add_child(0, 0);
    let normal = tree.add_child(0, 0);
    tree.add_child(normal, 5);

    let config = alpha_beta();
    let mut game = TreeGame::new(&tree);
    let outcome = Searcher::new(&LeafValues, &config).search(&mut game, 2).unwrap();

    // The minimizer at the dead end has no reply, so it reports +infinity
    assert_eq!(outcome.best_move, dead_end);
    assert_eq!(outcome.score, INFINITY);
    assert_eq!(game.current, 0);
    assert!(game.path.is_empty());
}

#[test]
fn test_root_without_children_is_rejected() {
    let tree = Tree::with_root();
    let config = alpha_beta();
    let result = Searcher::new(&LeafValues, &config).search(&mut TreeGame::new(&tree), 3);
    assert_eq!(result, Err(SearchError::NoLegalMoves));
}

#[test]
fn test_depth_one_picks_best_leaf() {
    let mut tree = Tree::with_root();
    tree.add_child(0, -4);
    let best = tree.add_child(0, 9);
    tree.add_child(0, 9);
    tree.add_child(0, 1);

    let config = alpha_beta();
    let outcome = Searcher::new(&LeafValues, &config)
        .search(&mut TreeGame::new(&tree), 1)
        .unwrap();
    assert_eq!(outcome.best_move, best);
    assert_eq!(outcome.score, 9);
    assert_eq!(outcome.leaves, 4);
}
