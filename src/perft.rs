use crate::engine::EngineState;
use crate::rules::MoveKind;

/// Move-path enumeration, for checking move generation against known counts.
///
/// Terminal positions are leaves: a game that is won or drawn has no moves.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Perft {
    pub nodes: u64,
    pub captures: u64,
    pub en_passants: u64,
    pub double_advances: u64,
    /// Leaf positions where the game had ended
    pub finished_games: u64,
}

impl Perft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts leaf nodes `depth` plies below `state`.
    pub fn run(&mut self, state: &EngineState, depth: u32) -> u64 {
        if depth == 0 {
            self.nodes += 1;
            if state.outcome().is_over() {
                self.finished_games += 1;
            }
            return 1;
        }

        let mut leaves = 0;
        for (mv, kind) in state.legal_moves() {
            if depth == 1 {
                if kind.is_capture() {
                    self.captures += 1;
                }
                match kind {
                    MoveKind::EnPassantCapture => self.en_passants += 1,
                    MoveKind::DoubleAdvance => self.double_advances += 1,
                    MoveKind::PlainAdvance | MoveKind::NormalCapture => {}
                }
            }
            let mut child = state.clone();
            if child.apply_move(mv.from, mv.to).is_ok() {
                leaves += self.run(&child, depth - 1);
            }
        }
        leaves
    }
}
