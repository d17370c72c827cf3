//! Recycle module - the wash
//!
//! Rebuilds the board in place from every tile still on it: each side stack
//! is reshuffled among itself, the pyramid pool (plus any returned tiles) is
//! reshuffled and re-layered, and all blocking edges are recomputed from
//! scratch. Tile ids and symbols are untouched; collected tiles are in no
//! zone and so never re-enter.

use crate::core::board::Board;
use crate::core::generator::assemble;
use crate::core::rng::SimpleRng;

pub fn wash(board: &mut Board, rng: &mut SimpleRng) {
    let mut main = board.pyramid_ids();
    main.extend(board.returned.iter().copied());

    let main = rng.permuted(&main);
    let left = rng.permuted(&board.left_stack);
    let right = rng.permuted(&board.right_stack);

    assemble(board, left, right, main);
}
