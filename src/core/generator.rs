//! Generator module - deals a shuffled symbol pool into the board structure
//!
//! Partition order is fixed: the first `side_stack_len` symbols form the left
//! chain, the next `side_stack_len` the right chain, and the remainder is cut
//! into alternating 5-wide and 6-wide pyramid layers. The same `assemble`
//! pass rebuilds structure over existing tiles during a wash, so generation
//! and recycling cannot drift apart.

use crate::core::board::{Board, Layer};
use crate::types::{layer_width, GameRules, TileId, DISH_CATALOG, DISH_REPEATS, PADDED_CHUNK_LEN};

/// Production symbol pool: every character of every dish, repeated.
pub fn dish_pool() -> Vec<char> {
    let per_copy: usize = DISH_CATALOG.iter().map(|d| d.chars().count()).sum();
    let mut pool = Vec::with_capacity(per_copy * DISH_REPEATS);
    for _ in 0..DISH_REPEATS {
        for dish in DISH_CATALOG {
            pool.extend(dish.chars());
        }
    }
    pool
}

/// Deal an already-shuffled symbol pool into a fresh board.
pub fn generate(symbols: &[char], rules: &GameRules) -> Board {
    let mut board = Board::new();
    let ids: Vec<TileId> = symbols.iter().map(|&s| board.alloc(s)).collect();

    let side = rules.side_stack_len.min(ids.len());
    let left = ids[..side].to_vec();
    let right_end = (side * 2).min(ids.len());
    let right = ids[side..right_end].to_vec();
    let main = ids[right_end..].to_vec();

    assemble(&mut board, left, right, main);
    board
}

/// Place the given id lists into their zones and rebuild every structural
/// edge and state. Shared by initial generation and the wash; tiles keep
/// their ids and symbols, only placement and edges change.
pub fn assemble(board: &mut Board, left: Vec<TileId>, right: Vec<TileId>, main: Vec<TileId>) {
    for &id in left.iter().chain(right.iter()).chain(main.iter()) {
        board.clear_edges(id);
    }

    board.left_stack = chain(board, left);
    board.right_stack = chain(board, right);
    board.layers = cut_layers(&main);
    board.returned.clear();
    wire_layers(board);
    board.refresh_states();
}

/// Link a side stack: position k is blocked by position k+1, so only the
/// last-dealt tile starts selectable and the chain unlocks back to front.
fn chain(board: &mut Board, ids: Vec<TileId>) -> Vec<TileId> {
    for k in 0..ids.len().saturating_sub(1) {
        board.add_edge(ids[k + 1], ids[k]);
    }
    ids
}

/// Cut the pyramid pool into alternating 5x5 / 6x6 chunks, bottom layer
/// first. A final chunk of exactly 15 is padded square with two hole rows;
/// any other short chunk just leaves the last rows ragged.
fn cut_layers(main: &[TileId]) -> Vec<Layer> {
    let mut layers = Vec::new();
    let mut rest = main;
    let mut index = 0;
    while !rest.is_empty() {
        let width = layer_width(index);
        let take = (width * width).min(rest.len());
        let (chunk, tail) = rest.split_at(take);
        layers.push(shape_layer(index, chunk));
        rest = tail;
        index += 1;
    }
    layers
}

fn shape_layer(index: usize, chunk: &[TileId]) -> Layer {
    let width = layer_width(index);
    let mut cells: Vec<Option<TileId>> = chunk.iter().copied().map(Some).collect();

    if cells.len() == PADDED_CHUNK_LEN {
        // Hole rows after the first and second real rows keep the grid square.
        cells.splice(5..5, std::iter::repeat(None).take(5));
        cells.splice(15..15, std::iter::repeat(None).take(5));
    }

    let mut layer = Layer::new(width);
    for row in cells.chunks(width) {
        layer.rows.push(row.to_vec());
    }
    layer
}

/// Neighbor offsets into the layer above, by this layer's parity. Alternating
/// layers are staggered half a tile, so the covering 2x2 diamond is inset for
/// even layers and outset for odd ones.
fn upper_offsets(layer: usize) -> [(isize, isize); 4] {
    if layer % 2 == 0 {
        [(0, 0), (1, 0), (0, 1), (1, 1)]
    } else {
        [(0, 0), (-1, 0), (0, -1), (-1, -1)]
    }
}

/// Wire cross-layer blocking: each tile is blocked by the existing tiles in
/// its 2x2 footprint one layer up. Recording the edge once from the blocked
/// side keeps the inverse `blocks` lists consistent by construction.
fn wire_layers(board: &mut Board) {
    let mut edges: Vec<(TileId, TileId)> = Vec::new();

    for l in 0..board.layers.len().saturating_sub(1) {
        for (r, row) in board.layers[l].rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let Some(id) = *cell else { continue };
                for (dr, dc) in upper_offsets(l) {
                    if let Some(blocker) = board.layers[l + 1].get(r as isize + dr, c as isize + dc)
                    {
                        edges.push((blocker, id));
                    }
                }
            }
        }
    }

    for (blocker, blocked) in edges {
        board.add_edge(blocker, blocked);
    }
}
