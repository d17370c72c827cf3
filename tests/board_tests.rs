//! Board generation tests - structure and graph invariants

use dish_tiles::core::generator::{dish_pool, generate};
use dish_tiles::core::{Board, SimpleRng};
use dish_tiles::types::{GameRules, TileId, TileState};

fn production_board(seed: u32) -> Board {
    let mut rng = SimpleRng::new(seed);
    let symbols = rng.permuted(&dish_pool());
    generate(&symbols, &GameRules::default())
}

#[test]
fn test_zone_partition_counts() {
    let board = production_board(1);

    assert_eq!(board.live_count(), 360);
    assert_eq!(board.left_stack.len(), 20);
    assert_eq!(board.right_stack.len(), 20);
    assert_eq!(board.pyramid_ids().len(), 320);
    assert!(board.returned.is_empty());
}

#[test]
fn test_every_tile_in_exactly_one_zone() {
    let board = production_board(2);

    let mut seen: Vec<TileId> = Vec::new();
    seen.extend(&board.left_stack);
    seen.extend(&board.right_stack);
    seen.extend(board.pyramid_ids());

    assert_eq!(seen.len(), 360);
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), 360, "a tile appears in two zones");
}

#[test]
fn test_layer_widths_follow_alternation() {
    let board = production_board(3);

    // 320 pyramid tiles: ten full layers then a padded 15-tile one.
    let widths: Vec<usize> = board.layers.iter().map(|l| l.width).collect();
    assert_eq!(widths, vec![5, 6, 5, 6, 5, 6, 5, 6, 5, 6, 5]);

    let last = board.layers.last().unwrap();
    assert_eq!(last.rows.len(), 5);
    assert_eq!(last.tile_ids().count(), 15);
    // Hole rows keep the padded layer square.
    assert!(last.rows[1].iter().all(|c| c.is_none()));
    assert!(last.rows[3].iter().all(|c| c.is_none()));
}

#[test]
fn test_side_chains_link_forward_only() {
    let board = production_board(4);

    for stack in [&board.left_stack, &board.right_stack] {
        for (k, &id) in stack.iter().enumerate() {
            let tile = board.tile(id);
            if k + 1 < stack.len() {
                assert_eq!(tile.blocked_by, vec![stack[k + 1]]);
            } else {
                assert!(tile.blocked_by.is_empty());
                assert_eq!(tile.state, TileState::Available);
            }
            if k > 0 {
                assert_eq!(tile.blocks, vec![stack[k - 1]]);
            } else {
                assert!(tile.blocks.is_empty());
            }
        }
    }
}

#[test]
fn test_blocking_graph_is_acyclic() {
    let board = production_board(5);

    // Walk blocked_by edges from every tile; no tile may reach itself.
    fn reaches(board: &Board, start: TileId, current: TileId, depth: usize) -> bool {
        assert!(depth < 1000, "blocking chain too deep, likely cyclic");
        for &next in &board.tile(current).blocked_by {
            if next == start || reaches(board, start, next, depth + 1) {
                return true;
            }
        }
        false
    }

    for id in board.live_ids() {
        assert!(!reaches(&board, id, id, 0), "{:?} blocks itself", id);
    }
}

#[test]
fn test_edges_are_mutually_consistent() {
    let board = production_board(6);

    for id in board.live_ids() {
        let tile = board.tile(id);
        for &blocker in &tile.blocked_by {
            assert!(
                board.tile(blocker).blocks.contains(&id),
                "{:?} -> {:?} missing inverse",
                blocker,
                id
            );
        }
        for &blocked in &tile.blocks {
            assert!(board.tile(blocked).blocked_by.contains(&id));
        }
    }
}

#[test]
fn test_states_reflect_blockers() {
    let board = production_board(7);

    for id in board.live_ids() {
        let tile = board.tile(id);
        if tile.blocked_by.is_empty() {
            assert_eq!(tile.state, TileState::Available);
        } else {
            assert_eq!(tile.state, TileState::Locked);
        }
    }
}

#[test]
fn test_topmost_layer_is_fully_selectable() {
    let board = production_board(8);

    let top = board.layers.last().unwrap();
    for id in top.tile_ids() {
        assert!(board.is_selectable(id));
    }
}

#[test]
fn test_generation_is_deterministic_per_seed() {
    assert_eq!(production_board(42), production_board(42));
    assert_ne!(production_board(42), production_board(43));
}
