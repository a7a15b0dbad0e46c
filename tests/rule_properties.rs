use proptest::prelude::*;

use quoridor_engine::pathfinding::shortest_distance;
use quoridor_engine::{new_match, Cell, Match, Orientation, PlayerId, RuleError, Wall};

#[derive(Clone, Copy, Debug)]
enum Op {
    /// Wall anchored at (col, row), horizontal if the flag is set.
    Wall(u8, u8, bool),
    /// Pick the n-th legal destination (modulo the count).
    Move(usize),
    /// Ask for a cell that may or may not be legal.
    MoveTo(u8, u8),
}

fn op_strategy(board_size: u8) -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..board_size, 0..board_size, any::<bool>()).prop_map(|(c, r, h)| Op::Wall(c, r, h)),
        2 => (0usize..8).prop_map(Op::Move),
        1 => (0..board_size, 0..board_size).prop_map(|(c, r)| Op::MoveTo(c, r)),
    ]
}

fn both_connected(game: &Match) -> bool {
    game.board()
        .pawns()
        .iter()
        .all(|p| shortest_distance(p.position, p.goal_row, game.walls()).is_some())
}

proptest! {
    #[test]
    fn prop_random_play_keeps_invariants(
        board_size in 3u8..=9,
        max_walls in 0u8..=10,
        ops in prop::collection::vec(op_strategy(9), 0..80),
    ) {
        let mut game = new_match(max_walls, board_size).unwrap();
        let mut stock = [max_walls; 2];

        for op in ops {
            if game.is_over() {
                break;
            }
            let player = game.turn();
            let before = game.clone();

            let result = match op {
                Op::Wall(c, r, h) => {
                    let orientation = if h { Orientation::Horizontal } else { Orientation::Vertical };
                    game.try_wall(player, Wall::new(Cell::new(c, r), orientation))
                }
                Op::Move(n) => {
                    let dests: Vec<Cell> = game.legal_destinations(player).into_iter().collect();
                    if dests.is_empty() {
                        continue;
                    }
                    let result = game.try_move(player, dests[n % dests.len()]).map(|_| ());
                    prop_assert!(result.is_ok());
                    result
                }
                Op::MoveTo(c, r) => game.try_move(player, Cell::new(c, r)).map(|_| ()),
            };

            match result {
                Ok(()) => {
                    if !game.is_over() {
                        prop_assert_eq!(game.turn(), player.other());
                    }
                }
                Err(err) => {
                    prop_assert!(matches!(
                        err,
                        RuleError::IllegalMove | RuleError::IllegalWall | RuleError::NoWallsRemaining
                    ));
                    prop_assert_eq!(&game, &before);
                }
            }

            prop_assert!(both_connected(&game));
            for id in PlayerId::ALL {
                let now = game.walls_remaining(id);
                prop_assert!(now <= stock[id.index()]);
                stock[id.index()] = now;
            }
            let placed = game.walls().len();
            let spent = (2 * max_walls as usize)
                - game.walls_remaining(PlayerId::Player1) as usize
                - game.walls_remaining(PlayerId::Player2) as usize;
            prop_assert_eq!(placed, spent);
        }
    }

    #[test]
    fn prop_legal_destinations_all_commit(
        walls in prop::collection::vec((0u8..8, 0u8..8, any::<bool>()), 0..20),
    ) {
        let mut game = new_match(20, 9).unwrap();
        for (c, r, h) in walls {
            let orientation = if h { Orientation::Horizontal } else { Orientation::Vertical };
            let player = game.turn();
            let _ = game.try_wall(player, Wall::new(Cell::new(c, r), orientation));
        }

        let player = game.turn();
        for target in game.legal_destinations(player) {
            let mut trial = game.clone();
            prop_assert!(trial.try_move(player, target).is_ok());
            prop_assert_eq!(trial.position(player), target);
        }
    }
}
