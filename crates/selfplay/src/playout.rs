//! Random playouts.

use chess_engine::{Game, GameStatus};
use rand::seq::SliceRandom;
use rand::Rng;

/// How a playout finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The game reached checkmate or stalemate.
    Finished(GameStatus),
    /// The ply cap was hit first.
    PlyLimit,
    /// The game could not continue though it was not over.
    Aborted(GameStatus),
}

/// Summary of a playout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playout {
    pub plies: u32,
    pub outcome: Outcome,
}

/// Plays uniformly random legal moves until the game ends or `max_plies`
/// moves have been made.
pub fn play_random<R: Rng + ?Sized>(game: &mut Game, max_plies: u32, rng: &mut R) -> Playout {
    let mut plies = 0;
    loop {
        let status = game.status();
        if status.is_terminal() {
            return Playout {
                plies,
                outcome: Outcome::Finished(status),
            };
        }
        if plies >= max_plies {
            return Playout {
                plies,
                outcome: Outcome::PlyLimit,
            };
        }

        let side = game.side_to_move();
        let moves = game.all_legal_moves(side);
        let Some(&mv) = moves.choose(rng) else {
            tracing::error!("No legal move found in a non-terminal position");
            return Playout {
                plies,
                outcome: Outcome::Aborted(status),
            };
        };

        match game.make_move(mv) {
            Ok(()) => {
                plies += 1;
                tracing::debug!(ply = plies, mv = %mv, side = %side, "played");
            }
            Err(e) => {
                tracing::error!("Generated move was rejected: {}", e);
                return Playout {
                    plies,
                    outcome: Outcome::Aborted(status),
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Color;
    use chess_engine::RulesConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_respects_ply_limit() {
        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(1);
        let playout = play_random(&mut game, 6, &mut rng);
        assert!(playout.plies <= 6);
        if playout.outcome == Outcome::PlyLimit {
            assert_eq!(playout.plies, 6);
            assert_eq!(game.side_to_move(), Color::White);
        }
    }

    #[test]
    fn test_zero_plies_leaves_game_untouched() {
        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(3);
        let playout = play_random(&mut game, 0, &mut rng);
        assert_eq!(playout.outcome, Outcome::PlyLimit);
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_terminal_start_plays_nothing() {
        let mut game = Game::from_fen("7k/5Q2/6K1/8/8/8/8/8 b").unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let playout = play_random(&mut game, 10, &mut rng);
        assert_eq!(playout.plies, 0);
        assert_eq!(
            playout.outcome,
            Outcome::Finished(GameStatus::Stalemate(Color::Black))
        );
    }

    #[test]
    fn test_crowded_start_position() {
        let mut game = Game::from_fen("1QQ1QQQk/1Q5Q/Q4Q2/Q6Q/Q6Q/Q3Q3/Q6Q/KQQQ1Q1Q w").unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let playout = play_random(&mut game, 1, &mut rng);
        assert!(matches!(
            playout.outcome,
            Outcome::Finished(_) | Outcome::PlyLimit
        ));
        assert_eq!(playout.plies, 1);
    }

    #[test]
    fn test_same_seed_same_game() {
        let run = |seed| {
            let mut game = Game::with_config(RulesConfig::with_castling());
            let mut rng = StdRng::seed_from_u64(seed);
            let playout = play_random(&mut game, 40, &mut rng);
            (playout, game.to_fen())
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn test_finished_playout_is_terminal() {
        for seed in 0..5 {
            let mut game = Game::new();
            let mut rng = StdRng::seed_from_u64(seed);
            let playout = play_random(&mut game, 300, &mut rng);
            match playout.outcome {
                Outcome::Finished(status) => {
                    assert!(status.is_terminal());
                    assert_eq!(status, game.status());
                }
                Outcome::PlyLimit => assert_eq!(playout.plies, 300),
                Outcome::Aborted(status) => panic!("playout aborted in {}", status),
            }
        }
    }
}
