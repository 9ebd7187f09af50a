use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use seabattle::{generate_random_board, AiPlayer, Coordinate, GameEngine, GameStatus, Player, Side};

fn ai_vs_ai(seed: u64) -> GameEngine {
    GameEngine::new(
        Box::new(AiPlayer::new()),
        Box::new(AiPlayer::new()),
        SmallRng::seed_from_u64(seed),
    )
    .unwrap()
}

#[test]
fn test_ai_vs_ai_game() {
    let mut game = ai_vs_ai(123);
    assert!(game.ai_board().is_hidden());
    assert!(!game.user_board().is_hidden());

    let status = game.run().unwrap();
    assert!(status.is_over());
    let (loser, winner) = match status.winner() {
        Some(Side::User) => (game.ai_board(), game.user_board()),
        Some(Side::Ai) => (game.user_board(), game.ai_board()),
        None => panic!("match ended without a winner"),
    };
    assert_eq!(loser.alive_count(), 0);
    assert!(winner.alive_count() > 0);
    assert!(game.shots_fired() <= 72, "game took too many shots");
}

#[test]
fn test_same_seed_same_match() {
    let mut a = ai_vs_ai(99);
    let mut b = ai_vs_ai(99);
    let mut records = 0;
    while !a.status().is_over() {
        assert_eq!(a.step().unwrap(), b.step().unwrap());
        records += 1;
    }
    assert!(b.status().is_over());
    assert_eq!(records, a.shots_fired());
    assert_eq!(a.user_board().render(), b.user_board().render());
    assert_eq!(a.ai_board().render(), b.ai_board().render());
}

#[test]
fn test_ai_runs_out_of_targets() {
    let mut rng = SmallRng::seed_from_u64(5);
    let own = generate_random_board(&mut rng).unwrap();
    let mut enemy = seabattle::Board::new();
    for y in 0..6 {
        for x in 0..6 {
            enemy.shoot(Coordinate::new(x, y)).unwrap();
        }
    }
    let mut ai = AiPlayer::new();
    assert!(ai.select_target(&mut rng, &own, &enemy).is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn ai_only_picks_targetable_cells(seed in any::<u64>(), shots in 0usize..30) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let own = generate_random_board(&mut rng).unwrap();
        let mut enemy = generate_random_board(&mut rng).unwrap();
        for _ in 0..shots {
            let target = Coordinate::new(rng.random_range(0..6), rng.random_range(0..6));
            let _ = enemy.shoot(target);
        }
        prop_assume!(!enemy.is_all_destroyed());

        let mut ai = AiPlayer::new();
        let target = ai.select_target(&mut rng, &own, &enemy).unwrap();
        prop_assert!(enemy.cell(target).unwrap().is_targetable());
        prop_assert!(ai.fire(&mut rng, &own, &mut enemy).is_ok());
    }

    #[test]
    fn ai_matches_always_finish(seed in any::<u64>()) {
        let mut game = ai_vs_ai(seed);
        let status = game.run().unwrap();
        prop_assert!(matches!(status, GameStatus::UserWon | GameStatus::AiWon));
        prop_assert!(game.user_board().is_all_destroyed() != game.ai_board().is_all_destroyed());
    }
}
