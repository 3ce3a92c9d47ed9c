#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use crate::config::BoardConfig;
    use crate::console_interface::render_grid_to_string;
    use crate::core::*;
    use crate::test::test_util::BoardTestState;

    #[test]
    fn default_config_generates_five_by_five() {
        let grid = generate(&BoardConfig::default(), &mut StdRng::seed_from_u64(0));

        assert_eq!(grid.rows(), 5);
        assert_eq!(grid.cols(), 5);
    }

    #[test]
    fn rectangular_board_keeps_orientation() {
        let config = BoardConfig::new(2, 6, 1.0).unwrap();
        let grid = generate(&config, &mut StdRng::seed_from_u64(0));

        let board = BoardTestState { grid };
        board.assert_matches(r#"
OOOOOO
OOOOOO
"#);
    }

    #[test]
    fn lit_share_tracks_probability() {
        let config = BoardConfig::new(100, 100, 0.25).unwrap();
        let grid = generate(&config, &mut StdRng::seed_from_u64(2024));

        let share = grid.lit_count() as f64 / 10_000.0;
        assert!((0.22..0.28).contains(&share), "lit share {} too far from 0.25", share);
    }

    #[test]
    fn different_seeds_generate_different_boards() {
        let config = BoardConfig::new(8, 8, 0.5).unwrap();

        let first = generate(&config, &mut StdRng::seed_from_u64(1));
        let second = generate(&config, &mut StdRng::seed_from_u64(2));

        assert_ne!(render_grid_to_string(&first), render_grid_to_string(&second));
    }

    #[test]
    fn generated_board_is_playable() {
        let config = BoardConfig::new(3, 3, 0.5).unwrap();
        let mut board = BoardTestState {
            grid: generate_unsolved(&config, &mut StdRng::seed_from_u64(5)),
        };
        assert_eq!(GameStatus::of(&board.grid), GameStatus::Playing);

        let before = board.grid.clone();
        board.assert_toggle(1, 1);
        board.assert_toggle(1, 1);
        assert_eq!(board.grid, before);
    }
}
