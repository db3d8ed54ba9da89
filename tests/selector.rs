mod tests {
    use embassy_time::Duration;
    use strip_arcade::color::{Rgb, colors};
    use strip_arcade::input::InputSnapshot;
    use strip_arcade::{GAME_COUNT, GameId, GameSelector, GameState, MemoryStore};

    const N: usize = 10;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_boot_restores_the_stored_game() {
        let mut store = MemoryStore::new(5);
        let selector: GameSelector<_, N> = GameSelector::new(&mut store, 1);
        assert_eq!(selector.active_id(), GameId::Pong);
        assert_eq!(selector.game_name(), "Pong");
        drop(selector);
        assert_eq!(store.value(), 5);
    }

    #[test]
    fn test_boot_with_garbage_falls_back_to_test() {
        let mut store = MemoryStore::new(200);
        let selector: GameSelector<_, N> = GameSelector::new(&mut store, 1);
        assert_eq!(selector.active_id(), GameId::Test);
        drop(selector);
        // The fallback is written back so the next boot is clean.
        assert_eq!(store.value(), 0);
    }

    #[test]
    fn test_switch_persists_the_selection() {
        let mut store = MemoryStore::new(0);
        let mut selector: GameSelector<_, N> = GameSelector::new(&mut store, 1);
        assert!(selector.set_active(4));
        assert_eq!(selector.active_id(), GameId::Flappy);
        drop(selector);
        assert_eq!(store.value(), 4);
    }

    #[test]
    fn test_unknown_id_is_rejected_without_side_effects() {
        let mut store = MemoryStore::new(2);
        let mut selector: GameSelector<_, N> = GameSelector::new(&mut store, 1);
        assert!(!selector.set_active(GAME_COUNT));
        assert!(!selector.set_active(255));
        assert_eq!(selector.active_id(), GameId::LavaRun);
        drop(selector);
        assert_eq!(store.value(), 2);
    }

    #[test]
    fn test_reselecting_the_active_game_is_a_no_op() {
        let mut store = MemoryStore::new(0);
        let mut selector: GameSelector<_, N> = GameSelector::new(&mut store, 1);
        selector.take_pending_clear();
        assert!(selector.set_active(0));
        // No fresh activation, so no new clear request.
        assert!(!selector.take_pending_clear());
    }

    #[test]
    fn test_activation_requests_one_buffer_clear() {
        let mut store = MemoryStore::new(0);
        let mut selector: GameSelector<_, N> = GameSelector::new(&mut store, 1);
        assert!(selector.take_pending_clear());
        assert!(!selector.take_pending_clear());
        selector.set_active(3);
        assert!(selector.take_pending_clear());
        assert!(!selector.take_pending_clear());
    }

    #[test]
    fn test_advance_releases_fixed_ticks() {
        let mut store = MemoryStore::new(0);
        let mut selector: GameSelector<_, N> = GameSelector::new(&mut store, 1);
        let input = InputSnapshot::default();
        let mut cells = [colors::BLACK; N];
        // The test game simulates on 33ms ticks.
        assert_eq!(selector.advance(ms(100), &input, &mut cells), 3);
        assert_eq!(selector.advance(ms(0), &input, &mut cells), 0);
        assert_eq!(selector.advance(ms(32), &input, &mut cells), 1);
    }

    #[test]
    fn test_advance_draws_once_per_released_tick() {
        let mut store = MemoryStore::new(0);
        let mut selector: GameSelector<_, N> = GameSelector::new(&mut store, 1);
        let input = InputSnapshot::default();
        let mut cells = [colors::WHITE; N];
        // No tick released: the canvas is not even faded.
        assert_eq!(selector.advance(ms(10), &input, &mut cells), 0);
        assert_eq!(cells, [colors::WHITE; N]);
        // One tick: one fade step plus the test game dot.
        assert_eq!(selector.advance(ms(30), &input, &mut cells), 1);
        assert_eq!(cells[N / 2], colors::RED);
        assert_eq!(cells[0], Rgb::new(205, 205, 205));
    }

    #[test]
    fn test_max_ticks_bounds_catch_up() {
        let mut store = MemoryStore::new(0);
        let mut selector: GameSelector<_, N> =
            GameSelector::new(&mut store, 1).with_max_ticks(2);
        let input = InputSnapshot::default();
        let mut cells = [colors::BLACK; N];
        assert_eq!(selector.advance(ms(1000), &input, &mut cells), 2);
    }

    #[test]
    fn test_tick_clock_follows_the_switched_game() {
        let mut store = MemoryStore::new(0);
        let mut selector: GameSelector<_, N> = GameSelector::new(&mut store, 1);
        let input = InputSnapshot::default();
        let mut cells = [colors::BLACK; N];
        selector.set_active(2);
        // Lava Run simulates on 100ms ticks.
        assert_eq!(selector.advance(ms(250), &input, &mut cells), 2);
        assert_eq!(selector.advance(ms(50), &input, &mut cells), 1);
    }

    #[test]
    fn test_render_draws_the_active_game() {
        let mut store = MemoryStore::new(0);
        let selector: GameSelector<_, N> = GameSelector::new(&mut store, 1);
        let mut cells = [colors::BLACK; N];
        selector.render(&mut cells);
        assert_eq!(cells[N / 2], colors::RED);
    }

    #[test]
    fn test_score_and_state_pass_through() {
        let mut store = MemoryStore::new(0);
        let selector: GameSelector<_, N> = GameSelector::new(&mut store, 1);
        assert_eq!(selector.score(), 0);
        assert_eq!(selector.state(), GameState::Playing);
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new(7);
        assert_eq!(store.value(), 7);
        let mut selector: GameSelector<_, N> = GameSelector::new(&mut store, 1);
        assert_eq!(selector.active_id(), GameId::Guardian2);
        selector.set_active(10);
        drop(selector);
        assert_eq!(store.value(), 10);
    }
}
