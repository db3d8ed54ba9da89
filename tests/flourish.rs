mod tests {
    use embassy_time::Duration;
    use strip_arcade::color::colors;
    use strip_arcade::flourish::Flourish;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_flashes_alternate_color_and_black() {
        let mut flourish = Flourish::flashes(colors::RED, 2, ms(100));
        let mut cells = [colors::BLACK; 4];

        flourish.render(&mut cells);
        assert_eq!(cells, [colors::RED; 4]);

        assert!(!flourish.advance(ms(100)));
        flourish.render(&mut cells);
        assert_eq!(cells, [colors::BLACK; 4]);

        assert!(!flourish.advance(ms(100)));
        flourish.render(&mut cells);
        assert_eq!(cells, [colors::RED; 4]);
    }

    #[test]
    fn test_flashes_finish_after_all_cycles() {
        let mut flourish = Flourish::flashes(colors::GREEN, 3, ms(150));
        let mut elapsed = 0;
        while !flourish.advance(ms(50)) {
            elapsed += 50;
            assert!(elapsed < 2000);
        }
        // Three on/off cycles of 150ms each.
        assert_eq!(elapsed + 50, 900);
        assert!(flourish.is_finished());
    }

    #[test]
    fn test_hold_extends_the_sequence() {
        let mut plain = Flourish::flashes(colors::RED, 1, ms(100));
        let mut held = Flourish::flashes(colors::RED, 1, ms(100)).with_hold(ms(300));

        assert!(plain.advance(ms(200)));
        assert!(!held.advance(ms(200)));
        assert!(!held.advance(ms(200)));
        assert!(held.advance(ms(100)));
    }

    #[test]
    fn test_hold_renders_black() {
        let mut flourish = Flourish::flashes(colors::RED, 1, ms(100)).with_hold(ms(500));
        let mut cells = [colors::RED; 3];
        flourish.advance(ms(200));
        flourish.render(&mut cells);
        assert_eq!(cells, [colors::BLACK; 3]);
    }

    #[test]
    fn test_single_fill_runs_once() {
        let mut flourish = Flourish::single(colors::GREEN, ms(50));
        let mut cells = [colors::BLACK; 2];
        flourish.render(&mut cells);
        assert_eq!(cells, [colors::GREEN; 2]);
        assert!(!flourish.is_finished());
        assert!(flourish.advance(ms(50)));
        assert!(flourish.is_finished());
    }

    #[test]
    fn test_finished_flourish_stays_finished_and_dark() {
        let mut flourish = Flourish::single(colors::RED, ms(10));
        assert!(flourish.advance(ms(10)));
        assert!(flourish.advance(ms(10)));
        let mut cells = [colors::RED; 2];
        flourish.render(&mut cells);
        assert_eq!(cells, [colors::BLACK; 2]);
    }

    #[test]
    fn test_one_advance_can_cross_phases() {
        let mut flourish = Flourish::flashes(colors::RED, 2, ms(50));
        // 120ms lands inside the third phase.
        assert!(!flourish.advance(ms(120)));
        let mut cells = [colors::BLACK; 2];
        flourish.render(&mut cells);
        assert_eq!(cells, [colors::RED; 2]);
    }
}
