mod tests {
    use strip_arcade::rng::Rng;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = Rng::new(42);
        let mut b = Rng::new(42);
        for _ in 0..32 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_nearby_seeds_diverge() {
        let mut a = Rng::new(1);
        let mut b = Rng::new(2);
        let mut matches = 0;
        for _ in 0..32 {
            if a.next_u32() == b.next_u32() {
                matches += 1;
            }
        }
        assert!(matches < 4);
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = Rng::new(0);
        let first = rng.next_u32();
        assert_ne!(first, 0);
        assert_ne!(rng.next_u32(), first);
    }

    #[test]
    fn test_range_stays_in_bound() {
        let mut rng = Rng::new(7);
        for _ in 0..1000 {
            assert!(rng.range(10) < 10);
        }
    }

    #[test]
    fn test_range_covers_small_bounds() {
        let mut rng = Rng::new(11);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[rng.range(4) as usize] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn test_one_in_one_always_fires() {
        let mut rng = Rng::new(3);
        for _ in 0..100 {
            assert!(rng.one_in(1));
        }
    }

    #[test]
    fn test_one_in_large_denominator_is_rare() {
        let mut rng = Rng::new(5);
        let mut hits = 0;
        for _ in 0..1000 {
            if rng.one_in(100) {
                hits += 1;
            }
        }
        assert!(hits < 50);
    }
}
