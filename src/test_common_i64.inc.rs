    fn gen(mode: Mode, low: Value, high: Value, num: usize) -> Vec<i64> {
        let mut range = Range::create(low, high, num).unwrap();
        range.generate_mode(mode).unwrap().to_vec()
    }

    #[test]
    fn lin_three_values() {
        assert_eq!(gen(Mode::Lin, 0.0, 10.0, 3), [0, 5, 10]);
    }

    #[test]
    fn log_three_values() {
        assert_eq!(gen(Mode::Log, 0.0, 2.0, 3), [1, 10, 100]);
    }

    #[test]
    fn two_values_hit_both_bounds() {
        assert_eq!(gen(Mode::Lin, -3.0, 7.0, 2), [-3, 7]);
    }

    #[test]
    fn single_value_is_low() {
        assert_eq!(gen(Mode::Lin, 4.2, 9.9, 1), [4]);
        assert_eq!(gen(Mode::Log, 2.0, 9.9, 1), [100]);
    }

    #[test]
    fn truncation_is_toward_zero() {
        assert_eq!(gen(Mode::Lin, -2.5, 2.5, 2), [-2, 2]);
    }

    #[test]
    fn descending_bounds() {
        assert_eq!(gen(Mode::Lin, 10.0, 0.0, 3), [10, 5, 0]);
    }

    #[test]
    fn fractional_bounds_truncate() {
        assert_eq!(gen(Mode::Lin, 0.5, 2.5, 3), [0, 1, 2]);
    }

    #[test]
    fn log_negative_exponents_truncate_to_zero() {
        assert_eq!(gen(Mode::Log, -2.0, 0.0, 3), [0, 0, 1]);
    }

    #[test]
    fn constant_range() {
        assert_eq!(gen(Mode::Lin, 5.0, 5.0, 4), [5, 5, 5, 5]);
    }

    #[test]
    fn zero_values_rejected() {
        assert!(Range::create(0.0, 1.0, 0).is_err());
    }

    #[test]
    fn unknown_mode_rejected() {
        assert!("linear".parse::<Mode>().is_err());
        assert!("".parse::<Mode>().is_err());
        assert_eq!("lin".parse::<Mode>().unwrap(), Mode::Lin);
        assert_eq!("log".parse::<Mode>().unwrap(), Mode::Log);
    }

    #[test]
    fn generate_is_repeatable() {
        let mut range = Range::create(-1.5, 8.25, 7).unwrap();
        let first = range.generate_mode(Mode::Lin).unwrap().to_vec();
        let second = range.generate_mode(Mode::Lin).unwrap().to_vec();
        assert_eq!(first, second);
        assert_eq!(first.len(), 7);
    }

    #[test]
    fn random_integer_steps_hit_bounds() {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let low = rng.gen_range(-50, 50) as Value;
            let step = rng.gen_range(1, 10) as Value;
            let num: usize = rng.gen_range(2, 20);
            let high = low + step * (num - 1) as Value;
            let vect = gen(Mode::Lin, low, high, num);
            assert_eq!(vect.len(), num);
            assert_eq!(vect[0], low as i64);
            assert_eq!(vect[num - 1], high as i64);
        }
    }
