#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use glam::DVec2;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::profiles::AiProfile;
    use crate::steering::{evaluate, nearest_target, AiContext};

    const ORIGIN: DVec2 = DVec2::new(400.0, 400.0);

    fn context(heading: f64, speed: f64, targets: &[DVec2]) -> AiContext<'_> {
        AiContext {
            position: ORIGIN,
            heading,
            speed,
            max_speed: 5.0,
            rotation_rate_deg: 3.0,
            targets,
        }
    }

    fn always_fire() -> AiProfile {
        AiProfile {
            fire_chance: 1.0,
            ..AiProfile::default()
        }
    }

    fn never_fire() -> AiProfile {
        AiProfile {
            fire_chance: 0.0,
            ..AiProfile::default()
        }
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    // ---- Target selection ----

    #[test]
    fn test_nearest_target_picks_closest() {
        let targets = [DVec2::new(0.0, 0.0), DVec2::new(410.0, 400.0)];
        let (index, distance) = nearest_target(ORIGIN, &targets).unwrap();
        assert_eq!(index, 1);
        assert!((distance - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_nearest_target_tie_keeps_first() {
        let targets = [DVec2::new(300.0, 400.0), DVec2::new(500.0, 400.0)];
        assert_eq!(nearest_target(ORIGIN, &targets).map(|t| t.0), Some(0));
    }

    #[test]
    fn test_no_targets_is_inert() {
        let ctx = context(0.3, 2.0, &[]);
        let steering = evaluate(&ctx, &always_fire(), &mut rng());
        assert_eq!(steering.heading_delta, 0.0);
        assert!(!steering.fire);
        assert!(
            (steering.speed - 2.0 * 0.98).abs() < 1e-12,
            "only friction applies"
        );
    }

    // ---- Turning ----

    #[test]
    fn test_turns_clockwise_toward_target_on_right() {
        let targets = [DVec2::new(700.0, 400.0)];
        let steering = evaluate(&context(0.0, 0.0, &targets), &never_fire(), &mut rng());
        assert!((steering.heading_delta - 3.0_f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn test_turns_counter_clockwise_toward_target_on_left() {
        let targets = [DVec2::new(100.0, 400.0)];
        let steering = evaluate(&context(0.0, 0.0, &targets), &never_fire(), &mut rng());
        assert!((steering.heading_delta + 3.0_f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn test_turn_uses_shortest_way_across_wrap() {
        // Heading just short of a full turn, target straight up: turn clockwise.
        let targets = [DVec2::new(400.0, 100.0)];
        let heading = 2.0 * PI - 0.2;
        let steering = evaluate(&context(heading, 0.0, &targets), &never_fire(), &mut rng());
        assert!(steering.heading_delta > 0.0);
    }

    // ---- Stand-off band ----

    #[test]
    fn test_accelerates_when_far() {
        let targets = [DVec2::new(400.0, 100.0)]; // 300 away
        let steering = evaluate(&context(0.0, 1.0, &targets), &never_fire(), &mut rng());
        assert!((steering.speed - 1.1 * 0.98).abs() < 1e-12);
    }

    #[test]
    fn test_reverses_when_close() {
        let targets = [DVec2::new(400.0, 300.0)]; // 100 away
        let steering = evaluate(&context(0.0, 0.0, &targets), &never_fire(), &mut rng());
        assert!((steering.speed + 0.1 * 0.98).abs() < 1e-12);
    }

    #[test]
    fn test_holds_inside_band() {
        let targets = [DVec2::new(400.0, 225.0)]; // 175 away
        let steering = evaluate(&context(0.0, 2.0, &targets), &never_fire(), &mut rng());
        assert!((steering.speed - 2.0 * 0.98).abs() < 1e-12);
    }

    #[test]
    fn test_speed_capped_at_max() {
        let targets = [DVec2::new(400.0, 0.0)];
        let steering = evaluate(&context(0.0, 5.0, &targets), &never_fire(), &mut rng());
        assert!(steering.speed <= 5.0);
        assert!((steering.speed - 5.0 * 0.98).abs() < 1e-12);
    }

    // ---- Firing ----

    #[test]
    fn test_fires_only_when_aimed() {
        let ahead = [DVec2::new(400.0, 200.0)];
        let aimed = evaluate(&context(0.05, 0.0, &ahead), &always_fire(), &mut rng());
        assert!(aimed.fire);

        let off_axis = evaluate(&context(FRAC_PI_2, 0.0, &ahead), &always_fire(), &mut rng());
        assert!(!off_axis.fire);
    }

    #[test]
    fn test_fire_chance_is_probabilistic() {
        let ahead = [DVec2::new(400.0, 200.0)];
        let profile = AiProfile::default();
        let mut rng = rng();
        let shots = (0..10_000)
            .filter(|_| evaluate(&context(0.0, 0.0, &ahead), &profile, &mut rng).fire)
            .count();
        // Expect ~500 at p = 0.05.
        assert!((350..650).contains(&shots), "got {shots} shots");
    }
}
