#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use glam::DVec2;

    use crate::commands::PlayerCommand;
    use crate::config::Tuning;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::input::*;
    use crate::state::GameStateSnapshot;
    use crate::types::*;

    // ---- Geometry ----

    #[test]
    fn test_heading_zero_points_up() {
        let v = heading_vector(0.0);
        assert!(v.x.abs() < 1e-12);
        assert!((v.y + 1.0).abs() < 1e-12, "heading 0 should move toward -y");
    }

    #[test]
    fn test_heading_quarter_turn_points_right() {
        let v = heading_vector(FRAC_PI_2);
        assert!((v.x - 1.0).abs() < 1e-12);
        assert!(v.y.abs() < 1e-12);
    }

    #[test]
    fn test_bearing_matches_heading_convention() {
        let origin = DVec2::new(100.0, 100.0);
        assert!(bearing(origin, DVec2::new(100.0, 50.0)).abs() < 1e-12);
        assert!((bearing(origin, DVec2::new(150.0, 100.0)) - FRAC_PI_2).abs() < 1e-12);
        assert!((bearing(origin, DVec2::new(100.0, 150.0)).abs() - PI).abs() < 1e-12);
    }

    #[test]
    fn test_wrap_angle_range() {
        for i in -40..=40 {
            let a = i as f64 * 0.37;
            let w = wrap_angle(a);
            assert!(w > -PI && w <= PI, "wrap({a}) = {w} out of range");
            let turns = (a - w) / std::f64::consts::TAU;
            assert!((turns - turns.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_wrap_angle_known_values() {
        assert!((wrap_angle(0.5) - 0.5).abs() < 1e-12);
        assert!((wrap_angle(-0.5) + 0.5).abs() < 1e-12);
        assert!((wrap_angle(std::f64::consts::TAU + 0.5) - 0.5).abs() < 1e-12);
        assert!((wrap_angle(1.5 * PI) + FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_playfield_clamp_inside() {
        let field = Playfield::new(800.0, 600.0);
        let p = field.clamp_inside(DVec2::new(-30.0, 900.0), 20.0);
        assert_eq!(p, DVec2::new(20.0, 580.0));
        let q = field.clamp_inside(DVec2::new(400.0, 300.0), 20.0);
        assert_eq!(q, DVec2::new(400.0, 300.0));
    }

    #[test]
    fn test_playfield_contains_edges_inclusive() {
        let field = Playfield::new(800.0, 600.0);
        assert!(field.contains(DVec2::new(0.0, 0.0)));
        assert!(field.contains(DVec2::new(800.0, 600.0)));
        assert!(!field.contains(DVec2::new(800.1, 10.0)));
        assert!(!field.contains(DVec2::new(10.0, -0.1)));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        for _ in 0..60 {
            t.advance(1000.0 / 60.0);
        }
        assert_eq!(t.frame, 60);
        assert!((t.elapsed_ms - 1000.0).abs() < 1e-9);
    }

    // ---- Upgrades ----

    #[test]
    fn test_upgrade_kind_from_str() {
        assert_eq!("damage".parse::<UpgradeKind>(), Ok(UpgradeKind::Damage));
        assert_eq!("Reload".parse::<UpgradeKind>(), Ok(UpgradeKind::Reload));
        assert_eq!(
            "armor".parse::<UpgradeKind>(),
            Err(UnknownUpgrade("armor".to_string()))
        );
    }

    #[test]
    fn test_upgrade_labels() {
        let labels: Vec<&str> = UpgradeKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Increased Damage",
                "Faster Movement",
                "Faster Reload",
                "Health Restore"
            ]
        );
    }

    // ---- Input ----

    #[test]
    fn test_input_state_press_release() {
        let mut input = InputState::default();
        assert!(!input.is_held(Key::Space));
        input.press(Key::Space);
        input.press(Key::Space);
        assert!(input.is_held(Key::Space));
        input.release(Key::Space);
        assert!(!input.is_held(Key::Space));
    }

    #[test]
    fn test_key_normalized() {
        assert_eq!(Key::Char('W').normalized(), Key::Char('w'));
        assert_eq!(Key::Char('r').normalized(), Key::Char('r'));
        assert_eq!(Key::Enter.normalized(), Key::Enter);

        let event: HostEvent =
            serde_json::from_str(r#"{"type":"KeyDown","key":{"Char":"R"}}"#).unwrap();
        let HostEvent::KeyDown { key } = event else {
            panic!("expected KeyDown, got {event:?}");
        };
        assert_eq!(key.normalized(), Key::char('r'));
    }

    #[test]
    fn test_translate_menu_digits() {
        let bindings = KeyBindings::defaults();
        assert_eq!(
            translate_key_down(MatchMode::Menu, Key::Char('1'), &bindings),
            vec![PlayerCommand::SelectMode {
                mode: MatchMode::Pvp
            }]
        );
        assert_eq!(
            translate_key_down(MatchMode::Menu, Key::Char('2'), &bindings),
            vec![PlayerCommand::SelectMode {
                mode: MatchMode::Coop
            }]
        );
        assert!(translate_key_down(MatchMode::Menu, Key::Char('3'), &bindings).is_empty());
    }

    #[test]
    fn test_translate_upgrade_digits() {
        let bindings = KeyBindings::defaults();
        assert_eq!(
            translate_key_down(MatchMode::Upgrade, Key::Char('3'), &bindings),
            vec![PlayerCommand::ChooseUpgrade { index: 2 }]
        );
        assert!(translate_key_down(MatchMode::Upgrade, Key::Char('4'), &bindings).is_empty());
        assert!(translate_key_down(MatchMode::Coop, Key::Char('1'), &bindings).is_empty());
    }

    #[test]
    fn test_translate_fire_and_restart() {
        let bindings = KeyBindings::defaults();
        assert_eq!(
            translate_key_down(MatchMode::Pvp, Key::Space, &bindings),
            vec![PlayerCommand::Fire { slot: 0 }]
        );
        assert_eq!(
            translate_key_down(MatchMode::Coop, Key::Enter, &bindings),
            vec![PlayerCommand::Fire { slot: 1 }]
        );
        assert_eq!(
            translate_key_down(MatchMode::Pvp, Key::char('R'), &bindings),
            vec![PlayerCommand::Restart]
        );
    }

    // ---- Config ----

    #[test]
    fn test_tuning_partial_override() {
        let tuning = Tuning::from_json_str(r#"{ "reload_ms": 250.0, "max_in_flight": 3 }"#)
            .expect("partial tuning should parse");
        assert_eq!(tuning.reload_ms, 250.0);
        assert_eq!(tuning.max_in_flight, 3);
        assert_eq!(tuning.footprint, Tuning::default().footprint);
    }

    #[test]
    fn test_tuning_rejects_bad_type() {
        assert!(Tuning::from_json_str(r#"{ "reload_ms": "fast" }"#).is_err());
    }

    // ---- Serde ----

    #[test]
    fn test_command_wire_format() {
        let json = serde_json::to_string(&PlayerCommand::Fire { slot: 1 }).unwrap();
        assert_eq!(json, r#"{"type":"Fire","slot":1}"#);
        let back: PlayerCommand = serde_json::from_str(r#"{"type":"Restart"}"#).unwrap();
        assert_eq!(back, PlayerCommand::Restart);
    }

    #[test]
    fn test_host_event_wire_format() {
        let ev: HostEvent =
            serde_json::from_str(r#"{"type":"Resize","width":640.0,"height":480.0}"#).unwrap();
        assert_eq!(
            ev,
            HostEvent::Resize {
                width: 640.0,
                height: 480.0
            }
        );
    }

    #[test]
    fn test_snapshot_default_serializes() {
        let snapshot = GameStateSnapshot {
            outcome: Some(MatchOutcome::GameOver {
                wave: 3,
                final_score: 700,
            }),
            events: vec![GameEvent::WaveCleared { wave: 3 }],
            ..Default::default()
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
        assert_eq!(back.mode, MatchMode::Menu);
    }
}
