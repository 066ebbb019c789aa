#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::{check_population_size, check_speed_factor, ConfigError};
    use crate::events::SimEvent;
    use crate::state::PopulationCounts;
    use crate::types::{Position, SimTime, Velocity};

    // ---- Dominance ----

    #[test]
    fn test_dominance_cycle() {
        assert_eq!(Kind::Rock.predator(), Kind::Paper);
        assert_eq!(Kind::Paper.predator(), Kind::Scissors);
        assert_eq!(Kind::Scissors.predator(), Kind::Rock);

        for kind in Kind::ALL {
            assert_eq!(kind.predator().prey(), kind);
            assert_ne!(kind.predator(), kind);
        }
    }

    // ---- Geometry ----

    #[test]
    fn test_range_to() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.range_to(&b) - 5.0).abs() < 1e-10);
        assert!(a.range_to(&a).abs() < 1e-10);
    }

    #[test]
    fn test_velocity_scale() {
        let mut v = Velocity::new(1.0, -2.0);
        v.scale(1.2);
        assert!((v.x - 1.2).abs() < 1e-10);
        assert!((v.y + 2.4).abs() < 1e-10);
        assert!((v.speed() - (1.2f64 * 1.2 + 2.4 * 2.4).sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    // ---- Counts ----

    #[test]
    fn test_counts_accessors() {
        let mut counts = PopulationCounts::new(7, 3, 0);
        assert_eq!(counts.get(Kind::Rock), 7);
        assert_eq!(counts.get(Kind::Paper), 3);
        assert_eq!(counts.get(Kind::Scissors), 0);
        assert_eq!(counts.total(), 10);

        *counts.get_mut(Kind::Scissors) += 2;
        assert_eq!(counts.scissors, 2);
    }

    #[test]
    fn test_counts_overlay_text() {
        let counts = PopulationCounts::new(3, 0, 12);
        assert_eq!(counts.to_string(), "🪨 3   📄 0   ✂️ 12");
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(
            Verdict::Winner { kind: Kind::Paper }.to_string(),
            "paper wins 📄"
        );
        assert_eq!(Verdict::Draw.to_string(), "no winner, draw");
    }

    // ---- Validation ----

    #[test]
    fn test_population_size_gate() {
        assert_eq!(
            check_population_size(9),
            Err(ConfigError::PopulationTooSmall {
                requested: 9,
                min: MIN_POPULATION_SIZE
            })
        );
        assert_eq!(check_population_size(10), Ok(10));
        assert_eq!(check_population_size(500), Ok(500));
    }

    #[test]
    fn test_speed_factor_gate() {
        assert_eq!(check_speed_factor(SPEED_UP_FACTOR), Ok(1.2));
        assert!(check_speed_factor(0.0).is_err());
        assert!(check_speed_factor(-1.2).is_err());
        assert!(check_speed_factor(f64::NAN).is_err());
        assert!(check_speed_factor(f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::PopulationTooSmall {
            requested: 4,
            min: 10,
        };
        assert_eq!(err.to_string(), "population size must be at least 10, got 4");
    }

    // ---- Wire format ----

    /// Commands use an internally tagged representation.
    #[test]
    fn test_player_command_wire_format() {
        let json = serde_json::to_string(&PlayerCommand::SetPopulationCount { count: 20 }).unwrap();
        assert_eq!(json, r#"{"type":"SetPopulationCount","count":20}"#);

        let back: PlayerCommand = serde_json::from_str(r#"{"type":"Restart"}"#).unwrap();
        assert_eq!(back, PlayerCommand::Restart);
    }

    #[test]
    fn test_event_wire_format() {
        let event = SimEvent::RunDecided {
            verdict: Verdict::Winner { kind: Kind::Rock },
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: SimEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
