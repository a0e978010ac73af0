//! Unit tests for ct-core primitives.

#[cfg(test)]
mod ids {
    use crate::NodeId;

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "n7");
    }

    #[test]
    fn ordering_follows_inner_value() {
        assert!(NodeId(0) < NodeId(1));
    }
}

#[cfg(test)]
mod geom {
    use crate::{Bounds, Vec2};

    #[test]
    fn distance_is_euclidean() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn operators() {
        let mut v = Vec2::new(1.0, 2.0) + Vec2::new(3.0, 4.0);
        assert_eq!(v, Vec2::new(4.0, 6.0));
        v -= Vec2::new(1.0, 1.0);
        assert_eq!(v * 2.0, Vec2::new(6.0, 10.0));
        assert_eq!(-v, Vec2::new(-3.0, -5.0));
    }

    #[test]
    fn clamp_stays_inside_padding() {
        let b = Bounds::new(200.0, 100.0).with_padding(10.0);
        assert_eq!(b.clamp(Vec2::new(-50.0, 500.0)), Vec2::new(10.0, 90.0));
        assert!(b.contains(b.clamp(Vec2::new(1e9, -1e9))));
    }

    #[test]
    fn center_and_diagonal() {
        let b = Bounds::new(300.0, 400.0);
        assert_eq!(b.center(), Vec2::new(150.0, 200.0));
        assert_eq!(b.diagonal(), 500.0);
    }

    #[test]
    fn validate_rejects_degenerate_rectangles() {
        assert!(Bounds::new(800.0, 600.0).validate().is_ok());
        assert!(Bounds::new(60.0, 600.0).validate().is_err()); // 2 * 30 padding
        assert!(Bounds::new(f64::NAN, 600.0).validate().is_err());
        assert!(Bounds::new(800.0, 600.0).with_padding(-1.0).validate().is_err());
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(10) + 5, Tick(15));
        assert_eq!(Tick(10).next(), Tick(11));
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn since_saturates() {
        assert_eq!(Tick(3).since(Tick(10)), 0);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(4).to_string(), "T4");
    }
}

#[cfg(test)]
mod state {
    use crate::HealthState::{self, *};

    #[test]
    fn legal_transitions() {
        assert!(Healthy.can_become(Infected));
        assert!(Healthy.can_become(Aware));
        assert!(Infected.can_become(Recovered));
    }

    #[test]
    fn every_other_transition_is_illegal() {
        let legal = [(Healthy, Infected), (Healthy, Aware), (Infected, Recovered)];
        for from in HealthState::ALL {
            for to in HealthState::ALL {
                assert_eq!(
                    from.can_become(to),
                    legal.contains(&(from, to)),
                    "{from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn terminal_states() {
        assert!(Recovered.is_terminal());
        assert!(Aware.is_terminal());
        assert!(!Healthy.is_terminal());
        assert!(!Infected.is_terminal());
    }
}

#[cfg(test)]
mod node {
    use crate::{HealthState, Node, NodeId, Tick, Vec2};

    fn node() -> Node {
        Node::new(NodeId(0), Vec2::new(50.0, 50.0))
    }

    #[test]
    fn new_node_is_healthy_and_never_infected() {
        let n = node();
        assert_eq!(n.state, HealthState::Healthy);
        assert_eq!(n.infected_at, None);
        assert_eq!(n.degree(), 0);
    }

    #[test]
    fn infect_stamps_tick_once() {
        let mut n = node();
        assert!(n.infect(Tick(3)));
        assert_eq!(n.infected_at, Some(Tick(3)));
        assert!(!n.infect(Tick(4)));
        assert_eq!(n.infected_at, Some(Tick(3)));
    }

    #[test]
    fn healthy_cannot_recover_directly() {
        let mut n = node();
        assert!(!n.recover());
        assert_eq!(n.state, HealthState::Healthy);
    }

    #[test]
    fn infected_cannot_become_aware() {
        let mut n = node();
        n.infect(Tick(0));
        assert!(!n.make_aware());
        assert_eq!(n.state, HealthState::Infected);
    }

    #[test]
    fn aware_is_absorbing() {
        let mut n = node();
        assert!(n.make_aware());
        assert!(!n.infect(Tick(1)));
        assert!(!n.recover());
        assert_eq!(n.state, HealthState::Aware);
        assert_eq!(n.infected_at, None);
    }

    #[test]
    fn recovery_due_after_recovery_time() {
        let mut n = node();
        n.infect(Tick(2));
        assert!(!n.recovery_due(Tick(6), 5));
        assert!(n.recovery_due(Tick(7), 5));
    }
}

#[cfg(test)]
mod config {
    use crate::ContagionConfig;

    #[test]
    fn default_is_valid() {
        let cfg = ContagionConfig::default();
        assert_eq!(cfg.validated().unwrap(), cfg);
    }

    #[test]
    fn zero_nodes_rejected() {
        let cfg = ContagionConfig { node_count: 0, ..Default::default() };
        assert!(cfg.validated().is_err());
    }

    #[test]
    fn probability_out_of_range_rejected() {
        let cfg = ContagionConfig { spread_probability: 1.5, ..Default::default() };
        assert!(cfg.validated().is_err());
        let cfg = ContagionConfig { spread_probability: f64::NAN, ..Default::default() };
        assert!(cfg.validated().is_err());
    }

    #[test]
    fn negative_density_rejected() {
        let cfg = ContagionConfig { connection_density: -1.0, ..Default::default() };
        assert!(cfg.validated().is_err());
    }

    #[test]
    fn seeds_clamped_to_node_count() {
        let cfg = ContagionConfig { node_count: 5, initial_infected: 9, ..Default::default() };
        assert_eq!(cfg.validated().unwrap().initial_infected, 5);
    }

    #[test]
    fn zero_recovery_time_clamped() {
        let cfg = ContagionConfig { recovery_time: 0, ..Default::default() };
        assert_eq!(cfg.validated().unwrap().recovery_time, 1);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        assert!(!rng.gen_bool(f64::NAN));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SimRng::new(9);
        let mut v: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }
}
