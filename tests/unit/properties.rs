//! Property tests for bounded edits and encoder steps.

use core::sync::atomic::{AtomicI32, Ordering};

use proptest::prelude::*;

use coop_door::config::units::Millis;
use coop_door::config::{EditableParameter, EncoderConfig, ParameterId, ParameterSnapshot, Parameters};
use coop_door::input::{EncoderGestures, GestureSource, InputEvent};

fn parameter_id() -> impl Strategy<Value = ParameterId> {
    (0..ParameterId::ALL.len()).prop_map(|i| ParameterId::ALL[i])
}

proptest! {
    /// Any sequence of nudges stays within bounds.
    #[test]
    fn prop_nudges_stay_in_bounds(
        id in parameter_id(),
        steps in prop::collection::vec(-3i32..=3, 0..64),
    ) {
        let b = id.bounds();
        let mut param = EditableParameter::for_id(id, id.default_value());
        for s in steps {
            param.nudge(s);
            prop_assert!(param.value() >= b.min && param.value() <= b.max);
        }
    }

    /// A single nudge moves by exactly one step unless a bound is hit.
    #[test]
    fn prop_nudge_moves_by_step(id in parameter_id(), start in -2_000i32..2_000, up in any::<bool>()) {
        let b = id.bounds();
        let mut param = EditableParameter::for_id(id, start);
        let before = param.value();
        let changed = param.nudge(if up { 1 } else { -1 });

        let unclamped = before + if up { b.step } else { -b.step };
        if (b.min..=b.max).contains(&unclamped) {
            prop_assert!(changed);
            prop_assert_eq!(param.value(), unclamped);
        } else {
            prop_assert_eq!(param.value(), unclamped.clamp(b.min, b.max));
        }
    }

    /// +1 then -1 restores the value unless the first step was clamped.
    #[test]
    fn prop_up_down_restores(id in parameter_id(), start in 0i32..1_024) {
        let b = id.bounds();
        let mut param = EditableParameter::for_id(id, start);
        let before = param.value();
        param.nudge(1);
        param.nudge(-1);
        if before + b.step <= b.max {
            prop_assert_eq!(param.value(), before);
        }
    }

    /// Any stored snapshot loads clamped.
    #[test]
    fn prop_loaded_snapshot_is_clamped(values in prop::array::uniform10(any::<i32>())) {
        let mut snapshot = ParameterSnapshot::default();
        for (id, v) in ParameterId::ALL.iter().zip(values) {
            snapshot.set(*id, v);
        }
        let params = Parameters::from_snapshot(&snapshot);
        for id in ParameterId::ALL {
            let b = id.bounds();
            prop_assert!(params.value(id) >= b.min && params.value(id) <= b.max);
        }
    }

    /// The encoder reports exactly one step per `divisor` detents.
    #[test]
    fn prop_encoder_step_count(origin in -1_000i32..1_000, delta in -200i32..200) {
        let counter = AtomicI32::new(origin);
        let mut encoder = EncoderGestures::new(&counter, &EncoderConfig::default());
        counter.store(origin + delta, Ordering::Relaxed);

        let mut net = 0;
        while let Some(InputEvent::Rotate(r)) = encoder.poll(Millis(0)) {
            net += r.sign();
        }
        let expected = (origin + delta).div_euclid(4) - origin.div_euclid(4);
        prop_assert_eq!(net, expected);
        prop_assert_eq!(encoder.poll(Millis(0)), None);
    }
}
