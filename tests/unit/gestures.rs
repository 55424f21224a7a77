//! Unit tests for gesture classification against mocked pins.

use core::sync::atomic::{AtomicI32, Ordering};

use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as PinTransaction};

use coop_door::config::units::Millis;
use coop_door::config::{ButtonTiming, EncoderConfig};
use coop_door::input::{
    ButtonGestures, EncoderGestures, Events, GestureSource, InputEvent, Rotation,
};

/// Active-low button script: `true` means pressed.
fn script(levels: &[bool]) -> Vec<PinTransaction> {
    levels
        .iter()
        .map(|&pressed| PinTransaction::get(if pressed { State::Low } else { State::High }))
        .collect()
}

/// Poll once per `(time, expected)` step.
fn run<P: embedded_hal::digital::InputPin>(
    button: &mut ButtonGestures<P>,
    steps: &[(u32, Option<InputEvent>)],
) {
    for &(t, expected) in steps {
        assert_eq!(button.poll(Millis(t)), expected, "at t={}", t);
    }
}

#[test]
fn test_click_from_pin_levels() {
    let levels = script(&[false, true, false, false, false]);
    let mut pin = PinMock::new(&levels);
    let mut button = ButtonGestures::new(pin.clone(), ButtonTiming::default());

    run(
        &mut button,
        &[
            (0, None),
            (10, None),
            (100, None),
            (300, None),
            (500, Some(InputEvent::Click)),
        ],
    );
    pin.done();
}

#[test]
fn test_double_click_from_pin_levels() {
    let levels = script(&[true, false, true, false, false]);
    let mut pin = PinMock::new(&levels);
    let mut button = ButtonGestures::new(pin.clone(), ButtonTiming::default());

    run(
        &mut button,
        &[
            (0, None),
            (80, None),
            (200, None),
            (300, Some(InputEvent::DoubleClick)),
            // Nothing left over once the window closes.
            (1_000, None),
        ],
    );
    pin.done();
}

#[test]
fn test_long_press_inside_window_drops_pending_click() {
    let levels = script(&[true, false, true, true, false]);
    let mut pin = PinMock::new(&levels);
    let mut button = ButtonGestures::new(pin.clone(), ButtonTiming::default());

    run(
        &mut button,
        &[
            (0, None),
            (100, None),
            (300, None),
            (1_800, Some(InputEvent::LongPress)),
            (2_000, None),
        ],
    );
    pin.done();
}

#[test]
fn test_active_high_wiring() {
    let levels = [
        PinTransaction::get(State::High),
        PinTransaction::get(State::Low),
    ];
    let mut pin = PinMock::new(&levels);
    let timing = ButtonTiming {
        active_low: false,
        ..ButtonTiming::default().without_double_click()
    };
    let mut button = ButtonGestures::new(pin.clone(), timing);

    run(&mut button, &[(0, None), (100, Some(InputEvent::Click))]);
    pin.done();
}

#[test]
fn test_button_and_encoder_share_a_tick() {
    let levels = script(&[true, false]);
    let mut pin = PinMock::new(&levels);
    let counter = AtomicI32::new(0);

    let button = ButtonGestures::new(pin.clone(), ButtonTiming::default().without_double_click());
    let encoder = EncoderGestures::new(&counter, &EncoderConfig::default());
    let mut input = button.chain(encoder);

    let mut events = Events::new();
    input.poll_into(Millis(0), &mut events);
    assert!(events.is_empty());

    counter.store(-4, Ordering::Relaxed);
    input.poll_into(Millis(100), &mut events);
    assert_eq!(
        events.as_slice(),
        &[
            InputEvent::Click,
            InputEvent::Rotate(Rotation::CounterClockwise)
        ]
    );
    pin.done();
}
