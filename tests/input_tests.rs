// Host-side tests for the pure helpers behind the event handlers.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn escape_stops_and_space_toggles() {
    assert_eq!(action_for_key("Escape"), Some(KeyAction::Stop));
    assert_eq!(action_for_key(" "), Some(KeyAction::Toggle));
    assert_eq!(action_for_key("Spacebar"), Some(KeyAction::Toggle));
}

#[test]
fn other_keys_do_nothing() {
    for key in ["a", "Enter", "ArrowUp", "s", ""] {
        assert_eq!(action_for_key(key), None, "key {key:?}");
    }
}

#[test]
fn css_rgba_formats_and_clamps_alpha() {
    assert_eq!(css_rgba([126, 206, 244], 0.5), "rgba(126, 206, 244, 0.500)");
    assert_eq!(css_rgba([0, 0, 0], 1.7), "rgba(0, 0, 0, 1.000)");
    assert_eq!(css_rgba([0, 0, 0], -0.2), "rgba(0, 0, 0, 0.000)");
    assert_eq!(css_rgba([1, 2, 3], f32::NAN), "rgba(1, 2, 3, 0.000)");
}

#[test]
fn px_uses_one_decimal() {
    assert_eq!(px(12.0), "12.0px");
    assert_eq!(px(-3.26), "-3.3px");
}
