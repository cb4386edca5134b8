// Pure helpers shared by the event handlers and the canvas surface.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// End the session: pause audio and stop the frame loop.
    Stop,
    /// Stop when running, resume audio otherwise.
    Toggle,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "Escape" => Some(KeyAction::Stop),
        " " | "Spacebar" => Some(KeyAction::Toggle),
        _ => None,
    }
}

/// CSS color string for a trail disk.
#[inline]
pub fn css_rgba(rgb: [u8; 3], alpha: f32) -> String {
    let a = if alpha.is_finite() {
        alpha.clamp(0.0, 1.0)
    } else {
        0.0
    };
    format!("rgba({}, {}, {}, {:.3})", rgb[0], rgb[1], rgb[2], a)
}

#[inline]
pub fn px(value: f32) -> String {
    format!("{value:.1}px")
}
