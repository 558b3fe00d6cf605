use crate::constants::SPOTLIGHT_DEFAULT_COLOR;
use glam::Vec2;

pub const MOUSE_X_VAR: &str = "--mouse-x";
pub const MOUSE_Y_VAR: &str = "--mouse-y";
pub const COLOR_VAR: &str = "--spotlight-color";

/// Custom properties that place a card's radial highlight under the pointer.
/// `origin` is the card's top-left corner in the same (client) space as `pointer`.
pub fn spotlight_properties(
    pointer: Vec2,
    origin: Vec2,
    color: Option<&str>,
) -> [(&'static str, String); 3] {
    let local = pointer - origin;
    let color = color
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(SPOTLIGHT_DEFAULT_COLOR);
    [
        (MOUSE_X_VAR, format!("{}px", local.x)),
        (MOUSE_Y_VAR, format!("{}px", local.y)),
        (COLOR_VAR, color.to_string()),
    ]
}
