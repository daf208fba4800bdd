//! Static layout of the two screens: labels, ids and inline styles.

use artpad_core::Mode;

/// Menu heading text.
pub const MENU_TITLE: &str = "MENU";

/// Text of the link that opens the drawing screen.
pub const PLAY_LABEL: &str = "Play";

/// Text of the button that returns to the menu.
pub const BACK_LABEL: &str = "Back";

/// Mode panel heading.
pub const PANEL_TITLE: &str = "Mode";

/// Text of the clear button.
pub const CLEAR_LABEL: &str = "Clear";

/// Id given to the drawing canvas.
pub const CANVAS_ID: &str = "artpad-canvas";

pub(crate) const LAYOUT_STYLE: &str = "display: flex; width: 100%; height: 600px;";
pub(crate) const PANEL_STYLE: &str = "width: 200px; padding: 10px; border-right: 1px solid black;";
pub(crate) const STAGE_STYLE: &str =
    "flex: 1; display: flex; justify-content: center; align-items: center;";
pub(crate) const CANVAS_STYLE: &str = "border: 1px solid black;";

/// Button label for a mode.
#[must_use]
pub const fn mode_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Default => "Standard",
        Mode::Red => "Red",
        Mode::Blue => "Blue",
        Mode::Green => "Green",
        Mode::Dashed => "Dashed",
        Mode::Circle => "Circle",
        Mode::Square => "Square",
    }
}

/// The mode panel, top to bottom.
pub fn mode_buttons() -> impl Iterator<Item = (Mode, &'static str)> {
    Mode::ALL.into_iter().map(|mode| (mode, mode_label(mode)))
}
