//! Generic input event types for cross-host compatibility.

/// Mouse button identification.
///
/// Embedding hosts map their native button codes to these values before
/// forwarding events to the annotator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (primary drawing button)
    Left,
    /// Right mouse button (cancel action)
    Right,
    /// Middle mouse button (currently unused)
    Middle,
}

impl MouseButton {
    /// Maps a W3C pointer-event button code to a button.
    ///
    /// Code 0 is the left button, 1 the middle button and 2 the right
    /// button. Returns `None` for auxiliary buttons (back/forward) so
    /// hosts can drop them.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Left),
            1 => Some(Self::Middle),
            2 => Some(Self::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_maps_standard_buttons() {
        assert_eq!(MouseButton::from_code(0), Some(MouseButton::Left));
        assert_eq!(MouseButton::from_code(1), Some(MouseButton::Middle));
        assert_eq!(MouseButton::from_code(2), Some(MouseButton::Right));
    }

    #[test]
    fn test_from_code_drops_auxiliary_buttons() {
        assert_eq!(MouseButton::from_code(3), None);
        assert_eq!(MouseButton::from_code(4), None);
    }
}
