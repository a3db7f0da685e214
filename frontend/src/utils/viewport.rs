use crate::config::MOBILE_BREAKPOINT_PX;

pub fn is_mobile(width: f64) -> bool {
    width <= MOBILE_BREAKPOINT_PX
}

/// Visibility of the collapsible payment instructions and their toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstructionsLayout {
    pub instructions_visible: bool,
    pub toggle_visible: bool,
}

impl InstructionsLayout {
    /// Initial layout: collapsed on mobile, fully shown on desktop.
    pub fn initial(width: f64) -> Self {
        Self {
            instructions_visible: !is_mobile(width),
            toggle_visible: is_mobile(width),
        }
    }

    /// Layout after a resize. Desktop forces the instructions open; going
    /// back to mobile only brings the toggle back and keeps what the user chose.
    pub fn after_resize(self, width: f64) -> Self {
        if is_mobile(width) {
            Self {
                toggle_visible: true,
                ..self
            }
        } else {
            Self {
                instructions_visible: true,
                toggle_visible: false,
            }
        }
    }

    pub fn toggled(self) -> Self {
        Self {
            instructions_visible: !self.instructions_visible,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        assert!(is_mobile(768.0));
        assert!(is_mobile(375.0));
        assert!(!is_mobile(769.0));
    }

    #[test]
    fn mobile_starts_collapsed() {
        let layout = InstructionsLayout::initial(400.0);
        assert!(!layout.instructions_visible);
        assert!(layout.toggle_visible);
        assert!(layout.toggled().instructions_visible);
    }

    #[test]
    fn desktop_forces_instructions_open() {
        let collapsed = InstructionsLayout::initial(400.0);
        let wide = collapsed.after_resize(1280.0);
        assert!(wide.instructions_visible);
        assert!(!wide.toggle_visible);
    }

    #[test]
    fn narrowing_again_keeps_instructions_open() {
        let layout = InstructionsLayout::initial(1280.0).after_resize(600.0);
        assert!(layout.instructions_visible);
        assert!(layout.toggle_visible);
    }
}
