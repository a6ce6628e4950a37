//! Show/hide state of the `.overlayToHide` readouts

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverlayVisibility {
    hidden: bool,
}

impl OverlayVisibility {
    /// Flip visibility and return whether the overlays are now hidden
    pub fn toggle(&mut self) -> bool {
        self.hidden = !self.hidden;
        self.hidden
    }

    pub fn button_label(&self) -> &'static str {
        if self.hidden { "Open[A]" } else { "Close[A]" }
    }
}
