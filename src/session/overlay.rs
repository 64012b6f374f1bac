//! Home-page overlays — the "No" button hover game, the explanation popup
//! and the pros/cons carousel popup.
//!
//! The first hover over "No" opens the explanation popup. Later hovers
//! only flip the button label to the affirmative string; leaving the button
//! flips it back. The popup's "Okay" hands off straight to the pros/cons
//! popup.

use serde::Serialize;

use crate::session::{step_back, step_forward};

pub const NO_LABEL: &str = "NO 💔";
pub const YES_LABEL: &str = "YESSS ❤️";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoverInteraction {
    pub hovered_once: bool,
    pub no_button_label: String,
}

impl Default for HoverInteraction {
    fn default() -> Self {
        Self {
            hovered_once: false,
            no_button_label: NO_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PopupState {
    pub hover_popup_visible: bool,
    pub pros_cons_popup_visible: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Carousel {
    pub current_slide: usize,
}

impl Carousel {
    pub fn next(&mut self, slide_count: usize) {
        self.current_slide = step_forward(self.current_slide, slide_count);
    }

    pub fn previous(&mut self, slide_count: usize) {
        self.current_slide = step_back(self.current_slide, slide_count);
    }

    /// `n / count`, 1-based.
    pub fn indicator(&self, slide_count: usize) -> String {
        format!("{} / {}", self.current_slide + 1, slide_count)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OverlayState {
    pub hover: HoverInteraction,
    pub popups: PopupState,
    pub carousel: Carousel,
}

impl OverlayState {
    pub fn on_no_button_enter(&mut self) {
        if !self.hover.hovered_once {
            self.popups.hover_popup_visible = true;
            self.hover.hovered_once = true;
        } else {
            self.hover.no_button_label = YES_LABEL.to_string();
        }
    }

    /// Label reset only; the popup and `hovered_once` are untouched.
    pub fn on_no_button_leave(&mut self) {
        if self.hover.hovered_once {
            self.hover.no_button_label = NO_LABEL.to_string();
        }
    }

    pub fn close_hover_popup(&mut self) {
        self.popups.hover_popup_visible = false;
        self.hover.no_button_label = NO_LABEL.to_string();
    }

    pub fn open_pros_cons_from_hover(&mut self) {
        self.popups.hover_popup_visible = false;
        self.popups.pros_cons_popup_visible = true;
    }

    pub fn close_pros_cons_popup(&mut self) {
        self.popups.pros_cons_popup_visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_hover_opens_popup_second_flips_label() {
        let mut o = OverlayState::default();
        o.on_no_button_enter();
        assert!(o.popups.hover_popup_visible);
        assert!(o.hover.hovered_once);
        assert_eq!(o.hover.no_button_label, NO_LABEL);

        o.on_no_button_enter();
        assert!(o.popups.hover_popup_visible);
        assert_eq!(o.hover.no_button_label, YES_LABEL);
    }

    #[test]
    fn leave_before_first_hover_does_nothing() {
        let mut o = OverlayState::default();
        o.on_no_button_leave();
        assert_eq!(o, OverlayState::default());
    }

    #[test]
    fn leave_resets_label_but_keeps_hovered_once() {
        let mut o = OverlayState::default();
        o.on_no_button_enter();
        o.close_hover_popup();
        o.on_no_button_enter();
        assert_eq!(o.hover.no_button_label, YES_LABEL);
        assert!(!o.popups.hover_popup_visible);

        o.on_no_button_leave();
        assert_eq!(o.hover.no_button_label, NO_LABEL);
        assert!(o.hover.hovered_once);
    }

    #[test]
    fn closed_popup_does_not_reopen_on_hover() {
        let mut o = OverlayState::default();
        o.on_no_button_enter();
        o.close_hover_popup();
        o.on_no_button_enter();
        o.on_no_button_enter();
        assert!(!o.popups.hover_popup_visible);
    }

    #[test]
    fn close_resets_label() {
        let mut o = OverlayState::default();
        o.on_no_button_enter();
        o.on_no_button_enter();
        o.close_hover_popup();
        assert!(!o.popups.hover_popup_visible);
        assert_eq!(o.hover.no_button_label, NO_LABEL);
    }

    #[test]
    fn okay_hands_off_to_pros_cons() {
        let mut o = OverlayState::default();
        o.on_no_button_enter();
        o.open_pros_cons_from_hover();
        assert!(!o.popups.hover_popup_visible);
        assert!(o.popups.pros_cons_popup_visible);

        o.close_pros_cons_popup();
        assert!(!o.popups.pros_cons_popup_visible);
        assert!(o.hover.hovered_once);
    }

    #[test]
    fn carousel_wraps_backwards_from_zero() {
        let mut c = Carousel::default();
        c.previous(4);
        assert_eq!(c.current_slide, 3);
        c.next(4);
        assert_eq!(c.current_slide, 0);
    }

    #[test]
    fn carousel_indicator_is_one_based() {
        let mut c = Carousel::default();
        assert_eq!(c.indicator(4), "1 / 4");
        c.next(4);
        c.next(4);
        assert_eq!(c.indicator(4), "3 / 4");
    }
}
