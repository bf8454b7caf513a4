//! UI events a carousel reacts to

use eframe::egui;

/// Keys with a meaning for carousels and the code viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    Left,
    Right,
    Escape,
}

impl NavKey {
    /// Maps an egui key, `None` for keys carousels ignore.
    pub fn from_egui(key: egui::Key) -> Option<Self> {
        match key {
            egui::Key::ArrowLeft => Some(NavKey::Left),
            egui::Key::ArrowRight => Some(NavKey::Right),
            egui::Key::Escape => Some(NavKey::Escape),
            _ => None,
        }
    }

    /// Collects the navigation keys pressed during the current egui frame.
    pub fn pressed(input: &egui::InputState) -> Vec<Self> {
        input
            .events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key, pressed: true, ..
                } => Self::from_egui(*key),
                _ => None,
            })
            .collect()
    }
}

/// An input event routed to one carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselInput {
    /// Pointer entered the carousel's hit area
    PointerEnter,
    /// Pointer left the carousel's hit area
    PointerLeave,
    Key(NavKey),
    /// "Previous" button
    Previous,
    /// "Next" button
    Next,
    /// Click on the indicator dot for a slide
    Indicator(usize),
}
