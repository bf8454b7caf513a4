//! # UI Common Components and Utilities
//!
//! Shared section navigation state, the color palette and frame helpers used
//! by every view of the portfolio page.
//!
//! ## Why This Module Exists
//!
//! The page is assembled from several independent views: three carousel
//! views, the snippet list with its viewer window, the projects gallery and
//! the contact form. They all draw into the same scroll area and should look
//! like one page. This module keeps the pieces they share in one place:
//! - The [`Section`] list behind the navigation bar
//! - Frame construction for the cards every section is drawn in
//! - The [`UiColors`] palette
//!
//! ## Key Abstractions
//!
//! ### Section Navigation
//! [`Section`] is a plain enum, not a screen state machine. The portfolio is a
//! single page, so picking a section only records a scroll target; the next
//! frame scrolls that section's heading into view and clears the target.
//!
//! ### Cards
//! [`create_frame`] builds the bordered, rounded frame used for every card.
//! [`card_frame`] picks its fill from the active theme, since the dark fill of
//! [`UiColors::INNER_BG`] is unreadable under the light theme.
//!
//! ## Design Rationale
//!
//! egui is immediate mode: layout is rebuilt every frame from the current
//! state. Everything here is either a constant or a stateless constructor,
//! so the views can call it freely on each frame.

use eframe::egui::{self, Color32, Frame, Stroke};
use std::fmt;

/// Page sections reachable from the navigation bar.
///
/// The page is a single scroll area; selecting a section scrolls its heading
/// into view instead of switching screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Experience,
    Leadership,
    Snippets,
    Projects,
    Links,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Experience,
        Section::Leadership,
        Section::Snippets,
        Section::Projects,
        Section::Links,
        Section::Contact,
    ];
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Section::Experience => "Experience",
            Section::Leadership => "Leadership",
            Section::Snippets => "Code",
            Section::Projects => "Projects",
            Section::Links => "Links",
            Section::Contact => "Contact",
        };
        write!(f, "{}", label)
    }
}

/// Creates a styled frame with consistent visual parameters.
pub fn create_frame(bg_color: Color32, border_color: Color32) -> Frame {
    Frame::new()
        .stroke(Stroke::new(1.0, border_color))
        .fill(bg_color)
        .inner_margin(12)
        .outer_margin(4)
        .corner_radius(6)
}

/// Frame for a carousel card, picking the fill from the active theme.
pub fn card_frame(ui: &egui::Ui) -> Frame {
    let fill = if ui.visuals().dark_mode {
        UiColors::INNER_BG
    } else {
        ui.visuals().faint_bg_color
    };
    create_frame(fill, UiColors::BORDER)
}

/// Color palette of the page.
pub struct UiColors;

impl UiColors {
    /// Card background in dark mode (RGB: 25, 25, 25)
    pub const INNER_BG: Color32 = Color32::from_rgb(25, 25, 25);

    /// Border between cards (RGB: 60, 60, 60)
    pub const BORDER: Color32 = Color32::from_rgb(60, 60, 60);

    /// Current-slide indicator and badges
    pub const ACCENT: Color32 = Color32::from_rgb(90, 140, 240);

    /// Indicators of the other slides
    pub const MUTED: Color32 = Color32::from_rgb(110, 110, 110);

    /// "Copied" and "sent" confirmations
    pub const ACTIVE: Color32 = Color32::from_rgb(50, 200, 20);

    /// Rejected form input
    pub const ERROR: Color32 = Color32::from_rgb(220, 60, 60);
}
