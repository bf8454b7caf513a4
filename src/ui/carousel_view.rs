//! egui view around a running carousel
//!
//! Draws the latest [`CarouselSnapshot`](crate::carousel::CarouselSnapshot),
//! turns button clicks and hover changes into [`CarouselInput`]s and forwards
//! them to the carousel task without blocking the frame.

use eframe::egui::{self, RichText, Ui};
use tracing::warn;

use super::common::{card_frame, UiColors};
use super::slides::render_slide;
use crate::carousel::{CarouselHandle, CarouselInput};

pub struct CarouselView {
    handle: CarouselHandle,
    empty_message: String,
    /// Hover state seen in the previous frame
    hovered: bool,
}

impl CarouselView {
    pub fn new(handle: CarouselHandle, empty_message: impl Into<String>) -> Self {
        Self {
            handle,
            empty_message: empty_message.into(),
            hovered: false,
        }
    }

    pub fn send(&self, input: CarouselInput) {
        if let Err(e) = self.handle.try_send(input.into()) {
            warn!("Dropped {:?} for carousel '{}': {}", input, self.handle.name(), e);
        }
    }

    pub fn render(&mut self, ui: &mut Ui) {
        let snapshot = self.handle.snapshot();
        let mut inputs = Vec::new();

        let response = card_frame(ui)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                match &snapshot.slide {
                    Some(slide) => render_slide(ui, slide),
                    None => {
                        ui.label(RichText::new(&self.empty_message).weak());
                        return;
                    }
                }

                if !snapshot.has_navigation() {
                    return;
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("◀ Previous").clicked() {
                        inputs.push(CarouselInput::Previous);
                    }

                    for (index, active) in snapshot.indicators().into_iter().enumerate() {
                        let (dot, color) = if active {
                            ("●", UiColors::ACCENT)
                        } else {
                            ("○", UiColors::MUTED)
                        };
                        let dot = ui
                            .add(egui::Button::new(RichText::new(dot).color(color)).frame(false))
                            .on_hover_text(format!("Go to slide {}", index + 1));
                        if dot.clicked() {
                            inputs.push(CarouselInput::Indicator(index));
                        }
                    }

                    if ui.button("Next ▶").clicked() {
                        inputs.push(CarouselInput::Next);
                    }

                    if let Some(label) = snapshot.position_label() {
                        ui.label(RichText::new(label).small().weak());
                    }
                    if !snapshot.autoplay {
                        ui.label(RichText::new("paused").small().weak());
                    }
                });
            })
            .response;

        let hovered = response.contains_pointer();
        if hovered != self.hovered {
            self.hovered = hovered;
            inputs.push(if hovered {
                CarouselInput::PointerEnter
            } else {
                CarouselInput::PointerLeave
            });
        }

        for input in inputs {
            self.send(input);
        }
    }
}
