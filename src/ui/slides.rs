//! Rendering of individual slide payloads

use eframe::egui::{self, RichText, Ui};

use super::common::UiColors;
use crate::content::{CodeSnippet, Experience, LeadershipActivity, LinkCard, Slide};

pub fn render_slide(ui: &mut Ui, slide: &Slide) {
    match slide {
        Slide::Experience(exp) => render_experience(ui, exp),
        Slide::Leadership(activity) => render_activity(ui, activity),
        Slide::Snippet(snippet) => render_snippet(ui, snippet),
        Slide::Link(link) => render_link(ui, link),
    }
}

fn badges(ui: &mut Ui, items: &[String]) {
    ui.horizontal_wrapped(|ui| {
        for item in items {
            ui.label(RichText::new(item).small().color(UiColors::ACCENT));
        }
    });
}

fn render_experience(ui: &mut Ui, exp: &Experience) {
    ui.horizontal(|ui| {
        ui.heading(&exp.position);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(&exp.period).color(UiColors::ACCENT));
        });
    });
    ui.label(RichText::new(&exp.company).strong());
    ui.add_space(6.0);
    ui.label(&exp.description);
    ui.add_space(6.0);

    ui.label(RichText::new("Technologies & Tools").strong());
    badges(ui, &exp.technologies);
    ui.add_space(6.0);

    ui.label(RichText::new("Key Responsibilities").strong());
    for item in &exp.responsibilities {
        ui.label(format!("• {}", item));
    }
}

fn render_activity(ui: &mut Ui, activity: &LeadershipActivity) {
    ui.horizontal(|ui| {
        ui.heading(&activity.title);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(activity.kind.to_string()).color(UiColors::ACCENT));
        });
    });
    ui.label(RichText::new(&activity.organization).strong());

    ui.horizontal(|ui| {
        ui.label(&activity.period);
        if let Some(location) = &activity.location {
            ui.label(format!("· {}", location));
        }
    });
    ui.add_space(6.0);
    ui.label(&activity.description);

    if let Some(impact) = &activity.impact {
        ui.add_space(4.0);
        ui.label(RichText::new(format!("Impact: {}", impact)).italics());
    }
    if !activity.skills.is_empty() {
        ui.add_space(4.0);
        badges(ui, &activity.skills);
    }
}

fn render_snippet(ui: &mut Ui, snippet: &CodeSnippet) {
    ui.horizontal(|ui| {
        ui.strong(&snippet.title);
        ui.monospace(snippet.language_label());
    });
    ui.label(RichText::new(&snippet.code).monospace());
}

fn render_link(ui: &mut Ui, link: &LinkCard) {
    ui.hyperlink_to(RichText::new(&link.title).heading(), &link.url);
    ui.label(&link.description);
}
