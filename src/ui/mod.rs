//! # Portfolio User Interface Module
//!
//! eframe application that lays the portfolio out as one scrollable page:
//! a navigation bar on top, then the experience, leadership, code and links
//! sections, followed by the projects gallery, the links and the contact form.
//! Each carousel section is a [`CarouselView`] over a [`CarouselHandle`] whose
//! task was spawned before the window opened.
//!
//! ## Input routing
//!
//! - Pointer hover is tracked per carousel and forwarded as enter/leave, which
//!   pauses and resumes that carousel's autoplay.
//! - Arrow keys go to the code viewer while it is open (Escape closes it).
//!   Otherwise every carousel on the page receives them.
//!
//! ## Frame rate
//!
//! The carousels advance in their own tasks, and the gallery and contact form
//! wait out simulated delays, so the window repaints at the configured rate
//! even without user input.
//!
//! [`CarouselHandle`]: crate::carousel::CarouselHandle

pub mod carousel_view;
pub mod common;
pub mod slides;

use eframe::egui::{self, Button, RichText, Vec2};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::carousel::{CarouselInput, CodeViewer, NavKey};
use crate::config::PortfolioConfig;
use crate::content::Slide;
use crate::sections::{ContactForm, ProjectFilter, ProjectGallery};

use self::carousel_view::CarouselView;
use self::common::{card_frame, Section, UiColors};

/// Carousels mounted on the page.
pub struct PortfolioViews {
    pub experience: CarouselView,
    pub leadership: CarouselView,
    pub links: CarouselView,
}

impl PortfolioViews {
    fn all(&self) -> [&CarouselView; 3] {
        [&self.experience, &self.leadership, &self.links]
    }
}

pub struct PortfolioUI {
    config: PortfolioConfig,
    views: PortfolioViews,
    code_viewer: CodeViewer,
    projects: ProjectGallery,
    contact: ContactForm,
    /// Validation message of the last rejected submit
    contact_error: Option<String>,
    dark_theme: bool,
    /// Section to scroll to on the next frame
    scroll_target: Option<Section>,
}

impl PortfolioUI {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: PortfolioConfig,
        views: PortfolioViews,
        code_viewer: CodeViewer,
        projects: ProjectGallery,
    ) -> Self {
        let dark_theme = config.ui.dark_theme;
        cc.egui_ctx.set_theme(if dark_theme {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        let contact = ContactForm::new(config.contact.clone());

        Self {
            config,
            views,
            code_viewer,
            projects,
            contact,
            contact_error: None,
            dark_theme,
            scroll_target: None,
        }
    }

    fn route_keys(&mut self, keys: Vec<NavKey>, now: Instant) {
        for key in keys {
            let input = CarouselInput::Key(key);
            if self.code_viewer.handle_input(input, now) {
                debug!("Key {:?} handled by code viewer", key);
                continue;
            }
            if key == NavKey::Escape {
                continue;
            }
            for view in self.views.all() {
                view.send(input);
            }
        }
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.dark_theme = !self.dark_theme;
        info!("Theme switched (dark: {})", self.dark_theme);
        ctx.set_theme(if self.dark_theme {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });
    }

    fn section_heading(&mut self, ui: &mut egui::Ui, section: Section, title: &str) {
        ui.add_space(16.0);
        let response = ui.heading(title);
        if self.scroll_target == Some(section) {
            response.scroll_to_me(Some(egui::Align::TOP));
            self.scroll_target = None;
        }
        ui.separator();
    }

    fn render_snippet_list(&mut self, ui: &mut egui::Ui, now: Instant) {
        let mut open_at = None;

        card_frame(ui).show(ui, |ui| {
            ui.set_width(ui.available_width());
            if self.code_viewer.is_empty() {
                ui.label(RichText::new("No code snippets available").weak());
                return;
            }
            for (index, slide) in self.code_viewer.snippets().iter().enumerate() {
                if let Slide::Snippet(snippet) = slide {
                    ui.horizontal(|ui| {
                        ui.strong(&snippet.title);
                        ui.monospace(snippet.language_label());
                        if ui.button("View").clicked() {
                            open_at = Some(index);
                        }
                    });
                }
            }
        });

        if let Some(index) = open_at {
            self.code_viewer.open(index, now);
        }
    }

    fn render_projects(&mut self, ui: &mut egui::Ui, now: Instant) {
        ui.horizontal(|ui| {
            for filter in ProjectFilter::ALL {
                let selected = self.projects.filter() == filter;
                if ui.selectable_label(selected, filter.to_string()).clicked() {
                    self.projects.set_filter(filter);
                }
            }
        });

        if self.projects.is_loading(now) {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new("Loading projects...").weak());
            });
            return;
        }

        let visible = self.projects.visible(now);
        if visible.is_empty() {
            ui.label(RichText::new("No projects under this tab").weak());
        }
        for project in visible {
            card_frame(ui).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.strong(&project.name);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(&project.language).color(UiColors::ACCENT));
                    });
                });
                ui.label(&project.description);
                ui.horizontal_wrapped(|ui| {
                    for topic in &project.topics {
                        ui.label(RichText::new(topic).small().color(UiColors::MUTED));
                    }
                });
                ui.horizontal(|ui| {
                    ui.hyperlink_to("Code", &project.repo_url);
                    if let Some(homepage) = &project.homepage {
                        ui.hyperlink_to("Live demo", homepage);
                    }
                });
            });
        }
    }

    fn render_contact(&mut self, ui: &mut egui::Ui, now: Instant) {
        let mut submit = false;
        let form = &mut self.contact;

        card_frame(ui).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.add_enabled_ui(!form.is_sending(), |ui| {
                ui.label("Name");
                ui.add(egui::TextEdit::singleline(&mut form.name).hint_text("Your name"));
                ui.label("Email");
                ui.add(egui::TextEdit::singleline(&mut form.email).hint_text("Your email address"));
                ui.label("Message");
                ui.add(
                    egui::TextEdit::multiline(&mut form.message)
                        .hint_text("Your message")
                        .desired_rows(5),
                );
                ui.add_space(6.0);
                if ui.button(form.button_label()).clicked() {
                    submit = true;
                }
            });

            if form.is_sent(now) {
                ui.label(
                    RichText::new("✔ Message sent! Thank you for reaching out.")
                        .color(UiColors::ACTIVE),
                );
            }
        });

        if submit {
            if let Err(e) = self.contact.submit(now) {
                warn!("Contact form rejected: {}", e);
                self.contact_error = Some(e.to_string());
            } else {
                self.contact_error = None;
            }
        }
        if let Some(error) = &self.contact_error {
            ui.label(RichText::new(error).color(UiColors::ERROR));
        }
    }

    fn render_code_viewer(&mut self, ctx: &egui::Context, now: Instant) {
        if !self.code_viewer.is_open() {
            return;
        }

        let mut open = true;
        let mut inputs = Vec::new();
        let mut copy = false;
        let viewer = &self.code_viewer;

        egui::Window::new("Code snippet")
            .open(&mut open)
            .collapsible(false)
            .default_width(640.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if let Some(snippet) = viewer.current() {
                        ui.monospace(snippet.language_label());
                    }
                    if let Some(label) = viewer.position_label() {
                        ui.label(RichText::new(label).weak());
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if viewer.is_copied(now) {
                            ui.label(RichText::new("✔ Copied").color(UiColors::ACTIVE));
                        } else if ui.button("Copy").clicked() {
                            copy = true;
                        }
                    });
                });
                ui.separator();

                if let Some(snippet) = viewer.current() {
                    egui::ScrollArea::vertical().max_height(420.0).show(ui, |ui| {
                        ui.label(RichText::new(&snippet.code).monospace());
                    });
                }

                if viewer.has_navigation() {
                    ui.separator();
                    ui.horizontal(|ui| {
                        if ui.button("◀").clicked() {
                            inputs.push(CarouselInput::Previous);
                        }
                        if ui.button("▶").clicked() {
                            inputs.push(CarouselInput::Next);
                        }
                    });
                }
            });

        if copy {
            if let Some(code) = self.code_viewer.copy_current(now) {
                ctx.copy_text(code);
            }
        }
        for input in inputs {
            self.code_viewer.handle_input(input, now);
        }
        if !open {
            self.code_viewer.close();
        }
    }
}

impl eframe::App for PortfolioUI {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint_after(self.config.ui.frame_interval());
        let now = Instant::now();

        self.contact.poll(now);

        let keys = ctx.input(NavKey::pressed);
        self.route_keys(keys, now);

        egui::TopBottomPanel::top("navigation")
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    for section in Section::ALL {
                        let button = Button::new(section.to_string()).min_size(Vec2 { x: 96.0, y: 24.0 });
                        if ui.add(button).clicked() {
                            self.scroll_target = Some(section);
                        }
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let label = if self.dark_theme { "☀ Light" } else { "🌙 Dark" };
                        if ui.button(label).clicked() {
                            self.toggle_theme(ui.ctx());
                        }
                    });
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.section_heading(ui, Section::Experience, "Work Experience");
                self.views.experience.render(ui);

                self.section_heading(ui, Section::Leadership, "Leadership & Community");
                self.views.leadership.render(ui);

                self.section_heading(ui, Section::Snippets, "Code Snippets");
                self.render_snippet_list(ui, now);

                self.section_heading(ui, Section::Projects, "Projects");
                self.render_projects(ui, now);

                self.section_heading(ui, Section::Links, "Links");
                self.views.links.render(ui);

                self.section_heading(ui, Section::Contact, "Get In Touch");
                self.render_contact(ui, now);
            });
        });

        self.render_code_viewer(ctx, now);
    }
}
