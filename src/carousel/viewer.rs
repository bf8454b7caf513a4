//! Modal viewer for code snippets
//!
//! Opening the viewer mounts a manual (non-autoplaying) carousel over the
//! snippets at the requested index; closing it disposes that carousel. While
//! closed the viewer ignores every input, so arrow keys reach the page's
//! carousels instead.

use crate::carousel::controller::{CarouselController, Mounted};
use crate::carousel::input::{CarouselInput, NavKey};
use crate::config::{CarouselSettings, CodeViewerSettings};
use crate::content::{CodeSnippet, Slide};
use tokio::time::Instant;
use tracing::{debug, info};

const VIEWER_NAME: &str = "code-viewer";

#[derive(Debug)]
pub struct CodeViewer {
    snippets: Vec<Slide>,
    settings: CodeViewerSettings,
    carousel: Option<CarouselController<Mounted>>,
    copied_until: Option<Instant>,
}

impl CodeViewer {
    /// Only [`Slide::Snippet`] items are kept.
    pub fn new(snippets: Vec<Slide>, settings: CodeViewerSettings) -> Self {
        let snippets = snippets
            .into_iter()
            .filter(|slide| matches!(slide, Slide::Snippet(_)))
            .collect();
        Self {
            snippets,
            settings,
            carousel: None,
            copied_until: None,
        }
    }

    pub fn snippets(&self) -> &[Slide] {
        &self.snippets
    }

    pub fn is_open(&self) -> bool {
        self.carousel.is_some()
    }

    /// Opens at `initial_index` (clamped). Re-opening an open viewer resets
    /// it to the requested index.
    pub fn open(&mut self, initial_index: usize, now: Instant) {
        self.close();
        let settings = CarouselSettings {
            initial_index,
            ..CarouselSettings::manual()
        };
        info!("Opening code viewer at snippet {}", initial_index);
        self.carousel = Some(CarouselController::mount(
            VIEWER_NAME,
            self.snippets.clone(),
            &settings,
            now,
        ));
    }

    pub fn close(&mut self) {
        if let Some(carousel) = self.carousel.take() {
            let disposed = carousel.dispose();
            self.copied_until = None;
            debug!("Code viewer closed at snippet {:?}", disposed.current_index());
        }
    }

    /// Arrows navigate and Escape closes while open; ignored while closed.
    /// Returns whether the input was consumed.
    pub fn handle_input(&mut self, input: CarouselInput, now: Instant) -> bool {
        if !self.is_open() {
            return false;
        }

        match input {
            CarouselInput::Key(NavKey::Escape) => self.close(),
            // no autoplay to pause in the viewer
            CarouselInput::PointerEnter | CarouselInput::PointerLeave => {}
            other => {
                if let Some(carousel) = self.carousel.as_mut() {
                    carousel.handle_input(other, now);
                }
            }
        }
        true
    }

    pub fn current(&self) -> Option<&CodeSnippet> {
        match self.carousel.as_ref()?.current_slide()? {
            Slide::Snippet(snippet) => Some(snippet),
            _ => None,
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        self.carousel.as_ref()?.current_index()
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    pub fn position_label(&self) -> Option<String> {
        self.carousel.as_ref()?.position_label()
    }

    pub fn has_navigation(&self) -> bool {
        self.carousel
            .as_ref()
            .is_some_and(|carousel| carousel.has_navigation())
    }

    /// Returns the code to put on the clipboard and raises the copied flag.
    pub fn copy_current(&mut self, now: Instant) -> Option<String> {
        let code = self.current()?.code.clone();
        self.copied_until = Some(now + self.settings.copy_feedback());
        Some(code)
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_until.is_some_and(|until| now < until)
    }
}
