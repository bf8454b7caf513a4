//! Carousel controller with statum typestate for the mount lifecycle
//!
//! ```text
//! Mounted ──(dispose)──► Disposed
//! ```
//!
//! A mounted controller owns the cursor, the autoplay flag and at most one
//! [`AutoplayTimer`]. Disposing consumes it; the disposed controller has no
//! mutating methods, so nothing can touch its state after teardown.
//!
//! Time is passed in explicitly (`now`). The controller never sleeps; the host
//! asks for [`CarouselController::next_tick`] and delivers it through
//! [`CarouselController::fire`] or [`CarouselController::poll`].

use crate::carousel::cursor::Cursor;
use crate::carousel::input::{CarouselInput, NavKey};
use crate::carousel::timer::{AutoplayTimer, TimerTick};
use crate::config::CarouselSettings;
use crate::content::Slide;
use statum::{machine, state};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, trace};

/// Lifecycle of a carousel controller
#[state]
#[derive(Debug, Clone)]
pub enum CarouselState {
    Mounted,  // Owning view is on screen, operations allowed
    Disposed, // View torn down, timer cancelled
}

/// Read-only view of a carousel, published to renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselSnapshot {
    pub name: String,
    pub index: Option<usize>,
    pub len: usize,
    pub autoplay: bool,
    pub timer_live: bool,
    pub slide: Option<Slide>,
}

impl CarouselSnapshot {
    pub fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            index: None,
            len: 0,
            autoplay: false,
            timer_live: false,
            slide: None,
        }
    }

    /// Previous/next buttons and indicators are only shown for N > 1.
    pub fn has_navigation(&self) -> bool {
        self.len > 1
    }

    pub fn position_label(&self) -> Option<String> {
        self.index.map(|index| format!("{} / {}", index + 1, self.len))
    }

    /// One flag per slide, `true` at the current index.
    pub fn indicators(&self) -> Vec<bool> {
        (0..self.len).map(|i| Some(i) == self.index).collect()
    }
}

#[machine]
#[derive(Debug)]
pub struct CarouselController<S: CarouselState> {
    name: String,
    slides: Vec<Slide>,
    cursor: Cursor,
    interval: Duration,
    autoplay: bool,
    timer: Option<AutoplayTimer>,
    generation: u64,
}

impl<S: CarouselState> CarouselController<S> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn current_index(&self) -> Option<usize> {
        self.cursor.index()
    }

    pub fn len(&self) -> usize {
        self.cursor.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cursor.is_empty()
    }
}

impl CarouselController<Mounted> {
    /// Mounts a controller over `slides`. The initial index is clamped into
    /// range and the autoplay timer starts if the settings ask for it.
    pub fn mount(
        name: impl Into<String>,
        slides: Vec<Slide>,
        settings: &CarouselSettings,
        now: Instant,
    ) -> Self {
        let name = name.into();
        let cursor = Cursor::new(slides.len(), settings.initial_index);
        info!(
            "Mounting carousel '{}' with {} slides (interval {}ms, autoplay {})",
            name,
            slides.len(),
            settings.interval_ms,
            settings.autoplay
        );

        let mut controller = Self::new(
            name,
            slides,
            cursor,
            settings.interval(),
            settings.autoplay,
            None, // timer
            0,    // generation
        );
        controller.reschedule_or_cancel(now);
        controller
    }

    /// Cancels the live timer, then starts a new one if autoplay applies.
    ///
    /// The single place that touches `timer`; every operation that changes
    /// the cursor or the autoplay flag goes through here.
    fn reschedule_or_cancel(&mut self, now: Instant) {
        if let Some(old) = self.timer.take() {
            trace!(
                "Carousel '{}': cancelled timer generation {}",
                self.name,
                old.generation()
            );
        }

        if self.autoplay && self.cursor.can_move() {
            self.generation += 1;
            let timer = AutoplayTimer::schedule(now, self.interval, self.generation);
            trace!(
                "Carousel '{}': scheduled timer generation {} in {:?}",
                self.name,
                self.generation,
                self.interval
            );
            self.timer = Some(timer);
        }
    }

    pub fn advance(&mut self, now: Instant) {
        if self.cursor.advance() {
            debug!("Carousel '{}' advanced to {:?}", self.name, self.cursor.index());
            self.reschedule_or_cancel(now);
        }
    }

    pub fn retreat(&mut self, now: Instant) {
        if self.cursor.retreat() {
            debug!("Carousel '{}' retreated to {:?}", self.name, self.cursor.index());
            self.reschedule_or_cancel(now);
        }
    }

    /// Jumps to `index`; out-of-range targets are ignored and leave the
    /// timer untouched.
    pub fn jump_to(&mut self, index: usize, now: Instant) {
        if self.cursor.jump_to(index) {
            debug!("Carousel '{}' jumped to {}", self.name, index);
            self.reschedule_or_cancel(now);
        } else {
            debug!(
                "Carousel '{}' ignored jump to {} (len {})",
                self.name,
                index,
                self.cursor.len()
            );
        }
    }

    /// Turning autoplay on starts the timer unless one is already running;
    /// turning it off cancels the live timer.
    pub fn set_autoplay(&mut self, enabled: bool, now: Instant) {
        if self.autoplay == enabled && (self.timer.is_some() || !enabled) {
            return;
        }
        debug!("Carousel '{}' autoplay -> {}", self.name, enabled);
        self.autoplay = enabled;
        self.reschedule_or_cancel(now);
    }

    pub fn handle_input(&mut self, input: CarouselInput, now: Instant) {
        match input {
            CarouselInput::PointerEnter => self.set_autoplay(false, now),
            CarouselInput::PointerLeave => self.set_autoplay(true, now),
            CarouselInput::Key(NavKey::Left) | CarouselInput::Previous => self.retreat(now),
            CarouselInput::Key(NavKey::Right) | CarouselInput::Next => self.advance(now),
            CarouselInput::Key(NavKey::Escape) => {}
            CarouselInput::Indicator(index) => self.jump_to(index, now),
        }
    }

    /// The tick the host should deliver next, if a timer is live.
    pub fn next_tick(&self) -> Option<TimerTick> {
        self.timer.as_ref().map(TimerTick::from)
    }

    /// Delivers the tick of timer `generation`. Ticks of a cancelled or
    /// replaced timer, and ticks delivered before the deadline, are ignored.
    /// Returns whether the cursor moved.
    pub fn fire(&mut self, generation: u64, now: Instant) -> bool {
        let live = self.timer;
        match live {
            Some(timer) if timer.generation() == generation && timer.is_due(now) => {
                trace!("Carousel '{}': timer generation {} fired", self.name, generation);
                let before = self.cursor.index();
                self.advance(now);
                before != self.cursor.index()
            }
            Some(timer) if timer.generation() == generation => {
                trace!(
                    "Carousel '{}': tick of generation {} is {:?} early",
                    self.name,
                    generation,
                    timer.remaining(now)
                );
                false
            }
            _ => {
                trace!(
                    "Carousel '{}': dropped stale tick of generation {}",
                    self.name,
                    generation
                );
                false
            }
        }
    }

    /// Fires the live timer if its deadline has passed. For hosts that drive
    /// the controller from a frame loop instead of a scheduler.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_tick() {
            Some(tick) => self.fire(tick.generation, now),
            None => false,
        }
    }

    /// Swaps the slide list. The cursor keeps its index if it still fits,
    /// otherwise it is clamped; an empty list makes the carousel inert.
    pub fn replace_slides(&mut self, slides: Vec<Slide>, now: Instant) {
        info!(
            "Carousel '{}' slides replaced ({} -> {})",
            self.name,
            self.slides.len(),
            slides.len()
        );
        self.cursor.resize(slides.len());
        self.slides = slides;
        self.reschedule_or_cancel(now);
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.cursor.index().and_then(|index| self.slides.get(index))
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay
    }

    pub fn has_live_timer(&self) -> bool {
        self.timer.is_some()
    }

    pub fn has_navigation(&self) -> bool {
        self.cursor.can_move()
    }

    pub fn position_label(&self) -> Option<String> {
        self.cursor.position_label()
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            name: self.name.clone(),
            index: self.cursor.index(),
            len: self.cursor.len(),
            autoplay: self.autoplay,
            timer_live: self.timer.is_some(),
            slide: self.current_slide().cloned(),
        }
    }

    /// Tears the controller down. The timer is cancelled before the
    /// transition, so no tick can outlive the mount.
    pub fn dispose(mut self) -> CarouselController<Disposed> {
        info!("Disposing carousel '{}'", self.name);
        self.timer = None;
        self.transition()
    }
}

impl CarouselController<Disposed> {
    /// A disposed controller never has a timer.
    pub fn has_live_timer(&self) -> bool {
        self.timer.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CodeSnippet, Slide};

    const INTERVAL: Duration = Duration::from_millis(6000);

    fn slides(n: usize) -> Vec<Slide> {
        (0..n)
            .map(|i| {
                CodeSnippet {
                    title: format!("slide {}", i),
                    language: None,
                    code: String::new(),
                }
                .into()
            })
            .collect()
    }

    fn settings() -> CarouselSettings {
        CarouselSettings::with_interval_ms(6000)
    }

    fn mount(n: usize, now: Instant) -> CarouselController<Mounted> {
        CarouselController::mount("test", slides(n), &settings(), now)
    }

    #[test]
    fn timer_fires_and_advances() {
        let t0 = Instant::now();
        let mut carousel = mount(3, t0);
        assert!(carousel.has_live_timer());

        assert!(!carousel.poll(t0 + INTERVAL - Duration::from_millis(1)));
        assert_eq!(carousel.current_index(), Some(0));

        assert!(carousel.poll(t0 + INTERVAL));
        assert_eq!(carousel.current_index(), Some(1));
        assert!(carousel.has_live_timer());
    }

    #[test]
    fn manual_retreat_resets_the_schedule() {
        let t0 = Instant::now();
        let mut carousel = mount(3, t0);
        carousel.poll(t0 + INTERVAL);
        assert_eq!(carousel.current_index(), Some(1));

        let manual = t0 + INTERVAL + Duration::from_millis(2500);
        carousel.retreat(manual);
        assert_eq!(carousel.current_index(), Some(0));

        let tick = carousel.next_tick().unwrap();
        assert_eq!(tick.deadline, manual + INTERVAL);

        // the old deadline (t0 + 2 * INTERVAL) no longer fires
        assert!(!carousel.poll(t0 + INTERVAL * 2));
        assert_eq!(carousel.current_index(), Some(0));
        assert!(carousel.poll(manual + INTERVAL));
        assert_eq!(carousel.current_index(), Some(1));
    }

    #[test]
    fn hover_pauses_and_leave_resumes_without_firing() {
        let t0 = Instant::now();
        let mut carousel = mount(3, t0);

        carousel.handle_input(CarouselInput::PointerEnter, t0 + Duration::from_secs(1));
        assert!(!carousel.is_autoplaying());
        assert!(!carousel.has_live_timer());
        assert!(!carousel.poll(t0 + Duration::from_secs(600)));
        assert_eq!(carousel.current_index(), Some(0));

        let leave = t0 + Duration::from_secs(700);
        carousel.handle_input(CarouselInput::PointerLeave, leave);
        assert!(carousel.is_autoplaying());
        assert!(!carousel.poll(leave));
        assert_eq!(carousel.current_index(), Some(0));
        assert_eq!(carousel.next_tick().unwrap().deadline, leave + INTERVAL);
    }

    #[test]
    fn manual_navigation_works_while_paused() {
        let t0 = Instant::now();
        let mut carousel = mount(3, t0);
        carousel.set_autoplay(false, t0);

        carousel.handle_input(CarouselInput::Next, t0);
        carousel.handle_input(CarouselInput::Key(NavKey::Right), t0);
        assert_eq!(carousel.current_index(), Some(2));
        carousel.handle_input(CarouselInput::Key(NavKey::Left), t0);
        assert_eq!(carousel.current_index(), Some(1));

        // keys never touch the autoplay flag
        assert!(!carousel.is_autoplaying());
        assert!(!carousel.has_live_timer());
    }

    #[test]
    fn enabling_autoplay_twice_keeps_the_running_timer() {
        let t0 = Instant::now();
        let mut carousel = mount(3, t0);
        let first = carousel.next_tick().unwrap();

        carousel.set_autoplay(true, t0 + Duration::from_secs(3));
        assert_eq!(carousel.next_tick(), Some(first));
    }

    #[test]
    fn stale_generation_is_ignored() {
        let t0 = Instant::now();
        let mut carousel = mount(4, t0);
        let stale = carousel.next_tick().unwrap();

        carousel.jump_to(2, t0 + Duration::from_secs(1));
        let live = carousel.next_tick().unwrap();
        assert_ne!(stale.generation, live.generation);

        assert!(!carousel.fire(stale.generation, t0 + Duration::from_secs(30)));
        assert_eq!(carousel.current_index(), Some(2));
    }

    #[test]
    fn early_tick_is_ignored() {
        let t0 = Instant::now();
        let mut carousel = mount(3, t0);
        let tick = carousel.next_tick().unwrap();
        assert!(!carousel.fire(tick.generation, t0 + Duration::from_millis(10)));
        assert_eq!(carousel.current_index(), Some(0));
    }

    #[test]
    fn out_of_range_indicator_leaves_cursor_and_timer() {
        let t0 = Instant::now();
        let mut carousel = mount(3, t0);
        let tick = carousel.next_tick();

        carousel.handle_input(CarouselInput::Indicator(3), t0 + Duration::from_secs(2));
        assert_eq!(carousel.current_index(), Some(0));
        assert_eq!(carousel.next_tick(), tick);
    }

    #[test]
    fn at_most_one_timer_across_interleavings() {
        let t0 = Instant::now();
        let mut carousel = mount(5, t0);
        let mut last_generation = carousel.next_tick().unwrap().generation;

        let inputs = [
            CarouselInput::Next,
            CarouselInput::PointerEnter,
            CarouselInput::Previous,
            CarouselInput::PointerLeave,
            CarouselInput::Indicator(4),
            CarouselInput::Indicator(9),
            CarouselInput::PointerLeave,
            CarouselInput::Key(NavKey::Right),
        ];

        for (step, input) in inputs.iter().enumerate() {
            let now = t0 + Duration::from_millis(700 * step as u64);
            carousel.handle_input(*input, now);
            carousel.poll(now);

            if let Some(tick) = carousel.next_tick() {
                // a new timer always replaces the old one
                assert!(tick.generation >= last_generation);
                last_generation = tick.generation;
            }
            assert_eq!(carousel.has_live_timer(), carousel.is_autoplaying());
        }

        let disposed = carousel.dispose();
        assert!(!disposed.has_live_timer());
    }

    #[test]
    fn single_slide_never_creates_a_timer() {
        let t0 = Instant::now();
        let mut carousel = mount(1, t0);
        assert!(!carousel.has_live_timer());
        assert!(!carousel.has_navigation());

        carousel.advance(t0);
        carousel.retreat(t0);
        carousel.set_autoplay(false, t0);
        carousel.set_autoplay(true, t0);
        assert_eq!(carousel.current_index(), Some(0));
        assert!(!carousel.has_live_timer());
        assert!(!carousel.poll(t0 + Duration::from_secs(3600)));
    }

    #[test]
    fn empty_list_is_inert() {
        let t0 = Instant::now();
        let mut carousel = mount(0, t0);

        carousel.advance(t0);
        carousel.retreat(t0);
        carousel.jump_to(0, t0);
        carousel.handle_input(CarouselInput::PointerLeave, t0);
        assert!(!carousel.poll(t0 + Duration::from_secs(60)));

        assert_eq!(carousel.current_index(), None);
        assert!(carousel.current_slide().is_none());
        assert!(!carousel.has_live_timer());

        let snapshot = carousel.snapshot();
        assert_eq!(snapshot.position_label(), None);
        assert!(snapshot.indicators().is_empty());
    }

    #[test]
    fn initial_index_is_clamped() {
        let t0 = Instant::now();
        let settings = CarouselSettings {
            initial_index: 10,
            ..settings()
        };
        let carousel = CarouselController::mount("clamped", slides(3), &settings, t0);
        assert_eq!(carousel.current_index(), Some(2));
    }

    #[test]
    fn manual_settings_mount_without_timer() {
        let t0 = Instant::now();
        let carousel = CarouselController::mount("manual", slides(3), &CarouselSettings::manual(), t0);
        assert!(!carousel.is_autoplaying());
        assert!(carousel.next_tick().is_none());
    }

    #[test]
    fn replacing_with_empty_list_degrades_to_inert() {
        let t0 = Instant::now();
        let mut carousel = mount(3, t0);
        carousel.jump_to(2, t0);

        carousel.replace_slides(Vec::new(), t0);
        assert_eq!(carousel.current_index(), None);
        assert!(!carousel.has_live_timer());

        carousel.replace_slides(slides(2), t0);
        assert_eq!(carousel.current_index(), Some(0));
        assert!(carousel.has_live_timer());
    }

    #[test]
    fn snapshot_reports_indicators_and_label() {
        let t0 = Instant::now();
        let mut carousel = mount(3, t0);
        carousel.jump_to(1, t0);

        let snapshot = carousel.snapshot();
        assert_eq!(snapshot.indicators(), vec![false, true, false]);
        assert_eq!(snapshot.position_label().as_deref(), Some("2 / 3"));
        assert!(snapshot.has_navigation());
        assert_eq!(snapshot.slide.as_ref().map(Slide::title), Some("slide 1"));
    }
}
