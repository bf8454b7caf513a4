//! Carousel subsystem
//!
//! Cyclic slide navigation with a timer-driven autoplay that pauses while the
//! pointer is over the carousel.
//!
//! 1. [`cursor`] - index arithmetic over a fixed-length list
//! 2. [`timer`] - the single autoplay deadline a controller may own
//! 3. [`controller`] - cursor + autoplay flag + timer, with a mount lifecycle
//! 4. [`handle`] - a controller running in its own tokio task
//! 5. [`viewer`] - the code-snippet modal built on a manual controller
//!
//! # Architecture
//!
//! ```text
//! UI input ──► CarouselHandle ──► carousel task ──► CarouselSnapshot ──► UI
//!                                  (controller + sleep_until)
//! ```

pub mod controller;
pub mod cursor;
pub mod error;
pub mod handle;
pub mod input;
pub mod timer;
pub mod viewer;

pub use controller::{CarouselController, CarouselSnapshot, CarouselState, Disposed, Mounted};
pub use cursor::Cursor;
pub use error::CarouselError;
pub use handle::{CarouselCommand, CarouselHandle};
pub use input::{CarouselInput, NavKey};
pub use timer::{AutoplayTimer, TimerTick};
pub use viewer::CodeViewer;
