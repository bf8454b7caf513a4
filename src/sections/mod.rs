//! Page sections with their own timed state
//!
//! The carousels live in [`crate::carousel`]. The sections here have no
//! cursor, only a simulated delay: the projects gallery pretends to fetch its
//! repositories, and the contact form pretends to send a message.

pub mod contact;
pub mod projects;

pub use contact::{ContactError, ContactForm};
pub use projects::{ProjectFilter, ProjectGallery};
