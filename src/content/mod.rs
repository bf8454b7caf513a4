//! Slide payloads shown by the portfolio carousels
//!
//! The carousels never look inside a slide; they only index the list. The
//! types here exist so the views have something to render. The built-in
//! portfolio data lives in [`portfolio`].

pub mod portfolio;

use std::fmt;

/// A work-experience entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub period: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub responsibilities: Vec<String>,
}

/// Category of a leadership or community activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Volunteer,
    Leadership,
    Award,
    Community,
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            ActivityKind::Volunteer => "Volunteer",
            ActivityKind::Leadership => "Leadership",
            ActivityKind::Award => "Award",
            ActivityKind::Community => "Community",
        };
        write!(f, "{}", label)
    }
}

/// A leadership, volunteer, award or community activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadershipActivity {
    pub title: String,
    pub organization: String,
    pub period: String,
    pub kind: ActivityKind,
    pub description: String,
    pub impact: Option<String>,
    pub location: Option<String>,
    pub skills: Vec<String>,
}

/// A code snippet browsed in the snippet section and its viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSnippet {
    pub title: String,
    pub language: Option<String>,
    pub code: String,
}

impl CodeSnippet {
    /// Language label for the viewer header, `"Code"` when unknown.
    pub fn language_label(&self) -> &str {
        self.language.as_deref().unwrap_or("Code")
    }
}

/// An outbound link card (GitHub, LinkedIn, resume, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCard {
    pub title: String,
    pub url: String,
    pub description: String,
}

/// A repository shown in the projects gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub repo_url: String,
    /// Live demo, if the project has one
    pub homepage: Option<String>,
    /// Lowercase topic tags, matched by the gallery filter
    pub topics: Vec<String>,
    pub language: String,
}

impl Project {
    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics.iter().any(|t| t.eq_ignore_ascii_case(topic))
    }
}

/// One item of a carousel's slide list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slide {
    Experience(Experience),
    Leadership(LeadershipActivity),
    Snippet(CodeSnippet),
    Link(LinkCard),
}

impl Slide {
    /// Short heading used in logs and in the indicator tooltips.
    pub fn title(&self) -> &str {
        match self {
            Slide::Experience(exp) => &exp.position,
            Slide::Leadership(activity) => &activity.title,
            Slide::Snippet(snippet) => &snippet.title,
            Slide::Link(link) => &link.title,
        }
    }
}

impl From<Experience> for Slide {
    fn from(value: Experience) -> Self {
        Slide::Experience(value)
    }
}

impl From<LeadershipActivity> for Slide {
    fn from(value: LeadershipActivity) -> Self {
        Slide::Leadership(value)
    }
}

impl From<CodeSnippet> for Slide {
    fn from(value: CodeSnippet) -> Self {
        Slide::Snippet(value)
    }
}

impl From<LinkCard> for Slide {
    fn from(value: LinkCard) -> Self {
        Slide::Link(value)
    }
}
