//! Projects gallery with topic tabs

use crate::config::ProjectsSettings;
use crate::content::Project;
use std::fmt;
use tokio::time::Instant;
use tracing::debug;

/// Tabs of the gallery. Every tab except `All` selects one topic tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    React,
    NextJs,
    NodeJs,
    TypeScript,
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 5] = [
        ProjectFilter::All,
        ProjectFilter::React,
        ProjectFilter::NextJs,
        ProjectFilter::NodeJs,
        ProjectFilter::TypeScript,
    ];

    pub fn topic(&self) -> Option<&'static str> {
        match self {
            ProjectFilter::All => None,
            ProjectFilter::React => Some("react"),
            ProjectFilter::NextJs => Some("nextjs"),
            ProjectFilter::NodeJs => Some("nodejs"),
            ProjectFilter::TypeScript => Some("typescript"),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self.topic() {
            Some(topic) => project.has_topic(topic),
            None => true,
        }
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            ProjectFilter::All => "All",
            ProjectFilter::React => "React",
            ProjectFilter::NextJs => "Next.js",
            ProjectFilter::NodeJs => "Node.js",
            ProjectFilter::TypeScript => "TypeScript",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug)]
pub struct ProjectGallery {
    projects: Vec<Project>,
    filter: ProjectFilter,
    /// End of the simulated fetch
    ready_at: Instant,
}

impl ProjectGallery {
    pub fn new(projects: Vec<Project>, settings: &ProjectsSettings, now: Instant) -> Self {
        Self {
            projects,
            filter: ProjectFilter::All,
            ready_at: now + settings.load_delay(),
        }
    }

    pub fn is_loading(&self, now: Instant) -> bool {
        now < self.ready_at
    }

    pub fn filter(&self) -> ProjectFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: ProjectFilter) {
        if self.filter != filter {
            debug!("Project filter -> {}", filter);
            self.filter = filter;
        }
    }

    /// Projects under the active tab, none while still loading.
    pub fn visible(&self, now: Instant) -> Vec<&Project> {
        if self.is_loading(now) {
            return Vec::new();
        }
        self.projects
            .iter()
            .filter(|project| self.filter.matches(project))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::portfolio;
    use std::time::Duration;

    fn names(projects: Vec<&Project>) -> Vec<&str> {
        projects.into_iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn nothing_is_shown_while_loading() {
        let now = Instant::now();
        let gallery = ProjectGallery::new(portfolio::projects(), &ProjectsSettings::default(), now);

        assert!(gallery.is_loading(now + Duration::from_millis(999)));
        assert!(gallery.visible(now + Duration::from_millis(999)).is_empty());

        assert!(!gallery.is_loading(now + Duration::from_millis(1000)));
        assert_eq!(gallery.visible(now + Duration::from_millis(1000)).len(), 6);
    }

    #[test]
    fn tab_selects_projects_by_topic() {
        let now = Instant::now();
        let mut gallery = ProjectGallery::new(
            portfolio::projects(),
            &ProjectsSettings { load_delay_ms: 0 },
            now,
        );

        gallery.set_filter(ProjectFilter::NodeJs);
        assert_eq!(
            names(gallery.visible(now)),
            vec!["Task Management App", "API Gateway Service"]
        );

        gallery.set_filter(ProjectFilter::TypeScript);
        assert_eq!(names(gallery.visible(now)), vec!["E-Commerce Platform"]);

        gallery.set_filter(ProjectFilter::All);
        assert_eq!(gallery.visible(now).len(), 6);
    }

    #[test]
    fn every_tab_has_a_label() {
        let labels: Vec<String> = ProjectFilter::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["All", "React", "Next.js", "Node.js", "TypeScript"]);
    }
}
