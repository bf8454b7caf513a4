//! Built-in portfolio content
//!
//! Hard-coded like the site it comes from. Each function returns a fresh
//! slide list for one carousel.

use super::{ActivityKind, CodeSnippet, Experience, LeadershipActivity, LinkCard, Project, Slide};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn experiences() -> Vec<Slide> {
    vec![
        Experience {
            company: "TechInnovate Solutions".to_string(),
            position: "Senior Full-Stack Developer".to_string(),
            period: "Jan 2022 - Present".to_string(),
            description: "Leading development of enterprise SaaS platforms for financial services clients.".to_string(),
            technologies: strings(&["React", "Next.js", "Node.js", "TypeScript", "PostgreSQL", "AWS"]),
            responsibilities: strings(&[
                "Architected and implemented scalable microservices architecture",
                "Led a team of 5 developers using Agile methodologies",
                "Optimized application performance, reducing load times by 40%",
                "Implemented CI/CD pipelines with GitHub Actions and AWS",
            ]),
        }
        .into(),
        Experience {
            company: "DataFlow Systems".to_string(),
            position: "Full-Stack Developer".to_string(),
            period: "Mar 2020 - Dec 2021".to_string(),
            description: "Developed data visualization and analytics platforms for business intelligence.".to_string(),
            technologies: strings(&["React", "Express.js", "MongoDB", "D3.js", "GraphQL", "Docker"]),
            responsibilities: strings(&[
                "Built responsive dashboards with real-time data visualization",
                "Developed RESTful and GraphQL APIs for data retrieval and manipulation",
                "Optimized database queries for large datasets",
            ]),
        }
        .into(),
        Experience {
            company: "WebSphere Innovations".to_string(),
            position: "Frontend Developer".to_string(),
            period: "Jun 2018 - Feb 2020".to_string(),
            description: "Created interactive web applications for e-commerce and media clients.".to_string(),
            technologies: strings(&["React", "Redux", "JavaScript", "SASS", "Webpack", "Jest"]),
            responsibilities: strings(&[
                "Developed responsive and accessible user interfaces",
                "Created reusable component libraries",
                "Wrote unit and integration tests",
            ]),
        }
        .into(),
    ]
}

pub fn leadership() -> Vec<Slide> {
    vec![
        LeadershipActivity {
            title: "Volunteer Software Developer".to_string(),
            organization: "Code for Good Philippines".to_string(),
            period: "2021 - Present".to_string(),
            kind: ActivityKind::Volunteer,
            description: "Developing web applications for non-profit organizations to help them manage their operations and reach more beneficiaries.".to_string(),
            impact: Some("Built platforms serving 500+ families in underserved communities".to_string()),
            location: Some("Manila, Philippines".to_string()),
            skills: strings(&["React", "Node.js", "MongoDB", "Community Outreach"]),
        }
        .into(),
        LeadershipActivity {
            title: "Outstanding Young Developer Award".to_string(),
            organization: "Philippine Software Industry Association".to_string(),
            period: "2023".to_string(),
            kind: ActivityKind::Award,
            description: "Recognized for contributions to open-source projects and mentoring emerging developers.".to_string(),
            impact: Some("Mentored 20+ junior developers through bootcamp programs".to_string()),
            location: None,
            skills: strings(&["Mentorship", "Open Source", "Leadership"]),
        }
        .into(),
        LeadershipActivity {
            title: "Tech Lead - Digital Literacy Program".to_string(),
            organization: "TechCorps Volunteers".to_string(),
            period: "2022 - Present".to_string(),
            kind: ActivityKind::Leadership,
            description: "Leading a team of volunteer developers building educational platforms that teach basic computer skills to senior citizens.".to_string(),
            impact: Some("Trained 200+ seniors in digital literacy across 5 communities".to_string()),
            location: Some("Metro Manila".to_string()),
            skills: strings(&["Team Leadership", "Educational Technology", "UX Design"]),
        }
        .into(),
        LeadershipActivity {
            title: "Open Source Maintainer".to_string(),
            organization: "GitHub Community".to_string(),
            period: "2020 - Present".to_string(),
            kind: ActivityKind::Community,
            description: "Maintainer of developer tools and educational resources for Filipino developers.".to_string(),
            impact: Some("Projects with 500+ stars and 50+ contributors".to_string()),
            location: None,
            skills: strings(&["Open Source", "Community Building", "Documentation"]),
        }
        .into(),
    ]
}

pub fn snippets() -> Vec<Slide> {
    vec![
        CodeSnippet {
            title: "Debounced search".to_string(),
            language: Some("typescript".to_string()),
            code: "export function debounce<T extends (...args: any[]) => void>(fn: T, ms: number) {\n  let t: ReturnType<typeof setTimeout>;\n  return (...args: Parameters<T>) => {\n    clearTimeout(t);\n    t = setTimeout(() => fn(...args), ms);\n  };\n}".to_string(),
        }
        .into(),
        CodeSnippet {
            title: "Cyclic index".to_string(),
            language: Some("rust".to_string()),
            code: "fn next(index: usize, len: usize) -> usize {\n    (index + 1) % len\n}".to_string(),
        }
        .into(),
        CodeSnippet {
            title: "Health check".to_string(),
            language: None,
            code: "curl -fsS http://localhost:8080/health".to_string(),
        }
        .into(),
    ]
}

pub fn links() -> Vec<Slide> {
    let cards = [
        ("GitHub", "https://github.com/marvinjameserosa", "Check out my code"),
        ("LinkedIn", "https://linkedin.com/in/marvinjameserosa", "Connect professionally"),
        ("Email Me", "mailto:contact@example.com", "Get in touch directly"),
        ("YouTube", "https://youtube.com/@username", "Watch my videos"),
        ("Resume / CV", "/cv.pdf", "Download my resume"),
    ];

    cards
        .iter()
        .map(|(title, url, description)| {
            LinkCard {
                title: title.to_string(),
                url: url.to_string(),
                description: description.to_string(),
            }
            .into()
        })
        .collect()
}

pub fn projects() -> Vec<Project> {
    let repos = [
        (
            "E-Commerce Platform",
            "A full-stack e-commerce platform with product management, cart functionality, and payment processing.",
            "ecommerce",
            "https://ecommerce-demo.vercel.app",
            &["react", "nextjs", "typescript", "prisma", "postgresql", "stripe"][..],
            "TypeScript",
        ),
        (
            "Task Management App",
            "A collaborative task management application with real-time updates and team workspaces.",
            "taskmanager",
            "https://taskmanager-demo.vercel.app",
            &["react", "nodejs", "mongodb", "websockets", "authentication"][..],
            "JavaScript",
        ),
        (
            "Developer Blog",
            "A technical blog platform with markdown support, code syntax highlighting, and comment system.",
            "devblog",
            "https://devblog-demo.vercel.app",
            &["nextjs", "mdx", "tailwindcss", "cms", "serverless"][..],
            "TypeScript",
        ),
        (
            "Real-time Chat Application",
            "A real-time messaging platform with private and group chats, file sharing, and notifications.",
            "chatapp",
            "https://chatapp-demo.vercel.app",
            &["react", "firebase", "websockets", "authentication", "notifications"][..],
            "JavaScript",
        ),
        (
            "Portfolio Generator",
            "A tool for developers to create customizable portfolio websites from templates and GitHub data.",
            "portfolio-gen",
            "https://portfolio-gen-demo.vercel.app",
            &["nextjs", "github-api", "tailwindcss", "templates", "customization"][..],
            "TypeScript",
        ),
        (
            "API Gateway Service",
            "A microservice gateway for routing, authentication, and rate limiting of backend services.",
            "api-gateway",
            "",
            &["nodejs", "express", "microservices", "authentication", "rate-limiting"][..],
            "TypeScript",
        ),
    ];

    repos
        .iter()
        .map(|(name, description, repo, homepage, topics, language)| Project {
            name: name.to_string(),
            description: description.to_string(),
            repo_url: format!("https://github.com/username/{}", repo),
            homepage: (!homepage.is_empty()).then(|| homepage.to_string()),
            topics: strings(topics),
            language: language.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_carousel_has_content() {
        assert_eq!(experiences().len(), 3);
        assert!(leadership().len() > 1);
        assert!(snippets().iter().all(|s| matches!(s, Slide::Snippet(_))));
        assert!(links().iter().all(|s| matches!(s, Slide::Link(_))));
    }

    #[test]
    fn gateway_has_no_demo() {
        let projects = projects();
        assert_eq!(projects.len(), 6);
        let gateway = projects.iter().find(|p| p.name == "API Gateway Service").unwrap();
        assert!(gateway.homepage.is_none());
        assert!(projects.iter().filter(|p| p.homepage.is_some()).count() == 5);
    }
}
