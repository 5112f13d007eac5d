//! The built-in gallery of showcased workflows.
//!
//! Each entry points at an exported document under the configured
//! workflows directory. The catalog doubles as the allow-list for the
//! document loader: only filenames listed here can ever be read.

/// Gallery metadata for one showcased workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowEntry {
    /// Stable identifier used in UI state.
    pub slug: &'static str,
    /// Card title.
    pub name: &'static str,
    /// Card description.
    pub description: &'static str,
    /// Document filename under the workflows directory.
    pub filename: &'static str,
    /// Topic tags shown on the card.
    pub tags: &'static [&'static str],
}

/// The showcased workflows, in gallery order.
pub const CATALOG: &[WorkflowEntry] = &[
    WorkflowEntry {
        slug: "figma-to-app",
        name: "From Figma to Real App",
        description: "AI-powered workflow that transforms Figma designs into \
                      fullstack applications using GPT-4 and automated code \
                      generation.",
        filename: "from_figma_to_real_app.json",
        tags: &["AI", "Figma", "Code Generation"],
    },
    WorkflowEntry {
        slug: "gitlab-cicd",
        name: "GitLab CI/CD Pipeline Automation",
        description: "Comprehensive CI/CD automation with SonarQube \
                      integration, Slack notifications, and intelligent \
                      pipeline control.",
        filename: "gitlab_cicd_pipeline.json",
        tags: &["CI/CD", "GitLab", "DevOps"],
    },
    WorkflowEntry {
        slug: "cloudflare-dns",
        name: "Cloudflare DNS AI Assistant",
        description: "AI-powered chat assistant for managing Cloudflare DNS \
                      records with natural language commands.",
        filename: "cloudflare_dns_ai.json",
        tags: &["AI", "DNS", "Cloudflare"],
    },
    WorkflowEntry {
        slug: "devops-infra",
        name: "DevOps Infrastructure Setup",
        description: "Automated provisioning of Docker, K3s, Jenkins & \
                      Grafana stack for Linux servers via SSH.",
        filename: "devops_infrastructure.json",
        tags: &["Infrastructure", "Docker", "Kubernetes"],
    },
];

/// Finds a catalog entry by slug.
#[must_use]
pub fn entry_by_slug(slug: &str) -> Option<&'static WorkflowEntry> {
    CATALOG.iter().find(|entry| entry.slug == slug)
}

/// Finds a catalog entry by document filename.
///
/// The document loader uses this as its allow-list check.
#[must_use]
pub fn entry_by_filename(filename: &str) -> Option<&'static WorkflowEntry> {
    CATALOG.iter().find(|entry| entry.filename == filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.slug, b.slug);
                assert_ne!(a.filename, b.filename);
            }
        }
    }

    #[test]
    fn lookup_by_slug() {
        let entry = entry_by_slug("gitlab-cicd").expect("entry");
        assert_eq!(entry.filename, "gitlab_cicd_pipeline.json");
        assert!(entry_by_slug("nope").is_none());
    }

    #[test]
    fn lookup_by_filename() {
        let entry = entry_by_filename("cloudflare_dns_ai.json").expect("entry");
        assert_eq!(entry.slug, "cloudflare-dns");
        assert!(entry_by_filename("../etc/passwd").is_none());
    }

    #[test]
    fn filenames_are_bare_json_names() {
        for entry in CATALOG {
            assert!(entry.filename.ends_with(".json"));
            assert!(!entry.filename.contains('/'));
            assert!(!entry.filename.contains(".."));
        }
    }
}
