use crate::core::catalog::MetadataCatalog;
use crate::core::{ProjectCard, ProjectMetadata, RepositoryRecord};
use htmlize::{escape_attribute, escape_text};

pub const DEFAULT_ICON: &str = "📁";
pub const DEFAULT_TAG: &str = "Code";
pub const MISSING_DESCRIPTION: &str = "No description available";

const GITHUB_ICON_PATH: &str = "M12 0C5.37 0 0 5.37 0 12c0 5.31 3.435 9.795 8.205 11.385.6.105.825-.255.825-.57 0-.285-.015-1.23-.015-2.235-3.015.555-3.795-.735-4.035-1.41-.135-.345-.72-1.41-1.23-1.695-.42-.225-1.02-.78-.015-.795.945-.015 1.62.87 1.845 1.23 1.08 1.815 2.805 1.305 3.495.99.105-.78.42-1.305.765-1.605-2.67-.3-5.46-1.335-5.46-5.925 0-1.305.465-2.385 1.23-3.225-.12-.3-.54-1.53.12-3.18 0 0 1.005-.315 3.3 1.23.96-.27 1.98-.405 3-.405s2.04.135 3 .405c2.295-1.56 3.3-1.23 3.3-1.23.66 1.65.24 2.88.12 3.18.765.84 1.23 1.905 1.23 3.225 0 4.605-2.805 5.625-5.475 5.925.435.375.81 1.095.81 2.22 0 1.605-.015 2.895-.015 3.3 0 .315.225.69.825.57A12.02 12.02 0 0024 12c0-6.63-5.37-12-12-12z";

/// Merges a listing entry with its catalog metadata, falling back to defaults
/// derived from the record itself.
pub fn build_card(record: &RepositoryRecord, catalog: &MetadataCatalog) -> ProjectCard {
    let meta = catalog
        .lookup(&record.name)
        .cloned()
        .unwrap_or_else(|| default_metadata(record));

    let description = record
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(MISSING_DESCRIPTION)
        .to_string();

    ProjectCard {
        name: record.name.clone(),
        icon: meta.icon,
        tags: meta.tags,
        featured: meta.featured,
        description,
        html_url: record.html_url.clone(),
        homepage: record.live_demo_url().map(str::to_string),
    }
}

fn default_metadata(record: &RepositoryRecord) -> ProjectMetadata {
    let tags = match record.language.as_deref() {
        Some(language) if !language.is_empty() => vec![language.to_string()],
        _ => vec![DEFAULT_TAG.to_string()],
    };

    ProjectMetadata {
        icon: DEFAULT_ICON.to_string(),
        tags,
        featured: false,
    }
}

impl ProjectCard {
    pub fn to_html(&self) -> String {
        let live_demo = match &self.homepage {
            Some(url) => format!(
                r#"
                    <a href="{}" target="_blank" rel="noopener" class="project-link" title="Live Demo">
                        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <path d="M18 13v6a2 2 0 01-2 2H5a2 2 0 01-2-2V8a2 2 0 012-2h6"/>
                            <polyline points="15 3 21 3 21 9"/>
                            <line x1="10" y1="14" x2="21" y2="3"/>
                        </svg>
                    </a>"#,
                escape_attribute(url)
            ),
            None => String::new(),
        };

        let tags: String = self
            .tags
            .iter()
            .map(|tag| format!(r#"<span class="project-tag">{}</span>"#, escape_text(tag)))
            .collect();

        format!(
            r#"
        <div class="project-card">
            <div class="project-header">
                <span class="project-icon">{icon}</span>
                <div class="project-links">
                    <a href="{html_url}" target="_blank" rel="noopener" class="project-link" title="View on GitHub">
                        <svg width="20" height="20" viewBox="0 0 24 24" fill="currentColor">
                            <path d="{github_path}"/>
                        </svg>
                    </a>{live_demo}
                </div>
            </div>
            <h3 class="project-title">{name}</h3>
            <p class="project-description">{description}</p>
            <div class="project-tags">{tags}</div>
        </div>
"#,
            icon = escape_text(&self.icon),
            html_url = escape_attribute(&self.html_url),
            github_path = GITHUB_ICON_PATH,
            live_demo = live_demo,
            name = escape_text(&self.name),
            description = escape_text(&self.description),
            tags = tags,
        )
    }
}
