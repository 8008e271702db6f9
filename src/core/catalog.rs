use crate::core::ProjectMetadata;
use std::collections::HashMap;

/// Static per-project metadata keyed by repository name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataCatalog {
    entries: HashMap<String, ProjectMetadata>,
}

impl MetadataCatalog {
    pub fn new(entries: HashMap<String, ProjectMetadata>) -> Self {
        Self { entries }
    }

    /// 網站內建的專案清單
    pub fn builtin() -> Self {
        let entries = [
            ("quantum-sim", "🔮", &["TypeScript", "Quantum", "Physics"][..], true),
            ("ai-trainer", "🧠", &["Next.js", "AI", "React"][..], true),
            ("pi-monitor", "📊", &["Python", "Raspberry Pi", "CLI"][..], true),
            ("netwatch", "🔍", &["Python", "Networking", "CLI"][..], true),
            ("job-board", "💼", &["Next.js", "Supabase", "Stripe"][..], true),
            ("sockstar-3d", "🧦", &["3D", "WebGL", "Games"][..], false),
        ]
        .into_iter()
        .map(|(name, icon, tags, featured)| {
            (
                name.to_string(),
                ProjectMetadata {
                    icon: icon.to_string(),
                    tags: tags.iter().map(|t| t.to_string()).collect(),
                    featured,
                },
            )
        })
        .collect();

        Self { entries }
    }

    pub fn lookup(&self, name: &str) -> Option<&ProjectMetadata> {
        self.entries.get(name)
    }

    pub fn is_featured(&self, name: &str) -> bool {
        self.lookup(name).is_some_and(|meta| meta.featured)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_flags() {
        let catalog = MetadataCatalog::builtin();

        assert_eq!(catalog.len(), 6);
        assert!(catalog.is_featured("netwatch"));
        assert!(!catalog.is_featured("sockstar-3d"));
        assert!(!catalog.is_featured("not-in-catalog"));
        assert_eq!(
            catalog.lookup("pi-monitor").unwrap().tags,
            vec!["Python", "Raspberry Pi", "CLI"]
        );
    }
}
