use crate::core::catalog::MetadataCatalog;
use crate::core::RepositoryRecord;

/// Number of cards shown on the page.
pub const TOP_PROJECTS: usize = 6;

/// Featured projects first, then by stars. The sort is stable, so equal keys keep
/// their fetch order.
pub fn rank_and_select(
    records: &[RepositoryRecord],
    catalog: &MetadataCatalog,
    limit: usize,
) -> Vec<RepositoryRecord> {
    let mut ranked: Vec<&RepositoryRecord> = records.iter().collect();
    ranked.sort_by(|a, b| {
        catalog
            .is_featured(&b.name)
            .cmp(&catalog.is_featured(&a.name))
            .then_with(|| b.stargazers_count.cmp(&a.stargazers_count))
    });

    ranked.into_iter().take(limit).cloned().collect()
}
