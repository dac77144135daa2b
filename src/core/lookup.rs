//! Pure queries over the content store. Nothing here allocates new records or
//! reorders them: results always follow the declared content order.

use crate::domain::model::{Identified, Project, Service};

/// First entity whose id equals `id`. Ids are unique after load validation;
/// if they were not, the earliest declaration would win.
pub fn find_by_id<'a, T: Identified>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

pub fn filter_featured(projects: &[Project]) -> Vec<&Project> {
    projects.iter().filter(|p| p.featured).collect()
}

/// The first `n` elements, or all of them when the slice is shorter.
pub fn take<T>(items: &[T], n: usize) -> &[T] {
    &items[..n.min(items.len())]
}

/// Projects sharing at least one technology tag with the service
/// (exact, case-sensitive match).
pub fn related_by_tag_overlap<'a>(
    service: &Service,
    projects: &'a [Project],
    limit: usize,
) -> Vec<&'a Project> {
    if service.tech_tags.is_empty() {
        return Vec::new();
    }

    projects
        .iter()
        .filter(|p| p.tech_stack.iter().any(|tag| service.tech_tags.contains(tag)))
        .take(limit)
        .collect()
}

/// Other projects in the same industry. The input project never relates to
/// itself, and a project without an industry relates to nothing.
pub fn related_by_industry<'a>(
    project: &Project,
    projects: &'a [Project],
    limit: usize,
) -> Vec<&'a Project> {
    let Some(industry) = project.industry.as_deref() else {
        return Vec::new();
    };

    projects
        .iter()
        .filter(|p| p.id != project.id)
        .filter(|p| p.industry.as_deref() == Some(industry))
        .take(limit)
        .collect()
}
