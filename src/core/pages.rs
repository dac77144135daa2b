use crate::core::catalog::ContentStore;
use crate::core::lookup::{
    filter_featured, find_by_id, related_by_industry, related_by_tag_overlap, take,
};
use crate::domain::page::PageBody;
use crate::utils::error::{Result, SiteError};

pub const RELATED_PROJECTS_PER_SERVICE: usize = 3;
pub const RELATED_PROJECTS_PER_PROJECT: usize = 2;

pub fn home(store: &ContentStore) -> PageBody<'_> {
    let limits = store.home_limits();
    let mut projects = filter_featured(store.projects());
    projects.truncate(limits.featured_projects);

    PageBody::Home {
        services: take(store.services(), limits.services),
        projects,
        testimonials: take(store.testimonials(), limits.testimonials),
        stats: store.stats(),
    }
}

pub fn services(store: &ContentStore) -> PageBody<'_> {
    PageBody::Services {
        services: store.services(),
    }
}

pub fn service_detail<'a>(store: &'a ContentStore, service_id: &str) -> Result<PageBody<'a>> {
    let service = find_by_id(store.services(), service_id).ok_or_else(|| SiteError::NotFound {
        kind: "service",
        id: service_id.to_string(),
    })?;

    Ok(PageBody::ServiceDetail {
        service,
        related_projects: related_by_tag_overlap(
            service,
            store.projects(),
            RELATED_PROJECTS_PER_SERVICE,
        ),
    })
}

pub fn projects(store: &ContentStore) -> PageBody<'_> {
    PageBody::Projects {
        projects: store.projects(),
        stats: store.stats(),
    }
}

pub fn project_detail<'a>(store: &'a ContentStore, project_id: &str) -> Result<PageBody<'a>> {
    let project = find_by_id(store.projects(), project_id).ok_or_else(|| SiteError::NotFound {
        kind: "project",
        id: project_id.to_string(),
    })?;

    Ok(PageBody::ProjectDetail {
        project,
        related_projects: related_by_industry(
            project,
            store.projects(),
            RELATED_PROJECTS_PER_PROJECT,
        ),
    })
}

pub fn about() -> PageBody<'static> {
    PageBody::About {}
}

pub fn contact() -> PageBody<'static> {
    PageBody::Contact {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ContentStore {
        ContentStore::builtin().unwrap()
    }

    #[test]
    fn test_home_respects_limits() {
        let store = store();
        let limits = store.home_limits();

        match home(&store) {
            PageBody::Home {
                services,
                projects,
                testimonials,
                stats,
            } => {
                assert_eq!(services.len(), limits.services.min(store.services().len()));
                assert!(projects.len() <= limits.featured_projects);
                assert!(projects.iter().all(|p| p.featured));
                assert_eq!(projects[0].id, "ephi-audit-system");
                assert!(testimonials.len() <= limits.testimonials);
                assert_eq!(stats.len(), store.stats().len());
            }
            other => panic!("unexpected page {}", other.name()),
        }
    }

    #[test]
    fn test_every_service_resolves() {
        let store = store();
        for service in store.services() {
            match service_detail(&store, &service.id).unwrap() {
                PageBody::ServiceDetail {
                    service: found,
                    related_projects,
                } => {
                    assert_eq!(found.id, service.id);
                    assert!(related_projects.len() <= RELATED_PROJECTS_PER_SERVICE);
                }
                other => panic!("unexpected page {}", other.name()),
            }
        }
    }

    #[test]
    fn test_unknown_ids_are_not_found() {
        let store = store();
        assert!(matches!(
            service_detail(&store, "does-not-exist"),
            Err(SiteError::NotFound { kind: "service", .. })
        ));
        assert!(matches!(
            project_detail(&store, "does-not-exist"),
            Err(SiteError::NotFound { kind: "project", .. })
        ));
    }

    #[test]
    fn test_project_detail_relates_same_industry() {
        let store = store();
        match project_detail(&store, "ephi-audit-system").unwrap() {
            PageBody::ProjectDetail {
                project,
                related_projects,
            } => {
                assert_eq!(project.id, "ephi-audit-system");
                let ids: Vec<&str> = related_projects.iter().map(|p| p.id.as_str()).collect();
                assert_eq!(ids, vec!["hipaa-suspicious-login"]);
            }
            other => panic!("unexpected page {}", other.name()),
        }
    }
}
