use crate::domain::model::{Notice, Project, Service, SiteInfo, Stat, Testimonial};
use serde::Serialize;

/// Page-specific data gathered by a handler.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageBody<'a> {
    Home {
        services: &'a [Service],
        projects: Vec<&'a Project>,
        testimonials: &'a [Testimonial],
        stats: &'a [Stat],
    },
    Services {
        services: &'a [Service],
    },
    ServiceDetail {
        service: &'a Service,
        related_projects: Vec<&'a Project>,
    },
    Projects {
        projects: &'a [Project],
        stats: &'a [Stat],
    },
    ProjectDetail {
        project: &'a Project,
        related_projects: Vec<&'a Project>,
    },
    About {},
    Contact {},
}

/// Everything the presentation layer receives for one response.
#[derive(Debug, Clone, Serialize)]
pub struct PageContext<'a> {
    #[serde(flatten)]
    pub body: PageBody<'a>,
    pub site: &'a SiteInfo,
    pub current_year: i32,
    pub notice: Option<Notice>,
}

impl PageBody<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            PageBody::Home { .. } => "home",
            PageBody::Services { .. } => "services",
            PageBody::ServiceDetail { .. } => "service_detail",
            PageBody::Projects { .. } => "projects",
            PageBody::ProjectDetail { .. } => "project_detail",
            PageBody::About {} => "about",
            PageBody::Contact {} => "contact",
        }
    }
}
