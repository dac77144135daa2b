use crate::config::content::ContentConfig;
use crate::domain::model::{HomeLimits, Project, Service, SiteInfo, Stat, Testimonial};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Read-only site content, built once before the first request.
#[derive(Debug, Clone)]
pub struct ContentStore {
    site: SiteInfo,
    home: HomeLimits,
    services: Vec<Service>,
    projects: Vec<Project>,
    testimonials: Vec<Testimonial>,
    stats: Vec<Stat>,
}

impl ContentStore {
    /// 驗證後建立內容庫，任何錯誤都在啟動時失敗
    pub fn from_config(config: ContentConfig) -> Result<Self> {
        config.validate()?;

        let ContentConfig {
            site,
            home,
            services,
            projects,
            testimonials,
            stats,
        } = config;

        tracing::info!(
            services = services.len(),
            projects = projects.len(),
            featured = projects.iter().filter(|p| p.featured).count(),
            testimonials = testimonials.len(),
            stats = stats.len(),
            "📚 Content store loaded for {}",
            site.company_name
        );

        Ok(Self {
            site,
            home,
            services,
            projects,
            testimonials,
            stats,
        })
    }

    pub fn builtin() -> Result<Self> {
        Self::from_config(ContentConfig::builtin()?)
    }

    pub fn site(&self) -> &SiteInfo {
        &self.site
    }

    pub fn home_limits(&self) -> HomeLimits {
        self.home
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    pub fn stats(&self) -> &[Stat] {
        &self.stats
    }
}
