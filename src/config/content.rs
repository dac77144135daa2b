use crate::domain::model::{HomeLimits, Project, Service, SiteInfo, Stat, Testimonial};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{
    first_duplicate, validate_non_empty_string, validate_range, validate_slug, validate_url,
    Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const BUILTIN_CONTENT: &str = include_str!("../../content/site.toml");

/// 網站內容設定，對應一份 TOML 內容檔
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    pub site: SiteInfo,
    #[serde(default)]
    pub home: HomeLimits,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

impl ContentConfig {
    /// 內建的正式內容
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CONTENT)
    }

    /// 從 TOML 檔案載入內容
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析內容，環境變數只替換 [site] 區塊
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Self =
            toml::from_str(content).map_err(|e| SiteError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;

        config.site.substitute_env_vars()?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${CONTACT_EMAIL})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SiteError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl SiteInfo {
    fn substitute_env_vars(&mut self) -> Result<()> {
        for value in [&mut self.company_name, &mut self.tagline, &mut self.email] {
            *value = ContentConfig::substitute_env_vars(value)?;
        }
        for value in [&mut self.linkedin, &mut self.phone].into_iter().flatten() {
            *value = ContentConfig::substitute_env_vars(value)?;
        }
        Ok(())
    }
}

impl Validate for ContentConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("site.company_name", &self.site.company_name)?;
        if let Some(linkedin) = &self.site.linkedin {
            validate_url("site.linkedin", linkedin)?;
        }

        for service in &self.services {
            validate_slug("services.id", &service.id)?;
            validate_non_empty_string(&format!("services.{}.title", service.id), &service.title)?;
        }
        if let Some(dup) = first_duplicate(self.services.iter().map(|s| s.id.as_str())) {
            return Err(SiteError::ContentError {
                message: format!("duplicate service id '{}'", dup),
            });
        }

        for project in &self.projects {
            validate_slug("projects.id", &project.id)?;
            validate_non_empty_string(&format!("projects.{}.title", project.id), &project.title)?;
        }
        if let Some(dup) = first_duplicate(self.projects.iter().map(|p| p.id.as_str())) {
            return Err(SiteError::ContentError {
                message: format!("duplicate project id '{}'", dup),
            });
        }

        for testimonial in &self.testimonials {
            if let Some(rating) = testimonial.rating {
                validate_range("testimonials.rating", rating, 1, 5)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL: &str = r#"
[site]
company_name = "Test Co"
tagline = "We test"
email = "hello@test.example"

[[services]]
id = "apex-dev"
title = "Apex Development"
icon = "A"
short_description = "short"
full_description = "full"
ideal_for = "everyone"
tech_tags = ["Apex", "LWC"]

[[projects]]
id = "audit"
title = "Audit"
client = "Clinic"
industry = "Healthcare"
tagline = "t"
image_placeholder = "P"
problem = "p"
solution = "s"
tech_stack = ["Apex"]
featured = true
"#;

    #[test]
    fn test_parse_minimal_content() {
        let config = ContentConfig::from_toml_str(MINIMAL).unwrap();

        assert_eq!(config.site.company_name, "Test Co");
        assert_eq!(config.home, HomeLimits::default());
        assert_eq!(config.services.len(), 1);
        assert!(config.services[0].deliverables.is_empty());
        assert_eq!(config.projects[0].industry.as_deref(), Some("Healthcare"));
        assert!(config.testimonials.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builtin_content_is_valid() {
        let config = ContentConfig::builtin().unwrap();
        assert!(config.validate().is_ok());
        assert!(config.services.len() >= 4);
        assert!(config.projects.iter().any(|p| p.featured));
        assert!(config.projects.iter().any(|p| !p.featured));
        assert!(!config.stats.is_empty());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("AFRAME_TEST_CONTACT_EMAIL", "sales@test.example");

        let content = MINIMAL.replace("hello@test.example", "${AFRAME_TEST_CONTACT_EMAIL}");
        let config = ContentConfig::from_toml_str(&content).unwrap();
        assert_eq!(config.site.email, "sales@test.example");

        std::env::remove_var("AFRAME_TEST_CONTACT_EMAIL");
    }

    #[test]
    fn test_env_vars_only_substituted_in_site_section() {
        std::env::set_var("AFRAME_TEST_SITE_PHONE", "+1 555 0100");

        let content = MINIMAL
            .replace(
                "email = \"hello@test.example\"",
                "email = \"hello@test.example\"\nphone = \"${AFRAME_TEST_SITE_PHONE}\"",
            )
            .replace(
                "full_description = \"full\"",
                "full_description = \"Call ${AFRAME_TEST_SITE_PHONE}\"",
            );
        let config = ContentConfig::from_toml_str(&content).unwrap();

        assert_eq!(config.site.phone.as_deref(), Some("+1 555 0100"));
        assert_eq!(
            config.services[0].full_description,
            "Call ${AFRAME_TEST_SITE_PHONE}"
        );

        std::env::remove_var("AFRAME_TEST_SITE_PHONE");
    }

    #[test]
    fn test_unknown_env_var_kept_verbatim() {
        let content = MINIMAL.replace("We test", "${AFRAME_TEST_DEFINITELY_UNSET}");
        let config = ContentConfig::from_toml_str(&content).unwrap();
        assert_eq!(config.site.tagline, "${AFRAME_TEST_DEFINITELY_UNSET}");
    }

    #[test]
    fn test_duplicate_service_id_rejected() {
        let mut config = ContentConfig::from_toml_str(MINIMAL).unwrap();
        let copy = config.services[0].clone();
        config.services.push(copy);

        let err = config.validate().unwrap_err();
        assert!(matches!(err, SiteError::ContentError { .. }));
        assert!(err.to_string().contains("apex-dev"));
    }

    #[test]
    fn test_duplicate_project_id_rejected() {
        let mut config = ContentConfig::from_toml_str(MINIMAL).unwrap();
        let copy = config.projects[0].clone();
        config.projects.push(copy);
        assert!(matches!(
            config.validate(),
            Err(SiteError::ContentError { .. })
        ));
    }

    #[test]
    fn test_non_slug_id_rejected() {
        let content = MINIMAL.replace("id = \"audit\"", "id = \"Audit Project\"");
        let config = ContentConfig::from_toml_str(&content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(SiteError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let content = format!(
            "{}\n[[testimonials]]\nquote = \"q\"\nauthor = \"a\"\ntitle = \"t\"\ncompany = \"c\"\nrating = 9\n",
            MINIMAL
        );
        let config = ContentConfig::from_toml_str(&content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_site_section_is_parse_error() {
        let err = ContentConfig::from_toml_str("[[services]]\nid = \"x\"\n").unwrap_err();
        assert!(matches!(err, SiteError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_content_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(MINIMAL.as_bytes()).unwrap();

        let config = ContentConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.projects[0].id, "audit");
    }
}
