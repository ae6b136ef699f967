use serde::{Deserialize, Serialize};
use validator::Validate;

use super::project::validate_url;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContactInfo {
    #[validate(email)]
    pub email: String,

    #[validate(custom(function = "validate_url"))]
    pub github: String,

    #[validate(custom(function = "validate_url"))]
    pub linkedin: String,

    #[validate(custom(function = "validate_url"))]
    pub twitter: Option<String>,

    #[validate(custom(function = "validate_url"))]
    pub website: Option<String>,
}

impl ContactInfo {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Hero and résumé details of the site owner, taken from configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteProfile {
    pub site_title: String,
    pub owner_name: String,
    pub owner_title: String,
    pub owner_description: String,
    pub resume_url: String,
}

impl From<&crate::settings::AppConfig> for SiteProfile {
    fn from(config: &crate::settings::AppConfig) -> Self {
        SiteProfile {
            site_title: config.site_title.clone(),
            owner_name: config.owner_name.clone(),
            owner_title: config.owner_title.clone(),
            owner_description: config.owner_description.clone(),
            resume_url: config.resume_url.clone(),
        }
    }
}
