use async_trait::async_trait;

use crate::{
    entities::{contact::ContactInfo, project::Project, skill::Skill},
    errors::AppError,
    repositories::static_repo::StaticContentRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortfolioRepository: Sync + Send {
    async fn get_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn get_skills(&self) -> Result<Vec<Skill>, AppError>;
    async fn get_contact_info(&self) -> Result<ContactInfo, AppError>;
}

#[async_trait]
impl PortfolioRepository for StaticContentRepo {
    async fn get_projects(&self) -> Result<Vec<Project>, AppError> {
        Ok(self.catalog.projects.clone())
    }

    async fn get_skills(&self) -> Result<Vec<Skill>, AppError> {
        Ok(self.catalog.skills.clone())
    }

    async fn get_contact_info(&self) -> Result<ContactInfo, AppError> {
        Ok(self.catalog.contact.clone())
    }
}
