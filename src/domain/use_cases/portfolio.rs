use crate::{
    entities::{
        contact::{ContactInfo, SiteProfile},
        project::Project,
        skill::{group_by_category, SkillGroup},
    },
    errors::AppError,
    repositories::portfolio::PortfolioRepository,
};

pub struct PortfolioHandler<R>
where
    R: PortfolioRepository,
{
    pub portfolio_repo: R,
    pub profile: SiteProfile,
}

impl<R> PortfolioHandler<R>
where
    R: PortfolioRepository,
{
    pub fn new(portfolio_repo: R, profile: SiteProfile) -> Self {
        PortfolioHandler { portfolio_repo, profile }
    }

    pub async fn projects(&self) -> Result<Vec<Project>, AppError> {
        self.portfolio_repo.get_projects().await
    }

    /// Skills grouped in the fixed category order
    pub async fn skill_groups(&self) -> Result<Vec<SkillGroup>, AppError> {
        let skills = self.portfolio_repo.get_skills().await?;
        Ok(group_by_category(&skills))
    }

    pub async fn contact(&self) -> Result<ContactInfo, AppError> {
        self.portfolio_repo.get_contact_info().await
    }

    pub fn profile(&self) -> &SiteProfile {
        &self.profile
    }
}
