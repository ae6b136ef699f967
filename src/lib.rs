use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod logging;

pub use domain::{entities, pages, shortcuts, use_cases};
pub use interfaces::{handlers, repositories, routes, views};
pub use infrastructure::{content, utils};

use content::ContentCatalog;
use entities::contact::SiteProfile;
use repositories::static_repo::StaticContentRepo;
use use_cases::{blog::BlogPostHandler, portfolio::PortfolioHandler};

pub type AppBlogHandler = BlogPostHandler<StaticContentRepo>;
pub type AppPortfolioHandler = PortfolioHandler<StaticContentRepo>;

pub struct AppState {
    pub blog_handler: AppBlogHandler,
    pub portfolio_handler: AppPortfolioHandler,
    pub profile: SiteProfile,
    pub catalog: Arc<ContentCatalog>,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, catalog: ContentCatalog) -> Self {
        let catalog = Arc::new(catalog);
        let repo = StaticContentRepo::new(catalog.clone());
        let profile = SiteProfile::from(config);

        AppState {
            blog_handler: BlogPostHandler::new(repo.clone()),
            portfolio_handler: PortfolioHandler::new(repo, profile.clone()),
            profile,
            catalog,
        }
    }
}
