use std::sync::Arc;

use crate::content::ContentCatalog;

/// Read-only repository over the compiled-in content catalog.
#[derive(Clone)]
pub struct StaticContentRepo {
    pub catalog: Arc<ContentCatalog>,
}

impl StaticContentRepo {
    pub fn new(catalog: Arc<ContentCatalog>) -> Self {
        StaticContentRepo { catalog }
    }
}
