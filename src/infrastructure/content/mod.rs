//! Compiled-in site content: blog posts, projects, skills and contact links.

mod blog_posts;
mod contact;
mod projects;
mod skills;

use std::collections::HashSet;

use tracing::info;
use validator::Validate;

use crate::entities::{
    blog_post::BlogPost,
    contact::ContactInfo,
    project::Project,
    skill::Skill,
};
use crate::errors::{ContentError, FieldError};

/// Immutable content shared by every worker for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    pub posts: Vec<BlogPost>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub contact: ContactInfo,
}

impl ContentCatalog {
    /// Builds the catalog from the bundled content and checks it.
    pub fn load() -> Result<Self, ContentError> {
        let catalog = ContentCatalog {
            posts: blog_posts::blog_posts()?,
            projects: projects::projects(),
            skills: skills::skills(),
            contact: contact::contact_info(),
        };
        catalog.check()?;

        info!(
            posts = catalog.posts.len(),
            projects = catalog.projects.len(),
            skills = catalog.skills.len(),
            "Content catalog loaded"
        );
        Ok(catalog)
    }

    /// Post ids and slugs are unique, project ids are unique and every
    /// entry passes its field validation.
    pub fn check(&self) -> Result<(), ContentError> {
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();
        for post in &self.posts {
            validate_entry("blog post", &post.slug, post)?;
            if !ids.insert(post.id) {
                return Err(ContentError::DuplicateId(post.id));
            }
            if !slugs.insert(post.slug.as_str()) {
                return Err(ContentError::DuplicateSlug(post.slug.clone()));
            }
        }

        let mut project_ids = HashSet::new();
        for project in &self.projects {
            validate_entry("project", &project.id, project)?;
            if !project_ids.insert(project.id.as_str()) {
                return Err(ContentError::DuplicateProject(project.id.clone()));
            }
        }

        for skill in &self.skills {
            validate_entry("skill", &skill.name, skill)?;
        }
        validate_entry("contact", &self.contact.email, &self.contact)
    }
}

fn validate_entry<T: Validate>(kind: &'static str, name: &str, entry: &T) -> Result<(), ContentError> {
    entry.validate().map_err(|errors| ContentError::Invalid {
        kind,
        name: name.to_string(),
        errors: FieldError::collect(&errors)
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join(", "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::blog_post::fixtures::post;
    use crate::entities::project::ProjectStatus;
    use crate::utils::markdown::{parse_blocks, Block};

    #[test]
    fn bundled_content_loads() {
        let catalog = ContentCatalog::load().expect("bundled content must be valid");

        assert_eq!(catalog.posts.len(), 6);
        assert_eq!(catalog.projects.len(), 3);
        assert_eq!(catalog.skills.len(), 15);
        assert_eq!(catalog.posts[0].slug, "building-responsive-flutter-apps");
        assert_eq!(catalog.projects[1].status, ProjectStatus::InDevelopment);
    }

    #[test]
    fn every_post_renders_a_title_heading() {
        let catalog = ContentCatalog::load().unwrap();
        for p in &catalog.posts {
            let blocks = parse_blocks(&p.content);
            assert!(
                matches!(blocks.first(), Some(Block::Heading { level: 1, .. })),
                "post {} should open with a title heading",
                p.id
            );
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut catalog = ContentCatalog::load().unwrap();
        catalog.posts.push(post(1, "Another First Post", "Flutter", &[]));

        assert!(matches!(catalog.check(), Err(ContentError::DuplicateId(1))));
    }

    #[test]
    fn duplicate_slugs_are_rejected() {
        let mut catalog = ContentCatalog::load().unwrap();
        let mut copy = post(42, "Copy", "Flutter", &[]);
        copy.slug = catalog.posts[2].slug.clone();
        catalog.posts.push(copy);

        assert!(matches!(catalog.check(), Err(ContentError::DuplicateSlug(_))));
    }

    #[test]
    fn invalid_entries_name_the_offender() {
        let mut catalog = ContentCatalog::load().unwrap();
        catalog.projects[0].live_url = Some("javascript:alert(1)".into());

        let err = catalog.check().unwrap_err();
        assert!(err.to_string().contains("ecommerce-app"));
    }
}
