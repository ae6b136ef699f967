use maud::{html, Markup};

use super::{
    blog::post_card,
    layout::{page_shell, LayoutContext},
};
use crate::entities::{
    blog_post::BlogPost,
    contact::{ContactInfo, SiteProfile},
    project::Project,
    skill::SkillGroup,
    theme::Theme,
};
use crate::use_cases::shortcut_session::PageContext;

pub struct HomeView<'a> {
    pub profile: &'a SiteProfile,
    pub skills: &'a [SkillGroup],
    pub projects: &'a [Project],
    pub recent_posts: &'a [BlogPost],
    pub contact: &'a ContactInfo,
    pub theme: Theme,
}

pub fn render_home(view: &HomeView) -> Markup {
    let ctx = LayoutContext::new(
        &view.profile.owner_name,
        &view.profile.site_title,
        view.theme,
        PageContext::Home,
    );
    page_shell(
        &ctx,
        html! {
            (hero(view.profile))
            (skills_section(view.skills))
            (projects_section(view.projects))
            section id="blog" class="section" {
                h2 { "Latest Articles" }
                div class="post-grid" {
                    @for post in view.recent_posts {
                        (post_card(post))
                    }
                }
                a class="more" href="/blog" { "View all articles" }
            }
            (contact_section(view.contact))
        },
    )
}

fn hero(profile: &SiteProfile) -> Markup {
    html! {
        section id="hero" class="hero" {
            h1 { (profile.owner_name) }
            p class="role" { (profile.owner_title) }
            p class="intro" { (profile.owner_description) }
            a class="button" href=(profile.resume_url) download { "Download Resume" }
        }
    }
}

fn skills_section(groups: &[SkillGroup]) -> Markup {
    html! {
        section id="skills" class="section" {
            h2 { "Skills" }
            @for group in groups {
                div class="skill-group" {
                    h3 { (group.category.label()) }
                    ul {
                        @for skill in &group.skills {
                            li data-icon=[skill.icon.as_deref()] {
                                span class="skill-name" { (skill.name) }
                                span class="skill-level" { (skill.proficiency.label()) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn projects_section(projects: &[Project]) -> Markup {
    html! {
        section id="projects" class="section" {
            h2 { "Projects" }
            div class="project-grid" {
                @for project in projects {
                    article class="project-card" id=(format!("project-{}", project.id)) {
                        @if let Some(image) = &project.image_url {
                            img src=(image) alt=(project.name) loading="lazy";
                        }
                        header {
                            h3 { (project.name) }
                            span class="year" { (project.year) }
                            span class="status" { (project.status) }
                        }
                        p { (project.description) }
                        ul class="tech" {
                            @for tech in &project.technologies {
                                li { (tech) }
                            }
                        }
                        div class="links" {
                            @if let Some(github) = &project.github_url {
                                a href=(github) target="_blank" rel="noopener noreferrer" { "Code" }
                            }
                            @if let Some(live) = &project.live_url {
                                a href=(live) target="_blank" rel="noopener noreferrer" { "Live" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn contact_section(contact: &ContactInfo) -> Markup {
    html! {
        section id="contact" class="section" {
            h2 { "Get in Touch" }
            ul class="contact-links" {
                li { a href=(contact.mailto()) { (contact.email) } }
                li { a href=(contact.github) target="_blank" rel="noopener noreferrer" { "GitHub" } }
                li { a href=(contact.linkedin) target="_blank" rel="noopener noreferrer" { "LinkedIn" } }
                @if let Some(twitter) = &contact.twitter {
                    li { a href=(twitter) target="_blank" rel="noopener noreferrer" { "Twitter" } }
                }
                @if let Some(website) = &contact.website {
                    li { a href=(website) target="_blank" rel="noopener noreferrer" { "Website" } }
                }
            }
        }
    }
}
