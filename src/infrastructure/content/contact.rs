use crate::entities::contact::ContactInfo;

pub fn contact_info() -> ContactInfo {
    ContactInfo {
        email: "hello@samandar.dev".into(),
        github: "https://github.com/samandar-rajabboyev".into(),
        linkedin: "https://www.linkedin.com/in/samandar-rajabboyev".into(),
        twitter: Some("https://twitter.com/samandar_dev".into()),
        website: None,
    }
}
