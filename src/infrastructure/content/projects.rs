use crate::entities::project::{Project, ProjectStatus};

const GITHUB: &str = "https://github.com/alexchen";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "ecommerce-app".into(),
            name: "E-commerce Mobile App".into(),
            description: "A full-featured shopping app with cart, checkout, Stripe payments and real-time order tracking, built with Flutter and Firebase.".into(),
            technologies: strings(&["Flutter", "Firebase", "Stripe", "Provider"]),
            year: "2024".into(),
            status: ProjectStatus::Live,
            github_url: Some(format!("{GITHUB}/ecommerce-app")),
            live_url: Some("https://ecommerce-app.example.com".into()),
            image_url: Some("/images/ecommerce-app.png".into()),
        },
        Project {
            id: "fitness-tracker".into(),
            name: "Fitness Tracker".into(),
            description: "Workout and nutrition tracker with offline storage, progress charts and camera-based exercise logging.".into(),
            technologies: strings(&["Flutter", "SQLite", "Charts", "Camera"]),
            year: "2024".into(),
            status: ProjectStatus::InDevelopment,
            github_url: Some(format!("{GITHUB}/fitness-tracker")),
            live_url: None,
            image_url: Some("/images/fitness-tracker.png".into()),
        },
        Project {
            id: "task-manager".into(),
            name: "Team Task Manager".into(),
            description: "Collaborative task board with live updates over Socket.io, a Node.js backend and MongoDB persistence.".into(),
            technologies: strings(&["Flutter", "Node.js", "MongoDB", "Socket.io"]),
            year: "2023".into(),
            status: ProjectStatus::Completed,
            github_url: Some(format!("{GITHUB}/task-manager")),
            live_url: Some("https://task-manager.example.com".into()),
            image_url: Some("/images/task-manager.png".into()),
        },
    ]
}
