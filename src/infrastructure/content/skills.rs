use crate::entities::skill::{
    Proficiency::{self, Advanced, Expert, Intermediate},
    Skill,
    SkillCategory::{self, BackendApis, MobileDevelopment, ToolsPractices},
};

const SKILLS: [(&str, SkillCategory, Proficiency, &str); 15] = [
    ("Flutter", MobileDevelopment, Expert, "flutter"),
    ("Dart", MobileDevelopment, Expert, "dart"),
    ("iOS", MobileDevelopment, Advanced, "ios"),
    ("Android", MobileDevelopment, Advanced, "android"),
    ("Cross-platform", MobileDevelopment, Expert, "mobile"),
    ("Firebase", BackendApis, Advanced, "firebase"),
    ("REST APIs", BackendApis, Advanced, "api"),
    ("Node.js", BackendApis, Intermediate, "nodejs"),
    ("MongoDB", BackendApis, Intermediate, "mongodb"),
    ("SQLite", BackendApis, Advanced, "sqlite"),
    ("Git", ToolsPractices, Advanced, "git"),
    ("Testing", ToolsPractices, Advanced, "test"),
    ("CI/CD", ToolsPractices, Intermediate, "cicd"),
    ("State Management", ToolsPractices, Expert, "state"),
    ("UI/UX", ToolsPractices, Advanced, "design"),
];

pub fn skills() -> Vec<Skill> {
    SKILLS
        .iter()
        .map(|(name, category, proficiency, icon)| Skill {
            name: name.to_string(),
            category: *category,
            proficiency: *proficiency,
            icon: Some(icon.to_string()),
        })
        .collect()
}
