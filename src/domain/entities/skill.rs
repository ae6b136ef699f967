use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    #[serde(rename = "Mobile Development")]
    MobileDevelopment,
    #[serde(rename = "Backend & APIs")]
    BackendApis,
    #[serde(rename = "Tools & Practices")]
    ToolsPractices,
}

impl SkillCategory {
    /// Display order of the skills section.
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::MobileDevelopment,
        SkillCategory::BackendApis,
        SkillCategory::ToolsPractices,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::MobileDevelopment => "Mobile Development",
            SkillCategory::BackendApis => "Backend & APIs",
            SkillCategory::ToolsPractices => "Tools & Practices",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Proficiency {
    pub fn label(&self) -> &'static str {
        match self {
            Proficiency::Beginner => "Beginner",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Advanced => "Advanced",
            Proficiency::Expert => "Expert",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Skill {
    #[validate(length(min = 1, max = 60))]
    pub name: String,
    pub category: SkillCategory,
    pub proficiency: Proficiency,
    pub icon: Option<String>,
}

/// Skills of one category, in source order.
#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub skills: Vec<Skill>,
}

pub fn group_by_category(skills: &[Skill]) -> Vec<SkillGroup> {
    SkillCategory::ALL
        .iter()
        .map(|category| SkillGroup {
            category: *category,
            skills: skills
                .iter()
                .filter(|s| s.category == *category)
                .cloned()
                .collect(),
        })
        .filter(|group| !group.skills.is_empty())
        .collect()
}
