use crate::modules::portfolio::application::domain::entities::{
    Education, PersonalInfo, PortfolioRecord, SkillSet,
};
use crate::modules::project::application::ports::outgoing::project_api::{
    ProjectDraft, ProjectId, ProjectRecord,
};

pub fn project_record(id: &str, title: &str) -> ProjectRecord {
    ProjectRecord {
        id: ProjectId::from(id),
        title: title.to_string(),
        description: format!("{title} description"),
        technologies: vec!["Python".to_string()],
        github_link: None,
        demo_link: None,
        image: None,
    }
}

pub fn project_draft(title: &str) -> ProjectDraft {
    ProjectDraft {
        title: title.to_string(),
        description: "A site.".to_string(),
        technologies: vec!["TypeScript".to_string()],
        ..Default::default()
    }
}

pub fn sample_portfolio() -> PortfolioRecord {
    PortfolioRecord {
        personal: PersonalInfo {
            name: "Deep Podder".to_string(),
            title: "AI/ML Engineer".to_string(),
            email: "deep@example.com".to_string(),
            ..Default::default()
        },
        education: Education {
            degree: "Bachelor of Computer Applications".to_string(),
            institution: "IEM Kolkata".to_string(),
            graduation_year: "2026".to_string(),
            status: "Expected Graduation".to_string(),
        },
        skills: SkillSet {
            programming: vec!["Python".to_string(), "C++".to_string()],
            data_science: vec!["Machine Learning".to_string()],
            tools_frameworks: vec!["PyTorch".to_string()],
            database: vec!["RDBMS".to_string()],
        },
        certifications: vec!["Azure DevOps for Beginners".to_string()],
    }
}
