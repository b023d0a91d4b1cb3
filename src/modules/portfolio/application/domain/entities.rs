// src/modules/portfolio/application/domain/entities.rs

use std::fmt;

use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// Portfolio record
// ──────────────────────────────────────────────────────────
// One record per site, four independently-saved subsections. Fields
// travel as plain strings; an empty string clears the stored value
// (the server merges the keys it receives).
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub objective: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub graduation_year: String,
    /// Free text, e.g. "Expected Graduation" or "Completed".
    #[serde(default)]
    pub status: String,
}

/// The four named skill lists, each ordered as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    #[serde(default)]
    pub programming: Vec<String>,
    #[serde(default)]
    pub data_science: Vec<String>,
    #[serde(default)]
    pub tools_frameworks: Vec<String>,
    #[serde(default)]
    pub database: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioRecord {
    #[serde(default)]
    pub personal: PersonalInfo,
    #[serde(default)]
    pub education: Education,
    #[serde(default)]
    pub skills: SkillSet,
    #[serde(default)]
    pub certifications: Vec<String>,
}

//
// ──────────────────────────────────────────────────────────
// Subsections
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionName {
    Personal,
    Education,
    Skills,
    Certifications,
}

impl SectionName {
    /// The key this subsection travels under on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionName::Personal => "personal",
            SectionName::Education => "education",
            SectionName::Skills => "skills",
            SectionName::Certifications => "certifications",
        }
    }

    /// Human label used in banner messages.
    pub fn label(&self) -> &'static str {
        match self {
            SectionName::Personal => "personal information",
            SectionName::Education => "education information",
            SectionName::Skills => "skills information",
            SectionName::Certifications => "certifications",
        }
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One subsection's worth of data, keyed the way the save endpoint
/// expects it: serializing a patch yields `{"<section>": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionPatch {
    Personal(PersonalInfo),
    Education(Education),
    Skills(SkillSet),
    Certifications(Vec<String>),
}

impl SectionPatch {
    pub fn name(&self) -> SectionName {
        match self {
            SectionPatch::Personal(_) => SectionName::Personal,
            SectionPatch::Education(_) => SectionName::Education,
            SectionPatch::Skills(_) => SectionName::Skills,
            SectionPatch::Certifications(_) => SectionName::Certifications,
        }
    }
}

impl PortfolioRecord {
    /// Copy out one subsection in patch form.
    pub fn section(&self, name: SectionName) -> SectionPatch {
        match name {
            SectionName::Personal => SectionPatch::Personal(self.personal.clone()),
            SectionName::Education => SectionPatch::Education(self.education.clone()),
            SectionName::Skills => SectionPatch::Skills(self.skills.clone()),
            SectionName::Certifications => {
                SectionPatch::Certifications(self.certifications.clone())
            }
        }
    }

    /// Replace one subsection, leaving the other three untouched.
    pub fn apply(&mut self, patch: SectionPatch) {
        match patch {
            SectionPatch::Personal(personal) => self.personal = personal,
            SectionPatch::Education(education) => self.education = education,
            SectionPatch::Skills(skills) => self.skills = skills,
            SectionPatch::Certifications(certifications) => {
                self.certifications = certifications
            }
        }
    }
}
