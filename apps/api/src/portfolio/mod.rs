//! Read-only portfolio records, loaded once at startup from a directory of JSON files.

pub mod handlers;

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::{Datelike, NaiveDate};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::models::portfolio::{
    Award, CaseStudy, Certification, Experience, Profile, Skill, SkillCategory,
};

const MAX_PROFICIENCY: u8 = 100;

/// Experience entries are ordered newest first; the last entry is the oldest role.
#[derive(Debug, Clone)]
pub struct Portfolio {
    profile: Profile,
    experience: Vec<Experience>,
    skills: Vec<Skill>,
    awards: Vec<Award>,
    certifications: Vec<Certification>,
    case_studies: Vec<CaseStudy>,
}

impl Portfolio {
    /// Validates and assembles the records.
    pub fn new(
        profile: Profile,
        experience: Vec<Experience>,
        skills: Vec<Skill>,
        awards: Vec<Award>,
        certifications: Vec<Certification>,
        case_studies: Vec<CaseStudy>,
    ) -> Result<Self> {
        ensure_unique_ids("experience", experience.iter().map(|e| e.id.as_str()))?;
        ensure_unique_ids("skills", skills.iter().map(|s| s.id.as_str()))?;
        ensure_unique_ids("awards", awards.iter().map(|a| a.id.as_str()))?;
        ensure_unique_ids("certifications", certifications.iter().map(|c| c.id.as_str()))?;
        ensure_unique_ids("case studies", case_studies.iter().map(|c| c.id.as_str()))?;

        for exp in &experience {
            if let Some(end) = exp.end_date {
                if end < exp.start_date {
                    bail!(
                        "experience '{}' ends ({end}) before it starts ({})",
                        exp.id,
                        exp.start_date
                    );
                }
            }
        }

        for skill in &skills {
            if skill.proficiency > MAX_PROFICIENCY {
                bail!(
                    "skill '{}' has proficiency {} (max {MAX_PROFICIENCY})",
                    skill.id,
                    skill.proficiency
                );
            }
        }

        Ok(Self {
            profile,
            experience,
            skills,
            awards,
            certifications,
            case_studies,
        })
    }

    /// Loads `profile.json`, `experience.json`, `skills.json`, `awards.json`,
    /// `certifications.json` and (optionally) `case_studies.json` from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        info!("Loading portfolio data from {}", dir.display());

        let case_studies_path = dir.join("case_studies.json");
        let case_studies = if case_studies_path.exists() {
            read_json(&case_studies_path)?
        } else {
            Vec::new()
        };

        let portfolio = Self::new(
            read_json(&dir.join("profile.json"))?,
            read_json(&dir.join("experience.json"))?,
            read_json(&dir.join("skills.json"))?,
            read_json(&dir.join("awards.json"))?,
            read_json(&dir.join("certifications.json"))?,
            case_studies,
        )
        .with_context(|| format!("Invalid portfolio data in {}", dir.display()))?;

        info!(
            experience = portfolio.experience.len(),
            skills = portfolio.skills.len(),
            awards = portfolio.awards.len(),
            certifications = portfolio.certifications.len(),
            case_studies = portfolio.case_studies.len(),
            "Portfolio data loaded"
        );
        Ok(portfolio)
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn experience(&self) -> &[Experience] {
        &self.experience
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn skills_by_category(&self, category: SkillCategory) -> Vec<&Skill> {
        self.skills
            .iter()
            .filter(|s| s.category == category)
            .collect()
    }

    pub fn awards(&self) -> &[Award] {
        &self.awards
    }

    pub fn certifications(&self) -> &[Certification] {
        &self.certifications
    }

    pub fn case_studies(&self, featured_only: bool) -> Vec<&CaseStudy> {
        self.case_studies
            .iter()
            .filter(|c| !featured_only || c.featured)
            .collect()
    }

    /// First open-ended role, else the first entry, else `None`.
    pub fn current_role(&self) -> Option<&Experience> {
        self.experience
            .iter()
            .find(|e| e.end_date.is_none())
            .or_else(|| self.experience.first())
    }

    /// Calendar years since the oldest role started. 0 without any experience.
    pub fn years_of_experience(&self, today: NaiveDate) -> u32 {
        match self.experience.last() {
            Some(oldest) => (today.year() - oldest.start_date.year()).max(0) as u32,
            None => 0,
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

fn ensure_unique_ids<'a>(collection: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            bail!("duplicate id '{id}' in {collection}");
        }
    }
    Ok(())
}
