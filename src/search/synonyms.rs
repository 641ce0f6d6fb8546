//! Goal synonym table
//!
//! Each goal a playbook can serve has a short list of words people type
//! when they are looking for it, per locale. The table only widens what a
//! query can reach; entries still have to carry the goal (or name it
//! literally) to be included.

use crate::catalog::Locale;
use crate::error::AppError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

/// Canonical goal tokens
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Automation,
    Content,
    Marketing,
    Sales,
    Support,
    Productivity,
    Research,
    Learning,
    Development,
    Design,
}

impl Goal {
    pub const ALL: [Goal; 10] = [
        Goal::Automation,
        Goal::Content,
        Goal::Marketing,
        Goal::Sales,
        Goal::Support,
        Goal::Productivity,
        Goal::Research,
        Goal::Learning,
        Goal::Development,
        Goal::Design,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Automation => "automation",
            Goal::Content => "content",
            Goal::Marketing => "marketing",
            Goal::Sales => "sales",
            Goal::Support => "support",
            Goal::Productivity => "productivity",
            Goal::Research => "research",
            Goal::Learning => "learning",
            Goal::Development => "development",
            Goal::Design => "design",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        Goal::ALL
            .into_iter()
            .find(|goal| goal.as_str() == token)
            .ok_or_else(|| AppError::InvalidInput(format!("unknown goal '{}'", s.trim())))
    }
}

const ARABIC: &[(Goal, &[&str])] = &[
    (Goal::Automation, &["أتمتة", "تلقائي", "آلي", "ربط"]),
    (Goal::Content, &["محتوى", "كتابة", "مقالات", "نشر"]),
    (Goal::Marketing, &["تسويق", "إعلانات", "حملات", "علامة تجارية"]),
    (Goal::Sales, &["مبيعات", "بيع", "عملاء محتملين", "صفقات"]),
    (Goal::Support, &["دعم", "خدمة العملاء", "مساعدة", "تذاكر"]),
    (Goal::Productivity, &["إنتاجية", "تنظيم", "مهام", "وقت"]),
    (Goal::Research, &["بحث", "تحليل", "دراسة", "بيانات"]),
    (Goal::Learning, &["تعلم", "تعليم", "دورات", "تدريب"]),
    (Goal::Development, &["برمجة", "تطوير", "كود", "مطور"]),
    (Goal::Design, &["تصميم", "صور", "واجهات", "جرافيك"]),
];

const ENGLISH: &[(Goal, &[&str])] = &[
    (Goal::Automation, &["automate", "workflow", "integration", "no-code"]),
    (Goal::Content, &["writing", "blog", "copywriting", "publishing"]),
    (Goal::Marketing, &["ads", "campaign", "seo", "branding"]),
    (Goal::Sales, &["leads", "crm", "outreach", "deals"]),
    (Goal::Support, &["helpdesk", "customer service", "tickets", "chatbot"]),
    (Goal::Productivity, &["tasks", "organize", "notes", "time"]),
    (Goal::Research, &["analysis", "data", "study", "insights"]),
    (Goal::Learning, &["education", "courses", "training", "tutor"]),
    (Goal::Development, &["coding", "programming", "developer", "code"]),
    (Goal::Design, &["images", "ui", "graphics", "visual"]),
];

type VariantMap = BTreeMap<Goal, Vec<String>>;

fn variant_map(rows: &[(Goal, &[&str])]) -> VariantMap {
    rows.iter()
        .map(|(goal, words)| (*goal, words.iter().map(|w| w.to_string()).collect()))
        .collect()
}

/// Per-locale mapping from goal to lexical variants
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymTable {
    ar: VariantMap,
    en: VariantMap,
}

impl SynonymTable {
    /// Table with no goals
    pub fn empty() -> Self {
        Self::default()
    }

    /// The shipped Arabic and English table
    pub fn builtin() -> Self {
        Self {
            ar: variant_map(ARABIC),
            en: variant_map(ENGLISH),
        }
    }

    fn map(&self, locale: Locale) -> &VariantMap {
        match locale {
            Locale::Ar => &self.ar,
            Locale::En => &self.en,
        }
    }

    fn map_mut(&mut self, locale: Locale) -> &mut VariantMap {
        match locale {
            Locale::Ar => &mut self.ar,
            Locale::En => &mut self.en,
        }
    }

    /// Variants for `goal_token` in `locale`; empty when the goal is unknown
    pub fn expand(&self, goal_token: &str, locale: Locale) -> Vec<String> {
        match goal_token.parse::<Goal>() {
            Ok(goal) => self.variants(goal, locale).to_vec(),
            Err(_) => Vec::new(),
        }
    }

    pub fn variants(&self, goal: Goal, locale: Locale) -> &[String] {
        self.map(locale)
            .get(&goal)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Goals configured for `locale`, in declaration order
    pub fn entries(&self, locale: Locale) -> impl Iterator<Item = (Goal, &[String])> {
        self.map(locale)
            .iter()
            .map(|(goal, variants)| (*goal, variants.as_slice()))
    }

    /// Replace the variants of one goal
    pub fn insert(&mut self, locale: Locale, goal: Goal, variants: Vec<String>) {
        self.map_mut(locale).insert(goal, variants);
    }

    /// Overlay every goal configured in `other` onto this table
    pub fn merge(&mut self, other: SynonymTable) {
        self.ar.extend(other.ar);
        self.en.extend(other.en);
    }

    /// Parse `{"ar": {"automation": [...]}, "en": {...}}`.
    ///
    /// Goals outside the known set are skipped with a warning so a content
    /// file written for a newer build still loads.
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let raw: HashMap<Locale, HashMap<String, Vec<String>>> = serde_json::from_str(json)?;
        let mut table = Self::empty();

        for (locale, goals) in raw {
            for (token, variants) in goals {
                match token.parse::<Goal>() {
                    Ok(goal) => table.insert(locale, goal, variants),
                    Err(_) => warn!("Ignoring synonyms for unknown goal '{}' ({})", token, locale),
                }
            }
        }

        Ok(table)
    }

    /// Load a synonym file from disk
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                AppError::NotFound(format!("synonym file {}", path.display()))
            }
            _ => AppError::from(e),
        })?;
        let table = Self::from_json_str(&json)?;
        debug!(
            "Loaded synonyms for {} arabic and {} english goals from {}",
            table.ar.len(),
            table.en.len(),
            path.display()
        );
        Ok(table)
    }
}
