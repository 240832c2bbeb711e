use chrono::{Datelike, Utc};
use rocket_okapi::okapi::schemars::JsonSchema;
use serde::Serialize;

use super::job::JobCategory;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    pub fn for_month(month: u32) -> Season {
        match month {
            12 | 1..=3 => Season::Winter,
            4 | 5 => Season::Spring,
            6..=8 => Season::Summer,
            _ => Season::Fall,
        }
    }

    pub fn current() -> Season {
        Season::for_month(Utc::now().month())
    }
}

impl JobCategory {
    /// Whether the category is worth surfacing in `season`. Snow removal
    /// is winter-only; yard work covers spring and fall; the rest are
    /// year-round.
    pub fn relevant_in(self, season: Season) -> bool {
        match self {
            JobCategory::SnowRemoval => season == Season::Winter,
            JobCategory::YardWork => matches!(season, Season::Spring | Season::Fall),
            _ => true,
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, JsonSchema)]
pub struct PayRange {
    pub min: f64,
    pub max: f64,
}

/// Catalog entry describing one category to browsing clients.
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub id: JobCategory,
    pub label: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub suggested_pay: PayRange,
    pub in_season: bool,
}

/// The fixed category catalog, flagged for relevance in `season`.
pub fn catalog(season: Season) -> Vec<CategoryInfo> {
    [
        (
            JobCategory::SnowRemoval,
            "Snow Removal",
            "❄️",
            "Driveway & walkway snow shoveling",
            50.0,
            150.0,
        ),
        (
            JobCategory::Moving,
            "Moving Help",
            "📦",
            "Furniture & boxes, local moves",
            25.0,
            40.0,
        ),
        (
            JobCategory::YardWork,
            "Yard Work",
            "🌱",
            "Lawn care, raking, gardening",
            20.0,
            30.0,
        ),
        (
            JobCategory::Assembly,
            "Furniture Assembly",
            "🔧",
            "IKEA & online purchases",
            30.0,
            50.0,
        ),
        (
            JobCategory::Repair,
            "Minor Repairs",
            "🛠️",
            "Light fixtures, shelves, caulking",
            25.0,
            50.0,
        ),
        (
            JobCategory::Other,
            "Other Tasks",
            "✨",
            "Various odd jobs",
            20.0,
            40.0,
        ),
    ]
    .into_iter()
    .map(|(id, label, icon, description, min, max)| CategoryInfo {
        id,
        label,
        icon,
        description,
        suggested_pay: PayRange { min, max },
        in_season: id.relevant_in(season),
    })
    .collect()
}
