use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u32,
    pub first_name: String,
    pub last_name: Option<String>,
    pub age: Option<u32>,
}

/// Næringsverdier for dagen. Alle fire felt må finnes, ellers regnes
/// sammendraget som fraværende.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionSummary {
    pub calorie_count: f64,      // kCal
    pub protein_count: f64,      // g
    pub carbohydrate_count: f64, // g
    pub lipid_count: f64,        // g
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyActivityPoint {
    pub day: u32, // 1-basert posisjon i sekvensen, ikke backendens dato
    pub weight_kg: f64,
    pub calories_burned: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AverageSessionPoint {
    pub day_of_week: i64, // 1 = mandag .. 7 = søndag
    pub session_length_minutes: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetric {
    pub kind: i64,
    pub value: f64,
}

/// Rå score slik backend leverte den. Typen er ukjent (tall, streng, null ...);
/// normalisering til [0,1] skjer i `adapters::normalize_score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(pub Value);

impl Score {
    pub fn from_fraction(value: f64) -> Self {
        Score(Value::from(value))
    }

    /// `null` regnes som manglende score.
    pub fn is_present(&self) -> bool {
        !self.0.is_null()
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }
}

/// Resultatet av `get_user_data`: profil + næring + score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    pub profile: UserProfile,
    pub nutrition: NutritionSummary,
    pub score: Score,
}

/// Ett hentesett for en bruker. Profilen er påkrevd; de øvrige ressursene er
/// uavhengige og er `None` når de var utilgjengelige (diagrammet skjules).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub user: UserData,
    pub activity: Option<Vec<DailyActivityPoint>>,
    pub average_sessions: Option<Vec<AverageSessionPoint>>,
    pub performance: Option<Vec<PerformanceMetric>>,
    pub score: Option<Score>,
    pub fetched_at: DateTime<Utc>,
}
