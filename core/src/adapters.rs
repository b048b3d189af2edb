// Rene transformasjoner fra normaliserte data til det hvert diagram trenger.
use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;

use crate::models::{
    AverageSessionPoint, DailyActivityPoint, Dashboard, NutritionSummary, PerformanceMetric, Score,
};

pub const DEFAULT_USER_ID: u32 = 12;

/// Franske ukedagsinitialer, mandag først. Tirsdag og onsdag deler "M".
pub const WEEKDAY_LETTERS: [&str; 7] = ["L", "M", "M", "J", "V", "S", "D"];

pub const PERFORMANCE_LABELS: [&str; 6] =
    ["Cardio", "Energie", "Endurance", "Force", "Vitesse", "Intensité"];

// ──────────────────────────────────────────────────────────────────────────────
// Aktivitet
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightDomain {
    pub min: f64,
    pub max: f64,
}

/// Vektaksen polstres med 1 kg på hver side. `None` for tom serie.
pub fn weight_domain(points: &[DailyActivityPoint]) -> Option<WeightDomain> {
    let first = points.first()?.weight_kg;
    let (min, max) = points
        .iter()
        .map(|p| p.weight_kg)
        .fold((first, first), |(lo, hi), w| (lo.min(w), hi.max(w)));
    Some(WeightDomain {
        min: min - 1.0,
        max: max + 1.0,
    })
}

pub fn day_tick(day: u32) -> String {
    day.to_string()
}

pub fn weight_tooltip(weight_kg: f64) -> String {
    format!("{weight_kg}kg")
}

pub fn calories_tooltip(calories: f64) -> String {
    format!("{calories}kCal")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityChart {
    pub points: Vec<DailyActivityPoint>,
    pub ticks: Vec<String>,
    pub weight_domain: Option<WeightDomain>,
}

pub fn activity_chart(points: &[DailyActivityPoint]) -> ActivityChart {
    ActivityChart {
        points: points.to_vec(),
        ticks: points.iter().map(|p| day_tick(p.day)).collect(),
        weight_domain: weight_domain(points),
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Gjennomsnittlig økt
// ──────────────────────────────────────────────────────────────────────────────

/// 1..=7 → L M M J V S D, alt annet → "".
pub fn weekday_label(day_of_week: i64) -> &'static str {
    match day_of_week {
        1..=7 => WEEKDAY_LETTERS[(day_of_week - 1) as usize],
        _ => "",
    }
}

pub fn session_tooltip(minutes: f64) -> String {
    format!("{minutes} min")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionEntry {
    pub day: i64,
    pub label: &'static str,
    pub session_length: f64,
}

pub fn sessions_chart(points: &[AverageSessionPoint]) -> Vec<SessionEntry> {
    points
        .iter()
        .map(|p| SessionEntry {
            day: p.day_of_week,
            label: weekday_label(p.day_of_week),
            session_length: p.session_length_minutes,
        })
        .collect()
}

// ──────────────────────────────────────────────────────────────────────────────
// Prestasjon
// ──────────────────────────────────────────────────────────────────────────────

/// 1..=6 → fast etikett, ellers "Type {kind}".
pub fn performance_label(kind: i64) -> Cow<'static, str> {
    match kind {
        1..=6 => Cow::Borrowed(PERFORMANCE_LABELS[(kind - 1) as usize]),
        _ => Cow::Owned(format!("Type {kind}")),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceEntry {
    pub value: f64,
    pub kind: i64,
    pub kind_name: String,
}

pub fn performance_chart(metrics: &[PerformanceMetric]) -> Vec<PerformanceEntry> {
    metrics
        .iter()
        .map(|m| PerformanceEntry {
            value: m.value,
            kind: m.kind,
            kind_name: performance_label(m.kind).into_owned(),
        })
        .collect()
}

// ──────────────────────────────────────────────────────────────────────────────
// Score
// ──────────────────────────────────────────────────────────────────────────────

/// Ikke-numerisk → 0, tall klemmes til [0,1].
pub fn normalize_score(raw: &Value) -> f64 {
    match raw.as_f64() {
        Some(v) if v.is_finite() => v.clamp(0.0, 1.0),
        _ => 0.0,
    }
}

/// Kun til visning; diagrammet får fortsatt brøken.
pub fn score_percentage(raw: &Value) -> u8 {
    (normalize_score(raw) * 100.0).round() as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreChart {
    pub normalized: f64,
    pub percentage: u8,
}

pub fn score_chart(score: &Score) -> ScoreChart {
    ScoreChart {
        normalized: normalize_score(score.raw()),
        percentage: score_percentage(score.raw()),
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Næring
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionCard {
    pub category: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

impl NutritionCard {
    pub fn display_value(&self) -> String {
        format!("{}{}", self.value, self.unit)
    }
}

/// Fire kort i fast rekkefølge: kalorier, proteiner, karbohydrater, lipider.
pub fn nutrition_cards(n: &NutritionSummary) -> [NutritionCard; 4] {
    [
        NutritionCard {
            category: "Calories",
            value: n.calorie_count,
            unit: "kCal",
        },
        NutritionCard {
            category: "Protéines",
            value: n.protein_count,
            unit: "g",
        },
        NutritionCard {
            category: "Glucides",
            value: n.carbohydrate_count,
            unit: "g",
        },
        NutritionCard {
            category: "Lipides",
            value: n.lipid_count,
            unit: "g",
        },
    ]
}

// ──────────────────────────────────────────────────────────────────────────────
// Hele dashbordet
// ──────────────────────────────────────────────────────────────────────────────

/// Eksplisitt id vinner, deretter rute-parameter, ellers bruker 12.
pub fn resolve_user_id(explicit: Option<u32>, route_param: Option<&str>) -> u32 {
    explicit
        .or_else(|| route_param.and_then(|p| p.trim().parse().ok()))
        .unwrap_or(DEFAULT_USER_ID)
}

/// Diagram som mangler data er `None` og utelates fra JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub user_id: u32,
    pub greeting: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<ActivityChart>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sessions: Option<Vec<SessionEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<Vec<PerformanceEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<ScoreChart>,
    pub nutrition: [NutritionCard; 4],
}

pub fn build_view(d: &Dashboard) -> DashboardView {
    DashboardView {
        user_id: d.user.profile.id,
        greeting: d.user.profile.first_name.clone(),
        activity: d.activity.as_deref().map(activity_chart),
        sessions: d.average_sessions.as_deref().map(sessions_chart),
        performance: d.performance.as_deref().map(performance_chart),
        score: d.score.as_ref().map(score_chart),
        nutrition: nutrition_cards(&d.user.nutrition),
    }
}
