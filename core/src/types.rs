// Wire-former for backend-responsene. Toleranse for eldre/avvikende feltnavn
// ligger i aliasene; alt som ikke beskrives her ignoreres.
use serde::Deserialize;
use serde_json::Value;

use crate::error::Rejection;

/// Resultatet av valideringssteget: enten gyldig payload eller en grunn.
#[derive(Debug, Clone, PartialEq)]
pub enum Validated<T> {
    Valid(T),
    Invalid(Rejection),
}

impl<T> Validated<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validated::Valid(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Validated<U> {
        match self {
            Validated::Valid(v) => Validated::Valid(f(v)),
            Validated::Invalid(r) => Validated::Invalid(r),
        }
    }

    pub fn into_result(self) -> Result<T, Rejection> {
        match self {
            Validated::Valid(v) => Ok(v),
            Validated::Invalid(r) => Err(r),
        }
    }
}

impl<T> From<Result<T, Rejection>> for Validated<T> {
    fn from(res: Result<T, Rejection>) -> Self {
        match res {
            Ok(v) => Validated::Valid(v),
            Err(r) => Validated::Invalid(r),
        }
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// GET /user/{id}
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUserMain {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(alias = "user_infos")]
    pub user_infos: RawUserInfos,
    #[serde(alias = "key_data")]
    pub key_data: RawKeyData,
    // score og todayScore kan begge forekomme; score vinner
    #[serde(default)]
    pub score: Option<Value>,
    #[serde(default, alias = "today_score")]
    pub today_score: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUserInfos {
    #[serde(alias = "first_name")]
    pub first_name: String,
    #[serde(default, alias = "last_name")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawKeyData {
    #[serde(alias = "calorie_count")]
    pub calorie_count: f64,
    #[serde(alias = "protein_count")]
    pub protein_count: f64,
    #[serde(alias = "carbohydrate_count")]
    pub carbohydrate_count: f64,
    #[serde(alias = "lipid_count")]
    pub lipid_count: f64,
}

// ──────────────────────────────────────────────────────────────────────────────
// GET /user/{id}/activity
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct RawActivity {
    pub sessions: Vec<RawActivitySession>,
}

/// `day` fra backend (dato-streng) leses ikke; dag settes fra posisjon.
#[derive(Debug, Clone, Deserialize)]
pub struct RawActivitySession {
    #[serde(alias = "weight", alias = "weightKg")]
    pub kilogram: f64,
    #[serde(alias = "caloriesBurned")]
    pub calories: f64,
}

// ──────────────────────────────────────────────────────────────────────────────
// GET /user/{id}/average-sessions
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct RawAverageSessions {
    pub sessions: Vec<RawAverageSession>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAverageSession {
    #[serde(alias = "dayOfWeek")]
    pub day: i64,
    #[serde(alias = "session_length")]
    pub session_length: f64,
}

// ──────────────────────────────────────────────────────────────────────────────
// GET /user/{id}/performance
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct RawPerformance {
    pub data: Vec<RawPerformanceEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPerformanceEntry {
    pub value: f64,
    pub kind: i64,
}
