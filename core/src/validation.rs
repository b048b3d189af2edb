use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_path_to_error as spte;

use crate::error::Rejection;
use crate::models::{
    AverageSessionPoint, DailyActivityPoint, NutritionSummary, PerformanceMetric, Score, UserData,
    UserProfile,
};
use crate::types::{
    RawActivity, RawAverageSessions, RawKeyData, RawPerformance, RawUserMain, Validated,
};

/// Henter payload under `data`. Mangler wrapperen (eller er den null) er
/// responsen ubrukelig.
fn envelope(body: &Value) -> Result<&Value, Rejection> {
    match body.get("data") {
        Some(v) if !v.is_null() => Ok(v),
        _ => Err(Rejection::MissingEnvelope),
    }
}

/// Deserialiser med sti i feilmeldingen, f.eks. `data.sessions[2].kilogram`.
fn parse_at<T: DeserializeOwned>(value: &Value, root: &str) -> Result<T, Rejection> {
    spte::deserialize(value).map_err(|e| {
        let inner = e.path().to_string();
        let path = if inner == "." || inner.is_empty() {
            root.to_string()
        } else {
            format!("{root}.{inner}")
        };
        Rejection::Shape {
            path,
            message: e.inner().to_string(),
        }
    })
}

fn non_negative(value: f64, path: &str) -> Result<f64, Rejection> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Rejection::Shape {
            path: path.to_string(),
            message: format!("expected a non-negative number, got {value}"),
        })
    }
}

fn nutrition_from(raw: &RawKeyData) -> Result<NutritionSummary, Rejection> {
    Ok(NutritionSummary {
        calorie_count: non_negative(raw.calorie_count, "data.keyData.calorieCount")?,
        protein_count: non_negative(raw.protein_count, "data.keyData.proteinCount")?,
        carbohydrate_count: non_negative(
            raw.carbohydrate_count,
            "data.keyData.carbohydrateCount",
        )?,
        lipid_count: non_negative(raw.lipid_count, "data.keyData.lipidCount")?,
    })
}

fn user_data(body: &Value, user_id: u32) -> Result<UserData, Rejection> {
    let raw: RawUserMain = parse_at(envelope(body)?, "data")?;

    if let Some(other) = raw.id {
        if other != user_id {
            return Err(Rejection::Shape {
                path: "data.id".into(),
                message: format!("expected user {user_id}, got {other}"),
            });
        }
    }

    let score = raw
        .score
        .or(raw.today_score)
        .map(Score)
        .ok_or(Rejection::ScoreMissing)?;

    Ok(UserData {
        profile: UserProfile {
            id: user_id,
            first_name: raw.user_infos.first_name,
            last_name: raw.user_infos.last_name,
            age: raw.user_infos.age,
        },
        nutrition: nutrition_from(&raw.key_data)?,
        score,
    })
}

/// `GET /user/{id}`: krever `userInfos.firstName`, komplett `keyData` og en
/// score under `score` eller `todayScore`.
pub fn validate_user(body: &Value, user_id: u32) -> Validated<UserData> {
    user_data(body, user_id).into()
}

/// `GET /user/{id}/activity`: dag nummereres fra 1 etter posisjon.
pub fn validate_activity(body: &Value) -> Validated<Vec<DailyActivityPoint>> {
    envelope(body)
        .and_then(|data| parse_at::<RawActivity>(data, "data"))
        .map(|raw| {
            raw.sessions
                .into_iter()
                .enumerate()
                .map(|(i, s)| DailyActivityPoint {
                    day: i as u32 + 1,
                    weight_kg: s.kilogram,
                    calories_burned: s.calories,
                })
                .collect()
        })
        .into()
}

/// `GET /user/{id}/average-sessions`: tas uendret etter formsjekk.
pub fn validate_average_sessions(body: &Value) -> Validated<Vec<AverageSessionPoint>> {
    envelope(body)
        .and_then(|data| parse_at::<RawAverageSessions>(data, "data"))
        .map(|raw| {
            raw.sessions
                .into_iter()
                .map(|s| AverageSessionPoint {
                    day_of_week: s.day,
                    session_length_minutes: s.session_length,
                })
                .collect()
        })
        .into()
}

/// `GET /user/{id}/performance`: listen ligger under `data.data`.
pub fn validate_performance(body: &Value) -> Validated<Vec<PerformanceMetric>> {
    envelope(body)
        .and_then(|data| parse_at::<RawPerformance>(data, "data"))
        .map(|raw| {
            raw.data
                .into_iter()
                .map(|e| PerformanceMetric {
                    kind: e.kind,
                    value: e.value,
                })
                .collect()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_envelope_is_rejected() {
        let v = validate_activity(&json!({ "sessions": [] }));
        assert_eq!(v, Validated::Invalid(Rejection::MissingEnvelope));

        let v = validate_performance(&json!({ "data": null }));
        assert_eq!(v, Validated::Invalid(Rejection::MissingEnvelope));
    }

    #[test]
    fn shape_rejection_carries_json_path() {
        let body = json!({ "data": { "sessions": [
            { "kilogram": 80, "calories": 240 },
            { "kilogram": 81 }
        ]}});
        match validate_activity(&body) {
            Validated::Invalid(Rejection::Shape { path, message }) => {
                assert_eq!(path, "data.sessions[1]");
                assert!(message.contains("calories"), "message: {message}");
            }
            other => panic!("expected shape rejection, got {other:?}"),
        }
    }

    #[test]
    fn score_prefers_score_over_today_score() {
        let body = json!({ "data": {
            "id": 18,
            "userInfos": { "firstName": "Cecilia" },
            "keyData": { "calorieCount": 2500, "proteinCount": 90, "carbohydrateCount": 150, "lipidCount": 120 },
            "score": 0.3,
            "todayScore": 0.9
        }});
        let user = validate_user(&body, 18).into_result().unwrap();
        assert_eq!(user.score, Score(json!(0.3)));
    }

    #[test]
    fn null_score_counts_as_missing() {
        let body = json!({ "data": {
            "userInfos": { "firstName": "Karl" },
            "keyData": { "calorieCount": 1930, "proteinCount": 155, "carbohydrateCount": 290, "lipidCount": 50 },
            "score": null
        }});
        assert_eq!(
            validate_user(&body, 12),
            Validated::Invalid(Rejection::ScoreMissing)
        );
    }

    #[test]
    fn negative_key_data_is_rejected() {
        let body = json!({ "data": {
            "userInfos": { "firstName": "Karl" },
            "keyData": { "calorieCount": 1930, "proteinCount": -1, "carbohydrateCount": 290, "lipidCount": 50 },
            "todayScore": 0.12
        }});
        match validate_user(&body, 12) {
            Validated::Invalid(Rejection::Shape { path, .. }) => {
                assert_eq!(path, "data.keyData.proteinCount")
            }
            other => panic!("expected shape rejection, got {other:?}"),
        }
    }

    #[test]
    fn mismatched_user_id_is_rejected() {
        let body = json!({ "data": {
            "id": 18,
            "userInfos": { "firstName": "Cecilia" },
            "keyData": { "calorieCount": 2500, "proteinCount": 90, "carbohydrateCount": 150, "lipidCount": 120 },
            "score": 0.3
        }});
        assert!(!validate_user(&body, 12).is_valid());
    }

    #[test]
    fn snake_case_backend_fields_are_accepted() {
        let body = json!({ "data": {
            "user_infos": { "first_name": "Karl" },
            "key_data": { "calorie_count": 1930, "protein_count": 155, "carbohydrate_count": 290, "lipid_count": 50 },
            "today_score": 0.12
        }});
        let user = validate_user(&body, 12).into_result().unwrap();
        assert_eq!(user.profile.first_name, "Karl");
        assert_eq!(user.nutrition.lipid_count, 50.0);
    }
}
