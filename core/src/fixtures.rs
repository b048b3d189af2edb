use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::models::{
    AverageSessionPoint, DailyActivityPoint, NutritionSummary, PerformanceMetric, Score, UserData,
    UserProfile,
};

/// Komplett reservesett for én bruker, på normalisert form.
#[derive(Debug, Clone, PartialEq)]
pub struct UserFixture {
    pub user: UserData,
    pub activity: Vec<DailyActivityPoint>,
    pub average_sessions: Vec<AverageSessionPoint>,
    pub performance: Vec<PerformanceMetric>,
}

/// Kilde for reservedata (prod: `StaticFixtures`, test: egne tilbydere).
pub trait FixtureProvider: Send + Sync {
    fn fixture(&self, user_id: u32) -> Option<&UserFixture>;
}

/// De faste demobrukerne fra backendens mock-data (12 og 18).
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticFixtures;

impl FixtureProvider for StaticFixtures {
    fn fixture(&self, user_id: u32) -> Option<&UserFixture> {
        FIXTURES.get(&user_id)
    }
}

/// Tom tilbyder: enhver feil blir til `DataError::Unavailable`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFixtures;

impl FixtureProvider for NoFixtures {
    fn fixture(&self, _user_id: u32) -> Option<&UserFixture> {
        None
    }
}

/// Bruker-id-ene som har reservedata.
pub fn fixture_user_ids() -> Vec<u32> {
    let mut ids: Vec<u32> = FIXTURES.keys().copied().collect();
    ids.sort_unstable();
    ids
}

fn activity(points: &[(f64, f64)]) -> Vec<DailyActivityPoint> {
    points
        .iter()
        .enumerate()
        .map(|(i, &(weight_kg, calories_burned))| DailyActivityPoint {
            day: i as u32 + 1,
            weight_kg,
            calories_burned,
        })
        .collect()
}

fn average_sessions(lengths: [f64; 7]) -> Vec<AverageSessionPoint> {
    lengths
        .iter()
        .zip(1..)
        .map(|(&session_length_minutes, day_of_week)| AverageSessionPoint {
            day_of_week,
            session_length_minutes,
        })
        .collect()
}

fn performance(values: [f64; 6]) -> Vec<PerformanceMetric> {
    values
        .iter()
        .zip(1..)
        .map(|(&value, kind)| PerformanceMetric { kind, value })
        .collect()
}

static FIXTURES: Lazy<HashMap<u32, UserFixture>> = Lazy::new(|| {
    let mut m = HashMap::new();

    m.insert(
        12,
        UserFixture {
            user: UserData {
                profile: UserProfile {
                    id: 12,
                    first_name: "Karl".into(),
                    last_name: Some("Dovineau".into()),
                    age: Some(31),
                },
                nutrition: NutritionSummary {
                    calorie_count: 1930.0,
                    protein_count: 155.0,
                    carbohydrate_count: 290.0,
                    lipid_count: 50.0,
                },
                score: Score::from_fraction(0.12),
            },
            activity: activity(&[
                (80.0, 240.0),
                (80.0, 220.0),
                (81.0, 280.0),
                (81.0, 290.0),
                (80.0, 160.0),
                (78.0, 162.0),
                (76.0, 390.0),
            ]),
            average_sessions: average_sessions([30.0, 23.0, 45.0, 50.0, 0.0, 0.0, 60.0]),
            performance: performance([80.0, 120.0, 140.0, 50.0, 200.0, 90.0]),
        },
    );

    m.insert(
        18,
        UserFixture {
            user: UserData {
                profile: UserProfile {
                    id: 18,
                    first_name: "Cecilia".into(),
                    last_name: Some("Ratorez".into()),
                    age: Some(34),
                },
                nutrition: NutritionSummary {
                    calorie_count: 2500.0,
                    protein_count: 90.0,
                    carbohydrate_count: 150.0,
                    lipid_count: 120.0,
                },
                score: Score::from_fraction(0.3),
            },
            activity: activity(&[
                (70.0, 240.0),
                (69.0, 220.0),
                (70.0, 280.0),
                (70.0, 500.0),
                (69.0, 160.0),
                (69.0, 162.0),
                (69.0, 390.0),
            ]),
            average_sessions: average_sessions([30.0, 40.0, 50.0, 30.0, 30.0, 50.0, 50.0]),
            performance: performance([200.0, 240.0, 80.0, 80.0, 220.0, 110.0]),
        },
    );

    m
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_fixtures_cover_demo_users() {
        assert_eq!(fixture_user_ids(), vec![12, 18]);
        let karl = StaticFixtures.fixture(12).unwrap();
        assert_eq!(karl.user.profile.first_name, "Karl");
        assert_eq!(karl.activity.first().map(|p| p.day), Some(1));
        assert_eq!(karl.average_sessions.len(), 7);
        assert_eq!(karl.performance.len(), 6);
        assert!(StaticFixtures.fixture(99).is_none());
        assert!(NoFixtures.fixture(12).is_none());
    }
}
