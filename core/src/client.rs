use std::thread::{self, ScopedJoinHandle};

use chrono::Utc;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{DataError, FetchError, Resource, SetupError};
use crate::fixtures::{FixtureProvider, StaticFixtures, UserFixture};
use crate::metrics::{DataSource, Metrics};
use crate::models::{
    AverageSessionPoint, DailyActivityPoint, Dashboard, PerformanceMetric, Score, UserData,
};
use crate::transport::{HttpTransport, Transport};
use crate::types::Validated;
use crate::validation::{
    validate_activity, validate_average_sessions, validate_performance, validate_user,
};

/// Henter de fire ressursene for en bruker. Hvert kall gjør:
/// 1) forsøk mot backend, 2) formvalidering, 3) ved ethvert avvik: fixture for
/// samme bruker-id. Feil logges og telles, men kastes aldri videre; eneste
/// feil ut er `DataError::Unavailable` når heller ingen fixture finnes.
pub struct DataClient {
    config: ClientConfig,
    transport: Box<dyn Transport>,
    fixtures: Box<dyn FixtureProvider>,
    metrics: Metrics,
}

impl DataClient {
    /// Klient mot ekte backend med de statiske demo-fixturene som reserve.
    pub fn new(config: ClientConfig) -> Result<Self, SetupError> {
        let transport = HttpTransport::new(&config);
        Self::with_parts(config, Box::new(transport), Box::new(StaticFixtures))
    }

    /// Som `new`, men med injisert transport og fixtures. Konfig valideres likt.
    pub fn with_parts(
        config: ClientConfig,
        transport: Box<dyn Transport>,
        fixtures: Box<dyn FixtureProvider>,
    ) -> Result<Self, SetupError> {
        config.validate()?;
        Ok(Self {
            config,
            transport,
            fixtures,
            metrics: Metrics::new()?,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn get_user_data(&self, user_id: u32) -> Result<UserData, DataError> {
        self.resolve(
            user_id,
            Resource::User,
            |body| validate_user(body, user_id),
            |f| f.user.clone(),
        )
    }

    pub fn get_user_activity(&self, user_id: u32) -> Result<Vec<DailyActivityPoint>, DataError> {
        self.resolve(user_id, Resource::Activity, validate_activity, |f| {
            f.activity.clone()
        })
    }

    pub fn get_user_average_sessions(
        &self,
        user_id: u32,
    ) -> Result<Vec<AverageSessionPoint>, DataError> {
        self.resolve(
            user_id,
            Resource::AverageSessions,
            validate_average_sessions,
            |f| f.average_sessions.clone(),
        )
    }

    pub fn get_user_performance(&self, user_id: u32) -> Result<Vec<PerformanceMetric>, DataError> {
        self.resolve(user_id, Resource::Performance, validate_performance, |f| {
            f.performance.clone()
        })
    }

    /// Score via `get_user_data`; mangler den, brukes fixturens score.
    pub fn get_user_score(&self, user_id: u32) -> Result<Score, DataError> {
        let user = self.get_user_data(user_id)?;
        self.score_or_fixture(user_id, user.score)
    }

    /// Henter alle fire ressurser parallelt og avleder score fra brukerdataene
    /// (ingen ekstra `/user/{id}`-kall). Bare brukerressursen feiler hele
    /// dashbordet; en utilgjengelig ressurs ellers blir `None`.
    pub fn load_dashboard(&self, user_id: u32) -> Result<Dashboard, DataError> {
        let (user, activity, average_sessions, performance) = thread::scope(|s| {
            let user = s.spawn(|| self.get_user_data(user_id));
            let activity = s.spawn(|| self.get_user_activity(user_id));
            let sessions = s.spawn(|| self.get_user_average_sessions(user_id));
            let performance = s.spawn(|| self.get_user_performance(user_id));
            (
                joined(user, user_id, Resource::User),
                joined(activity, user_id, Resource::Activity),
                joined(sessions, user_id, Resource::AverageSessions),
                joined(performance, user_id, Resource::Performance),
            )
        });

        let user = user?;
        let score = self.score_or_fixture(user_id, user.score.clone());

        Ok(Dashboard {
            user,
            activity: partial(activity),
            average_sessions: partial(average_sessions),
            performance: partial(performance),
            score: partial(score),
            fetched_at: Utc::now(),
        })
    }

    fn score_or_fixture(&self, user_id: u32, score: Score) -> Result<Score, DataError> {
        if score.is_present() {
            return Ok(score);
        }
        log::warn!("no score for user {user_id}, using fixture score");
        self.fixtures
            .fixture(user_id)
            .map(|f| f.user.score.clone())
            .filter(Score::is_present)
            .ok_or(DataError::Unavailable {
                user_id,
                resource: Resource::User,
            })
    }

    fn resolve<T, V, F>(
        &self,
        user_id: u32,
        resource: Resource,
        validate: V,
        from_fixture: F,
    ) -> Result<T, DataError>
    where
        V: FnOnce(&Value) -> Validated<T>,
        F: FnOnce(&UserFixture) -> T,
    {
        if self.config.use_mock {
            log::debug!("mock mode: skipping backend for {resource} (user {user_id})");
        } else {
            match self.fetch_live(user_id, resource, validate) {
                Ok(value) => {
                    log::info!("{resource} for user {user_id} served from backend");
                    self.metrics.record_source(resource, DataSource::Live);
                    return Ok(value);
                }
                Err(e) => {
                    let kind = e.kind();
                    log::warn!(
                        "{resource} for user {user_id}: {} failure ({e}), falling back to fixture",
                        kind.as_str()
                    );
                    self.metrics.record_failure(resource, kind);
                }
            }
        }

        match self.fixtures.fixture(user_id) {
            Some(fixture) => {
                log::info!("{resource} for user {user_id} served from fixture");
                self.metrics.record_source(resource, DataSource::Fixture);
                Ok(from_fixture(fixture))
            }
            None => {
                log::error!("{resource} for user {user_id}: no live data and no fixture");
                self.metrics.record_source(resource, DataSource::Unavailable);
                Err(DataError::Unavailable { user_id, resource })
            }
        }
    }

    fn fetch_live<T, V>(&self, user_id: u32, resource: Resource, validate: V) -> Result<T, FetchError>
    where
        V: FnOnce(&Value) -> Validated<T>,
    {
        let body = self.transport.get_json(&resource.path(user_id))?;
        if log::log_enabled!(log::Level::Debug) {
            let bytes = body.to_string().len();
            log::debug!("{resource} raw response for user {user_id}: {bytes} bytes");
        }
        Ok(validate(&body).into_result()?)
    }
}

fn partial<T>(result: Result<T, DataError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("dashboard without chart data: {e}");
            None
        }
    }
}

fn joined<T>(
    handle: ScopedJoinHandle<'_, Result<T, DataError>>,
    user_id: u32,
    resource: Resource,
) -> Result<T, DataError> {
    handle.join().unwrap_or_else(|_| {
        log::error!("{resource} fetch for user {user_id} panicked");
        Err(DataError::Unavailable { user_id, resource })
    })
}
