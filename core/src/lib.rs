pub mod adapters;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod metrics;
pub mod models;
pub mod session;
pub mod transport;
pub mod types;
pub mod validation;

pub use adapters::{build_view, DashboardView};
pub use client::DataClient;
pub use config::ClientConfig;
pub use error::{DataError, FailureKind, FetchError, Rejection, Resource};
pub use fixtures::{FixtureProvider, NoFixtures, StaticFixtures, UserFixture};
pub use models::{
    AverageSessionPoint, DailyActivityPoint, Dashboard, NutritionSummary, PerformanceMetric, Score,
    UserData, UserProfile,
};
pub use session::{Committed, DashboardSession, FetchCycle};
pub use transport::{HttpTransport, Transport};
pub use types::Validated;
