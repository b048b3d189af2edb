use chrono::Utc;

use sportsee_core::cli::render_report;
use sportsee_core::{
    build_view, ClientConfig, Dashboard, DataClient, FixtureProvider, HttpTransport,
    StaticFixtures,
};

#[test]
fn report_contains_every_chart_section() {
    let config = ClientConfig::mock();
    let transport = HttpTransport::new(&config);
    let client =
        DataClient::with_parts(config, Box::new(transport), Box::new(StaticFixtures)).unwrap();

    let view = build_view(&client.load_dashboard(12).unwrap());
    let report = render_report(&view);

    assert!(report.contains("Bonjour Karl"));
    assert!(report.contains("weight axis: [75, 82]"));
    assert!(report.contains("80kg / 240kCal"));
    assert!(report.contains("L 30 min"));
    assert!(report.contains("Intensité"));
    assert!(report.contains("Score: 12% de votre objectif"));
    assert!(report.contains("1930kCal"));
}

#[test]
fn report_marks_missing_charts_as_unavailable() {
    let f = StaticFixtures.fixture(18).unwrap();
    let dashboard = Dashboard {
        user: f.user.clone(),
        activity: None,
        average_sessions: None,
        performance: Some(f.performance.clone()),
        score: None,
        fetched_at: Utc::now(),
    };

    let report = render_report(&build_view(&dashboard));
    assert!(report.contains("Bonjour Cecilia"));
    assert!(report.contains("(indisponible)"));
    assert!(!report.contains("weight axis"));
    assert!(report.contains("Score: indisponible"));
    assert!(report.contains("Cardio"));
}
