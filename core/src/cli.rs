use std::fmt;

use crate::adapters::{calories_tooltip, session_tooltip, weight_tooltip, DashboardView};

const UNAVAILABLE: &str = "  (indisponible)";

/// Tekstrapport for terminalen. Samme data som diagrammene får.
pub struct Report<'a>(pub &'a DashboardView);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        writeln!(f, "--- Dashboard (user {}) ---", view.user_id)?;
        writeln!(f, "Bonjour {}", view.greeting)?;

        writeln!(f, "\nActivité quotidienne")?;
        match &view.activity {
            Some(chart) => {
                match chart.weight_domain {
                    Some(d) => writeln!(f, "  weight axis: [{}, {}]", d.min, d.max)?,
                    None => writeln!(f, "  (no activity)")?,
                }
                for (tick, p) in chart.ticks.iter().zip(&chart.points) {
                    writeln!(
                        f,
                        "  {tick:>2}: {} / {}",
                        weight_tooltip(p.weight_kg),
                        calories_tooltip(p.calories_burned)
                    )?;
                }
            }
            None => writeln!(f, "{UNAVAILABLE}")?,
        }

        writeln!(f, "\nDurée moyenne des sessions")?;
        match &view.sessions {
            Some(sessions) => {
                for s in sessions {
                    writeln!(f, "  {:<1} {}", s.label, session_tooltip(s.session_length))?;
                }
            }
            None => writeln!(f, "{UNAVAILABLE}")?,
        }

        writeln!(f, "\nPerformance")?;
        match &view.performance {
            Some(entries) => {
                for p in entries {
                    writeln!(f, "  {:<10} {}", p.kind_name, p.value)?;
                }
            }
            None => writeln!(f, "{UNAVAILABLE}")?,
        }

        match &view.score {
            Some(score) => writeln!(
                f,
                "\nScore: {}% de votre objectif ({:.2})",
                score.percentage, score.normalized
            )?,
            None => writeln!(f, "\nScore: indisponible")?,
        }

        writeln!(f, "\nNutrition")?;
        for card in &view.nutrition {
            writeln!(f, "  {:<10} {}", card.category, card.display_value())?;
        }
        Ok(())
    }
}

pub fn render_report(view: &DashboardView) -> String {
    Report(view).to_string()
}

pub fn print_dashboard_report(view: &DashboardView) {
    print!("{}", Report(view));
}
