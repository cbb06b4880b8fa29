use anyhow::Result;
use chrono::NaiveDate;

use blackout_lib::scheduler::{due_date, format_interval, ProposedIntervals, Rating};

use crate::app::App;
use crate::OutputFormat;

const RATINGS: [(Rating, &str); 4] = [
    (Rating::Again, "Again"),
    (Rating::Hard, "Hard"),
    (Rating::Good, "Good"),
    (Rating::Easy, "Easy"),
];

pub fn run(app: &App, proposed: &ProposedIntervals, today: NaiveDate, format: &OutputFormat) -> Result<()> {
    let adjusted = app.scheduler.adjust_all(proposed, today);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "today": today.to_string(),
                "proposed": proposed,
                "adjusted": adjusted,
                "anyExhausted": adjusted.any_exhausted(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{:<6} {:>8} {:>8}  Due", "Rating", "Proposed", "Adjusted");
            println!("{}", "\u{2500}".repeat(40));

            for (rating, label) in RATINGS {
                let adjustment = adjusted.get(rating);
                let due = due_date(today, adjustment.interval)
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string());
                let marker = if adjustment.exhausted { " !" } else { "" };

                println!(
                    "{:<6} {:>8} {:>8}  {}{}",
                    label,
                    format_interval(proposed.get(rating)),
                    format_interval(adjustment.interval),
                    due,
                    marker
                );
            }

            if adjusted.any_exhausted() {
                println!("\n! skip budget exhausted on a blackout date");
            }
        }
    }

    Ok(())
}
