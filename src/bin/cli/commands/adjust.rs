use anyhow::Result;
use chrono::NaiveDate;

use blackout_lib::scheduler::{due_date, format_interval};

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, interval: u32, today: NaiveDate, format: &OutputFormat) -> Result<()> {
    let adjustment = app.scheduler.adjust_interval(interval, today);
    let due = due_date(today, adjustment.interval);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "today": today.to_string(),
                "adjustment": adjustment,
                "dueDate": due.map(|d| d.to_string()),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!(
                "Interval: {} -> {} ({})",
                adjustment.original,
                adjustment.interval,
                format_interval(adjustment.interval)
            );
            if adjustment.was_shifted() {
                println!("  Skipped {} blackout day(s)", adjustment.skipped);
            }
            if let Some(due) = due {
                println!("  Due: {}", due);
            }
            if adjustment.exhausted {
                println!(
                    "  Warning: skip budget of {} exhausted, due date is still a blackout date",
                    app.config().max_blackout_skip
                );
            }
        }
    }

    Ok(())
}
