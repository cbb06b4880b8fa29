use anyhow::Result;
use chrono::NaiveDate;

use blackout_lib::blackout::matching_pattern;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, date: NaiveDate, format: &OutputFormat) -> Result<()> {
    let matched = matching_pattern(date, &app.config().blackout_dates);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "date": date.to_string(),
                "blackout": matched.is_some(),
                "pattern": matched,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => match matched {
            Some(pattern) => println!("{} is a blackout date (matches \"{}\")", date, pattern),
            None => println!("{} is not a blackout date", date),
        },
    }

    Ok(())
}
