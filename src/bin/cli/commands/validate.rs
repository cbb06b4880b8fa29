use anyhow::Result;

use blackout_lib::blackout::PatternKind;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let config = app.config();
    let entries = config.classify_patterns();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "configPath": app.config_path.display().to_string(),
                "maxBlackoutSkip": config.max_blackout_skip,
                "blackoutDates": entries.iter().map(|(pattern, kind)| {
                    serde_json::json!({ "pattern": pattern, "kind": kind })
                }).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Config: {}", app.config_path.display());
            println!("Max skip: {} day(s)", config.max_blackout_skip);

            if entries.is_empty() {
                println!("No blackout dates configured.");
                return Ok(());
            }

            for (pattern, kind) in &entries {
                let label = match kind {
                    PatternKind::Recurring => "every year",
                    PatternKind::Exact => "once",
                    PatternKind::Malformed => "never matches",
                };
                println!("  {:<12} {}", pattern, label);
            }

            let malformed = config.malformed_patterns().len();
            if malformed > 0 {
                println!("\n{} malformed entr{}", malformed, if malformed == 1 { "y" } else { "ies" });
            }
        }
    }

    Ok(())
}
