use anyhow::Context;
use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use rest_week::utils::validation::Validate;
use rest_week::utils::{logger, lunar, validation};
use rest_week::{
    build_month_grid, classify, week_type, CliConfig, Command, FileSettingsStore, MonthGrid,
    OutputFormat, RestDay, ScheduleSettings,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let store = FileSettingsStore::new(&config.config_dir);
    let settings = ScheduleSettings::load(&store).await;
    let today = Local::now().date_naive();

    match config.command {
        Command::Check { date } => {
            let target = match date {
                Some(raw) => match validation::parse_iso_date("date", &raw) {
                    Ok(parsed) => parsed,
                    Err(e) => {
                        tracing::error!("❌ Invalid date argument: {}", e);
                        eprintln!("❌ {}", e);
                        std::process::exit(1);
                    }
                },
                None => today,
            };
            print_check(target, today, settings.reference_monday);
        }
        Command::Month { year, month, format } => {
            let year = year.unwrap_or_else(|| today.year());
            let month = month.unwrap_or_else(|| today.month());
            let first = NaiveDate::from_ymd_opt(year, month, 1)
                .with_context(|| format!("invalid month {}-{:02}", year, month))?;
            let grid = build_month_grid(first, settings.reference_monday, today, None);
            match format {
                OutputFormat::Text => {
                    print!("{}", render_month_text(&grid, settings.reference_monday))
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&grid)?),
            }
        }
        Command::SetReference { date } => {
            let parsed = match validation::parse_iso_date("reference", &date) {
                Ok(parsed) => parsed,
                Err(e) => {
                    eprintln!("❌ {}", e);
                    std::process::exit(1);
                }
            };
            match ScheduleSettings::save(&store, parsed).await {
                Ok(()) => {
                    tracing::info!("Reference Monday saved: {}", parsed);
                    println!("✅ Reference Monday saved: {}", parsed);
                }
                Err(e) => {
                    tracing::error!("❌ Failed to save reference: {}", e);
                    eprintln!("❌ {}", e);
                    std::process::exit(1);
                }
            }
        }
        Command::Config => {
            println!("Settings directory: {}", config.config_dir);
            println!("Reference Monday:   {}", settings.reference_monday);
            println!(
                "This week:          {}",
                week_type(today, settings.reference_monday)
            );
        }
    }

    Ok(())
}

fn print_check(target: NaiveDate, today: NaiveDate, reference: NaiveDate) {
    let marker = if target == today { " (today)" } else { "" };
    println!("{} {}{}", target, target.weekday(), marker);
    println!("{}", lunar::lunar_label(target));
    println!("{}", week_type(target, reference));
    match classify(target, reference) {
        RestDay::WorkDay => println!("💼 workday"),
        RestDay::SingleRest => println!("🛌 single-rest day"),
        RestDay::DoubleRest => println!("🛌 double-rest day"),
    }
}

fn render_month_text(grid: &MonthGrid, reference: NaiveDate) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}-{:02}\n", grid.year, grid.month));
    for name in ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"] {
        out.push_str(&format!("{:>4} ", name));
    }
    out.push('\n');

    for week in grid.weeks() {
        // Trailing all-padding weeks add nothing to the display.
        if !week.iter().any(|cell| cell.in_month) {
            continue;
        }
        for cell in week {
            if !cell.in_month {
                out.push_str("     ");
                continue;
            }
            let day = if cell.is_today {
                format!("[{}]", cell.date.day())
            } else {
                cell.date.day().to_string()
            };
            let suffix = match cell.classification {
                RestDay::DoubleRest => '*',
                RestDay::SingleRest => '+',
                RestDay::WorkDay => ' ',
            };
            out.push_str(&format!("{:>4}{}", day, suffix));
        }
        out.push_str(&format!("  {}\n", week_type(week[0].date, reference)));
    }

    out.push_str("\n* Sat+Sun off   + Sun off   [n] today\n");
    out
}
