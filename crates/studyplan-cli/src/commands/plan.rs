use chrono::{Local, NaiveDate, Utc};
use clap::Subcommand;
use studyplan_core::planner::{build_plan, save_plan, PlanRequest};
use studyplan_core::Config;

use crate::common::{FileStore, LOCAL_USER};

#[derive(Subcommand)]
pub enum PlanAction {
    /// Generate a study plan from the stored subjects
    Generate {
        /// Hours of study time per day (defaults from config)
        #[arg(long)]
        hours: Option<f64>,
        /// Number of days to plan (defaults from config)
        #[arg(long)]
        days: Option<u32>,
        /// First day of the plan, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Persist the generated plan
        #[arg(long)]
        save: bool,
        #[arg(long)]
        json: bool,
    },
    /// Show saved schedule records
    List {
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PlanAction::Generate {
            hours,
            days,
            start,
            save,
            json,
        } => {
            let config = Config::load_or_default();
            let mut store = FileStore::load()?;
            let request = PlanRequest {
                hours_per_day: hours.unwrap_or(config.planner.hours_per_day),
                days: days.unwrap_or(config.planner.days),
                start_date: start.unwrap_or_else(|| Local::now().date_naive()),
            };

            let tasks = build_plan(&store, LOCAL_USER, &request)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else if tasks.is_empty() {
                println!("nothing to schedule at this budget");
            } else {
                let mut current_date = None;
                for t in &tasks {
                    if current_date != Some(t.date) {
                        println!("{}", t.date);
                        current_date = Some(t.date);
                    }
                    println!("  {} -- {} min", t.task, t.duration_minutes);
                }
            }

            if save {
                let records = save_plan(&mut store, LOCAL_USER, tasks, Utc::now())?;
                store.save()?;
                println!("saved {} tasks", records.len());
            }
        }
        PlanAction::List { json } => {
            let store = FileStore::load()?;
            let schedule = store.schedule(LOCAL_USER);
            if json {
                println!("{}", serde_json::to_string_pretty(&schedule)?);
            } else if schedule.is_empty() {
                println!("no saved schedule");
            } else {
                for record in schedule {
                    let mark = if record.completed { "x" } else { " " };
                    println!(
                        "[{mark}] {}  {} -- {} min",
                        record.date, record.task, record.duration_minutes
                    );
                }
            }
        }
    }
    Ok(())
}
