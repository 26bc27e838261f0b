use clap::Subcommand;
use studyplan_core::{Subject, SubjectStore, PRIORITY_HIGH, PRIORITY_LOW};

use crate::common::{FileStore, LOCAL_USER};

#[derive(Subcommand)]
pub enum SubjectAction {
    /// Add a subject
    Add {
        name: String,
        /// Priority tier: 1 = high, 2 = medium, 3 = low
        #[arg(long, default_value_t = 2)]
        priority: u8,
        /// Display color (hex)
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// List subjects
    List {
        #[arg(long)]
        json: bool,
    },
    /// Remove a subject by id
    Remove { id: String },
}

pub fn run(action: SubjectAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SubjectAction::Add {
            name,
            priority,
            color,
            description,
        } => {
            if !(PRIORITY_HIGH..=PRIORITY_LOW).contains(&priority) {
                return Err(format!(
                    "priority must be 1 (high), 2 (medium) or 3 (low), got {priority}"
                )
                .into());
            }
            let mut store = FileStore::load()?;
            let mut subject = Subject::new(name, priority);
            if let Some(color) = color {
                subject.color = color;
            }
            subject.description = description;
            let (id, name) = (subject.id.clone(), subject.name.clone());
            store.add_subject(LOCAL_USER, subject);
            store.save()?;
            println!("subject added: {name} ({id})");
        }
        SubjectAction::List { json } => {
            let store = FileStore::load()?;
            let subjects = store.subjects_for_user(LOCAL_USER)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&subjects)?);
            } else if subjects.is_empty() {
                println!("no subjects yet");
            } else {
                for s in &subjects {
                    println!("{}  [{}] {}", s.id, priority_label(s.priority), s.name);
                }
            }
        }
        SubjectAction::Remove { id } => {
            let mut store = FileStore::load()?;
            if !store.remove_subject(LOCAL_USER, &id) {
                return Err(format!("no subject with id {id}").into());
            }
            store.save()?;
            println!("subject removed");
        }
    }
    Ok(())
}

fn priority_label(priority: u8) -> &'static str {
    match priority {
        1 => "high",
        2 => "medium",
        3 => "low",
        _ => "?",
    }
}
