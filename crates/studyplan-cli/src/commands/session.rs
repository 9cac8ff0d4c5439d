//! Queue management commands for CLI.

use clap::Args;
use studyplan_core::i18n::fill;
use studyplan_core::report::render_queue;
use studyplan_core::{Config, CoreError, SessionDb, SessionDraft, SessionRequest, ValidationError};

#[derive(Args)]
pub struct AddArgs {
    /// Subject name
    name: String,
    /// Day of the week (e.g. monday, tue)
    #[arg(long)]
    day: String,
    /// Start time, HH:MM
    #[arg(long)]
    start: String,
    /// End time, HH:MM
    #[arg(long)]
    end: String,
}

pub fn add(args: AddArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = config.language.catalog();
    let draft = SessionDraft::parse(&args.name, &args.day, &args.start, &args.end)?;
    let request = match SessionRequest::admit(draft) {
        Ok(request) => request,
        Err(ValidationError::InvalidInterval { .. }) => {
            return Err(catalog.invalid_interval.into());
        }
        Err(e) => return Err(e.into()),
    };

    let db = SessionDb::open()?;
    db.insert_session(&request)?;
    println!("{}", fill(catalog.added, &[("name", &request.name)]));
    println!("{}", request.id);
    Ok(())
}

pub fn list(json: bool, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let db = SessionDb::open()?;
    let sessions = db.list_sessions()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&sessions)?);
    } else {
        print!("{}", render_queue(&sessions, config.language));
    }
    Ok(())
}

pub fn delete(id: &str, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let db = SessionDb::open()?;
    if !db.delete_session(id)? {
        return Err(CoreError::NotFound { id: id.to_string() }.into());
    }
    println!("{}", fill(config.language.catalog().deleted, &[("id", &id)]));
    Ok(())
}

pub fn clear(yes: bool, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = config.language.catalog();
    if !yes {
        return Err(format!("{} (--yes)", catalog.confirm_flush).into());
    }
    let db = SessionDb::open()?;
    let count = db.clear_sessions()?;
    tracing::info!(count, "queue flushed");
    println!("{}", catalog.flushed);
    Ok(())
}
