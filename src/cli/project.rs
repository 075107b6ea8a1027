//! Project CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_choice, parse_date};
use crate::config::Settings;
use crate::display::{format_amount, format_progress_bar, format_project_list};
use crate::error::KasaResult;
use crate::models::{Project, ProjectStatus};
use crate::services::ProjectService;
use crate::storage::Storage;

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Start a new project
    Add {
        /// Project name
        name: String,
        /// Start date
        start: String,
        /// Planned completion date
        #[arg(short, long)]
        end: Option<String>,
        /// Budget
        #[arg(short, long, default_value = "0")]
        budget: String,
        /// Currency code (default: configured default)
        #[arg(short, long)]
        currency: Option<String>,
        /// Site location
        #[arg(short, long)]
        location: Option<String>,
    },
    /// List projects
    List {
        /// Only this status
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Set completion percentage
    Progress {
        /// Project name or ID
        project: String,
        /// Percent complete (0-100)
        percent: u8,
    },
    /// Change project status
    Status {
        /// Project name or ID
        project: String,
        /// New status (planning, active, on_hold, completed, cancelled)
        status: String,
    },
    /// Delete a project with no linked contracts or invoices
    Delete {
        /// Project name or ID
        project: String,
    },
}

const STATUSES: &str = "planning, active, on_hold, completed, cancelled";

pub fn handle_project_command(storage: &Storage, settings: &Settings, cmd: ProjectCommands) -> KasaResult<()> {
    let service = ProjectService::new(storage);

    match cmd {
        ProjectCommands::Add {
            name,
            start,
            end,
            budget,
            currency,
            location,
        } => {
            let mut project = Project::new(
                name,
                parse_date(&start)?,
                end.as_deref().map(parse_date).transpose()?,
                parse_amount(&budget)?,
                settings.resolve_currency(currency.as_deref())?,
            );
            project.location = location.unwrap_or_default();

            let project = service.create(project)?;
            println!("Proje oluşturuldu: {}", project.name);
            println!(
                "  Bütçe: {}",
                format_amount(project.budget, &project.currency, &settings.currencies)
            );
            println!("  ID: {}", project.id);
        }

        ProjectCommands::List { status } => {
            let status = status
                .as_deref()
                .map(|s| parse_choice(s, ProjectStatus::parse, "project status", STATUSES))
                .transpose()?;
            let projects = service.list(status)?;
            print!("{}", format_project_list(&projects, &settings.currencies));
        }

        ProjectCommands::Progress { project, percent } => {
            let found = service.find(&project)?;
            let updated = service.set_progress(found.id, percent)?;
            println!(
                "{}: {} %{}",
                updated.name,
                format_progress_bar(updated.progress as f64, 20),
                updated.progress
            );
        }

        ProjectCommands::Status { project, status } => {
            let status = parse_choice(&status, ProjectStatus::parse, "project status", STATUSES)?;
            let mut found = service.find(&project)?;
            found.status = status;
            let updated = service.update(found)?;
            println!("Proje {}: {}", updated.name, updated.status);
        }

        ProjectCommands::Delete { project } => {
            let found = service.find(&project)?;
            let deleted = service.delete(found.id)?;
            println!("Proje silindi: {}", deleted.name);
        }
    }

    Ok(())
}
