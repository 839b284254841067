use chrono::Local;
use log::{info, warn};

use crate::{
    config::RunConfig,
    console_report::render_console_report,
    create_report::create_report,
    detect::detect_member,
    error::{ReportError, Result},
    list_members::list_members,
    types::{CompletionRecord, Report},
};

/// Scans the members directory into a [`Report`].
pub fn collect_report(config: &RunConfig) -> Result<Report> {
    if !config.members_dir.exists() {
        return Err(ReportError::MembersDirNotFound(config.members_dir.clone()));
    }
    let members = list_members(&config.members_dir)?;
    info!("Checking {} members in {}", members.len(), config.members_dir.display());

    let records: Vec<CompletionRecord> = members
        .iter()
        .map(|member| detect_member(&config.members_dir, member))
        .collect();
    Ok(Report::new(records))
}

pub fn generate_report(config: &RunConfig) -> Result<()> {
    let report = collect_report(config)?;

    if !config.mode.is_recognized() {
        warn!("Unrecognized output mode {:?}, nothing to render", config.mode);
    }

    if config.mode.renders_console() {
        print!("{}", render_console_report(&report));
    }

    if config.mode.renders_markdown() {
        create_report(&report, &config.report_file, Local::now().naive_local())?;
        println!();
        println!("Markdown report saved to: {}", config.report_file.display());
    }

    Ok(())
}
