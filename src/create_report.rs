use std::{
    fs::{self, Permissions},
    io::{ErrorKind, Write},
    os::unix::fs::PermissionsExt,
    path::Path,
};

use chrono::NaiveDateTime;
use handlebars::{no_escape, Handlebars};
use log::info;
use serde::Serialize;
use tempfile::Builder;

use crate::{
    error::Result,
    types::{AggregateStats, Report},
};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Serialize)]
struct MarkdownReportContext<'a> {
    generated_at: String,
    total: usize,
    summary: Vec<SummaryLineContext>,
    rows: Vec<MemberRowContext<'a>>,
    lists: Vec<MemberListContext<'a>>,
}

#[derive(Serialize)]
struct SummaryLineContext {
    label: &'static str,
    count: usize,
    total: usize,
    percentage: String,
}

#[derive(Serialize)]
struct MemberRowContext<'a> {
    name: &'a str,
    assignment_1: &'static str,
    assignment_2: &'static str,
}

#[derive(Serialize)]
struct MemberListContext<'a> {
    title: &'static str,
    placeholder: &'static str,
    members: Vec<MemberListEntryContext<'a>>,
}

#[derive(Serialize)]
struct MemberListEntryContext<'a> {
    position: usize,
    name: &'a str,
}

fn status(done: bool) -> &'static str {
    if done {
        "✅"
    } else {
        "❌"
    }
}

fn summary_line(label: &'static str, count: usize, stats: &AggregateStats) -> SummaryLineContext {
    SummaryLineContext {
        label,
        count,
        total: stats.total,
        percentage: format!("{:.1}", stats.percentage(count)),
    }
}

fn member_list<'a>(
    title: &'static str,
    placeholder: &'static str,
    names: Vec<&'a str>,
) -> MemberListContext<'a> {
    MemberListContext {
        title,
        placeholder,
        members: names
            .into_iter()
            .enumerate()
            .map(|(i, name)| MemberListEntryContext { position: i + 1, name })
            .collect(),
    }
}

fn initialize_handlebars(handlebars: &mut Handlebars) -> Result<()> {
    handlebars.set_strict_mode(true);
    // Markdown output; member names go in verbatim.
    handlebars.register_escape_fn(no_escape);
    handlebars.register_template_string(
        "assignment_report",
        include_str!("../template/assignment_report.md.hbs"),
    )?;
    Ok(())
}

pub fn render_markdown_report(report: &Report, generated_at: NaiveDateTime) -> Result<String> {
    let mut handlebars = Handlebars::new();
    initialize_handlebars(&mut handlebars)?;

    let stats = &report.stats;
    let context = MarkdownReportContext {
        generated_at: generated_at.format(TIMESTAMP_FORMAT).to_string(),
        total: stats.total,
        summary: vec![
            summary_line("Đã hoàn thành Bài 1", stats.completed_1, stats),
            summary_line("Đã hoàn thành Bài 2", stats.completed_2, stats),
            summary_line("Đã hoàn thành cả 2 bài", stats.completed_both, stats),
        ],
        rows: report
            .records
            .iter()
            .map(|r| MemberRowContext {
                name: &r.name,
                assignment_1: status(r.assignment_1),
                assignment_2: status(r.assignment_2),
            })
            .collect(),
        lists: vec![
            member_list(
                "Đã hoàn thành Bài 1",
                "Chưa có thành viên nào",
                report.with_assignment_1(),
            ),
            member_list(
                "Đã hoàn thành Bài 2",
                "Chưa có thành viên nào",
                report.with_assignment_2(),
            ),
            member_list(
                "Chưa hoàn thành bài nào",
                "Tất cả đã hoàn thành ít nhất 1 bài",
                report.with_neither(),
            ),
        ],
    };

    Ok(handlebars.render("assignment_report", &context)?)
}

/// Replaces `dest` with `contents`. The file only appears once fully written.
/// An existing report keeps its mode; a new one gets the umask default.
pub fn write_report(dest: &Path, contents: &str) -> Result<()> {
    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let existing = match fs::metadata(dest) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => return Err(e.into()),
    };
    // open(2) masks the requested 0666 with the umask
    let mut tmp = Builder::new()
        .permissions(Permissions::from_mode(0o666))
        .tempfile_in(dir)?;
    if let Some(permissions) = existing {
        tmp.as_file().set_permissions(permissions)?;
    }
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(dest)?;
    info!("Wrote {} bytes to {}", contents.len(), dest.display());
    Ok(())
}

pub fn create_report(report: &Report, dest: &Path, generated_at: NaiveDateTime) -> Result<()> {
    let contents = render_markdown_report(report, generated_at)?;
    write_report(dest, &contents)
}
