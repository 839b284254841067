use std::fmt::Write;

use crate::types::Report;

const RULE_WIDTH: usize = 60;

fn status(done: bool) -> &'static str {
    if done {
        "✓"
    } else {
        "✗"
    }
}

pub fn render_console_report(report: &Report) -> String {
    let mut out = String::new();
    write_console_report(&mut out, report).expect("writing to a String cannot fail");
    out
}

fn write_console_report(out: &mut String, report: &Report) -> std::fmt::Result {
    let stats = &report.stats;
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out, "{}", rule)?;
    writeln!(out, "BÁO CÁO HOÀN THÀNH BÀI TẬP")?;
    writeln!(out, "{}", rule)?;
    writeln!(out)?;

    writeln!(out, "Tổng số thành viên: {}", stats.total)?;
    writeln!(out, "Đã hoàn thành Bài 1: {}/{}", stats.completed_1, stats.total)?;
    writeln!(out, "Đã hoàn thành Bài 2: {}/{}", stats.completed_2, stats.total)?;
    writeln!(out, "Đã hoàn thành cả 2 bài: {}/{}", stats.completed_both, stats.total)?;
    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(out)?;

    writeln!(out, "{:<20} {:<10} {:<10}", "Thành viên", "Bài 1", "Bài 2")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for record in report.records.iter() {
        writeln!(
            out,
            "{:<20} {:<10} {:<10}",
            record.name,
            status(record.assignment_1),
            status(record.assignment_2)
        )?;
    }
    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(out)?;

    writeln!(out, "DANH SÁCH CHI TIẾT:")?;
    writeln!(out)?;
    write_list(
        out,
        "Đã hoàn thành Bài 1:",
        &report.with_assignment_1(),
        "(Chưa có thành viên nào)",
    )?;
    write_list(
        out,
        "Đã hoàn thành Bài 2:",
        &report.with_assignment_2(),
        "(Chưa có thành viên nào)",
    )?;
    write_list(
        out,
        "Chưa hoàn thành bài nào:",
        &report.with_neither(),
        "(Tất cả đã hoàn thành ít nhất 1 bài)",
    )?;
    writeln!(out, "{}", rule)
}

fn write_list(
    out: &mut String,
    title: &str,
    names: &[&str],
    placeholder: &str,
) -> std::fmt::Result {
    writeln!(out, "{}", title)?;
    if names.is_empty() {
        writeln!(out, "  {}", placeholder)?;
    }
    for (i, name) in names.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, name)?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::render_console_report;
    use crate::types::{CompletionRecord, Report};

    fn sample_report() -> Report {
        Report::new(
            [
                ("alice", true, false),
                ("bob", false, true),
                ("carol", false, true),
                ("dave", true, true),
            ]
            .iter()
            .map(|(name, a, b)| CompletionRecord {
                name: name.to_string(),
                assignment_1: *a,
                assignment_2: *b,
            })
            .collect(),
        )
    }

    #[test]
    fn summary_lines() {
        let out = render_console_report(&sample_report());
        let banner = format!("{}\nBÁO CÁO HOÀN THÀNH BÀI TẬP\n", "=".repeat(60));
        assert!(out.starts_with(&banner));
        assert!(out.contains("Tổng số thành viên: 4\n"));
        assert!(out.contains("Đã hoàn thành Bài 1: 2/4\n"));
        assert!(out.contains("Đã hoàn thành Bài 2: 3/4\n"));
        assert!(out.contains("Đã hoàn thành cả 2 bài: 1/4\n"));
    }

    #[test]
    fn table_rows_are_padded() {
        let out = render_console_report(&sample_report());
        let pad = |n: usize| " ".repeat(n);
        assert!(out.contains(&format!("Thành viên{} Bài 1{} Bài 2{}\n", pad(10), pad(5), pad(5))));
        assert!(out.contains(&format!("alice{} ✓{} ✗{}\n", pad(15), pad(9), pad(9))));
        assert!(out.contains(&format!("dave{} ✓{} ✓{}\n", pad(16), pad(9), pad(9))));
    }

    #[test]
    fn detail_lists() {
        let out = render_console_report(&sample_report());
        assert!(out.contains("Đã hoàn thành Bài 1:\n  1. alice\n  2. dave\n\n"));
        assert!(out.contains("Đã hoàn thành Bài 2:\n  1. bob\n  2. carol\n  3. dave\n\n"));
        assert!(out.contains(
            "Chưa hoàn thành bài nào:\n  (Tất cả đã hoàn thành ít nhất 1 bài)\n\n"
        ));
        assert!(out.ends_with(&format!("{}\n", "=".repeat(60))));
    }

    #[test]
    fn empty_report_uses_placeholders() {
        let out = render_console_report(&Report::new(Vec::new()));
        assert!(out.contains("Tổng số thành viên: 0\n"));
        assert!(out.contains("Đã hoàn thành Bài 1: 0/0\n"));
        assert!(out.contains("Đã hoàn thành Bài 1:\n  (Chưa có thành viên nào)\n"));
        assert!(out.contains("Đã hoàn thành Bài 2:\n  (Chưa có thành viên nào)\n"));
    }
}
