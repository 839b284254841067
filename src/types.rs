use strum::EnumString;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRecord {
    pub name: String,
    pub assignment_1: bool,
    pub assignment_2: bool,
}

impl CompletionRecord {
    pub fn completed_both(&self) -> bool {
        self.assignment_1 && self.assignment_2
    }

    pub fn completed_none(&self) -> bool {
        !self.assignment_1 && !self.assignment_2
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AggregateStats {
    pub total: usize,
    pub completed_1: usize,
    pub completed_2: usize,
    pub completed_both: usize,
}

impl AggregateStats {
    pub fn from_records(records: &[CompletionRecord]) -> AggregateStats {
        AggregateStats {
            total: records.len(),
            completed_1: records.iter().filter(|r| r.assignment_1).count(),
            completed_2: records.iter().filter(|r| r.assignment_2).count(),
            completed_both: records.iter().filter(|r| r.completed_both()).count(),
        }
    }

    /// Share of `count` over all members, in percent. Zero members yields 0.0.
    pub fn percentage(&self, count: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        count as f64 / self.total as f64 * 100.0
    }
}

/// Records in member order together with the stats derived from them.
/// Both renderers read from this value only.
#[derive(Debug)]
pub struct Report {
    pub records: Vec<CompletionRecord>,
    pub stats: AggregateStats,
}

impl Report {
    pub fn new(records: Vec<CompletionRecord>) -> Report {
        let stats = AggregateStats::from_records(&records);
        Report { records, stats }
    }

    pub fn with_assignment_1(&self) -> Vec<&str> {
        self.names_where(|r| r.assignment_1)
    }

    pub fn with_assignment_2(&self) -> Vec<&str> {
        self.names_where(|r| r.assignment_2)
    }

    pub fn with_neither(&self) -> Vec<&str> {
        self.names_where(CompletionRecord::completed_none)
    }

    fn names_where(&self, pred: impl Fn(&CompletionRecord) -> bool) -> Vec<&str> {
        self.records
            .iter()
            .filter(|r| pred(*r))
            .map(|r| r.name.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum OutputMode {
    Console,
    Markdown,
    Both,
    #[strum(disabled)]
    Unrecognized(String),
}

impl OutputMode {
    /// Any literal is accepted; ones that name no mode render nothing.
    pub fn from_literal(literal: &str) -> OutputMode {
        literal
            .parse()
            .unwrap_or_else(|_| OutputMode::Unrecognized(literal.to_string()))
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, OutputMode::Unrecognized(_))
    }

    pub fn renders_console(&self) -> bool {
        matches!(self, OutputMode::Console | OutputMode::Both)
    }

    pub fn renders_markdown(&self) -> bool {
        matches!(self, OutputMode::Markdown | OutputMode::Both)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, assignment_1: bool, assignment_2: bool) -> CompletionRecord {
        CompletionRecord {
            name: name.to_string(),
            assignment_1,
            assignment_2,
        }
    }

    #[test]
    fn aggregates_counts() {
        let records = vec![
            record("alice", true, false),
            record("bob", false, true),
            record("carol", false, true),
            record("dave", true, true),
        ];
        let stats = AggregateStats::from_records(&records);
        assert_eq!(
            stats,
            AggregateStats {
                total: 4,
                completed_1: 2,
                completed_2: 3,
                completed_both: 1,
            }
        );
    }

    #[test]
    fn both_never_exceeds_either_count() {
        let flags = [(false, false), (true, false), (false, true), (true, true)];
        // every subset of the four flag combinations
        for mask in 0..16u8 {
            let records: Vec<CompletionRecord> = flags
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1u8 << *i) != 0)
                .map(|(i, (a, b))| record(&format!("m{}", i), *a, *b))
                .collect();
            let stats = AggregateStats::from_records(&records);
            assert!(stats.completed_both <= stats.completed_1.min(stats.completed_2));
            assert!(stats.completed_1.min(stats.completed_2) <= stats.total);
        }
    }

    #[test]
    fn percentage_of_empty_set_is_zero() {
        let stats = AggregateStats::from_records(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.percentage(0), 0.0);
    }

    #[test]
    fn percentage() {
        let stats = AggregateStats::from_records(&[
            record("a", true, false),
            record("b", false, false),
            record("c", false, false),
        ]);
        assert_eq!(format!("{:.1}", stats.percentage(stats.completed_1)), "33.3");
    }

    #[test]
    fn report_lists_keep_record_order() {
        let report = Report::new(vec![
            record("alice", true, false),
            record("bob", false, false),
            record("dave", true, true),
        ]);
        assert_eq!(report.with_assignment_1(), vec!["alice", "dave"]);
        assert_eq!(report.with_assignment_2(), vec!["dave"]);
        assert_eq!(report.with_neither(), vec!["bob"]);
    }

    #[test]
    fn parses_output_modes() {
        assert_eq!("console".parse::<OutputMode>().unwrap(), OutputMode::Console);
        assert_eq!("markdown".parse::<OutputMode>().unwrap(), OutputMode::Markdown);
        assert_eq!("both".parse::<OutputMode>().unwrap(), OutputMode::Both);

        assert!("Console".parse::<OutputMode>().is_err());
        assert!("unrecognized".parse::<OutputMode>().is_err());
        assert_eq!(OutputMode::from_literal("both"), OutputMode::Both);

        let other = OutputMode::from_literal("Console");
        assert_eq!(other, OutputMode::Unrecognized(String::from("Console")));
        assert!(!other.is_recognized());
        assert!(!other.renders_console());
        assert!(!other.renders_markdown());
    }
}
