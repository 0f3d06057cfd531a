//! Line accounting for converted documents.

use std::fmt;
use std::ops::AddAssign;

use serde::Serialize;

/// Lines recognized structurally (`hits`) vs. passed through (`misses`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineTally {
    pub hits: usize,
    pub misses: usize,
}

impl LineTally {
    /// Creates a tally.
    pub fn new(hits: usize, misses: usize) -> Self {
        Self { hits, misses }
    }

    /// Records one recognized line.
    pub fn hit(&mut self) {
        self.hits += 1;
    }

    /// Records one passed-through line.
    pub fn miss(&mut self) {
        self.misses += 1;
    }

    /// Total lines accounted for.
    pub fn accounted(&self) -> usize {
        self.hits + self.misses
    }
}

impl AddAssign for LineTally {
    fn add_assign(&mut self, other: Self) {
        self.hits += other.hits;
        self.misses += other.misses;
    }
}

/// Per-file coverage summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    pub file_name: String,
    pub hits: usize,
    pub misses: usize,
    /// Physical line count of the input.
    pub total: usize,
}

impl CoverageReport {
    /// Builds a report from a tally and the input line count.
    pub fn new(file_name: impl Into<String>, tally: LineTally, total: usize) -> Self {
        Self {
            file_name: file_name.into(),
            hits: tally.hits,
            misses: tally.misses,
            total,
        }
    }

    /// Lines accounted for by the converter.
    pub fn accounted(&self) -> usize {
        self.hits + self.misses
    }

    /// True when some lines were counted more than once.
    pub fn is_over_counted(&self) -> bool {
        self.accounted() > self.total
    }

    /// True when every line was counted exactly once.
    pub fn is_complete(&self) -> bool {
        self.accounted() == self.total
    }
}

impl fmt::Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}/{}/{} ({}){}",
            self.file_name,
            self.hits,
            self.misses,
            self.total,
            self.accounted(),
            if self.is_over_counted() { " !" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_sum() {
        let mut tally = LineTally::new(1, 2);
        tally += LineTally::new(3, 4);
        tally.hit();
        tally.miss();
        assert_eq!(tally, LineTally::new(5, 7));
        assert_eq!(tally.accounted(), 12);
    }

    #[test]
    fn test_report_display() {
        let report = CoverageReport::new("intro.txt", LineTally::new(10, 5), 15);
        assert_eq!(report.to_string(), "intro.txt: 10/5/15 (15)");
        assert!(report.is_complete());
    }

    #[test]
    fn test_report_flags_over_count() {
        let report = CoverageReport::new("intro.txt", LineTally::new(10, 6), 15);
        assert_eq!(report.to_string(), "intro.txt: 10/6/15 (16) !");
        assert!(report.is_over_counted());
    }

    #[test]
    fn test_report_serializes() {
        let report = CoverageReport::new("a.txt", LineTally::new(1, 1), 2);
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"file_name":"a.txt","hits":1,"misses":1,"total":2}"#);
    }
}
