use serde::Serialize;
use std::fmt::Display;

const RULE_WIDTH: usize = 60;

/// Aggregate counts of a facade, e.g. `School Report: Springfield High School`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub title: String,
    pub counts: Vec<(String, usize)>,
}

impl Report {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            counts: Vec::new(),
        }
    }

    pub fn count(mut self, label: impl Into<String>, value: usize) -> Self {
        self.counts.push((label.into(), value));
        self
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, value)| *value)
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{rule}")?;
        writeln!(f)?;
        for (label, value) in &self.counts {
            writeln!(f, "Total {label}: {value}")?;
        }
        writeln!(f)?;
        writeln!(f, "{rule}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_renders_banner_and_totals() {
        let report = Report::new("School Report: Springfield High School")
            .count("Students", 3)
            .count("Teachers", 2);
        let text = report.to_string();

        assert!(text.starts_with(&format!("\n{}\n", "=".repeat(60))));
        assert!(text.contains("School Report: Springfield High School\n"));
        assert!(text.contains("Total Students: 3\n"));
        assert!(text.contains("Total Teachers: 2\n"));
        assert_eq!(report.get("Teachers"), Some(2));
        assert_eq!(report.get("Rooms"), None);
    }
}
