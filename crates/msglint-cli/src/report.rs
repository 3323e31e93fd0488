use std::fmt::{Display, Formatter};

use clap::ValueEnum;
use msglint_validate::{Finding, Severity};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `owner::name/arity: message` line per finding.
    #[default]
    Text,
    /// A JSON array of finding records.
    Json,
}

/// A finding detached from the declarations it borrowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub owner: String,
    pub declaration: String,
    pub parameter_count: usize,
    pub code: &'static str,
    pub severity: Severity,
    pub message: String,
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}::{}/{}: {}",
            self.owner, self.declaration, self.parameter_count, self.message
        )
    }
}

#[derive(Debug, Default)]
pub struct Report {
    records: Vec<Record>,
}

impl Report {
    pub fn extend(&mut self, owner: &str, findings: &[Finding<'_>]) {
        self.records.extend(findings.iter().map(|finding| Record {
            owner: owner.to_string(),
            declaration: finding.target().name.clone(),
            parameter_count: finding.target().parameter_count,
            code: finding.kind().code(),
            severity: finding.severity(),
            message: finding.message(),
        }));
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        Ok(match format {
            OutputFormat::Text => self
                .records
                .iter()
                .map(|record| format!("{}\n", record))
                .collect(),
            OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&self.records)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use msglint_validate::Declaration;

    use super::*;

    #[test]
    fn test_text_lines() {
        let declaration = Declaration::builder()
            .name("lost")
            .parameter_count(2)
            .message_tag(true)
            .format_string("lost %s")
            .build();
        let findings = [Finding::new(
            &declaration,
            msglint_validate::FindingKind::ParameterCountMismatch {
                format: "lost %s".to_string(),
                required: 1,
                provided: 2,
            },
        )];
        let mut report = Report::default();
        report.extend("net.Client", &findings);
        assert!(!report.is_empty());
        assert_eq!(
            report.render(OutputFormat::Text).unwrap(),
            "net.Client::lost/2: Parameter count does not match for format 'lost %s'. Required: 1 Provided: 2\n"
        );

        let json: serde_json::Value =
            serde_json::from_str(&report.render(OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json[0]["code"], "parameter-count-mismatch");
        assert_eq!(json[0]["severity"], "error");
    }

    #[test]
    fn test_empty_report() {
        let report = Report::default();
        assert_eq!(report.render(OutputFormat::Text).unwrap(), "");
        assert_eq!(report.render(OutputFormat::Json).unwrap(), "[]\n");
    }
}
