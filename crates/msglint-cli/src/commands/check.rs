use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use msglint_format::FormatKind;
use msglint_validate::{MessageValidator, Validator, ValidatorConfig};

use crate::manifest::Manifest;
use crate::report::{OutputFormat, Report};

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Declaration manifests, YAML unless the extension is `.json`.
    #[arg(required = true, value_name = "MANIFEST")]
    manifests: Vec<PathBuf>,
    /// Dialect assumed for format strings that do not name one.
    #[arg(long, value_name = "KIND", default_value = "printf")]
    default_format: FormatKind,
    /// How findings are printed.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Exits with 1 when any manifest has findings. Unreadable manifests are
/// errors and nothing is validated.
pub fn run(args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let manifests = args
        .manifests
        .iter()
        .map(|path| Manifest::load(path))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let config = ValidatorConfig::builder()
        .default_format(args.default_format)
        .build();
    let validator = MessageValidator::new(&config);

    let mut report = Report::default();
    for manifest in &manifests {
        let findings = validator.validate(&manifest.owner, &manifest.declarations);
        tracing::info!(
            owner = %manifest.owner,
            declarations = manifest.declarations.len(),
            findings = findings.len(),
            "checked manifest"
        );
        report.extend(&manifest.owner, &findings);
    }

    print!("{}", report.render(args.format)?);
    Ok(if report.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
