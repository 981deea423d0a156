//! RXGUARD command-line interaction checker.
//!
//! Usage:
//!   rxguard check --drug Warfarin --drug Aspirin
//!   rxguard check --drug Metformin --condition "Severe Renal Impairment (eGFR <30)" --json
//!   rxguard check-json request.json
//!   rxguard lint --data my-reference.toml
//!   rxguard scenarios --export-log checks.json

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use rxguard_audit::InMemoryCheckLog;
use rxguard_contracts::{
    check::{CheckRequest, InteractionCheckResult},
    error::{RxError, RxResult},
};
use rxguard_core::InteractionEngine;
use rxguard_pharmacy::{
    gate::{GatePolicy, PrescribingDecision},
    render::render_text,
    scenarios::{all_scenarios, run_scenario},
};
use rxguard_reference::{engine_for, ReferenceDataset};
use rxguard_verify::{lint_dataset, LintLevel, RequestValidator};

// ── CLI definition ────────────────────────────────────────────────────────────

/// RXGUARD drug interaction, contraindication, and allergy checker.
#[derive(Parser)]
#[command(
    name = "rxguard",
    about = "Drug interaction, contraindication, and allergy cross-sensitivity checker",
    long_about = "Checks a set of drugs against a patient's allergies and conditions using\n\
                  a TOML reference dataset, and reports findings with severity flags."
)]
struct Cli {
    /// Reference dataset TOML. Defaults to the bundled dataset.
    #[arg(long, global = true, value_name = "PATH")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check drugs given on the command line.
    Check {
        /// A drug to check. Repeat for each drug.
        #[arg(long = "drug", value_name = "NAME")]
        drugs: Vec<String>,
        /// A known patient allergy. Repeat for each allergy.
        #[arg(long = "allergy", value_name = "ALLERGEN")]
        allergies: Vec<String>,
        /// A known patient condition. Repeat for each condition.
        #[arg(long = "condition", value_name = "CONDITION")]
        conditions: Vec<String>,
        /// Gate policy TOML used to decide proceed / acknowledge / block.
        #[arg(long, value_name = "PATH")]
        policy: Option<PathBuf>,
        /// Print the result as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Check a JSON request read from a file, or stdin when the path is "-".
    CheckJson {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Lint the reference dataset.
    Lint,
    /// Run the five clinical reference scenarios.
    Scenarios {
        /// Write the hash-chained check log to this file as JSON.
        #[arg(long, value_name = "PATH")]
        export_log: Option<PathBuf>,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = load_dataset(cli.data.as_deref()).and_then(|dataset| match cli.command {
        Command::Check {
            drugs,
            allergies,
            conditions,
            policy,
            json,
        } => {
            let request = CheckRequest {
                drug_names: drugs,
                patient_allergies: allergies,
                patient_conditions: conditions,
            };
            run_check(&dataset, &request, policy.as_deref(), json)
        }
        Command::CheckJson { file } => run_check_json(&dataset, &file),
        Command::Lint => run_lint(&dataset),
        Command::Scenarios { export_log } => run_scenarios(&dataset, export_log.as_deref()),
    });

    if let Err(e) = result {
        eprintln!("rxguard: {}", e);
        std::process::exit(1);
    }
}

fn load_dataset(path: Option<&Path>) -> RxResult<ReferenceDataset> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading reference dataset");
            ReferenceDataset::from_file(path)
        }
        None => ReferenceDataset::bundled(),
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn run_check(
    dataset: &ReferenceDataset,
    request: &CheckRequest,
    policy_path: Option<&Path>,
    json: bool,
) -> RxResult<()> {
    let policy = match policy_path {
        Some(path) => GatePolicy::from_toml_str(&read_input(path, "gate policy")?)?,
        None => GatePolicy::default(),
    };

    let result = engine_for(dataset).check_interactions(request)?;
    let decision = policy.evaluate(&result);

    if json {
        let out = serde_json::json!({ "result": result, "decision": decision });
        print_json(&out)?;
    } else {
        print!("{}", render_text(&result));
        println!();
        print_decision(&decision);
    }
    Ok(())
}

fn run_check_json(dataset: &ReferenceDataset, file: &Path) -> RxResult<()> {
    let text = read_input(file, "request")?;
    let request = RequestValidator::new()?.parse(&text)?;
    let result: InteractionCheckResult = engine_for(dataset).check_interactions(&request)?;
    print_json(&result)
}

fn run_lint(dataset: &ReferenceDataset) -> RxResult<()> {
    let report = lint_dataset(dataset);

    for finding in &report.findings {
        let level = match finding.level {
            LintLevel::Error => "error",
            LintLevel::Warning => "warning",
        };
        println!("{level:<8} {:<26} {}", finding.rule_id, finding.message);
    }
    println!(
        "{} rows checked, {} error(s), {} warning(s)",
        dataset.row_count(),
        report.errors().count(),
        report.warnings().count()
    );

    if report.passed {
        Ok(())
    } else {
        Err(RxError::ConfigError {
            reason: "reference dataset failed lint".to_string(),
        })
    }
}

fn run_scenarios(dataset: &ReferenceDataset, export_path: Option<&Path>) -> RxResult<()> {
    let engine: InteractionEngine = engine_for(dataset);
    let log = InMemoryCheckLog::new("rxguard-scenarios");

    let mut failed = 0usize;
    for (idx, scenario) in all_scenarios().iter().enumerate() {
        let outcome = run_scenario(&engine, &log, scenario)?;
        let result = &outcome.record.result;

        println!("=== Scenario {}: {} ===", idx + 1, scenario.name);
        println!("  Drugs:       {}", scenario.request.drug_names.join(", "));
        if !scenario.request.patient_allergies.is_empty() {
            println!("  Allergies:   {}", scenario.request.patient_allergies.join(", "));
        }
        if !scenario.request.patient_conditions.is_empty() {
            println!("  Conditions:  {}", scenario.request.patient_conditions.join(", "));
        }
        println!(
            "  Findings:    {} interaction(s), {} contraindication(s), {} allergy alert(s)",
            result.interactions.len(),
            result.contraindications.len(),
            result.allergy_alerts.len()
        );
        println!(
            "  Flags:       critical={} major={}",
            result.has_critical_issues, result.has_major_issues
        );
        if outcome.passed() {
            println!("  Outcome:     PASS");
        } else {
            failed += 1;
            println!("  Outcome:     FAIL");
            for mismatch in &outcome.mismatches {
                println!("    - {}", mismatch);
            }
        }
        println!();
    }

    let export = log.export_log()?;
    println!(
        "Check log integrity: {} ({} entr{}, terminal hash {})",
        if log.verify_integrity() { "VERIFIED" } else { "FAILED" },
        export.entries.len(),
        if export.entries.len() == 1 { "y" } else { "ies" },
        export.terminal_hash
    );

    if let Some(path) = export_path {
        std::fs::write(path, to_json(&export)?).map_err(|e| RxError::OutputFailed {
            reason: format!("failed to write check log '{}': {}", path.display(), e),
        })?;
        println!("Check log written to {}", path.display());
    }

    if failed == 0 {
        Ok(())
    } else {
        Err(RxError::ConfigError {
            reason: format!("{failed} scenario(s) did not match the reference data"),
        })
    }
}

// ── Input / output helpers ────────────────────────────────────────────────────

/// Read a file named on the command line, or stdin when `path` is "-".
fn read_input(path: &Path, what: &str) -> RxResult<String> {
    let read = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        std::fs::read_to_string(path)
    };
    read.map_err(|e| RxError::ConfigError {
        reason: format!("failed to read {what} '{}': {e}", path.display()),
    })
}

fn to_json<T: serde::Serialize>(value: &T) -> RxResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| RxError::OutputFailed {
        reason: format!("failed to serialize output: {e}"),
    })
}

fn print_json<T: serde::Serialize>(value: &T) -> RxResult<()> {
    println!("{}", to_json(value)?);
    Ok(())
}

fn print_decision(decision: &PrescribingDecision) {
    match decision {
        PrescribingDecision::Proceed => println!("Decision: PROCEED"),
        PrescribingDecision::RequireAcknowledgement { reasons } => {
            println!("Decision: ACKNOWLEDGEMENT REQUIRED");
            for reason in reasons {
                println!("  - {}", reason);
            }
        }
        PrescribingDecision::Block { reasons } => {
            println!("Decision: BLOCKED");
            for reason in reasons {
                println!("  - {}", reason);
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
