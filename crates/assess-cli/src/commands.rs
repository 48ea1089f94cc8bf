use anyhow::{Context, Result};
use serde::Serialize;

use assess_cli::config::{OptionOverrides, resolve_options};
use assess_cli::groups::collect_groups;
use assess_cli::pipeline::{
    AnalyzeReport, analyze_upload, load_session, questions_report, rejected_columns,
    screen_upload,
};
use assess_model::{AnalysisOptions, PiiVerdict};

use crate::cli::{AnalyzeArgs, OutputFormatArg, UploadArgs};
use crate::summary::{print_pii_verdict, print_questions, print_results};

pub fn run_questions(args: &UploadArgs) -> Result<()> {
    let options = options_from_args(args)?;
    let session = load_session(&args.file, args.delimiter, options)
        .inspect_err(|error| show_rejection(error, args.format))?;
    let report = questions_report(&session)?;
    match args.format {
        OutputFormatArg::Table => print_questions(&report.questions, &report.warnings),
        OutputFormatArg::Json => print_json(&report)?,
    }
    Ok(())
}

/// Returns whether the export passed the screen.
pub fn run_check_pii(args: &UploadArgs) -> Result<bool> {
    let verdict = screen_upload(&args.file, args.delimiter)?;
    match args.format {
        OutputFormatArg::Table => print_pii_verdict(&verdict),
        OutputFormatArg::Json => print_json(&verdict)?,
    }
    Ok(verdict.is_valid)
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let upload = &args.upload;
    let groups = collect_groups(args.groups.as_deref(), &args.group)?;
    let options = options_from_args(upload)?;
    let report = analyze_upload(&upload.file, upload.delimiter, options, groups)
        .inspect_err(|error| show_rejection(error, upload.format))?;

    match (upload.format, &report) {
        (OutputFormatArg::Json, _) => print_json(&report)?,
        (OutputFormatArg::Table, AnalyzeReport::Questions(questions)) => {
            print_questions(&questions.questions, &questions.warnings);
        }
        (OutputFormatArg::Table, AnalyzeReport::Mastery(mastery)) => {
            print_results(&mastery.results, mastery.students, &mastery.warnings);
        }
    }
    Ok(())
}

fn show_rejection(error: &anyhow::Error, format: OutputFormatArg) {
    if format == OutputFormatArg::Table
        && let Some(columns) = rejected_columns(error)
    {
        print_pii_verdict(&PiiVerdict::from_offending(columns.to_vec()));
    }
}

fn options_from_args(args: &UploadArgs) -> Result<AnalysisOptions> {
    resolve_options(
        args.config.as_deref(),
        OptionOverrides {
            score_suffix: args.score_suffix.clone(),
            correct_prefix: args.correct_prefix.clone(),
            warn_threshold: args.warn_threshold,
        },
    )
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{json}");
    Ok(())
}
