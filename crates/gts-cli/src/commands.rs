//! Subcommand implementations.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::info;

use gts_ingest::{Dataset, load_csv};
use gts_model::{SelectionRequest, SelectionResult, VariableOrder};
use gts_report::{build_wide_table, stata_variable_name, write_wide_csv, write_wide_dta};
use gts_transform::{SummaryStats, run_selection, summarize};

use crate::cli::{DatasetArgs, ExportArgs, OutputFormatArg, SelectionArgs, StatsArgs, VariablesArgs};

/// Per-variable line of the result summary.
pub struct VariableSummary {
    pub variable: String,
    pub points: usize,
    pub first_year: i32,
    pub last_year: i32,
    pub stats: Option<SummaryStats>,
}

/// Everything the summary printer needs after a run.
pub struct RunSummary {
    pub country: String,
    pub transformation: String,
    pub variables: Vec<VariableSummary>,
    pub warnings: Vec<String>,
    pub outputs: Vec<PathBuf>,
}

fn build_request(dataset: &Dataset, args: &SelectionArgs) -> Result<SelectionRequest> {
    let variables = if args.variables.is_empty() {
        let all = dataset.variables(&args.country);
        if all.is_empty() {
            bail!("country {:?} not found in dataset", args.country);
        }
        all
    } else {
        args.variables.clone()
    };

    let years = dataset.years();
    let start_year = args.start.unwrap_or_else(|| years[0]);
    let end_year = args.end.unwrap_or_else(|| years[years.len() - 1]);

    Ok(SelectionRequest {
        country: args.country.clone(),
        variables,
        start_year,
        end_year,
        transformation: args.transform.into(),
        smoothing_window: args.smooth,
    })
}

fn summarize_result(result: &SelectionResult, outputs: Vec<PathBuf>) -> RunSummary {
    let variables = result
        .series
        .iter()
        .map(|series| VariableSummary {
            variable: series.variable.clone(),
            points: series.len(),
            first_year: series.points.first().map(|p| p.year).unwrap_or_default(),
            last_year: series.points.last().map(|p| p.year).unwrap_or_default(),
            stats: summarize(series),
        })
        .collect();
    RunSummary {
        country: result.country.clone(),
        transformation: result.transformation.to_string(),
        variables,
        warnings: result.warnings.clone(),
        outputs,
    }
}

fn load_order(path: Option<&PathBuf>) -> Result<VariableOrder> {
    match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("read order file: {}", path.display()))?;
            let order: VariableOrder = serde_json::from_str(&contents)
                .with_context(|| format!("parse order file: {}", path.display()))?;
            Ok(order)
        }
        None => Ok(VariableOrder::default_growth_accounting()),
    }
}

/// Run the pipeline and write the wide exports.
pub fn run_export(args: &ExportArgs) -> Result<RunSummary> {
    let dataset = load_csv(&args.selection.dataset)?;
    let request = build_request(&dataset, &args.selection)?;
    let result = run_selection(&dataset, &request);

    let mut outputs = Vec::new();
    if result.series.is_empty() {
        return Ok(summarize_result(&result, outputs));
    }

    let order = load_order(args.order_file.as_ref())?;
    let table = build_wide_table(&result.series, &result.country, &order)?;
    if table.variables.is_empty() {
        bail!(
            "none of the selected variables appear in the canonical order; \
             nothing to export"
        );
    }

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("create {}", args.output_dir.display()))?;
    let stem = stata_variable_name(&result.country);
    if matches!(args.format, OutputFormatArg::Csv | OutputFormatArg::Both) {
        let path = args.output_dir.join(format!("{stem}.csv"));
        write_wide_csv(&path, &table)?;
        info!(path = %path.display(), "wrote csv export");
        outputs.push(path);
    }
    if matches!(args.format, OutputFormatArg::Dta | OutputFormatArg::Both) {
        let path = args.output_dir.join(format!("{stem}.dta"));
        write_wide_dta(&path, &table)?;
        info!(path = %path.display(), "wrote dta export");
        outputs.push(path);
    }

    Ok(summarize_result(&result, outputs))
}

/// Run the pipeline and report statistics only.
pub fn run_stats(args: &StatsArgs) -> Result<RunSummary> {
    let dataset = load_csv(&args.selection.dataset)?;
    let request = build_request(&dataset, &args.selection)?;
    let result = run_selection(&dataset, &request);
    Ok(summarize_result(&result, Vec::new()))
}

/// List the countries in a dataset.
pub fn run_countries(args: &DatasetArgs) -> Result<()> {
    let dataset = load_csv(&args.dataset)?;
    for country in dataset.countries() {
        println!("{country}");
    }
    Ok(())
}

/// List the variables available for one country.
pub fn run_variables(args: &VariablesArgs) -> Result<()> {
    let dataset = load_csv(&args.dataset)?;
    let variables = dataset.variables(&args.country);
    if variables.is_empty() {
        bail!("country {:?} not found in dataset", args.country);
    }
    for variable in variables {
        println!("{variable}");
    }
    Ok(())
}
