use crate::commands::LimitArgs;
use crate::output;

use std::path::PathBuf;
use std::str::FromStr;

use clap::Args;
use color_eyre::Result;

use matrix_service::{Axis, MatrixPlan, ServiceError};

/// Expand the matrix of a pipeline file and print every axis
#[derive(Args, Debug)]
pub struct ExpandArgs {
    /// Path to the pipeline YAML file
    pub pipeline: PathBuf,

    /// Output format: text, env, json
    #[arg(long, short = 'o', default_value = "text")]
    pub format: String,

    #[command(flatten)]
    pub limits: LimitArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `[n] KEY=VALUE,...`
    Text,
    /// `KEY=VALUE,...`
    Env,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "env" => Ok(OutputFormat::Env),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown output format '{}', expected one of: text, env, json",
                other
            )),
        }
    }
}

pub fn execute(args: ExpandArgs) -> Result<()> {
    let format: OutputFormat = args
        .format
        .parse()
        .map_err(|e: String| color_eyre::eyre::eyre!("{}", e))?;

    let pipeline_path = &args.pipeline;
    if !pipeline_path.exists() {
        color_eyre::eyre::bail!("Pipeline file not found: {}", pipeline_path.display());
    }

    output::status("Expanding", &format!("{}", pipeline_path.display()));

    let plan = match MatrixPlan::from_file(pipeline_path, args.limits.into()) {
        Ok(plan) => plan,
        Err(ServiceError::Parse(e)) => {
            output::parse_error(&e);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    if !plan.is_matrix_build() {
        output::info("No matrix defined; the pipeline runs a single default build");
    } else if plan.is_truncated() {
        output::warning(&format!(
            "Matrix truncated: {} of {} permutations emitted",
            plan.axes.len(),
            plan.permutations
        ));
    }

    tracing::debug!(axes = plan.axes.len(), format = ?format, "rendering axes");
    for line in render(&plan.axes, format)? {
        println!("{}", line);
    }

    output::success(&format!("{} axes", plan.axes.len()));
    Ok(())
}

/// Render axes as stdout lines
pub fn render(axes: &[Axis], format: OutputFormat) -> Result<Vec<String>> {
    let lines = match format {
        OutputFormat::Text => axes
            .iter()
            .enumerate()
            .map(|(i, axis)| format!("[{}] {}", i + 1, axis))
            .collect(),
        OutputFormat::Env => axes.iter().map(|axis| axis.to_string()).collect(),
        OutputFormat::Json => vec![serde_json::to_string_pretty(axes)?],
    };
    Ok(lines)
}
