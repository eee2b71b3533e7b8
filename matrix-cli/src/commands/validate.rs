use crate::commands::LimitArgs;
use crate::output;

use std::path::PathBuf;

use clap::Args;
use color_eyre::Result;

use matrix_service::{MatrixPlan, ServiceError};

/// Validate the matrix section of a pipeline YAML file
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the pipeline YAML file
    pub pipeline: PathBuf,

    #[command(flatten)]
    pub limits: LimitArgs,
}

pub fn execute(args: ValidateArgs) -> Result<()> {
    let pipeline_path = &args.pipeline;

    if !pipeline_path.exists() {
        color_eyre::eyre::bail!("Pipeline file not found: {}", pipeline_path.display());
    }

    output::status("Validating", &format!("{}", pipeline_path.display()));

    let plan = match MatrixPlan::from_file(pipeline_path, args.limits.into()) {
        Ok(plan) => plan,
        Err(ServiceError::Parse(e)) => {
            output::parse_error(&e);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    output::check("YAML syntax valid");

    if !plan.is_matrix_build() {
        output::info("No matrix defined; the pipeline runs a single default build");
        println!();
        output::success("Pipeline is valid");
        return Ok(());
    }

    for line in summary(&plan) {
        output::check(&line);
    }

    for line in truncation_warnings(&plan) {
        output::warning(&line);
    }

    println!();
    output::success("Matrix is valid");

    Ok(())
}

fn summary(plan: &MatrixPlan) -> Vec<String> {
    let names: Vec<&str> = plan.matrix.names().collect();
    vec![
        format!("Variables: {} ({})", names.len(), names.join(", ")),
        format!("Permutations: {}", plan.permutations),
        format!("Axes emitted: {}", plan.axes.len()),
    ]
}

fn truncation_warnings(plan: &MatrixPlan) -> Vec<String> {
    let mut warnings = Vec::new();

    if plan.dropped_axes() > 0 {
        warnings.push(format!(
            "{} permutations exceed the axis limit of {} and will not run",
            plan.dropped_axes(),
            plan.limits.max_axes()
        ));
    }

    if plan.dropped_variables() > 0 {
        let dropped: Vec<&str> = plan
            .matrix
            .names()
            .skip(plan.limits.max_tags())
            .collect();
        warnings.push(format!(
            "variables past the limit of {} are ignored: {}",
            plan.limits.max_tags(),
            dropped.join(", ")
        ));
    }

    if plan.axes.is_empty() {
        warnings.push("a matrix variable has no values; no axes will run".to_string());
    }

    warnings
}
