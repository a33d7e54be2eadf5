//! Subcommand execution

use crate::error::CliResult;
use crate::input::InputArgs;
use crate::output::{format_attributes, format_report, to_json, AttributeRow, OutputFormat};
use serde::Serialize;
use typetraits_evaluator::{evaluate, TraitReport};
use typetraits_render::Renderer;
use typetraits_types::Attribute;

/// Combined output of `show`
#[derive(Debug, Serialize)]
struct ShowOutput {
    report: TraitReport,
    declaration: Option<String>,
    error: Option<String>,
}

/// Print the trait report for one attribute set
pub fn evaluate_cmd(input: &InputArgs, format: OutputFormat) -> CliResult<()> {
    let set = input.load()?;
    let report = evaluate(&set);
    match format {
        OutputFormat::Table => print!("{}", format_report(&report)),
        OutputFormat::Json => println!("{}", to_json(&report)?),
    }
    Ok(())
}

/// Print the rendered declaration, or fail with the render error
pub fn render_cmd(input: &InputArgs, renderer: &Renderer, format: OutputFormat) -> CliResult<()> {
    let set = input.load()?;
    let declaration = renderer.render(&set)?;
    match format {
        OutputFormat::Table => println!("{}", declaration),
        OutputFormat::Json => println!("{}", to_json(&declaration)?),
    }
    Ok(())
}

/// Print both the report and the declaration
///
/// A render error is shown next to the report and still fails the command.
pub fn show_cmd(input: &InputArgs, renderer: &Renderer, format: OutputFormat) -> CliResult<()> {
    let set = input.load()?;
    let report = evaluate(&set);
    let rendered = renderer.render(&set);

    match format {
        OutputFormat::Table => {
            print!("{}", format_report(&report));
            if let Ok(declaration) = &rendered {
                println!();
                println!("{}", declaration);
            }
        }
        OutputFormat::Json => {
            let output = ShowOutput {
                report,
                declaration: rendered.as_ref().ok().cloned(),
                error: rendered.as_ref().err().map(|e| e.to_string()),
            };
            println!("{}", to_json(&output)?);
        }
    }

    rendered.map(|_| ()).map_err(Into::into)
}

/// List the attribute vocabulary
pub fn attributes_cmd(format: OutputFormat) -> CliResult<()> {
    let rows: Vec<AttributeRow> = Attribute::ALL.into_iter().map(AttributeRow::from).collect();
    match format {
        OutputFormat::Table => println!("{}", format_attributes(rows)),
        OutputFormat::Json => println!("{}", to_json(&rows)?),
    }
    Ok(())
}
