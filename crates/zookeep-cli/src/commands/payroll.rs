//! `zookeep payroll` — the staff roster, sliced three ways.
//!
//! Default: the full roster sorted by salary, ascending.  `--group` buckets
//! it by salary bracket; `--bracket NAME` shows a single bucket.  All three
//! views are read-only projections of the same sample roster.

use std::collections::BTreeMap;

use clap::ValueEnum;
use serde_json::json;
use tracing::{debug, instrument};

use zookeep_adapters::InMemoryDirectory;
use zookeep_core::domain::{Employee, SalaryBracket};
use zookeep_core::prelude::PayrollService;

use crate::cli::{PayrollArgs, PayrollFormat};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};
use crate::output::OutputManager;

/// Execute the `payroll` command.
#[instrument(skip(config, output))]
pub fn execute(args: &PayrollArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let format = resolve_format(args, config);
    let directory = InMemoryDirectory::with_sample()?;
    let service = PayrollService::new(Box::new(directory));

    if let Some(raw) = &args.bracket {
        let bracket: SalaryBracket = raw.parse().map_err(|_| CliError::UnknownBracket {
            bracket: raw.clone(),
        })?;
        let members = service.in_bracket(bracket)?;
        debug!(bracket = %bracket, count = members.len(), "rendering single bracket");
        render_bracket(bracket, &members, format, output)
    } else if args.group {
        let groups = service.grouped_by_bracket()?;
        debug!(buckets = groups.len(), "rendering grouped roster");
        render_groups(&groups, format, output)
    } else {
        let roster = service.sorted_by_salary()?;
        debug!(count = roster.len(), "rendering sorted roster");
        render_roster(&roster, format, output)
    }
}

/// `--format` flag beats the config file; `table` is the last resort.
fn resolve_format(args: &PayrollArgs, config: &AppConfig) -> PayrollFormat {
    args.format.unwrap_or_else(|| {
        PayrollFormat::from_str(&config.defaults.payroll_format, true)
            .unwrap_or(PayrollFormat::Table)
    })
}

// ── Renderers ─────────────────────────────────────────────────────────────────

fn render_roster(
    roster: &[Employee],
    format: PayrollFormat,
    output: &OutputManager,
) -> CliResult<()> {
    match format {
        PayrollFormat::Table => {
            output.header("Hello world!")?;
            output.print(&format!(
                "Payroll as of {}",
                chrono::Local::now().format("%Y-%m-%d")
            ))?;
            for employee in roster {
                output.print(&employee.to_string())?;
            }
        }
        PayrollFormat::List => {
            for employee in roster {
                output.print(&employee.to_string())?;
            }
        }
        PayrollFormat::Json => {
            output.print(&serde_json::to_string_pretty(roster).map_err(json_error)?)?;
        }
        PayrollFormat::Csv => {
            output.print("name,salary")?;
            for employee in roster {
                output.print(&format!("{},{}", employee.name(), employee.salary()))?;
            }
        }
    }
    Ok(())
}

fn render_bracket(
    bracket: SalaryBracket,
    members: &[Employee],
    format: PayrollFormat,
    output: &OutputManager,
) -> CliResult<()> {
    match format {
        PayrollFormat::Table => {
            output.header(bracket.as_str())?;
            if members.is_empty() {
                output.warning("No staff in this bracket")?;
            }
            for employee in members {
                output.print(&employee.to_string())?;
            }
            Ok(())
        }
        PayrollFormat::Json => {
            let body = json!({
                "bracket": bracket.as_str(),
                "members": members,
            });
            output.print(&serde_json::to_string_pretty(&body).map_err(json_error)?)?;
            Ok(())
        }
        // List and Csv render a bracket like any other roster slice.
        _ => render_roster(members, format, output),
    }
}

fn render_groups(
    groups: &BTreeMap<SalaryBracket, Vec<Employee>>,
    format: PayrollFormat,
    output: &OutputManager,
) -> CliResult<()> {
    match format {
        PayrollFormat::Table | PayrollFormat::List => {
            for (bracket, members) in groups {
                output.header(bracket.as_str())?;
                for employee in members {
                    output.print(&format!("  {employee}"))?;
                }
            }
        }
        PayrollFormat::Json => {
            // Keyed by bracket label; empty buckets are simply absent.
            let body: BTreeMap<&str, &Vec<Employee>> = groups
                .iter()
                .map(|(bracket, members)| (bracket.as_str(), members))
                .collect();
            output.print(&serde_json::to_string_pretty(&body).map_err(json_error)?)?;
        }
        PayrollFormat::Csv => {
            output.print("bracket,name,salary")?;
            for (bracket, members) in groups {
                for employee in members {
                    output.print(&format!(
                        "{},{},{}",
                        bracket.as_str(),
                        employee.name(),
                        employee.salary()
                    ))?;
                }
            }
        }
    }
    Ok(())
}

fn json_error(err: serde_json::Error) -> CliError {
    CliError::Core(zookeep_core::error::ZookeepError::Internal {
        message: format!("failed to serialize output: {err}"),
    })
}
