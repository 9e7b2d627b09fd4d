use crate::config::SimulationConfig;
use crate::simulation::SimulationResult;
use colored::Colorize;
use failure::Error;
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Text,
    Html,
    Json,
}

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub inputs: &'a SimulationConfig,
    pub results: &'a SimulationResult,
}

pub fn render(format: ReportFormat, config: &SimulationConfig, result: &SimulationResult) -> Result<String, Error> {
    let report = match format {
        ReportFormat::Text => render_text(config, result)?,
        ReportFormat::Html => render_html(config, result)?,
        ReportFormat::Json => serde_json::to_string_pretty(&Report {
            inputs: config,
            results: result,
        })?,
    };

    Ok(report)
}

pub fn render_text(config: &SimulationConfig, result: &SimulationResult) -> Result<String, Error> {
    let mut out = String::new();

    writeln!(out, "{}", "Simulation Inputs".bold().underline())?;
    writeln!(out, "  Number of service counters: {}", config.counter_count)?;
    writeln!(out, "  Number of customers: {}", config.customer_count)?;
    writeln!(out, "  Service time per customer: {} units", config.service_time)?;
    writeln!(
        out,
        "  Arrival rate (customers per 2 units of time): {}",
        config.arrival_batch_size
    )?;
    writeln!(out)?;

    writeln!(out, "{}", "Simulation Results".bold().underline())?;
    writeln!(
        out,
        "  Total time taken: {} units",
        result.total_simulation_time.to_string().green()
    )?;
    for (i, stats) in result.per_counter_stats.iter().enumerate() {
        writeln!(out, "  {}", format!("Counter #{}:", i + 1).cyan())?;
        writeln!(out, "    Number of customers served: {}", stats.served_count)?;
        writeln!(out, "    Total service time: {} units", stats.total_service_time)?;
        writeln!(out, "    End time: {} units", stats.end_time)?;
        writeln!(out, "    Utilization: {:.1}%", result.utilization(i) * 100.0)?;
    }
    writeln!(out)?;

    writeln!(out, "{}", "Overall Statistics".bold().underline())?;
    writeln!(out, "  Total wait time: {} units", result.total_wait_time)?;
    writeln!(
        out,
        "  Average waiting time per customer: {} units",
        format!("{:.2}", result.average_wait_time).yellow()
    )?;

    Ok(out)
}

pub fn render_html(config: &SimulationConfig, result: &SimulationResult) -> Result<String, Error> {
    let mut out = String::new();

    out.push_str("<html><body><h2>Simulation Inputs</h2><ul>");
    write!(out, "<li>Number of service counters: {}</li>", config.counter_count)?;
    write!(out, "<li>Number of customers: {}</li>", config.customer_count)?;
    write!(out, "<li>Service time per customer: {} units</li>", config.service_time)?;
    write!(
        out,
        "<li>Arrival rate (customers per 2 units of time): {}</li>",
        config.arrival_batch_size
    )?;
    out.push_str("</ul>");

    out.push_str("<h2>Simulation Results</h2><ul>");
    write!(out, "<li>Total time taken: {} units</li>", result.total_simulation_time)?;
    for (i, stats) in result.per_counter_stats.iter().enumerate() {
        write!(out, "<li>Counter #{}:<ul>", i + 1)?;
        write!(out, "<li>Number of customers served: {}</li>", stats.served_count)?;
        write!(out, "<li>Total service time: {} units</li>", stats.total_service_time)?;
        write!(out, "<li>End time: {} units</li>", stats.end_time)?;
        write!(out, "<li>Utilization: {:.1}%</li>", result.utilization(i) * 100.0)?;
        out.push_str("</ul></li>");
    }
    out.push_str("</ul>");

    out.push_str("<h2>Overall Statistics</h2><ul>");
    write!(out, "<li>Total wait time: {} units</li>", result.total_wait_time)?;
    write!(
        out,
        "<li>Average waiting time per customer: {:.2} units</li>",
        result.average_wait_time
    )?;
    out.push_str("</ul></body></html>");

    Ok(out)
}
