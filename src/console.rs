use crate::config::{self, Count, Reason, SimulationConfig};
use crate::report::{self, ReportFormat};
use crate::simulation::simulate;
use failure::Error;
use std::io::{BufRead, Write};
use tracing::debug;

const PROMPTS: [(&str, &str); 4] = [
    (config::COUNTER_COUNT, "Enter number of service counters:"),
    (config::CUSTOMER_COUNT, "Enter number of customers:"),
    (config::SERVICE_TIME, "Enter time each customer will take at the counter:"),
    (
        config::ARRIVAL_BATCH_SIZE,
        "Enter number of customers coming to the bank every 2 units of time:",
    ),
];

/// Reads one line, `None` once the input is closed.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, Error> {
    let mut line = String::new();

    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line))
}

/// Asks until a positive number is given. `None` means the user cancelled.
fn ask_count<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    field: &'static str,
    message: &str,
) -> Result<Option<Count>, Error> {
    loop {
        writeln!(output, "{}", message)?;
        output.flush()?;

        let line = match read_line(input)? {
            Some(line) => line,
            None => return Ok(None),
        };

        match config::parse_field(field, &line) {
            Ok(value) => return Ok(Some(value)),
            Err(err) => {
                debug!(field, reason = %err.reason, "rejected console input");

                match err.reason {
                    Reason::NotANumber => writeln!(output, "Please enter a valid number!")?,
                    Reason::NotPositive => writeln!(output, "Please enter a positive number!")?,
                    Reason::TooLarge => writeln!(output, "Please enter a smaller number!")?,
                }
            }
        }
    }
}

pub fn ask_config<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<SimulationConfig>, Error> {
    let mut values = [0; 4];

    for (value, &(field, message)) in values.iter_mut().zip(PROMPTS.iter()) {
        match ask_count(input, output, field, message)? {
            Some(v) => *value = v,
            None => return Ok(None),
        }
    }

    Ok(Some(SimulationConfig::new(values[0], values[1], values[2], values[3])))
}

fn ask_restart<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool, Error> {
    writeln!(output, "Would you like to run another simulation? [y/N]")?;
    output.flush()?;

    let answer = read_line(input)?.unwrap_or_default();
    let answer = answer.trim().to_lowercase();

    Ok(answer == "y" || answer == "yes")
}

/// Interactive loop: collect inputs, simulate, print report, offer another run.
/// Returns the number of completed simulations.
pub fn run_console<R: BufRead, W: Write>(input: &mut R, output: &mut W, format: ReportFormat) -> Result<u32, Error> {
    let mut runs = 0;

    loop {
        let config = match ask_config(input, output)? {
            Some(config) => config,
            None => break,
        };

        let result = simulate(&config)?;
        runs += 1;

        writeln!(output)?;
        write!(output, "{}", report::render(format, &config, &result)?)?;
        writeln!(output)?;

        if !ask_restart(input, output)? {
            break;
        }
    }

    Ok(runs)
}
