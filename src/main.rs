use bank_queue::config::{self, SimulationConfig};
use bank_queue::console::run_console;
use bank_queue::logging::init_logging;
use bank_queue::report::{self, ReportFormat};
use bank_queue::server::run_server;
use bank_queue::simulate_with_trace;
use clap::{Args, Parser, Subcommand};
use failure::{err_msg, Error};
use std::io;
use std::path::PathBuf;
use std::process;

/// Bank queue simulator
///
/// Customers arrive in fixed batches every 2 units of time, join the shortest
/// counter queue and are served in arrival order.
#[derive(Parser, Debug)]
#[command(name = "bank-queue")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log level for the simulator, overridden by RUST_LOG
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a single simulation and print its report
    Run(RunArgs),
    /// Ask for the inputs interactively, repeat until declined
    Console {
        #[arg(long, value_enum, default_value = "text")]
        format: ReportFormat,
    },
    /// Serve simulations over HTTP
    Serve {
        #[arg(short, long, default_value = "8000")]
        port: u16,
    },
}

#[derive(Args, Debug)]
struct RunArgs {
    /// JSON file with the simulation config, replaces the individual flags
    #[arg(long, conflicts_with_all = ["counters", "customers", "service_time", "arrival_rate"])]
    config: Option<PathBuf>,

    /// Number of service counters
    #[arg(long)]
    counters: Option<u32>,

    /// Number of customers
    #[arg(long)]
    customers: Option<u32>,

    /// Time each customer takes at the counter
    #[arg(long)]
    service_time: Option<u32>,

    /// Customers arriving every 2 units of time
    #[arg(long)]
    arrival_rate: Option<u32>,

    #[arg(long, value_enum, default_value = "text")]
    format: ReportFormat,

    /// Print every served customer before the report
    #[arg(long)]
    trace: bool,
}

impl RunArgs {
    fn simulation_config(&self) -> Result<SimulationConfig, Error> {
        if let Some(path) = &self.config {
            return config::load_config(path);
        }

        let value = |value: Option<u32>, flag: &str| {
            value.ok_or_else(|| err_msg(format!("missing --{} (or use --config)", flag)))
        };

        Ok(SimulationConfig::new(
            value(self.counters, "counters")?,
            value(self.customers, "customers")?,
            value(self.service_time, "service-time")?,
            value(self.arrival_rate, "arrival-rate")?,
        ))
    }
}

fn run_local(args: &RunArgs) -> Result<(), Error> {
    let config = args.simulation_config()?;
    let trace = simulate_with_trace(&config)?;

    if args.trace {
        for record in trace.records.iter() {
            println!(
                "In {} - Customer({}) arrived at {} served by Counter({}) until {}, waited {}",
                record.start_time,
                record.customer_id,
                record.arrival_time,
                record.counter + 1,
                record.end_time,
                record.wait_time
            );
        }

        println!();
    }

    print!("{}", report::render(args.format, &config, &trace.result)?);

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    init_logging(&cli.log_level);

    let outcome = match &cli.command {
        Command::Run(args) => run_local(args),
        Command::Console { format } => {
            let stdin = io::stdin();
            let stdout = io::stdout();

            run_console(&mut stdin.lock(), &mut stdout.lock(), *format).map(|_| ())
        }
        Command::Serve { port } => run_server(*port),
    };

    if let Err(err) = outcome {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
