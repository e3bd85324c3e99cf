use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use diode_api::config::{Credential, HttpServerConfig, DEFAULT_BIND_ADDR};
use diode_core::analysis::{SweepPlan, SWEEP_POINTS, SWEEP_START, SWEEP_STOP};
use diode_core::bench::Bench;
use diode_core::export::write_sweep_text;
use diode_devices::diode::{DiodeParams, Material};

/// Diode I-V lab bench
#[derive(Debug, Parser)]
#[command(name = "diode-lab", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Measure current and dissipation at one voltage
    Measure {
        #[command(flatten)]
        diode: DiodeArgs,
        /// Applied voltage [V]
        #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
        voltage: f64,
    },
    /// Sweep a voltage range and print the I-V curve
    Sweep {
        #[command(flatten)]
        diode: DiodeArgs,
        /// First sweep voltage [V]
        #[arg(long, default_value_t = SWEEP_START, allow_negative_numbers = true)]
        start: f64,
        /// Last sweep voltage [V]
        #[arg(long, default_value_t = SWEEP_STOP, allow_negative_numbers = true)]
        stop: f64,
        /// Number of samples, endpoints included
        #[arg(long, default_value_t = SWEEP_POINTS)]
        points: usize,
        /// Digits after the decimal point for currents
        #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(1..=15))]
        precision: u8,
        /// Also write the sweep as a text table
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run the HTTP lab service
    Serve {
        /// Listen address
        #[arg(long, env = "DIODE_LAB_ADDR", default_value = DEFAULT_BIND_ADDR)]
        addr: String,
        /// Login account as name:password; repeatable, replaces the default account
        #[arg(long = "user", value_name = "NAME:PASSWORD")]
        users: Vec<Credential>,
    },
}

#[derive(Debug, Args)]
struct DiodeArgs {
    /// Junction material: Si, Zener, or any other name for a leaky junction
    #[arg(short, long, default_value = "Si")]
    material: String,
    /// Junction temperature [C]
    #[arg(short, long, default_value_t = 27.0, allow_negative_numbers = true)]
    temp: f64,
    /// Zener breakdown voltage [V]
    #[arg(long, default_value_t = 5.1)]
    zener_v: f64,
    /// Ideality factor
    #[arg(short = 'n', long, default_value_t = 1.5)]
    ideality: f64,
}

impl DiodeArgs {
    fn params(&self) -> DiodeParams {
        DiodeParams {
            material: Material::from_name(&self.material),
            temp_c: self.temp,
            zener_v: self.zener_v,
            ideality: self.ideality,
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Measure { diode, voltage } => run_measure(&diode, voltage),
        Command::Sweep {
            diode,
            start,
            stop,
            points,
            precision,
            output,
        } => {
            let plan = SweepPlan {
                start,
                stop,
                points,
            };
            run_sweep(&diode, &plan, precision as usize, output);
        }
        Command::Serve { addr, users } => {
            let config = HttpServerConfig {
                bind_addr: addr,
                credentials: users,
            };
            if let Err(err) = diode_api::http::run(config).await {
                tracing::error!("{}", err);
                std::process::exit(1);
            }
        }
    }
}

fn run_measure(diode: &DiodeArgs, voltage: f64) {
    let params = diode.params();
    let bench = Bench::new(&params);
    let m = bench.measure(voltage);
    tracing::debug!(material = %params.material, temp_k = bench.model.temperature_kelvin(), "measure");

    println!("material: {}", params.material);
    println!("V  = {:.6} V", m.voltage);
    println!("I  = {:.6e} A", m.current);
    println!("P  = {:.6e} W", m.power);
    println!("vt = {:.6e} V", m.thermal_voltage);
    println!("Is = {:.6e} A", m.saturation_current);
    println!("status: {}", m.status);
}

fn run_sweep(diode: &DiodeArgs, plan: &SweepPlan, precision: usize, output: Option<PathBuf>) {
    let bench = Bench::new(&diode.params());
    tracing::info!(
        "sweep: {} points from {} V to {} V step {}",
        plan.points,
        plan.start,
        plan.stop,
        plan.step()
    );
    let points = bench.sweep(plan);

    println!("{:>10}  {:>16}", "V", "I");
    for p in &points {
        println!("{:>10.3}  {:>16.*e}", p.voltage, precision, p.current);
    }

    if let Some(path) = output {
        if let Err(err) = write_sweep_text(&bench.model, &points, &path, precision) {
            tracing::error!("failed to write sweep: {}", err);
            std::process::exit(1);
        }
        tracing::info!("sweep written: {}", path.display());
    }
}
