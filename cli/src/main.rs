mod commands;

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use dialgeom::Point;
use tracing_subscriber::EnvFilter;

use commands::{CliError, GaugeSpec, Output};


#[derive(Parser, Debug)]
#[command(name = "dialgeom", about = "Angle, circle-point and gauge-scale helpers")]
struct Cli {
    #[arg(long, env = "DIALGEOM_PRETTY", global = true, help = "Pretty-print JSON output")]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert degrees to radians.
    Radians {
        #[arg(allow_negative_numbers = true)]
        degrees: f64,
    },
    /// Convert radians to degrees.
    Degrees {
        #[arg(allow_negative_numbers = true)]
        radians: f64,
    },
    /// Wrap an angle into [0, 360).
    Normalize {
        #[arg(allow_negative_numbers = true)]
        degrees: f64,
    },
    /// Point on a circle at an angle.
    CirclePoint(CirclePointArgs),
    /// Point at a distance along an angle.
    DistancePoint(DistancePointArgs),
    /// Format a number for display.
    Format {
        #[arg(allow_negative_numbers = true)]
        number: f64,
    },
    /// Degrees swept per unit of scale.
    UnitAngle(GaugeArgs),
    /// Needle angle and tip for a value on a gauge.
    Needle(NeedleArgs),
}

#[derive(Args, Debug)]
struct CirclePointArgs {
    #[arg(allow_negative_numbers = true)]
    angle: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    x: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    y: f64,

    #[arg(long, allow_negative_numbers = true)]
    radius: f64,
}

#[derive(Args, Debug)]
struct DistancePointArgs {
    #[arg(allow_negative_numbers = true)]
    angle: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    x: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    y: f64,

    #[arg(long, allow_negative_numbers = true)]
    distance: f64,
}

#[derive(Args, Debug)]
struct GaugeArgs {
    #[arg(long, allow_negative_numbers = true)]
    start_angle: f64,

    #[arg(long, allow_negative_numbers = true)]
    end_angle: f64,

    #[arg(long, allow_negative_numbers = true)]
    scale_start: f64,

    #[arg(long, allow_negative_numbers = true)]
    scale_end: f64,
}

#[derive(Args, Debug)]
struct NeedleArgs {
    #[arg(allow_negative_numbers = true)]
    value: f64,

    #[command(flatten)]
    gauge: GaugeArgs,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    x: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    y: f64,

    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    radius: f64,

    #[arg(long, default_value_t = false, help = "Clamp the value into the scale first")]
    clamp: bool,
}

impl From<&GaugeArgs> for GaugeSpec {
    fn from(args: &GaugeArgs) -> Self {
        Self {
            start_angle: args.start_angle,
            end_angle: args.end_angle,
            scale_start: args.scale_start,
            scale_end: args.scale_end,
        }
    }
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "running");

    match execute(&cli) {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Run the parsed command and render its stdout text.
fn execute(cli: &Cli) -> Result<String, CliError> {
    let output = run(&cli.command)?;
    commands::render(&output, cli.pretty)
}

/// Logs go to stderr at `warn` unless `RUST_LOG` says otherwise.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(command: &Command) -> Result<Output, CliError> {
    match command {
        Command::Radians { degrees } => Ok(commands::radians(*degrees)),
        Command::Degrees { radians } => Ok(commands::degrees(*radians)),
        Command::Normalize { degrees } => Ok(commands::normalize(*degrees)),
        Command::CirclePoint(args) => commands::circle_point(args.angle, Point::new(args.x, args.y), args.radius),
        Command::DistancePoint(args) => {
            commands::distance_point(args.angle, Point::new(args.x, args.y), args.distance)
        }
        Command::Format { number } => Ok(commands::format(*number)),
        Command::UnitAngle(gauge) => commands::unit_angle(gauge.into()),
        Command::Needle(args) => commands::needle(
            (&args.gauge).into(),
            args.value,
            Point::new(args.x, args.y),
            args.radius,
            args.clamp,
        ),
    }
}
