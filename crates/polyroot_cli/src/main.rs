mod display;
mod input;

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::BufRead;

use clap::{Args, Parser, Subcommand, ValueEnum};
use polyroot_core::{
    Evaluator, EvaluatorKind, NewtonConfig, Polynomial, RootError, SweepConfig, SyntheticDivision,
    descartes_bounds, find_real_roots, refine_root,
};
use tracing::{debug, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::display::{NO_ROOTS_HINT, render_bounds, render_record, render_summary};
use crate::input::{InputError, parse_coefficients};

#[derive(Parser)]
#[command(name = "polyroot", about = "Real roots of polynomials by Newton-Raphson")]
struct Cli {
    /// Log sweep progress to stderr (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find all real roots reachable from the seed sweep
    #[command(allow_negative_numbers = true)]
    Roots {
        #[command(flatten)]
        poly: PolyArgs,
        #[command(flatten)]
        newton: NewtonArgs,
        /// Number of evenly spaced seeds
        #[arg(long, default_value = "1000")]
        seeds: usize,
        /// Use the dense preset (10001 seeds); overrides --seeds
        #[arg(long)]
        dense: bool,
        /// First seed
        #[arg(long, default_value = "-500")]
        lower: f64,
        /// Last seed
        #[arg(long, default_value = "500")]
        upper: f64,
        /// Derivative evaluation strategy
        #[arg(long, value_enum, default_value = "synthetic")]
        evaluator: EvaluatorArg,
        /// Skip the Descartes prediction
        #[arg(long)]
        no_descartes: bool,
    },
    /// Descartes' rule of signs bounds only
    #[command(allow_negative_numbers = true)]
    Signs {
        #[command(flatten)]
        poly: PolyArgs,
    },
    /// Evaluate P(x) and P'(x) at a point
    #[command(allow_negative_numbers = true)]
    Eval {
        #[command(flatten)]
        poly: PolyArgs,
        /// Point to evaluate at
        #[arg(long)]
        at: f64,
    },
    /// Run Newton-Raphson from a single starting point
    #[command(allow_negative_numbers = true)]
    Refine {
        #[command(flatten)]
        poly: PolyArgs,
        #[command(flatten)]
        newton: NewtonArgs,
        /// Starting point
        #[arg(long)]
        from: f64,
    },
}

#[derive(Args)]
struct PolyArgs {
    /// Coefficients, highest degree first (read from stdin when omitted)
    coeffs: Vec<String>,
}

#[derive(Args)]
struct NewtonArgs {
    /// Decimal digits for reported roots
    #[arg(long, default_value = "14")]
    precision: u32,
    /// Convergence tolerance
    #[arg(long, default_value = "1e-12")]
    tolerance: f64,
    /// Newton iteration cap per seed
    #[arg(long, default_value = "1000")]
    max_iterations: u32,
}

impl NewtonArgs {
    fn config(&self) -> NewtonConfig {
        NewtonConfig {
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
            display_precision: self.precision,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum EvaluatorArg {
    /// Chained synthetic division
    Synthetic,
    /// Power-rule derivative, Horner evaluation
    Differentiated,
}

impl From<EvaluatorArg> for EvaluatorKind {
    fn from(arg: EvaluatorArg) -> Self {
        match arg {
            EvaluatorArg::Synthetic => EvaluatorKind::SyntheticDivision,
            EvaluatorArg::Differentiated => EvaluatorKind::Differentiated,
        }
    }
}

#[derive(Debug)]
enum CliError {
    Input(InputError),
    Root(RootError),
    Io(String),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input(e) => write!(f, "input error: {e}"),
            Self::Root(e) => write!(f, "{e}"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl Error for CliError {}

impl From<InputError> for CliError {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

impl From<RootError> for CliError {
    fn from(e: RootError) -> Self {
        Self::Root(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Roots {
            poly,
            newton,
            seeds,
            dense,
            lower,
            upper,
            evaluator,
            no_descartes,
        } => {
            let p = read_polynomial(&poly)?;
            let base = if dense {
                SweepConfig::dense()
            } else {
                SweepConfig {
                    seed_count: seeds,
                    ..SweepConfig::coarse()
                }
            };
            let config = SweepConfig {
                lower,
                upper,
                evaluator: evaluator.into(),
                newton: newton.config(),
                ..base
            };
            let precision = newton.precision as usize;

            let bounds = descartes_bounds(&p);
            if !no_descartes {
                println!("{}\n", render_bounds(&bounds));
            }

            println!("Searching real roots for coefficients {:?}", p.coefficients());
            let roots = find_real_roots(&p, &config)?;

            if roots.is_empty() {
                println!("\n{NO_ROOTS_HINT}");
                return Ok(());
            }

            println!("\nReal roots found:");
            for record in &roots {
                println!("{}", render_record(record, precision));
            }
            let summary = roots.sign_summary();
            println!("\n{}", render_summary(&summary));
            if !bounds.admits(&summary) {
                warn!(?bounds, ?summary, "found roots exceed the Descartes bounds");
            }
        }

        Commands::Signs { poly } => {
            let p = read_polynomial(&poly)?;
            let bounds = descartes_bounds(&p);
            println!("{}", render_bounds(&bounds));
        }

        Commands::Eval { poly, at } => {
            let p = read_polynomial(&poly)?;
            let eval = SyntheticDivision::new(&p).evaluate(at);
            println!("P({at}) = {}", eval.value);
            println!("P'({at}) = {}", eval.derivative);
        }

        Commands::Refine { poly, newton, from } => {
            let p = read_polynomial(&poly)?;
            let config = newton.config();
            config.validate().map_err(RootError::InvalidConfig)?;
            match refine_root(&SyntheticDivision::new(&p), from, &config) {
                Ok(record) => println!("{}", render_record(&record, newton.precision as usize)),
                Err(reason) => println!("No root from x0 = {from}: {reason}"),
            }
        }
    }

    Ok(())
}

/// Coefficients from the positional arguments, or one line of stdin.
fn read_polynomial(args: &PolyArgs) -> Result<Polynomial, CliError> {
    let text = if args.coeffs.is_empty() {
        eprintln!(
            "Enter the polynomial coefficients (highest degree first), separated by spaces:\n\
             Example: for x^2 - 4, enter: 1 0 -4"
        );
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        line
    } else {
        args.coeffs.join(" ")
    };

    let coeffs = parse_coefficients(&text)?;
    debug!(degree = coeffs.len() - 1, "parsed coefficients");
    Ok(Polynomial::new(coeffs)?)
}
