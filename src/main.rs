use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use funcplot::{
    compile,
    plot::{Limits, Sampler, postscript, sampler::DEFAULT_SAMPLES},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// funcplot compiles a single-variable expression, evaluates it, and plots it
/// to a PostScript file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression in `x`, for example `x*sin(x)+x`.
    #[arg(allow_hyphen_values = true)]
    expression: String,

    /// Evaluates the expression at this value of `x`. May be repeated.
    #[arg(short = 'x', long = "at", value_name = "VALUE", allow_negative_numbers = true)]
    at: Vec<f64>,

    /// Writes a PostScript plot of the expression to this file.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// The plot viewport.
    #[arg(short,
          long,
          value_name = "xmin:xmax:ymin:ymax",
          default_value = "-10:10:-10:10",
          allow_hyphen_values = true)]
    limits: Limits,

    /// Number of samples taken across the x range.
    /// Values below 2 are raised to 2.
    #[arg(short, long, default_value_t = DEFAULT_SAMPLES)]
    samples: usize,

    /// Prints the compiled postfix program.
    #[arg(long)]
    rpn: bool,

    /// Raises the log level. May be repeated.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        },
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), String> {
    let program = compile(&args.expression).map_err(|e| match e.caret(&args.expression) {
                                                 Some(caret) => format!("{e}\n\n{caret}"),
                                                 None => e.to_string(),
                                             })?;

    if args.rpn {
        println!("{program}");
    }

    if args.at.is_empty() && args.output.is_none() {
        println!("{}", program.evaluate(0.0));
    }
    for &x in &args.at {
        println!("f({x}) = {}", program.evaluate(x));
    }

    if let Some(path) = &args.output {
        let plot = Sampler::new(args.limits, args.samples).sample(&program);

        let file = File::create(path)
            .map_err(|e| format!("Failed to create the output file '{}': {e}", path.display()))?;
        let mut out = BufWriter::new(file);
        postscript::render(&mut out, &args.expression, &args.limits, &plot)
            .map_err(|e| e.to_string())?;
        out.flush().map_err(|e| format!("Failed to write '{}': {e}", path.display()))?;

        info!(path = %path.display(), segments = plot.segments().len(), "wrote plot");
    }

    Ok(())
}
