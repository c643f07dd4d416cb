//! PolyBridge Command Line Interface
//!
//! Usage:
//!   polybridge [OPTIONS] <input-file>
//!   polybridge --help
//!
//! Examples:
//!   polybridge domain.mat                                # Lift and lower unchanged
//!   polybridge --strip-mine 0 --stride 32 domain.mat     # Strip-mine the outer loop
//!   polybridge --shift 1 --emit constraints domain.mat   # Insert a dimension, print set
//!   polybridge --strip-mine 0 --stride 4 --emit points --bound 0:12 domain.mat

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use polybridge::bridge::{matrix_from_polyhedron, polyhedron_from_matrix, DomainMatrix};
use polybridge::transform::{apply_all, PolyTransform, Shift, StripMine};
use polybridge::utils::PolyPrinter;
use std::fs;
use std::path::PathBuf;

/// PolyBridge - iteration-domain matrices through exact polyhedra
#[derive(Parser, Debug)]
#[command(name = "polybridge")]
#[command(version)]
#[command(about = "Convert and strip-mine iteration-domain matrices", long_about = None)]
struct Cli {
    /// Input matrix file (`ROWS COLUMNS` header, then rows)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Insert an unconstrained dimension at this index
    #[arg(long, value_name = "AT")]
    shift: Option<usize>,

    /// Strip-mine this loop dimension (applied after --shift)
    #[arg(long, value_name = "LOOP", requires = "stride")]
    strip_mine: Option<usize>,

    /// Strip size for --strip-mine
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    stride: Option<i64>,

    /// Dimension names, outermost first (comma-separated)
    #[arg(long, value_delimiter = ',')]
    names: Vec<String>,

    /// What to emit
    #[arg(long, default_value = "matrix")]
    emit: EmitKind,

    /// Enumeration box `LO:HI` applied to every dimension (for --emit points)
    #[arg(long, default_value = "-16:16", allow_hyphen_values = true)]
    bound: String,

    /// Verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress warnings)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EmitKind {
    /// Domain matrix
    Matrix,
    /// Constraints in set notation
    Constraints,
    /// Integer points inside --bound
    Points,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.quiet {
        log::LevelFilter::Error
    } else {
        match cli.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();

    info!("PolyBridge v{}", polybridge::VERSION);
    debug!("Input file: {:?}", cli.input);

    let source = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read input file: {:?}", cli.input))?;
    let matrix: DomainMatrix = source
        .parse()
        .with_context(|| format!("Failed to parse matrix in {:?}", cli.input))?;
    info!("Read {}x{} matrix", matrix.nrows(), matrix.ncols());

    let ph = polyhedron_from_matrix(&matrix)?;

    let shift = cli.shift.map(Shift::new);
    let strip = match (cli.strip_mine, cli.stride) {
        (Some(loop_dim), Some(stride)) => Some(StripMine::new(loop_dim, stride)),
        (None, Some(_)) => bail!("--stride given without --strip-mine"),
        _ => None,
    };
    let mut transforms: Vec<&dyn PolyTransform> = Vec::new();
    if let Some(ref s) = shift {
        transforms.push(s);
    }
    if let Some(ref s) = strip {
        transforms.push(s);
    }
    debug!("Transformations: {:?} {:?}", shift, strip);

    let ph = apply_all(ph, &transforms).context("Transformation failed")?;

    let mut printer = PolyPrinter::new().with_names(cli.names.clone());
    match cli.emit {
        EmitKind::Matrix => printer.print_matrix(&matrix_from_polyhedron(&ph)?),
        EmitKind::Constraints => {
            printer.print_polyhedron(&ph);
        }
        EmitKind::Points => {
            let (lo, hi) = parse_bound(&cli.bound)?;
            let dim = ph.space_dimension();
            let points = ph.integer_points(&vec![lo; dim], &vec![hi; dim])?;
            info!("{} points in [{}, {}]^{}", points.len(), lo, hi, dim);
            printer.print_points(&points);
        }
    }

    write_output(&cli.output, printer.output())
}

fn parse_bound(bound: &str) -> Result<(i64, i64)> {
    let (lo, hi) = bound
        .split_once(':')
        .with_context(|| format!("Bound `{}` is not of the form LO:HI", bound))?;
    let lo = lo.trim().parse().with_context(|| format!("Invalid lower bound `{}`", lo))?;
    let hi = hi.trim().parse().with_context(|| format!("Invalid upper bound `{}`", hi))?;
    Ok((lo, hi))
}

fn write_output(path: &Option<PathBuf>, content: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("Failed to write output file: {:?}", path)),
        None => {
            print!("{}", content);
            if !content.ends_with('\n') {
                println!();
            }
            Ok(())
        }
    }
}
