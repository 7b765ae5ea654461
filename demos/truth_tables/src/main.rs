use anyhow::{Context, Result};
use clap::Parser;
use lfl_algebra::{Algebra, AlgebraConfig, Family, NegationKind};
use lfl_math::TruthValue;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Print the operator tables of a fuzzy algebra over a grid of truth values
///
/// The last row and column of every binary table is the missing value, so the
/// tables show where an unknown operand is absorbed and where it propagates.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Algebra family: goedel, lukasiewicz or goguen
    #[arg(long, default_value = "goedel")]
    family: Family,

    /// Negation: involutive or strict (defaults to the family's residual negation)
    #[arg(long)]
    negation: Option<NegationKind>,

    /// JSON algebra configuration, e.g. {"family": "goguen"}; overrides --family/--negation
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of grid intervals over [0, 1]
    #[arg(long, default_value_t = 4)]
    steps: usize,

    /// Treat missing values as removable in the t-norm and t-conorm tables
    #[arg(long, default_value_t = false)]
    removable: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<AlgebraConfig>(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => AlgebraConfig {
            family: args.family,
            negation: args.negation,
        },
    };
    if args.steps == 0 {
        anyhow::bail!("--steps must be at least 1");
    }

    let alg = Algebra::new(config);
    let mut grid: Vec<TruthValue> = (0..=args.steps)
        .map(|i| TruthValue::Value(i as f64 / args.steps as f64))
        .collect();
    grid.push(TruthValue::Missing);
    tracing::info!(family = %alg.family(), points = grid.len(), "printing tables");

    println!("=== {} ===\n", alg.description());

    println!("T-norm (missing removable: {})", args.removable);
    print_binary(&grid, |a, b| Ok(alg.t(&[a, b], args.removable)?))?;

    println!("\nT-conorm (missing removable: {})", args.removable);
    print_binary(&grid, |a, b| Ok(alg.c(&[a, b], args.removable)?))?;

    println!("\nResiduum (row -> column)");
    print_binary(&grid, |a, b| Ok(alg.r(&[a], &[b])?[0]))?;

    println!("\nBi-residuum");
    print_binary(&grid, |a, b| Ok(alg.b(&[a], &[b])?[0]))?;

    println!("\nNegation");
    let negated = alg.n(&grid)?;
    let involutive = alg.ni(&grid)?;
    println!("{:>8} {:>8} {:>8}", "x", alg.negation().name(), "1 - x");
    for ((&x, &n), &ni) in grid.iter().zip(negated.iter()).zip(involutive.iter()) {
        println!("{:>8} {:>8} {:>8}", cell(x), cell(n), cell(ni));
    }

    Ok(())
}

fn print_binary<F>(grid: &[TruthValue], op: F) -> Result<()>
where
    F: Fn(TruthValue, TruthValue) -> Result<TruthValue>,
{
    print!("{:>8}", "");
    for &b in grid {
        print!(" {:>8}", cell(b));
    }
    println!();
    for &a in grid {
        print!("{:>8}", cell(a));
        for &b in grid {
            print!(" {:>8}", cell(op(a, b)?));
        }
        println!();
    }
    Ok(())
}

fn cell(t: TruthValue) -> String {
    match t {
        TruthValue::Value(v) => format!("{:.4}", v),
        TruthValue::Missing => "NA".to_string(),
    }
}
