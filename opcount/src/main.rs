//! Prints the estimated number of 32-bit arithmetic operations performed by
//! each wide-integer, field, curve point and ECDSA routine.

#![forbid(unsafe_code)]

use std::io::{self, Write};

use clap::Parser;
use opcount::{FormulaSet, Params, render};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "ecdsa-op-count")]
#[command(about = "Estimate 32-bit operation counts of secp256k1 ECDSA routines")]
struct Args {
    /// Revision of the modelled implementation.
    #[arg(long, default_value_t = FormulaSet::default())]
    formulas: FormulaSet,

    /// Cost of one function call.
    #[arg(long, default_value_t = Params::default().call_overhead)]
    call_overhead: u32,

    /// Number of 32-bit words in a wide integer.
    #[arg(long, default_value_t = Params::default().limbs)]
    limbs: u32,

    /// Log filter, written to stderr.
    #[arg(long, default_value = "warn")]
    log: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log))
        .with_writer(io::stderr)
        .init();

    let params = Params {
        call_overhead: args.call_overhead,
        limbs: args.limbs,
    };
    tracing::info!(formulas = %args.formulas, ?params, "estimating operation counts");

    let table = args.formulas.table(&params);
    let costs = table.evaluate()?;
    let report = render(&table.layout(), &costs)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(report.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
