//! Feeds two unsigned operands through the overflow-safe operations and
//! prints each outcome.

use anyhow::Result;
use clap::Parser;
use safe_arith::{safe_add, safe_sub};

#[derive(Parser)]
#[command(about = "Demo of overflow-safe unsigned addition and subtraction")]
struct Args {
    /// Left operand
    x: u32,
    /// Right operand
    y: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    match safe_add(args.x, args.y) {
        Ok(sum) => println!("{} + {} = {}", args.x, args.y, sum),
        Err(err) => println!("{} + {}: {}", args.x, args.y, err),
    }

    match safe_sub(args.x, args.y) {
        Ok(diff) => println!("{} - {} = {}", args.x, args.y, diff),
        Err(err) => println!("{} - {}: {}", args.x, args.y, err),
    }

    Ok(())
}
