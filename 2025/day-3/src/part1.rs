use miette::*;

use crate::{aggregate::aggregate, bank::parse_banks};

/// Batteries switched on in every bank.
pub const BATTERIES_PER_BANK: usize = 2;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let banks = parse_banks(input)?;
    let total_joltage = aggregate(&banks, BATTERIES_PER_BANK)?;

    Ok(total_joltage.to_string())
}
