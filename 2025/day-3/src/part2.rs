use miette::*;

use crate::{aggregate::par_aggregate, bank::parse_banks};

/// Batteries switched on in every bank once the safety override is engaged.
pub const BATTERIES_PER_BANK: usize = 12;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let banks = parse_banks(input)?;
    let total_joltage = par_aggregate(&banks, BATTERIES_PER_BANK)?;

    Ok(total_joltage.to_string())
}
