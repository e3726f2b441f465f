use rayon::prelude::*;
use tracing::{debug, trace};

use crate::{bank::Bank, error::Error, selector::select};

/// Sums the best `k`-digit selection of every bank.
#[tracing::instrument(skip(banks), fields(bank_count = banks.len()))]
pub fn aggregate(banks: &[Bank], k: usize) -> Result<u64, Error> {
    let total = banks
        .iter()
        .enumerate()
        .map(|(i, bank)| -> Result<u64, Error> {
            let value = select(bank, k)?.value();
            trace!(bank = i, value, "selected");
            Ok(value)
        })
        .try_fold(0u64, |total, value| {
            total.checked_add(value?).ok_or(Error::TotalOverflow {
                banks: banks.len(),
            })
        })?;

    debug!(total, "aggregated banks");
    Ok(total)
}

/// Same as [`aggregate`], with the banks spread across the rayon pool.
///
/// When several banks fail, which error comes back is unspecified.
#[tracing::instrument(skip(banks), fields(bank_count = banks.len()))]
pub fn par_aggregate(banks: &[Bank], k: usize) -> Result<u64, Error> {
    let total = banks
        .par_iter()
        .enumerate()
        .map(|(i, bank)| -> Result<u64, Error> {
            let value = select(bank, k)?.value();
            trace!(bank = i, value, "selected");
            Ok(value)
        })
        .try_reduce(
            || 0,
            |a, b| {
                a.checked_add(b).ok_or(Error::TotalOverflow {
                    banks: banks.len(),
                })
            },
        )?;

    debug!(total, "aggregated banks");
    Ok(total)
}
