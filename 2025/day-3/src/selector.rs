use crate::{bank::Bank, error::Error, numeric::digits_to_value};

/// The digits picked out of a bank, in bank order, together with the
/// positions they were taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    digits: Vec<u8>,
    indices: Vec<usize>,
    value: u64,
}

impl Selection {
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Strictly increasing bank positions, one per selected digit.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// The selected digits read as a base-10 number.
    pub fn value(&self) -> u64 {
        self.value
    }
}

/// Finds the largest digit in `window` and its offset, preferring the
/// leftmost one on ties.
///
/// Returns `None` for an empty window.
pub fn window_max(window: &[u8]) -> Option<(u8, usize)> {
    let (&first, rest) = window.split_first()?;
    let mut best = (first, 0);

    for (offset, &digit) in rest.iter().enumerate() {
        // Nothing beats a 9
        if best.0 == 9 {
            break;
        }
        if digit > best.0 {
            best = (digit, offset + 1);
        }
    }

    Some(best)
}

/// Picks the `k` digits of `bank` that, kept in their original order, form
/// the largest possible number.
///
/// Each pick takes the leftmost maximum of a window whose right edge leaves
/// exactly enough digits behind it to finish the selection. Once the digits
/// left equal the picks left, the rest of the bank is taken as is.
///
/// Runs in `O(n·k)`, which is fine for puzzle-sized banks but not linear.
pub fn select(bank: &Bank, k: usize) -> Result<Selection, Error> {
    let digits = bank.digits();
    let n = digits.len();

    if k == 0 || k > n {
        return Err(Error::InvalidSelectionLength {
            requested: k,
            available: n,
        });
    }

    let mut picked = Vec::with_capacity(k);
    let mut indices = Vec::with_capacity(k);
    let mut start = 0;
    let mut remaining = k;

    while remaining > 0 {
        if remaining == n - start {
            picked.extend_from_slice(&digits[start..]);
            indices.extend(start..n);
            break;
        }

        let end = n - (remaining - 1);
        let Some((digit, offset)) = window_max(&digits[start..end]) else {
            unreachable!("window spans at least two digits while choices remain");
        };

        picked.push(digit);
        indices.push(start + offset);
        start += offset + 1;
        remaining -= 1;
    }

    let value = digits_to_value(&picked).ok_or(Error::ValueOverflow { length: k })?;

    Ok(Selection {
        digits: picked,
        indices,
        value,
    })
}
