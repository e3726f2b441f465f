use std::str::FromStr;

use chumsky::prelude::*;
use miette::*;

use crate::{error::Error, numeric::digit_value};

/// One row of batteries, each rated with a single digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    digits: Vec<u8>,
}

impl Bank {
    /// Parses a line of decimal digits, failing on the first character that isn't one.
    pub fn parse(line: &str) -> Result<Self, Error> {
        let digits = line
            .char_indices()
            .map(|(offset, c)| {
                digit_value(c).ok_or_else(|| Error::MalformedInput {
                    found: c,
                    src: line.to_string(),
                    span: (offset, c.len_utf8()).into(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { digits })
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

impl FromStr for Bank {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Splits the raw puzzle input into non-empty lines.
///
/// Digit validation is left to [`Bank::parse`] so malformed batteries get a
/// labelled diagnostic instead of a generic parse failure.
fn parser<'a>() -> impl Parser<'a, &'a str, Vec<&'a str>, extra::Err<Rich<'a, char>>> {
    none_of("\r\n")
        .repeated()
        .at_least(1)
        .to_slice()
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

/// Parses every bank in the puzzle input, failing on the first malformed line.
pub fn parse_banks(input: &str) -> Result<Vec<Bank>> {
    let lines = parser()
        .parse(input.trim())
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            Bank::parse(line).wrap_err_with(|| format!("malformed bank on line {}", i + 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn test_parse_bank() -> Result<(), Error> {
        let bank = Bank::parse("987654321111111")?;
        assert_eq!(bank.len(), 15);
        assert_eq!(
            bank.digits(),
            &[9, 8, 7, 6, 5, 4, 3, 2, 1, 1, 1, 1, 1, 1, 1]
        );
        Ok(())
    }

    #[test]
    fn test_parse_bank_keeps_zeros() -> Result<(), Error> {
        assert_eq!("0090".parse::<Bank>()?.digits(), &[0, 0, 9, 0]);
        Ok(())
    }

    #[rstest]
    #[case("12a45", 'a', 2)]
    #[case("-123", '-', 0)]
    #[case("123 ", ' ', 3)]
    #[case("1é2", 'é', 1)]
    fn test_parse_bank_rejects_non_digits(
        #[case] line: &str,
        #[case] expected: char,
        #[case] offset: usize,
    ) {
        match Bank::parse(line) {
            Err(Error::MalformedInput { found, src, span }) => {
                assert_eq!(found, expected);
                assert_eq!(src, line);
                assert_eq!(span.offset(), offset);
                assert_eq!(span.len(), expected.len_utf8());
            }
            other => panic!("expected MalformedInput, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_banks() -> Result<()> {
        let banks = parse_banks("12\r\n90\n345\n")?;
        let digits: Vec<&[u8]> = banks.iter().map(Bank::digits).collect();
        assert_eq!(digits, vec![&[1, 2][..], &[9, 0][..], &[3, 4, 5][..]]);
        Ok(())
    }

    #[test]
    fn test_parse_banks_trims_surrounding_whitespace() -> Result<()> {
        let banks = parse_banks("\n  \n818181911112111\n\n")?;
        assert_eq!(banks.len(), 1);
        assert_eq!(banks[0].len(), 15);
        Ok(())
    }

    #[test]
    fn test_parse_banks_empty_input() -> Result<()> {
        assert!(parse_banks("")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_parse_banks_reports_line() {
        let report = parse_banks("123\n4x6\n789").unwrap_err();
        assert_eq!(report.to_string(), "malformed bank on line 2");
    }

    #[test]
    fn test_parse_banks_rejects_blank_line_between_banks() {
        assert!(parse_banks("123\n\n456").is_err());
    }
}
