//! # Brazilian registry identifiers
//!
//! Cleaning and display formatting for the three identifier kinds the
//! registry hands back:
//! * **CNPJ** - 14-digit company number, `XX.XXX.XXX/XXXX-XX`.
//! * **CPF** - 11-digit person number, `XXX.XXX.XXX-XX`.
//! * **CEP** - 8-digit postal code, `XXXXX-XXX`.
//!
//! The formatters are total: input with the wrong digit count comes back as
//! the bare digit string instead of an error, so a half-filled record still
//! renders.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Digit count of a valid company number.
pub const CNPJ_LEN: usize = 14;
/// Digit count of a valid person number.
pub const CPF_LEN: usize = 11;
/// Digit count of a valid postal code.
pub const CEP_LEN: usize = 8;

/// Drops every character that is not a decimal digit.
pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Formats a company number as `XX.XXX.XXX/XXXX-XX`.
///
/// Anything that does not clean to exactly 14 digits is returned as the
/// cleaned digit string, unmodified further.
pub fn format_cnpj(raw: &str) -> String {
    let digits = strip_non_digits(raw);
    if digits.len() != CNPJ_LEN {
        return digits;
    }
    format!(
        "{}.{}.{}/{}-{}",
        &digits[..2],
        &digits[2..5],
        &digits[5..8],
        &digits[8..12],
        &digits[12..]
    )
}

/// Formats a postal code as `XXXXX-XXX`, degrading like [`format_cnpj`].
pub fn format_cep(raw: &str) -> String {
    let digits = strip_non_digits(raw);
    if digits.len() != CEP_LEN {
        return digits;
    }
    format!("{}-{}", &digits[..5], &digits[5..])
}

/// Formats a person number as `XXX.XXX.XXX-XX`, degrading like [`format_cnpj`].
pub fn format_cpf(raw: &str) -> String {
    let digits = strip_non_digits(raw);
    if digits.len() != CPF_LEN {
        return digits;
    }
    format!(
        "{}.{}.{}-{}",
        &digits[..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..]
    )
}

/// Why a typed identifier was rejected before any lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentError {
    #[error("Please enter a CNPJ.")]
    Empty,

    #[error("Invalid CNPJ: it must contain 14 digits, got {0}.")]
    WrongLength(usize),
}

/// A validated 14-digit company registry number.
///
/// Construction goes through [`FromStr`], which strips punctuation and
/// enforces the digit-count invariant. Holding a `Cnpj` means the lookup
/// client can be called without further checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cnpj(String);

impl Cnpj {
    /// The bare 14-digit form used on the wire.
    pub fn as_digits(&self) -> &str {
        &self.0
    }

    /// The punctuated display form.
    pub fn formatted(&self) -> String {
        format_cnpj(&self.0)
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Cnpj {
    type Err = IdentError;

    /// Parses free-form input into a `Cnpj`.
    ///
    /// Punctuated forms like `11.222.333/0001-81` are accepted; everything
    /// but digits is discarded before the length check.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(IdentError::Empty);
        }

        let digits = strip_non_digits(s);
        if digits.len() != CNPJ_LEN {
            return Err(IdentError::WrongLength(digits.len()));
        }

        Ok(Self(digits))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_non_digits() {
        assert_eq!(strip_non_digits("11.222.333/0001-81"), "11222333000181");
        assert_eq!(strip_non_digits("abc"), "");
        assert_eq!(strip_non_digits(""), "");
        assert_eq!(strip_non_digits(" 01310-100 "), "01310100");
    }

    #[test]
    fn test_format_cnpj() {
        assert_eq!(format_cnpj("11222333000181"), "11.222.333/0001-81");

        // Already-formatted input re-cleans to the same string.
        assert_eq!(format_cnpj("11.222.333/0001-81"), "11.222.333/0001-81");

        // Wrong digit count degrades to the bare digit string.
        assert_eq!(format_cnpj("123"), "123");
        assert_eq!(format_cnpj("1.2-3"), "123");
        assert_eq!(format_cnpj(""), "");
    }

    #[test]
    fn test_format_cep() {
        assert_eq!(format_cep("01310100"), "01310-100");
        assert_eq!(format_cep("01310-100"), "01310-100");
        assert_eq!(format_cep("0131010"), "0131010");
        assert_eq!(format_cep(""), "");
    }

    #[test]
    fn test_format_cpf() {
        assert_eq!(format_cpf("12345678909"), "123.456.789-09");
        assert_eq!(format_cpf("123.456.789-09"), "123.456.789-09");
        assert_eq!(format_cpf("123456789"), "123456789");
    }

    #[test]
    fn test_formatters_are_idempotent() {
        for (format, sample) in [
            (format_cnpj as fn(&str) -> String, "11222333000181"),
            (format_cpf, "12345678909"),
            (format_cep, "01310100"),
        ] {
            let once = format(sample);
            assert_eq!(format(&once), once);
        }
    }

    #[test]
    fn test_cnpj_from_str() {
        let cnpj: Cnpj = "11.222.333/0001-81".parse().expect("punctuated CNPJ");
        assert_eq!(cnpj.as_digits(), "11222333000181");
        assert_eq!(cnpj.formatted(), "11.222.333/0001-81");

        assert_eq!("".parse::<Cnpj>(), Err(IdentError::Empty));
        assert_eq!("   ".parse::<Cnpj>(), Err(IdentError::Empty));
        assert_eq!("123".parse::<Cnpj>(), Err(IdentError::WrongLength(3)));
        assert_eq!(
            "11.222.333/0001-811".parse::<Cnpj>(),
            Err(IdentError::WrongLength(15))
        );

        // All punctuation and no digits is not an empty field, it is a
        // malformed identifier.
        assert_eq!("..-/".parse::<Cnpj>(), Err(IdentError::WrongLength(0)));
    }
}
