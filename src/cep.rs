use crate::error::InvalidCep;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Number of digits in a CEP.
pub const CEP_LEN: usize = 8;

// Position of the hyphen in the masked form `NNNNN-NNN`.
const MASK_HYPHEN: usize = 5;

/// A validated Brazilian postal code: exactly eight ASCII digits.
///
/// Parsing accepts the bare form (`01001000`) and the masked form
/// (`01001-000`), ignoring surrounding whitespace. Any other character is
/// rejected rather than filtered out, so `"0100a1000"` never becomes a
/// lookup for some other code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cep(String);

impl Cep {
    /// The eight digits, as sent to ViaCEP.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The masked `NNNNN-NNN` form.
    pub fn formatted(&self) -> String {
        format!("{}-{}", &self.0[..MASK_HYPHEN], &self.0[MASK_HYPHEN..])
    }
}

impl FromStr for Cep {
    type Err = InvalidCep;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(InvalidCep::Empty);
        }

        let masked = s.len() == CEP_LEN + 1 && s.as_bytes()[MASK_HYPHEN] == b'-';
        let mut digits = String::with_capacity(CEP_LEN);
        for (i, c) in s.chars().enumerate() {
            match c {
                '0'..='9' => digits.push(c),
                '-' if masked && i == MASK_HYPHEN => {}
                c => return Err(InvalidCep::Character(c)),
            }
        }

        if digits.len() != CEP_LEN {
            return Err(InvalidCep::Length(digits.len()));
        }
        Ok(Cep(digits))
    }
}

impl TryFrom<String> for Cep {
    type Error = InvalidCep;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Cep> for String {
    fn from(cep: Cep) -> Self {
        cep.0
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Cep {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
