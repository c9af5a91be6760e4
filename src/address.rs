use serde::{Deserialize, Serialize};

/// Address returned by ViaCEP for a known CEP.
///
/// Field names follow the ViaCEP JSON keys. Keys this struct does not model
/// (`ibge`, `gia`, `siafi`, `unidade`, `estado`, `regiao`) are ignored.
#[derive(Debug, Deserialize, Serialize, Clone, Eq, PartialEq)]
pub struct AddressRecord {
    /// Postal code, masked as ViaCEP returns it (`01001-000`).
    #[serde(rename = "cep")]
    pub postal_code: String,
    /// Street name, `logradouro`. Empty for city-wide codes.
    #[serde(rename = "logradouro")]
    pub street: String,
    #[serde(default, rename = "complemento")]
    /// Complement such as a number range or building side, `complemento`.
    pub complement: Option<String>,
    /// Neighborhood, `bairro`.
    #[serde(rename = "bairro")]
    pub neighborhood: String,
    /// City, `localidade`.
    #[serde(rename = "localidade")]
    pub city: String,
    /// Two-letter state abbreviation, `uf`.
    #[serde(rename = "uf")]
    pub state: String,
    #[serde(default, rename = "ddd")]
    /// Telephone area code, `ddd`.
    pub area_code: Option<String>,
}

impl AddressRecord {
    /// The complement, if ViaCEP sent a non-empty one.
    pub fn complement(&self) -> Option<&str> {
        non_empty(&self.complement)
    }

    /// The area code, if ViaCEP sent a non-empty one.
    pub fn area_code(&self) -> Option<&str> {
        non_empty(&self.area_code)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
