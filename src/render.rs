use crate::{AddressRecord, RenderOptions};
use std::fmt;

/// Address fields in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    PostalCode,
    Street,
    Complement,
    Neighborhood,
    City,
    State,
    AreaCode,
}

impl Field {
    /// Label as ViaCEP names the field.
    pub fn label(&self) -> &'static str {
        use Field::*;
        match *self {
            PostalCode => "CEP",
            Street => "Logradouro",
            Complement => "Complemento",
            Neighborhood => "Bairro",
            City => "Cidade",
            State => "UF",
            AreaCode => "DDD",
        }
    }
}

/// One rendered `label: value` pair. The value is copied verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub field: Field,
    pub value: String,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.field.label(), self.value)
    }
}

/// Maps an address to display lines.
///
/// Postal code, street, neighborhood, city and state are always present.
/// The complement appears only when non-empty, and the area code only when
/// requested and non-empty.
pub fn render(address: &AddressRecord, options: &RenderOptions) -> Vec<Line> {
    let line = |field, value: &str| Line {
        field,
        value: value.to_owned(),
    };

    let mut lines = Vec::with_capacity(7);
    lines.push(line(Field::PostalCode, &address.postal_code));
    lines.push(line(Field::Street, &address.street));
    if let Some(complement) = address.complement() {
        lines.push(line(Field::Complement, complement));
    }
    lines.push(line(Field::Neighborhood, &address.neighborhood));
    lines.push(line(Field::City, &address.city));
    lines.push(line(Field::State, &address.state));
    if options.area_code {
        if let Some(area_code) = address.area_code() {
            lines.push(line(Field::AreaCode, area_code));
        }
    }
    lines
}
