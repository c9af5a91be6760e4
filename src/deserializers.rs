use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};

/// The `erro` marker ViaCEP puts in the body of an unknown CEP.
///
/// The service has sent the flag as `true` and as `"true"` over time, always
/// with a success status, so it is read from the body before the address.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct NotFoundMarker {
    #[serde(default, deserialize_with = "flag_from_bool_or_str")]
    pub(crate) erro: bool,
}

pub fn flag_from_bool_or_str<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(FlagVisitor)
}

struct FlagVisitor;

impl<'de> Visitor<'de> for FlagVisitor {
    type Value = bool;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a boolean, null or string of \"true\", \"false\".")
    }

    fn visit_bool<E>(self, value: bool) -> Result<bool, E>
    where
        E: de::Error,
    {
        Ok(value)
    }

    fn visit_unit<E>(self) -> Result<bool, E>
    where
        E: de::Error,
    {
        Ok(false)
    }

    fn visit_str<E>(self, value: &str) -> Result<bool, E>
    where
        E: de::Error,
    {
        match value {
            "true" => Ok(true),
            "false" | "" => Ok(false),
            other => Err(E::custom(format!("unknown erro flag: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(json: &str) -> bool {
        serde_json::from_str::<NotFoundMarker>(json).unwrap().erro
    }

    #[test]
    fn flag_as_bool_or_string() {
        assert!(marker(r#"{"erro": true}"#));
        assert!(marker(r#"{"erro": "true"}"#));
        assert!(!marker(r#"{"erro": false}"#));
        assert!(!marker(r#"{"erro": null}"#));
    }

    #[test]
    fn flag_absent_on_addresses() {
        assert!(!marker(r#"{"cep": "01001-000", "uf": "SP"}"#));
    }

    #[test]
    fn unknown_flag_string() {
        assert!(serde_json::from_str::<NotFoundMarker>(r#"{"erro": "maybe"}"#).is_err());
    }
}
