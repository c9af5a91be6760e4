/*!
One lookup form submission: validate, look up, record and render.
*/
use crate::error::LookupError;
use crate::provider::Provider;
use crate::render::{render, Line};
use crate::{Cep, Client, RenderOptions, SearchHistory};
use log::info;
use std::fmt;

/// What to show the user after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The address, one line per field.
    Address(Vec<Line>),
    /// Well-formed CEP that ViaCEP does not know.
    NotFound(Cep),
    /// Input is not a CEP; nothing was requested.
    Invalid(String),
    /// Request or decoding failure, with the underlying message.
    Failed(String),
}

impl Reply {
    pub fn is_address(&self) -> bool {
        matches!(self, Reply::Address(_))
    }
}

impl From<LookupError> for Reply {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::NotFound(cep) => Reply::NotFound(cep),
            LookupError::Validation(_) => {
                Reply::Invalid(String::from("Enter a valid CEP with 8 digits."))
            }
            LookupError::Network(err) => Reply::Failed(format!("Request error: {}", err)),
            LookupError::Decode(_) => {
                Reply::Failed(String::from("Could not decode the ViaCEP response."))
            }
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Reply::Address(lines) => {
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", line)?;
                }
                Ok(())
            }
            Reply::NotFound(cep) => write!(
                f,
                "CEP {} not found. Check it and try again.",
                cep.formatted()
            ),
            Reply::Invalid(message) | Reply::Failed(message) => f.write_str(message),
        }
    }
}

/// Handles one submission of `input`.
///
/// Blank input gets no reply, as an empty form does. A successful lookup is
/// recorded in `history`; failures never touch it.
pub async fn submit<P: Provider>(
    client: &Client<P>,
    history: &mut SearchHistory,
    input: &str,
    options: &RenderOptions,
) -> Option<Reply> {
    if input.trim().is_empty() {
        return None;
    }

    let cep: Cep = match input.parse() {
        Ok(cep) => cep,
        Err(err) => {
            info!("rejected CEP input {:?}: {}", input, err);
            return Some(LookupError::from(err).into());
        }
    };

    let reply = match client.lookup_cep(&cep).await {
        Ok(address) => {
            if history.add(cep) {
                info!("added CEP {} to history", address.postal_code);
            }
            Reply::Address(render(&address, options))
        }
        Err(err) => err.into(),
    };
    Some(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::Custom;
    use crate::render::Field;
    use httpmock::prelude::*;
    use serde_json::json;
    use url::Url;

    fn client(server: &MockServer) -> Client<Custom> {
        let base = Url::parse(&server.base_url()).unwrap();
        Client::new(Custom::new(base), reqwest::Client::new())
    }

    async fn mock_se(server: &MockServer) -> httpmock::Mock<'_> {
        server
            .mock_async(|when, then| {
                when.method(GET).path("/ws/01001000/json/");
                then.status(200).json_body(json!({
                    "cep": "01001-000",
                    "logradouro": "Praça da Sé",
                    "bairro": "Sé",
                    "localidade": "São Paulo",
                    "uf": "SP",
                    "ddd": "11"
                }));
            })
            .await
    }

    #[tokio::test]
    async fn address_reply() {
        let server = MockServer::start_async().await;
        let _m = mock_se(&server).await;
        let mut history = SearchHistory::new();

        let reply = submit(
            &client(&server),
            &mut history,
            "01001000",
            &RenderOptions::default(),
        )
        .await
        .unwrap();

        assert_eq!(
            "CEP: 01001-000\nLogradouro: Praça da Sé\nBairro: Sé\nCidade: São Paulo\nUF: SP",
            reply.to_string()
        );
        match reply {
            Reply::Address(lines) => {
                assert!(!lines.iter().any(|l| l.field == Field::Complement));
                assert!(!lines.iter().any(|l| l.field == Field::AreaCode));
            }
            other => panic!("expected an address, got {:?}", other),
        }
        assert_eq!(1, history.len());
    }

    #[tokio::test]
    async fn area_code_reply() {
        let server = MockServer::start_async().await;
        let _m = mock_se(&server).await;
        let mut history = SearchHistory::new();

        let reply = submit(
            &client(&server),
            &mut history,
            "01001-000",
            &RenderOptions { area_code: true },
        )
        .await
        .unwrap();
        assert!(reply.to_string().ends_with("\nDDD: 11"));
    }

    #[tokio::test]
    async fn repeated_search_recorded_once() {
        let server = MockServer::start_async().await;
        let mock = mock_se(&server).await;
        let client = client(&server);
        let mut history = SearchHistory::new();

        for input in ["01001000", "01001-000"] {
            let reply = submit(&client, &mut history, input, &RenderOptions::default())
                .await
                .unwrap();
            assert!(reply.is_address());
        }
        assert_eq!(2, mock.hits_async().await);
        assert_eq!(1, history.len());
    }

    #[tokio::test]
    async fn not_found_reply() {
        let server = MockServer::start_async().await;
        let _m = server
            .mock_async(|when, then| {
                when.method(GET).path("/ws/00000000/json/");
                then.status(200).json_body(json!({ "erro": true }));
            })
            .await;
        let mut history = SearchHistory::new();

        let reply = submit(
            &client(&server),
            &mut history,
            "00000000",
            &RenderOptions::default(),
        )
        .await
        .unwrap();
        assert_eq!(
            "CEP 00000-000 not found. Check it and try again.",
            reply.to_string()
        );
        assert!(!reply.to_string().contains("Logradouro"));
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn invalid_reply_without_request() {
        let server = MockServer::start_async().await;
        let mock = mock_se(&server).await;
        let mut history = SearchHistory::new();

        let reply = submit(
            &client(&server),
            &mut history,
            "123",
            &RenderOptions::default(),
        )
        .await;
        assert_eq!(
            Some(Reply::Invalid(String::from(
                "Enter a valid CEP with 8 digits."
            ))),
            reply
        );
        assert_eq!(0, mock.hits_async().await);
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn blank_input_no_reply() {
        let server = MockServer::start_async().await;
        let mock = mock_se(&server).await;
        let mut history = SearchHistory::new();

        let reply = submit(&client(&server), &mut history, "  ", &RenderOptions::default()).await;
        assert_eq!(None, reply);
        assert_eq!(0, mock.hits_async().await);
    }

    #[tokio::test]
    async fn failed_reply() {
        let server = MockServer::start_async().await;
        let _m = server
            .mock_async(|when, then| {
                when.method(GET).path("/ws/01001000/json/");
                then.status(502);
            })
            .await;
        let mut history = SearchHistory::new();

        let reply = submit(
            &client(&server),
            &mut history,
            "01001000",
            &RenderOptions::default(),
        )
        .await
        .unwrap();
        match reply {
            Reply::Failed(message) => assert!(message.starts_with("Request error: ")),
            other => panic!("expected a failure, got {:?}", other),
        }
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn decode_failure_reply() {
        let server = MockServer::start_async().await;
        let _m = server
            .mock_async(|when, then| {
                when.method(GET).path("/ws/01001000/json/");
                then.status(200).body("not json");
            })
            .await;
        let mut history = SearchHistory::new();

        let reply = submit(
            &client(&server),
            &mut history,
            "01001000",
            &RenderOptions::default(),
        )
        .await;
        assert_eq!(
            Some(Reply::Failed(String::from(
                "Could not decode the ViaCEP response."
            ))),
            reply
        );
    }
}
