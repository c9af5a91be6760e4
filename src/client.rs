use crate::deserializers::NotFoundMarker;
use crate::error::{LookupError, Json};
use crate::provider::{Provider, ViaCep};
use crate::{AddressRecord, Cep, Options};
use log::{debug, warn};
use reqwest::header::ACCEPT;
use serde_json::Value;

/// CEP lookup client.
#[derive(Debug, Clone)]
pub struct Client<P> {
    /// Lookup service.
    pub provider: P,

    pub http_client: reqwest::Client,
}

impl Client<ViaCep> {
    /// Client for the public ViaCEP service with default options.
    pub fn viacep() -> Result<Self, LookupError> {
        Self::with_options(ViaCep, &Options::default())
    }
}

impl<P> Client<P>
where
    P: Provider,
{
    /// Constructs a client from a provider and an existing HTTP client.
    pub fn new(provider: P, http_client: reqwest::Client) -> Self {
        Client {
            provider,
            http_client,
        }
    }

    /// Constructs a client, building its HTTP client from `options`.
    pub fn with_options(provider: P, options: &Options) -> Result<Self, LookupError> {
        let mut builder = reqwest::Client::builder().user_agent(options.user_agent());
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::new(provider, builder.build()?))
    }

    /// Validates `input` and looks it up.
    ///
    /// Invalid input fails with [`LookupError::Validation`] without touching
    /// the network.
    pub async fn lookup(&self, input: &str) -> Result<AddressRecord, LookupError> {
        let cep: Cep = input.parse()?;
        self.lookup_cep(&cep).await
    }

    /// Looks up an already validated CEP with a single GET.
    pub async fn lookup_cep(&self, cep: &Cep) -> Result<AddressRecord, LookupError> {
        let uri = self.provider.lookup_uri(cep);
        debug!("looking up CEP {} at {}", cep, uri);

        let json = self.get_json(uri).await.map_err(|err| {
            warn!("lookup of CEP {} failed: {}", cep, err);
            err
        })?;

        let marker: NotFoundMarker = serde_json::from_value(json.clone())?;
        if marker.erro {
            debug!("ViaCEP has no address for CEP {}", cep);
            return Err(LookupError::NotFound(cep.clone()));
        }

        let address: AddressRecord = serde_json::from_value(json)?;
        debug!("CEP {} resolved to {}/{}", cep, address.city, address.state);
        Ok(address)
    }

    async fn get_json(&self, uri: url::Url) -> Result<Value, LookupError> {
        let body = self
            .http_client
            .get(uri)
            .header(ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let json: Value = serde_json::from_slice(&body)?;
        if !json.is_object() {
            return Err(<Json as serde::de::Error>::custom("expected a JSON object").into());
        }
        Ok(json)
    }
}
