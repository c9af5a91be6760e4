/*!
CEP lookup providers.
*/
use crate::Cep;
use url::Url;

/// A service answering `GET {base}/ws/{cep}/json/` the way ViaCEP does.
pub trait Provider {
    /// The service root. Lookup paths are appended to it.
    fn base_uri(&self) -> &Url;

    /// The lookup endpoint for `cep`.
    ///
    /// A cannot-be-a-base root (`mailto:` and friends) is returned untouched,
    /// and the request against it fails as a network error.
    fn lookup_uri(&self, cep: &Cep) -> Url {
        let mut uri = self.base_uri().clone();
        if let Ok(mut segments) = uri.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(&["ws", cep.as_str(), "json", ""]);
        }
        uri
    }
}

lazy_static! {
    static ref VIACEP_BASE_URI: Url = Url::parse("https://viacep.com.br/").unwrap();
}

/// The public ViaCEP service.
///
/// See [ViaCEP](https://viacep.com.br/).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViaCep;
impl Provider for ViaCep {
    fn base_uri(&self) -> &Url {
        &VIACEP_BASE_URI
    }
}

/// A ViaCEP-compatible service at another address, such as a mirror or a
/// local mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Custom {
    base_uri: Url,
}

impl Custom {
    pub fn new(base_uri: Url) -> Self {
        Custom { base_uri }
    }
}

impl Provider for Custom {
    fn base_uri(&self) -> &Url {
        &self.base_uri
    }
}

#[test]
fn viacep_lookup_uri() {
    let cep: Cep = "01001000".parse().unwrap();
    assert_eq!(
        "https://viacep.com.br/ws/01001000/json/",
        ViaCep.lookup_uri(&cep).as_str()
    );
}

#[test]
fn custom_lookup_uri_keeps_base_path() {
    let cep: Cep = "01001-000".parse().unwrap();
    let with_slash = Custom::new(Url::parse("http://127.0.0.1:8080/mirror/").unwrap());
    let without_slash = Custom::new(Url::parse("http://127.0.0.1:8080/mirror").unwrap());
    assert_eq!(
        "http://127.0.0.1:8080/mirror/ws/01001000/json/",
        with_slash.lookup_uri(&cep).as_str()
    );
    assert_eq!(
        with_slash.lookup_uri(&cep),
        without_slash.lookup_uri(&cep)
    );
}

#[test]
fn custom_lookup_uri_root() {
    let cep: Cep = "01001000".parse().unwrap();
    let provider = Custom::new(Url::parse("http://localhost:9000").unwrap());
    assert_eq!(
        "http://localhost:9000/ws/01001000/json/",
        provider.lookup_uri(&cep).as_str()
    );
}
