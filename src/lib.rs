/*!
# Brazilian postal code (CEP) lookup client using async / await

## Legal

Dual-licensed under `MIT` or the [UNLICENSE](http://unlicense.org/).

## Features

Resolves a CEP into its address through [ViaCEP](https://viacep.com.br/):
validates the input, issues a single `GET /ws/{cep}/json/`, and classifies the
outcome as an address, an unknown CEP, a network failure or an undecodable
response. Input that is not a CEP never reaches the network.

Using [reqwest](https://crates.io/crates/reqwest) for the HTTP client and
[serde_json](https://crates.io/crates/serde_json) for the response.

## Usage

```rust,no_run
use viacep::{render, LookupError, RenderOptions, ViaCepClient};

# async fn run() -> Result<(), LookupError> {
let client = ViaCepClient::viacep()?;

match client.lookup("01001-000").await {
    Ok(address) => {
        for line in render(&address, &RenderOptions::default()) {
            println!("{}", line);
        }
    }
    Err(LookupError::NotFound(cep)) => eprintln!("unknown CEP {}", cep.formatted()),
    Err(err) => return Err(err),
}
# Ok(())
# }
```

Interactive front ends can use [`form::submit`], which also keeps a
caller-owned [`SearchHistory`] of successful lookups.
*/
#[macro_use]
extern crate lazy_static;

mod address;
mod cep;
mod client;
mod deserializers;
pub mod error;
pub mod form;
mod history;
mod options;
pub mod provider;
mod render;

pub use address::AddressRecord;
pub use cep::{Cep, CEP_LEN};
pub use client::Client;
pub use error::{InvalidCep, LookupError};
pub use form::Reply;
pub use history::{SearchHistory, DEFAULT_RECENT_LIMIT};
pub use options::{Options, RenderOptions};
pub use provider::Provider;
pub use render::{render, Field, Line};

pub type ViaCepClient = Client<provider::ViaCep>;
