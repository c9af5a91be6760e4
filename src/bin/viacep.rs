use std::{env, io::Write, time::Duration};

use anyhow::Context;
use clap::Parser;
use log::debug;
use tokio::io::{AsyncBufReadExt, BufReader};
use url::Url;
use viacep::provider::{Custom, Provider, ViaCep};
use viacep::{form, Client, Options, RenderOptions, Reply, SearchHistory};

/// Look up Brazilian postal codes (CEP) on ViaCEP.
///
/// With no CEP arguments, reads one CEP per line from standard input until
/// an empty line or end of input.
#[derive(Parser, Debug)]
#[command(name = "viacep", version, about)]
struct Args {
    /// CEPs to look up, as 01001000 or 01001-000.
    ceps: Vec<String>,

    /// Also show the telephone area code (DDD).
    #[arg(long)]
    ddd: bool,

    /// Show the most recent searches after each lookup.
    #[arg(long)]
    history: bool,

    /// ViaCEP-compatible service root.
    #[arg(long, value_name = "URL")]
    base_url: Option<Url>,

    /// Request timeout in seconds. No timeout by default.
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if env::var_os("RUST_LOG").is_none() {
        // Set `RUST_LOG=viacep=debug` to see each request.
        env::set_var("RUST_LOG", "viacep=warn");
    }
    pretty_env_logger::init();

    let args = Args::parse();
    debug!("arguments: {:?}", args);

    let options = Options {
        timeout: args.timeout.map(Duration::from_secs),
        ..Default::default()
    };

    let all_found = match args.base_url.clone() {
        Some(base_url) => run(Client::with_options(Custom::new(base_url), &options)?, &args).await?,
        None => run(Client::with_options(ViaCep, &options)?, &args).await?,
    };

    if !all_found {
        std::process::exit(1);
    }
    Ok(())
}

/// Returns `false` if any submission did not end in an address.
async fn run<P: Provider>(client: Client<P>, args: &Args) -> anyhow::Result<bool> {
    let render_options = RenderOptions {
        area_code: args.ddd,
    };
    let mut session = Session {
        client,
        history: SearchHistory::new(),
        render_options,
        show_history: args.history,
        all_found: true,
    };

    if !args.ceps.is_empty() {
        for cep in &args.ceps {
            session.submit(cep).await;
        }
        return Ok(session.all_found);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("CEP: ");
        std::io::stdout().flush().context("flushing prompt")?;

        let line = match lines.next_line().await.context("reading CEP")? {
            Some(line) if !line.trim().is_empty() => line,
            _ => break,
        };
        session.submit(&line).await;
    }
    Ok(session.all_found)
}

struct Session<P> {
    client: Client<P>,
    history: SearchHistory,
    render_options: RenderOptions,
    show_history: bool,
    all_found: bool,
}

impl<P: Provider> Session<P> {
    async fn submit(&mut self, input: &str) {
        let reply = form::submit(&self.client, &mut self.history, input, &self.render_options).await;
        let Some(reply) = reply else {
            return;
        };

        match reply {
            Reply::Address(_) => println!("{}", reply),
            _ => {
                self.all_found = false;
                eprintln!("{}", reply);
            }
        }

        if self.show_history && !self.history.is_empty() {
            let recent: Vec<String> = self.history.recent().map(|cep| cep.formatted()).collect();
            println!("Recent searches: {}", recent.join(", "));
        }
    }
}
