//! Command-line entry point: print the details of a domain.
//!
//! ```bash
//! godaddy-domains <api_key> <secret> <domain>
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (e.g.
//! `RUST_LOG=debug` to see the request/response lines).

use std::process::ExitCode;

use godaddy_domains::DomainsClient;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(api_key), Some(secret), Some(domain)) = (args.next(), args.next(), args.next())
    else {
        eprintln!("usage: godaddy-domains <api_key> <secret> <domain>");
        return ExitCode::from(2);
    };

    let client = match DomainsClient::new(api_key, secret) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match client.get_domain_details(&domain).await {
        Ok(details) => match serde_json::to_string_pretty(&details) {
            Ok(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
