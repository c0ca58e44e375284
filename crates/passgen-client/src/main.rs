//! PassGen client entry point.
//!
//! Connects to the server, shows the menu it sends, and loops: read one line
//! of user input, parse it locally, send a Request record, interpret the
//! Response record.  The loop ends when the user sends the quit selector
//! (the server answers with `keep_going = false`) or on any transport fault.
//!
//! Local input handling never advances the protocol on its own: an empty or
//! over-long line re-prompts without contacting the server, and a lone
//! selector gets the default length substituted before sending.

use std::io::Write as _;
use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use passgen_client::application::prompt::{parse_line, PromptOutcome, DEFAULT_LENGTH_TEXT};
use passgen_client::infrastructure::network::ServerConnection;
use passgen_core::RequestRecord;

/// Interactive password-generation client.
#[derive(Debug, Parser)]
#[command(name = "passgen-client", version, about)]
struct Args {
    /// Server address to connect to.
    #[arg(long, default_value = "127.0.0.1:8080")]
    server: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Quiet by default so log lines don't interleave with the prompt;
    // `RUST_LOG` turns diagnostics on.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    let mut connection = ServerConnection::connect(args.server)
        .await
        .context("could not reach the server")?;
    println!("Connection completed\n");

    let menu = connection.recv_menu().await.context("receiving the menu")?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}", menu.text);
        std::io::stdout().flush()?;

        let outcome = match lines.next_line().await? {
            Some(line) => parse_line(&line),
            // End of input: close the session cleanly instead of spinning.
            None => PromptOutcome::Submit {
                selector: b'q',
                length_text: String::new(),
                used_default_length: false,
            },
        };

        let (selector, length_text) = match outcome {
            PromptOutcome::Invalid => {
                println!("Invalid input. Please enter a valid type and length.");
                continue;
            }
            PromptOutcome::Submit {
                selector,
                length_text,
                used_default_length,
            } => {
                if used_default_length {
                    println!(
                        "(The length is absent, a default value is used: {DEFAULT_LENGTH_TEXT})"
                    );
                }
                (selector, length_text)
            }
        };

        let response = connection
            .request(&RequestRecord::new(selector, length_text))
            .await
            .context("the connection to the server failed")?;

        if !response.keep_going {
            break;
        }

        if response.request_error {
            println!("Bad request: {}", response.error_text);
        } else {
            println!("Password generated: {}\n", response.password);
        }
    }

    Ok(())
}
