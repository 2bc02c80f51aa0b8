mod args;
mod io;

use std::io::IsTerminal;
use std::process::ExitCode;

use pbin_core::errors::InputError;
use pbin_core::paste::{GetOptions, PasteOptions};
use tracing_subscriber::EnvFilter;

use crate::args::{parse, Mode};

fn print_usage() {
    eprintln!(
        "usage:\n  \
         pbin [-burn] [-open] [-hour|-day|-week|-month|-year|-never] [-p <pass>] [-base64] < input\n  \
         pbin [-o <path>] [-p <pass>] [-base64] <https://paste-url#secret>"
    );
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("PBIN_LOG")
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    if argv.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let cli = match parse(&argv) {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("error: {message}");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: args::Cli) -> anyhow::Result<()> {
    let client = reqwest::Client::new();

    match cli.mode {
        Mode::Put => {
            if std::io::stdin().is_terminal() {
                return Err(InputError::NoPipedInput.into());
            }

            tracing::debug!(expiry = ?cli.expiry, burn = cli.burn_after_read, "starting put");
            let mut plaintext = io::read_stdin().await?;
            if cli.base64 {
                plaintext = io::decode_base64(&plaintext)?;
            }

            let options = PasteOptions {
                expiry: cli.expiry,
                burn_after_read: cli.burn_after_read,
                open_discussion: cli.open_discussion,
                password: cli.password,
            };

            let url = pbin_core::paste::put(&client, &plaintext, &options).await?;
            println!("{url}");
        }
        Mode::Get { url } => {
            let options = GetOptions { password: cli.password };
            let mut plaintext = pbin_core::paste::get(&client, &url, &options).await?;
            if cli.base64 {
                plaintext = io::encode_base64(&plaintext).into_bytes();
            }
            io::write_output(&plaintext, cli.output.as_deref()).await?;
        }
    }

    Ok(())
}
