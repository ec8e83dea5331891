use std::io::Read as _;

use anyhow::Context as _;
use anyhow::Result;
use strhelp_cli::{decode_stdin, run, Command};

use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, StructOpt)]
#[structopt(name = "strhelp")]
struct Cli {
    #[structopt(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .without_time()
        .init();
    let cli = Cli::from_args();
    tracing::debug!("arguments parsed: {:?}", cli);

    let input = match cli.command.input().text.clone() {
        Some(text) => text,
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            decode_stdin(buf)?
        }
    };

    let out = run(&cli.command, &input)?;
    println!("{}", out);
    Ok(())
}
