//! `affirm` binary: serve the affirmation API or generate one affirmation locally.
//!
//! Subcommands: `serve` (default), `once`.

mod log_format;
mod logging;

use clap::{Parser, Subcommand};
use cli::OnceInput;
use config::Settings;

#[derive(Parser, Debug)]
#[command(name = "affirm")]
#[command(about = "affirm: short supportive affirmations over HTTP")]
struct Args {
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (GET /health, POST /api/affirmation)
    Serve(ServeArgs),
    /// Generate one affirmation and print it
    Once(OnceArgs),
}

#[derive(clap::Args, Debug, Default)]
struct ServeArgs {
    /// Listen address (default: AFFIRM_ADDR or 127.0.0.1:8000)
    #[arg(long, value_name = "ADDR")]
    addr: Option<String>,
}

#[derive(clap::Args, Debug)]
struct OnceArgs {
    #[arg(long, value_name = "NAME")]
    name: String,
    #[arg(long, value_name = "TEXT")]
    feeling: String,
    #[arg(long, value_name = "TEXT")]
    details: Option<String>,
    /// Print {"affirmation": ...} instead of plain text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    config::load_and_apply("affirm", None::<&std::path::Path>).ok();
    logging::init()?;

    let args = Args::parse();

    let settings = match Settings::from_env() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("configuration error: {}", e);
            std::process::exit(2);
        }
    };

    match args.cmd.unwrap_or(Command::Serve(ServeArgs::default())) {
        Command::Serve(sa) => {
            if let Err(e) = serve::run_serve(&settings, sa.addr.as_deref()).await {
                eprintln!("serve error: {}", e);
                std::process::exit(1);
            }
        }
        Command::Once(oa) => {
            let service = cli::service_from_settings(&settings)?;
            let input = OnceInput {
                name: oa.name,
                feeling: oa.feeling,
                details: oa.details,
                json: oa.json,
            };
            match cli::run_once(&service, &input).await {
                Ok(out) => println!("{}", out),
                Err(e) => {
                    eprintln!("{} ({})", e.detail, e.status.as_u16());
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}
