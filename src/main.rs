extern crate log;
pub mod config;
pub mod geofile;
pub mod handler;
pub mod server;
pub mod sheet;
use crate::config::load_config;
use crate::geofile::geojson::write_geojson_to_file;
use crate::handler::convert_spreadsheet;
use crate::server::{run_server, ServerState};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

/// Serve public spreadsheets as GeoJSON point collections.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve GeoJSON over HTTP at `/{id}`.
    Serve {
        /// Path to the YAML config file.
        #[arg(short, long)]
        config_filepath: Option<PathBuf>,
    },
    /// Convert a single spreadsheet and write the GeoJSON to a file or stdout.
    Convert {
        /// Spreadsheet id.
        #[arg(short, long)]
        id: String,
        /// Output GeoJSON file. Prints to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Path to the YAML config file.
        #[arg(short, long)]
        config_filepath: Option<PathBuf>,
    },
}

fn serve(config_filepath: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_filepath.as_deref())?;
    log::info!("Serving with {:?}", config);
    let state = ServerState {
        options: config.handler_options(),
        source: Arc::new(config.feed_source()),
    };
    run_server(&config.bind_address, config.port, state)?;
    Ok(())
}

fn convert(
    id: &str,
    output: Option<PathBuf>,
    config_filepath: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = load_config(config_filepath.as_deref())?;
    let geojson = convert_spreadsheet(Some(id), &config.feed_source(), config.coordinate_mode)?;
    match output {
        Some(output_filepath) => {
            log::info!("Writing GeoJSON to {:?}", &output_filepath);
            write_geojson_to_file(&geojson, &output_filepath)?;
        }
        None => println!("{}", geojson),
    }
    Ok(())
}

fn try_main() -> anyhow::Result<()> {
    let args = Args::parse();
    match args.command {
        Command::Serve { config_filepath } => serve(config_filepath),
        Command::Convert {
            id,
            output,
            config_filepath,
        } => convert(&id, output, config_filepath),
    }
}

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    env_logger::init();
    if let Err(e) = try_main() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1)
    }
}
