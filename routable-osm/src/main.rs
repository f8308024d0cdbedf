use clap::{Parser, Subcommand};
use routable_osm::{
    config::{BuildMode, GraphBuildConfiguration},
    model::{osm::OsmSource, OsmCliError},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct OsmAppArguments {
    #[command(subcommand)]
    app: App,
}

#[derive(Subcommand)]
pub enum App {
    Pbf {
        #[arg(long, help = "path to .pbf file for import")]
        pbf_file: String,
        #[arg(long, help = "path to .toml or .json file with graph build parameters")]
        configuration_file: Option<String>,
        #[arg(
            long,
            help = "also build transit edges from bus and tram route relations"
        )]
        transit: bool,
    },
}

pub fn run(app: &App) -> Result<(), OsmCliError> {
    env_logger::init();
    match app {
        App::Pbf {
            pbf_file,
            configuration_file,
            transit,
        } => {
            let mut conf = match configuration_file {
                None => Ok(GraphBuildConfiguration::default()),
                Some(f) => {
                    log::info!("reading graph build configuration from {f}");
                    GraphBuildConfiguration::try_from(f)
                }
            }?;
            if *transit {
                conf.mode = BuildMode::RoadsAndTransit;
            }
            let source = OsmSource::Pbf {
                pbf_filepath: pbf_file.clone(),
            };
            let output = source.import(&conf)?;
            for diagnostic in output.diagnostics.iter() {
                log::warn!("{diagnostic}");
            }
            let summary = serde_json::to_string_pretty(&output.summary())?;
            println!("{summary}");
            eprintln!("finished.");
            Ok(())
        }
    }
}

fn main() {
    let args = OsmAppArguments::parse();
    if let Err(e) = run(&args.app) {
        log::error!("routable-osm failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
