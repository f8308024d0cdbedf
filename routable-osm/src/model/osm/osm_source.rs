use super::{import_ops, OsmError};
use crate::{
    algorithm::{graph_ops, GraphBuildOutput},
    config::GraphBuildConfiguration,
};
use serde::{Deserialize, Serialize};

/// a source of OSM data that a graph can be built from.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub enum OsmSource {
    Pbf { pbf_filepath: String },
}

impl OsmSource {
    pub fn import(&self, config: &GraphBuildConfiguration) -> Result<GraphBuildOutput, OsmError> {
        match self {
            OsmSource::Pbf { pbf_filepath } => {
                eprintln!();
                log::info!("reading PBF source {pbf_filepath}");
                let dataset = import_ops::read_pbf(pbf_filepath, &config.element_filter)?;
                let result = graph_ops::build_graph(&dataset, config)?;
                log::info!(
                    "built PBF-sourced graph with {} vertices, {} edges",
                    result.graph.n_vertices(),
                    result.graph.n_edges()
                );
                Ok(result)
            }
        }
    }
}
