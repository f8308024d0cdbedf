use super::DataIntegrityError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OsmError {
    #[error("failure reading .pbf file: {source}")]
    PbfLibError { source: osmpbf::Error },
    #[error("structure of OSM data is invalid: {0}")]
    InvalidOsmData(String),
    #[error(transparent)]
    DataIntegrity(#[from] DataIntegrityError),
    #[error("pbf does not contain any OSM 'node' elements")]
    NoNodesFound,
    #[error("pbf does not contain any OSM 'way' elements")]
    NoWaysFound,
    #[error("{0}")]
    InternalError(String),
}
