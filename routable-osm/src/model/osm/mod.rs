mod data_integrity_error;
pub mod dataset;
pub mod import_ops;
mod osm_error;
mod osm_source;

pub use data_integrity_error::DataIntegrityError;
pub use osm_error::OsmError;
pub use osm_source::OsmSource;
