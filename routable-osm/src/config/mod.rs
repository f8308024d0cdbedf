mod build_mode;
mod graph_build_config;

pub use build_mode::BuildMode;
pub use graph_build_config::GraphBuildConfiguration;
