pub mod assembly;
mod graph_build_output;
mod graph_diagnostic;
pub mod graph_ops;
pub mod split;
pub mod stitch;

pub use graph_build_output::GraphBuildOutput;
pub use graph_diagnostic::GraphDiagnostic;
