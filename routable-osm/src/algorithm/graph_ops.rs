use super::{
    assembly::{self, AssemblyResult},
    split::{self, SegmentIdGenerator},
    stitch::{self, StitchResult},
    GraphBuildOutput,
};
use crate::{
    config::GraphBuildConfiguration,
    model::osm::{dataset::OsmDataset, OsmError},
};

/// builds a routable graph from a raw dataset.
///
/// 1. ways are split into minimal segments at shared nodes, and at stop
///    positions when transit is enabled
/// 2. route relations are stitched into stop-to-stop transit edges
/// 3. segments and transit edges that pass the highway filter become edges
///
/// # Returns
///
/// the graph and its diagnostics, or an error if a route is invalid and the
/// configuration does not allow skipping it.
pub fn build_graph(
    dataset: &OsmDataset,
    config: &GraphBuildConfiguration,
) -> Result<GraphBuildOutput, OsmError> {
    let missing_refs = dataset.find_missing_node_refs();
    if !missing_refs.is_empty() {
        log::warn!(
            "{} node references in ways have no node data, edges using them will be left out",
            missing_refs.len()
        );
    }

    let mut segment_ids = SegmentIdGenerator::new();

    eprintln!();
    log::info!(
        "  (((1))) splitting ways (mode: {}, split at stop positions: {})",
        config.mode,
        config.mode.count_stop_nodes()
    );
    let split_result = split::split_ways(
        &dataset.ways,
        &dataset.nodes,
        config.mode.count_stop_nodes(),
        &mut segment_ids,
        config.parallelize,
    );

    let stitched = if config.mode.stitch_routes() {
        eprintln!();
        log::info!(
            "  (((2))) stitching transit routes (transit edge ids start at {})",
            segment_ids.peek()
        );
        stitch::stitch_routes(
            &dataset.relations,
            &config.route_types,
            &split_result,
            &mut segment_ids,
            config.ignore_invalid_routes,
        )?
    } else {
        eprintln!();
        log::info!("  (((2))) stitching transit routes (skipped)");
        StitchResult::default()
    };

    eprintln!();
    log::info!("  (((3))) assembling graph");
    let AssemblyResult {
        graph,
        diagnostics: assembly_diagnostics,
    } = assembly::assemble_graph(
        &split_result.segments,
        &stitched.edges,
        &dataset.nodes,
        &config.highway_filter,
        config.parallelize,
    );

    let mut diagnostics = stitched.diagnostics;
    diagnostics.extend(assembly_diagnostics);
    for diagnostic in diagnostics.iter() {
        log::debug!("{diagnostic}");
    }
    if !diagnostics.is_empty() {
        log::warn!("graph built with {} diagnostics", diagnostics.len());
    }

    Ok(GraphBuildOutput {
        graph,
        diagnostics,
        dropped_ways: split_result.dropped_ways,
        failed_routes: stitched.failed_routes,
    })
}
