use super::{OsmSegment, SegmentId, SegmentIdGenerator, SplitResult};
use crate::model::osm::dataset::{NodePath, OsmNodeId, OsmNodes, OsmWayData, OsmWays};
use itertools::Itertools;
use kdam::tqdm;
use rayon::prelude::*;
use std::collections::HashMap;

/// number of way traversals through each node. stop positions may count double.
pub type NodeHistogram = HashMap<OsmNodeId, usize>;

/// counts how many times each node is used by the provided ways. a node
/// counted more than once is a divider: ways get split there.
///
/// # Arguments
///
/// * `ways` - ways that take part in splitting (degenerate ways already removed)
/// * `nodes` - node store, used to look up stop position tags
/// * `count_stop_nodes` - if true, stop positions add 2 per use so that a way
///   is always split at a stop even when no other way touches it
pub fn build_node_histogram<'a>(
    ways: impl Iterator<Item = &'a OsmWayData>,
    nodes: &OsmNodes,
    count_stop_nodes: bool,
) -> NodeHistogram {
    let mut histogram: NodeHistogram = HashMap::new();
    for way in ways {
        for node_id in way.nodes.iter() {
            // node refs missing from the store can't be stops
            let is_stop = count_stop_nodes
                && nodes
                    .get(node_id)
                    .map(|n| n.is_stop_position())
                    .unwrap_or_default();
            let weight = if is_stop { 2 } else { 1 };
            *histogram.entry(*node_id).or_insert(0) += weight;
        }
    }
    histogram
}

/// cuts a node path at every interior divider, scanning left to right. each
/// cut closes the current slice at the divider and opens the next slice at the
/// same divider, so neighboring slices share exactly one node. a path without
/// interior dividers comes back as a single slice equal to itself.
///
/// expects a path of at least 2 nodes.
pub fn slice_node_path(nodes: &[OsmNodeId], histogram: &NodeHistogram) -> Vec<NodePath> {
    let mut slices: Vec<NodePath> = vec![];
    let mut start = 0;
    let interior = nodes
        .iter()
        .enumerate()
        .take(nodes.len().saturating_sub(1))
        .skip(1);
    for (idx, node_id) in interior {
        if is_divider(node_id, histogram) {
            slices.push(nodes[start..=idx].to_vec());
            start = idx;
        }
    }
    slices.push(nodes[start..].to_vec());
    slices
}

/// splits every way into minimal segments.
///
/// ways with fewer than 2 nodes are dropped first and do not contribute to
/// the node histogram. segment ids are drawn from `segment_ids` in way order,
/// so each way owns a contiguous, increasing block of indices regardless of
/// whether the slicing ran in parallel.
pub fn split_ways(
    ways: &OsmWays,
    nodes: &OsmNodes,
    count_stop_nodes: bool,
    segment_ids: &mut SegmentIdGenerator,
    parallelize: bool,
) -> SplitResult {
    let (valid, degenerate): (Vec<&OsmWayData>, Vec<&OsmWayData>) =
        ways.values().partition(|w| !w.is_degenerate());
    for way in degenerate.iter() {
        log::warn!(
            "way {} has {} node(s) and is dropped before splitting",
            way.osmid,
            way.nodes.len()
        );
    }
    let dropped_ways = degenerate.iter().map(|w| w.osmid).collect_vec();

    let histogram = build_node_histogram(valid.iter().copied(), nodes, count_stop_nodes);
    log::debug!(
        "node histogram has {} entries, {} dividers",
        histogram.len(),
        histogram.values().filter(|c| **c > 1).count()
    );

    let slices: Vec<Vec<NodePath>> = if parallelize {
        valid
            .par_iter()
            .map(|w| slice_node_path(&w.nodes, &histogram))
            .collect()
    } else {
        let slice_iter = tqdm!(valid.iter(), desc = "splitting ways", total = valid.len());
        let result = slice_iter
            .map(|w| slice_node_path(&w.nodes, &histogram))
            .collect();
        eprintln!();
        result
    };

    let mut result = SplitResult {
        dropped_ways,
        ..Default::default()
    };
    for (way, way_slices) in valid.iter().zip(slices) {
        let index_range = segment_ids.reserve(way_slices.len());
        let mut way_segment_ids = Vec::with_capacity(way_slices.len());
        for (index, path) in index_range.zip(way_slices) {
            let segment_id = SegmentId::new(way.osmid, index);
            let segment = OsmSegment::new(segment_id, path, way.tags.clone());
            result.segments.insert(segment_id, segment);
            way_segment_ids.push(segment_id);
        }
        result.old_to_new.insert(way.osmid, way_segment_ids);
    }

    log::info!(
        "split {} ways into {} segments ({} ways split, {} dropped)",
        valid.len(),
        result.n_segments(),
        result.n_split_ways(),
        result.dropped_ways.len()
    );
    result
}

fn is_divider(node_id: &OsmNodeId, histogram: &NodeHistogram) -> bool {
    histogram.get(node_id).map(|c| *c > 1).unwrap_or_default()
}
