use super::{
    dataset::{
        osm_element_filter::ElementFilter, OsmDataset, OsmNodeData, OsmRelationData, OsmWayData,
    },
    OsmError,
};
use kdam::{term, Bar, BarExt};
use osmpbf::{Element, ElementReader};
use std::path::Path;

/// reads a PBF file into an [`OsmDataset`]. nodes, ways and relations keep
/// the order in which they appear in the file.
/// - the provided [`ElementFilter`] removes ways based on their highway tag
/// - nodes that no retained way refers to are removed after reading
/// - relations are kept whole; members that were filtered out surface later
///   as data integrity errors on the routes that use them
pub fn read_pbf(filepath: &str, filter: &ElementFilter) -> Result<OsmDataset, OsmError> {
    if !filter.is_no_filter() {
        log::info!("reading ways with filter {filter:?}");
    }
    let fp = Path::new(filepath);
    let reader = ElementReader::from_path(fp).map_err(|e| OsmError::PbfLibError { source: e })?;

    term::hide_cursor().map_err(|e| OsmError::InternalError(e.to_string()))?;
    let mut reader_bar = Bar::builder()
        .desc(filepath)
        .position(0)
        .unit(" rows")
        .unit_scale(true)
        .build()
        .map_err(OsmError::InternalError)?;
    let mut nodes_bar = Bar::builder()
        .desc("nodes retained")
        .position(1)
        .build()
        .map_err(OsmError::InternalError)?;
    let mut ways_bar = Bar::builder()
        .desc("ways retained")
        .position(2)
        .build()
        .map_err(OsmError::InternalError)?;
    let mut relations_bar = Bar::builder()
        .desc("relations retained")
        .position(3)
        .build()
        .map_err(OsmError::InternalError)?;

    let mut dataset = OsmDataset::empty();
    let mut ways_visited: usize = 0;
    let mut invalid_relations: usize = 0;
    reader
        .for_each(|e| {
            let valid_element = filter.accept(&e);
            match e {
                Element::Node(node) => {
                    if node.id() == 0 {
                        log::warn!(
                            "node missing OSMID at ({},{}) ignored",
                            node.lon(),
                            node.lat()
                        );
                    } else {
                        let _ = nodes_bar.update(1);
                        dataset.insert_node(OsmNodeData::from(&node));
                    }
                }
                Element::DenseNode(dense) => {
                    // from documentation on DenseNode:
                    // So, if you want to [pattern match on] `Node`, you also likely want to match [`DenseNode`].
                    let _ = nodes_bar.update(1);
                    dataset.insert_node(OsmNodeData::from(&dense));
                }
                Element::Way(_) if !valid_element => {
                    ways_visited += 1;
                }
                Element::Way(way) => {
                    ways_visited += 1;
                    let _ = ways_bar.update(1);
                    dataset.insert_way(OsmWayData::new(&way));
                }
                Element::Relation(relation) => match OsmRelationData::try_from(&relation) {
                    Ok(r) => {
                        let _ = relations_bar.update(1);
                        dataset.insert_relation(r);
                    }
                    Err(e) => {
                        invalid_relations += 1;
                        log::warn!("{e}");
                    }
                },
            }
            let _ = reader_bar.update(1);
        })
        .map_err(|e| OsmError::PbfLibError { source: e })?;

    // close the 4 nested progress bars
    eprintln!();
    eprintln!();
    eprintln!();
    eprintln!();
    term::show_cursor().map_err(|e| OsmError::InternalError(e.to_string()))?;

    if dataset.nodes.is_empty() {
        return Err(OsmError::NoNodesFound);
    }
    if dataset.ways.is_empty() {
        return Err(OsmError::NoWaysFound);
    }

    let removed = dataset.retain_connected_nodes();
    log::info!(
        "read {} nodes, {}/{} ways, {} relations ({} unreferenced nodes removed, {} relations invalid)",
        dataset.nodes.len(),
        dataset.ways.len(),
        ways_visited,
        dataset.relations.len(),
        removed,
        invalid_relations
    );
    Ok(dataset)
}
