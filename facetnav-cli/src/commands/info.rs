use crate::cli::OutputFormat;
use crate::context::{Loaded, Settings};
use crate::error::CliResult;
use facetnav_core::{CardinalitySource, Hierarchy};
use serde::Serialize;

/// Shape of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotSummary {
    pub nodes: usize,
    pub roots: usize,
    pub leaves: usize,
    /// Levels on the longest root-to-leaf path
    pub depth: usize,
    pub counted: bool,
    /// Nodes left visible by the cardinality source
    pub visible: usize,
}

impl SnapshotSummary {
    pub fn of(loaded: &Loaded) -> Self {
        let hierarchy = &loaded.hierarchy;
        let nodes = hierarchy.nodes();
        let visible = match &loaded.cardinalities {
            Some(table) => nodes.iter().filter(|&&id| table.is_valid(id)).count(),
            None => nodes.len(),
        };

        SnapshotSummary {
            nodes: nodes.len(),
            roots: hierarchy.roots().len(),
            leaves: nodes
                .iter()
                .filter(|&&id| hierarchy.children_of(id).is_empty())
                .count(),
            depth: nodes
                .iter()
                .map(|&id| hierarchy.depth(id) + 1)
                .max()
                .unwrap_or(0),
            counted: loaded.cardinalities.is_some(),
            visible,
        }
    }
}

pub fn run(settings: &Settings) -> CliResult<()> {
    let loaded = Loaded::read(&settings.snapshot, settings.empty)?;
    let summary = SnapshotSummary::of(&loaded);

    match settings.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Tree => {
            println!("snapshot: {}", settings.snapshot.display());
            println!("nodes:    {}", summary.nodes);
            println!("roots:    {}", summary.roots);
            println!("leaves:   {}", summary.leaves);
            println!("depth:    {}", summary.depth);
            if summary.counted {
                println!("visible:  {}", summary.visible);
            } else {
                println!("visible:  {} (no counts)", summary.visible);
            }
        }
    }
    Ok(())
}
