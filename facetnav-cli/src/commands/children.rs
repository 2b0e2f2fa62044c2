use crate::context::{Loaded, NodeEntity, Settings};
use crate::error::CliResult;
use crate::output;
use facetnav_core::NodeId;
use facetnav_stats::{compute_children, Comparator};

pub fn run(start: Option<NodeId>, include_start: bool, settings: &Settings) -> CliResult<()> {
    let loaded = Loaded::read(&settings.snapshot, settings.empty)?;
    let ctx = loaded.navigation(settings, start);

    let by_label: Comparator<'_, NodeEntity> = &NodeEntity::by_label;
    let order = settings.sort_by_label.then_some(by_label);

    let levels = compute_children(&ctx, start, !include_start, order)?;
    output::print_levels(&levels, settings.format)
}
