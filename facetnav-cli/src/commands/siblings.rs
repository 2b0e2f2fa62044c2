use crate::context::{Loaded, Settings};
use crate::error::CliResult;
use crate::output;
use facetnav_core::NodeId;
use facetnav_stats::compute_siblings;

pub fn run(of: NodeId, settings: &Settings) -> CliResult<()> {
    let loaded = Loaded::read(&settings.snapshot, settings.empty)?;
    let ctx = loaded.navigation(settings, Some(of));
    let levels = compute_siblings(&ctx, of)?;
    output::print_levels(&levels, settings.format)
}
