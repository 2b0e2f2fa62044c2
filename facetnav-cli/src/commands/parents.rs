use crate::context::{Loaded, NodeEntity, Settings};
use crate::error::CliResult;
use crate::output;
use facetnav_core::NodeId;
use facetnav_stats::compute_parents;

/// Which siblings to show next to each breadcrumb node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FanOut {
    /// Breadcrumb only
    Off,
    /// Every valid sibling
    All,
    /// Siblings whose label contains the text, ignoring case
    Matching(String),
}

impl FanOut {
    pub fn from_flags(fan_out: bool, matching: Option<String>) -> Self {
        match matching {
            Some(text) => FanOut::Matching(text.to_lowercase()),
            None if fan_out => FanOut::All,
            None => FanOut::Off,
        }
    }

    fn accepts(&self, entity: &NodeEntity) -> bool {
        match self {
            FanOut::Off => false,
            FanOut::All => true,
            FanOut::Matching(needle) => entity.display_name().to_lowercase().contains(needle),
        }
    }
}

pub fn run(of: NodeId, fan_out: &FanOut, settings: &Settings) -> CliResult<()> {
    let loaded = Loaded::read(&settings.snapshot, settings.empty)?;
    let ctx = loaded.navigation(settings, Some(of));

    let filter = |entity: &NodeEntity| fan_out.accepts(entity);
    let sibling_filter = match fan_out {
        FanOut::Off => None,
        _ => Some(&filter as &dyn Fn(&NodeEntity) -> bool),
    };

    let levels = compute_parents(&ctx, of, sibling_filter)?;
    output::print_levels(&levels, settings.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(label: &str) -> NodeEntity {
        NodeEntity {
            id: NodeId(1),
            label: Some(label.to_string()),
        }
    }

    #[test]
    fn test_matching_wins_over_flag() {
        let fan_out = FanOut::from_flags(false, Some("PHO".to_string()));
        assert_eq!(fan_out, FanOut::Matching("pho".to_string()));
        assert!(fan_out.accepts(&entity("Smartphones")));
        assert!(!fan_out.accepts(&entity("Audio")));
    }

    #[test]
    fn test_flag_only() {
        assert_eq!(FanOut::from_flags(true, None), FanOut::All);
        assert_eq!(FanOut::from_flags(false, None), FanOut::Off);
    }
}
