//! Settings resolution and snapshot loading shared by all commands.

use crate::cli::{NavArgs, OutputFormat, StatisticsMode};
use crate::config_file::LoadedConfig;
use crate::error::{CliError, CliResult};
use facetnav_core::{CardinalityTable, EmptyNodeBehaviour, MemoryHierarchy, NodeId, Snapshot};
use facetnav_stats::{NavigationContext, StopAt};
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::cmp::Ordering;
use std::convert::Infallible;
use std::path::{Path, PathBuf};

/// Effective settings after layering flags, environment and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub snapshot: PathBuf,
    pub format: OutputFormat,
    pub statistics: StatisticsMode,
    pub empty: EmptyNodeBehaviour,
    pub sort_by_label: bool,
    pub stop_at: Option<StopAt>,
}

impl Settings {
    /// `args` already carries environment values (clap `env`), so only the
    /// config file and defaults remain to fill in.
    pub fn resolve(
        args: &NavArgs,
        sort_by_label: bool,
        config: &LoadedConfig,
    ) -> CliResult<Self> {
        let file = config.navigation().cloned().unwrap_or_default();

        let snapshot = match (&args.snapshot, &file.snapshot) {
            (Some(path), _) => path.clone(),
            (None, Some(path)) => match config.base_dir() {
                Some(base) if path.is_relative() => base.join(path),
                _ => path.clone(),
            },
            (None, None) => return Err(CliError::NoSnapshot),
        };

        Ok(Settings {
            snapshot,
            format: args.format.or(file.format).unwrap_or_default(),
            statistics: args.statistics.or(file.statistics).unwrap_or_default(),
            empty: args
                .empty
                .map(Into::into)
                .or(file.empty)
                .unwrap_or_default(),
            sort_by_label: sort_by_label || file.sort_by_label.unwrap_or(false),
            stop_at: args.stop_at(),
        })
    }
}

/// What each level shows for a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeEntity {
    pub id: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl NodeEntity {
    /// Label, or the numeric id for unlabelled nodes.
    pub fn display_name(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => self.id.as_u32().to_string(),
        }
    }

    /// Case-insensitive label order, ties broken by id.
    pub fn by_label(a: &NodeEntity, b: &NodeEntity) -> Ordering {
        a.display_name()
            .to_lowercase()
            .cmp(&b.display_name().to_lowercase())
            .then(a.id.cmp(&b.id))
    }
}

/// A parsed snapshot ready for navigation.
pub struct Loaded {
    pub hierarchy: MemoryHierarchy,
    pub labels: FxHashMap<NodeId, String>,
    pub cardinalities: Option<CardinalityTable>,
}

impl Loaded {
    pub fn read(path: &Path, empty: EmptyNodeBehaviour) -> CliResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            CliError::Input(format!("cannot read snapshot {}: {e}", path.display()))
        })?;
        let snapshot = Snapshot::from_json_slice(&bytes)?;
        let hierarchy = snapshot.hierarchy()?;
        let cardinalities = snapshot.cardinalities(&hierarchy, empty)?;

        tracing::info!(
            path = %path.display(),
            nodes = hierarchy.len(),
            counted = cardinalities.is_some(),
            "loaded snapshot"
        );

        Ok(Loaded {
            labels: snapshot.labels(),
            hierarchy,
            cardinalities,
        })
    }

    pub fn entity(&self, id: NodeId) -> Result<NodeEntity, Infallible> {
        Ok(NodeEntity {
            id,
            label: self.labels.get(&id).cloned(),
        })
    }

    /// Navigation context over this snapshot, flagging `requested`.
    pub fn navigation(
        &self,
        settings: &Settings,
        requested: Option<NodeId>,
    ) -> NavigationContext<'_, impl Fn(NodeId) -> Result<NodeEntity, Infallible> + '_> {
        let mut ctx = NavigationContext::new(&self.hierarchy, move |id: NodeId| self.entity(id))
            .with_statistics(settings.statistics.into());
        if let Some(table) = &self.cardinalities {
            ctx = ctx.with_cardinalities(table);
        }
        if let Some(id) = requested {
            ctx = ctx.with_requested(id);
        }
        if let Some(stop_at) = settings.stop_at {
            ctx = ctx.with_stop_at(stop_at);
        }
        ctx
    }
}
