//! View files: saved sets of vertex toggles.

use std::path::Path;

use gv_graph::Graph;
use serde::Deserialize;
use tracing::warn;

use crate::error::{CliError, CliResult};

/// Vertex toggles and display options, loaded from YAML or built from flags.
///
/// ```yaml
/// disabled: [B, C]
/// enabled: [C]
/// enabled_only: true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    pub disabled: Vec<String>,
    pub enabled: Vec<String>,
    pub enabled_only: bool,
}

impl ViewConfig {
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ViewFileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| CliError::ViewFormat {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Layer `other` on top of this view: its toggles run after ours.
    pub fn merge(mut self, other: ViewConfig) -> Self {
        self.disabled.extend(other.disabled);
        self.enabled.extend(other.enabled);
        self.enabled_only |= other.enabled_only;
        self
    }

    /// Disable then enable the listed vertices.
    ///
    /// Unknown names leave the graph untouched; they are reported as warnings.
    pub fn apply(&self, graph: &mut Graph) {
        let toggles = self
            .disabled
            .iter()
            .map(|name| (name, false))
            .chain(self.enabled.iter().map(|name| (name, true)));

        for (name, enabled) in toggles {
            if !graph.contains_vertex(name) {
                warn!(vertex = %name, "ignoring toggle of unknown vertex");
            }
            graph.toggle_vertex(name, enabled);
        }
    }
}
