//! Closed vocabularies shared by every application tree: result keys,
//! monitors and post-processors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Every result key an application tree may declare.
pub const ALLOWED_RESULTS: &[&str] = &[
    "total_energy",
    "total_energy_contributions",
    "pressure",
    "fermi_energy",
    "atomic_forces",
    "total_force",
    "stress_tensor",
    "density_of_states",
    "band_structure",
    "band_gaps",
    "phonon_dos",
    "phonon_dispersions",
    "zero_point_energy",
    "final_structure",
    "magnetic_moments",
    "reaction_energy_barrier",
    "reaction_energy_profile",
    "potential_profile",
    "charge_density_profile",
];

pub fn allowed_results() -> &'static [&'static str] {
    ALLOWED_RESULTS
}

pub fn is_allowed_result(key: &str) -> bool {
    ALLOWED_RESULTS.contains(&key)
}

/// A way of observing a running calculation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Monitor {
    /// Capture of the process standard output
    StandardOutput,
    /// Ionic relaxation convergence
    ConvergenceIonic,
    /// Electronic self-consistency convergence
    ConvergenceElectronic,
    /// Reachability of a served notebook endpoint
    JupyterNotebookEndpoint,
}

impl Monitor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Monitor::StandardOutput => "standard_output",
            Monitor::ConvergenceIonic => "convergence_ionic",
            Monitor::ConvergenceElectronic => "convergence_electronic",
            Monitor::JupyterNotebookEndpoint => "jupyter_notebook_endpoint",
        }
    }

    /// Key under which the monitor is published in [`allowed_monitors`].
    pub fn key(&self) -> &'static str {
        match self {
            Monitor::JupyterNotebookEndpoint => "jupyterNotebookEndpoint",
            other => other.as_str(),
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Monitor::StandardOutput,
            Monitor::ConvergenceIonic,
            Monitor::ConvergenceElectronic,
            Monitor::JupyterNotebookEndpoint,
        ]
    }
}

impl std::fmt::Display for Monitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A step applied after a calculation finishes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum PostProcessor {
    ErrorHandler,
    PrepareRestart,
    RemoveNonZeroWeightKpoints,
}

impl PostProcessor {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostProcessor::ErrorHandler => "error_handler",
            PostProcessor::PrepareRestart => "prepare_restart",
            PostProcessor::RemoveNonZeroWeightKpoints => "remove_non_zero_weight_kpoints",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            PostProcessor::ErrorHandler,
            PostProcessor::PrepareRestart,
            PostProcessor::RemoveNonZeroWeightKpoints,
        ]
    }
}

impl std::fmt::Display for PostProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Published description of a monitor kind.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MonitorDescriptor {
    pub name: &'static str,
    pub summary: &'static str,
}

/// Published description of a post-processor kind.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PostProcessorDescriptor {
    pub name: &'static str,
    pub summary: &'static str,
}

/// Registry of monitor kinds keyed by their published key.
pub fn allowed_monitors() -> BTreeMap<&'static str, MonitorDescriptor> {
    Monitor::all()
        .into_iter()
        .map(|monitor| {
            let summary = match monitor {
                Monitor::StandardOutput => "Streams the standard output of the running process",
                Monitor::ConvergenceIonic => "Tracks ionic steps until forces converge",
                Monitor::ConvergenceElectronic => {
                    "Tracks self-consistent field iterations until energy converges"
                }
                Monitor::JupyterNotebookEndpoint => "Probes the notebook server endpoint",
            };
            (
                monitor.key(),
                MonitorDescriptor {
                    name: monitor.as_str(),
                    summary,
                },
            )
        })
        .collect()
}

/// Registry of post-processor kinds keyed by name.
pub fn allowed_post_processors() -> BTreeMap<&'static str, PostProcessorDescriptor> {
    PostProcessor::all()
        .into_iter()
        .map(|post_processor| {
            let summary = match post_processor {
                PostProcessor::ErrorHandler => "Classifies errors found in the output",
                PostProcessor::PrepareRestart => "Stages files needed to restart the calculation",
                PostProcessor::RemoveNonZeroWeightKpoints => {
                    "Drops k-points with non-zero weight from band output"
                }
            };
            (
                post_processor.as_str(),
                PostProcessorDescriptor {
                    name: post_processor.as_str(),
                    summary,
                },
            )
        })
        .collect()
}
