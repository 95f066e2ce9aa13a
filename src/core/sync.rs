//! List synchronization.
//!
//! The destination is always read fresh. Additions are applied in one append
//! call; removals only with `force`, one delete call per element. A failure
//! part-way leaves whatever already succeeded in place.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::core::api::{DetailOptions, NetworkListApi};
use crate::error::{NetlistError, Result};

/// Ordered element set, so plans and reports are deterministic.
pub type ElementSet = BTreeSet<String>;

/// Where the desired contents come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncSource {
    /// Another network list.
    List(String),
    /// A local file, one element per line.
    File(String),
}

impl fmt::Display for SyncSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(id) => write!(f, "list {id}"),
            Self::File(path) => write!(f, "file {path}"),
        }
    }
}

/// Differences between a source and a destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncPlan {
    /// In the source, missing from the destination.
    pub additions: ElementSet,
    /// In the destination, missing from the source.
    pub removals: ElementSet,
}

impl SyncPlan {
    /// `additions = source - destination`, `removals = destination - source`.
    #[must_use]
    pub fn compute(source: &ElementSet, destination: &ElementSet) -> Self {
        Self {
            additions: source.difference(destination).cloned().collect(),
            removals: destination.difference(source).cloned().collect(),
        }
    }

    /// Nothing to write.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.additions.is_empty() && self.removals.is_empty()
    }
}

/// Outcome of a sync run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub source: String,
    pub destination: String,
    pub additions: Vec<String>,
    pub removals: Vec<String>,
    /// Whether the removals were executed or only reported.
    pub removals_applied: bool,
}

impl SyncReport {
    /// Removals that were found but left in place.
    #[must_use]
    pub fn pending_removals(&self) -> &[String] {
        if self.removals_applied {
            &[]
        } else {
            &self.removals
        }
    }
}

/// Parse element file content: one element per line, blank lines and `#`
/// comments skipped, surrounding whitespace trimmed.
#[must_use]
pub fn parse_elements(content: &str) -> ElementSet {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Read an element file.
///
/// # Errors
///
/// Returns [`NetlistError::InvalidInput`] if the file cannot be read.
pub fn read_elements_file(path: &Path) -> Result<ElementSet> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        NetlistError::InvalidInput(format!("cannot read {}: {e}", path.display()))
    })?;
    let elements = parse_elements(&content);
    tracing::debug!(path = %path.display(), count = elements.len(), "Read element file");
    Ok(elements)
}

/// Fetch a list's current elements.
///
/// # Errors
///
/// Propagates the API error.
pub async fn fetch_elements<A: NetworkListApi>(api: &A, id: &str) -> Result<ElementSet> {
    let list = api.get_network_list(id, DetailOptions::ELEMENTS).await?;
    Ok(list.elements().iter().cloned().collect())
}

/// Reconcile `destination_id` to `source_elements`.
///
/// # Errors
///
/// Aborts on the first API error; earlier writes are not rolled back.
pub async fn sync_elements<A: NetworkListApi>(
    api: &A,
    source: &SyncSource,
    source_elements: &ElementSet,
    destination_id: &str,
    force: bool,
) -> Result<SyncReport> {
    let current = fetch_elements(api, destination_id).await?;
    let plan = SyncPlan::compute(source_elements, &current);

    tracing::info!(
        %source,
        destination = destination_id,
        additions = plan.additions.len(),
        removals = plan.removals.len(),
        force,
        "Computed sync plan"
    );

    apply(api, source, destination_id, plan, force).await
}

/// Reconcile `destination_id` to the contents of list `source_id`.
///
/// # Errors
///
/// Aborts on the first API error.
pub async fn sync_from_list<A: NetworkListApi>(
    api: &A,
    source_id: &str,
    destination_id: &str,
    force: bool,
) -> Result<SyncReport> {
    let source_elements = fetch_elements(api, source_id).await?;
    let source = SyncSource::List(source_id.to_string());
    sync_elements(api, &source, &source_elements, destination_id, force).await
}

/// Reconcile `destination_id` to the contents of a local file.
///
/// # Errors
///
/// Fails if the file cannot be read, or on the first API error.
pub async fn sync_from_file<A: NetworkListApi>(
    api: &A,
    path: &Path,
    destination_id: &str,
    force: bool,
) -> Result<SyncReport> {
    let source_elements = read_elements_file(path)?;
    let source = SyncSource::File(path.display().to_string());
    sync_elements(api, &source, &source_elements, destination_id, force).await
}

async fn apply<A: NetworkListApi>(
    api: &A,
    source: &SyncSource,
    destination_id: &str,
    plan: SyncPlan,
    force: bool,
) -> Result<SyncReport> {
    let additions: Vec<String> = plan.additions.into_iter().collect();
    let removals: Vec<String> = plan.removals.into_iter().collect();

    if !additions.is_empty() {
        api.append_elements(destination_id, &additions).await?;
    }

    let removals_applied = force && !removals.is_empty();
    if removals_applied {
        for element in &removals {
            api.remove_element(destination_id, element).await?;
        }
    } else if !removals.is_empty() {
        tracing::warn!(
            count = removals.len(),
            "Removals skipped; pass --force to remove them"
        );
    }

    Ok(SyncReport {
        source: source.to_string(),
        destination: destination_id.to_string(),
        additions,
        removals,
        removals_applied,
    })
}
