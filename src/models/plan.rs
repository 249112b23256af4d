//! Plan snapshot document
//!
//! A snapshot bundles one budgeting period's roster, incomes, planned
//! expenses, and envelopes into a single JSON document. It is the input the
//! CLI feeds to the settlement engine; splitbook holds no database of its
//! own, the snapshot *is* the already-loaded collections.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::envelope::Envelope;
use super::expense::PlannedExpense;
use super::ids::{PlanId, UserId};
use super::income::Income;
use super::member::Member;
use super::period::PlanPeriod;
use crate::error::{SplitbookError, SplitbookResult};

/// Current snapshot schema version
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SNAPSHOT_SCHEMA_VERSION
}

/// One plan's data, ready for settlement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSnapshot {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Plan identifier; generated if the document omits it
    #[serde(default)]
    pub id: PlanId,

    /// Household / plan display name
    #[serde(default)]
    pub name: String,

    /// The budgeting period this plan covers
    pub period: PlanPeriod,

    /// Authoritative roster: exactly these members appear in the settlement
    pub members: Vec<Member>,

    #[serde(default)]
    pub incomes: Vec<Income>,

    #[serde(default)]
    pub expenses: Vec<PlannedExpense>,

    #[serde(default)]
    pub envelopes: Vec<Envelope>,
}

impl PlanSnapshot {
    /// Create an empty snapshot for a period
    pub fn new(name: impl Into<String>, period: PlanPeriod, members: Vec<Member>) -> Self {
        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            id: PlanId::new(),
            name: name.into(),
            period,
            members,
            incomes: Vec::new(),
            expenses: Vec::new(),
            envelopes: Vec::new(),
        }
    }

    /// The roster as a plain id list, in roster order
    pub fn member_ids(&self) -> Vec<UserId> {
        self.members.iter().map(|m| m.id).collect()
    }

    /// Display names keyed by member id
    pub fn member_names(&self) -> HashMap<UserId, String> {
        self.members
            .iter()
            .map(|m| (m.id, m.name.clone()))
            .collect()
    }

    /// Read a snapshot from any JSON reader
    pub fn from_reader<R: Read>(reader: R) -> SplitbookResult<Self> {
        let snapshot: Self = serde_json::from_reader(reader)
            .map_err(|e| SplitbookError::Snapshot(e.to_string()))?;
        Ok(snapshot)
    }

    /// Load a snapshot from a JSON file
    pub fn from_path(path: &Path) -> SplitbookResult<Self> {
        let file = File::open(path).map_err(|e| {
            SplitbookError::Snapshot(format!("cannot open {}: {}", path.display(), e))
        })?;
        Self::from_reader(BufReader::new(file))
    }
}
