//! Approval rule model.
//!
//! # Design
//! - Plain data only; mutation helpers live in the rules feature state.
//! - Approver identifiers are random UUIDs so rapid additions cannot collide.
//! - The minimum percentage is stored exactly as entered, without clamping.

use crate::core::error::RuleInputError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Default minimum approval percentage.
pub const DEFAULT_MIN_APPROVAL_PERCENTAGE: f64 = 50.0;

/// Names of the approvers seeded into a fresh rule.
pub const SEEDED_APPROVERS: [&str; 2] = ["John Doe", "Jane Smith"];

/// Managers offered by the manager select.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Manager {
    /// Sarah.
    #[default]
    Sarah,
    /// Michael.
    Michael,
    /// Jennifer.
    Jennifer,
    /// David.
    David,
}

impl Manager {
    /// All managers in display order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Sarah, Self::Michael, Self::Jennifer, Self::David]
    }

    /// Value used by the select control and shown to the user.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sarah => "Sarah",
            Self::Michael => "Michael",
            Self::Jennifer => "Jennifer",
            Self::David => "David",
        }
    }
}

impl fmt::Display for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Manager {
    type Err = RuleInputError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|manager| manager.as_str() == value)
            .ok_or_else(|| RuleInputError::UnknownManager {
                value: value.to_string(),
            })
    }
}

/// Identifier for an approver row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ApproverId(Uuid);

impl ApproverId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Fixed identifier used for seeded approvers.
    #[must_use]
    pub const fn seeded(index: u128) -> Self {
        Self(Uuid::from_u128(index))
    }

    /// Stable string form for DOM ids and keys.
    #[must_use]
    pub fn as_key(&self) -> String {
        self.0.simple().to_string()
    }
}

/// A named party who may approve a request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Approver {
    /// Row identifier.
    pub id: ApproverId,
    /// Display name, stored as typed.
    pub name: String,
    /// Whether this approver must sign off.
    pub required: bool,
}

impl Approver {
    /// Build an optional approver with a freshly generated id.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ApproverId::generate(),
            name: name.into(),
            required: false,
        }
    }
}

/// The approval rule being edited.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRule {
    /// User the rule applies to.
    pub user_name: String,
    /// Assigned manager.
    pub manager: Manager,
    /// Whether the manager also approves.
    pub is_manager_approver: bool,
    /// Sequential (true) or parallel (false) approval.
    pub approval_sequence: bool,
    /// Minimum approval percentage; may be out of range or NaN.
    pub min_approval_percentage: f64,
    /// Approvers in insertion order.
    pub approvers: Vec<Approver>,
}

impl Default for ApprovalRule {
    fn default() -> Self {
        Self {
            user_name: String::new(),
            manager: Manager::default(),
            is_manager_approver: false,
            approval_sequence: false,
            min_approval_percentage: DEFAULT_MIN_APPROVAL_PERCENTAGE,
            approvers: seeded_approvers(),
        }
    }
}

impl ApprovalRule {
    /// Number of approvers flagged as required.
    #[must_use]
    pub fn required_count(&self) -> usize {
        self.approvers
            .iter()
            .filter(|approver| approver.required)
            .count()
    }

    /// Look up an approver by id.
    #[must_use]
    pub fn approver(&self, id: ApproverId) -> Option<&Approver> {
        self.approvers.iter().find(|approver| approver.id == id)
    }
}

/// The two approvers every fresh or reset rule starts with.
#[must_use]
pub fn seeded_approvers() -> Vec<Approver> {
    SEEDED_APPROVERS
        .iter()
        .zip(1u128..)
        .map(|(name, index)| Approver {
            id: ApproverId::seeded(index),
            name: (*name).to_string(),
            required: false,
        })
        .collect()
}
