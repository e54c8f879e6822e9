//! Rule editor actions.
//!
//! # Design
//! - Capture user intent separate from rendering.
//! - Actions are UI-only and never perform side effects.

use crate::core::rule::{ApproverId, Manager};

/// Every mutation the rule editor can request.
#[derive(Clone, Debug, PartialEq)]
pub enum RuleAction {
    /// Replace the user name.
    SetUserName(String),
    /// Replace the manager.
    SetManager(Manager),
    /// Set the manager-is-approver flag.
    SetManagerApprover(bool),
    /// Flip the manager-is-approver flag.
    ToggleManagerApprover,
    /// Set sequential (true) or parallel (false) approval.
    SetApprovalSequence(bool),
    /// Flip the approval sequence flag.
    ToggleApprovalSequence,
    /// Replace the minimum approval percentage verbatim.
    SetMinApprovalPercentage(f64),
    /// Replace the draft approver name.
    SetDraftApprover(String),
    /// Submit the draft approver name.
    AddApprover,
    /// Remove the approver with this id.
    RemoveApprover(ApproverId),
    /// Flip the required flag of the approver with this id.
    ToggleRequired(ApproverId),
    /// Confirm the rule; state is unchanged.
    Save,
    /// Restore every field to its default.
    Reset,
}
