//! Rule editor form state and reducers.
//!
//! # Design
//! - One explicit state struct folded by `Reducible`; hooks only hold the current value.
//! - Each mutation is a plain function so it can be exercised without a DOM.
//! - No field validates against another: flags never reorder or filter approvers.

use crate::core::rule::{ApprovalRule, Approver, ApproverId, Manager};
use crate::features::rules::actions::RuleAction;
use std::rc::Rc;
use yew::functional::Reducible;

/// Editable rule plus the pending approver name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuleFormState {
    /// Rule being edited.
    pub rule: ApprovalRule,
    /// Text in the "add approver" input.
    pub new_approver_name: String,
}

impl RuleFormState {
    /// Fold an action into a new state, leaving `self` untouched.
    #[must_use]
    pub fn apply(&self, action: &RuleAction) -> Self {
        let mut next = self.clone();
        match action {
            RuleAction::SetUserName(name) => set_user_name(&mut next, name.clone()),
            RuleAction::SetManager(manager) => set_manager(&mut next, *manager),
            RuleAction::SetManagerApprover(value) => next.rule.is_manager_approver = *value,
            RuleAction::ToggleManagerApprover => toggle_manager_approver(&mut next),
            RuleAction::SetApprovalSequence(value) => next.rule.approval_sequence = *value,
            RuleAction::ToggleApprovalSequence => toggle_approval_sequence(&mut next),
            RuleAction::SetMinApprovalPercentage(value) => {
                set_min_approval_percentage(&mut next, *value);
            }
            RuleAction::SetDraftApprover(text) => next.new_approver_name.clone_from(text),
            RuleAction::AddApprover => {
                let name = next.new_approver_name.clone();
                add_approver(&mut next, &name);
            }
            RuleAction::RemoveApprover(id) => {
                remove_approver(&mut next, *id);
            }
            RuleAction::ToggleRequired(id) => {
                toggle_required(&mut next, *id);
            }
            RuleAction::Save => {}
            RuleAction::Reset => reset(&mut next),
        }
        next
    }
}

impl Reducible for RuleFormState {
    type Action = RuleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(&action))
    }
}

/// Append an approver named `name` and clear the draft.
///
/// Whitespace-only names are ignored and leave both the list and the draft
/// unchanged. The name is stored as typed; duplicates are allowed.
pub fn add_approver(state: &mut RuleFormState, name: &str) -> Option<ApproverId> {
    if name.trim().is_empty() {
        return None;
    }
    let approver = Approver::new(name);
    let id = approver.id;
    state.rule.approvers.push(approver);
    state.new_approver_name.clear();
    Some(id)
}

/// Remove the approver with `id`. Returns whether anything was removed.
pub fn remove_approver(state: &mut RuleFormState, id: ApproverId) -> bool {
    let before = state.rule.approvers.len();
    state.rule.approvers.retain(|approver| approver.id != id);
    state.rule.approvers.len() != before
}

/// Flip `required` on the approver with `id`. Returns whether it was found.
pub fn toggle_required(state: &mut RuleFormState, id: ApproverId) -> bool {
    let Some(approver) = state
        .rule
        .approvers
        .iter_mut()
        .find(|approver| approver.id == id)
    else {
        return false;
    };
    approver.required = !approver.required;
    true
}

/// Replace the user name.
pub fn set_user_name(state: &mut RuleFormState, name: String) {
    state.rule.user_name = name;
}

/// Replace the manager.
pub fn set_manager(state: &mut RuleFormState, manager: Manager) {
    state.rule.manager = manager;
}

/// Flip the manager-is-approver flag.
pub fn toggle_manager_approver(state: &mut RuleFormState) {
    state.rule.is_manager_approver = !state.rule.is_manager_approver;
}

/// Flip between sequential and parallel approval.
pub fn toggle_approval_sequence(state: &mut RuleFormState) {
    state.rule.approval_sequence = !state.rule.approval_sequence;
}

/// Store the percentage as given, including out-of-range values and NaN.
pub fn set_min_approval_percentage(state: &mut RuleFormState, value: f64) {
    state.rule.min_approval_percentage = value;
}

/// Restore defaults: empty user, Sarah, both flags off, 50%, seeded approvers, empty draft.
pub fn reset(state: &mut RuleFormState) {
    *state = RuleFormState::default();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(state: &RuleFormState) -> Vec<&str> {
        state
            .rule
            .approvers
            .iter()
            .map(|approver| approver.name.as_str())
            .collect()
    }

    fn id_of(state: &RuleFormState, name: &str) -> ApproverId {
        state
            .rule
            .approvers
            .iter()
            .find(|approver| approver.name == name)
            .map(|approver| approver.id)
            .expect("approver present")
    }

    #[test]
    fn add_appends_and_clears_draft() {
        let state = RuleFormState::default()
            .apply(&RuleAction::SetDraftApprover("Alice".to_string()))
            .apply(&RuleAction::AddApprover);
        assert_eq!(state.rule.approvers.len(), 3);
        let last = state.rule.approvers.last().expect("last approver");
        assert_eq!(last.name, "Alice");
        assert!(!last.required);
        assert!(state.new_approver_name.is_empty());
    }

    #[test]
    fn add_ignores_whitespace_names() {
        let drafted = RuleFormState::default().apply(&RuleAction::SetDraftApprover("   ".into()));
        let state = drafted.apply(&RuleAction::AddApprover);
        assert_eq!(state.rule.approvers.len(), 2);
        assert_eq!(state.new_approver_name, "   ");

        let mut direct = RuleFormState::default();
        assert_eq!(add_approver(&mut direct, ""), None);
        assert_eq!(direct, RuleFormState::default());
    }

    #[test]
    fn add_keeps_name_as_typed_and_allows_duplicates() {
        let mut state = RuleFormState::default();
        add_approver(&mut state, " John Doe ");
        add_approver(&mut state, "John Doe");
        assert_eq!(names(&state), vec!["John Doe", "Jane Smith", " John Doe ", "John Doe"]);
    }

    #[test]
    fn rapid_adds_receive_distinct_ids() {
        let mut state = RuleFormState::default();
        let first = add_approver(&mut state, "A").expect("added");
        let second = add_approver(&mut state, "B").expect("added");
        assert_ne!(first, second);
    }

    #[test]
    fn remove_drops_exactly_one_when_present() {
        let mut state = RuleFormState::default();
        let john = id_of(&state, "John Doe");
        assert!(remove_approver(&mut state, john));
        assert_eq!(names(&state), vec!["Jane Smith"]);
        assert!(!remove_approver(&mut state, john));
        assert_eq!(state.rule.approvers.len(), 1);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let state = RuleFormState::default();
        let next = state.apply(&RuleAction::RemoveApprover(ApproverId::generate()));
        assert_eq!(next, state);
    }

    #[test]
    fn toggle_required_flips_only_target() {
        let state = RuleFormState::default();
        let jane = id_of(&state, "Jane Smith");
        let next = state.apply(&RuleAction::ToggleRequired(jane));
        assert!(next.rule.approver(jane).expect("jane").required);
        assert!(!next.rule.approvers[0].required);
        let back = next.apply(&RuleAction::ToggleRequired(jane));
        assert!(!back.rule.approver(jane).expect("jane").required);
    }

    #[test]
    fn toggle_required_unknown_id_is_noop() {
        let mut state = RuleFormState::default();
        assert!(!toggle_required(&mut state, ApproverId::generate()));
        assert_eq!(state, RuleFormState::default());
    }

    #[test]
    fn field_setters_replace_values() {
        let state = RuleFormState::default()
            .apply(&RuleAction::SetUserName("marc".into()))
            .apply(&RuleAction::SetManager(Manager::Jennifer))
            .apply(&RuleAction::ToggleManagerApprover)
            .apply(&RuleAction::SetApprovalSequence(true));
        assert_eq!(state.rule.user_name, "marc");
        assert_eq!(state.rule.manager, Manager::Jennifer);
        assert!(state.rule.is_manager_approver);
        assert!(state.rule.approval_sequence);
        let flipped = state
            .apply(&RuleAction::ToggleApprovalSequence)
            .apply(&RuleAction::SetManagerApprover(false));
        assert!(!flipped.rule.approval_sequence);
        assert!(!flipped.rule.is_manager_approver);
    }

    #[test]
    fn sequence_toggle_does_not_reorder_approvers() {
        let mut state = RuleFormState::default();
        add_approver(&mut state, "Zed");
        let before = names(&state).join(",");
        let next = state.apply(&RuleAction::ToggleApprovalSequence);
        assert_eq!(names(&next).join(","), before);
    }

    #[test]
    fn percentage_is_stored_without_clamping() {
        let high = RuleFormState::default().apply(&RuleAction::SetMinApprovalPercentage(150.0));
        assert!((high.rule.min_approval_percentage - 150.0).abs() < f64::EPSILON);
        let low = high.apply(&RuleAction::SetMinApprovalPercentage(-5.0));
        assert!((low.rule.min_approval_percentage + 5.0).abs() < f64::EPSILON);
        let nan = low.apply(&RuleAction::SetMinApprovalPercentage(f64::NAN));
        assert!(nan.rule.min_approval_percentage.is_nan());
    }

    #[test]
    fn reset_restores_defaults_from_any_state() {
        let mut state = RuleFormState::default()
            .apply(&RuleAction::SetUserName("marc".into()))
            .apply(&RuleAction::SetManager(Manager::David))
            .apply(&RuleAction::ToggleManagerApprover)
            .apply(&RuleAction::ToggleApprovalSequence)
            .apply(&RuleAction::SetMinApprovalPercentage(90.0))
            .apply(&RuleAction::SetDraftApprover("pending".into()));
        let john = id_of(&state, "John Doe");
        toggle_required(&mut state, john);
        add_approver(&mut state, "Extra");

        let reset = state.apply(&RuleAction::Reset);
        assert!(reset.rule.user_name.is_empty());
        assert_eq!(reset.rule.manager, Manager::Sarah);
        assert!(!reset.rule.is_manager_approver);
        assert!(!reset.rule.approval_sequence);
        assert!((reset.rule.min_approval_percentage - 50.0).abs() < f64::EPSILON);
        assert_eq!(names(&reset), vec!["John Doe", "Jane Smith"]);
        assert!(reset.rule.approvers.iter().all(|approver| !approver.required));
        assert!(reset.new_approver_name.is_empty());
        assert_eq!(reset, RuleFormState::default());
    }

    #[test]
    fn save_leaves_state_unchanged() {
        let state = RuleFormState::default().apply(&RuleAction::SetUserName("marc".into()));
        assert_eq!(state.apply(&RuleAction::Save), state);
    }

    #[test]
    fn apply_does_not_mutate_input() {
        let state = RuleFormState::default();
        let _ = state.apply(&RuleAction::SetUserName("changed".into()));
        assert!(state.rule.user_name.is_empty());
    }

    #[test]
    fn reducer_folds_queued_actions_in_order() {
        let state = Rc::new(RuleFormState::default())
            .reduce(RuleAction::SetDraftApprover("Alice".into()))
            .reduce(RuleAction::AddApprover)
            .reduce(RuleAction::SetDraftApprover("Bob".into()))
            .reduce(RuleAction::AddApprover)
            .reduce(RuleAction::SetUserName("marc".into()));
        assert_eq!(names(&state), vec!["John Doe", "Jane Smith", "Alice", "Bob"]);
        assert!(state.new_approver_name.is_empty());
        assert_eq!(state.rule.user_name, "marc");
    }
}
