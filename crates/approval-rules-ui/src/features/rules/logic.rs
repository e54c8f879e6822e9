//! Rule editor conversion and notification helpers.
//!
//! # Design
//! - Convert raw control text the same way a browser `Number()` cast does.
//! - Build toast copy from translation bundles, never from literals in views.

use crate::core::rule::ApprovalRule;
use crate::features::rules::actions::RuleAction;
use crate::i18n::TranslationBundle;
use crate::models::{Notice, ToastKind};

/// Convert numeric input text into a percentage.
///
/// Blank text becomes `0`, unparsable text becomes NaN. No range checks.
#[must_use]
pub fn parse_percentage(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Render a stored percentage back into the numeric input.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else {
        String::new()
    }
}

/// Key that submits the draft approver input.
#[must_use]
pub fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}

/// Confirmation shown after save; mentions the user name even when empty.
#[must_use]
pub fn saved_notice(bundle: &TranslationBundle, user_name: &str) -> Notice {
    Notice {
        title: bundle.text("rules.toast.saved_title", "Approval Rule Saved"),
        description: bundle
            .text(
                "rules.toast.saved_body",
                "Rule for {user} has been successfully saved.",
            )
            .replace("{user}", user_name),
        kind: ToastKind::Success,
    }
}

/// Confirmation shown after reset.
#[must_use]
pub fn reset_notice(bundle: &TranslationBundle) -> Notice {
    Notice {
        title: bundle.text("rules.toast.reset_title", "Form Reset"),
        description: bundle.text("rules.toast.reset_body", "All fields have been cleared."),
        kind: ToastKind::Info,
    }
}

/// Notification raised by an action, if any. Only save and reset notify.
///
/// `rule` is the state after the action was applied.
#[must_use]
pub fn notice_for(
    bundle: &TranslationBundle,
    action: &RuleAction,
    rule: &ApprovalRule,
) -> Option<Notice> {
    match action {
        RuleAction::Save => Some(saved_notice(bundle, &rule.user_name)),
        RuleAction::Reset => Some(reset_notice(bundle)),
        _ => None,
    }
}

/// "N of M required" summary for the approvers heading.
#[must_use]
pub fn required_summary(bundle: &TranslationBundle, rule: &ApprovalRule) -> String {
    bundle
        .text("rules.required_summary", "{count} of {total} required")
        .replace("{count}", &rule.required_count().to_string())
        .replace("{total}", &rule.approvers.len().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::rules::state::RuleFormState;
    use crate::i18n::LocaleCode;

    fn en() -> TranslationBundle {
        TranslationBundle::new(LocaleCode::En)
    }

    #[test]
    fn percentage_parsing_mirrors_number_cast() {
        assert!(parse_percentage("").abs() < f64::EPSILON);
        assert!(parse_percentage("   ").abs() < f64::EPSILON);
        assert!((parse_percentage(" 75 ") - 75.0).abs() < f64::EPSILON);
        assert!((parse_percentage("150") - 150.0).abs() < f64::EPSILON);
        assert!((parse_percentage("-5") + 5.0).abs() < f64::EPSILON);
        assert!(parse_percentage("abc").is_nan());
    }

    #[test]
    fn percentage_formatting_drops_non_finite() {
        assert_eq!(format_percentage(50.0), "50");
        assert_eq!(format_percentage(12.5), "12.5");
        assert_eq!(format_percentage(f64::NAN), "");
    }

    #[test]
    fn only_enter_submits() {
        assert!(is_submit_key("Enter"));
        assert!(!is_submit_key("Tab"));
    }

    #[test]
    fn save_notice_mentions_user_name() {
        let notice = saved_notice(&en(), "marc");
        assert_eq!(notice.title, "Approval Rule Saved");
        assert_eq!(notice.description, "Rule for marc has been successfully saved.");
        assert_eq!(notice.kind, ToastKind::Success);
    }

    #[test]
    fn save_with_empty_user_still_notifies() {
        let notice = notice_for(&en(), &RuleAction::Save, &ApprovalRule::default())
            .expect("save notifies");
        assert_eq!(notice.description, "Rule for  has been successfully saved.");
    }

    #[test]
    fn reset_notice_uses_reset_copy() {
        let notice = notice_for(&en(), &RuleAction::Reset, &ApprovalRule::default())
            .expect("reset notifies");
        assert_eq!(notice.title, "Form Reset");
        assert_eq!(notice.description, "All fields have been cleared.");
    }

    #[test]
    fn field_edits_do_not_notify() {
        let rule = ApprovalRule::default();
        assert!(notice_for(&en(), &RuleAction::ToggleApprovalSequence, &rule).is_none());
        assert!(notice_for(&en(), &RuleAction::AddApprover, &rule).is_none());
    }

    #[test]
    fn required_summary_counts_flags() {
        let mut rule = ApprovalRule::default();
        rule.approvers[0].required = true;
        assert_eq!(required_summary(&en(), &rule), "1 of 2 required");
    }

    #[test]
    fn editing_scenario_end_to_end() {
        let bundle = en();
        let start = RuleFormState::default()
            .apply(&RuleAction::SetUserName("marc".into()))
            .apply(&RuleAction::SetDraftApprover("Alice".into()))
            .apply(&RuleAction::AddApprover);
        assert_eq!(start.rule.approvers.len(), 3);
        let alice = start.rule.approvers[2].clone();
        assert_eq!(alice.name, "Alice");
        assert!(!alice.required);

        let toggled = start.apply(&RuleAction::ToggleRequired(alice.id));
        assert!(toggled.rule.approver(alice.id).expect("alice").required);
        assert_eq!(toggled.rule.required_count(), 1);

        let john = toggled.rule.approvers[0].id;
        let removed = toggled.apply(&RuleAction::RemoveApprover(john));
        assert_eq!(removed.rule.approvers.len(), 2);
        assert!(removed.rule.approvers.iter().all(|a| a.name != "John Doe"));

        let saved = removed.apply(&RuleAction::Save);
        let notice = notice_for(&bundle, &RuleAction::Save, &saved.rule).expect("notice");
        assert!(notice.description.contains("marc"));
    }
}
