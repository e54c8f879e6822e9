//! Rule editor view.
//!
//! # Design
//! - Form state lives in a local reducer hook; every control maps to one `RuleAction`.
//! - Notifications go through the shared store so the toast host stays decoupled.
//! - Invalid control values are logged and dropped, never surfaced.

use crate::components::atoms::IconButton;
use crate::components::atoms::icons::{IconPlus, IconX};
use crate::components::daisy::{
    Badge, Button, Card, Checkbox, DaisyColor, DaisySize, DaisyVariant, Input, Select,
};
use crate::core::rule::{ApprovalRule, Approver, Manager};
use crate::core::store::{app_dispatch, push_toast};
use crate::features::rules::actions::RuleAction;
use crate::features::rules::logic::{
    format_percentage, is_submit_key, notice_for, parse_percentage, required_summary,
};
use crate::features::rules::state::RuleFormState;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use gloo::console;
use yew::prelude::*;

#[function_component(RuleEditor)]
pub(crate) fn rule_editor() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let form = use_reducer(RuleFormState::default);

    let on_action = {
        let form = form.clone();
        let bundle = bundle.clone();
        let dispatch = app_dispatch();
        Callback::from(move |action: RuleAction| {
            // Save leaves the rule as is and Reset ignores it, so the rendered rule is current.
            if let Some(notice) = notice_for(&bundle, &action, &form.rule) {
                log_confirmed(&action, &form.rule);
                dispatch.reduce_mut(move |store| {
                    push_toast(&mut store.toasts, notice);
                });
            }
            form.dispatch(action);
        })
    };
    let emit = |action: RuleAction| {
        let on_action = on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(action.clone()))
    };

    let on_user_input = on_action.reform(RuleAction::SetUserName);
    let on_manager_change = {
        let on_action = on_action.clone();
        Callback::from(move |value: AttrValue| match value.parse::<Manager>() {
            Ok(manager) => on_action.emit(RuleAction::SetManager(manager)),
            Err(err) => console::error!("manager select rejected", err.to_string()),
        })
    };
    let on_manager_approver = on_action.reform(RuleAction::SetManagerApprover);
    let on_sequence = on_action.reform(RuleAction::SetApprovalSequence);
    let on_percentage_input =
        on_action.reform(|raw: String| RuleAction::SetMinApprovalPercentage(parse_percentage(&raw)));
    let on_draft_input = on_action.reform(RuleAction::SetDraftApprover);
    let on_draft_key = {
        let on_action = on_action.clone();
        Callback::from(move |key: String| {
            if is_submit_key(&key) {
                on_action.emit(RuleAction::AddApprover);
            }
        })
    };

    let rule = &form.rule;
    let manager_options: Vec<(AttrValue, AttrValue)> = Manager::all()
        .into_iter()
        .map(|manager| (AttrValue::from(manager.as_str()), AttrValue::from(manager.as_str())))
        .collect();
    let remove_label = t("rules.remove");
    let required_label = t("rules.required");

    html! {
        <div class="space-y-6">
            <Card
                title={AttrValue::from(t("rules.assignment_title"))}
                subtitle={AttrValue::from(t("rules.assignment_body"))}
            >
                <div class="space-y-4">
                    <label class="form-control w-full" for="user">
                        <span class="label-text mb-2">{t("rules.user")}</span>
                        <Input
                            id="user"
                            placeholder={AttrValue::from(t("rules.user_placeholder"))}
                            value={AttrValue::from(rule.user_name.clone())}
                            oninput={on_user_input}
                        />
                    </label>
                    <label class="form-control w-full" for="manager">
                        <span class="label-text mb-2">{t("rules.manager")}</span>
                        <Select
                            id="manager"
                            options={manager_options}
                            value={AttrValue::from(rule.manager.as_str())}
                            placeholder={AttrValue::from(t("rules.manager_placeholder"))}
                            onchange={on_manager_change}
                        />
                    </label>
                </div>
            </Card>

            <Card
                title={AttrValue::from(t("rules.approval_title"))}
                subtitle={AttrValue::from(t("rules.approval_body"))}
            >
                <div class="space-y-6">
                    <Checkbox
                        id="manager-approver"
                        checked={rule.is_manager_approver}
                        onchange={on_manager_approver}
                    >
                        {t("rules.manager_approver")}
                    </Checkbox>

                    <div class="space-y-3">
                        <div class="flex items-center justify-between">
                            <span class="label-text font-medium">{t("rules.approvers")}</span>
                            <span class="text-xs opacity-70">{required_summary(&bundle, rule)}</span>
                        </div>
                        <div class="space-y-2">
                            {for rule.approvers.iter().map(|approver| {
                                approver_row(approver, &on_action, &required_label, &remove_label)
                            })}
                        </div>
                        <div class="flex gap-2">
                            <Input
                                class="flex-1"
                                placeholder={AttrValue::from(t("rules.add_placeholder"))}
                                value={AttrValue::from(form.new_approver_name.clone())}
                                oninput={on_draft_input}
                                onkeydown={on_draft_key}
                            />
                            <Button
                                tone={DaisyColor::Secondary}
                                size={DaisySize::Sm}
                                class="self-center"
                                onclick={emit(RuleAction::AddApprover)}
                            >
                                <IconPlus size="4" class="mr-1" />
                                {t("rules.add")}
                            </Button>
                        </div>
                    </div>

                    <Checkbox
                        id="approval-sequence"
                        checked={rule.approval_sequence}
                        onchange={on_sequence}
                    >
                        {t("rules.sequence")}
                    </Checkbox>

                    <label class="form-control" for="min-approval">
                        <span class="label-text mb-2">{t("rules.min_percentage")}</span>
                        <div class="flex items-center gap-3">
                            <Input
                                id="min-approval"
                                input_type="number"
                                min="0"
                                max="100"
                                class="w-24"
                                value={AttrValue::from(format_percentage(rule.min_approval_percentage))}
                                oninput={on_percentage_input}
                            />
                            <span class="text-sm opacity-70">{"%"}</span>
                        </div>
                    </label>
                </div>
            </Card>

            <div class="flex justify-end gap-3">
                <Button variant={DaisyVariant::Outline} onclick={emit(RuleAction::Reset)}>
                    {t("rules.reset")}
                </Button>
                <Button tone={DaisyColor::Primary} onclick={emit(RuleAction::Save)}>
                    {t("rules.save")}
                </Button>
            </div>
        </div>
    }
}

fn approver_row(
    approver: &Approver,
    on_action: &Callback<RuleAction>,
    required_label: &str,
    remove_label: &str,
) -> Html {
    let id = approver.id;
    let key = approver.id.as_key();
    let on_toggle = {
        let on_action = on_action.clone();
        Callback::from(move |_: bool| on_action.emit(RuleAction::ToggleRequired(id)))
    };
    let on_remove = {
        let on_action = on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(RuleAction::RemoveApprover(id)))
    };

    html! {
        <div
            key={key.clone()}
            class="flex items-center justify-between rounded-lg border border-base-300 bg-base-200/40 p-3"
        >
            <div class="flex items-center gap-3">
                <Checkbox id={format!("required-{key}")} checked={approver.required} onchange={on_toggle}>
                    {approver.name.clone()}
                </Checkbox>
                {approver.required.then(|| html! {
                    <Badge tone={DaisyColor::Primary} size={DaisySize::Sm}>{required_label.to_string()}</Badge>
                }).unwrap_or_default()}
            </div>
            <IconButton
                aria_label={AttrValue::from(remove_label.to_string())}
                class="opacity-70 hover:text-error"
                onclick={on_remove}
            >
                <IconX size="4" />
            </IconButton>
        </div>
    }
}

fn log_confirmed(action: &RuleAction, rule: &ApprovalRule) {
    match action {
        RuleAction::Save => match serde_json::to_string(rule) {
            Ok(snapshot) => console::log!("approval rule saved", snapshot),
            Err(err) => console::error!("approval rule snapshot failed", err.to_string()),
        },
        RuleAction::Reset => console::log!("approval rule reset"),
        _ => {}
    }
}
