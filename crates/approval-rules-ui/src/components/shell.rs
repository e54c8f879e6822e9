//! Page chrome: branded header plus a single content mount.
//!
//! # Design
//! - Stateless; copy comes from the translation bundle in context.

use crate::components::atoms::icons::IconShield;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PageShellProps {
    pub(crate) children: Children,
}

#[function_component(PageShell)]
pub(crate) fn page_shell(props: &PageShellProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));

    html! {
        <div class="min-h-screen bg-base-200">
            <header class="border-b border-base-300 bg-base-100 shadow-sm">
                <div class="container mx-auto px-4 py-6">
                    <div class="flex items-center gap-3">
                        <div class="rounded-lg bg-gradient-to-br from-primary to-accent p-2">
                            <IconShield class="text-primary-content" size="6" />
                        </div>
                        <div>
                            <h1 class="text-2xl font-bold">{bundle.text("shell.title", "Approval Rules")}</h1>
                            <p class="text-sm opacity-70">
                                {bundle.text("shell.subtitle", "")}
                            </p>
                        </div>
                    </div>
                </div>
            </header>
            <main class="container mx-auto max-w-3xl px-4 py-8">
                {for props.children.iter()}
            </main>
        </div>
    }
}
