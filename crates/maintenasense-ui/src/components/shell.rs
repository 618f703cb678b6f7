//! Deck header and footer around the active slide.

use crate::components::icon::LucideIcon;
use crate::core::theme::SEAFOAM;
use crate::features::slides::catalog::SlideIcon;
use crate::features::slides::navigation::NavAction;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    pub actions: Vec<NavAction>,
    pub on_action: Callback<NavAction>,
    pub position_label: String,
}

#[function_component(DeckShell)]
pub(crate) fn deck_shell(props: &ShellProps) -> Html {
    html! {
        <div class="deck-shell">
            <header class="deck-header">
                <h1 class="brand">
                    <LucideIcon icon={SlideIcon::Sparkles} class="size-10" color={Some(SEAFOAM)} />
                    {"MaintenaSense"}
                </h1>
                <nav class="deck-controls">
                    {for props.actions.iter().map(|action| nav_button(*action, &props.on_action))}
                </nav>
            </header>
            <main class="deck-stage">
                {for props.children.iter()}
            </main>
            <footer class="deck-footer">
                <p>{props.position_label.clone()}</p>
            </footer>
        </div>
    }
}

fn nav_button(action: NavAction, on_action: &Callback<NavAction>) -> Html {
    let onclick = {
        let on_action = on_action.clone();
        Callback::from(move |_| on_action.emit(action))
    };
    let class = match action {
        NavAction::Restart => classes!("nav-button", "primary"),
        NavAction::Next | NavAction::Previous => classes!("nav-button"),
    };
    html! {
        <button {class} {onclick}>{action.label()}</button>
    }
}
