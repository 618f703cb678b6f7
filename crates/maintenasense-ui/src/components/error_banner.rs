//! Dismissable banner for form validation errors.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ErrorBannerProps {
    pub message: Option<String>,
    pub on_dismiss: Callback<()>,
}

/// Floating banner for form validation errors.
#[function_component(ErrorBanner)]
pub(crate) fn error_banner(props: &ErrorBannerProps) -> Html {
    let Some(message) = props.message.clone() else {
        return html! {};
    };
    let on_dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(()))
    };
    html! {
        <div class="error-banner" role="alert">
            <span>{message}</span>
            <button class="ghost" onclick={on_dismiss} aria-label="Dismiss">{"✕"}</button>
        </div>
    }
}
