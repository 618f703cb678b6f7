//! Active slide panel.

use crate::core::config::DeckConfig;
use crate::features::slides::catalog::SlideId;
use crate::features::slides::content;
use gloo::console;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SlideViewProps {
    /// Slide id as written in the catalog.
    pub id: AttrValue,
    pub config: Rc<DeckConfig>,
}

/// Render the slide named by `id`; an unknown id renders an empty panel.
#[function_component(SlideView)]
pub(crate) fn slide_view(props: &SlideViewProps) -> Html {
    match props.id.parse::<SlideId>() {
        Ok(id) => html! {
            <div key={id.as_str()} class="slide-frame fade-in">
                {content::render(id, &props.config)}
            </div>
        },
        Err(err) => {
            console::error!("slide render skipped", err.to_string());
            html! {}
        }
    }
}
