//! Chart mount points.

use crate::features::charts::spec::ChartTarget;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ChartCanvasProps {
    pub target: ChartTarget,
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Empty canvas the lifecycle manager draws into after the slide renders.
#[function_component(ChartCanvas)]
pub(crate) fn chart_canvas(props: &ChartCanvasProps) -> Html {
    html! {
        <div class={classes!("chart-frame", props.class.clone())}>
            <canvas
                id={props.target.canvas_id()}
                role="img"
                aria-label={props.label.clone()}
            />
        </div>
    }
}
