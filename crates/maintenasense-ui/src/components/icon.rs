//! Iconify lucide icons.

use crate::features::slides::catalog::SlideIcon;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct IconProps {
    pub icon: SlideIcon,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub color: Option<&'static str>,
}

#[function_component(LucideIcon)]
pub(crate) fn lucide_icon(props: &IconProps) -> Html {
    let style = props.color.map(|color| format!("color: {color}"));
    html! {
        <span
            class={classes!("iconify", props.icon.icon_tag(), props.class.clone())}
            style={style}
            aria-hidden="true"
        />
    }
}
