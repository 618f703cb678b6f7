//! Deck root component and wasm entrypoint.

use crate::components::error_banner::ErrorBanner;
use crate::components::shell::DeckShell;
use crate::core::store::{DeckStore, active_slide, dismiss_error, navigate};
use crate::features::charts::canvas::CanvasBackend;
use crate::features::charts::datasets::DatasetFactory;
use crate::features::charts::lifecycle::ChartLifecycle;
use crate::features::slides::catalog::descriptor_at;
use crate::features::slides::navigation::{NavAction, NavigationError};
use crate::features::slides::view::SlideView;
use gloo::console;
use yew::prelude::*;
use yewdux::prelude::use_store;

mod config;

#[function_component(DeckApp)]
pub(crate) fn deck_app() -> Html {
    let config = use_memo(|_| config::load_deck_config(), ());
    let (store, dispatch) = use_store::<DeckStore>();
    let charts = {
        let chart_config = config.charts;
        use_mut_ref(move || {
            ChartLifecycle::new(
                CanvasBackend,
                DatasetFactory::seeded(entropy_seed(), chart_config),
            )
        })
    };

    {
        let charts = charts.clone();
        use_effect_with_deps(
            move |active: &usize| {
                if let Some(slide) = descriptor_at(*active) {
                    console::log!("slide active", slide.id.as_str(), *active);
                    let report = charts.borrow_mut().activate(slide.id);
                    if !report.mounted.is_empty() {
                        console::debug!(
                            "charts mounted",
                            report.mounted.len(),
                            "released",
                            report.released
                        );
                    }
                    for (target, err) in &report.failed {
                        console::error!("chart mount failed", target.canvas_id(), err.to_string());
                    }
                }
                move || {
                    let released = charts.borrow_mut().teardown();
                    if released > 0 {
                        console::debug!("charts released", released);
                    }
                }
            },
            store.navigation.active(),
        );
    }

    let on_action = {
        let dispatch = dispatch.clone();
        Callback::from(move |action: NavAction| {
            let mut outcome: Result<(), NavigationError> = Ok(());
            dispatch.reduce_mut(|store| outcome = navigate(store, action));
            if let Err(err) = outcome {
                console::warn!("navigation rejected", err.to_string());
            }
        })
    };
    let on_dismiss = Callback::from(move |()| dispatch.reduce_mut(dismiss_error));

    let slide = active_slide(&store);
    let position_label = slide
        .map(|slide| store.navigation.position_label(slide.title))
        .unwrap_or_default();
    let slide_id = slide.map_or("", |slide| slide.id.as_str());

    html! {
        <>
            <DeckShell
                actions={store.navigation.available_actions()}
                {on_action}
                {position_label}
            >
                <SlideView id={slide_id} config={config.clone()} />
            </DeckShell>
            <ErrorBanner message={store.error_message.clone()} {on_dismiss} />
        </>
    }
}

/// Seed for the scatter generator; any value is acceptable.
fn entropy_seed() -> u64 {
    let mixed = js_sys::Math::random() * 9_007_199_254_740_992.0;
    // `mixed` is in [0, 2^53), which u64 holds exactly.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let seed = mixed as u64;
    seed ^ js_sys::Date::now().to_bits()
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<DeckApp>::with_root(root).render();
    } else {
        yew::Renderer::<DeckApp>::new().render();
    }
}
