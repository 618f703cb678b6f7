//! Live prediction demo form and result card.

use crate::core::config::PredictionConfig;
use crate::core::store::{
    DeckStore, begin_submission, cancel_submission, complete_submission, deck_dispatch, set_field,
};
use crate::features::prediction::form::SensorField;
use crate::features::prediction::rule::{PredictionLabel, PredictionResult, ThresholdRule};
use crate::features::prediction::state::CompletionOutcome;
use crate::features::prediction::task::DeferredPrediction;
use gloo::console;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_store};

#[derive(Properties, PartialEq)]
pub(crate) struct PredictionPanelProps {
    pub config: PredictionConfig,
}

#[function_component(PredictionPanel)]
pub(crate) fn prediction_panel(props: &PredictionPanelProps) -> Html {
    let (store, dispatch) = use_store::<DeckStore>();
    let task = use_mut_ref(|| None as Option<DeferredPrediction>);

    {
        let task = task.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    let Some(mut deferred) = task.borrow_mut().take() else {
                        return;
                    };
                    deferred.cancel();
                    let mut cancelled = None;
                    deck_dispatch().reduce_mut(|store| cancelled = cancel_submission(store));
                    if let Some(ticket) = cancelled {
                        console::log!("pending prediction cancelled", ticket.to_string());
                    } else {
                        console::debug!("prediction task released", deferred.ticket().to_string());
                    }
                }
            },
            (),
        );
    }

    let onsubmit = {
        let dispatch = dispatch.clone();
        let task = task.clone();
        let rule = ThresholdRule::STANDARD;
        let delay_ms = props.config.delay_ms;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut outcome = None;
            dispatch.reduce_mut(|store| outcome = Some(begin_submission(store, &rule)));
            match outcome {
                Some(Ok(Some(pending))) => {
                    console::log!("prediction scheduled", pending.ticket.to_string(), delay_ms);
                    let dispatch = dispatch.clone();
                    let deferred = DeferredPrediction::schedule(pending, delay_ms, move |pending| {
                        let mut applied = CompletionOutcome::Stale;
                        dispatch.reduce_mut(|store| applied = complete_submission(store, pending));
                        match applied {
                            CompletionOutcome::Applied => {
                                let label = pending.result.label;
                                console::log!("prediction delivered", label.headline(), label.code());
                            }
                            CompletionOutcome::Stale => {
                                console::debug!("stale prediction ignored", pending.ticket.to_string());
                            }
                        }
                    });
                    *task.borrow_mut() = Some(deferred);
                }
                Some(Ok(None)) => {
                    console::debug!("prediction already pending");
                }
                Some(Err(err)) => {
                    console::warn!("prediction form rejected", err.to_string());
                }
                None => {}
            }
        })
    };

    let loading = store.prediction.loading;
    html! {
        <div class="card prediction-panel">
            <h3>{"Live Prediction Demo"}</h3>
            <form class="prediction-form" {onsubmit}>
                {for SensorField::ALL.into_iter().map(|field| sensor_input(field, store.form.get(field), &dispatch))}
                <button type="submit" class="submit" disabled={loading}>
                    if loading {
                        <span class="spinner" aria-label="Predicting" />
                    } else {
                        {"Predict Failure"}
                    }
                </button>
            </form>
            if let Some(result) = store.prediction.result {
                {result_card(result)}
            }
        </div>
    }
}

fn sensor_input(field: SensorField, value: &str, dispatch: &Dispatch<DeckStore>) -> Html {
    let oninput = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            dispatch.reduce_mut(|store| set_field(store, field, input.value()));
        })
    };
    html! {
        <div class="field">
            <label for={field.name()}>{field.label()}</label>
            <input
                type="number"
                id={field.name()}
                name={field.name()}
                value={value.to_string()}
                placeholder={field.placeholder()}
                step={field.step()}
                required=true
                {oninput}
            />
        </div>
    }
}

fn result_card(result: PredictionResult) -> Html {
    let tone = match result.label {
        PredictionLabel::Failure => "failure",
        PredictionLabel::NoFailure => "nominal",
    };
    html! {
        <div class="result-card fade-in-up">
            <h3>{"Prediction Result"}</h3>
            <p>
                <span class="caption">{"Prediction: "}</span>
                <span class={classes!("verdict", tone)}>{result.label.headline()}</span>
            </p>
            <p class="muted">
                <span class="caption">{"Probability: "}</span>
                {format!("{}%", result.percent())}
            </p>
        </div>
    }
}
