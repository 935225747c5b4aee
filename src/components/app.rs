use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use super::{
    controls_panel::ControlsPanel, legend_panel::LegendPanel, stats_panel::StatsPanel,
    viewport_image::ViewportImage,
};
use crate::commands::{CommandInterpreter, KeyInput, KeyOutcome};
use crate::config::ViewerConfig;
use crate::model::{DisplayAction, DisplayState};
use crate::request::{BrowserNonce, RequestDescriptor};
use crate::scheduler::{BrowserTimers, Phase, RefreshScheduler, RequestSink};
use crate::state::{ViewportField, ViewportState};

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: ViewerConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let viewport = use_mut_ref(ViewportState::default);
    let display = use_reducer(DisplayState::default);
    let scheduler_ref = use_mut_ref(|| None::<RefreshScheduler>);
    let show_legend = use_state(|| true);

    // Mount is the "ready" signal: build the loop, hook the keyboard, start ticking.
    {
        let viewport = viewport.clone();
        let display = display.clone();
        let scheduler_ref = scheduler_ref.clone();
        let config = props.config.clone();
        use_effect_with((), move |_| {
            let sink: RequestSink = {
                let display = display.clone();
                Rc::new(move |request: RequestDescriptor| {
                    let url = request.to_url(&config.api_base, config.format);
                    tracing::debug!(%url, "image requested");
                    display.dispatch(DisplayAction::Show { request, url });
                })
            };
            let scheduler = RefreshScheduler::new(
                Rc::new(BrowserTimers::default()),
                viewport.clone(),
                Rc::new(BrowserNonce),
                sink,
            );
            *scheduler_ref.borrow_mut() = Some(scheduler.clone());

            let keydown_cb = {
                let scheduler = scheduler.clone();
                Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    let input = KeyInput::from_event(&e);
                    let outcome = CommandInterpreter.handle(&mut viewport.borrow_mut(), &input);
                    if outcome.suppress_default() {
                        e.prevent_default();
                    }
                    if outcome.should_refresh() {
                        scheduler.refresh_now();
                        display.dispatch(DisplayAction::ViewportChanged);
                    } else if let KeyOutcome::Rejected(_, err) = outcome {
                        display.dispatch(DisplayAction::Feedback(err.to_string()));
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let window = web_sys::window().and_then(|win| {
                win.add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
                    .ok()
                    .map(|_| win)
            });
            if window.is_none() {
                tracing::warn!("no window to listen on; keyboard commands disabled");
            }

            scheduler.start();

            move || {
                if let Some(win) = window {
                    let _ = win.remove_event_listener_with_callback(
                        "keydown",
                        keydown_cb.as_ref().unchecked_ref(),
                    );
                }
                scheduler.stop();
                drop(keydown_cb);
            }
        });
    }

    let on_edit = {
        let viewport = viewport.clone();
        let display = display.clone();
        Callback::from(move |(field, raw): (ViewportField, String)| {
            let result = viewport.borrow_mut().set_from_input(field, &raw);
            match result {
                Ok(()) => {
                    tracing::debug!(%field, value = %raw, "field edited");
                    display.dispatch(DisplayAction::ViewportChanged);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "field edit rejected");
                    display.dispatch(DisplayAction::Feedback(e.to_string()));
                }
            }
        })
    };
    let on_image_error = {
        let display = display.clone();
        Callback::from(move |_| {
            tracing::debug!("image failed to load");
            display.dispatch(DisplayAction::LoadFailed);
        })
    };
    let on_toggle_legend = {
        let show_legend = show_legend.clone();
        Callback::from(move |_| show_legend.set(!*show_legend))
    };

    let current = *viewport.borrow();
    let (phase, ticks) = match &*scheduler_ref.borrow() {
        Some(s) => (s.phase(), s.ticks()),
        None => (Phase::Idle, 0),
    };

    html! {
        <div id="root" style="position:relative; width:100vw; height:100vh; overflow:hidden; color:#c9d1d9; font-family:sans-serif;">
            <ViewportImage src={display.src.clone()} on_error={on_image_error} />
            <StatsPanel
                last_request={display.last_request.clone()}
                interval_ms={current.interval_ms()}
                {phase}
                {ticks}
                dispatched={display.dispatched}
                failed_loads={display.failed_loads}
                show_legend={*show_legend}
                {on_toggle_legend}
            />
            <ControlsPanel key={display.form_version} viewport={current} {on_edit} feedback={display.feedback.clone()} />
            <LegendPanel show={*show_legend} />
        </div>
    }
}
