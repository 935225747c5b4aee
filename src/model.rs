//! Display-side state for the viewer page.
//! The viewport itself lives in a shared `Rc<RefCell<ViewportState>>` because the
//! refresh loop must read it between renders; this reducer only tracks what the
//! page shows.

use std::rc::Rc;
use yew::Reducible;

use crate::request::RequestDescriptor;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayState {
    /// Address currently bound to the image element.
    pub src: Option<String>,
    pub last_request: Option<RequestDescriptor>,
    pub dispatched: u64,
    pub failed_loads: u64,
    /// Bumped on every viewport edit, accepted or not; keys the controls panel so
    /// its inputs are rebuilt from the current viewport.
    pub form_version: u64,
    pub feedback: Option<String>,
}

#[derive(Clone, Debug)]
pub enum DisplayAction {
    Show { request: RequestDescriptor, url: String },
    ViewportChanged,
    LoadFailed,
    Feedback(String),
}

impl Reducible for DisplayState {
    type Action = DisplayAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use DisplayAction::*;
        let mut new = (*self).clone();
        match action {
            // Responses are not sequenced: the newest address wins, whatever
            // finishes loading first.
            Show { request, url } => {
                new.src = Some(url);
                new.last_request = Some(request);
                new.dispatched = new.dispatched.saturating_add(1);
            }
            ViewportChanged => {
                new.form_version = new.form_version.wrapping_add(1);
                new.feedback = None;
            }
            LoadFailed => {
                new.failed_loads = new.failed_loads.saturating_add(1);
            }
            Feedback(msg) => {
                new.form_version = new.form_version.wrapping_add(1);
                new.feedback = Some(msg);
            }
        }
        Rc::new(new)
    }
}
