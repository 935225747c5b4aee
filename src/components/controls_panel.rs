use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::state::{ViewportField, ViewportState};
use crate::util::format_coord;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub viewport: ViewportState,
    pub on_edit: Callback<(ViewportField, String)>,
    pub feedback: Option<String>,
}

// Numeric fields for the viewport; edits land on the next refresh tick.
#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;";
    let label_style = "width:18px; font-weight:600; text-align:right;";
    let input_style = "flex:1; min-width:90px; background:#0d1117; color:#c9d1d9; border:1px solid #30363d; border-radius:4px; padding:2px 6px; font-variant-numeric:tabular-nums;";
    let rows = ViewportField::ALL.iter().map(|&field| {
        let onchange = {
            let cb = props.on_edit.clone();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                cb.emit((field, input.value()));
            })
        };
        let value = format_coord(props.viewport.get(field));
        html! {
            <label style={row_style} title={field.to_string()}>
                <span style={label_style}>{ field.label() }</span>
                <input id={field.label()} type="text" style={input_style} {value} {onchange} />
            </label>
        }
    });
    html! {<div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:200px; display:flex; flex-direction:column; gap:6px;">
        <div style="font-weight:600;">{"Viewport"}</div>
        { for rows }
        <div style="font-size:11px; opacity:0.7;">{"d = refresh interval (ms)"}</div>
        { if let Some(txt) = &props.feedback { html!{ <div style="font-size:11px; line-height:1.2; background:#1c2128; border:1px solid #f85149; padding:4px 6px; border-radius:6px;">{ txt.clone() }</div> } } else { html!{} } }
    </div>}
}
