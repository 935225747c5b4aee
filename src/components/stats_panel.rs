use yew::prelude::*;

use crate::request::RequestDescriptor;
use crate::scheduler::Phase;
use crate::util::{format_coord, format_interval};

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub last_request: Option<RequestDescriptor>,
    pub interval_ms: u32,
    pub phase: Phase,
    pub ticks: u64,
    pub dispatched: u64,
    pub failed_loads: u64,
    pub show_legend: bool,
    pub on_toggle_legend: Callback<()>,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // label | value
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let rect = match &props.last_request {
        Some(r) => format!(
            "{}, {} · {}×{}",
            r.left,
            r.top,
            format_coord(r.width),
            format_coord(r.height)
        ),
        None => "—".to_string(),
    };
    let phase = match props.phase {
        Phase::Idle => "idle",
        Phase::Running => "running",
        Phase::Stopped => "stopped",
    };
    let toggle = {
        let cb = props.on_toggle_legend.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:8px; font-size:13px;">
            <div style={row_style}>
                <span style={label_style}>{"Rect"}</span>
                <span style={value_style}>{ rect }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Refresh"}</span>
                <span style={value_style}>{ format!("{} ({})", format_interval(props.interval_ms), phase) }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Ticks"}</span>
                <span style={value_style}>{ props.ticks }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Requests"}</span>
                <span style={value_style}>{ props.dispatched }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#f85149;", label_style)}>{"Failed loads"}</span>
                <span style={format!("{} color:#f85149;", value_style)}>{ props.failed_loads }</span>
            </div>
            <button onclick={toggle} style="padding:4px 10px; font-size:12px;">{ if props.show_legend { "Hide keys" } else { "Show keys" } }</button>
        </div>
    }
}
