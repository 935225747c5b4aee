use super::legend::LegendRow;
use crate::commands::grouped_bindings;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LegendPanelProps {
    #[prop_or(true)]
    pub show: bool,
}

#[function_component]
pub fn LegendPanel(props: &LegendPanelProps) -> Html {
    if !props.show {
        return html! {};
    }
    let rows = grouped_bindings().into_iter().map(|(keys, cmd)| {
        html! { <LegendRow keys={keys.join(" / ")} label={cmd.describe()} /> }
    });
    html! {<div style="position:absolute; right:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:170px; font-size:12px;">
        <div style="font-weight:600; margin-bottom:4px;">{"Keys"}</div>
        { for rows }
    </div>}
}
