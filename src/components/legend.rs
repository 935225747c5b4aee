use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LegendRowProps {
    pub keys: String,
    pub label: String,
}

#[function_component(LegendRow)]
pub fn legend_row(props: &LegendRowProps) -> Html {
    html! { <div style="display:flex; align-items:center; gap:8px; margin:3px 0;"> <span style="display:inline-block; min-width:110px; font-family:monospace; color:#58a6ff;">{ props.keys.clone() }</span> <span>{ props.label.clone() }</span> </div> }
}
