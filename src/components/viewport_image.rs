use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ViewportImageProps {
    pub src: Option<String>,
    pub on_error: Callback<()>,
}

#[function_component(ViewportImage)]
pub fn viewport_image(props: &ViewportImageProps) -> Html {
    let onerror = {
        let cb = props.on_error.clone();
        Callback::from(move |_: Event| cb.emit(()))
    };
    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:#0e1116;">
        { match &props.src {
            Some(src) => html!{ <img id="i" src={src.clone()} alt="viewport" {onerror} style="max-width:100%; max-height:100%; image-rendering:pixelated;" /> },
            None => html!{ <div style="opacity:0.6;">{"Waiting for first frame…"}</div> },
        } }
    </div>}
}
