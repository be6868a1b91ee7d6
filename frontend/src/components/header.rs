use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-leaf"></i> {" Potato Plant Disease Predictor"}</h1>
            <p class="subtitle">{"Upload or drag & drop a leaf photo to classify it"}</p>
        </header>
    }
}
