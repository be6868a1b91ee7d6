use super::super::{Model, Msg};
use yew::prelude::*;

pub fn render_preview_area(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(image) = model.workflow.image() else {
        return html! {};
    };

    let link = ctx.link();

    html! {
        <div id="preview-container">
            <img id="image-preview"
                src={image.preview_url()}
                alt={image.name()}
                style="max-width: 100%; max-height: 400px; object-fit: contain; margin-bottom: 10px;" />

            <button
                id="predict-button"
                class="predict-btn"
                onclick={link.callback(|_| Msg::Predict)}
                disabled={!model.workflow.can_submit()}
            >
                { render_predict_button_content(model) }
            </button>
        </div>
    }
}

fn render_predict_button_content(model: &Model) -> Html {
    if model.workflow.is_requesting() {
        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Predicting..."}</> }
    } else {
        html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Predict Disease"}</> }
    }
}
