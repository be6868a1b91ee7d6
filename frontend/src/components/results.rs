use super::super::Model;
use shared::presenter::{disease_css_class, format_confidence, Tier};
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    let Some(result) = model.workflow.result() else {
        return html! {};
    };

    let tier = Tier::from_confidence(result.confidence);
    // Unknown labels get no extra class and render unstyled.
    let disease_class = disease_css_class(&result.class_label);

    html! {
        <div class="results-container">
            <div class="result-row">
                <div class="result-cell">
                    <p class="result-caption">{"Prediction"}</p>
                    <p class={classes!("result-value", disease_class)}>
                        { result.class_label.clone() }
                    </p>
                </div>
                <div class="result-cell">
                    <p class="result-caption">{"Confidence"}</p>
                    <p class={classes!("result-value", tier.css_class())}>
                        { format_confidence(result.confidence) }
                    </p>
                </div>
            </div>
        </div>
    }
}
