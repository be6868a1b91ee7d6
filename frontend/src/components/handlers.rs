use super::super::{Model, Msg};
use super::utils::first_image_file;
use crate::api;
use crate::image::SelectedImage;
use gloo_file::File as GlooFile;
use shared::workflow::{Effect, WorkflowEvent};
use shared::PredictionResult;
use wasm_bindgen_futures::spawn_local;
use web_sys::DragEvent;
use yew::prelude::*;

pub fn handle_file_picked(model: &mut Model, file: Option<GlooFile>) -> bool {
    match SelectedImage::select(file) {
        Ok(image) => {
            // Drops the prior selection, releasing its preview URL and
            // clearing any displayed result.
            model.workflow.apply(WorkflowEvent::ImagePicked(image));
            true
        }
        // Nothing was picked; leave the workflow untouched.
        Err(_) => false,
    }
}

pub fn handle_predict(model: &mut Model, ctx: &Context<Model>) -> bool {
    match model.workflow.apply(WorkflowEvent::SubmitRequested) {
        Effect::StartRequest => {
            // The workflow just moved to Requesting, so an image is held.
            if let Some(image) = model.workflow.image() {
                send_prediction_request(ctx, image.file().clone());
            }
            true
        }
        // No image selected, or a request is already in flight.
        _ => false,
    }
}

pub fn handle_prediction_received(model: &mut Model, result: PredictionResult) -> bool {
    model.workflow.apply(WorkflowEvent::RequestSucceeded(result));
    true
}

pub fn handle_prediction_failed(model: &mut Model, message: String) -> bool {
    match model.workflow.apply(WorkflowEvent::RequestFailed(message)) {
        Effect::Notify(message) => {
            log::error!("Prediction failed: {message}");
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message("Prediction failed");
            }
            true
        }
        _ => false,
    }
}

pub fn handle_drop(model: &mut Model, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    let file = event
        .data_transfer()
        .and_then(|data_transfer| data_transfer.files())
        .and_then(|file_list| first_image_file(&file_list));
    handle_file_picked(model, file);

    true
}

fn send_prediction_request(ctx: &Context<Model>, file: GlooFile) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            match api::predict(&file).await {
                Ok(result) => link.send_message(Msg::PredictionReceived(result)),
                Err(err) => link.send_message(Msg::PredictionFailed(err.to_string())),
            }
        }
    });
}
