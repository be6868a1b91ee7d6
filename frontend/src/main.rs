use gloo_file::File as GlooFile;
use shared::workflow::WorkflowState;
use shared::PredictionResult;
use web_sys::DragEvent;
use yew::prelude::*;

mod api;
mod components;
mod image;

use components::{handlers, header, preview_area, results, upload_section};
use image::SelectedImage;

// Yew msg components
pub enum Msg {
    // File operations
    FilePicked(Option<GlooFile>),

    // Prediction operations
    Predict,
    PredictionReceived(PredictionResult),
    PredictionFailed(String),

    // Input events
    SetDragging(bool),
    HandleDrop(DragEvent),
}

// Main component
pub struct Model {
    workflow: WorkflowState<SelectedImage>,
    is_dragging: bool,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            workflow: WorkflowState::Idle,
            is_dragging: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // File operations
            Msg::FilePicked(file) => handlers::handle_file_picked(self, file),

            // Prediction operations
            Msg::Predict => handlers::handle_predict(self, ctx),
            Msg::PredictionReceived(result) => handlers::handle_prediction_received(self, result),
            Msg::PredictionFailed(message) => handlers::handle_prediction_failed(self, message),

            // Input events
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::HandleDrop(event) => handlers::handle_drop(self, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { header::render_header() }

                <main class="main-content">
                    { upload_section::render_upload_section(self, ctx) }
                    { preview_area::render_preview_area(self, ctx) }
                    { results::render_results(self) }
                </main>

                <footer class="app-footer">
                    <p>{"Potato Leaf Disease Predictor | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
