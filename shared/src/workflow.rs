use crate::PredictionResult;

/// The upload-and-predict workflow, modeled as one explicit state value.
///
/// Generic over the image handle `I` so the UI layer can plug in its
/// browser-backed selected-image type while tests use a plain stand-in.
/// `Requesting` doubles as the in-flight guard: a submit while a request
/// is outstanding has nowhere to transition to.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowState<I> {
    Idle,
    ImageSelected(I),
    Requesting(I),
    Succeeded(I, PredictionResult),
}

/// Inputs the UI layer feeds into the workflow.
#[derive(Debug)]
pub enum WorkflowEvent<I> {
    ImagePicked(I),
    SubmitRequested,
    RequestSucceeded(PredictionResult),
    RequestFailed(String),
}

/// Command for the UI layer to carry out after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Issue the prediction request for the image now held in `Requesting`.
    StartRequest,
    /// Surface a failure notification to the user.
    Notify(String),
}

impl<I> WorkflowState<I> {
    /// Applies one event and returns the effect to run.
    ///
    /// Picking an image drops the previous state wholesale, which releases
    /// the old preview resource and discards any prior result before the
    /// new selection is stored. While a request is outstanding the pick is
    /// rejected instead: accepting it would re-arm submission with a call
    /// still in flight and let that call's completion land on the wrong
    /// image. Completion events arriving in any state other than
    /// `Requesting` are stale and ignored.
    pub fn apply(&mut self, event: WorkflowEvent<I>) -> Effect {
        match event {
            WorkflowEvent::ImagePicked(image) => {
                if !self.is_requesting() {
                    *self = WorkflowState::ImageSelected(image);
                }
                Effect::None
            }
            WorkflowEvent::SubmitRequested => {
                match std::mem::replace(self, WorkflowState::Idle) {
                    WorkflowState::ImageSelected(image) | WorkflowState::Succeeded(image, _) => {
                        *self = WorkflowState::Requesting(image);
                        Effect::StartRequest
                    }
                    other => {
                        *self = other;
                        Effect::None
                    }
                }
            }
            WorkflowEvent::RequestSucceeded(result) => {
                match std::mem::replace(self, WorkflowState::Idle) {
                    WorkflowState::Requesting(image) => {
                        *self = WorkflowState::Succeeded(image, result);
                        Effect::None
                    }
                    other => {
                        *self = other;
                        Effect::None
                    }
                }
            }
            WorkflowEvent::RequestFailed(message) => {
                match std::mem::replace(self, WorkflowState::Idle) {
                    WorkflowState::Requesting(image) => {
                        *self = WorkflowState::ImageSelected(image);
                        Effect::Notify(message)
                    }
                    other => {
                        *self = other;
                        Effect::None
                    }
                }
            }
        }
    }

    pub fn image(&self) -> Option<&I> {
        match self {
            WorkflowState::Idle => None,
            WorkflowState::ImageSelected(image)
            | WorkflowState::Requesting(image)
            | WorkflowState::Succeeded(image, _) => Some(image),
        }
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        match self {
            WorkflowState::Succeeded(_, result) => Some(result),
            _ => None,
        }
    }

    pub fn is_requesting(&self) -> bool {
        matches!(self, WorkflowState::Requesting(_))
    }

    /// Submit is allowed with an image at hand and no request outstanding.
    pub fn can_submit(&self) -> bool {
        matches!(
            self,
            WorkflowState::ImageSelected(_) | WorkflowState::Succeeded(_, _)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Stand-in for a browser preview resource: bumps the shared counter
    /// while alive, releases it on drop.
    #[derive(Debug, PartialEq)]
    struct Preview {
        name: &'static str,
        live: Rc<Cell<usize>>,
    }

    impl Preview {
        fn new(name: &'static str, live: &Rc<Cell<usize>>) -> Self {
            live.set(live.get() + 1);
            Preview {
                name,
                live: Rc::clone(live),
            }
        }
    }

    impl Drop for Preview {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
        }
    }

    fn late_blight() -> PredictionResult {
        PredictionResult {
            class_label: "Late Blight".to_string(),
            confidence: 0.93,
        }
    }

    #[test]
    fn submit_without_image_is_a_noop() {
        let mut state: WorkflowState<&str> = WorkflowState::Idle;
        assert_eq!(state.apply(WorkflowEvent::SubmitRequested), Effect::None);
        assert_eq!(state, WorkflowState::Idle);
    }

    #[test]
    fn submit_with_image_starts_exactly_one_request() {
        let mut state = WorkflowState::ImageSelected("leaf.jpg");
        assert_eq!(
            state.apply(WorkflowEvent::SubmitRequested),
            Effect::StartRequest
        );
        assert!(state.is_requesting());

        // Rapid repeated triggers while in flight must not issue another call.
        assert_eq!(state.apply(WorkflowEvent::SubmitRequested), Effect::None);
        assert_eq!(state.apply(WorkflowEvent::SubmitRequested), Effect::None);
        assert!(state.is_requesting());
    }

    #[test]
    fn success_stores_the_result() {
        let mut state = WorkflowState::Requesting("leaf.jpg");
        assert_eq!(
            state.apply(WorkflowEvent::RequestSucceeded(late_blight())),
            Effect::None
        );
        assert_eq!(state.result(), Some(&late_blight()));
        assert!(state.can_submit());
    }

    #[test]
    fn failure_returns_to_pre_request_state_and_notifies_once() {
        let mut state = WorkflowState::Requesting("leaf.jpg");
        assert_eq!(
            state.apply(WorkflowEvent::RequestFailed("HTTP 500".to_string())),
            Effect::Notify("HTTP 500".to_string())
        );
        assert_eq!(state, WorkflowState::ImageSelected("leaf.jpg"));

        // A duplicate completion for the same request is stale.
        assert_eq!(
            state.apply(WorkflowEvent::RequestFailed("HTTP 500".to_string())),
            Effect::None
        );
        assert_eq!(state, WorkflowState::ImageSelected("leaf.jpg"));
    }

    #[test]
    fn picking_a_new_image_clears_the_previous_result() {
        let mut state = WorkflowState::Succeeded("a.jpg", late_blight());
        state.apply(WorkflowEvent::ImagePicked("b.jpg"));
        assert_eq!(state, WorkflowState::ImageSelected("b.jpg"));
        assert_eq!(state.result(), None);
    }

    #[test]
    fn resubmitting_after_success_discards_the_old_result() {
        let mut state = WorkflowState::Succeeded("a.jpg", late_blight());
        assert_eq!(
            state.apply(WorkflowEvent::SubmitRequested),
            Effect::StartRequest
        );
        assert!(state.is_requesting());
        assert_eq!(state.result(), None);
    }

    #[test]
    fn stale_success_outside_requesting_is_ignored() {
        let mut state = WorkflowState::ImageSelected("leaf.jpg");
        assert_eq!(
            state.apply(WorkflowEvent::RequestSucceeded(late_blight())),
            Effect::None
        );
        assert_eq!(state, WorkflowState::ImageSelected("leaf.jpg"));
    }

    #[test]
    fn picking_an_image_mid_request_is_rejected() {
        let mut state = WorkflowState::Requesting("a.jpg");
        assert_eq!(
            state.apply(WorkflowEvent::ImagePicked("b.jpg")),
            Effect::None
        );
        assert!(state.is_requesting());

        // The guard still holds: no second call can start.
        assert_eq!(state.apply(WorkflowEvent::SubmitRequested), Effect::None);

        // The outstanding completion stays attributed to its own image.
        assert_eq!(
            state.apply(WorkflowEvent::RequestSucceeded(late_blight())),
            Effect::None
        );
        assert_eq!(state, WorkflowState::Succeeded("a.jpg", late_blight()));
    }

    #[test]
    fn rejected_mid_request_pick_releases_its_preview() {
        let live = Rc::new(Cell::new(0));
        let mut state = WorkflowState::Idle;

        state.apply(WorkflowEvent::ImagePicked(Preview::new("a", &live)));
        state.apply(WorkflowEvent::SubmitRequested);

        state.apply(WorkflowEvent::ImagePicked(Preview::new("b", &live)));
        assert_eq!(live.get(), 1);
        assert_eq!(state.image().map(|p| p.name), Some("a"));
    }

    #[test]
    fn replacing_the_selection_releases_the_old_preview() {
        let live = Rc::new(Cell::new(0));
        let mut state = WorkflowState::Idle;

        state.apply(WorkflowEvent::ImagePicked(Preview::new("a", &live)));
        assert_eq!(live.get(), 1);

        // Select B before any request completes; A's resource must go.
        state.apply(WorkflowEvent::ImagePicked(Preview::new("b", &live)));
        assert_eq!(live.get(), 1);
        assert_eq!(state.image().map(|p| p.name), Some("b"));

        state.apply(WorkflowEvent::ImagePicked(Preview::new("c", &live)));
        assert_eq!(live.get(), 1);

        drop(state);
        assert_eq!(live.get(), 0);
    }
}
