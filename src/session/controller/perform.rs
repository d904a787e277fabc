use crate::api::AssistantApi;
use crate::session::request::{dispatch, PendingRequest};
use super::SessionController;

impl SessionController {
    /// Run a begin step's request to completion in place.
    ///
    /// The terminal UI spawns requests instead; this is for callers that can
    /// afford to wait. Returns whether a request was issued.
    pub async fn perform(&mut self, api: &dyn AssistantApi, request: Option<PendingRequest>) -> bool {
        match request {
            Some(request) => {
                let outcome = dispatch(api, request).await;
                self.complete(outcome);
                true
            }
            None => false,
        }
    }
}
