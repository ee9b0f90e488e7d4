use log::{info, warn};

use super::InFlight;
use crate::api::EventApi;
use crate::event::{Event, NewEvent};
use crate::route::Route;
use crate::time_format::format_time;

const TITLE_REQUIRED: &str = "Title is required";
const CREATE_FAILED: &str = "Failed to create event";

/// Fields of the create form, as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateForm {
    pub title: String,
    pub image: String,
    pub image_small: String,
    pub modal_image: String,
    pub location: String,
    /// Date picker value ("YYYY-MM-DD")
    pub date: String,
    /// Time picker value ("HH:MM"), or anything `format_time` accepts
    pub time: String,
    pub description: String,
}

impl CreateForm {
    /// Build the request body. The time is stored in display form ("5:00 PM").
    pub fn to_payload(&self) -> NewEvent {
        let date = self.date.trim();
        NewEvent {
            title: self.title.trim().to_string(),
            image: self.image.trim().to_string(),
            image_small: self.image_small.trim().to_string(),
            modal_image: self.modal_image.trim().to_string(),
            location: self.location.trim().to_string(),
            date: date.to_string(),
            time: format_time(Some(&self.time), Some(date)),
            description: self.description.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    /// Stored; the caller should navigate to `navigate_to`.
    Created { event: Event, navigate_to: Route },
    /// Rejected before sending anything.
    Invalid(String),
    /// The API refused or could not be reached; the form stays as it was.
    Failed(String),
    /// A submit from this form is already running.
    Busy,
}

/// The create-event form page
#[derive(Debug, Default)]
pub struct CreatePage {
    submitting: InFlight,
}

impl CreatePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.is_busy()
    }

    pub async fn submit<A: EventApi>(&self, api: &A, form: &CreateForm) -> CreateOutcome {
        let Some(_guard) = self.submitting.try_begin() else {
            return CreateOutcome::Busy;
        };

        let payload = form.to_payload();
        if payload.title.is_empty() {
            return CreateOutcome::Invalid(TITLE_REQUIRED.to_string());
        }

        match api.create(&payload).await {
            Ok(event) => {
                info!("Created event '{}' ({})", event.title, event.slug);
                CreateOutcome::Created {
                    event,
                    navigate_to: Route::Home,
                }
            }
            Err(e) => {
                warn!("Creating event '{}' failed: {e}", payload.title);
                CreateOutcome::Failed(e.user_message(CREATE_FAILED))
            }
        }
    }
}
