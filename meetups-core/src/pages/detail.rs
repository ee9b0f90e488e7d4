use log::warn;

use super::InFlight;
use crate::api::EventApi;
use crate::event::Event;
use crate::route::Route;

const NOT_FOUND: &str = "Event not found";
const LOAD_FAILED: &str = "Failed to load event";
const DELETE_FAILED: &str = "Failed to delete event";

/// Everything the detail view shows
#[derive(Debug, Clone, PartialEq)]
pub struct EventDetail {
    pub event: Event,
    pub when: Option<String>,
    pub banner: String,
}

impl EventDetail {
    pub fn from_event(event: Event) -> Self {
        EventDetail {
            when: event.when(),
            banner: event.banner().to_string(),
            event,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Loaded(EventDetail),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// Gone; the caller should navigate to `navigate_to`.
    Deleted { navigate_to: Route },
    /// Still there; show the message and stay on the page.
    Failed(String),
    /// A delete from this page is already running.
    Busy,
}

/// The single-event page
#[derive(Debug, Default)]
pub struct DetailPage {
    deleting: InFlight,
}

impl DetailPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load<A: EventApi>(api: &A, slug: &str) -> DetailView {
        match api.get_by_slug(slug).await {
            Ok(event) => DetailView::Loaded(EventDetail::from_event(event)),
            Err(e) if e.is_not_found() => DetailView::Failed(NOT_FOUND.to_string()),
            Err(e) => {
                warn!("Loading event '{slug}' failed: {e}");
                DetailView::Failed(LOAD_FAILED.to_string())
            }
        }
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting.is_busy()
    }

    /// Delete the shown event by id. Confirmation is up to the caller.
    pub async fn delete<A: EventApi>(&self, api: &A, detail: &EventDetail) -> DeleteOutcome {
        let Some(_guard) = self.deleting.try_begin() else {
            return DeleteOutcome::Busy;
        };

        match api.delete_by_id(&detail.event.id).await {
            Ok(()) => DeleteOutcome::Deleted {
                navigate_to: Route::Home,
            },
            Err(e) => {
                warn!("Deleting event '{}' failed: {e}", detail.event.id);
                DeleteOutcome::Failed(e.user_message(DELETE_FAILED))
            }
        }
    }
}
