use log::warn;

use crate::api::EventApi;
use crate::error::MeetupsError;
use crate::event::Event;
use crate::route::Route;

pub const EMPTY_LIST_MESSAGE: &str = "No events yet.";
const LOAD_FAILED: &str = "Failed to load events";

/// One entry in the event list
#[derive(Debug, Clone, PartialEq)]
pub struct EventCard {
    pub event: Event,
    /// Formatted time, "" when the event has none
    pub time: String,
    /// Formatted date, "" when the event has none
    pub date: String,
    pub thumbnail: String,
}

impl EventCard {
    pub fn from_event(event: Event) -> Self {
        EventCard {
            time: event.time_display(),
            date: event.date_display(),
            thumbnail: event.thumbnail().to_string(),
            event,
        }
    }

    pub fn when(&self) -> Option<String> {
        crate::time_format::display_line(&self.time, &self.date)
    }

    pub fn route(&self) -> Route {
        Route::Detail(self.event.slug.clone())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HomeView {
    Loaded(Vec<EventCard>),
    Failed(String),
}

impl HomeView {
    /// Cards to show, if the load succeeded.
    pub fn cards(&self) -> Option<&[EventCard]> {
        match self {
            HomeView::Loaded(cards) => Some(cards),
            HomeView::Failed(_) => None,
        }
    }
}

/// The event list (home) page
pub struct HomePage;

impl HomePage {
    pub async fn load<A: EventApi>(api: &A) -> HomeView {
        match api.list().await {
            Ok(events) => HomeView::Loaded(events.into_iter().map(EventCard::from_event).collect()),
            Err(e) => {
                warn!("Loading events failed: {e}");
                HomeView::Failed(match e {
                    MeetupsError::Decode(_) => LOAD_FAILED.to_string(),
                    other => other.to_string(),
                })
            }
        }
    }
}
