use crate::event::Event;
use crate::route::Route;

/// Quick look at an event picked from the list (the modal).
#[derive(Debug, Clone, PartialEq)]
pub struct EventPreview {
    pub title: String,
    pub description: Option<String>,
    pub when: Option<String>,
    pub location: Option<String>,
    pub image: String,
    /// Where "More information" leads
    pub more_info: Route,
}

impl EventPreview {
    pub fn from_event(event: &Event) -> Self {
        EventPreview {
            title: event.title.clone(),
            description: event.description().map(str::to_string),
            when: event.when(),
            location: event.location().map(str::to_string),
            image: event.modal_image().to_string(),
            more_info: Route::Detail(event.slug.clone()),
        }
    }
}
