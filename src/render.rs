//! TUI rendering traits for meetups view models.
//!
//! This module provides extension traits that add colored terminal rendering
//! to meetups-core page types using owo_colors.

use meetups_core::Route;
use meetups_core::pages::{EventCard, EventDetail, EventPreview};
use owo_colors::OwoColorize;

/// Cards show at most this much of the description
const DESCRIPTION_PREVIEW_CHARS: usize = 140;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventCard {
    fn render(&self) -> String {
        let event = &self.event;
        let mut lines = vec![format!("  {}", event.title.bold())];

        if let Some(description) = event.description() {
            lines.push(format!("  {}", clamp(description, DESCRIPTION_PREVIEW_CHARS)));
        }
        if let Some(when) = self.when() {
            lines.push(format!("  {}", when));
        }
        if let Some(location) = event.location() {
            lines.push(format!("  {}", location.cyan()));
        }
        lines.push(format!(
            "  {} {}",
            self.route().to_string().dimmed(),
            self.thumbnail.dimmed()
        ));

        lines.join("\n")
    }
}

impl Render for EventPreview {
    fn render(&self) -> String {
        let mut lines = vec![format!("  {}", self.title.bold())];

        if let Some(description) = &self.description {
            lines.push(format!("  {}", description));
        }
        if let Some(when) = &self.when {
            lines.push(format!("  {}", when));
        }
        if let Some(location) = &self.location {
            lines.push(format!("  {}", location.cyan()));
        }
        lines.push(format!("  {}", self.image.dimmed()));

        lines.join("\n")
    }
}

impl Render for EventDetail {
    fn render(&self) -> String {
        let event = &self.event;
        let mut lines = vec![
            format!("  {}", event.title.bold().underline()),
            format!("  {}", self.banner.dimmed()),
            String::new(),
        ];

        if let Some(description) = event.description() {
            lines.extend(description.lines().map(|l| format!("  {}", l)));
            lines.push(String::new());
        }
        if let Some(when) = &self.when {
            lines.push(format!("  {}", when));
        }
        if let Some(location) = event.location() {
            lines.push(format!("  {}", location.cyan()));
        }

        lines.join("\n")
    }
}

/// Top bar: app title plus the two nav links, the current one highlighted.
pub fn nav_bar(current: &Route) -> String {
    let link = |label: &str, route: Route| {
        if *current == route {
            label.blue().bold().to_string()
        } else {
            label.to_string()
        }
    };

    format!(
        "{}   {} | {}\n",
        "Board Game Meetups".bold(),
        link("Home", Route::Home),
        link("Create Event", Route::Create)
    )
}

/// A page-level failure, indented under the view it belongs to.
pub fn inline_error(message: &str) -> String {
    format!("  {}", message).red().to_string()
}

/// Cut text down to `max` characters, ending in an ellipsis when shortened.
fn clamp(text: &str, max: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max {
        return flat;
    }
    let cut: String = flat.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}
