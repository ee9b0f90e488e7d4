use anyhow::Result;
use dialoguer::Select;
use meetups_core::HttpEventApi;
use meetups_core::Route;
use meetups_core::pages::{EMPTY_LIST_MESSAGE, EventCard, EventPreview, HomePage, HomeView};
use owo_colors::OwoColorize;

use super::{load_view, show};
use crate::render::{Render, inline_error, nav_bar};

pub async fn run(api: &HttpEventApi, select: bool) -> Result<()> {
    println!("{}", nav_bar(&Route::Home));

    let loader = api.clone();
    let load = async move { HomePage::load(&loader).await };
    let Some(view) = load_view("Loading events...", load).await else {
        return Ok(());
    };

    let cards = match view {
        HomeView::Failed(message) => {
            println!("{}", inline_error(&message));
            return Ok(());
        }
        HomeView::Loaded(cards) => cards,
    };

    if cards.is_empty() {
        println!("{}", EMPTY_LIST_MESSAGE.dimmed());
        return Ok(());
    }

    for card in &cards {
        println!("{}\n", card.render());
    }

    if select {
        pick(api, &cards).await?;
    }

    Ok(())
}

/// Choose an event, show its preview, and optionally open the full page.
async fn pick(api: &HttpEventApi, cards: &[EventCard]) -> Result<()> {
    let items: Vec<String> = cards
        .iter()
        .map(|c| match c.when() {
            Some(when) => format!("{} ({})", c.event.title, when),
            None => c.event.title.clone(),
        })
        .collect();

    let Some(index) = Select::new()
        .with_prompt("  Event")
        .items(&items)
        .default(0)
        .interact_opt()?
    else {
        return Ok(());
    };

    let preview = EventPreview::from_event(&cards[index].event);
    println!();
    println!("{}", preview.render());
    println!();

    let choice = Select::new()
        .items(&["Close", "More information"])
        .default(0)
        .interact_opt()?;

    if choice == Some(1) {
        if let Route::Detail(slug) = &preview.more_info {
            println!();
            show::run(api, slug).await?;
        }
    }

    Ok(())
}
