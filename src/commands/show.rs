use anyhow::Result;
use meetups_core::HttpEventApi;
use meetups_core::pages::{DetailPage, DetailView, EventDetail};

use super::load_view;
use crate::render::{Render, inline_error};

pub async fn run(api: &HttpEventApi, slug: &str) -> Result<()> {
    load(api, slug).await;
    Ok(())
}

/// Load and print the detail view; `None` if it couldn't be shown.
pub async fn load(api: &HttpEventApi, slug: &str) -> Option<EventDetail> {
    let (loader, slug) = (api.clone(), slug.to_string());
    let load = async move { DetailPage::load(&loader, &slug).await };
    let view = load_view("Loading event...", load).await?;

    match view {
        DetailView::Loaded(detail) => {
            println!("{}", detail.render());
            Some(detail)
        }
        DetailView::Failed(message) => {
            println!("{}", inline_error(&message));
            None
        }
    }
}
