use anyhow::Result;
use dialoguer::Confirm;
use meetups_core::HttpEventApi;
use meetups_core::pages::{DeleteOutcome, DetailPage};
use owo_colors::OwoColorize;

use super::{list, show, with_spinner};
use crate::render::inline_error;

pub async fn run(api: &HttpEventApi, slug: &str, yes: bool) -> Result<()> {
    let Some(detail) = show::load(api, slug).await else {
        return Ok(());
    };
    println!();

    if !yes
        && !Confirm::new()
            .with_prompt("  Delete this event?")
            .default(false)
            .interact()?
    {
        println!("{}", "  Cancelled".dimmed());
        return Ok(());
    }

    let page = DetailPage::new();
    match with_spinner("Deleting...", page.delete(api, &detail)).await {
        DeleteOutcome::Deleted { navigate_to } => {
            println!("{}", format!("  Deleted: {}", detail.event.title).green());
            println!("{}\n", format!("  → {}", navigate_to).dimmed());
            list::run(api, false).await?;
        }
        DeleteOutcome::Failed(message) => println!("{}", inline_error(&message)),
        DeleteOutcome::Busy => println!("{}", "  A delete is already in progress".yellow()),
    }

    Ok(())
}
