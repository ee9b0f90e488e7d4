use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use dialoguer::{Confirm, Input};
use meetups_core::HttpEventApi;
use meetups_core::Route;
use meetups_core::pages::{CreateForm, CreateOutcome, CreatePage};
use owo_colors::OwoColorize;

use super::{list, with_spinner};
use crate::render::{inline_error, nav_bar};

#[derive(Args, Default)]
pub struct CreateArgs {
    /// Event title (prompts for every field when omitted)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Start time, e.g. "17:30", "1730" or "5:30 PM"
    #[arg(long)]
    pub time: Option<String>,

    #[arg(short, long)]
    pub location: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Large image URL (detail page)
    #[arg(long)]
    pub image: Option<String>,

    /// Small image URL (list thumbnail)
    #[arg(long)]
    pub image_small: Option<String>,

    /// Modal image URL (map screenshot)
    #[arg(long)]
    pub modal_image: Option<String>,
}

pub async fn run(api: &HttpEventApi, args: CreateArgs) -> Result<()> {
    let interactive = args.title.is_none();

    let form = if interactive {
        println!("{}", nav_bar(&Route::Create));
        prompt_form()?
    } else {
        form_from_args(args)
    };

    let page = CreatePage::new();
    loop {
        match with_spinner("Creating...", page.submit(api, &form)).await {
            CreateOutcome::Created { event, navigate_to } => {
                if interactive {
                    println!();
                }
                println!("{}", format!("  Created: {}", event.title).green());
                println!("{}\n", format!("  → {}", navigate_to).dimmed());
                return list::run(api, false).await;
            }
            CreateOutcome::Invalid(message) | CreateOutcome::Failed(message) => {
                println!("{}", inline_error(&message));
            }
            CreateOutcome::Busy => {
                println!("{}", "  A submit is already in progress".yellow());
            }
        }

        // The form keeps what was typed, so retrying resends the same values
        if !interactive
            || !Confirm::new()
                .with_prompt("  Try again?")
                .default(true)
                .interact()?
        {
            return Ok(());
        }
    }
}

fn form_from_args(args: CreateArgs) -> CreateForm {
    CreateForm {
        title: args.title.unwrap_or_default(),
        image: args.image.unwrap_or_default(),
        image_small: args.image_small.unwrap_or_default(),
        modal_image: args.modal_image.unwrap_or_default(),
        location: args.location.unwrap_or_default(),
        date: args.date.unwrap_or_default(),
        time: args.time.unwrap_or_default(),
        description: args.description.unwrap_or_default(),
    }
}

fn prompt_form() -> Result<CreateForm> {
    let title = Input::<String>::new()
        .with_prompt("  Title")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("Title is required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let date = Input::<String>::new()
        .with_prompt("  Date, YYYY-MM-DD (skip)")
        .default(String::new())
        .show_default(false)
        .validate_with(|input: &String| -> Result<(), &str> {
            if is_valid_date(input) {
                Ok(())
            } else {
                Err("Expected YYYY-MM-DD")
            }
        })
        .interact_text()?;

    Ok(CreateForm {
        title,
        date,
        time: optional("  Start time, e.g. 17:30 (skip)")?,
        location: optional("  Location (skip)")?,
        description: optional("  Description (skip)")?,
        image: optional("  Large image URL (skip)")?,
        image_small: optional("  Small image URL, list thumbnail (skip)")?,
        modal_image: optional("  Modal image URL, map screenshot (skip)")?,
    })
}

fn optional(prompt: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(prompt)
        .default(String::new())
        .show_default(false)
        .interact_text()?)
}

/// Empty (skipped) or a real calendar date.
fn is_valid_date(input: &str) -> bool {
    let input = input.trim();
    input.is_empty() || NaiveDate::parse_from_str(input, "%Y-%m-%d").is_ok()
}
