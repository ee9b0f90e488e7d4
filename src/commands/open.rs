use anyhow::Result;
use meetups_core::{HttpEventApi, Route};

use super::create::{self, CreateArgs};
use super::{list, show};

/// Show whatever view a path like "/events/catan-night" points at.
pub async fn run(api: &HttpEventApi, path: &str) -> Result<()> {
    let route = Route::parse(path).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown page '{}'. Available: /, /create, /events/<slug>",
            path
        )
    })?;

    match route {
        Route::Home => list::run(api, false).await,
        Route::Detail(slug) => show::run(api, &slug).await,
        Route::Create => create::run(api, CreateArgs::default()).await,
    }
}
