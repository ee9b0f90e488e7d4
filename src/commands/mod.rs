pub mod create;
pub mod delete;
pub mod list;
pub mod open;
pub mod show;

use std::future::Future;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use meetups_core::pages::Liveness;

fn create_spinner(message: &str) -> ProgressBar {
    let style = ProgressStyle::default_spinner()
        .tick_strings(&["-", "\\", "|", "/"])
        .template("{msg} {spinner}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(style);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Run a submit (create/delete) with a spinner.
async fn with_spinner<F: Future>(message: &str, work: F) -> F::Output {
    let spinner = create_spinner(message);
    let output = work.await;
    spinner.finish_and_clear();
    output
}

/// Load a view with a spinner. Ctrl-C leaves the view: the request keeps
/// running to completion, its result is thrown away and `None` is returned.
async fn load_view<F>(message: &str, load: F) -> Option<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    let leave = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };
    load_view_until(message, load, leave).await
}

/// Like `load_view`, leaving the view once `leave` resolves.
async fn load_view_until<F, L>(message: &str, load: F, leave: L) -> Option<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
    L: Future<Output = ()>,
{
    let spinner = create_spinner(message);
    let liveness = Liveness::new();

    let mut task = tokio::spawn({
        let liveness = liveness.clone();
        async move { liveness.apply(load).await }
    });

    let joined = tokio::select! {
        joined = &mut task => joined,
        _ = leave => {
            liveness.unmount();
            spinner.set_message("Leaving...");
            task.await
        }
    };

    spinner.finish_and_clear();
    joined.unwrap_or_else(|e| {
        log::warn!("View load stopped: {e}");
        None
    })
}
