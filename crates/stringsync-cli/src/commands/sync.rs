use anyhow::Result;

use stringsync::{CancelToken, ProgressHandler, StringsRepo};

/// Prints progress to stderr and the outcome to stdout.
struct ConsoleProgress;

impl ProgressHandler for ConsoleProgress {
    fn on_update(&self, title: &str, detail: &str) {
        eprintln!("{title}: {detail}");
    }

    fn on_finished(&self, message: Option<&str>, success: bool) {
        match (message, success) {
            (None, true) => println!("Sync complete."),
            (Some(msg), true) => println!("{msg}"),
            (Some(msg), false) => eprintln!("sync failed: {msg}"),
            (None, false) => eprintln!("sync failed"),
        }
    }
}

/// Run a sync, cancelling cooperatively on Ctrl-C.
pub async fn run(mut repo: StringsRepo, overwrite: bool) -> Result<()> {
    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
    }

    let report = repo.sync(overwrite, &ConsoleProgress, &cancel).await;

    for failure in &report.failures {
        eprintln!("warning: {}: {}", failure.locale, failure.reason);
    }

    if !report.downloaded.is_empty() {
        let tags: Vec<&str> = report
            .downloaded
            .iter()
            .map(|locale| locale.as_str())
            .collect();
        println!(
            "Downloaded {} locale(s): {}",
            tags.len(),
            tags.join(", ")
        );
    }

    Ok(())
}
