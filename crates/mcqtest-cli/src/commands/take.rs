//! Interactive mode: take a test or record an answer key.

use anyhow::Result;

use mcqtest_core::files::SessionFiles;
use mcqtest_core::model::SessionConfig;
use mcqtest_core::session::Session;
use mcqtest_tui::ShellExit;

pub async fn execute(config: SessionConfig, files: SessionFiles) -> Result<()> {
    // Fail before the test starts rather than when saving at the end.
    anyhow::ensure!(
        files.dir().is_dir(),
        "output directory does not exist: {}",
        files.dir().display()
    );

    let mode = if config.key_capture { "answer key" } else { "test" };
    tracing::info!(
        "starting {mode} for questions {}..={} ({} min)",
        config.start_index,
        config.stop_index,
        config.duration_minutes
    );

    match mcqtest_tui::run(Session::new(config, files)).await? {
        ShellExit::Completed { path } => {
            println!("Results saved to: {}", path.display());
        }
        ShellExit::Quit { answered } => {
            println!("Exited before the end ({answered} answered); nothing was saved.");
        }
    }

    Ok(())
}
