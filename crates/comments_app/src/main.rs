mod logging;
mod render;
mod wiring;

use std::io::Write;

use anyhow::Context;
use comments_core::CommentsUiState;
use comments_engine::ClientSettings;
use comments_logging::comments_info;
use log::LevelFilter;
use tokio::sync::watch;

fn main() -> anyhow::Result<()> {
    logging::initialize(LevelFilter::Info);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("comments-io")
        .build()
        .context("failed to build tokio runtime")?;

    let context = wiring::AppContext::new(&runtime, ClientSettings::default())
        .context("failed to configure comments client")?;

    present(&context.controller.state())?;

    let mut updates = context.controller.subscribe();
    let settled = runtime
        .block_on(async move {
            let settled = updates.wait_for(|state| !state.is_loading).await?.clone();
            Ok::<_, watch::error::RecvError>(settled)
        })
        .context("comments controller closed before the fetch resolved")?;

    present(&settled)?;
    comments_info!("done; phase {:?}", settled.phase());
    Ok(())
}

fn present(state: &CommentsUiState) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    for line in render::render(&state.view()) {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}
