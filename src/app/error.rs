//! Startup failures

use thiserror::Error;

/// Errors that stop the game before the first frame
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to create event loop")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window")]
    Window(#[from] winit::error::OsError),

    #[error("failed to start the renderer runtime")]
    Runtime(#[from] std::io::Error),

    #[error("failed to create renderer")]
    Renderer(#[source] anyhow::Error),
}
