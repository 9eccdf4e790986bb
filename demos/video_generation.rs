//! Video generation example.
//!
//! This example demonstrates:
//! - Building the orchestrator from environment variables
//! - Submitting a text-to-video job
//! - A caller-owned polling loop over the returned handle
//! - Reading the final video URI or failure
//!
//! # Usage
//!
//! ```bash
//! export API_KEY="your-api-key-here"
//! cargo run --example video_generation
//! ```

use integrations_hero_genai::{
    Orchestrator, OperationState, VideoAspectRatio, DEFAULT_POLL_INTERVAL,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let orchestrator = Orchestrator::from_env()?;

    println!("Submitting video job...");
    let mut handle = orchestrator
        .generate_video_from_text(
            "A slow sunrise over a calm mountain lake, gentle mist on the water",
            VideoAspectRatio::Landscape,
        )
        .await?;
    println!("Operation: {}", handle.id());

    while !handle.is_done() {
        tokio::time::sleep(DEFAULT_POLL_INTERVAL).await;
        handle = orchestrator.poll_video_operation(&handle).await?;
        println!("  state: {}", handle.state().as_str());
    }

    match handle.state() {
        OperationState::Resolved => {
            if let Some(video) = handle.result() {
                println!("Video ready: {}", video.uri);
            }
        }
        OperationState::Failed => {
            if let Err(e) = handle.outcome() {
                println!("Video generation failed: {}", e);
            }
        }
        OperationState::Pending => {}
    }

    Ok(())
}
