use anyhow::Result;
use netsepio_cli::app::handler;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    handler::init().await
}
