#[tokio::main]
async fn main() -> anyhow::Result<()> {
    textsmith_server::start().await
}
