#[tokio::main]
async fn main() -> anyhow::Result<()> {
    repostore::app::run().await
}
