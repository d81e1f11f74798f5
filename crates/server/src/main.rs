use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    storefront_server::run().await
}
