#[tokio::main]
async fn main() -> anyhow::Result<()> {
    lingo_review_backend::run().await
}
