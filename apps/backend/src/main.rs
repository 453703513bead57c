#[tokio::main]
async fn main() -> anyhow::Result<()> {
    flashcard_hints_backend::run().await
}
