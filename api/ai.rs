use vercel_runtime::{run, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    mood_ai_api::logging::init();
    run(mood_ai_api::handler::handler).await
}
