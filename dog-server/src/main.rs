use std::sync::Arc;

use anyhow::Result;
use dog_server::ServerConfig;
use dog_store::{DogStore, NewDog};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ServerConfig::from_env();
    let store = Arc::new(DogStore::new());

    // Start with one dog already created.
    store
        .create(NewDog {
            breed: "Whippet".to_string(),
            name: "Comet".to_string(),
        })
        .await?;

    let router = dog_server::build(Arc::clone(&store));

    let addr = config.addr();
    println!("[dog-server] listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
