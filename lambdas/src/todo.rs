use aws_config::BehaviorVersion;
use lambda_http::{run, service_fn, Error as LambdaError, Request as LambdaRequest};
use tracing::info;

mod common;
use crate::common::config::{Config, StoreBackend};
use crate::common::errors::Error;
use crate::common::router::process_request;
use crate::common::store::{DynamoItemStore, ItemStore, MemoryItemStore};

async fn build_store(config: &Config) -> Box<dyn ItemStore> {
    match config.backend {
        StoreBackend::DynamoDb => {
            info!("Using DynamoDB table {}", config.table_name);
            let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
            let client = aws_sdk_dynamodb::Client::new(&aws_config);
            Box::new(DynamoItemStore::new(
                client,
                &config.table_name,
                &config.key_field,
            ))
        }
        StoreBackend::Memory => {
            info!("Using in-memory store");
            Box::new(MemoryItemStore::new())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .without_time() // CloudWatch will add the ingestion time
        .with_target(false)
        .init();

    let config = Config::from_env()?;
    let store = build_store(&config).await;
    let store = store.as_ref();
    let config = &config;

    run(service_fn(move |request: LambdaRequest| async move {
        let result = process_request(request, store, config).await;

        match result {
            Ok(val) => Ok(val),
            Err(Error::HttpError(val)) => Ok(val),
            Err(Error::LambdaError(err)) => Err(err),
        }
    }))
    .await
}
