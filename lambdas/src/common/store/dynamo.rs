use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::{info, warn};

use super::ItemStore;
use crate::common::errors::StoreError;

pub struct DynamoItemStore {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
    key_field: String,
}

impl DynamoItemStore {
    pub fn new(
        client: aws_sdk_dynamodb::Client,
        table_name: impl Into<String>,
        key_field: impl Into<String>,
    ) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            key_field: key_field.into(),
        }
    }
}

fn name_from_row(row: &HashMap<String, AttributeValue>, key_field: &str) -> Option<String> {
    match row.get(key_field) {
        Some(AttributeValue::S(name)) => Some(name.clone()),
        _ => None,
    }
}

#[async_trait]
impl ItemStore for DynamoItemStore {
    async fn list(&self) -> Result<Vec<String>, StoreError> {
        let mut rows = self
            .client
            .scan()
            .table_name(&self.table_name)
            .into_paginator()
            .items()
            .send();

        let mut names = Vec::new();
        while let Some(row) = rows.next().await {
            let row = row?;
            match name_from_row(&row, &self.key_field) {
                Some(name) => names.push(name),
                None => warn!("Skipping row without string attribute {}", self.key_field),
            }
        }

        info!("Scanned {} items from {}", names.len(), self.table_name);
        Ok(names)
    }

    async fn upsert(&self, name: &str) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .item(&self.key_field, AttributeValue::S(name.into()))
            .send()
            .await?;

        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<(), StoreError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(&self.key_field, AttributeValue::S(name.into()))
            .send()
            .await?;

        Ok(())
    }
}
