use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;
use chrono::{DateTime, Utc};
use todo_domain::{DeleteResult, Todo, TodoId};

use crate::{new_todo, StoreError, TodoStore};

/// DynamoDB 実装
///
/// パーティションキー `id` のみの 1 テーブルを所有する。一覧は scan、
/// 削除は `ReturnValues=ALL_OLD` で旧アイテムの有無から件数を導出する。
#[derive(Clone)]
pub struct DynamoTodoStore {
    client: Client,
    table_name: String,
}

impl DynamoTodoStore {
    /// SDK の既定設定でクライアントを構築する。
    /// `endpoint_url` があればローカルストア等に向ける。
    pub async fn connect(table_name: &str, endpoint_url: Option<&str>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = match endpoint_url {
            Some(url) => {
                let conf = aws_sdk_dynamodb::config::Builder::from(&config)
                    .endpoint_url(url)
                    .build();
                Client::from_conf(conf)
            }
            None => Client::new(&config),
        };
        Self {
            client,
            table_name: table_name.to_string(),
        }
    }
}

#[async_trait]
impl TodoStore for DynamoTodoStore {
    async fn list_all(&self) -> Result<Vec<Todo>, StoreError> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        Ok(result.items().iter().filter_map(item_to_todo).collect())
    }

    async fn create(&self, title: Option<String>) -> Result<Todo, StoreError> {
        let todo = new_todo(title);

        let mut put = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .item("id", AttributeValue::S(todo.id.as_str().to_string()))
            .item("created_at", AttributeValue::S(todo.created_at.to_rfc3339()))
            .item("updated_at", AttributeValue::S(todo.updated_at.to_rfc3339()));
        if let Some(title) = &todo.title {
            put = put.item("title", AttributeValue::S(title.clone()));
        }

        put.send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        Ok(todo)
    }

    async fn delete_by_id(&self, id: &str) -> Result<DeleteResult, StoreError> {
        let result = self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        let deleted_count = u64::from(result.attributes().is_some());
        Ok(DeleteResult { deleted_count })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.client
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(())
    }
}

fn item_to_todo(item: &HashMap<String, AttributeValue>) -> Option<Todo> {
    Some(Todo {
        id: TodoId::from(item.get("id")?.as_s().ok()?.clone()),
        title: item.get("title").and_then(|v| v.as_s().ok()).cloned(),
        created_at: parse_timestamp(item.get("created_at")?)?,
        updated_at: parse_timestamp(item.get("updated_at")?)?,
    })
}

fn parse_timestamp(value: &AttributeValue) -> Option<DateTime<Utc>> {
    let raw = value.as_s().ok()?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
