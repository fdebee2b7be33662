//! Helpers shared by the schema integration tests

#![allow(dead_code)]

use async_graphql::{ObjectType, Request, Schema, SubscriptionType, Variables};
use serde_json::{Value, json};

const TYPE_FIELDS: &str = r#"
query ($name: String!) {
  __type(name: $name) {
    fields { name args { name type { ...TypeRef } } type { ...TypeRef } }
  }
}

fragment TypeRef on __Type {
  kind name ofType { kind name ofType { kind name ofType { kind name } } }
}
"#;

/// Execute a document and return the full response as JSON
pub async fn execute<Q, M, S>(schema: &Schema<Q, M, S>, query: &str) -> Value
where
    Q: ObjectType + 'static,
    M: ObjectType + 'static,
    S: SubscriptionType + 'static,
{
    let response = schema.execute(query).await;
    serde_json::to_value(&response).unwrap()
}

/// Execute a document that must succeed and return its `data`
pub async fn data<Q, M, S>(schema: &Schema<Q, M, S>, query: &str) -> Value
where
    Q: ObjectType + 'static,
    M: ObjectType + 'static,
    S: SubscriptionType + 'static,
{
    let response = schema.execute(query).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    response.data.into_json().unwrap()
}

/// Names of the query, mutation and subscription root types
pub async fn root_types<Q, M, S>(schema: &Schema<Q, M, S>) -> Value
where
    Q: ObjectType + 'static,
    M: ObjectType + 'static,
    S: SubscriptionType + 'static,
{
    let result = data(
        schema,
        "{ __schema { queryType { name } mutationType { name } subscriptionType { name } } }",
    )
    .await;
    result["__schema"].clone()
}

/// The `extensions.code` of the first error in a response
pub fn first_error_code(response: &Value) -> Option<&str> {
    response["errors"][0]["extensions"]["code"].as_str()
}

fn render(ty: &Value) -> String {
    match ty["kind"].as_str() {
        Some("NON_NULL") => format!("{}!", render(&ty["ofType"])),
        Some("LIST") => format!("[{}]", render(&ty["ofType"])),
        _ => ty["name"].as_str().unwrap_or_default().to_string(),
    }
}

/// Field signatures of an object type, e.g. `book(id: Int): Book`
pub async fn signatures<Q, M, S>(schema: &Schema<Q, M, S>, type_name: &str) -> Vec<String>
where
    Q: ObjectType + 'static,
    M: ObjectType + 'static,
    S: SubscriptionType + 'static,
{
    let request = Request::new(TYPE_FIELDS)
        .variables(Variables::from_json(json!({ "name": type_name })));
    let response = schema.execute(request).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();

    let mut signatures: Vec<String> = data["__type"]["fields"]
        .as_array()
        .unwrap_or_else(|| panic!("type {type_name} not found"))
        .iter()
        .map(|field| {
            let args: Vec<String> = field["args"]
                .as_array()
                .unwrap()
                .iter()
                .map(|arg| format!("{}: {}", arg["name"].as_str().unwrap(), render(&arg["type"])))
                .collect();
            let args = if args.is_empty() {
                String::new()
            } else {
                format!("({})", args.join(", "))
            };
            format!("{}{}: {}", field["name"].as_str().unwrap(), args, render(&field["type"]))
        })
        .collect();
    signatures.sort();
    signatures
}

/// Sorted copy of expected signatures, for comparison with [`signatures`]
pub fn sorted(expected: &[&str]) -> Vec<String> {
    let mut expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    expected.sort();
    expected
}
