//! Integration tests for the CRUD schema

mod common;

use bookshelf::db::Database;
use bookshelf::graphql::CrudSchema;
use bookshelf::graphql::crud::{self, CrudOptions};
use pretty_assertions::assert_eq;
use serde_json::json;

use common::{data, execute, first_error_code, root_types, signatures, sorted};

fn schema() -> CrudSchema {
    crud::build_schema(Database::crud_catalog(), CrudOptions::default())
}

// ============================================================================
// Schema Surface
// ============================================================================

#[tokio::test]
async fn test_schema_signatures() {
    let schema = schema();

    assert_eq!(
        signatures(&schema, "Query").await,
        sorted(&[
            "book(id: Int): Book",
            "books: [Book]",
            "author(id: Int): Author",
            "authors: [Author]",
        ])
    );
    assert_eq!(
        signatures(&schema, "Mutation").await,
        sorted(&[
            "addBook(name: String!, authorId: Int!): Book",
            "addAuthor(name: String!): Author",
            "updateBook(id: Int!, name: String!, authorId: Int!): Book",
            "updateAuthor(id: Int!, name: String!): Author",
            "deleteBook(id: Int!): String",
            "deleteAuthor(id: Int!): String",
        ])
    );
    assert_eq!(
        signatures(&schema, "Book").await,
        sorted(&["id: Int!", "name: String!", "authorId: Int!", "author: Author"])
    );
    assert_eq!(
        signatures(&schema, "Author").await,
        sorted(&["id: Int!", "name: String!", "books: [Book]"])
    );
}

#[tokio::test]
async fn test_root_types_and_descriptions() {
    let schema = schema();

    assert_eq!(
        root_types(&schema).await,
        json!({
            "queryType": { "name": "Query" },
            "mutationType": { "name": "Mutation" },
            "subscriptionType": null,
        })
    );

    let result = data(
        &schema,
        r#"{ book: __type(name: "Book") { description } author: __type(name: "Author") { description } }"#,
    )
    .await;
    assert_eq!(result["book"]["description"], "This represents a book written by an author");
    assert_eq!(result["author"]["description"], "This represents an author of a book");
}

// ============================================================================
// Queries
// ============================================================================

#[tokio::test]
async fn test_seed_contents() {
    let schema = schema();

    let result = data(&schema, "{ books { id name authorId } authors { id name } }").await;

    let names: Vec<&str> = result["books"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "Harry Potter and the Chamber of Secrets",
            "The Lord of the Rings: The Fellowship of the Ring",
            "The Catcher in the Rye",
            "To Kill a Mockingbird",
            "The Great Gatsby",
            "1984",
            "Pride and Prejudice",
            "The Hobbit",
            "Little Women",
            "Animal Farm",
            "Moby-Dick",
            "The Adventures of Huckleberry Finn",
        ]
    );
    let ids: Vec<i64> = result["books"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, (1..=12).collect::<Vec<_>>());
    assert_eq!(
        result["authors"],
        json!([
            { "id": 1, "name": "J.K. Rowling" },
            { "id": 2, "name": "J.R.R. Tolkien" },
            { "id": 3, "name": "Harper Lee" },
        ])
    );
}

#[tokio::test]
async fn test_book_by_id() {
    let schema = schema();

    let result = data(&schema, "{ book(id: 8) { id name author { name } } }").await;
    assert_eq!(
        result,
        json!({ "book": { "id": 8, "name": "The Hobbit", "author": { "name": "J.R.R. Tolkien" } } })
    );

    let result = data(&schema, "{ missing: book(id: 99) { id } noId: book { id } }").await;
    assert_eq!(result, json!({ "missing": null, "noId": null }));
}

#[tokio::test]
async fn test_author_books() {
    let schema = schema();

    let result = data(&schema, "{ author(id: 3) { name books { id name } } }").await;

    assert_eq!(
        result,
        json!({
            "author": {
                "name": "Harper Lee",
                "books": [
                    { "id": 4, "name": "To Kill a Mockingbird" },
                    { "id": 9, "name": "Little Women" },
                ]
            }
        })
    );
}

#[tokio::test]
async fn test_dangling_author_is_null_without_error() {
    let schema = schema();
    data(&schema, r#"mutation { addBook(name: "Anonymous", authorId: 77) { id } }"#).await;

    let response = execute(&schema, "{ book(id: 13) { id author { name } } }").await;

    assert_eq!(response["data"], json!({ "book": { "id": 13, "author": null } }));
    assert!(response["errors"].as_array().is_none_or(|errors| errors.is_empty()));
}

#[tokio::test]
async fn test_legacy_authors_query_returns_books() {
    let schema = crud::build_schema(
        Database::crud_catalog(),
        CrudOptions {
            legacy_authors_query: true,
        },
    );

    let result = data(&schema, "{ authors { id name } }").await;

    let authors = result["authors"].as_array().unwrap();
    assert_eq!(authors.len(), 12);
    assert_eq!(authors[5], json!({ "id": 6, "name": "1984" }));
}

// ============================================================================
// Mutations
// ============================================================================

#[tokio::test]
async fn test_add_book_then_fetch() {
    let schema = schema();

    let added = data(&schema, r#"mutation { addBook(name: "Dune", authorId: 2) { id name authorId } }"#).await;
    assert_eq!(added, json!({ "addBook": { "id": 13, "name": "Dune", "authorId": 2 } }));

    let fetched = data(&schema, "{ book(id: 13) { id name authorId } }").await;
    assert_eq!(fetched["book"], added["addBook"]);
}

#[tokio::test]
async fn test_add_author_round_trip() {
    let schema = schema();

    let added = data(&schema, r#"mutation { addAuthor(name: "X") { id } }"#).await;
    assert_eq!(added["addAuthor"]["id"], 4);

    let fetched = data(&schema, "{ author(id: 4) { name books { id } } }").await;
    assert_eq!(fetched, json!({ "author": { "name": "X", "books": [] } }));
}

#[tokio::test]
async fn test_update_book_replaces_record() {
    let schema = schema();

    let result = data(
        &schema,
        r#"mutation { updateBook(id: 6, name: "Nineteen Eighty-Four", authorId: 3) { id name authorId } }"#,
    )
    .await;
    assert_eq!(
        result["updateBook"],
        json!({ "id": 6, "name": "Nineteen Eighty-Four", "authorId": 3 })
    );

    let fetched = data(&schema, "{ book(id: 6) { name author { name } } }").await;
    assert_eq!(
        fetched["book"],
        json!({ "name": "Nineteen Eighty-Four", "author": { "name": "Harper Lee" } })
    );
}

#[tokio::test]
async fn test_update_missing_is_not_found() {
    let schema = schema();

    let response = execute(
        &schema,
        r#"mutation { updateBook(id: 50, name: "Nope", authorId: 1) { id } }"#,
    )
    .await;
    assert_eq!(response["data"], json!(null));
    assert_eq!(response["errors"][0]["message"], "Book with id 50 not found");
    assert_eq!(first_error_code(&response), Some("NOT_FOUND"));

    let response = execute(&schema, r#"mutation { updateAuthor(id: 50, name: "Nobody") { id } }"#).await;
    assert_eq!(response["errors"][0]["message"], "Author with id 50 not found");
    assert_eq!(first_error_code(&response), Some("NOT_FOUND"));
}

#[tokio::test]
async fn test_update_author() {
    let schema = schema();

    let result = data(&schema, r#"mutation { updateAuthor(id: 3, name: "Nelle Harper Lee") { id name } }"#).await;

    assert_eq!(result["updateAuthor"], json!({ "id": 3, "name": "Nelle Harper Lee" }));
}

#[tokio::test]
async fn test_delete_book() {
    let schema = schema();

    let result = data(&schema, "mutation { deleteBook(id: 11) }").await;
    assert_eq!(result, json!({ "deleteBook": "Deleted book with ID 11." }));

    let fetched = data(&schema, "{ book(id: 11) { id } books { id } }").await;
    assert_eq!(fetched["book"], json!(null));
    assert_eq!(fetched["books"].as_array().map(Vec::len), Some(11));

    let response = execute(&schema, "mutation { deleteBook(id: 11) }").await;
    assert_eq!(response["errors"][0]["message"], "Book with id 11 not found");
    assert_eq!(first_error_code(&response), Some("NOT_FOUND"));
}

#[tokio::test]
async fn test_delete_author_with_books_is_rejected() {
    let schema = schema();

    let response = execute(&schema, "mutation { deleteAuthor(id: 1) }").await;

    assert_eq!(response["data"], json!(null));
    assert_eq!(
        response["errors"][0]["message"],
        "Author cannot be deleted because they have books."
    );
    assert_eq!(first_error_code(&response), Some("INTEGRITY_VIOLATION"));
    assert_eq!(response["errors"][0]["extensions"]["bookCount"], 5);

    let authors = data(&schema, "{ authors { id } }").await;
    assert_eq!(authors["authors"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_failed_mutation_field_leaves_siblings() {
    let schema = schema();

    let response = execute(
        &schema,
        r#"mutation { added: addAuthor(name: "Mary Shelley") { id } rejected: deleteAuthor(id: 1) }"#,
    )
    .await;

    assert_eq!(response["data"], json!({ "added": { "id": 4 } }));
    assert_eq!(first_error_code(&response), Some("INTEGRITY_VIOLATION"));
    assert_eq!(response["errors"][0]["path"], json!(["rejected"]));
}

#[tokio::test]
async fn test_delete_author_without_books() {
    let schema = schema();
    data(&schema, r#"mutation { addAuthor(name: "Mary Shelley") { id } }"#).await;

    let result = data(&schema, "mutation { deleteAuthor(id: 4) }").await;
    assert_eq!(result, json!({ "deleteAuthor": "Deleted author with ID 4." }));

    let fetched = data(&schema, "{ author(id: 4) { id } }").await;
    assert_eq!(fetched, json!({ "author": null }));

    let response = execute(&schema, "mutation { deleteAuthor(id: 4) }").await;
    assert_eq!(first_error_code(&response), Some("NOT_FOUND"));
}

#[tokio::test]
async fn test_ids_not_reused_after_delete() {
    let schema = schema();
    data(&schema, "mutation { deleteBook(id: 12) }").await;

    let added = data(&schema, r#"mutation { addBook(name: "Emma", authorId: 2) { id } }"#).await;

    assert_eq!(added["addBook"]["id"], 13);
}
