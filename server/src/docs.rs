//! API documentation served at `/api-docs`.
//!
//! The OpenAPI document is assembled in code next to the router it
//! describes, so the schema cannot drift into a separately maintained file.
//! Served as plain JSON; rendering is left to whatever UI the reader
//! prefers.

use axum::Json;
use serde_json::{json, Value};

/// OpenAPI 3.0 description of the HTTP surface.
pub async fn api_docs() -> Json<Value> {
    Json(openapi())
}

fn openapi() -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Todo API",
            "version": "1.0.0",
            "description": "API documentation for managing todos"
        },
        "tags": [
            { "name": "Todos", "description": "Operations related to todo items" }
        ],
        "components": {
            "schemas": {
                "Todo": {
                    "type": "object",
                    "properties": {
                        "id": { "description": "The unique ID of the todo; an integer or a UUID string depending on server configuration" },
                        "title": { "type": "string", "description": "The title of the todo" },
                        "completed": { "type": "boolean", "description": "Whether the todo is completed" },
                        "created_at": { "type": "string", "format": "date-time", "description": "Creation timestamp" },
                        "priority": { "type": "string", "enum": ["LOW", "MEDIUM", "HIGH"], "description": "The priority of the todo" }
                    },
                    "required": ["id", "title", "completed", "created_at", "priority"]
                },
                "NewTodo": {
                    "type": "object",
                    "properties": {
                        "title": { "type": "string", "description": "The title of the todo" },
                        "completed": { "type": "boolean", "default": false },
                        "created_at": { "type": "string", "format": "date-time", "nullable": true, "description": "Optional creation timestamp; stamped server-side when omitted" },
                        "priority": { "type": "string", "enum": ["LOW", "MEDIUM", "HIGH"], "default": "MEDIUM" }
                    },
                    "required": ["title"]
                },
                "Error": {
                    "type": "object",
                    "properties": {
                        "error": { "type": "string" }
                    },
                    "required": ["error"]
                }
            }
        },
        "paths": {
            "/todos": {
                "get": {
                    "tags": ["Todos"],
                    "summary": "Retrieve todos",
                    "parameters": [
                        {
                            "name": "_limit",
                            "in": "query",
                            "required": false,
                            "schema": { "type": "integer", "default": 5 },
                            "description": "Maximum number of todos to return, in insertion order"
                        }
                    ],
                    "responses": {
                        "200": { "description": "List of todos" }
                    }
                },
                "post": {
                    "tags": ["Todos"],
                    "summary": "Create a new todo",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/NewTodo" }
                            }
                        }
                    },
                    "responses": {
                        "201": { "description": "Todo created successfully" },
                        "400": { "description": "Title missing or empty" }
                    }
                }
            },
            "/todos/scroll": {
                "get": {
                    "tags": ["Todos"],
                    "summary": "Retrieve todos with cursor pagination",
                    "parameters": [
                        {
                            "name": "cursor",
                            "in": "query",
                            "required": false,
                            "schema": { "type": "string" },
                            "description": "Id of the last todo of the previous page"
                        },
                        {
                            "name": "limit",
                            "in": "query",
                            "required": false,
                            "schema": { "type": "integer", "default": 5 }
                        }
                    ],
                    "responses": {
                        "200": { "description": "Page of todos with nextCursor and hasNextPage" },
                        "400": { "description": "Malformed cursor" }
                    }
                }
            },
            "/todos/{id}": {
                "patch": {
                    "tags": ["Todos"],
                    "summary": "Toggle completion of a todo",
                    "parameters": [
                        {
                            "name": "id",
                            "in": "path",
                            "required": true,
                            "schema": { "type": "string" }
                        }
                    ],
                    "responses": {
                        "200": { "description": "Updated todo with completed flipped" },
                        "404": { "description": "Todo not found" }
                    }
                },
                "delete": {
                    "tags": ["Todos"],
                    "summary": "Delete a todo",
                    "parameters": [
                        {
                            "name": "id",
                            "in": "path",
                            "required": true,
                            "schema": { "type": "string" }
                        }
                    ],
                    "responses": {
                        "204": { "description": "Todo deleted successfully" },
                        "404": { "description": "Todo not found" }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_covers_every_route() {
        let doc = openapi();
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/todos"));
        assert!(paths.contains_key("/todos/scroll"));
        assert!(paths.contains_key("/todos/{id}"));
    }

    #[test]
    fn document_contains_no_credentials() {
        let raw = openapi().to_string();
        assert!(!raw.contains("api-key"));
        assert!(!raw.contains("apiKey"));
    }
}
