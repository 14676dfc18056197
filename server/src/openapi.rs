//! OpenAPI 3.1 document for the todo API, served at GET /openapi.json.
//!
//! Hand-maintained rather than generated; nothing at runtime depends on it.

use axum::Json;
use serde_json::{json, Value};

pub async fn openapi_spec() -> Json<Value> {
    Json(json!({
        "openapi": "3.1.0",
        "info": {
            "title": "Todo API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Minimal todo-list API backed by an in-memory record store."
        },
        "components": {
            "schemas": {
                "Todo": {
                    "type": "object",
                    "required": ["id", "name", "isComplete"],
                    "properties": {
                        "id": { "type": "integer", "format": "int64", "readOnly": true },
                        "name": { "type": "string" },
                        "isComplete": { "type": "boolean" }
                    }
                },
                "CreateTodo": {
                    "type": "object",
                    "required": ["name"],
                    "properties": {
                        "name": { "type": "string" },
                        "isComplete": { "type": "boolean", "default": false }
                    }
                },
                "UpdateTodo": {
                    "type": "object",
                    "required": ["name", "isComplete"],
                    "properties": {
                        "name": { "type": "string" },
                        "isComplete": { "type": "boolean" }
                    }
                }
            }
        },
        "paths": {
            "/todoitems": {
                "get": {
                    "operationId": "listTodos",
                    "summary": "List all todos",
                    "responses": {
                        "200": {
                            "description": "All todo records",
                            "content": {
                                "application/json": {
                                    "schema": { "type": "array", "items": { "$ref": "#/components/schemas/Todo" } }
                                }
                            }
                        }
                    }
                },
                "post": {
                    "operationId": "createTodo",
                    "summary": "Create a todo",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/CreateTodo" }
                            }
                        }
                    },
                    "responses": {
                        "201": {
                            "description": "Created todo",
                            "headers": {
                                "Location": {
                                    "description": "URL of the created todo",
                                    "schema": { "type": "string" }
                                }
                            },
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Todo" }
                                }
                            }
                        }
                    }
                }
            },
            "/todoitems/complete": {
                "get": {
                    "operationId": "listCompletedTodos",
                    "summary": "List completed todos",
                    "responses": {
                        "200": {
                            "description": "Todos with isComplete set",
                            "content": {
                                "application/json": {
                                    "schema": { "type": "array", "items": { "$ref": "#/components/schemas/Todo" } }
                                }
                            }
                        }
                    }
                }
            },
            "/todoitems/{id}": {
                "get": {
                    "operationId": "getTodo",
                    "summary": "Get a todo by id",
                    "parameters": [{ "name": "id", "in": "path", "required": true, "schema": { "type": "integer", "format": "int64" } }],
                    "responses": {
                        "200": {
                            "description": "The todo",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Todo" }
                                }
                            }
                        },
                        "404": { "description": "No todo with that id" }
                    }
                },
                "put": {
                    "operationId": "updateTodo",
                    "summary": "Overwrite a todo's name and isComplete",
                    "parameters": [{ "name": "id", "in": "path", "required": true, "schema": { "type": "integer", "format": "int64" } }],
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/UpdateTodo" }
                            }
                        }
                    },
                    "responses": {
                        "204": { "description": "Updated" },
                        "404": { "description": "No todo with that id" }
                    }
                },
                "delete": {
                    "operationId": "deleteTodo",
                    "summary": "Delete a todo",
                    "parameters": [{ "name": "id", "in": "path", "required": true, "schema": { "type": "integer", "format": "int64" } }],
                    "responses": {
                        "204": { "description": "Deleted" },
                        "404": { "description": "No todo with that id" }
                    }
                }
            }
        }
    }))
}
