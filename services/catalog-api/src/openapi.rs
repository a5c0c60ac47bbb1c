
use serde_json::{json, Value};

fn ok(description: &str, schema: Value) -> Value {
    json!({ "description": description, "content": { "application/json": { "schema": schema } } })
}

fn error_ref() -> Value {
    ok("lookup failed", json!({ "$ref": "#/components/schemas/Error" }))
}

fn category_param() -> Value {
    json!({ "name": "category", "in": "path", "required": true, "schema": { "type": "string" },
            "description": "Category key, matched case-insensitively" })
}

pub fn openapi_spec() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Product API",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/": { "get": { "summary": "Service info", "responses": {
                "200": ok("service metadata", json!({ "type": "object" }))
            } } },
            "/products": { "get": { "summary": "All products", "responses": {
                "200": ok("every product tagged with its category", json!({
                    "type": "array", "items": { "$ref": "#/components/schemas/Product" }
                }))
            } } },
            "/products/{category}": { "get": {
                "summary": "Products in one category",
                "parameters": [category_param()],
                "responses": {
                    "200": ok("products in declaration order", json!({
                        "type": "array", "items": { "$ref": "#/components/schemas/Product" }
                    })),
                    "404": error_ref()
                }
            } },
            "/product/{category}/{id}": { "get": {
                "summary": "One product by category and id",
                "parameters": [
                    category_param(),
                    { "name": "id", "in": "path", "required": true,
                      "schema": { "type": "integer", "minimum": 0 } }
                ],
                "responses": {
                    "200": ok("the product", json!({ "$ref": "#/components/schemas/Product" })),
                    "400": error_ref(),
                    "404": error_ref()
                }
            } },
            "/categories": { "get": { "summary": "Category keys", "responses": {
                "200": ok("categories and their count", json!({
                    "type": "object",
                    "properties": {
                        "categories": { "type": "array", "items": { "type": "string" } },
                        "count": { "type": "integer" }
                    }
                }))
            } } },
            "/health": { "get": { "summary": "Liveness", "responses": {
                "200": ok("healthy", json!({
                    "type": "object", "properties": { "status": { "type": "string" } }
                }))
            } } }
        },
        "components": { "schemas": {
            "Product": {
                "type": "object",
                "required": ["id", "name", "price", "brand", "specs", "category"],
                "properties": {
                    "id": { "type": "integer" },
                    "name": { "type": "string" },
                    "price": { "type": "number" },
                    "brand": { "type": "string" },
                    "specs": { "type": "object", "additionalProperties": true },
                    "category": { "type": "string" }
                }
            },
            "Error": {
                "type": "object",
                "required": ["error"],
                "properties": {
                    "error": { "type": "string" },
                    "available_categories": { "type": "array", "items": { "type": "string" } }
                }
            }
        } }
    })
}
