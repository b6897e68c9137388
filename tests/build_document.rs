use markswag::{
    ApiKeyLocation, ApiMarker, ApiRegistration, BodyFieldMarker, DataType, DocumentBuilder,
    HttpMethod, InfoMarker, LicenseMarker, MethodRegistration, OperationMarker, ParamDeclaration,
    PathParamMarker, QueryParamMarker, ResponseMarker, SecurityMarker, SecurityScheme,
    SwaggerDocument,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::fs;

fn user_service() -> markswag::DocumentBuild {
    DocumentBuilder::new(
        InfoMarker::new("User Service", "1.0.0")
            .license(LicenseMarker::new("MIT").url("https://opensource.org/licenses/MIT")),
    )
    .security_definition(
        "api_key",
        SecurityScheme::ApiKey {
            name: "X-API-Key".to_string(),
            location: ApiKeyLocation::Header,
        },
    )
    .api(
        ApiRegistration::new(
            ApiMarker::new()
                .base_path("/v1")
                .tag("users")
                .produces("application/json")
                .consumes("application/json")
                .security(SecurityMarker::new("api_key")),
        )
        .method(
            MethodRegistration::new(
                "api.Users#get_user",
                OperationMarker::new(HttpMethod::Get, "users/{id}")
                    .summary("Fetch a user")
                    .consumes_nothing(),
            )
            .parameter(ParamDeclaration::path(
                "id",
                PathParamMarker::new().data_type(DataType::Long),
            ))
            .response(ResponseMarker::new(200, "OK").schema("User"))
            .response(ResponseMarker::new(404, "Not Found")),
        ),
    )
    .build()
    .unwrap()
}

#[test]
fn test_full_document_json() {
    let build = user_service();
    assert!(build.diagnostics.is_empty());

    let rendered = SwaggerDocument::from_document(&build.document)
        .to_json()
        .unwrap();

    let expected = r##"{
  "swagger": "2.0",
  "info": {
    "title": "User Service",
    "version": "1.0.0",
    "license": {
      "name": "MIT",
      "url": "https://opensource.org/licenses/MIT"
    }
  },
  "paths": {
    "/v1/users/{id}": {
      "get": {
        "tags": [
          "users"
        ],
        "summary": "Fetch a user",
        "produces": [
          "application/json"
        ],
        "parameters": [
          {
            "name": "id",
            "in": "path",
            "required": true,
            "type": "integer",
            "format": "int64"
          }
        ],
        "responses": {
          "200": {
            "description": "OK",
            "schema": {
              "$ref": "#/definitions/User"
            }
          },
          "404": {
            "description": "Not Found"
          }
        },
        "security": [
          {
            "api_key": []
          }
        ]
      }
    }
  },
  "securityDefinitions": {
    "api_key": {
      "type": "apiKey",
      "name": "X-API-Key",
      "in": "header"
    }
  }
}"##;

    assert_eq!(rendered, expected);
}

#[test]
fn test_body_security_and_diagnostics() {
    let build = DocumentBuilder::new(InfoMarker::new("User Service", "1.0.0"))
        .api(
            ApiRegistration::new(ApiMarker::new().tag("users").consumes("application/json"))
                .method(
                    MethodRegistration::new(
                        "api.Users#create_user",
                        OperationMarker::new(HttpMethod::Post, "users"),
                    )
                    .parameter(ParamDeclaration::query(
                        "notify",
                        QueryParamMarker::new().data_type(DataType::Boolean),
                    ))
                    .body_field(BodyFieldMarker::new("name").required())
                    .body_field(BodyFieldMarker::new("email"))
                    .response(ResponseMarker::new(200, "stale"))
                    .response(ResponseMarker::new(201, "Created"))
                    .response(ResponseMarker::new(200, "OK"))
                    .security(SecurityMarker::new("oauth").scope("write"))
                    .extra_security(SecurityMarker::new("api_key")),
                )
                .method(MethodRegistration::new(
                    "api.Users#health",
                    OperationMarker::new(HttpMethod::Get, "health"),
                )),
        )
        .build()
        .unwrap();

    // The health method has no response markers.
    assert_eq!(build.diagnostics.len(), 1);
    assert_eq!(build.diagnostics.warnings()[0].target, "api.Users#health");

    let rendered = SwaggerDocument::from_document(&build.document)
        .to_json()
        .unwrap();
    let doc: Value = serde_json::from_str(&rendered).unwrap();

    let post = &doc["paths"]["/users"]["post"];
    assert_eq!(post["tags"], json!(["users"]));
    assert_eq!(post["consumes"], json!(["application/json"]));

    assert_eq!(post["parameters"][0]["name"], "notify");
    assert_eq!(post["parameters"][0]["in"], "query");
    assert_eq!(post["parameters"][0]["required"], false);
    assert_eq!(post["parameters"][0]["type"], "boolean");

    assert_eq!(post["parameters"][1]["name"], "body");
    assert_eq!(post["parameters"][1]["in"], "body");
    assert_eq!(
        post["parameters"][1]["schema"],
        json!({
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "email": {"type": "string"}
            },
            "required": ["name"]
        })
    );

    // Duplicate 200 overwrote in place; declaration order preserved.
    assert_eq!(post["responses"]["200"]["description"], "OK");
    let codes: Vec<&String> = post["responses"].as_object().unwrap().keys().collect();
    assert_eq!(codes, vec!["200", "201"]);

    assert_eq!(
        post["security"],
        json!([{"oauth": ["write"]}, {"api_key": []}])
    );

    // No responses serializes as an empty mapping.
    assert_eq!(doc["paths"]["/health"]["get"]["responses"], json!({}));
}

#[test]
fn test_yaml_round_trip() {
    let build = user_service();
    let swagger = SwaggerDocument::from_document(&build.document);

    let yaml = swagger.to_yaml().unwrap();
    assert!(yaml.contains("swagger: '2.0'"));
    assert!(yaml.contains("'200':"));
    assert!(yaml.contains("/v1/users/{id}:"));

    let parsed: SwaggerDocument = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed, swagger);
}

#[test]
fn test_write_to_files() {
    let build = user_service();
    let swagger = SwaggerDocument::from_document(&build.document);

    let dir = tempfile::tempdir().unwrap();
    let yaml_path = dir.path().join("swagger.yml");
    let json_path = dir.path().join("swagger.json");

    swagger.write_yaml(&yaml_path).unwrap();
    swagger.write_json(&json_path).unwrap();

    assert_eq!(
        fs::read_to_string(&yaml_path).unwrap(),
        swagger.to_yaml().unwrap()
    );
    assert_eq!(
        fs::read_to_string(&json_path).unwrap(),
        swagger.to_json().unwrap()
    );
}
