use crate::domain::model::{Customer, CustomerLookup, CustomerPayload};
use crate::domain::ports::{ConfigProvider, CustomerApi};
use crate::utils::error::{CrudError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://172.18.11.210:3100/api/clientes";

/// `CustomerApi` over HTTP/JSON. `base_url` points at the collection
/// (`.../api/clientes`); single records live one path segment below it.
#[derive(Debug, Clone)]
pub struct HttpCustomerApi {
    client: Client,
    base_url: Url,
    headers: HashMap<String, String>,
    timeout: Option<Duration>,
}

impl HttpCustomerApi {
    pub fn new(base_url: &str) -> Result<Self> {
        validate_url("base_url", base_url)?;
        Ok(Self {
            client: Client::new(),
            base_url: Url::parse(base_url)?,
            headers: HashMap::new(),
            timeout: None,
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let mut api = Self::new(config.base_url())?;
        api.headers = config.headers().clone();
        api.timeout = config.timeout();
        Ok(api)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn item_url(&self, id: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CrudError::ConfigError {
                message: format!("Base URL cannot be extended with an id: {}", self.base_url),
            })?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let mut request = self.client.request(method, url);

        // 添加自定義標頭
        for (key, value) in &self.headers {
            request = request.header(key, value);
        }

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        request
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("📡 {} -> {}", response.url(), status);

        if !status.is_success() {
            return Err(CrudError::HttpStatusError {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl CustomerApi for HttpCustomerApi {
    async fn list(&self) -> Result<Vec<Customer>> {
        tracing::debug!("GET {}", self.base_url);
        let response = self
            .send(self.request(Method::GET, self.base_url.clone()))
            .await?;
        let body = response.text().await?;
        let customers: Vec<Customer> = serde_json::from_str(&body)?;
        tracing::debug!("Fetched {} customers", customers.len());
        Ok(customers)
    }

    async fn find(&self, id: &str) -> Result<CustomerLookup> {
        let url = self.item_url(id)?;
        tracing::debug!("GET {}", url);
        let response = self.send(self.request(Method::GET, url)).await?;
        let body = response.text().await?;

        // 空 body 或 null 都視為查無資料
        if body.trim().is_empty() {
            return Ok(CustomerLookup::default());
        }
        let lookup: Option<CustomerLookup> = serde_json::from_str(&body)?;
        Ok(lookup.unwrap_or_default())
    }

    async fn create(&self, payload: &CustomerPayload) -> Result<()> {
        tracing::debug!("POST {}", self.base_url);
        self.send(
            self.request(Method::POST, self.base_url.clone())
                .json(payload),
        )
        .await?;
        Ok(())
    }

    async fn update(&self, id: &str, payload: &CustomerPayload) -> Result<()> {
        let url = self.item_url(id)?;
        tracing::debug!("PUT {}", url);
        self.send(self.request(Method::PUT, url).json(payload)).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let url = self.item_url(id)?;
        tracing::debug!("DELETE {}", url);
        self.send(self.request(Method::DELETE, url)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    struct MockConfig {
        base_url: String,
        headers: HashMap<String, String>,
    }

    impl ConfigProvider for MockConfig {
        fn base_url(&self) -> &str {
            &self.base_url
        }

        fn timeout(&self) -> Option<Duration> {
            Some(Duration::from_secs(5))
        }

        fn headers(&self) -> &HashMap<String, String> {
            &self.headers
        }
    }

    fn payload(name: &str, surname: &str) -> CustomerPayload {
        CustomerPayload {
            name: name.to_string(),
            surname: surname.to_string(),
        }
    }

    #[test]
    fn test_new_rejects_non_http_urls() {
        assert!(HttpCustomerApi::new("ftp://example.com/api/clientes").is_err());
        assert!(HttpCustomerApi::new("").is_err());
    }

    #[test]
    fn test_item_url_appends_encoded_segment() {
        let api = HttpCustomerApi::new("http://localhost:3100/api/clientes/").unwrap();
        assert_eq!(
            api.item_url("65a1").unwrap().as_str(),
            "http://localhost:3100/api/clientes/65a1"
        );
        assert_eq!(
            api.item_url("a/b c").unwrap().as_str(),
            "http://localhost:3100/api/clientes/a%2Fb%20c"
        );
    }

    #[tokio::test]
    async fn test_list_parses_collection() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/clientes");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"_id": "1", "nombre": "Ana", "apellidos": "Pérez"},
                    {"_id": "2", "nombre": "Luis", "apellidos": "Mora"}
                ]));
        });

        let api = HttpCustomerApi::new(&server.url("/api/clientes")).unwrap();
        let customers = api.list().await.unwrap();

        api_mock.assert();
        assert_eq!(customers.len(), 2);
        assert_eq!(customers[1].id, "2");
        assert_eq!(customers[1].surname, "Mora");
    }

    #[tokio::test]
    async fn test_find_returns_lookup() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/clientes/1");
            then.status(200)
                .json_body(serde_json::json!({"_id": "1", "nombre": "Ana", "apellidos": "Pérez"}));
        });

        let api = HttpCustomerApi::new(&server.url("/api/clientes")).unwrap();
        let lookup = api.find("1").await.unwrap();

        api_mock.assert();
        assert_eq!(lookup.found(), Some(payload("Ana", "Pérez")));
    }

    #[tokio::test]
    async fn test_find_treats_empty_and_null_bodies_as_not_found() {
        let server = MockServer::start();
        let empty_mock = server.mock(|when, then| {
            when.method(GET).path("/api/clientes/empty");
            then.status(200);
        });
        let null_mock = server.mock(|when, then| {
            when.method(GET).path("/api/clientes/null");
            then.status(200)
                .header("Content-Type", "application/json")
                .body("null");
        });

        let api = HttpCustomerApi::new(&server.url("/api/clientes")).unwrap();

        assert_eq!(api.find("empty").await.unwrap().found(), None);
        assert_eq!(api.find("null").await.unwrap().found(), None);
        empty_mock.assert();
        null_mock.assert();
    }

    #[tokio::test]
    async fn test_create_posts_json_body_with_config_headers() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/clientes")
                .header("x-api-key", "secret")
                .json_body(serde_json::json!({"nombre": "Ana", "apellidos": "Pérez"}));
            then.status(201)
                .json_body(serde_json::json!({"_id": "9", "nombre": "Ana", "apellidos": "Pérez"}));
        });

        let config = MockConfig {
            base_url: server.url("/api/clientes"),
            headers: HashMap::from([("X-Api-Key".to_string(), "secret".to_string())]),
        };
        let api = HttpCustomerApi::from_config(&config).unwrap();

        api.create(&payload("Ana", "Pérez")).await.unwrap();
        api_mock.assert();
    }

    #[tokio::test]
    async fn test_update_and_delete_target_item_path() {
        let server = MockServer::start();
        let put_mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/clientes/7")
                .json_body(serde_json::json!({"nombre": "Eva", "apellidos": "Ruiz"}));
            then.status(200);
        });
        let delete_mock = server.mock(|when, then| {
            when.method(DELETE).path("/api/clientes/7");
            then.status(204);
        });

        let api = HttpCustomerApi::new(&server.url("/api/clientes")).unwrap();

        api.update("7", &payload("Eva", "Ruiz")).await.unwrap();
        api.delete("7").await.unwrap();

        put_mock.assert();
        delete_mock.assert();
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(DELETE).path("/api/clientes/missing");
            then.status(404);
        });

        let api = HttpCustomerApi::new(&server.url("/api/clientes")).unwrap();
        let err = api.delete("missing").await.unwrap_err();

        api_mock.assert();
        assert!(matches!(err, CrudError::HttpStatusError { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_malformed_list_is_serialization_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/clientes");
            then.status(200).body("{\"not\": \"a list\"}");
        });

        let api = HttpCustomerApi::new(&server.url("/api/clientes")).unwrap();
        let err = api.list().await.unwrap_err();

        assert!(matches!(err, CrudError::SerializationError(_)));
    }
}
