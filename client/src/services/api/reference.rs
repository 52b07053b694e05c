//! # Reference Data Endpoints
//!
//! Public lookups; these return bare arrays, not the envelope.

use shared::{Country, Currency, Industry};

use super::client::{ApiClient, RequestOptions};
use crate::core::error::Result;

pub async fn countries(client: &ApiClient) -> Result<Vec<Country>> {
    client.get("/reference/countries", RequestOptions::new()).await
}

pub async fn currencies(client: &ApiClient) -> Result<Vec<Currency>> {
    client.get("/reference/currencies", RequestOptions::new()).await
}

pub async fn industries(client: &ApiClient) -> Result<Vec<Industry>> {
    client.get("/reference/industries", RequestOptions::new()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{test_client, MockTransport};
    use serde_json::json;

    #[tokio::test]
    async fn test_countries_are_bare_array_and_public() {
        let transport = MockTransport::new();
        let (client, _, _) = test_client(transport.clone(), true);
        transport.push_json(200, json!([{ "code": "KE", "name": "Kenya", "dialCode": "+254" }]));

        let list = countries(&client).await.unwrap();

        assert_eq!(list[0].dial_code.as_deref(), Some("+254"));
        let request = transport.last_request().unwrap();
        assert!(request.headers.get(reqwest::header::AUTHORIZATION).is_none());
    }
}
