use crate::core::errors::WalletError;
use crate::core::models::{TokenEntry, UpstreamNft, UpstreamNftItem};
use crate::infrastructure::upstream::{DataProvider, HttpRpcProvider, RestDataProvider, RpcProvider};
use crate::tests::ADDRESS;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_token_portfolio_is_passed_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/account/tokenPortfolio"))
        .and(query_param("address", ADDRESS))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "data": [
                { "name": "Wrapped Monad", "symbol": "WMON", "balance": "10" },
                { "name": "USD Coin", "symbol": "USDC" }
            ]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = RestDataProvider::new(format!("{}/", server.uri()), None).unwrap();
    let tokens = provider.token_portfolio(ADDRESS).await.unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].name.as_deref(), Some("Wrapped Monad"));
    assert_eq!(tokens[0].extra.get("balance"), Some(&json!("10")));
    assert_eq!(tokens[1], TokenEntry::new("USD Coin", "USDC"));
    assert_eq!(
        serde_json::to_value(&tokens).unwrap(),
        json!([
            { "name": "Wrapped Monad", "symbol": "WMON", "balance": "10" },
            { "name": "USD Coin", "symbol": "USDC" }
        ])
    );
}

#[tokio::test]
async fn test_token_with_null_name_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/account/tokenPortfolio"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "data": [
                { "name": null, "symbol": "XYZ", "balance": "10" },
                { "name": "USD Coin", "symbol": "USDC" }
            ]}
        })))
        .mount(&server)
        .await;

    let provider = RestDataProvider::new(server.uri(), None).unwrap();
    let tokens = provider.token_portfolio(ADDRESS).await.unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].name, None);
    assert_eq!(tokens[0].symbol.as_deref(), Some("XYZ"));
    assert_eq!(tokens[0].extra.get("balance"), Some(&json!("10")));
}

#[tokio::test]
async fn test_missing_data_is_an_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/account/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": { "data": null } })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/account/tokenPortfolio"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": {} })))
        .mount(&server)
        .await;

    let provider = RestDataProvider::new(server.uri(), None).unwrap();
    assert!(provider.transactions(ADDRESS).await.unwrap().is_empty());
    assert!(provider.token_portfolio(ADDRESS).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_nft_payload_with_optional_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/account/nfts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "data": [
                { "name": null, "items": [{ "tokenId": "7" }] },
                { "name": "Monad Nads" }
            ]}
        })))
        .mount(&server)
        .await;

    let provider = RestDataProvider::new(server.uri(), None).unwrap();
    let nfts = provider.nfts(ADDRESS).await.unwrap();

    assert_eq!(
        nfts,
        vec![
            UpstreamNft {
                name: None,
                items: Some(vec![UpstreamNftItem {
                    token_id: Some("7".to_string()),
                }]),
            },
            UpstreamNft {
                name: Some("Monad Nads".to_string()),
                items: None,
            },
        ]
    );
}

#[tokio::test]
async fn test_nft_item_without_token_id_is_accepted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/account/nfts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "data": [
                { "name": "A", "items": [{ "tokenId": null }, {}, { "tokenId": "4" }] }
            ]}
        })))
        .mount(&server)
        .await;

    let provider = RestDataProvider::new(server.uri(), None).unwrap();
    let nfts = provider.nfts(ADDRESS).await.unwrap();

    let items = nfts[0].items.as_ref().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].token_id, None);
    assert_eq!(items[1].token_id, None);
    assert_eq!(items[2].token_id.as_deref(), Some("4"));
}

#[tokio::test]
async fn test_malformed_body_is_upstream_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/account/nfts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let provider = RestDataProvider::new(server.uri(), None).unwrap();
    let result = provider.nfts(ADDRESS).await;
    assert!(matches!(result, Err(WalletError::UpstreamFailure(_))));
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/account/transactions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let provider = RestDataProvider::new(server.uri(), None).unwrap();
    let err = provider.transactions(ADDRESS).await.unwrap_err();
    assert!(matches!(err, WalletError::UpstreamStatus { status: 429, ref body } if body == "rate limited"));
}

#[tokio::test]
async fn test_timeout_is_upstream_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/account/tokenPortfolio"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "result": { "data": [] } }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let provider = RestDataProvider::new(server.uri(), Some(Duration::from_millis(100))).unwrap();
    let result = provider.token_portfolio(ADDRESS).await;
    assert!(matches!(result, Err(WalletError::UpstreamFailure(_))));
}

#[tokio::test]
async fn test_rpc_transaction_count() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({
            "jsonrpc": "2.0",
            "method": "eth_getTransactionCount",
            "params": [ADDRESS, "latest"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0", "id": 1, "result": "0x1a"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = HttpRpcProvider::new(server.uri(), None).unwrap();
    assert_eq!(provider.transaction_count(ADDRESS).await.unwrap(), 26);
}

#[tokio::test]
async fn test_rpc_error_object() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0", "id": 1,
            "error": { "code": -32602, "message": "invalid argument 0: hex string has length 3, want 40 for common.Address" }
        })))
        .mount(&server)
        .await;

    let provider = HttpRpcProvider::new(server.uri(), None).unwrap();
    let err = provider.transaction_count("0x123").await.unwrap_err();
    match err {
        WalletError::Rpc { code, message } => {
            assert_eq!(code, -32602);
            assert!(message.starts_with("invalid argument 0"));
        }
        other => panic!("expected RPC error, got {other:?}"),
    }
}
