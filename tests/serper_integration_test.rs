use local_pack_checker::client::SerperClient;
use local_pack_common::{check_keyword, SearchApi, SearchRequest};

#[tokio::test]
async fn serper_search_integration() {
    let api_key = match std::env::var("SERPER_API_KEY") {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            eprintln!("SERPER_API_KEY not set; skipping integration test");
            return;
        }
    };

    let client = SerperClient::new(api_key).expect("client build failed");
    let response = client
        .search(&SearchRequest::new("pizza near me", Some("Los Angeles, CA")))
        .await
        .expect("request failed");
    assert!(response.is_object());

    let result = check_keyword(&client, "pizza near me", Some("Los Angeles, CA")).await;
    assert!(!result.is_failed(), "check failed: {:?}", result.error);
}
