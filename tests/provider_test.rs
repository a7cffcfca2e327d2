use chrono::{DateTime, Utc};
use rpcprovider::config::ProviderSettings;
use rpcprovider::provider::{ProcessError, ProcessResult, RpcProvider};

#[tokio::test]
async fn test_execute_returns_success_envelope() {
    let mut provider = RpcProvider::new(ProviderSettings::default());

    let result = provider.execute().await;

    assert!(result.success);
    assert_eq!(result.message, "Processing completed successfully");
    let data = result.data.expect("success envelope must carry data");
    assert_eq!(data.processed, 1);
    assert_eq!(data.status, "completed");
}

#[test]
fn test_counter_is_sequential_across_invocations() {
    let processed = tokio_test::block_on(async {
        let mut provider = RpcProvider::new(ProviderSettings::default());
        let mut seen = Vec::new();
        for _ in 0..5 {
            let result = provider.execute().await;
            seen.push(result.data.expect("success envelope must carry data").processed);
        }
        seen
    });

    assert_eq!(processed, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_each_provider_instance_counts_independently() {
    let mut first = RpcProvider::new(ProviderSettings::default());
    let mut second = RpcProvider::new(ProviderSettings::default());

    let _ = first.execute().await;
    let result = first.execute().await;
    assert_eq!(result.data.unwrap().processed, 2);

    let result = second.execute().await;
    assert_eq!(result.data.unwrap().processed, 1);
}

#[tokio::test]
async fn test_result_timestamps_are_not_earlier_than_start() {
    let before = Utc::now();
    let mut provider = RpcProvider::new(ProviderSettings::default());

    let result = provider.execute().await;

    assert!(result.timestamp >= before);
    let data = result.data.unwrap();
    let inner = DateTime::parse_from_rfc3339(&data.timestamp)
        .expect("inner timestamp must be RFC 3339")
        .with_timezone(&Utc);
    assert!(inner >= before);
}

#[tokio::test]
async fn test_success_envelope_serializes_with_data() {
    let mut provider = RpcProvider::new(ProviderSettings::default());
    let result = provider.execute().await;

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["message"], "Processing completed successfully");
    assert_eq!(value["data"]["processed"], 1);
    assert_eq!(value["data"]["status"], "completed");
    assert!(value["timestamp"].is_string());
}

#[test]
fn test_failed_envelope_serializes_without_data() {
    let result = ProcessResult::failed(&ProcessError::Failed("boom".to_string()));

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["success"], false);
    assert_eq!(value["message"], "boom");
    assert!(value.get("data").is_none());
}
