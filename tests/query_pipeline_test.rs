use reliquary::{
    LocalStorage, QueryPipeline, ReliquaryConfig, ReliquaryError, ReportEngine,
    NO_RESULTS_MESSAGE, OVERFLOW_MESSAGE,
};
use tempfile::TempDir;

fn write_query(dir: &TempDir, body: &str) {
    std::fs::write(dir.path().join("query.json"), body).unwrap();
}

fn config(toml: &str) -> ReliquaryConfig {
    ReliquaryConfig::from_toml_str(toml).unwrap()
}

#[tokio::test]
async fn test_block_reply_from_file() {
    let temp_dir = TempDir::new().unwrap();
    write_query(
        &temp_dir,
        r#"[
            {"kind": "Relic", "name": "A1", "tier": "Axi", "vaulted": true},
            {"kind": "Mod", "name": "Serration"},
            {"kind": "prime parts", "name": "Braton Prime Stock", "ducats": 15},
            {"type": "Relic", "name": "Lith Z9"}
        ]"#,
    );

    let pipeline = QueryPipeline::new(
        LocalStorage::new(temp_dir.path()),
        config("[source]\npath = \"query.json\"\n"),
    );
    let reply = ReportEngine::new(pipeline).run().await.unwrap();

    assert_eq!(
        reply,
        "```\nAxi A1 (Vaulted)\n\nBraton Prime Stock\n  Ducats: 15\n```"
    );
}

#[tokio::test]
async fn test_list_reply_is_written_to_output() {
    let temp_dir = TempDir::new().unwrap();
    let records: Vec<_> = (1..=5)
        .map(|i| serde_json::json!({"kind": "Prime Part", "name": format!("Part {}", i)}))
        .collect();
    write_query(&temp_dir, &serde_json::to_string(&records).unwrap());

    let pipeline = QueryPipeline::new(
        LocalStorage::new(temp_dir.path()),
        config(
            r#"
[source]
path = "query.json"

[output]
format = "list"
path = "replies/reply.txt"
"#,
        ),
    );
    let reply = ReportEngine::new(pipeline).run().await.unwrap();

    let lines: Vec<&str> = reply.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[5], OVERFLOW_MESSAGE);

    let written = std::fs::read_to_string(temp_dir.path().join("replies/reply.txt")).unwrap();
    assert_eq!(written, reply);
}

#[tokio::test]
async fn test_null_query_gives_fallback() {
    let temp_dir = TempDir::new().unwrap();
    write_query(&temp_dir, "null");

    let pipeline = QueryPipeline::new(
        LocalStorage::new(temp_dir.path()),
        config("[source]\npath = \"query.json\"\n\n[output]\nformat = \"list\"\n"),
    );
    let reply = ReportEngine::new(pipeline).run().await.unwrap();
    assert_eq!(reply, NO_RESULTS_MESSAGE);
}

#[tokio::test]
async fn test_json_output() {
    let temp_dir = TempDir::new().unwrap();
    write_query(
        &temp_dir,
        r#"[{"kind": "relic", "name": "Lith K2", "rewards": ["Forma Blueprint"]}]"#,
    );

    let pipeline = QueryPipeline::new(
        LocalStorage::new(temp_dir.path()),
        config("[source]\npath = \"query.json\"\n\n[output]\nformat = \"json\"\n"),
    );
    let reply = ReportEngine::new(pipeline).run().await.unwrap();

    let value: serde_json::Value = serde_json::from_str(&reply).unwrap();
    assert_eq!(value[0]["kind"], "Relic");
    assert_eq!(value[0]["rewards"][0], "Forma Blueprint");
}

#[tokio::test]
async fn test_malformed_record_fails_under_fail_policy() {
    let temp_dir = TempDir::new().unwrap();
    write_query(&temp_dir, r#"[{"kind": "Relic", "vaulted": "no"}]"#);

    let pipeline = QueryPipeline::new(
        LocalStorage::new(temp_dir.path()),
        config("[source]\npath = \"query.json\"\n\n[classify]\non_malformed = \"fail\"\n"),
    );
    let err = ReportEngine::new(pipeline).run().await.unwrap_err();
    assert!(matches!(err, ReliquaryError::MalformedRecord { .. }));
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
async fn test_non_array_query_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    write_query(&temp_dir, r#"{"kind": "Relic"}"#);

    let pipeline = QueryPipeline::new(
        LocalStorage::new(temp_dir.path()),
        config("[source]\npath = \"query.json\"\n"),
    );
    assert!(matches!(
        ReportEngine::new(pipeline).run().await,
        Err(ReliquaryError::ProcessingError { .. })
    ));
}

#[tokio::test]
async fn test_missing_query_file() {
    let temp_dir = TempDir::new().unwrap();
    let pipeline = QueryPipeline::new(
        LocalStorage::new(temp_dir.path()),
        config("[source]\npath = \"absent.json\"\n"),
    );
    let err = ReportEngine::new(pipeline).run().await.unwrap_err();
    assert!(matches!(err, ReliquaryError::IoError(_)));
}
