use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use ytinfo::core::{
    decode, decode_and_filter, extract_video_id, fetch_video_info, DumpOptions, DumpSink,
    InfoError, InfoSource, VideoId, VideoInfo,
};

struct CannedSource {
    body: Vec<u8>,
}

#[async_trait]
impl InfoSource for CannedSource {
    async fn fetch(&self, _id: &VideoId) -> Result<Vec<u8>, InfoError> {
        Ok(self.body.clone())
    }
}

fn quiet() -> DumpOptions {
    DumpOptions {
        structured: false,
        json: false,
        sink: DumpSink::Log,
    }
}

fn info_body(player_response: &Value) -> String {
    format!(
        "status=ok&player_response={}",
        urlencoding::encode(&player_response.to_string())
    )
}

#[tokio::test]
async fn test_video_id_extraction() -> Result<()> {
    // Various link shapes and the 11 character fast path
    let test_cases = vec![
        ("https://www.youtube.com/watch?v=dQw4w9WgXcQ", "dQw4w9WgXcQ"),
        ("https://youtu.be/dQw4w9WgXcQ", "dQw4w9WgXcQ"),
        ("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=123", "dQw4w9WgXcQ"),
        ("http://youtu.be/dQw4w9WgXcQ&list=PL123", "dQw4w9WgXcQ"),
        ("dQw4w9WgXcQ", "dQw4w9WgXcQ"),
        ("exactly11!!", "exactly11!!"),
    ];

    for (link, expected_id) in test_cases {
        let id = extract_video_id(link)?;
        assert_eq!(id.as_str(), expected_id, "link: {link}");
    }

    Ok(())
}

#[tokio::test]
async fn test_video_id_extraction_rejects_unknown_links() -> Result<()> {
    for link in ["not-a-link", "https://vimeo.com/123456", "ftp://youtu.be/dQw4w9WgXcQ"] {
        assert!(
            matches!(extract_video_id(link), Err(InfoError::InvalidLink(_))),
            "link: {link}"
        );
    }

    Ok(())
}

#[tokio::test]
async fn test_pipeline_returns_filtered_info() -> Result<()> {
    let player = json!({"streamingData": {"a": 1}, "videoDetails": {"b": 2}});
    let source = CannedSource {
        body: info_body(&player).into_bytes(),
    };

    let info = fetch_video_info(&source, "https://youtu.be/dQw4w9WgXcQ", &quiet()).await?;
    assert_eq!(info.streaming_data, json!({"a": 1}));
    assert_eq!(info.video_details, json!({"b": 2}));

    Ok(())
}

#[tokio::test]
async fn test_pipeline_surfaces_fail_status() -> Result<()> {
    let source = CannedSource {
        body: b"status=fail&errorcode=150".to_vec(),
    };

    let err = fetch_video_info(&source, "dQw4w9WgXcQ", &quiet())
        .await
        .unwrap_err();
    assert!(matches!(err, InfoError::RequestFail));

    Ok(())
}

#[tokio::test]
async fn test_pipeline_surfaces_missing_player_response() -> Result<()> {
    let source = CannedSource {
        body: b"status=ok&foo=bar".to_vec(),
    };

    let err = fetch_video_info(&source, "dQw4w9WgXcQ", &quiet())
        .await
        .unwrap_err();
    assert!(matches!(err, InfoError::MissingField("player_response")));

    Ok(())
}

#[tokio::test]
async fn test_decode_keeps_non_json_values_as_strings() -> Result<()> {
    let raw = decode(b"status=ok&foo=bar&count=42", &quiet())?;
    assert_eq!(raw.get("foo"), Some(&json!("bar")));
    assert_eq!(raw.get("count"), Some(&json!(42)));

    Ok(())
}

#[tokio::test]
async fn test_decode_and_filter_matches_documented_example() -> Result<()> {
    let player = json!({"streamingData": {"a": 1}, "videoDetails": {"b": 2}});
    let info = decode_and_filter(info_body(&player).as_bytes(), &quiet())?;

    let rendered = serde_json::to_value(&info)?;
    assert_eq!(
        rendered,
        json!({"streamingData": {"a": 1}, "videoDetails": {"b": 2}})
    );

    Ok(())
}

#[tokio::test]
async fn test_video_info_round_trips_field_names() -> Result<()> {
    let info = VideoInfo {
        streaming_data: json!({"formats": []}),
        video_details: json!({"title": "Test Video"}),
    };

    let serialized = serde_json::to_string(&info)?;
    assert!(serialized.contains("\"streamingData\""));
    assert!(serialized.contains("\"videoDetails\""));

    let parsed: VideoInfo = serde_json::from_str(&serialized)?;
    assert_eq!(parsed, info);

    Ok(())
}

#[tokio::test]
async fn test_dumps_append_across_pipeline_stages() -> Result<()> {
    use tempfile::tempdir;

    let dir = tempdir()?;
    let dump_path = dir.path().join("dumps.txt");
    let options = DumpOptions {
        structured: true,
        json: true,
        sink: DumpSink::File(dump_path.clone()),
    };

    let player = json!({"streamingData": {"a": 1}, "videoDetails": {"b": 2}});
    let source = CannedSource {
        body: info_body(&player).into_bytes(),
    };

    fetch_video_info(&source, "dQw4w9WgXcQ", &options).await?;

    let content = std::fs::read_to_string(&dump_path)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("STRUCT DATA PROCESS DUMP: "));
    assert!(lines[1].starts_with("JSON DATA PROCESS DUMP: "));
    assert!(lines[2].starts_with("STRUCT DATA FILTERING DUMP: "));
    assert!(lines[3].starts_with("JSON DATA FILTERING DUMP: "));

    // A second run appends instead of truncating.
    fetch_video_info(&source, "dQw4w9WgXcQ", &options).await?;
    let content = std::fs::read_to_string(&dump_path)?;
    assert_eq!(content.lines().count(), 8);

    Ok(())
}

#[tokio::test]
async fn test_fail_status_emits_no_dumps() -> Result<()> {
    use tempfile::tempdir;

    let dir = tempdir()?;
    let dump_path = dir.path().join("dumps.txt");
    let options = DumpOptions {
        structured: true,
        json: true,
        sink: DumpSink::File(dump_path.clone()),
    };

    let source = CannedSource {
        body: b"status=fail".to_vec(),
    };
    let err = fetch_video_info(&source, "dQw4w9WgXcQ", &options)
        .await
        .unwrap_err();
    assert!(matches!(err, InfoError::RequestFail));
    assert!(!dump_path.exists());

    Ok(())
}
