//! パイプライン全体のテスト
//!
//! 実ファイルを介した実行シナリオを検証します。

use std::fs;

use tempfile::tempdir;

use crate::errors::TangochoError;
use crate::Pipeline;

/// テスト用の辞書ダンプを組み立てるヘルパー
fn dump(words: &[&str]) -> String {
    format!(
        r#"{{ "version": "test", "words": [ {} ] }}"#,
        words.join(", ")
    )
}

const TABERU: &str = r#"{
    "kanji": [ { "text": "食べる" } ],
    "kana": [ { "text": "たべる" } ],
    "sense": [ { "partOfSpeech": ["v1"], "gloss": [ { "text": "to eat" } ] } ]
}"#;

const IKU: &str = r#"{
    "kanji": [ { "text": "行く" } ],
    "kana": [ { "text": "いく" } ],
    "sense": [ { "partOfSpeech": ["v5k-s"], "gloss": [ { "text": "to go" } ] } ]
}"#;

const IKU_DUPLICATE: &str = r#"{
    "kanji": [ { "text": "行く" } ],
    "kana": [ { "text": "いく" } ],
    "sense": [ { "partOfSpeech": ["v5k-s"], "gloss": [ { "text": "to move" } ] } ]
}"#;

const UNKNOWN_POS: &str = r#"{
    "kana": [ { "text": "ええと" } ],
    "sense": [ { "partOfSpeech": ["int"], "gloss": [ { "text": "um" } ] } ]
}"#;

#[test]
fn test_taberu_end_to_end() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("jmdict.json");
    let output = dir.path().join("words.json");
    fs::write(&input, dump(&[TABERU])).unwrap();

    let summary = Pipeline::new().run(&input, &output).unwrap();
    assert_eq!(summary.entries, 1);
    assert_eq!(summary.emitted, 1);

    let records: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let record = &records[0];
    assert_eq!(record["word"], "食べる");
    assert_eq!(record["reading"], "たべる");
    assert_eq!(record["meaning"], "to eat");
    assert_eq!(record["type"], "verb");
    assert_eq!(record["group"], "ichidan");
    assert_eq!(record["forms"]["negative"], "食べない");
    assert_eq!(record["forms"]["past"], "食べた");
    assert_eq!(record["examples"][0]["japanese"], "毎日、日本語を勉強します。");
    assert_eq!(record["commonness_score"], 1000);
}

#[test]
fn test_duplicate_identity_keeps_first_encounter() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("jmdict.json");
    let output = dir.path().join("words.json");
    fs::write(&input, dump(&[IKU, IKU_DUPLICATE])).unwrap();

    let summary = Pipeline::new().run(&input, &output).unwrap();
    assert_eq!(summary.duplicates, 1);
    assert_eq!(summary.emitted, 1);

    let records: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(records.as_array().unwrap().len(), 1);
    // 初出のレコードが残る（後続の訳語には置き換わらない）
    assert_eq!(records[0]["meaning"], "to go");
}

#[test]
fn test_unknown_pos_is_absent_from_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("jmdict.json");
    let output = dir.path().join("words.json");
    fs::write(&input, dump(&[UNKNOWN_POS, TABERU])).unwrap();

    let summary = Pipeline::new().run(&input, &output).unwrap();
    assert_eq!(summary.unclassified, 1);

    let text = fs::read_to_string(&output).unwrap();
    let records: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(records.as_array().unwrap().len(), 1);
    assert!(!text.contains("unknown"));
    assert!(!text.contains("ええと"));
}

#[test]
fn test_output_is_sorted_and_truncated() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("jmdict.json");
    let output = dir.path().join("words.json");
    let unranked = r#"{ "kanji": [ { "text": "塵" } ], "kana": [ { "text": "ちり" } ],
        "sense": [ { "partOfSpeech": ["n"] } ] }"#;
    let band = r#"{ "kanji": [ { "text": "新聞" } ], "kana": [ { "text": "しんぶん" } ],
        "sense": [ { "partOfSpeech": ["n"] } ], "misc": ["news1"] }"#;
    let top = r#"{ "kanji": [ { "text": "水" } ], "kana": [ { "text": "みず" } ],
        "sense": [ { "partOfSpeech": ["n"] } ], "misc": ["ichi"] }"#;
    fs::write(&input, dump(&[unranked, band, top])).unwrap();

    let summary = Pipeline::new().budget(2).run(&input, &output).unwrap();
    assert_eq!(summary.assembled, 3);
    assert_eq!(summary.emitted, 2);

    let records: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["word"], "水");
    assert_eq!(records[1]["word"], "新聞");
    let scores: Vec<_> = records
        .iter()
        .map(|r| r["commonness_score"].as_u64().unwrap())
        .collect();
    assert!(scores.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_reruns_are_byte_identical() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("jmdict.json");
    fs::write(&input, dump(&[TABERU, IKU, UNKNOWN_POS])).unwrap();

    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");
    Pipeline::new().run(&input, &first).unwrap();
    Pipeline::new().run(&input, &second).unwrap();
    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_missing_source_produces_no_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("no-such-dump.json");
    let output = dir.path().join("words.json");

    let result = Pipeline::new().run(&input, &output);
    assert!(matches!(result, Err(TangochoError::SourceNotFound(_))));
    assert!(!output.exists());
}

#[test]
fn test_malformed_source_produces_no_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("jmdict.json");
    let output = dir.path().join("words.json");
    fs::write(&input, r#"{ "words": [ { "kanji": ["#).unwrap();

    let result = Pipeline::new().run(&input, &output);
    assert!(matches!(result, Err(TangochoError::InvalidFormat(_))));
    assert!(!output.exists());
}

#[test]
fn test_empty_dump_writes_an_empty_dataset() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("jmdict.json");
    let output = dir.path().join("words.json");
    fs::write(&input, r#"{ "words": [] }"#).unwrap();

    let summary = Pipeline::new().run(&input, &output).unwrap();
    assert_eq!(summary.entries, 0);
    assert_eq!(summary.emitted, 0);

    let records: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(records.as_array().unwrap().len(), 0);
}
