//! 語彙データセットを検証するユーティリティ
//!
//! このバイナリは、生成済みのデータセットファイルを読み込み、
//! 語彙アイデンティティの一意性と常用度順の並びを検証して、
//! 語クラスごとの件数などの要約を出力します。

use std::collections::{BTreeMap, HashSet};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(name = "inspect", about = "Validates and summarizes a vocabulary dataset")]
struct Args {
    /// Dataset file to inspect.
    #[clap(short = 'i', long)]
    input: PathBuf,
}

/// 検証に必要なフィールドだけを持つレコード
#[derive(Debug, Deserialize)]
struct DatasetRecord {
    word: String,
    reading: String,
    #[serde(rename = "type")]
    word_class: String,
    #[serde(default)]
    examples: Vec<serde_json::Value>,
    commonness_score: u32,
}

/// メイン関数
///
/// データセットを読み込み、一意性・並び順の契約を検証して
/// 要約レポートを出力します。
///
/// # 戻り値
///
/// 契約が満たされている場合は `Ok(())`、違反がある場合はエラー情報
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    eprintln!("Loading {}...", args.input.display());
    let file = File::open(&args.input)?;
    let records: Vec<DatasetRecord> = serde_json::from_reader(BufReader::new(file))?;

    let mut seen = HashSet::new();
    let mut duplicates = 0usize;
    let mut by_class: BTreeMap<&str, usize> = BTreeMap::new();
    let mut with_examples = 0usize;
    for record in &records {
        if !seen.insert((record.word.as_str(), record.reading.as_str())) {
            duplicates += 1;
            println!("duplicate: {} ({})", record.word, record.reading);
        }
        *by_class.entry(record.word_class.as_str()).or_default() += 1;
        if !record.examples.is_empty() {
            with_examples += 1;
        }
    }
    let sorted = records
        .windows(2)
        .all(|w| w[0].commonness_score <= w[1].commonness_score);

    println!("Total records: {}", records.len());
    println!("Duplicate identities: {}", duplicates);
    println!("Sorted by commonness: {}", if sorted { "yes" } else { "no" });
    for (class, count) in &by_class {
        println!("  {}: {}", class, count);
    }
    println!("Records with curated examples: {}", with_examples);

    if duplicates > 0 {
        return Err("the dataset contains duplicate lexical identities".into());
    }
    if !sorted {
        return Err("the dataset is not sorted by commonness score".into());
    }
    Ok(())
}
