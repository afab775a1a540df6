//! # Tangocho
//!
//! Tangochoは、jmdict-simplified形式の辞書ダンプから語学学習アプリ向けの
//! 語彙データセットを構築するバッチパイプラインの実装です。
//!
//! ## 概要
//!
//! このライブラリは、数十万エントリ規模の辞書ダンプをストリーミングで
//! デコードし、品詞の分類、規則ベースの活用形生成、常用度スコアリング、
//! 語彙アイデンティティによる重複排除、常用度順の選別を1回の順方向パスで
//! 行います。同一入力からは常にバイト単位で同一の出力が得られます。
//!
//! ## 主な機能
//!
//! - **ストリーミングデコード**: ダンプ全体をメモリに展開せず1エントリずつ処理
//! - **品詞分類**: 品詞タグ列を固定の語クラス・活用グループへ写像
//! - **活用形生成**: 動詞4グループ・形容詞2タイプの規則表による純粋な導出
//! - **常用度ランキング**: 頻度タグの優先度表による安定ソートと予算切り詰め
//! - **不可分な出力**: 一時ファイル経由の差し替えにより部分出力を残さない
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use tangocho::Pipeline;
//!
//! let source = r#"{
//!     "words": [
//!         {
//!             "kanji": [ { "text": "食べる" } ],
//!             "kana": [ { "text": "たべる" } ],
//!             "sense": [
//!                 { "partOfSpeech": ["v1"], "gloss": [ { "text": "to eat" } ] }
//!             ],
//!             "misc": ["ichi"]
//!         },
//!         {
//!             "kana": [ { "text": "ええと" } ],
//!             "sense": [ { "partOfSpeech": ["int"] } ]
//!         }
//!     ]
//! }"#;
//!
//! let pipeline = Pipeline::new();
//! let (records, summary) = pipeline.process(source.as_bytes())?;
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].word, "食べる");
//! assert_eq!(records[0].reading, "たべる");
//! assert_eq!(records[0].forms["negative"], "食べない");
//! assert_eq!(records[0].commonness_score, 0);
//! assert_eq!(summary.entries, 2);
//! assert_eq!(summary.unclassified, 1);
//! # Ok(())
//! # }
//! ```

/// 学習レコードの組み立てと重複排除
pub mod assembler;

/// 品詞の分類
pub mod classify;

/// 常用度のスコアリング
pub mod commonness;

/// 活用形の生成
pub mod conjugate;

/// 厳選例文テーブル
pub mod curated;

/// 辞書エントリのデータモデルとリーダー
pub mod dictionary;

/// エラー型の定義
pub mod errors;

/// パイプラインの実行
pub mod pipeline;

/// 学習レコードの定義
pub mod record;

/// レコードの選別
pub mod selector;


// Re-exports
pub use assembler::{RecordAssembler, RunSummary};
pub use classify::{InflectionGroup, WordClass};
pub use conjugate::FormSet;
pub use curated::{CuratedExampleTable, ExampleSentence};
pub use dictionary::{DictionaryEntry, EntryReader};
pub use errors::{Result, TangochoError};
pub use pipeline::{Pipeline, DEFAULT_BUDGET};
pub use record::LearningRecord;

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
