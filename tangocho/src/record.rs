//! 学習レコードの定義
//!
//! このモジュールは、パイプラインの出力単位である学習レコードを定義します。
//! レコードはアセンブラによって1エントリから一度だけ生成され、
//! 以降は不変です。

use serde::ser::Serializer;
use serde::Serialize;

use crate::classify::{InflectionGroup, WordClass};
use crate::conjugate::FormSet;
use crate::curated::ExampleSentence;

/// 学習レコード
///
/// フィールドは宣言順にシリアライズされます。
#[derive(Clone, Debug, Serialize)]
pub struct LearningRecord {
    /// 辞書形の単語（漢字表記を優先）
    pub word: String,

    /// かな読み
    pub reading: String,

    /// 最初の語義の訳語を連結した文字列
    pub meaning: String,

    /// 語クラス
    #[serde(rename = "type")]
    pub word_class: WordClass,

    /// 活用グループ
    ///
    /// 動詞と形容詞でのみ意味を持ち、名詞では空文字列として
    /// シリアライズされます。
    #[serde(serialize_with = "serialize_group")]
    pub group: Option<InflectionGroup>,

    /// 活用形の集合
    pub forms: FormSet,

    /// 厳選例文の列
    pub examples: Vec<ExampleSentence>,

    /// 常用度スコア（小さいほど一般的）
    pub commonness_score: u32,
}

/// 活用グループを文字列としてシリアライズします。
///
/// グループを持たないレコードは空文字列になります。
fn serialize_group<S>(group: &Option<InflectionGroup>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match group {
        Some(group) => serializer.serialize_str(group.as_str()),
        None => serializer.serialize_str(""),
    }
}
