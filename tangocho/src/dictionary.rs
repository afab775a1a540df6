//! 辞書エントリのデータモデル
//!
//! このモジュールは、jmdict-simplified形式のJSONダンプに含まれる
//! 辞書エントリの読み取り専用モデルを提供します。パイプラインが参照しない
//! キーはデシリアライズ時に無視されます。

pub mod reader;

use serde::Deserialize;

pub use reader::EntryReader;

/// 辞書の1エントリ
///
/// 1つ以上の漢字表記、1つ以上のかな読み、1つ以上の語義を持ちます。
/// エントリは読み取り専用であり、パイプライン中で変更されることはありません。
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct DictionaryEntry {
    /// 漢字表記のリスト
    #[serde(default)]
    pub kanji: Vec<KanjiForm>,

    /// かな読みのリスト
    #[serde(default)]
    pub kana: Vec<KanaForm>,

    /// 語義のリスト
    #[serde(default, rename = "sense")]
    pub senses: Vec<Sense>,

    /// エントリレベルの使用頻度タグ
    ///
    /// 頻度マーカー（ichi、news1等）を含むことがあります。
    #[serde(default)]
    pub misc: Vec<String>,
}

impl DictionaryEntry {
    /// 最初の漢字表記を返します。
    ///
    /// 空文字列の表記は存在しないものとして扱います。
    pub fn first_kanji(&self) -> Option<&str> {
        self.kanji
            .first()
            .map(|k| k.text.as_str())
            .filter(|t| !t.is_empty())
    }

    /// 最初のかな読みを返します。
    ///
    /// 空文字列の読みは存在しないものとして扱います。
    pub fn first_kana(&self) -> Option<&str> {
        self.kana
            .first()
            .map(|k| k.text.as_str())
            .filter(|t| !t.is_empty())
    }

    /// 全語義の品詞タグを語義順・タグ順に走査するイテレータを返します。
    pub fn pos_tags(&self) -> impl Iterator<Item = &str> {
        self.senses
            .iter()
            .flat_map(|s| s.part_of_speech.iter().map(String::as_str))
    }

    /// エントリレベルと全語義の使用頻度タグを走査するイテレータを返します。
    pub fn misc_tags(&self) -> impl Iterator<Item = &str> {
        self.misc
            .iter()
            .map(String::as_str)
            .chain(self.senses.iter().flat_map(|s| s.misc.iter().map(String::as_str)))
    }

    /// 最初の語義の訳語を "; " で連結した文字列を返します。
    ///
    /// # 戻り値
    ///
    /// 語義が存在しない場合は空文字列
    pub fn meaning(&self) -> String {
        self.senses
            .first()
            .map(|s| {
                s.gloss
                    .iter()
                    .map(|g| g.text.as_str())
                    .collect::<Vec<_>>()
                    .join("; ")
            })
            .unwrap_or_default()
    }
}

/// 漢字表記
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct KanjiForm {
    /// 表記文字列
    #[serde(default)]
    pub text: String,
}

/// かな読み
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct KanaForm {
    /// 読み文字列
    #[serde(default)]
    pub text: String,
}

/// 語義
///
/// 品詞タグ、訳語、使用上の注記タグを持ちます。
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Sense {
    /// 品詞タグのリスト
    #[serde(default, rename = "partOfSpeech")]
    pub part_of_speech: Vec<String>,

    /// 訳語のリスト
    #[serde(default)]
    pub gloss: Vec<Gloss>,

    /// 使用上の注記タグのリスト
    #[serde(default)]
    pub misc: Vec<String>,
}

/// 訳語
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Gloss {
    /// 訳語文字列
    #[serde(default)]
    pub text: String,
}
