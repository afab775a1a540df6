//! 品詞の分類
//!
//! このモジュールは、辞書エントリの品詞タグ列を固定の語クラスと
//! 活用グループの組へ写像する分類器を提供します。分類規則は優先順位付きの
//! リストとして一度だけ評価され、グローバルな可変状態を持ちません。

use serde::Serialize;

/// 語クラス
///
/// 出力レコードには小文字の文字列として書き出されます。
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordClass {
    /// 動詞
    Verb,
    /// 形容詞
    Adjective,
    /// 名詞
    Noun,
    /// 分類不能
    ///
    /// この語クラスのエントリはレコードを生成せず、出力に現れません。
    Unknown,
}

impl WordClass {
    /// 出力表現の文字列を返します。
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::Noun => "noun",
            Self::Unknown => "unknown",
        }
    }
}

/// 活用グループ
///
/// 動詞は4グループ、形容詞は2タイプのいずれかに属します。
/// 名詞には活用グループがなく、レコード上では空文字列になります。
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub enum InflectionGroup {
    /// 一段動詞
    Ichidan,
    /// 五段動詞
    Godan,
    /// サ変動詞
    Suru,
    /// カ変動詞
    Kuru,
    /// い形容詞
    IAdjective,
    /// な形容詞
    NaAdjective,
}

impl InflectionGroup {
    /// 出力表現の文字列を返します。
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ichidan => "ichidan",
            Self::Godan => "godan",
            Self::Suru => "suru",
            Self::Kuru => "kuru",
            Self::IAdjective => "i-adjective",
            Self::NaAdjective => "na-adjective",
        }
    }
}

/// 1つのタグを分類します。
///
/// 規則は優先順位順に評価されます。
fn classify_tag(tag: &str) -> (WordClass, Option<InflectionGroup>) {
    use InflectionGroup::*;
    match tag {
        "vk" => (WordClass::Verb, Some(Kuru)),
        "vs-i" | "vs" => (WordClass::Verb, Some(Suru)),
        "v1" => (WordClass::Verb, Some(Ichidan)),
        t if t.starts_with("v5") => (WordClass::Verb, Some(Godan)),
        "adj-i" => (WordClass::Adjective, Some(IAdjective)),
        "adj-na" => (WordClass::Adjective, Some(NaAdjective)),
        "n" => (WordClass::Noun, None),
        _ => (WordClass::Unknown, None),
    }
}

/// 品詞タグ列を分類します。
///
/// タグは語義順・タグ順に走査され、最初に `Unknown` 以外を
/// 生成したタグで分類が確定します（先勝ち）。後続の語義が異なる
/// 語クラスを持っていても無視されます。
///
/// # 引数
///
/// * `tags` - 品詞タグ列
///
/// # 戻り値
///
/// 語クラスと活用グループの組。どのタグも一致しない場合は
/// `(WordClass::Unknown, None)`
///
/// # 例
///
/// ```
/// use tangocho::classify::{classify, InflectionGroup, WordClass};
///
/// let (class, group) = classify(["v1"]);
/// assert_eq!(class, WordClass::Verb);
/// assert_eq!(group, Some(InflectionGroup::Ichidan));
/// ```
pub fn classify<'a, I>(tags: I) -> (WordClass, Option<InflectionGroup>)
where
    I: IntoIterator<Item = &'a str>,
{
    for tag in tags {
        let result = classify_tag(tag);
        if result.0 != WordClass::Unknown {
            return result;
        }
    }
    (WordClass::Unknown, None)
}
