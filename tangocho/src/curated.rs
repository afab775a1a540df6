//! 厳選例文テーブル
//!
//! このモジュールは、高頻度語に対して人手で用意された例文を
//! 辞書形の完全一致で引くための静的テーブルを提供します。
//! テーブルは初期化時に一度だけ構築され、実行中に変更されることはありません。

use hashbrown::HashMap;
use serde::Serialize;

/// 例文
///
/// 日本語本文、かな読み、訳文の3つ組です。
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExampleSentence {
    /// 日本語本文
    pub japanese: String,

    /// かな読み
    pub reading: String,

    /// 訳文
    pub translation: String,
}

/// 厳選例文のデータ
///
/// (辞書形, [(本文, 読み, 訳文)]) の組の並びです。
const CURATED: &[(&str, &[(&str, &str, &str)])] = &[
    (
        "食べる",
        &[(
            "毎日、日本語を勉強します。",
            "まいにち、にほんごをべんきょうします。",
            "我每天学习日语。",
        )],
    ),
    (
        "飲む",
        &[("水を飲みます。", "みずをのみます。", "喝水。")],
    ),
    (
        "する",
        &[("宿題をします。", "しゅくだいをします。", "做作业。")],
    ),
    (
        "来る",
        &[(
            "明日、友達が来ます。",
            "あした、ともだちがきます。",
            "明天朋友要来。",
        )],
    ),
    (
        "見る",
        &[("テレビを見ます。", "テレビをみます。", "看电视。")],
    ),
    (
        "行く",
        &[(
            "週末、京都へ行きます。",
            "しゅうまつ、きょうとへいきます。",
            "周末去京都。",
        )],
    ),
    (
        "話す",
        &[(
            "彼は英語を上手に話します。",
            "かれはえいごをじょうずにはなします。",
            "他英语说得很好。",
        )],
    ),
];

/// 厳選例文テーブル
///
/// 辞書形の単語から例文列への読み取り専用の写像です。
pub struct CuratedExampleTable {
    map: HashMap<&'static str, Vec<ExampleSentence>>,
}

impl Default for CuratedExampleTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CuratedExampleTable {
    /// 組み込みの例文データからテーブルを構築します。
    pub fn new() -> Self {
        let mut map = HashMap::with_capacity(CURATED.len());
        for (word, sentences) in CURATED {
            let sentences = sentences
                .iter()
                .map(|&(japanese, reading, translation)| ExampleSentence {
                    japanese: japanese.to_string(),
                    reading: reading.to_string(),
                    translation: translation.to_string(),
                })
                .collect();
            map.insert(*word, sentences);
        }
        Self { map }
    }

    /// 辞書形の完全一致で例文を引きます。
    ///
    /// # 引数
    ///
    /// * `word` - 辞書形の単語
    ///
    /// # 戻り値
    ///
    /// 一致する例文列。一致しない場合は空のスライス
    pub fn lookup(&self, word: &str) -> &[ExampleSentence] {
        self.map.get(word).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_exact_match() {
        let table = CuratedExampleTable::new();
        let examples = table.lookup("食べる");
        assert_eq!(examples.len(), 1);
        assert_eq!(examples[0].japanese, "毎日、日本語を勉強します。");
    }

    #[test]
    fn test_lookup_requires_dictionary_form() {
        let table = CuratedExampleTable::new();
        assert!(table.lookup("たべる").is_empty());
        assert!(table.lookup("食べ").is_empty());
        assert!(table.lookup("").is_empty());
    }
}
