//! 学習レコードの組み立て
//!
//! このモジュールは、分類・活用・スコアリング・例文検索を1つの
//! 学習レコードに統合し、語彙アイデンティティによる重複排除を行う
//! アセンブラを提供します。重複排除の集合は1回の実行の間だけ保持され、
//! 実行をまたいで永続化されることはありません。

use hashbrown::HashSet;

use crate::classify::{classify, WordClass};
use crate::commonness;
use crate::conjugate::{conjugate, FormSet};
use crate::curated::CuratedExampleTable;
use crate::dictionary::DictionaryEntry;
use crate::record::LearningRecord;

/// 実行統計
///
/// 非致命的な条件はエラーとして報告されず、ここに集計されます。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// デコードされたエントリ数
    pub entries: usize,

    /// 品詞を分類できず破棄されたエントリ数
    pub unclassified: usize,

    /// 表記も読みも得られず破棄されたエントリ数
    pub unusable: usize,

    /// 語彙アイデンティティの重複で破棄されたエントリ数
    pub duplicates: usize,

    /// 組み立てられたユニークなレコード数
    pub assembled: usize,

    /// 選別後に出力されたレコード数
    pub emitted: usize,
}

/// 学習レコードのアセンブラ
///
/// エントリを1件ずつ消費し、(辞書形, 読み) の組を初出優先で
/// 重複排除しながらレコードを組み立てます。
pub struct RecordAssembler<'a> {
    curated: &'a CuratedExampleTable,
    seen: HashSet<(String, String)>,
    summary: RunSummary,
}

impl<'a> RecordAssembler<'a> {
    /// 新しいアセンブラを作成します。
    ///
    /// # 引数
    ///
    /// * `curated` - 厳選例文テーブル
    pub fn new(curated: &'a CuratedExampleTable) -> Self {
        Self {
            curated,
            seen: HashSet::new(),
            summary: RunSummary::default(),
        }
    }

    /// 1エントリから学習レコードを組み立てます。
    ///
    /// 辞書形は漢字表記を優先し、なければかな読みを使います。
    /// 語彙アイデンティティが既出の場合、後から来たレコードは
    /// 内容の優劣を比較せず黙って破棄されます（初出優先）。
    ///
    /// # 引数
    ///
    /// * `entry` - 辞書エントリ
    ///
    /// # 戻り値
    ///
    /// レコードが生成された場合は `Some(LearningRecord)`、
    /// エントリが破棄された場合は `None`
    pub fn assemble(&mut self, entry: &DictionaryEntry) -> Option<LearningRecord> {
        self.summary.entries += 1;

        let (word_class, group) = classify(entry.pos_tags());
        if word_class == WordClass::Unknown {
            self.summary.unclassified += 1;
            return None;
        }

        let word = match entry.first_kanji().or_else(|| entry.first_kana()) {
            Some(word) => word.to_string(),
            None => {
                self.summary.unusable += 1;
                return None;
            }
        };
        let reading = entry
            .first_kana()
            .map(str::to_string)
            .unwrap_or_else(|| word.clone());

        if !self.seen.insert((word.clone(), reading.clone())) {
            self.summary.duplicates += 1;
            return None;
        }

        let forms = match group {
            Some(group) => conjugate(&word, group),
            None => FormSet::new(),
        };
        let record = LearningRecord {
            meaning: entry.meaning(),
            examples: self.curated.lookup(&word).to_vec(),
            commonness_score: commonness::score(entry.misc_tags()),
            word,
            reading,
            word_class,
            group,
            forms,
        };
        self.summary.assembled += 1;
        Some(record)
    }

    /// ここまでの実行統計を返します。
    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// アセンブラを消費して実行統計を返します。
    pub fn into_summary(self) -> RunSummary {
        self.summary
    }
}
