//! レコードの選別
//!
//! 組み立てられた全レコードを常用度スコアの昇順に安定ソートし、
//! 実行全体で固定の出力予算件数に切り詰めます。

use crate::record::LearningRecord;

/// レコード列を常用度順に選別します。
///
/// ソートは安定であり、同スコアのレコードは元の出現順を保ちます。
/// 切り詰め後のレコードが変更されることはありません。
///
/// # 引数
///
/// * `records` - 組み立てられた全レコード（出現順）
/// * `budget` - 出力予算件数
///
/// # 戻り値
///
/// スコア昇順で先頭 `budget` 件のレコード
pub fn select(mut records: Vec<LearningRecord>, budget: usize) -> Vec<LearningRecord> {
    records.sort_by_key(|r| r.commonness_score);
    records.truncate(budget);
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::WordClass;
    use crate::conjugate::FormSet;

    fn record(word: &str, score: u32) -> LearningRecord {
        LearningRecord {
            word: word.to_string(),
            reading: word.to_string(),
            meaning: String::new(),
            word_class: WordClass::Noun,
            group: None,
            forms: FormSet::new(),
            examples: vec![],
            commonness_score: score,
        }
    }

    #[test]
    fn test_sorts_by_score_ascending() {
        let selected = select(
            vec![record("c", 1000), record("a", 0), record("b", 34)],
            10,
        );
        let words: Vec<_> = selected.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        let selected = select(
            vec![record("first", 5), record("second", 5), record("third", 5)],
            10,
        );
        let words: Vec<_> = selected.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_truncates_to_budget() {
        let records: Vec<_> = (0..10u32).map(|i| record(&i.to_string(), i)).collect();
        let selected = select(records, 3);
        assert_eq!(selected.len(), 3);
        assert_eq!(selected[2].word, "2");
    }
}
