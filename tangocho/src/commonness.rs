//! 常用度のスコアリング
//!
//! このモジュールは、エントリの使用頻度タグ集合を単一の序数ランクへ
//! 写像するスコアラーを提供します。優先度表はプロセス全体で共有される
//! 読み取り専用の写像として一度だけ初期化されます。

use std::sync::OnceLock;

use hashbrown::HashMap;

/// 頻度タグが1つも認識されなかった場合の番兵値
///
/// 「最も一般的でない／ランク外」を表します。
pub const UNRANKED: u32 = 1000;

/// タグから序数ランクへの固定優先度表
///
/// 最頻出マーカーが0に近く、頻度帯マーカーが段階的に大きくなります。
fn priority_table() -> &'static HashMap<&'static str, u32> {
    static TABLE: OnceLock<HashMap<&'static str, u32>> = OnceLock::new();
    TABLE.get_or_init(|| {
        HashMap::from_iter([
            ("ichi", 0),
            ("news1", 1),
            ("news2", 2),
            ("gai1", 3),
            ("spec1", 4),
            ("spec2", 5),
            ("spec3", 6),
            ("spec4", 7),
            ("spec5", 8),
            ("spec6", 9),
            ("spec7", 10),
            ("spec8", 11),
            ("spec9", 12),
            ("spec10", 13),
            ("nf01", 14),
            ("nf02", 15),
            ("nf03", 16),
            ("nf04", 17),
            ("nf05", 18),
            ("nf06", 19),
            ("nf07", 20),
            ("nf08", 21),
            ("nf09", 22),
            ("nf10", 23),
            ("nf11", 24),
            ("nf12", 25),
            ("nf13", 26),
            ("nf14", 27),
            ("nf15", 28),
            ("nf16", 29),
            ("nf17", 30),
            ("nf18", 31),
            ("nf19", 32),
            ("nf20", 33),
            ("P", 34),
            ("U", 35),
        ])
    })
}

/// 使用頻度タグ集合から常用度スコアを計算します。
///
/// 各タグを優先度表で引き、見つかったランクの最小値を返します。
/// 全関数であり、決して失敗しません。
///
/// # 引数
///
/// * `tags` - 使用頻度タグ列
///
/// # 戻り値
///
/// 最小の序数ランク。どのタグも一致しない場合は[`UNRANKED`]
///
/// # 例
///
/// ```
/// use tangocho::commonness::{score, UNRANKED};
///
/// assert_eq!(score(["news1", "ichi"]), 0);
/// assert_eq!(score(["uk"]), UNRANKED);
/// ```
pub fn score<'a, I>(tags: I) -> u32
where
    I: IntoIterator<Item = &'a str>,
{
    let table = priority_table();
    let mut best = UNRANKED;
    for tag in tags {
        if let Some(&rank) = table.get(tag) {
            best = best.min(rank);
        }
    }
    best
}
