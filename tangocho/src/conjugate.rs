//! 活用形の生成
//!
//! このモジュールは、辞書形の単語と活用グループから全活用形の集合を
//! 導出する純粋関数を提供します。グループの集合は閉じており安定しているため、
//! 導出規則は列挙型によるタグ付きディスパッチとして実装されています。
//! 導出が定義されない入力（想定外の語尾）に対しては、その形のキーを
//! 結果から省くだけで、プレースホルダは格納しません。

mod adjective;
mod verb;

use std::collections::BTreeMap;

use crate::classify::InflectionGroup;

/// 活用形名から表層形への写像
///
/// 名詞および導出に失敗したエントリでは空になります。
/// キー順が決定的であるため、同一入力からは常に同一の出力が得られます。
pub type FormSet = BTreeMap<&'static str, String>;

/// 辞書形の単語から全活用形を導出します。
///
/// 決定的な純粋関数であり、I/Oも共有状態も持ちません。
/// 導出できない形はキーごと省かれ、入力全体が規則に適合しない場合は
/// 空の[`FormSet`]を返します。失敗が実行全体を中断することはありません。
///
/// # 引数
///
/// * `word` - 辞書形の単語
/// * `group` - 活用グループ
///
/// # 戻り値
///
/// 導出された活用形の集合
///
/// # 例
///
/// ```
/// use tangocho::classify::InflectionGroup;
/// use tangocho::conjugate::conjugate;
///
/// let forms = conjugate("食べる", InflectionGroup::Ichidan);
/// assert_eq!(forms["negative"], "食べない");
/// assert_eq!(forms["past"], "食べた");
///
/// let forms = conjugate("買う", InflectionGroup::Godan);
/// assert_eq!(forms["negative"], "買わない");
/// ```
pub fn conjugate(word: &str, group: InflectionGroup) -> FormSet {
    match group {
        InflectionGroup::Ichidan => verb::ichidan(word),
        InflectionGroup::Godan => verb::godan(word),
        InflectionGroup::Suru => verb::suru(word),
        InflectionGroup::Kuru => verb::kuru(word),
        InflectionGroup::IAdjective => adjective::i_adjective(word),
        InflectionGroup::NaAdjective => adjective::na_adjective(word),
    }
}
