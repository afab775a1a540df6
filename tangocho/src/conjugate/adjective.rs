//! 形容詞の活用規則
//!
//! い形容詞は語尾の「い」を落として固定接尾辞を付加し、
//! な形容詞は語幹に助動詞・コピュラの変化形をそのまま付加します。

use crate::conjugate::FormSet;

/// い形容詞の活用形を導出します。
///
/// 不規則形容詞「いい」は語幹「よ」で特別扱いされます。
/// この判定は末尾「い」の一般規則より先に行われます（よかった、いかったではない）。
/// 語尾が「い」でない場合は何も導出されません。
pub(crate) fn i_adjective(word: &str) -> FormSet {
    let mut forms = FormSet::new();
    let stem = if word == "いい" {
        "よ"
    } else {
        match word.strip_suffix('い') {
            Some(stem) => stem,
            None => return forms,
        }
    };
    for (name, suffix) in [
        ("negative", "くない"),
        ("past", "かった"),
        ("past_negative", "くなかった"),
        ("te_form", "くて"),
        ("conditional_ba", "ければ"),
        ("volitional", "かろう"),
    ] {
        forms.insert(name, format!("{stem}{suffix}"));
    }
    forms
}

/// な形容詞の活用形を導出します。
///
/// 語幹は変化せず、常に全形が導出されます。
pub(crate) fn na_adjective(word: &str) -> FormSet {
    let mut forms = FormSet::new();
    for (name, suffix) in [
        ("plain", "だ"),
        ("negative", "ではない"),
        ("past", "だった"),
        ("past_negative", "ではなかった"),
        ("te_form", "で"),
        ("conditional_ba", "ならば"),
    ] {
        forms.insert(name, format!("{word}{suffix}"));
    }
    forms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i_adjective() {
        let forms = i_adjective("高い");
        assert_eq!(forms["negative"], "高くない");
        assert_eq!(forms["past"], "高かった");
        assert_eq!(forms["past_negative"], "高くなかった");
        assert_eq!(forms["te_form"], "高くて");
        assert_eq!(forms["conditional_ba"], "高ければ");
        assert_eq!(forms["volitional"], "高かろう");
    }

    #[test]
    fn test_ii_is_special_cased() {
        let forms = i_adjective("いい");
        assert_eq!(forms["past"], "よかった");
        assert_eq!(forms["negative"], "よくない");
        assert_eq!(forms["past_negative"], "よくなかった");
        assert_eq!(forms["te_form"], "よくて");
        assert_eq!(forms["conditional_ba"], "よければ");
        assert_eq!(forms["volitional"], "よかろう");
    }

    #[test]
    fn test_i_adjective_without_i_derives_nothing() {
        assert!(i_adjective("静か").is_empty());
    }

    #[test]
    fn test_na_adjective() {
        let forms = na_adjective("静か");
        assert_eq!(forms["plain"], "静かだ");
        assert_eq!(forms["negative"], "静かではない");
        assert_eq!(forms["past"], "静かだった");
        assert_eq!(forms["past_negative"], "静かではなかった");
        assert_eq!(forms["te_form"], "静かで");
        assert_eq!(forms["conditional_ba"], "静かならば");
    }
}
