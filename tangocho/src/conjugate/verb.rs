//! 動詞の活用規則
//!
//! 4つの動詞グループそれぞれに固定の規則表を定義します。
//! 五段動詞は語尾のかなの行に応じた置換、一段動詞は語尾の脱落と
//! 固定接尾辞の付加、サ変・カ変動詞はハードコードされた不規則語幹を
//! 使用します。

use crate::conjugate::FormSet;

/// 五段動詞の活用形を導出します。
///
/// 語尾のかなが属する子音列からア・イ・エ・オ各行の置換かなを引き、
/// 音便規則でテ形・タ形を導出します。語尾がウ段でない場合は
/// 何も導出されません。
pub(crate) fn godan(word: &str) -> FormSet {
    let mut forms = FormSet::new();
    let Some((stem, last)) = split_last_kana(word) else {
        return forms;
    };
    let Some((a, i, e, o)) = vowel_rows(last) else {
        return forms;
    };
    forms.insert("negative", format!("{stem}{a}ない"));
    forms.insert("polite", format!("{stem}{i}ます"));
    forms.insert("potential", format!("{stem}{e}る"));
    forms.insert("passive", format!("{stem}{a}れる"));
    forms.insert("causative", format!("{stem}{a}せる"));
    forms.insert("imperative", format!("{stem}{e}"));
    forms.insert("volitional", format!("{stem}{o}う"));
    forms.insert("conditional_ba", format!("{stem}{e}ば"));
    if let Some((te, ta)) = euphonic_suffixes(word, last) {
        forms.insert("te_form", format!("{stem}{te}"));
        forms.insert("past", format!("{stem}{ta}"));
    }
    forms
}

/// 一段動詞の活用形を導出します。
///
/// 語尾の「る」を落とし、形ごとの固定接尾辞を付加します。
pub(crate) fn ichidan(word: &str) -> FormSet {
    let mut forms = FormSet::new();
    let Some(stem) = word.strip_suffix('る') else {
        return forms;
    };
    for (name, suffix) in [
        ("negative", "ない"),
        ("polite", "ます"),
        ("te_form", "て"),
        ("past", "た"),
        ("potential", "られる"),
        ("passive", "られる"),
        ("causative", "させる"),
        ("imperative", "ろ"),
        ("volitional", "よう"),
        ("conditional_ba", "れば"),
    ] {
        forms.insert(name, format!("{stem}{suffix}"));
    }
    forms
}

/// サ変動詞の活用形を導出します。
///
/// 辞書形が「する」で終わることを要求します。「勉強」のような
/// サ変名詞単独の見出しには何も導出されません。
pub(crate) fn suru(word: &str) -> FormSet {
    let mut forms = FormSet::new();
    let Some(base) = word.strip_suffix("する") else {
        return forms;
    };
    for (name, suffix) in [
        ("negative", "しない"),
        ("polite", "します"),
        ("te_form", "して"),
        ("past", "した"),
        ("potential", "できる"),
        ("passive", "される"),
        ("causative", "させる"),
        ("imperative", "しろ"),
        ("volitional", "しよう"),
        ("conditional_ba", "すれば"),
    ] {
        forms.insert(name, format!("{base}{suffix}"));
    }
    forms
}

/// カ変動詞の活用形を導出します。
///
/// 漢字表記「来る」とかな表記「くる」の両方の語尾を受け付けます。
pub(crate) fn kuru(word: &str) -> FormSet {
    let mut forms = FormSet::new();
    if let Some(base) = word.strip_suffix("来る") {
        for (name, suffix) in [
            ("negative", "来ない"),
            ("polite", "来ます"),
            ("te_form", "来て"),
            ("past", "来た"),
            ("potential", "来られる"),
            ("passive", "来られる"),
            ("causative", "来させる"),
            ("imperative", "来い"),
            ("volitional", "来よう"),
            ("conditional_ba", "来れば"),
        ] {
            forms.insert(name, format!("{base}{suffix}"));
        }
    } else if let Some(base) = word.strip_suffix("くる") {
        for (name, suffix) in [
            ("negative", "こない"),
            ("polite", "きます"),
            ("te_form", "きて"),
            ("past", "きた"),
            ("potential", "こられる"),
            ("passive", "こられる"),
            ("causative", "こさせる"),
            ("imperative", "こい"),
            ("volitional", "こよう"),
            ("conditional_ba", "くれば"),
        ] {
            forms.insert(name, format!("{base}{suffix}"));
        }
    }
    forms
}

/// 単語を語幹と末尾のかな1文字に分割します。
fn split_last_kana(word: &str) -> Option<(&str, char)> {
    let (idx, last) = word.char_indices().last()?;
    Some((&word[..idx], last))
}

/// ウ段の語尾に対応するア・イ・エ・オ各行のかなを返します。
///
/// ワ行五段の「う」はア行で「わ」に置換されます（買う → 買わない）。
fn vowel_rows(last: char) -> Option<(char, char, char, char)> {
    match last {
        'う' => Some(('わ', 'い', 'え', 'お')),
        'く' => Some(('か', 'き', 'け', 'こ')),
        'ぐ' => Some(('が', 'ぎ', 'げ', 'ご')),
        'す' => Some(('さ', 'し', 'せ', 'そ')),
        'つ' => Some(('た', 'ち', 'て', 'と')),
        'ぬ' => Some(('な', 'に', 'ね', 'の')),
        'ぶ' => Some(('ば', 'び', 'べ', 'ぼ')),
        'む' => Some(('ま', 'み', 'め', 'も')),
        'る' => Some(('ら', 'り', 'れ', 'ろ')),
        _ => None,
    }
}

/// テ形・タ形の音便接尾辞を返します。
///
/// 「行く」はイ音便の例外で促音便になります（行って・行った）。
fn euphonic_suffixes(word: &str, last: char) -> Option<(&'static str, &'static str)> {
    if word.ends_with("行く") {
        return Some(("って", "った"));
    }
    match last {
        'く' => Some(("いて", "いた")),
        'ぐ' => Some(("いで", "いだ")),
        'す' => Some(("して", "した")),
        'う' | 'つ' | 'る' => Some(("って", "った")),
        'ぬ' | 'ぶ' | 'む' => Some(("んで", "んだ")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_godan_u_ending() {
        let forms = godan("買う");
        assert_eq!(forms["negative"], "買わない");
        assert_eq!(forms["polite"], "買います");
        assert_eq!(forms["te_form"], "買って");
        assert_eq!(forms["past"], "買った");
        assert_eq!(forms["potential"], "買える");
        assert_eq!(forms["passive"], "買われる");
        assert_eq!(forms["causative"], "買わせる");
        assert_eq!(forms["imperative"], "買え");
        assert_eq!(forms["volitional"], "買おう");
        assert_eq!(forms["conditional_ba"], "買えば");
    }

    #[test]
    fn test_godan_each_row() {
        assert_eq!(godan("書く")["negative"], "書かない");
        assert_eq!(godan("書く")["te_form"], "書いて");
        assert_eq!(godan("泳ぐ")["te_form"], "泳いで");
        assert_eq!(godan("泳ぐ")["past"], "泳いだ");
        assert_eq!(godan("話す")["te_form"], "話して");
        assert_eq!(godan("話す")["polite"], "話します");
        assert_eq!(godan("待つ")["negative"], "待たない");
        assert_eq!(godan("待つ")["te_form"], "待って");
        assert_eq!(godan("死ぬ")["te_form"], "死んで");
        assert_eq!(godan("死ぬ")["past"], "死んだ");
        assert_eq!(godan("遊ぶ")["negative"], "遊ばない");
        assert_eq!(godan("遊ぶ")["volitional"], "遊ぼう");
        assert_eq!(godan("飲む")["te_form"], "飲んで");
        assert_eq!(godan("飲む")["potential"], "飲める");
        assert_eq!(godan("取る")["te_form"], "取って");
        assert_eq!(godan("取る")["imperative"], "取れ");
    }

    #[test]
    fn test_godan_iku_euphony() {
        let forms = godan("行く");
        assert_eq!(forms["te_form"], "行って");
        assert_eq!(forms["past"], "行った");
        // 音便以外はク語尾の規則どおり
        assert_eq!(forms["negative"], "行かない");
        assert_eq!(forms["polite"], "行きます");
    }

    #[test]
    fn test_godan_unexpected_ending_derives_nothing() {
        assert!(godan("コーヒー").is_empty());
        assert!(godan("").is_empty());
    }

    #[test]
    fn test_ichidan() {
        let forms = ichidan("食べる");
        assert_eq!(forms["negative"], "食べない");
        assert_eq!(forms["polite"], "食べます");
        assert_eq!(forms["te_form"], "食べて");
        assert_eq!(forms["past"], "食べた");
        assert_eq!(forms["potential"], "食べられる");
        assert_eq!(forms["passive"], "食べられる");
        assert_eq!(forms["causative"], "食べさせる");
        assert_eq!(forms["imperative"], "食べろ");
        assert_eq!(forms["volitional"], "食べよう");
        assert_eq!(forms["conditional_ba"], "食べれば");
    }

    #[test]
    fn test_ichidan_without_ru_derives_nothing() {
        assert!(ichidan("たべ").is_empty());
    }

    #[test]
    fn test_suru() {
        let forms = suru("する");
        assert_eq!(forms["negative"], "しない");
        assert_eq!(forms["polite"], "します");
        assert_eq!(forms["te_form"], "して");
        assert_eq!(forms["past"], "した");
        assert_eq!(forms["potential"], "できる");
        assert_eq!(forms["passive"], "される");
        assert_eq!(forms["causative"], "させる");
        assert_eq!(forms["imperative"], "しろ");
        assert_eq!(forms["volitional"], "しよう");
        assert_eq!(forms["conditional_ba"], "すれば");
    }

    #[test]
    fn test_suru_compound() {
        let forms = suru("勉強する");
        assert_eq!(forms["negative"], "勉強しない");
        assert_eq!(forms["potential"], "勉強できる");
    }

    #[test]
    fn test_suru_noun_head_derives_nothing() {
        assert!(suru("勉強").is_empty());
    }

    #[test]
    fn test_kuru_kanji() {
        let forms = kuru("来る");
        assert_eq!(forms["negative"], "来ない");
        assert_eq!(forms["polite"], "来ます");
        assert_eq!(forms["te_form"], "来て");
        assert_eq!(forms["past"], "来た");
        assert_eq!(forms["potential"], "来られる");
        assert_eq!(forms["imperative"], "来い");
        assert_eq!(forms["volitional"], "来よう");
        assert_eq!(forms["conditional_ba"], "来れば");
    }

    #[test]
    fn test_kuru_kana() {
        let forms = kuru("くる");
        assert_eq!(forms["negative"], "こない");
        assert_eq!(forms["polite"], "きます");
        assert_eq!(forms["past"], "きた");
        assert_eq!(forms["conditional_ba"], "くれば");
    }

    #[test]
    fn test_kuru_compound() {
        let forms = kuru("持ってくる");
        assert_eq!(forms["negative"], "持ってこない");
        assert_eq!(forms["polite"], "持ってきます");
    }

    #[test]
    fn test_kuru_unexpected_ending_derives_nothing() {
        assert!(kuru("行く").is_empty());
    }
}
