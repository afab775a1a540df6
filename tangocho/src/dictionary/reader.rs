//! 辞書ダンプのストリーミングリーダー
//!
//! このモジュールは、数十万エントリ規模のJSONダンプを丸ごとメモリに
//! 展開することなく、1エントリずつ順方向にデコードするリーダーを提供します。
//! ドキュメント全体をトークン単位で走査し、`words` 配列の各要素だけを
//! バッファに切り出して個別にデシリアライズします。

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use crate::dictionary::DictionaryEntry;
use crate::errors::{Result, TangochoError};

/// エラー診断で使用するソース名
const SOURCE: &str = "dictionary";

/// リーダーの進行状態
enum State {
    /// `words` 配列をまだ特定していない
    Start,
    /// 配列要素を順に読み出している
    InArray,
    /// 配列の終端、または致命的エラーに到達した
    Finished,
}

/// 辞書エントリのストリーミングリーダー
///
/// [`Iterator`]として実装されており、`Result<DictionaryEntry>` を
/// 1件ずつ生成します。入力は単一順方向パスで消費され、再走査はできません。
/// ドキュメントはエントリ配列そのもの、または `words` キーに配列を持つ
/// オブジェクトのどちらでも受け付けます。それ以外のトップレベルキーの値は
/// メモリに展開せずに読み飛ばします。
pub struct EntryReader<R> {
    scan: Scanner<R>,
    state: State,
    buf: Vec<u8>,
}

impl EntryReader<BufReader<File>> {
    /// ファイルパスから新しいリーダーを作成します。
    ///
    /// # 引数
    ///
    /// * `path` - 辞書ダンプのパス
    ///
    /// # エラー
    ///
    /// パスが存在しない場合は [`TangochoError::SourceNotFound`] を返します。
    pub fn from_path<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                TangochoError::SourceNotFound(path.to_path_buf())
            } else {
                TangochoError::StdIo(e)
            }
        })?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R> EntryReader<R>
where
    R: BufRead,
{
    /// 任意のリーダーから新しいインスタンスを作成します。
    pub fn from_reader(rdr: R) -> Self {
        Self {
            scan: Scanner::new(rdr),
            state: State::Start,
            buf: Vec::new(),
        }
    }

    /// `words` 配列の先頭まで読み進めます。
    ///
    /// # 戻り値
    ///
    /// 配列が見つかり開き括弧を消費した場合は `true`、
    /// ドキュメントに `words` 配列が存在しない場合は `false`
    fn locate_words(&mut self) -> Result<bool> {
        self.scan.skip_ws()?;
        match self.scan.peek()? {
            Some(b'[') => {
                self.scan.bump()?;
                Ok(true)
            }
            Some(b'{') => {
                self.scan.bump()?;
                loop {
                    self.scan.skip_ws()?;
                    match self.scan.peek()? {
                        Some(b'}') => {
                            self.scan.bump()?;
                            return Ok(false);
                        }
                        Some(b'"') => {
                            let key = self.scan.read_key()?;
                            self.scan.skip_ws()?;
                            if self.scan.peek()? != Some(b':') {
                                return Err(malformed("expected ':' after an object key"));
                            }
                            self.scan.bump()?;
                            self.scan.skip_ws()?;
                            if key == "words" {
                                return match self.scan.peek()? {
                                    Some(b'[') => {
                                        self.scan.bump()?;
                                        Ok(true)
                                    }
                                    _ => Err(malformed("the 'words' key must hold an array")),
                                };
                            }
                            self.scan.skip_value()?;
                            self.scan.skip_ws()?;
                            match self.scan.peek()? {
                                Some(b',') => {
                                    self.scan.bump()?;
                                }
                                Some(b'}') => {
                                    self.scan.bump()?;
                                    return Ok(false);
                                }
                                _ => return Err(malformed("expected ',' or '}' after a value")),
                            }
                        }
                        _ => return Err(malformed("expected an object key")),
                    }
                }
            }
            Some(_) => Err(malformed("the document must be a JSON object or array")),
            None => Err(malformed("the document is empty")),
        }
    }

    /// 次のエントリをデコードします。
    ///
    /// # 戻り値
    ///
    /// 配列の終端に達した場合は `Ok(None)`
    fn next_entry(&mut self) -> Result<Option<DictionaryEntry>> {
        loop {
            match self.state {
                State::Finished => return Ok(None),
                State::Start => {
                    if self.locate_words()? {
                        self.state = State::InArray;
                    } else {
                        self.state = State::Finished;
                    }
                }
                State::InArray => {
                    self.scan.skip_ws()?;
                    match self.scan.peek()? {
                        None => return Err(malformed("unexpected end of file inside the entry array")),
                        Some(b']') => {
                            self.scan.bump()?;
                            self.state = State::Finished;
                            return Ok(None);
                        }
                        Some(b',') => {
                            self.scan.bump()?;
                        }
                        Some(_) => {
                            self.buf.clear();
                            self.scan.capture_value(&mut self.buf)?;
                            let entry = serde_json::from_slice(&self.buf).map_err(|e| {
                                TangochoError::invalid_format(
                                    SOURCE,
                                    format!("malformed dictionary entry: {e}"),
                                )
                            })?;
                            return Ok(Some(entry));
                        }
                    }
                }
            }
        }
    }
}

impl<R> Iterator for EntryReader<R>
where
    R: BufRead,
{
    type Item = Result<DictionaryEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_entry() {
            Ok(Some(entry)) => Some(Ok(entry)),
            Ok(None) => None,
            Err(e) => {
                // 構造エラーは致命的であり、以降の読み出しは行わない
                self.state = State::Finished;
                Some(Err(e))
            }
        }
    }
}

/// 無効フォーマットエラーのショートハンド
fn malformed<S>(msg: S) -> TangochoError
where
    S: Into<String>,
{
    TangochoError::invalid_format(SOURCE, msg)
}

/// 1バイト先読み付きのバイトスキャナ
///
/// JSONの完全なパースは行わず、文字列リテラルと括弧の対応だけを
/// 追跡して値の境界を特定します。切り出した値のデコードは
/// `serde_json` に委ねます。
struct Scanner<R> {
    rdr: R,
    peeked: Option<u8>,
}

impl<R> Scanner<R>
where
    R: Read,
{
    fn new(rdr: R) -> Self {
        Self { rdr, peeked: None }
    }

    /// 次のバイトを消費せずに返します。
    fn peek(&mut self) -> Result<Option<u8>> {
        if self.peeked.is_none() {
            let mut byte = [0u8; 1];
            loop {
                match self.rdr.read(&mut byte) {
                    Ok(0) => break,
                    Ok(_) => {
                        self.peeked = Some(byte[0]);
                        break;
                    }
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e.into()),
                }
            }
        }
        Ok(self.peeked)
    }

    /// 次のバイトを消費して返します。
    fn bump(&mut self) -> Result<Option<u8>> {
        let byte = self.peek()?;
        self.peeked = None;
        Ok(byte)
    }

    /// 空白文字を読み飛ばします。
    fn skip_ws(&mut self) -> Result<()> {
        while matches!(self.peek()?, Some(b' ' | b'\t' | b'\r' | b'\n')) {
            self.peeked = None;
        }
        Ok(())
    }

    /// オブジェクトキーを読み取ります。
    ///
    /// 開きクォートが先読み位置にあることを前提とします。
    /// エスケープを含むキーは生のまま返されるため `words` とは一致しません。
    fn read_key(&mut self) -> Result<String> {
        self.bump()?;
        let mut key = Vec::new();
        loop {
            match self.bump()? {
                None => return Err(malformed("unterminated string")),
                Some(b'"') => break,
                Some(b'\\') => {
                    key.push(b'\\');
                    match self.bump()? {
                        Some(b) => key.push(b),
                        None => return Err(malformed("unterminated string")),
                    }
                }
                Some(b) => key.push(b),
            }
        }
        String::from_utf8(key).map_err(|_| malformed("an object key is not valid UTF-8"))
    }

    /// 文字列リテラルの残り（開きクォート消費済み）を読み飛ばします。
    fn skip_string_rest(&mut self) -> Result<()> {
        loop {
            match self.bump()? {
                None => return Err(malformed("unterminated string")),
                Some(b'"') => return Ok(()),
                Some(b'\\') => {
                    if self.bump()?.is_none() {
                        return Err(malformed("unterminated string"));
                    }
                }
                Some(_) => {}
            }
        }
    }

    /// 文字列リテラルの残り（開きクォート消費済み）をバッファに写します。
    fn capture_string_rest(&mut self, buf: &mut Vec<u8>) -> Result<()> {
        loop {
            match self.bump()? {
                None => return Err(malformed("unterminated string")),
                Some(b'"') => {
                    buf.push(b'"');
                    return Ok(());
                }
                Some(b'\\') => {
                    buf.push(b'\\');
                    match self.bump()? {
                        Some(b) => buf.push(b),
                        None => return Err(malformed("unterminated string")),
                    }
                }
                Some(b) => buf.push(b),
            }
        }
    }

    /// 1つのJSON値を読み飛ばします。
    fn skip_value(&mut self) -> Result<()> {
        match self.peek()? {
            None => Err(malformed("unexpected end of file")),
            Some(b'"') => {
                self.bump()?;
                self.skip_string_rest()
            }
            Some(b'{' | b'[') => {
                let mut depth = 0usize;
                loop {
                    match self.bump()? {
                        None => return Err(malformed("unexpected end of file")),
                        Some(b'{' | b'[') => depth += 1,
                        Some(b'}' | b']') => {
                            depth -= 1;
                            if depth == 0 {
                                return Ok(());
                            }
                        }
                        Some(b'"') => self.skip_string_rest()?,
                        Some(_) => {}
                    }
                }
            }
            Some(_) => {
                while let Some(b) = self.peek()? {
                    match b {
                        b',' | b'}' | b']' | b' ' | b'\t' | b'\r' | b'\n' => break,
                        _ => self.peeked = None,
                    }
                }
                Ok(())
            }
        }
    }

    /// 1つのJSON値をバッファに写します。
    fn capture_value(&mut self, buf: &mut Vec<u8>) -> Result<()> {
        match self.peek()? {
            None => Err(malformed("unexpected end of file")),
            Some(b'"') => {
                self.bump()?;
                buf.push(b'"');
                self.capture_string_rest(buf)
            }
            Some(b'{' | b'[') => {
                let mut depth = 0usize;
                loop {
                    match self.bump()? {
                        None => return Err(malformed("unexpected end of file")),
                        Some(b @ (b'{' | b'[')) => {
                            buf.push(b);
                            depth += 1;
                        }
                        Some(b @ (b'}' | b']')) => {
                            buf.push(b);
                            depth -= 1;
                            if depth == 0 {
                                return Ok(());
                            }
                        }
                        Some(b'"') => {
                            buf.push(b'"');
                            self.capture_string_rest(buf)?;
                        }
                        Some(b) => buf.push(b),
                    }
                }
            }
            Some(_) => {
                while let Some(b) = self.peek()? {
                    match b {
                        b',' | b'}' | b']' | b' ' | b'\t' | b'\r' | b'\n' => break,
                        _ => {
                            buf.push(b);
                            self.peeked = None;
                        }
                    }
                }
                Ok(())
            }
        }
    }
}
