//! パイプラインの実行
//!
//! このモジュールは、辞書ダンプの読み出しから出力ファイルの書き込みまでを
//! 1回のバッチ実行として束ねます。実行は単一スレッドの単一順方向パスであり、
//! 同一入力からは常にバイト単位で同一の出力が得られます。
//! 出力は宛先ディレクトリ内の一時ファイルへ書いてから不可分に差し替えられるため、
//! 部分的な出力ファイルが残ることはありません。

use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::assembler::{RecordAssembler, RunSummary};
use crate::curated::CuratedExampleTable;
use crate::dictionary::EntryReader;
use crate::errors::Result;
use crate::record::LearningRecord;
use crate::selector;

/// 出力予算件数のデフォルト値
pub const DEFAULT_BUDGET: usize = 8000;

/// 進捗ログを出すエントリ間隔
const PROGRESS_INTERVAL: usize = 5000;

/// 辞書ダンプから学習レコードのデータセットを構築するパイプライン
///
/// 予算件数と例文テーブルを設定してから実行します。
///
/// ```
/// use tangocho::Pipeline;
///
/// let pipeline = Pipeline::new().budget(100);
/// ```
pub struct Pipeline {
    curated: CuratedExampleTable,
    budget: usize,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// デフォルト設定の新しいパイプラインを作成します。
    pub fn new() -> Self {
        Self {
            curated: CuratedExampleTable::new(),
            budget: DEFAULT_BUDGET,
        }
    }

    /// 出力予算件数を設定します。
    pub fn budget(mut self, budget: usize) -> Self {
        self.budget = budget;
        self
    }

    /// 厳選例文テーブルを差し替えます。
    pub fn curated_examples(mut self, curated: CuratedExampleTable) -> Self {
        self.curated = curated;
        self
    }

    /// リーダーからエントリを処理し、選別済みレコードと実行統計を返します。
    ///
    /// ファイルを介さずにパイプラインを実行するための入口です。
    ///
    /// # 引数
    ///
    /// * `rdr` - 辞書ダンプのリーダー
    ///
    /// # エラー
    ///
    /// ドキュメントの構造エラーは致命的であり、即座に実行を中断します。
    pub fn process<R>(&self, rdr: R) -> Result<(Vec<LearningRecord>, RunSummary)>
    where
        R: BufRead,
    {
        self.drive(EntryReader::from_reader(rdr))
    }

    /// 辞書ダンプを処理して出力ファイルを書き込みます。
    ///
    /// # 引数
    ///
    /// * `input` - 辞書ダンプのパス
    /// * `output` - データセットの出力パス
    ///
    /// # 戻り値
    ///
    /// 実行統計
    ///
    /// # エラー
    ///
    /// 入力が存在しない場合は [`TangochoError::SourceNotFound`]、
    /// 解析できない場合は [`TangochoError::InvalidFormat`] を返します。
    /// どちらの場合も出力ファイルは生成されません。
    ///
    /// [`TangochoError::SourceNotFound`]: crate::errors::TangochoError::SourceNotFound
    /// [`TangochoError::InvalidFormat`]: crate::errors::TangochoError::InvalidFormat
    pub fn run<P, Q>(&self, input: P, output: Q) -> Result<RunSummary>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let (records, summary) = self.drive(EntryReader::from_path(input)?)?;
        write_records(&records, output.as_ref())?;
        Ok(summary)
    }

    /// エントリ列を消費して組み立てと選別を行います。
    fn drive<R>(&self, reader: EntryReader<R>) -> Result<(Vec<LearningRecord>, RunSummary)>
    where
        R: BufRead,
    {
        let mut assembler = RecordAssembler::new(&self.curated);
        let mut records = Vec::new();
        for entry in reader {
            let entry = entry?;
            if let Some(record) = assembler.assemble(&entry) {
                records.push(record);
            }
            let entries = assembler.summary().entries;
            if entries % PROGRESS_INTERVAL == 0 {
                log::debug!("processed {} entries", entries);
            }
        }
        let mut summary = assembler.into_summary();
        if records.len() > self.budget {
            log::warn!(
                "keeping the {} most common of {} records",
                self.budget,
                records.len()
            );
        }
        let records = selector::select(records, self.budget);
        summary.emitted = records.len();
        Ok((records, summary))
    }
}

/// レコード列を出力ファイルへ不可分に書き込みます。
///
/// 宛先と同じディレクトリに一時ファイルを作り、書き込み完了後に
/// 宛先パスへ差し替えます。
fn write_records(records: &[LearningRecord], path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)?;
    {
        let mut wtr = BufWriter::new(temp.as_file_mut());
        serde_json::to_writer_pretty(&mut wtr, records)?;
        wtr.flush()?;
    }
    temp.persist(path)?;
    Ok(())
}
