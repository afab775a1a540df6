//! 語彙データセットを構築するユーティリティ
//!
//! このバイナリは、jmdict-simplified形式の辞書ダンプからパイプラインを
//! 実行し、常用度順に選別された語彙データセットをJSONファイルとして
//! 出力します。実行の統計は標準エラー出力に表示されます。

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use tangocho::Pipeline;

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(name = "process", about = "Builds the ranked vocabulary dataset")]
struct Args {
    /// Dictionary dump in jmdict-simplified JSON.
    #[clap(short = 'i', long)]
    input: PathBuf,

    /// File to which the dataset is output.
    #[clap(short = 'o', long)]
    output: PathBuf,

    /// Maximum number of records to emit.
    #[clap(short = 'n', long, default_value_t = tangocho::DEFAULT_BUDGET)]
    budget: usize,
}

/// メイン関数
///
/// 辞書ダンプを処理してデータセットを書き出し、実行統計を表示します。
///
/// # 戻り値
///
/// 実行が成功した場合は `Ok(())`、エラーが発生した場合はエラー情報
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    eprintln!("Processing {}...", args.input.display());
    let pipeline = Pipeline::new().budget(args.budget);
    let summary = pipeline.run(&args.input, &args.output)?;

    eprintln!("Wrote {}", args.output.display());
    eprintln!("Entries processed: {}", summary.entries);
    eprintln!("Unique words kept: {}", summary.assembled);
    eprintln!("Duplicates dropped: {}", summary.duplicates);
    eprintln!("Unclassified dropped: {}", summary.unclassified);
    eprintln!("Unusable dropped: {}", summary.unusable);
    eprintln!("Records emitted: {}", summary.emitted);

    Ok(())
}
