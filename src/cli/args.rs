// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use super::{
    parsers::RangeArg,
    value_enum::{CliCountUnit, CliOffsetEncoding, CliStatusFormat},
};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "novel_count",
    version = crate::VERSION,
    about = "原稿の文字数カウンター（空白・ルビ記法を除外）",
    long_about = "原稿の文字数を数えます。空白文字、《》で囲まれたルビ、ルビ開始記号 | ｜ は数えません。\n\
                  Markdown とプレーンテキストが対象で、--additional-language で対象言語を 1 つ追加できます。"
)]
pub struct Args {
    /// 対象ファイル（省略または - で標準入力）
    #[arg(value_hint = ValueHint::FilePath)]
    pub path: Option<PathBuf>,

    /// 選択範囲 START..END（複数指定可）
    #[arg(short = 'r', long = "range", value_name = "START..END", help_heading = "選択範囲")]
    pub ranges: Vec<RangeArg>,

    /// 選択範囲オフセットの単位
    #[arg(long, value_enum, help_heading = "選択範囲")]
    pub offsets: Option<CliOffsetEncoding>,

    /// 文字数の数え方
    #[arg(long, value_enum, help_heading = "カウント")]
    pub unit: Option<CliCountUnit>,

    /// 言語 ID を指定（省略時は拡張子から判定）
    #[arg(short = 'l', long, help_heading = "カウント")]
    pub language: Option<String>,

    /// 追加でカウント対象にする言語 ID（設定ファイルより優先）
    #[arg(long, help_heading = "カウント")]
    pub additional_language: Option<String>,

    /// 設定ファイル（.json / .yaml / .yml）
    #[arg(short = 'c', long = "config", value_hint = ValueHint::FilePath, help_heading = "設定")]
    pub config: Option<PathBuf>,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "status", help_heading = "出力")]
    pub format: CliStatusFormat,

    /// ファイルの変更を監視して再カウント
    #[arg(short = 'w', long, help_heading = "監視")]
    pub watch: bool,

    /// 監視時のデバウンス間隔（ミリ秒）
    #[arg(long, default_value_t = 200, requires = "watch", help_heading = "監視")]
    pub watch_interval: u64,

    /// ログを詳しくする（-v, -vv, -vvv）
    #[arg(short = 'v', long, action = ArgAction::Count, conflicts_with = "quiet", help_heading = "ログ")]
    pub verbose: u8,

    /// エラー以外のログを出さない
    #[arg(short = 'q', long, help_heading = "ログ")]
    pub quiet: bool,
}
