use clap::ValueEnum;
use novel_count_domain::{CountUnit, OffsetEncoding};
use novel_count_infra::status::StatusFormat;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliStatusFormat {
    /// ステータスバー風の表示（✎ 1200 文字）
    Status,
    /// 数値のみ
    Plain,
    /// JSON（1 更新 1 行）
    Json,
}

impl From<CliStatusFormat> for StatusFormat {
    fn from(value: CliStatusFormat) -> Self {
        match value {
            CliStatusFormat::Status => StatusFormat::Status,
            CliStatusFormat::Plain => StatusFormat::Plain,
            CliStatusFormat::Json => StatusFormat::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliCountUnit {
    /// UTF-16 コードユニット（エディタと同じ）
    Utf16,
    /// Unicode スカラー値
    Chars,
    /// 書記素クラスタ
    Graphemes,
}

impl From<CliCountUnit> for CountUnit {
    fn from(value: CliCountUnit) -> Self {
        match value {
            CliCountUnit::Utf16 => CountUnit::Utf16,
            CliCountUnit::Chars => CountUnit::Chars,
            CliCountUnit::Graphemes => CountUnit::Graphemes,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOffsetEncoding {
    /// UTF-8 バイト
    Utf8,
    /// UTF-16 コードユニット
    Utf16,
    /// Unicode スカラー値
    Char,
}

impl From<CliOffsetEncoding> for OffsetEncoding {
    fn from(value: CliOffsetEncoding) -> Self {
        match value {
            CliOffsetEncoding::Utf8 => OffsetEncoding::Utf8,
            CliOffsetEncoding::Utf16 => OffsetEncoding::Utf16,
            CliOffsetEncoding::Char => OffsetEncoding::Char,
        }
    }
}
