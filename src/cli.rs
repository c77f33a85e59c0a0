use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "interior-report")]
#[command(about = "인테리어 분석 리포트 파싱・스타일 정규화 도구", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// レポートテキストを解析してJSONを出力
    Parse {
        /// レポートテキストファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 出力JSONファイル（デフォルト: 設定の output_file）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 雰囲気の説明マップも表示（セクションがなければ復旧経路）
        #[arg(long)]
        recover: bool,
    },

    /// フォルダ内のレポートを一括解析
    Batch {
        /// レポートフォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// 壊れたテキストから雰囲気の説明を復旧
    Recover {
        /// 入力テキストファイル
        #[arg(required = true)]
        input: PathBuf,
    },

    /// 旧テンプレートのレポートから雰囲気別の家具推薦を抽出
    Legacy {
        /// レポートテキストファイル
        #[arg(required = true)]
        input: PathBuf,
    },

    /// スタイルカタログを表示
    Styles {
        /// プロンプト埋め込み用の形式で表示
        #[arg(long)]
        prompt: bool,
    },

    /// スタイル名を正規名に変換
    Normalize {
        /// id / slug / 韓国語名 / 英語名
        #[arg(required = true)]
        name: String,
    },

    /// 解析結果の推薦スタイルから対話的に選択
    Select {
        /// 解析結果JSONファイル
        #[arg(required = true)]
        input: PathBuf,
    },

    /// スタイル変換プロンプトを解析
    StylePrompt {
        /// プロンプトテキストファイル
        #[arg(required = true)]
        input: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// 既定スタイルを設定（カタログで検証）
        #[arg(long)]
        set_default_style: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
