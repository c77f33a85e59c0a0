use clap::Parser;
use interior_report::{batch, cli, config, error, logging, selector};
use interior_report_common::{
    extract_furniture_by_mood, parse_style_input, recover_mood_descriptions, BasisKey,
    ReportParser, ReportRecord, StyleCatalog,
};
use cli::{Cli, Commands};
use config::Config;
use error::{ReportError, Result};
use std::path::Path;

fn read_text(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(ReportError::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let mut config = Config::load()?;

    match cli.command {
        Commands::Parse { input, output, recover } => {
            println!("📝 interior-report - 리포트 파싱\n");

            let text = read_text(&input)?;
            let parser = ReportParser::default();
            let record = parser.parse(&text);

            let output = output.unwrap_or_else(|| config.output_file.clone().into());
            std::fs::write(&output, record.to_json_pretty()?)?;

            match &record.general_style {
                Some(style) => println!("✔ 전체 스타일: {}", style),
                None => println!("- 전체 스타일을 찾지 못했습니다"),
            }
            println!("✔ 추출된 항목: {}", record.populated_fields().join(", "));

            for key in [BasisKey::FurnitureLayout, BasisKey::ColorTexture, BasisKey::Material] {
                if let Some(value) = record.basis_value(&key) {
                    println!("  {}: {}", key, value);
                }
            }

            if recover || (config.recover_moods && record.mood_details.is_empty()) {
                let moods = parser.mood_descriptions(&record, &text);
                println!("\n분위기 설명 ({}건):", moods.len());
                for (word, description) in &moods {
                    println!("  {}: {}", word, description);
                }
            }

            println!("\n✅ 결과 저장: {}", output.display());
        }

        Commands::Batch { folder, recursive } => {
            println!("🚀 interior-report - 일괄 파싱\n");

            let outcomes = batch::parse_folder(&folder, recursive, true)?;
            for outcome in &outcomes {
                println!(
                    "✔ {} → {} ({}개 항목)",
                    outcome.input.display(),
                    outcome.output.display(),
                    outcome.populated.len()
                );
            }

            println!("\n✅ {}개 리포트 처리 완료", outcomes.len());
        }

        Commands::Recover { input } => {
            let text = read_text(&input)?;
            let moods = recover_mood_descriptions(&text);
            println!("{}", serde_json::to_string_pretty(&moods)?);
        }

        Commands::Legacy { input } => {
            let text = read_text(&input)?;
            let furniture = extract_furniture_by_mood(&text);
            println!("{}", serde_json::to_string_pretty(&furniture)?);
        }

        Commands::Styles { prompt } => {
            let catalog = StyleCatalog::builtin();
            if prompt {
                println!("{}", catalog.format_for_prompt());
            } else {
                println!("인테리어 스타일 ({}종):\n", catalog.len());
                println!("{}", catalog.list_for_cli());
            }
        }

        Commands::Normalize { name } => {
            let canonical = StyleCatalog::builtin().normalize(name.as_str())?;
            println!("{}", canonical);
        }

        Commands::Select { input } => {
            println!("🎨 interior-report - 스타일 선택\n");

            let json = read_text(&input)?;
            let record = ReportRecord::from_json(&json)?;
            let selection = selector::select_style(&record, &config, &selector::DialoguerChooser)?;

            println!("\n{}", serde_json::to_string_pretty(&selection)?);
        }

        Commands::StylePrompt { input } => {
            let text = read_text(&input)?;
            let request = parse_style_input(&text);
            println!("{}", serde_json::to_string_pretty(&request)?);
        }

        Commands::Config { set_default_style, show } => {
            if let Some(name) = set_default_style {
                let canonical = config.set_default_style(&name)?.to_string();
                config.save()?;
                println!("✔ 기본 스타일을 설정했습니다: {}", canonical);
            }

            if show {
                println!("설정:");
                println!("  출력 파일: {}", config.output_file);
                println!("  기본 스타일: {}", config.default_style);
                println!("  기본 대상 가구: {}", config.default_target_objects);
                println!(
                    "  분위기 복구: {}",
                    if config.recover_moods { "사용" } else { "사용 안 함" }
                );
            }
        }
    }

    Ok(())
}
