use clap::Parser;
use subject_harvest::utils::logger::{self, LogFormat};
use subject_harvest::utils::validation::Validate;
use subject_harvest::{
    CliConfig, EtlEngine, EtlError, LocalStorage, OpenLibraryClient, SubjectList, SubjectPipeline,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(format, cli.verbose);

    tracing::info!("Starting subject-harvest");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli).await {
        tracing::error!(
            "❌ Harvest failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }
}

async fn run(cli: &CliConfig) -> Result<(), EtlError> {
    let config = cli.to_harvest_config()?;
    config.validate()?;

    // 讀取主題清單，失敗時在任何網路請求前中止
    let subjects = SubjectList::from_file(config.subjects_path())?;
    tracing::info!(
        "📋 {} subjects from {}, policy on HTTP errors: {}",
        subjects.len(),
        config.subjects_path(),
        config.http_error_policy().as_str()
    );

    let source = OpenLibraryClient::new(config.clone())?;
    let pipeline = SubjectPipeline::new(LocalStorage::current_dir(), source, subjects, config);

    let summary = EtlEngine::new(pipeline).run().await?;
    tracing::info!(
        "✅ Harvest complete: {} books from {} subjects",
        summary.book_count,
        summary.subject_count
    );

    Ok(())
}
