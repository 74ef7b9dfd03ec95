use clap::Parser;
use subject_harvest::config::harvest::{DEFAULT_OUTPUT_PATH, DEFAULT_SUBJECTS_PATH};
use subject_harvest::core::recommend;
use subject_harvest::utils::logger::{self, LogFormat};
use subject_harvest::{BookCatalog, EtlError, LocalStorage, SubjectList};

#[derive(Parser)]
#[command(name = "recommend")]
#[command(about = "Recommend a harvested book for a genre")]
struct Args {
    /// Genre (subject) to pick from, matched case-insensitively
    genre: String,

    /// Harvested book file
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    books: String,

    /// Subject list the harvest was run with; named when a genre has no match
    #[arg(long, default_value = DEFAULT_SUBJECTS_PATH)]
    subjects: String,

    #[arg(short, long)]
    verbose: bool,
}

fn fail(e: EtlError) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logger::init_logger(LogFormat::Compact, args.verbose);

    let genres = SubjectList::from_file(&args.subjects).unwrap_or_else(|e| fail(e));

    let storage = LocalStorage::current_dir();
    let catalog = BookCatalog::load(&storage, &args.books)
        .await
        .unwrap_or_else(|e| fail(e));

    let mut rng = rand::thread_rng();
    println!(
        "{}",
        recommend::recommend(&catalog, &genres, &args.genre, &mut rng)
    );
}
