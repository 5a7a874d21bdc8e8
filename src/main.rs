use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use scholar_lens::analyzer::{AnalysisRequest, Analyzer};
use scholar_lens::bookmarks::{BookmarkStore, JsonFileBookmarkStore, MemoryBookmarkStore};
use scholar_lens::clients::AnthropicClient;
use scholar_lens::config::Config;
use scholar_lens::extract::{PlainTextExtractor, TextExtractor, file_id, title_from_filename};
use scholar_lens::http::{AppState, serve};

#[derive(Parser)]
#[command(name = "scholar-lens", about = "Adaptive research credibility analysis")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a document file and print the report as JSON
    Analyze {
        /// Path to the document (plain text; binary formats fall back to the file name)
        path: PathBuf,
        /// Override the title derived from the file name
        #[arg(long)]
        title: Option<String>,
    },
    /// Run the HTTP API
    Serve,
}

fn mime_for(path: &PathBuf) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("txt") | Some("md") | Some("text") => "text/plain",
        _ => "application/octet-stream",
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scholar_lens=info".into()),
        )
        .init();

    let config = Config::load()?;
    let provider = config.provider.clone();
    let mut client =
        AnthropicClient::new(provider.api_key, provider.model, provider.max_tokens)?;
    if let Some(base_url) = provider.base_url {
        client = client.with_base_url(base_url);
    }
    let analyzer = Arc::new(Analyzer::new(Arc::new(client)));

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze { path, title } => {
            let bytes = std::fs::read(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("upload")
                .to_string();

            let extractor = PlainTextExtractor;
            let mut text = extractor.extract(&bytes, mime_for(&path));
            // No extractable text: the file name still carries signal
            if text.is_empty() {
                text = title_from_filename(&file_name).to_string();
            }

            let title = title.unwrap_or_else(|| title_from_filename(&file_name).to_string());
            info!("analyzing {} ({} bytes)", file_name, bytes.len());

            let request = AnalysisRequest::new(title, text)
                .with_id(file_id(&file_name))
                .with_authors(vec!["Uploaded Document".to_string()]);
            let result = analyzer.analyze(request).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Serve => {
            let bookmarks: Arc<dyn BookmarkStore> = if config.storage.bookmarks_path.is_empty() {
                Arc::new(MemoryBookmarkStore::new())
            } else {
                Arc::new(JsonFileBookmarkStore::new(&config.storage.bookmarks_path)?)
            };
            let state = AppState {
                analyzer,
                bookmarks,
            };
            serve(state, &config.server.bind).await?;
        }
    }

    Ok(())
}
