use clap::Parser;
use portfolio_feed::core::RenderOutcome;
use portfolio_feed::utils::error::{ErrorSeverity, PortfolioError};
use portfolio_feed::utils::logger::{self, LogFormat};
use portfolio_feed::utils::validation::Validate;
use portfolio_feed::{CliConfig, FeedRenderer, GitHubSource, LocalStorage, PortfolioEngine};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(cli.verbose, format);

    tracing::info!("Starting portfolio-feed");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli).await {
        tracing::error!(
            "❌ Render failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(cli: &CliConfig) -> Result<(), PortfolioError> {
    let site = cli.resolve()?;

    // 驗證配置
    site.validate()?;

    let source = GitHubSource::new(site.github_source_config())?;
    let renderer = FeedRenderer::new(source, site.catalog())
        .with_targets(site.page_targets())
        .with_limit(site.feed.limit);

    let storage = LocalStorage::new(cli.base_dir.clone());
    let engine = PortfolioEngine::new(
        storage,
        renderer,
        site.feed.owner.clone(),
        site.page.template.clone(),
        site.page.output.clone(),
    )
    .with_dry_run(cli.dry_run);

    let report = engine.run().await?;

    match &report.outcome {
        RenderOutcome::Rendered(summary) => {
            println!(
                "✅ Rendered {} projects ({} repositories, {} stars)",
                summary.displayed.len(),
                summary.total_repositories,
                summary.stars_display()
            );
            for name in &summary.displayed {
                println!("   • {}", name);
            }
        }
        RenderOutcome::Unavailable => {
            println!("⚠️  Repository data unavailable, failure placeholder rendered");
        }
        RenderOutcome::MissingContainer => {
            println!(
                "⚠️  Template has no #{} element, nothing rendered",
                site.page.container_id
            );
        }
    }

    if let Some(path) = &report.output_path {
        println!("📁 Output saved to: {}", path);
    }

    Ok(())
}
