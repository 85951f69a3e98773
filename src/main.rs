use clap::Parser;
use service_catalog::core::{ConfigProvider, Renderer};
use service_catalog::utils::error::ErrorSeverity;
use service_catalog::utils::{logger, validation::Validate};
use service_catalog::{
    load, source_from_location, Browser, CatalogError, CliConfig, HtmlRenderer, LocalOutput,
    OutputFormat, SearchOptions, TextRenderer, TomlConfig,
};
use std::io::IsTerminal;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入 TOML 配置（若有），命令列參數優先
    let mut config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => TomlConfig::default(),
    };
    config.apply_cli_overrides(&cli);

    if config.json_logging() {
        logger::init_json_logger(config.verbose_logging());
    } else {
        logger::init_cli_logger(config.verbose_logging());
    }

    tracing::info!("Starting service-catalog");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = cli.validate().and_then(|_| config.validate()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&config, &cli).await {
        tracing::error!(
            "❌ service-catalog failed: {} (Category: {:?}, Severity: {:?})",
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

    Ok(())
}

fn build_renderer(config: &dyn ConfigProvider, cli: &CliConfig) -> Box<dyn Renderer> {
    let marker = config.highlight_marker();
    match cli.format {
        OutputFormat::Html => Box::new(HtmlRenderer::new(marker.unwrap_or_default())),
        OutputFormat::Text => match marker {
            Some(marker) => Box::new(TextRenderer::new(marker)),
            None if cli.output.is_none() && std::io::stdout().is_terminal() => {
                Box::new(TextRenderer::default())
            }
            None => Box::new(TextRenderer::plain()),
        },
    }
}

async fn run(config: &dyn ConfigProvider, cli: &CliConfig) -> Result<(), CatalogError> {
    let source = source_from_location(config.source(), config.timeout());
    let records = load(source.as_ref()).await?;

    let renderer = build_renderer(config, cli);
    let icons = config.icons();
    let options = SearchOptions {
        mode: config.match_mode(),
        marker: renderer.marker(),
    };
    let mut browser = Browser::from_records(&records, config.priority_order(), options);
    tracing::info!(
        "Built {} categories from {} services",
        browser.catalog().categories.len(),
        browser.catalog().record_count()
    );

    if let Some(group) = &cli.group {
        browser.navigate(group);
    }

    if cli.interactive {
        return interactive(&mut browser, renderer.as_ref(), &icons).await;
    }

    let rendered = match cli.query.as_deref() {
        Some(query) => {
            let outcome = browser.search(query);
            renderer.render_outcome(&outcome, &icons, browser.active_group())
        }
        None => renderer.render_catalog(browser.catalog(), &icons, browser.active_group()),
    };

    match &cli.output {
        Some(path) => {
            LocalOutput::new(".".to_string()).write_file(path, rendered.as_bytes())?;
            tracing::info!("📁 Output saved to: {}", path);
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

/// Reads one command per line: a query, an empty line or `:clear`,
/// `:group <name>`, or `:quit`.
async fn interactive(
    browser: &mut Browser,
    renderer: &dyn Renderer,
    icons: &service_catalog::core::IconMap,
) -> Result<(), CatalogError> {
    print!(
        "{}",
        renderer.render_catalog(browser.catalog(), icons, browser.active_group())
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let outcome = match line {
            ":quit" | ":q" => break,
            "" | ":clear" => browser.clear(),
            _ => match line.strip_prefix(":group ") {
                Some(name) => {
                    if browser.navigate(name.trim()).is_none() {
                        println!("No category named '{}'", name.trim());
                        continue;
                    }
                    let query = browser.current_query().to_string();
                    browser.search(&query)
                }
                None => browser.search(line),
            },
        };
        print!(
            "{}",
            renderer.render_outcome(&outcome, icons, browser.active_group())
        );
    }
    Ok(())
}
