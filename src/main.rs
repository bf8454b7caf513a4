use color_eyre::{eyre::eyre, Result};
use eframe::egui;
use folio_carousel::carousel::{CarouselHandle, CodeViewer};
use folio_carousel::config::PortfolioConfig;
use folio_carousel::content::portfolio;
use folio_carousel::sections::ProjectGallery;
use folio_carousel::ui::carousel_view::CarouselView;
use folio_carousel::ui::{PortfolioUI, PortfolioViews};
use tokio::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    setup()?;

    let config = PortfolioConfig::load_default()
        .await
        .map_err(|e| eyre!("Failed to load configuration: {}", e))?;
    info!("Configuration loaded: {:?}", config);

    // Carousel tasks run on the tokio runtime while eframe owns the main thread
    let experience = CarouselHandle::spawn("experience", portfolio::experiences(), &config.experience)
        .map_err(|e| eyre!("Failed to spawn experience carousel: {}", e))?;
    let leadership = CarouselHandle::spawn("leadership", portfolio::leadership(), &config.leadership)
        .map_err(|e| eyre!("Failed to spawn leadership carousel: {}", e))?;
    let links = CarouselHandle::spawn("links", portfolio::links(), &config.links)
        .map_err(|e| eyre!("Failed to spawn links carousel: {}", e))?;

    let views = PortfolioViews {
        experience: CarouselView::new(experience, "No work experience available"),
        leadership: CarouselView::new(leadership, "No leadership activities available"),
        links: CarouselView::new(links, "No links available"),
    };
    let code_viewer = CodeViewer::new(portfolio::snippets(), config.code_viewer.clone());
    let projects = ProjectGallery::new(portfolio::projects(), &config.projects, Instant::now());

    info!("Starting portfolio UI");
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Portfolio")
            .with_inner_size([960.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Portfolio",
        native_options,
        Box::new(move |cc| Ok(Box::new(PortfolioUI::new(cc, config, views, code_viewer, projects)))),
    )
    .map_err(|e| eyre!("UI terminated with error: {}", e))?;

    info!("Portfolio UI closed");
    Ok(())
}

fn setup() -> Result<()> {
    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        std::env::set_var("RUST_LIB_BACKTRACE", "0")
    }
    color_eyre::install()?;
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    setup_logging();
    Ok(())
}

fn setup_logging() {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .pretty()
        .init();
}
