use anyhow::{Context, Result};
use triangle_cpu::logging::{init_logging, LoggingConfig};
use triangle_cpu::{ColoredProgram, Draw, DrawStats, FlatProgram, Pipeline, RasterConfig, RenderTarget};
use triangle_shaders::colored::TRIANGLE;

fn main() -> Result<()> {
    init_logging(LoggingConfig {
        default_filter: "info,triangle_cpu=debug".to_owned(),
    });
    let config = RasterConfig::default();

    let (target, stats) = Pipeline::new(FlatProgram, config.clone())
        .render(&Draw::flat())
        .context("flat triangle draw was rejected")?;
    report("flat", &target, &stats);

    let (target, stats) = Pipeline::new(ColoredProgram, config)
        .render(&Draw::colored(&TRIANGLE))
        .context("colored triangle draw was rejected")?;
    report("colored", &target, &stats);

    Ok(())
}

fn report(name: &str, target: &RenderTarget, stats: &DrawStats) {
    log::info!(
        "{name}: {} vertices, {} triangles, {} culled, {} fragments",
        stats.vertices,
        stats.triangles,
        stats.culled,
        stats.fragments
    );
    let (w, h) = (target.width(), target.height());
    for (label, x, y) in [
        ("top", w / 2, h / 4 + 1),
        ("bottom left", w / 4 + 1, h * 3 / 4 - 1),
        ("bottom right", w * 3 / 4 - 2, h * 3 / 4 - 1),
        ("centre", w / 2, h * 5 / 8),
    ] {
        if let Some(color) = target.pixel(x, y) {
            log::info!("{name}: {label} ({x}, {y}) = {color}");
        }
    }
}
