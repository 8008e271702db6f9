use anyhow::{Context, Result};
use clap::Parser;
use portfolio_feed::core::frame_ticker::FrameTicker;
use portfolio_feed::core::{Canvas, Rgba, Storage};
use portfolio_feed::utils::{logger, validation::Validate};
use portfolio_feed::{LocalStorage, ParticleCli, ParticleField, SvgCanvas};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[tokio::main]
async fn main() -> Result<()> {
    let args = ParticleCli::parse();

    logger::init_cli_logger(args.verbose);
    tracing::info!("🚀 Starting particle field");

    let site = args.resolve().context("failed to load configuration")?;
    site.validate().context("invalid configuration")?;

    let viewport = site.canvas.viewport();
    let mut canvas = SvgCanvas::new(viewport);
    if let Some([r, g, b]) = site.canvas.background {
        canvas = canvas.with_background(Rgba::new(r, g, b, 1.0));
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut field = ParticleField::new(site.particles.clone());
    field.start(viewport, &mut rng);

    let storage = LocalStorage::new(args.output_dir.clone());
    let mut ticker = FrameTicker::new(site.canvas.fps);
    let snapshot_every = args.snapshot_every.max(1);
    let mut written = 0usize;

    tracing::info!(
        "Simulating {} frames at {} fps on {}x{}",
        args.frames,
        site.canvas.fps,
        viewport.width,
        viewport.height
    );

    for _ in 0..args.frames {
        let frame = ticker.tick().await;

        if let (Some(size), Some(at)) = (args.resize, args.resize_at) {
            if frame == at {
                tracing::info!("Viewport resized to {}x{}", size.width, size.height);
                field.resize(size);
                canvas.resize(size);
            }
        }

        field.step(&mut canvas);

        let last = frame + 1 == args.frames;
        if frame % snapshot_every == 0 || last {
            let name = format!("frame-{:05}.svg", frame);
            storage
                .write_file(&name, canvas.to_svg().as_bytes())
                .await
                .with_context(|| format!("failed to write {}", name))?;
            written += 1;
            tracing::debug!("Snapshot {} written", name);
        }
    }

    tracing::info!("✅ Wrote {} snapshots to {}", written, args.output_dir);
    println!("✅ Wrote {} snapshots to {}", written, args.output_dir);
    Ok(())
}
