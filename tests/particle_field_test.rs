use kurbo::Size;
use portfolio_feed::core::frame_ticker::FrameTicker;
use portfolio_feed::core::particle_field::ParticleSettings;
use portfolio_feed::core::{Canvas, Storage};
use portfolio_feed::{LocalStorage, ParticleField, SvgCanvas};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

fn settings(count: usize) -> ParticleSettings {
    ParticleSettings {
        count,
        ..ParticleSettings::default()
    }
}

#[test]
fn test_same_seed_gives_same_field() {
    let viewport = Size::new(400.0, 300.0);

    let mut a = ParticleField::new(settings(20));
    a.start(viewport, &mut StdRng::seed_from_u64(42));
    let mut b = ParticleField::new(settings(20));
    b.start(viewport, &mut StdRng::seed_from_u64(42));

    assert_eq!(a.particles(), b.particles());
}

#[test]
fn test_svg_frame_contains_every_particle() {
    let viewport = Size::new(320.0, 240.0);
    let mut field = ParticleField::new(settings(15));
    field.start(viewport, &mut StdRng::seed_from_u64(1));
    let mut canvas = SvgCanvas::new(viewport);

    for _ in 0..10 {
        field.step(&mut canvas);
    }

    let svg = canvas.to_svg();
    assert_eq!(svg.matches("<circle").count(), 15);
    assert_eq!(svg.matches("<line").count(), field.links().len());
}

#[test]
fn test_particles_stay_near_bounds_after_resize() {
    let mut field = ParticleField::new(ParticleSettings {
        count: 30,
        max_speed: 2.0,
        ..ParticleSettings::default()
    });
    field.start(Size::new(500.0, 500.0), &mut StdRng::seed_from_u64(5));
    let mut canvas = SvgCanvas::new(Size::new(500.0, 500.0));

    let smaller = Size::new(200.0, 150.0);
    field.resize(smaller);
    canvas.resize(smaller);
    assert_eq!(field.particles().len(), 30);

    let inside: Vec<usize> = field
        .particles()
        .iter()
        .enumerate()
        .filter(|(_, p)| p.position.x <= smaller.width && p.position.y <= smaller.height)
        .map(|(i, _)| i)
        .collect();

    for _ in 0..2000 {
        field.step(&mut canvas);
    }
    assert_eq!(field.particles().len(), 30);

    // 原本就在新範圍內的粒子最多越界一步的距離
    let slack = 2.0 * 2.0;
    for i in inside {
        let p = field.particles()[i];
        assert!(p.position.x >= -slack && p.position.x <= smaller.width + slack);
        assert!(p.position.y >= -slack && p.position.y <= smaller.height + slack);
    }
}

#[tokio::test]
async fn test_ticked_frames_written_as_snapshots() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

    let viewport = Size::new(100.0, 100.0);
    let mut field = ParticleField::new(settings(5));
    field.start(viewport, &mut StdRng::seed_from_u64(3));
    let mut canvas = SvgCanvas::new(viewport);
    let mut ticker = FrameTicker::new(500);

    for _ in 0..3 {
        let frame = ticker.tick().await;
        field.step(&mut canvas);
        storage
            .write_file(&format!("frame-{:05}.svg", frame), canvas.to_svg().as_bytes())
            .await
            .unwrap();
    }

    for frame in 0..3 {
        let path = temp_dir.path().join(format!("frame-{:05}.svg", frame));
        let svg = std::fs::read_to_string(path).unwrap();
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<circle").count(), 5);
    }
}
