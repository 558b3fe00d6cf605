// Host-side tests for the thread (wave line) field.

use glam::Vec2;
use portfolio_core::constants::THREAD_TIME_STEP;
use portfolio_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn field(config: ThreadConfig, w: f32, h: f32) -> ThreadField {
    let mut rng = StdRng::seed_from_u64(11);
    ThreadField::new(config, w, h, &mut rng).unwrap()
}

#[test]
fn defaults() {
    let config = ThreadConfig::default();
    assert_eq!(config.count, 40);
    assert_eq!(config.amplitude, 1.0);
    assert_eq!(config.rgb, [147, 51, 234]);
}

#[test]
fn zero_threads_is_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    let config = ThreadConfig {
        count: 0,
        ..ThreadConfig::default()
    };
    assert_eq!(
        ThreadField::new(config, 100.0, 100.0, &mut rng).err(),
        Some(ConfigError::NoThreads)
    );
}

#[test]
fn parse_rgb_accepts_triples_only() {
    assert_eq!(parse_rgb("147, 51, 234"), Ok([147, 51, 234]));
    assert_eq!(parse_rgb("0,0,0"), Ok([0, 0, 0]));
    assert!(parse_rgb("1,2").is_err());
    assert!(parse_rgb("1,2,3,4").is_err());
    assert!(parse_rgb("256,0,0").is_err());
    assert_eq!(
        parse_rgb("purple"),
        Err(ConfigError::InvalidColor("purple".into()))
    );
}

#[test]
fn threads_are_evenly_spaced_and_centred() {
    let f = field(
        ThreadConfig {
            count: 4,
            ..ThreadConfig::default()
        },
        400.0,
        300.0,
    );
    let xs: Vec<f32> = f.threads().iter().map(|t| t.x).collect();
    assert_eq!(xs, vec![0.0, 100.0, 200.0, 300.0]);
    assert!(f.threads().iter().all(|t| t.y == 150.0 && t.last_y == 150.0));
}

#[test]
fn per_thread_parameters_within_ranges() {
    let f = field(ThreadConfig::default(), 800.0, 600.0);
    for t in f.threads() {
        assert!((0.05..=0.15).contains(&t.speed));
        assert!((20.0..=50.0).contains(&t.amplitude));
        assert!((0.0..=std::f32::consts::TAU).contains(&t.phase));
        assert!((1.0..=3.0).contains(&t.width));
        assert!((0.2..=0.7).contains(&t.opacity));
    }
}

#[test]
fn centred_pointer_gives_pure_sine() {
    let mut f = field(ThreadConfig::default(), 800.0, 600.0);
    f.step(None);
    assert!((f.time() - THREAD_TIME_STEP).abs() < 1e-6);
    for t in f.threads() {
        let expected = 300.0 + (f.time() * t.speed + t.phase).sin() * t.amplitude;
        assert!((t.y - expected).abs() < 1e-3);
        assert_eq!(t.last_y, 300.0);
    }
}

#[test]
fn pointer_pulls_nearby_threads_only() {
    let config = ThreadConfig {
        count: 8,
        amplitude: 1.0,
        ..ThreadConfig::default()
    };
    let mut still = field(config.clone(), 800.0, 600.0);
    let mut pulled = field(config, 800.0, 600.0);
    assert_eq!(pulled.influence_radius(), 50.0);

    still.step(None);
    // 30px below the first thread's resting point: effect 0.4, offset 0.05.
    pulled.step(Some(Vec2::new(0.0, 0.55)));
    let (a, b) = (still.threads()[0], pulled.threads()[0]);
    assert!((b.y - a.y - 0.4 * 50.0 * 0.05).abs() < 1e-3);
    // Other columns are 100px apart, well outside the 50px radius.
    for (a, b) in still.threads().iter().zip(pulled.threads()).skip(1) {
        assert!((a.y - b.y).abs() < 1e-3);
    }
}

#[test]
fn last_y_tracks_previous_frame() {
    let mut f = field(ThreadConfig::default(), 640.0, 480.0);
    f.step(None);
    let ys: Vec<f32> = f.threads().iter().map(|t| t.y).collect();
    f.step(Some(Vec2::new(0.3, 0.7)));
    for (t, prev) in f.threads().iter().zip(ys) {
        assert_eq!(t.last_y, prev);
    }
}

#[test]
fn resize_respaces_threads() {
    let mut f = field(
        ThreadConfig {
            count: 2,
            ..ThreadConfig::default()
        },
        100.0,
        100.0,
    );
    f.resize(1000.0, 50.0);
    assert_eq!(f.size(), (1000.0, 50.0));
    assert_eq!(f.threads()[1].x, 500.0);
    assert_eq!(f.threads()[1].y, 25.0);
}
