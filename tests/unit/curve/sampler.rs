use super::*;

fn ring_state() -> AnimationState {
    AnimationState {
        variant: CurveVariant::Ring,
        t_step: 0.008,
        big_r: 36.0,
        small_r: 0.08,
        ..AnimationState::default()
    }
}

fn canvas() -> Canvas {
    Canvas::new(1280, 720).unwrap()
}

#[test]
fn ring_variant_sweeps_one_full_turn() {
    let frame = sample_curve(&ring_state(), canvas()).unwrap();
    assert_eq!(frame.total_steps, 785);
    assert_eq!(frame.points.len(), 786);
    assert!((frame.ring - 720.0 * 0.07).abs() < 1e-9);
}

#[test]
fn ring_variant_closes_the_loop() {
    let frame = sample_curve(&ring_state(), canvas()).unwrap();
    let first = frame.points.first().unwrap().pos;
    let last = frame.points.last().unwrap().pos;

    let xs = frame.points.iter().map(|p| p.pos.x);
    let min_x = xs.clone().fold(f64::INFINITY, f64::min);
    let max_x = xs.fold(f64::NEG_INFINITY, f64::max);
    let extent = max_x - min_x;

    let max_step = frame
        .segments()
        .map(|(a, b)| a.pos.distance(b.pos))
        .fold(0.0, f64::max);

    let gap = first.distance(last);
    assert!(extent > 600.0, "extent {extent}");
    assert!(gap < extent / 2.0, "gap {gap} vs extent {extent}");
    assert!(gap <= max_step, "gap {gap} vs max step {max_step}");
}

#[test]
fn first_sample_is_one_step_into_the_sweep() {
    let s = ring_state();
    let frame = sample_curve(&s, canvas()).unwrap();
    let t: f64 = 0.008;
    let sum = 36.0 + 0.08;
    let p = 720.0 * 0.07;
    let k = sum / 0.08 * t;
    let x = (sum * t.cos() + (0.08 + p) * k.cos()) * 4.0 + 640.0;
    let y = (sum * t.sin() + (0.08 + p) * k.sin()) * 4.0 + 360.0;
    let got = frame.points[0].pos;
    assert!((got.x - x).abs() < 1e-9 && (got.y - y).abs() < 1e-9);
}

#[test]
fn tri_frequency_uses_fixed_step_and_smaller_ring() {
    let s = AnimationState::default();
    let frame = sample_curve(&s, canvas()).unwrap();
    assert_eq!(frame.total_steps, 6283);
    assert_eq!(frame.points.len(), 6284);
    assert!((frame.ring - 720.0 * 0.03).abs() < 1e-9);
}

#[test]
fn tri_frequency_collapses_to_ring_curve_without_third_circle() {
    let s = AnimationState {
        q: 0.0,
        m: 1.0,
        ..AnimationState::default()
    };
    let tri = sample_curve(&s, canvas()).unwrap();
    let p = tri.ring;
    let t: f64 = 0.001;
    let sum = s.big_r + s.small_r;
    let x = (sum * t.cos() + (s.small_r + p) * (t * sum / s.small_r).cos()) * 4.0 + 640.0;
    assert!((tri.points[0].pos.x - x).abs() < 1e-6);
}

#[test]
fn colors_start_red_and_follow_the_wheel() {
    let frame = sample_curve(&ring_state(), canvas()).unwrap();
    assert_eq!(frame.points[0].color, Rgb::new(1.0, 0.0, 0.0));
    let idx = 400;
    assert_eq!(frame.points[idx].color, rainbow(idx, frame.total_steps));
}

#[test]
fn sampling_is_deterministic() {
    let s = ring_state();
    assert_eq!(
        sample_curve(&s, canvas()).unwrap(),
        sample_curve(&s, canvas()).unwrap()
    );
}

#[test]
fn rejects_degenerate_sweep_step() {
    let s = AnimationState {
        t_step: 0.0,
        ..ring_state()
    };
    assert!(sample_curve(&s, canvas()).is_err());
}
