use super::*;

#[test]
fn canvas_rejects_empty_and_oversized() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(70_000, 10).is_err());
    assert!(Canvas::new(1280, 720).is_ok());
}

#[test]
fn canvas_center_uses_integer_halves() {
    let c = Canvas::new(1281, 721).unwrap();
    assert_eq!(c.center(), Point::new(640.0, 360.0));
}

#[test]
fn rgb_quantizes_and_formats_hex() {
    assert_eq!(Rgb::new(1.0, 0.5, 0.0).to_rgba8(), [255, 128, 0, 255]);
    assert_eq!(Rgb::new(2.0, -1.0, 0.0).to_rgba8(), [255, 0, 0, 255]);
    assert_eq!(Rgb::new(1.0, 0.0, 1.0).to_hex(), "#ff00ff");
}

#[test]
fn frame_index_next_saturates() {
    assert_eq!(FrameIndex(4).next(), FrameIndex(5));
    assert_eq!(FrameIndex(u64::MAX).next(), FrameIndex(u64::MAX));
}
