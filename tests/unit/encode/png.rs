use super::*;

fn solid_frame(w: u32, h: u32, rgba: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width: w,
        height: h,
        data: rgba.repeat((w * h) as usize),
    }
}

#[test]
fn file_names_are_ten_digit_zero_padded() {
    assert_eq!(sequence_file_name(0, "png"), "0000000000.png");
    assert_eq!(sequence_file_name(42, "svg"), "0000000042.svg");
}

#[test]
fn writes_sequential_files_that_decode() {
    let dir = PathBuf::from("target").join("unit_png_sink");
    let _ = std::fs::remove_dir_all(&dir);

    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(SinkConfig {
        width: 4,
        height: 3,
    })
    .unwrap();
    for i in 0..2 {
        sink.push_frame(FrameIndex(i), &solid_frame(4, 3, [255, 0, 0, 255]))
            .unwrap();
    }
    sink.end().unwrap();

    assert_eq!(sink.written(), 2);
    let img = image::open(dir.join("0000000001.png")).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (4, 3));
    assert_eq!(img.get_pixel(2, 1).0, [255, 0, 0, 255]);
    assert!(!dir.join("0000000002.png").exists());
}

#[test]
fn rejects_out_of_order_frames() {
    let dir = PathBuf::from("target").join("unit_png_sink_order");
    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(SinkConfig {
        width: 1,
        height: 1,
    })
    .unwrap();
    let f = solid_frame(1, 1, [0, 0, 0, 255]);
    sink.push_frame(FrameIndex(3), &f).unwrap();
    assert!(sink.push_frame(FrameIndex(3), &f).is_err());
}
