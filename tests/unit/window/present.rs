use super::*;

#[test]
fn sizes_within_the_limit_are_accepted() {
    check_texture_size(1280, 720, 8192).unwrap();
    check_texture_size(8192, 8192, 8192).unwrap();
}

#[test]
fn oversized_surfaces_are_a_display_error() {
    let err = check_texture_size(9000, 720, 8192).unwrap_err();
    assert!(matches!(err, GuillocheError::Display(_)));
    assert!(err.to_string().contains("9000x720"));

    let err = check_texture_size(1280, 4096, 2048).unwrap_err();
    assert!(err.to_string().contains("2048px"));
}
