use super::*;

#[test]
fn bound_keys_map_to_session_keys() {
    assert_eq!(map_key(KeyCode::ArrowUp), Some(Key::Up));
    assert_eq!(map_key(KeyCode::Enter), Some(Key::Return));
    assert_eq!(map_key(KeyCode::Digit2), Some(Key::Digit2));
    assert_eq!(map_key(KeyCode::KeyM), Some(Key::M));
}

#[test]
fn unbound_keys_are_ignored() {
    assert_eq!(map_key(KeyCode::KeyZ), None);
    assert_eq!(map_key(KeyCode::Space), None);
    assert_eq!(map_key(KeyCode::NumpadEnter), None);
}
