use super::*;

#[derive(Default)]
struct FakeDisplay {
    fullscreen: bool,
    fail_enter: bool,
    fail_leave: bool,
    calls: Vec<bool>,
}

impl DisplayMode for FakeDisplay {
    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn set_fullscreen(&mut self, fullscreen: bool) -> GuillocheResult<()> {
        self.calls.push(fullscreen);
        if (fullscreen && self.fail_enter) || (!fullscreen && self.fail_leave) {
            return Err(GuillocheError::display("mode rejected"));
        }
        self.fullscreen = fullscreen;
        Ok(())
    }
}

#[test]
fn toggle_flips_the_mode() {
    let mut d = FakeDisplay::default();
    assert!(toggle_fullscreen(&mut d).unwrap());
    assert!(d.fullscreen);
    assert!(!toggle_fullscreen(&mut d).unwrap());
    assert!(!d.fullscreen);
}

#[test]
fn failed_switch_restores_previous_mode() {
    let mut d = FakeDisplay {
        fail_enter: true,
        ..FakeDisplay::default()
    };
    assert!(!toggle_fullscreen(&mut d).unwrap());
    assert!(!d.fullscreen);
    assert_eq!(d.calls, vec![true, false]);
}

#[test]
fn failed_restore_is_fatal() {
    let mut d = FakeDisplay {
        fail_enter: true,
        fail_leave: true,
        ..FakeDisplay::default()
    };
    let err = toggle_fullscreen(&mut d).unwrap_err();
    assert!(err.to_string().contains("could not be restored"));
}
