use std::sync::Arc;
use std::time::Duration;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Fullscreen, Window, WindowId};

use crate::animation::input::{Key, KeyOutcome};
use crate::animation::joystick::ContinuousInput;
use crate::foundation::error::{GuillocheError, GuillocheResult};
use crate::session::Session;
use crate::window::fullscreen::{DisplayMode, toggle_fullscreen};
use crate::window::present::Presenter;

/// Options for [`run`].
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowOpts {
    /// Start in fullscreen mode.
    pub fullscreen: bool,
    /// Quit after this many frames.
    pub frames: Option<u64>,
}

/// Map a physical key to the bindings the session understands.
pub fn map_key(code: KeyCode) -> Option<Key> {
    Some(match code {
        KeyCode::ArrowLeft => Key::Left,
        KeyCode::ArrowRight => Key::Right,
        KeyCode::ArrowUp => Key::Up,
        KeyCode::ArrowDown => Key::Down,
        KeyCode::Enter => Key::Return,
        KeyCode::Escape => Key::Escape,
        KeyCode::F1 => Key::F1,
        KeyCode::F2 => Key::F2,
        KeyCode::Digit1 => Key::Digit1,
        KeyCode::Digit2 => Key::Digit2,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyA => Key::A,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyM => Key::M,
        _ => return None,
    })
}

struct WinitDisplay<'a> {
    window: &'a Window,
}

impl DisplayMode for WinitDisplay<'_> {
    fn is_fullscreen(&self) -> bool {
        self.window.fullscreen().is_some()
    }

    fn set_fullscreen(&mut self, fullscreen: bool) -> GuillocheResult<()> {
        if fullscreen {
            let monitor = self
                .window
                .current_monitor()
                .ok_or_else(|| GuillocheError::display("no monitor available for fullscreen"))?;
            self.window
                .set_fullscreen(Some(Fullscreen::Borderless(Some(monitor))));
        } else {
            self.window.set_fullscreen(None);
        }
        Ok(())
    }
}

struct GuillocheApp {
    session: Session,
    continuous: Box<dyn ContinuousInput>,
    opts: WindowOpts,
    frames_left: Option<u64>,
    window: Option<Arc<Window>>,
    presenter: Option<Presenter>,
    fatal: Option<GuillocheError>,
}

impl GuillocheApp {
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: GuillocheError) {
        tracing::error!("{err}");
        self.fatal = Some(err);
        event_loop.exit();
    }

    fn open_window(&mut self, event_loop: &ActiveEventLoop) -> GuillocheResult<()> {
        let canvas = self.session.canvas();
        let mut attrs = Window::default_attributes()
            .with_title("guilloche")
            .with_inner_size(PhysicalSize::new(canvas.width, canvas.height));
        if self.opts.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| GuillocheError::display(format!("unable to create window: {e}")))?,
        );
        window.set_cursor_visible(false);

        let presenter = pollster::block_on(Presenter::new(window.clone()))?;
        self.window = Some(window);
        self.presenter = Some(presenter);
        Ok(())
    }

    fn on_key(&mut self, event_loop: &ActiveEventLoop, key: Key) {
        match self.session.handle_key(key) {
            Ok(KeyOutcome::Quit) => event_loop.exit(),
            Ok(KeyOutcome::ToggleFullscreen) => {
                let Some(window) = self.window.as_deref() else {
                    return;
                };
                let toggled = toggle_fullscreen(&mut WinitDisplay { window });
                if let Err(err) = toggled {
                    self.fail(event_loop, err);
                }
            }
            Ok(KeyOutcome::Updated | KeyOutcome::ExportSvg) => {}
            Err(err) => tracing::warn!("svg export failed: {err}"),
        }
    }
}

impl ApplicationHandler for GuillocheApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.open_window(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                // Minimized windows report 0x0; keep the previous surface.
                if size.width == 0 || size.height == 0 {
                    return;
                }
                if let Err(err) = self.session.resize(size.width, size.height) {
                    self.fail(event_loop, err);
                    return;
                }
                let resized = match self.presenter.as_mut() {
                    Some(presenter) => presenter.resize(size.width, size.height),
                    None => Ok(()),
                };
                if let Err(err) = resized {
                    self.fail(event_loop, err);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                if let Some(key) = map_key(code) {
                    self.on_key(event_loop, key);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.session.handle_cursor(position.x, position.y);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                tracing::debug!(?button, ?state, "mouse button");
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.frames_left == Some(0) {
            event_loop.exit();
            return;
        }
        let Some(presenter) = self.presenter.as_mut() else {
            return;
        };

        let delta = self.continuous.poll();
        let shown = match self.session.tick(delta) {
            Ok(frame) => presenter.present(frame),
            Err(err) => Err(err),
        };
        if let Err(err) = shown {
            self.fail(event_loop, err);
            return;
        }

        if let Some(left) = self.frames_left.as_mut() {
            *left -= 1;
        }
        std::thread::sleep(Duration::from_millis(1));
    }
}

/// Open a window and animate `session` until quit, returning it for inspection.
pub fn run(
    session: Session,
    continuous: Box<dyn ContinuousInput>,
    opts: WindowOpts,
) -> GuillocheResult<Session> {
    let event_loop = EventLoop::new()
        .map_err(|e| GuillocheError::display(format!("unable to start event loop: {e}")))?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GuillocheApp {
        session,
        continuous,
        opts,
        frames_left: opts.frames,
        window: None,
        presenter: None,
        fatal: None,
    };
    event_loop
        .run_app(&mut app)
        .map_err(|e| GuillocheError::display(format!("event loop failed: {e}")))?;

    if let Some(err) = app.fatal.take() {
        return Err(err);
    }
    app.session.finish()?;
    Ok(app.session)
}

#[cfg(test)]
#[path = "../../tests/unit/window/app.rs"]
mod tests;
