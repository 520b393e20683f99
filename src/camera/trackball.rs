//! Arcball camera driven by pointer gestures and polled once per frame.

use glam::{Mat4, Vec2, Vec3};
use web_time::Instant;

use super::core::Camera;
use super::gesture::{GestureState, PendingOp};
use super::viewport::Viewport;
use crate::input::{InputEvent, MouseButton};
use crate::options::CameraOptions;

const INITIAL_EYE: Vec3 = Vec3::new(10.0, 0.0, 0.0);
const INITIAL_UP: Vec3 = Vec3::Z;
const INITIAL_RIGHT: Vec3 = Vec3::Y;

/// Rotations smaller than this (radians) are skipped.
const MIN_ROTATION_ANGLE: f32 = 1e-6;

/// A press-and-release that never became a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Click {
    /// Pixel position of the press.
    pub position: Vec2,
    /// Button that was pressed.
    pub button: MouseButton,
}

/// Trackball camera: left drag rotates, right drag pans, the wheel zooms.
///
/// Pointer events only update the gesture state and queue a [`PendingOp`];
/// [`update`](Self::update) applies at most one queued operation per call.
/// The eye is stored as an offset from `center`, and `up`/`right` are
/// co-rotated with it so the three stay consistent.
#[derive(Debug, Clone)]
pub struct TrackballCamera {
    eye: Vec3,
    center: Vec3,
    up: Vec3,
    right: Vec3,

    mouse: Vec2,
    old_mouse: Vec2,

    state: GestureState,
    button: MouseButton,
    pending: PendingOp,
    /// Zoom factor held back while a rotate owns the slot; `1.0` when
    /// empty.
    zoom_carry: f32,

    /// Gesture anchor: world-space ball point when rotating, screen point
    /// when panning.
    start: Vec3,
    end: Vec3,

    viewport: Viewport,
    options: CameraOptions,
}

impl TrackballCamera {
    /// Set up the initial basis (eye on +X, Z up) for the given surface.
    #[must_use]
    pub fn new(viewport: Viewport, options: &CameraOptions) -> Self {
        Self {
            eye: INITIAL_EYE,
            center: Vec3::ZERO,
            up: INITIAL_UP,
            right: INITIAL_RIGHT,
            mouse: Vec2::ZERO,
            old_mouse: Vec2::ZERO,
            state: GestureState::Up,
            button: MouseButton::Primary,
            pending: PendingOp::None,
            zoom_carry: 1.0,
            start: Vec3::ZERO,
            end: Vec3::ZERO,
            viewport,
            options: options.clone(),
        }
    }

    /// Restore the initial basis and drop any in-flight gesture.
    pub fn reset(&mut self) {
        let viewport = self.viewport;
        let options = std::mem::take(&mut self.options);
        *self = Self::new(viewport, &options);
    }

    /// Track a new surface size. Only the arcball radius depends on it.
    pub fn resize(&mut self, viewport: Viewport) {
        log::debug!(
            "trackball resize {}x{} (radius {})",
            viewport.width(),
            viewport.height(),
            viewport.radius()
        );
        self.viewport = viewport;
    }

    /// Replace the control parameters. The current view is kept.
    pub fn set_options(&mut self, options: &CameraOptions) {
        self.options = options.clone();
    }

    // ── Queries ──────────────────────────────────────────────────────────

    /// World-space eye position (`center + eye offset`).
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.center + self.eye
    }

    /// Look-at target.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Up vector.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Right vector.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Vector from the target to the eye.
    #[must_use]
    pub fn eye_offset(&self) -> Vec3 {
        self.eye
    }

    /// Current gesture state.
    #[must_use]
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Operation queued for the next [`update`](Self::update).
    #[must_use]
    pub fn pending(&self) -> PendingOp {
        self.pending
    }

    /// Surface the camera maps pointer positions against.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Look-at matrix for the current eye/center/up.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.center, self.up)
    }

    /// Snapshot with projection parameters, for building uniforms.
    #[must_use]
    pub fn camera(&self) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.center,
            up: self.up,
            aspect: self.viewport.aspect(),
            fovy: self.options.fovy,
            znear: self.options.znear,
            zfar: self.options.zfar,
        }
    }

    // ── Events ───────────────────────────────────────────────────────────

    /// Feed one pointer event, timestamped now.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<Click> {
        self.handle_event_at(event, Instant::now())
    }

    /// Feed one pointer event that happened at `now`.
    ///
    /// Returns the click when a release ends a gesture that never became a
    /// drag.
    pub fn handle_event_at(
        &mut self,
        event: InputEvent,
        now: Instant,
    ) -> Option<Click> {
        match event {
            InputEvent::PointerDown { x, y, button } => {
                self.pointer_down(Vec2::new(x, y), button, now);
                None
            }
            InputEvent::PointerMove { x, y } => {
                self.pointer_move(Vec2::new(x, y), now);
                None
            }
            InputEvent::PointerUp { .. } => self.pointer_up(now),
            InputEvent::Wheel { delta } => {
                self.wheel(delta);
                None
            }
        }
    }

    fn pointer_down(
        &mut self,
        position: Vec2,
        button: MouseButton,
        now: Instant,
    ) {
        // The new anchor invalidates a rotate or pan left over from the
        // previous gesture; a queued zoom is kept.
        if matches!(self.pending, PendingOp::Rotate | PendingOp::Pan) {
            log::trace!("dropped stale {:?} on press", self.pending);
            self.pending = PendingOp::None;
            self.release_zoom_carry();
        }

        self.old_mouse = position;
        self.mouse = position;
        self.state = GestureState::Down { since: now };
        self.button = button;

        match button {
            MouseButton::Primary => {
                self.start = self.mouse_on_ball(position);
            }
            MouseButton::Secondary => {
                self.start = self.viewport.to_screen(position).extend(0.0);
            }
            MouseButton::Middle | MouseButton::Other(_) => {}
        }
    }

    fn pointer_move(&mut self, position: Vec2, now: Instant) {
        self.expire_hold(now);
        self.mouse = position;

        if matches!(self.state, GestureState::Down { .. })
            && (position - self.old_mouse).length_squared()
                > self.options.drag_threshold_px2
        {
            log::debug!("gesture {:?} became a drag", self.button);
            self.state = GestureState::Drag;
        }

        if self.state == GestureState::Drag {
            match self.button {
                MouseButton::Primary => self.request(PendingOp::Rotate),
                MouseButton::Secondary => self.request(PendingOp::Pan),
                MouseButton::Middle | MouseButton::Other(_) => {}
            }
        }
    }

    fn pointer_up(&mut self, now: Instant) -> Option<Click> {
        self.expire_hold(now);
        let click = matches!(self.state, GestureState::Down { .. }).then(|| {
            log::debug!("click {:?} at {}", self.button, self.old_mouse);
            Click {
                position: self.old_mouse,
                button: self.button,
            }
        });
        self.state = GestureState::Up;
        click
    }

    fn wheel(&mut self, delta: f32) {
        if delta == 0.0 {
            return;
        }
        let factor = 1.0 - delta * self.options.wheel_sensitivity;
        self.request(PendingOp::Zoom(factor));
    }

    /// Queue `op`. A zoom that a rotate outranks goes to `zoom_carry`
    /// instead of being lost, and is re-queued once the rotate has run.
    fn request(&mut self, op: PendingOp) {
        match (self.pending, op) {
            (PendingOp::Rotate, PendingOp::Zoom(factor)) => {
                self.zoom_carry *= factor;
            }
            (PendingOp::Zoom(factor), PendingOp::Rotate) => {
                self.zoom_carry *= factor;
                self.pending = PendingOp::Rotate;
            }
            _ => self.pending.request(op),
        }
    }

    /// Move a held-back zoom into the empty slot.
    fn release_zoom_carry(&mut self) {
        if self.zoom_carry != 1.0 {
            self.pending.request(PendingOp::Zoom(self.zoom_carry));
            self.zoom_carry = 1.0;
        }
    }

    /// Promote a press held past the click timeout to a drag.
    fn expire_hold(&mut self, now: Instant) {
        if self.state.hold_expired(now, self.options.click_timeout()) {
            log::debug!("gesture {:?} held past click timeout", self.button);
            self.state = GestureState::Drag;
        }
    }

    // ── Per-frame step ───────────────────────────────────────────────────

    /// Apply at most one queued operation. Returns whether the view changed.
    pub fn update(&mut self) -> bool {
        self.update_at(Instant::now())
    }

    /// [`update`](Self::update) with an explicit clock, so a held button's
    /// promotion to a drag can be driven deterministically.
    pub fn update_at(&mut self, now: Instant) -> bool {
        self.expire_hold(now);

        match self.pending.take() {
            PendingOp::Rotate => {
                self.rotate();
                self.release_zoom_carry();
            }
            PendingOp::Zoom(factor) => self.zoom(factor),
            PendingOp::Pan => self.pan(),
            PendingOp::None => return false,
        }
        true
    }

    /// Project a pixel position onto the arcball, expressed in world space
    /// through the current `right`/`up`/`eye` basis.
    fn mouse_on_ball(&self, mouse: Vec2) -> Vec3 {
        let ball = self.viewport.to_ball(mouse);
        self.eye.normalize() * ball.z + self.right * ball.x + self.up * ball.y
    }

    fn rotate(&mut self) {
        self.end = self.mouse_on_ball(self.mouse);

        let angle = self.start.angle_between(self.end);
        if !angle.is_finite() || angle <= MIN_ROTATION_ANGLE {
            log::trace!("rotate skipped (angle {angle})");
            return;
        }

        let axis = self.end.cross(self.start);
        let Some(axis) = axis.try_normalize() else {
            return;
        };

        let matrix = Mat4::from_axis_angle(axis, angle);
        self.apply_rotation(&matrix);
        self.end = matrix.transform_vector3(self.end);
        self.start = self.end;
        log::trace!("rotate {angle} rad about {axis}");
    }

    /// Rotate the eye offset, and `up`/`right` with it, by `angle` radians
    /// about `axis` (world space, through the target).
    pub fn orbit(&mut self, axis: Vec3, angle: f32) {
        if let Some(axis) = axis.try_normalize() {
            self.apply_rotation(&Mat4::from_axis_angle(axis, angle));
        }
    }

    fn apply_rotation(&mut self, matrix: &Mat4) {
        self.eye = matrix.transform_vector3(self.eye);
        self.up = matrix.transform_vector3(self.up);
        self.right = matrix.transform_vector3(self.right);

        if self.options.reorthonormalize {
            let dir = self.eye.normalize();
            self.right = self.up.cross(dir).normalize();
            self.up = dir.cross(self.right);
        }
    }

    /// Scale the eye distance by `factor`, snapping to the near/far
    /// distance when the result leaves the allowed band.
    pub fn zoom(&mut self, factor: f32) {
        let dir = self.eye.normalize();
        let distance = self.eye.length() * factor;
        let (min, max) = (self.options.min_distance, self.options.max_distance);

        let distance = if distance * distance > max * max {
            log::debug!("zoom clamped to far distance {max}");
            max
        } else if distance <= 0.0 || distance * distance < min * min {
            log::debug!("zoom clamped to near distance {min}");
            min
        } else {
            distance
        };
        self.eye = dir * distance;
        log::trace!("zoom x{factor} -> {distance}");
    }

    fn pan(&mut self) {
        let end = self.viewport.to_screen(self.mouse).extend(0.0);
        let delta = self.start - end;
        if delta.length_squared() == 0.0 {
            return;
        }

        let scaled = delta * (self.eye.length() * self.options.pan_factor);
        let offset = self.right * scaled.x + self.up * scaled.y;
        self.center += offset;
        self.end = end;
        self.start = end;
        log::trace!("pan by {offset}");
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;

    const EPS: f32 = 1e-4;

    /// 400x400 surface: radius 200, center pixel (200, 200).
    fn camera() -> TrackballCamera {
        TrackballCamera::new(
            Viewport::new(400, 400).unwrap(),
            &CameraOptions::default(),
        )
    }

    fn down(
        cam: &mut TrackballCamera,
        x: f32,
        y: f32,
        button: MouseButton,
        t: Instant,
    ) {
        let _ =
            cam.handle_event_at(InputEvent::PointerDown { x, y, button }, t);
    }

    fn mv(cam: &mut TrackballCamera, x: f32, y: f32, t: Instant) {
        let _ = cam.handle_event_at(InputEvent::PointerMove { x, y }, t);
    }

    fn up(
        cam: &mut TrackballCamera,
        x: f32,
        y: f32,
        button: MouseButton,
        t: Instant,
    ) -> Option<Click> {
        cam.handle_event_at(InputEvent::PointerUp { x, y, button }, t)
    }

    fn basis(cam: &TrackballCamera) -> (Vec3, Vec3, Vec3) {
        (cam.eye_offset(), cam.up(), cam.right())
    }

    #[test]
    fn initial_basis() {
        let cam = camera();
        assert_eq!(cam.eye(), Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(cam.center(), Vec3::ZERO);
        assert_eq!(cam.up(), Vec3::Z);
        assert_eq!(cam.right(), Vec3::Y);
        assert_eq!(cam.viewport().radius(), 200.0);
        assert_eq!(cam.state(), GestureState::Up);
    }

    #[test]
    fn idle_update_is_a_no_op() {
        let mut cam = camera();
        let before = cam.clone();
        assert!(!cam.update_at(Instant::now()));
        assert_eq!(basis(&cam), basis(&before));
        assert_eq!(cam.center(), before.center());
        assert!(cam.pending().is_none());
    }

    #[test]
    fn motionless_click_does_not_rotate() {
        let mut cam = camera();
        let t = Instant::now();
        down(&mut cam, 230.0, 180.0, MouseButton::Primary, t);
        mv(&mut cam, 230.0, 180.0, t);
        let click = up(&mut cam, 230.0, 180.0, MouseButton::Primary, t);

        assert_eq!(
            click,
            Some(Click {
                position: Vec2::new(230.0, 180.0),
                button: MouseButton::Primary
            })
        );
        assert!(!cam.update_at(t));
        assert_eq!(basis(&cam), basis(&camera()));
    }

    #[test]
    fn small_motion_stays_below_drag_threshold() {
        let mut cam = camera();
        let t = Instant::now();
        down(&mut cam, 200.0, 200.0, MouseButton::Primary, t);
        // 7² = 49 < 60
        mv(&mut cam, 207.0, 200.0, t);
        assert!(matches!(cam.state(), GestureState::Down { .. }));
        assert!(cam.pending().is_none());
    }

    #[test]
    fn motion_past_threshold_starts_rotating() {
        let mut cam = camera();
        let t = Instant::now();
        down(&mut cam, 200.0, 200.0, MouseButton::Primary, t);
        // 8² = 64 > 60
        mv(&mut cam, 208.0, 200.0, t);
        assert_eq!(cam.state(), GestureState::Drag);
        assert_eq!(cam.pending(), PendingOp::Rotate);
        assert!(up(&mut cam, 208.0, 200.0, MouseButton::Primary, t).is_none());
        assert_eq!(cam.state(), GestureState::Up);
        // Still serviced after release.
        assert!(cam.update_at(t));
    }

    #[test]
    fn held_button_becomes_drag_after_timeout() {
        let mut cam = camera();
        let t0 = Instant::now();
        down(&mut cam, 200.0, 200.0, MouseButton::Primary, t0);

        assert!(!cam.update_at(t0 + Duration::from_millis(100)));
        assert!(matches!(cam.state(), GestureState::Down { .. }));

        assert!(!cam.update_at(t0 + Duration::from_millis(300)));
        assert_eq!(cam.state(), GestureState::Drag);

        // Small moves now rotate.
        mv(&mut cam, 202.0, 200.0, t0 + Duration::from_millis(310));
        assert_eq!(cam.pending(), PendingOp::Rotate);
        assert!(up(&mut cam, 202.0, 200.0, MouseButton::Primary, t0).is_none());
    }

    #[test]
    fn release_after_timeout_without_poll_is_not_a_click() {
        let mut cam = camera();
        let t0 = Instant::now();
        down(&mut cam, 200.0, 200.0, MouseButton::Primary, t0);
        let click = up(
            &mut cam,
            200.0,
            200.0,
            MouseButton::Primary,
            t0 + Duration::from_millis(1000),
        );
        assert!(click.is_none());
        assert_eq!(cam.state(), GestureState::Up);
    }

    #[test]
    fn small_move_after_timeout_without_poll_rotates() {
        let mut cam = camera();
        let t0 = Instant::now();
        down(&mut cam, 200.0, 200.0, MouseButton::Primary, t0);
        mv(&mut cam, 203.0, 200.0, t0 + Duration::from_millis(300));
        assert_eq!(cam.state(), GestureState::Drag);
        assert_eq!(cam.pending(), PendingOp::Rotate);
    }

    #[test]
    fn new_press_restarts_hold_deadline() {
        let mut cam = camera();
        let t0 = Instant::now();
        down(&mut cam, 200.0, 200.0, MouseButton::Primary, t0);
        let _ = up(&mut cam, 200.0, 200.0, MouseButton::Primary, t0);
        let t1 = t0 + Duration::from_millis(200);
        down(&mut cam, 200.0, 200.0, MouseButton::Primary, t1);

        // 260ms after the first press but only 60ms after the second.
        let _ = cam.update_at(t0 + Duration::from_millis(260));
        assert!(matches!(cam.state(), GestureState::Down { .. }));
    }

    #[test]
    fn drag_right_orbits_about_screen_vertical() {
        let mut cam = camera();
        let t = Instant::now();
        down(&mut cam, 200.0, 200.0, MouseButton::Primary, t);
        mv(&mut cam, 250.0, 200.0, t);
        assert!(cam.update_at(t));

        let eye = cam.eye();
        assert!(!eye.abs_diff_eq(Vec3::new(10.0, 0.0, 0.0), EPS));
        assert!((eye.length() - 10.0).abs() < EPS);
        // Rotation axis is the up vector, so the eye stays in the z = 0
        // plane and swings away from `right`.
        assert!(eye.z.abs() < EPS);
        assert!(eye.y < 0.0);
        assert!(cam.up().abs_diff_eq(Vec3::Z, EPS));

        let expected = (0.25f32 / (1.0f32 - 0.0625).sqrt()).atan();
        let actual = eye.normalize().angle_between(Vec3::X);
        assert!((actual - expected).abs() < EPS);
    }

    #[test]
    fn drag_out_and_back_returns_basis() {
        let mut cam = camera();
        let t = Instant::now();
        down(&mut cam, 200.0, 200.0, MouseButton::Primary, t);
        mv(&mut cam, 260.0, 170.0, t);
        assert!(cam.update_at(t));
        mv(&mut cam, 200.0, 200.0, t);
        assert!(cam.update_at(t));

        let (eye, up, right) = basis(&cam);
        assert!(eye.abs_diff_eq(INITIAL_EYE, EPS));
        assert!(up.abs_diff_eq(INITIAL_UP, EPS));
        assert!(right.abs_diff_eq(INITIAL_RIGHT, EPS));
    }

    #[test]
    fn orbit_round_trip() {
        let mut cam = camera();
        let axis = Vec3::new(0.3, -0.5, 0.8);
        cam.orbit(axis, 0.7);
        assert!(!cam.eye_offset().abs_diff_eq(INITIAL_EYE, EPS));
        cam.orbit(axis, -0.7);

        let (eye, up, right) = basis(&cam);
        assert!(eye.abs_diff_eq(INITIAL_EYE, EPS));
        assert!(up.abs_diff_eq(INITIAL_UP, EPS));
        assert!(right.abs_diff_eq(INITIAL_RIGHT, EPS));
    }

    #[test]
    fn rotation_keeps_basis_orthonormal_when_enabled() {
        let options = CameraOptions {
            reorthonormalize: true,
            ..CameraOptions::default()
        };
        let mut cam =
            TrackballCamera::new(Viewport::new(400, 400).unwrap(), &options);
        for i in 0..50 {
            cam.orbit(Vec3::new(1.0, i as f32, 0.5), 0.37);
        }
        let dir = cam.eye_offset().normalize();
        assert!(cam.up().dot(dir).abs() < EPS);
        assert!(cam.right().dot(dir).abs() < EPS);
        assert!(cam.up().dot(cam.right()).abs() < EPS);
        assert!((cam.up().length() - 1.0).abs() < EPS);
        assert!((cam.eye_offset().length() - 10.0).abs() < 1e-3);
    }

    #[test]
    fn degenerate_rotation_is_skipped() {
        let mut cam = camera();
        let t = Instant::now();
        down(&mut cam, 200.0, 200.0, MouseButton::Primary, t);
        let _ = cam.update_at(t + Duration::from_millis(300));
        // Drag without leaving the anchor point.
        mv(&mut cam, 200.0, 200.0, t);
        assert_eq!(cam.pending(), PendingOp::Rotate);
        assert!(cam.update_at(t));

        let (eye, up, right) = basis(&cam);
        assert!(eye.is_finite() && up.is_finite() && right.is_finite());
        assert_eq!((eye, up, right), (INITIAL_EYE, INITIAL_UP, INITIAL_RIGHT));
    }

    #[test]
    fn wheel_queues_multiplicative_zoom() {
        let mut cam = camera();
        let t = Instant::now();
        let _ = cam.handle_event_at(InputEvent::Wheel { delta: 120.0 }, t);
        let _ = cam.handle_event_at(InputEvent::Wheel { delta: 120.0 }, t);
        let factor = (1.0 - 120.0 * 0.0002) * (1.0 - 120.0 * 0.0002);
        assert_eq!(cam.pending(), PendingOp::Zoom(factor));

        assert!(cam.update_at(t));
        assert!((cam.eye_offset().length() - 10.0 * factor).abs() < EPS);
        assert!(!cam.update_at(t));
    }

    #[test]
    fn zero_wheel_delta_queues_nothing() {
        let mut cam = camera();
        let _ = cam.handle_event(InputEvent::Wheel { delta: 0.0 });
        assert!(cam.pending().is_none());
    }

    #[test]
    fn zoom_clamps_far_and_near() {
        let mut cam = camera();
        for _ in 0..5 {
            cam.zoom(20.0);
            assert!((cam.eye_offset().length() - 100.0).abs() < EPS);
        }
        assert!(cam.eye_offset().normalize().abs_diff_eq(Vec3::X, EPS));

        for _ in 0..5 {
            cam.zoom(0.001);
            assert!((cam.eye_offset().length() - 0.3).abs() < EPS);
        }
        assert!(cam.eye_offset().normalize().abs_diff_eq(Vec3::X, EPS));

        cam.zoom(-2.0);
        assert!((cam.eye_offset().length() - 0.3).abs() < EPS);
        assert!(cam.eye_offset().x > 0.0);
    }

    #[test]
    fn zoom_inside_band_is_exact_scale() {
        let mut cam = camera();
        cam.zoom(0.5);
        assert!((cam.eye_offset().length() - 5.0).abs() < EPS);
    }

    #[test]
    fn pan_with_zero_delta_keeps_center() {
        let mut cam = camera();
        let t = Instant::now();
        down(&mut cam, 120.0, 90.0, MouseButton::Secondary, t);
        let _ = cam.update_at(t + Duration::from_millis(300));
        mv(&mut cam, 120.0, 90.0, t);
        assert_eq!(cam.pending(), PendingOp::Pan);
        assert!(cam.update_at(t));
        assert_eq!(cam.center(), Vec3::ZERO);
    }

    #[test]
    fn pan_moves_center_in_screen_plane() {
        let mut cam = camera();
        cam.orbit(Vec3::new(0.2, 1.0, -0.4), 0.9);
        let t = Instant::now();
        down(&mut cam, 200.0, 200.0, MouseButton::Secondary, t);
        mv(&mut cam, 240.0, 170.0, t);
        assert_eq!(cam.pending(), PendingOp::Pan);
        let eye_offset = cam.eye_offset();
        assert!(cam.update_at(t));

        let moved = cam.center();
        assert!(moved.length() > 0.0);
        assert!(moved.dot(eye_offset.normalize()).abs() < EPS);
        assert_eq!(cam.eye_offset(), eye_offset);

        // Screen delta (-0.2, -0.15) scaled by |eye| * 0.3 = 3.
        let expected = cam.right() * -0.6 + cam.up() * -0.45;
        assert!(moved.abs_diff_eq(expected, EPS));

        // Anchor advanced: polling again with the same mouse does nothing.
        mv(&mut cam, 240.0, 170.0, t);
        assert!(cam.update_at(t));
        assert!(cam.center().abs_diff_eq(moved, EPS));
    }

    #[test]
    fn rotate_runs_before_pending_zoom() {
        let mut cam = camera();
        let t = Instant::now();
        let _ = cam.handle_event_at(InputEvent::Wheel { delta: -240.0 }, t);
        down(&mut cam, 200.0, 200.0, MouseButton::Primary, t);
        mv(&mut cam, 260.0, 200.0, t);
        assert_eq!(cam.pending(), PendingOp::Rotate);
        assert!(cam.update_at(t));
        assert!((cam.eye_offset().length() - 10.0).abs() < EPS);

        assert!(cam.update_at(t));
        let factor = 1.0 + 240.0 * 0.0002;
        assert!((cam.eye_offset().length() - 10.0 * factor).abs() < EPS);
        assert!(!cam.update_at(t));
    }

    #[test]
    fn scroll_during_rotate_is_applied_afterwards() {
        let mut cam = camera();
        let t = Instant::now();
        down(&mut cam, 200.0, 200.0, MouseButton::Primary, t);
        mv(&mut cam, 230.0, 200.0, t);
        let _ = cam.handle_event_at(InputEvent::Wheel { delta: 120.0 }, t);
        let _ = cam.handle_event_at(InputEvent::Wheel { delta: 120.0 }, t);
        assert_eq!(cam.pending(), PendingOp::Rotate);

        // Continuous drag: each frame has a rotate queued.
        assert!(cam.update_at(t));
        mv(&mut cam, 260.0, 200.0, t);
        assert_eq!(cam.pending(), PendingOp::Rotate);
        assert!(cam.update_at(t));
        assert!((cam.eye_offset().length() - 10.0).abs() < EPS);

        let factor = (1.0 - 120.0 * 0.0002) * (1.0 - 120.0 * 0.0002);
        assert_eq!(cam.pending(), PendingOp::Zoom(factor));
        assert!(cam.update_at(t));
        assert!((cam.eye_offset().length() - 10.0 * factor).abs() < EPS);
        assert!(!cam.update_at(t));
    }

    #[test]
    fn press_with_other_button_drops_stale_rotate() {
        let mut cam = camera();
        let t = Instant::now();
        let _ = cam.handle_event_at(InputEvent::Wheel { delta: 120.0 }, t);
        down(&mut cam, 200.0, 200.0, MouseButton::Primary, t);
        mv(&mut cam, 260.0, 170.0, t);
        let _ = up(&mut cam, 260.0, 170.0, MouseButton::Primary, t);
        assert_eq!(cam.pending(), PendingOp::Rotate);

        // Right press before the next frame re-anchors in screen space.
        down(&mut cam, 100.0, 100.0, MouseButton::Secondary, t);
        let factor = 1.0 - 120.0 * 0.0002;
        assert_eq!(cam.pending(), PendingOp::Zoom(factor));
        assert!(cam.update_at(t));

        let (eye, up, right) = basis(&cam);
        assert!(eye.abs_diff_eq(INITIAL_EYE * factor, EPS));
        assert_eq!((up, right), (INITIAL_UP, INITIAL_RIGHT));
        assert!(!cam.update_at(t));
    }

    #[test]
    fn middle_drag_requests_nothing() {
        let mut cam = camera();
        let t = Instant::now();
        down(&mut cam, 200.0, 200.0, MouseButton::Middle, t);
        mv(&mut cam, 300.0, 300.0, t);
        assert_eq!(cam.state(), GestureState::Drag);
        assert!(cam.pending().is_none());
    }

    #[test]
    fn reset_restores_initial_view() {
        let mut cam = camera();
        cam.orbit(Vec3::X, 1.0);
        cam.zoom(0.5);
        cam.reset();
        assert_eq!(basis(&cam), (INITIAL_EYE, INITIAL_UP, INITIAL_RIGHT));
        assert_eq!(cam.viewport().radius(), 200.0);
    }

    #[test]
    fn view_matrix_looks_at_center() {
        let cam = camera();
        let p = cam.view_matrix().transform_point3(cam.center());
        assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, -10.0), EPS));
        assert_eq!(cam.camera().aspect, 1.0);
    }
}
