use glam::{Mat3, Mat4, Vec3};

pub const MOVEMENT_SPEED: f32 = 2.5;
pub const TURN_SPEED: f32 = 60.0;

/// Discrete per-frame camera actions, one per held key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraAction {
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,
    PitchUp,
    PitchDown,
    YawLeft,
    YawRight,
    RollLeft,
    RollRight,
}

impl CameraAction {
    pub const ALL: [CameraAction; 10] = [
        CameraAction::MoveForward,
        CameraAction::MoveBackward,
        CameraAction::MoveLeft,
        CameraAction::MoveRight,
        CameraAction::PitchUp,
        CameraAction::PitchDown,
        CameraAction::YawLeft,
        CameraAction::YawRight,
        CameraAction::RollLeft,
        CameraAction::RollRight,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Free-flying camera.
///
/// Angles are stored in degrees and the orthonormal basis is re-derived from
/// them on every rotation, so the basis never drifts. Yaw is measured in the
/// XZ plane from +X; the default of -90 faces -Z.
pub struct Camera {
    pub position: Vec3,
    pub front: Vec3,
    pub up: Vec3,
    pub right: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
    pub movement_speed: f32,
    pub turn_speed: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self::with_speeds(MOVEMENT_SPEED, TURN_SPEED)
    }

    pub fn with_speeds(movement_speed: f32, turn_speed: f32) -> Self {
        let mut camera = Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            yaw: -90.0,
            pitch: 0.0,
            roll: 0.0,
            movement_speed,
            turn_speed,
        };
        camera.update_basis();
        camera
    }

    /// Apply one action scaled by the frame delta in seconds.
    ///
    /// Multiple calls within a frame compose; later calls see the basis
    /// produced by earlier ones. Negative or non-finite deltas are treated
    /// as zero so a misbehaving clock cannot corrupt the pose.
    pub fn process_movement(&mut self, action: CameraAction, delta_time: f32) {
        let dt = if delta_time.is_finite() {
            delta_time.max(0.0)
        } else {
            0.0
        };
        let step = self.movement_speed * dt;
        let turn = self.turn_speed * dt;

        match action {
            CameraAction::MoveForward => self.position += self.front * step,
            CameraAction::MoveBackward => self.position -= self.front * step,
            CameraAction::MoveLeft => self.position -= self.right * step,
            CameraAction::MoveRight => self.position += self.right * step,
            CameraAction::PitchUp => self.rotate(0.0, turn, 0.0),
            CameraAction::PitchDown => self.rotate(0.0, -turn, 0.0),
            CameraAction::YawLeft => self.rotate(-turn, 0.0, 0.0),
            CameraAction::YawRight => self.rotate(turn, 0.0, 0.0),
            CameraAction::RollLeft => self.rotate(0.0, 0.0, -turn),
            CameraAction::RollRight => self.rotate(0.0, 0.0, turn),
        }
    }

    /// View transform mapping world space into camera space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    fn rotate(&mut self, yaw: f32, pitch: f32, roll: f32) {
        self.yaw += yaw;
        self.pitch += pitch;
        self.roll += roll;
        self.update_basis();
    }

    fn update_basis(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();

        let front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();

        // Degenerate when looking straight up or down; fall back to +X.
        let right = front.cross(Vec3::Y).normalize_or(Vec3::X);
        let up = right.cross(front).normalize();

        let roll_rotation = Mat3::from_axis_angle(front, self.roll.to_radians());

        self.front = front;
        self.right = (roll_rotation * right).normalize();
        self.up = (roll_rotation * up).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
