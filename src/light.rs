use glam::Vec3;

pub const LIGHT_ORBIT_RADIUS: f32 = 1.5;
pub const LIGHT_ANGULAR_SPEED: f32 = 0.5;

/// Point light orbiting the origin on the XZ plane.
#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    pub color: Vec3,
    pub orbit_radius: f32,
    pub angular_speed: f32,
}

impl PointLight {
    pub fn new() -> Self {
        Self {
            color: Vec3::ONE,
            orbit_radius: LIGHT_ORBIT_RADIUS,
            angular_speed: LIGHT_ANGULAR_SPEED,
        }
    }

    /// Light position at `time` seconds since startup.
    pub fn position_at(&self, time: f32) -> Vec3 {
        let angle = self.angular_speed * time;
        self.orbit_radius * Vec3::new(angle.cos(), 0.0, angle.sin())
    }
}

impl Default for PointLight {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_starts_on_positive_x() {
        let light = PointLight::new();
        let position = light.position_at(0.0);
        assert!((position - Vec3::new(1.5, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn orbit_stays_on_xz_plane_at_fixed_radius() {
        let light = PointLight::new();
        for i in 0..100 {
            let position = light.position_at(i as f32 * 0.37);
            assert_eq!(position.y, 0.0);
            assert!((position.length() - 1.5).abs() < 1e-4);
        }
    }

    #[test]
    fn quarter_turn_after_pi_seconds() {
        let light = PointLight::new();
        // angular speed 0.5 rad/s: t = pi gives angle pi/2, i.e. +Z
        let position = light.position_at(std::f32::consts::PI);
        assert!((position - Vec3::new(0.0, 0.0, 1.5)).length() < 1e-4);
    }
}
