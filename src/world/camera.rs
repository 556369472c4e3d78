use bevy::prelude::*;

/// Smoothed view onto the world.
///
/// `position` is the fractional top-left world offset of the viewport; the
/// viewport is the window size divided by the zoom factor.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewCamera {
    pub position: Vec2,
    pub viewport: Vec2,
    pub zoom: f32,
    pub lerp: f32,
}

impl ViewCamera {
    pub fn new(zoom: f32, lerp: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            viewport: Vec2::ZERO,
            zoom,
            lerp,
        }
    }

    /// Recompute the viewport for a new surface size (logical pixels)
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height) / self.zoom;
    }

    /// Where the camera would sit if it were exactly centred on `focus`
    pub fn target_for(&self, focus: Vec2) -> Vec2 {
        focus - self.viewport / 2.0
    }

    /// Ease toward centring on `focus` by a fixed fraction of the remaining gap
    pub fn update(&mut self, focus: Vec2) {
        let target = self.target_for(focus);
        self.position += (target - self.position) * self.lerp;
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.position) * self.zoom
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen / self.zoom + self.position
    }

    /// Whole-pixel camera origin used for drawing; never written back
    pub fn render_origin(&self) -> Vec2 {
        self.position.floor()
    }
}
