use nannou::prelude::Vec2;

/// Last known pointer position in logical coordinates, absent when the
/// pointer has never moved over the window or has left it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer(Option<Vec2>);

impl Pointer {
    pub fn at(x: f32, y: f32) -> Self {
        Self(Some(Vec2::new(x, y)))
    }

    pub fn moved_to(&mut self, position: Vec2) {
        self.0 = Some(position);
    }

    pub fn left(&mut self) {
        self.0 = None;
    }

    pub fn position(&self) -> Option<Vec2> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_then_leave() {
        let mut pointer = Pointer::default();
        assert_eq!(pointer.position(), None);
        pointer.moved_to(Vec2::new(3.0, 4.0));
        assert_eq!(pointer.position(), Some(Vec2::new(3.0, 4.0)));
        pointer.left();
        assert_eq!(pointer.position(), None);
    }
}
