/// RGBA color, conventionally in [0, 1]. \
/// Values are carried as-is; nothing is clamped.
#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Color {
        Color {
            r,
            g,
            b,
            a,
        }
    }

    /// Fully opaque
    pub fn rgb(r: f32, g: f32, b: f32) -> Color {
        Color::new(r, g, b, 1.)
    }

    #[inline]
    pub fn red() -> Color {
        Color::rgb(1., 0., 0.)
    }

    #[inline]
    pub fn green() -> Color {
        Color::rgb(0., 1., 0.)
    }

    #[inline]
    pub fn blue() -> Color {
        Color::rgb(0., 0., 1.)
    }

    #[inline]
    pub fn white() -> Color {
        Color::rgb(1., 1., 1.)
    }

    #[inline]
    pub fn black() -> Color {
        Color::rgb(0., 0., 0.)
    }

    #[inline]
    pub fn clear() -> Color {
        Color::new(0., 0., 0., 0.)
    }
}

#[cfg(test)]
mod tests {
    use crate::graphics::*;

    #[test]
    fn opaque_defaults() {
        assert!(Color::red().a == 1.);
        assert!(Color::rgb(0.2, 0.4, 0.6) == Color::new(0.2, 0.4, 0.6, 1.));
        assert!(Color::clear().a == 0.);
    }

    #[test]
    fn out_of_range_kept() {
        let color = Color::new(2., -1., 0.5, 7.);

        assert!(color.r == 2.);
        assert!(color.g == -1.);
        assert!(color.a == 7.);
    }
}
