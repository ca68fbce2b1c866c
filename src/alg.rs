use std::fmt;
use std::ops;

#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(C)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Vec2 {
        Vec2 { x, y }
    }

    #[inline]
    pub fn zero() -> Vec2 {
        Vec2::new(0., 0.)
    }

    #[inline]
    pub fn one() -> Vec2 {
        Vec2::new(1., 1.)
    }

    #[inline]
    pub fn right() -> Vec2 {
        Vec2::new(1., 0.)
    }

    #[inline]
    pub fn up() -> Vec2 {
        Vec2::new(0., 1.)
    }

    /// Returns the unit vector with the same direction. \
    /// A zero-length vector is returned unchanged.
    pub fn norm(self) -> Vec2 {
        let len = self.mag();

        if len == 0. {
            trace!("Vec2::norm: zero-length input, returning as-is");
            return self;
        }

        self / len
    }

    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn mag_squared(self) -> f32 {
        self.dot(self)
    }

    pub fn mag(self) -> f32 {
        self.mag_squared().sqrt()
    }

    /// Euclidean distance between two points
    pub fn dist(self, other: Vec2) -> f32 {
        (other - self).mag()
    }

    /// z-component of the 3D cross product
    pub fn perp_dot(self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Signed angle in radians from `self` to `other`,
    /// positive when `other` is counter-clockwise of `self`. \
    /// Returns zero if either vector has zero length.
    pub fn signed_angle(self, other: Vec2) -> f32 {
        let arc = (self.mag_squared() * other.mag_squared()).sqrt();

        if arc > 0. {
            // Rounding can push parallel operands just past 1
            let cos = (self.dot(other) / arc).clamp(-1., 1.);
            let angle = cos.acos();

            if self.perp_dot(other) < 0. {
                -angle
            } else {
                angle
            }
        } else {
            trace!("Vec2::signed_angle: zero-length operand, returning 0");
            0.
        }
    }

    pub fn approx_eq(self, other: Vec2, tolerance: f32) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
    }
}

impl ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl ops::Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl ops::Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl ops::Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, scalar: f32) -> Vec2 {
        Vec2::new(self.x * scalar, self.y * scalar)
    }
}

impl ops::Div<f32> for Vec2 {
    type Output = Vec2;

    fn div(self, scalar: f32) -> Vec2 {
        Vec2::new(self.x / scalar, self.y / scalar)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        write!(out, "( {}, {} )", self.x, self.y)
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(C)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3 { x, y, z }
    }

    #[inline]
    pub fn right() -> Vec3 {
        Vec3::new(1., 0., 0.)
    }

    #[inline]
    pub fn up() -> Vec3 {
        Vec3::new(0., 1., 0.)
    }

    #[inline]
    pub fn fwd() -> Vec3 {
        Vec3::new(0., 0., 1.)
    }

    #[inline]
    pub fn zero() -> Vec3 {
        Vec3::new(0., 0., 0.)
    }

    #[inline]
    pub fn one() -> Vec3 {
        Vec3::new(1., 1., 1.)
    }

    /// Returns the unit vector with the same direction. \
    /// A zero-length vector is returned unchanged.
    pub fn norm(self) -> Vec3 {
        let len = self.mag();

        if len == 0. {
            trace!("Vec3::norm: zero-length input, returning as-is");
            return self;
        }

        self / len
    }

    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn mag_squared(self) -> f32 {
        self.dot(self)
    }

    pub fn mag(self) -> f32 {
        self.mag_squared().sqrt()
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn approx_eq(self, other: Vec3, tolerance: f32) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }
}

impl ops::Add for Vec3 {
    type Output = Vec3;

    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
        )
    }
}

impl ops::Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
        )
    }
}

impl ops::Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl ops::Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, scalar: f32) -> Vec3 {
        Vec3::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
        )
    }
}

impl ops::Div<f32> for Vec3 {
    type Output = Vec3;

    fn div(self, scalar: f32) -> Vec3 {
        Vec3::new(
            self.x / scalar,
            self.y / scalar,
            self.z / scalar,
        )
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        write!(out, "( {}, {}, {} )", self.x, self.y, self.z)
    }
}

/// Homogeneous coordinate, used to push points (`w = 1`)
/// and directions (`w = 0`) through a `Mat`
#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(C)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Vec4 {
        Vec4 { x, y, z, w }
    }

    pub fn point(position: Vec3) -> Vec4 {
        Vec4::new(position.x, position.y, position.z, 1.)
    }

    pub fn dir(direction: Vec3) -> Vec4 {
        Vec4::new(direction.x, direction.y, direction.z, 0.)
    }

    pub fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    pub fn approx_eq(self, other: Vec4, tolerance: f32) -> bool {
        self.to_array().iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(C)]
pub struct Mat {

    /*
     * Row-major: row x holds m11..m14, row w holds m41..m44.
     * The column index runs 0..3, so m34 is `z3`.
     */

    pub x0: f32, pub x1: f32, pub x2: f32, pub x3: f32,
    pub y0: f32, pub y1: f32, pub y2: f32, pub y3: f32,
    pub z0: f32, pub z1: f32, pub z2: f32, pub z3: f32,
    pub w0: f32, pub w1: f32, pub w2: f32, pub w3: f32,
}

impl Mat {
    /// Arguments are given row by row
    pub fn new(
        x0: f32, x1: f32, x2: f32, x3: f32,
        y0: f32, y1: f32, y2: f32, y3: f32,
        z0: f32, z1: f32, z2: f32, z3: f32,
        w0: f32, w1: f32, w2: f32, w3: f32,
    ) -> Mat {
        Mat {
            x0, x1, x2, x3,
            y0, y1, y2, y3,
            z0, z1, z2, z3,
            w0, w1, w2, w3,
        }
    }

    pub fn from_rows(rows: [[f32; 4]; 4]) -> Mat {
        let [x, y, z, w] = rows;

        Mat::new(
            x[0], x[1], x[2], x[3],
            y[0], y[1], y[2], y[3],
            z[0], z[1], z[2], z[3],
            w[0], w[1], w[2], w[3],
        )
    }

    pub fn to_rows(&self) -> [[f32; 4]; 4] {
        [
            [self.x0, self.x1, self.x2, self.x3],
            [self.y0, self.y1, self.y2, self.y3],
            [self.z0, self.z1, self.z2, self.z3],
            [self.w0, self.w1, self.w2, self.w3],
        ]
    }

    #[inline]
    pub fn zero() -> Mat {
        Mat::from_rows([[0.; 4]; 4])
    }

    #[inline]
    pub fn identity() -> Mat {
        Mat::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Row-by-column product `self * m`.
    /// Applied to a column vector, `m` acts first.
    pub fn multiply(&self, m: &Mat) -> Mat {
        let a = self.to_rows();
        let b = m.to_rows();
        let mut result = [[0f32; 4]; 4];

        for i in 0..4 {
            for j in 0..4 {
                result[i][j] = a[i][0] * b[0][j]
                    + a[i][1] * b[1][j]
                    + a[i][2] * b[2][j]
                    + a[i][3] * b[3][j];
            }
        }

        Mat::from_rows(result)
    }

    pub fn transpose(&self) -> Mat {
        Mat::new(
            self.x0, self.y0, self.z0, self.w0,
            self.x1, self.y1, self.z1, self.w1,
            self.x2, self.y2, self.z2, self.w2,
            self.x3, self.y3, self.z3, self.w3,
        )
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Mat {
        Mat::new(
            1.0, 0.0, 0.0,   x,
            0.0, 1.0, 0.0,   y,
            0.0, 0.0, 1.0,   z,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    pub fn translation_2d(translation: Vec2) -> Mat {
        Mat::translation(translation.x, translation.y, 0.)
    }

    pub fn translation_vec(translation: Vec3) -> Mat {
        Mat::translation(translation.x, translation.y, translation.z)
    }

    pub fn scale(x: f32, y: f32, z: f32) -> Mat {
        Mat::new(
              x, 0.0, 0.0, 0.0,
            0.0,   y, 0.0, 0.0,
            0.0, 0.0,   z, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Scales x and y, leaving z untouched
    pub fn scale_2d(scale: Vec2) -> Mat {
        Mat::scale(scale.x, scale.y, 1.)
    }

    pub fn scale_vec(scale: Vec3) -> Mat {
        Mat::scale(scale.x, scale.y, scale.z)
    }

    // Right-handed: counter-clockwise looking down the axis toward the origin

    pub fn rotation_x(rad: f32) -> Mat {
        let (sin, cos) = rad.sin_cos();

        Mat::new(
            1.0, 0.0,  0.0, 0.0,
            0.0, cos, -sin, 0.0,
            0.0, sin,  cos, 0.0,
            0.0, 0.0,  0.0, 1.0,
        )
    }

    pub fn rotation_y(rad: f32) -> Mat {
        let (sin, cos) = rad.sin_cos();

        Mat::new(
             cos, 0.0, sin, 0.0,
             0.0, 1.0, 0.0, 0.0,
            -sin, 0.0, cos, 0.0,
             0.0, 0.0, 0.0, 1.0,
        )
    }

    pub fn rotation_z(rad: f32) -> Mat {
        let (sin, cos) = rad.sin_cos();

        Mat::new(
            cos, -sin, 0.0, 0.0,
            sin,  cos, 0.0, 0.0,
            0.0,  0.0, 1.0, 0.0,
            0.0,  0.0, 0.0, 1.0,
        )
    }

    /// Applies z, then y, then x
    pub fn rotation(x: f32, y: f32, z: f32) -> Mat {
        Mat::rotation_x(x) * Mat::rotation_y(y) * Mat::rotation_z(z)
    }

    /// Maps the box `[left, right] x [bottom, top] x [near, far]`
    /// onto the canonical clip cube, flipping depth. \
    /// Zero-extent boxes are not guarded against and yield inf/NaN.
    pub fn ortho(
        left:   f32,
        right:  f32,
        bottom: f32,
        top:    f32,
        near:   f32,
        far:    f32,
    ) -> Mat {
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;

        Mat::new(
            2. / width,         0.,          0., -(right + left) / width,
                    0., 2. / height,          0., -(top + bottom) / height,
                    0.,          0., -2. / depth, -(far + near) / depth,
                    0.,          0.,          0., 1.,
        )
    }

    /// Returns the view matrix for a camera at `eye` facing `center`. \
    /// Right-handed: the camera looks down its own negative z axis. \
    /// Degenerate input (`eye == center`, or `up` parallel to the view
    /// direction) produces a degenerate matrix rather than an error.
    pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Mat {
        let forward = (center - eye).norm();
        let right = forward.cross(up).norm();

        if right.mag_squared() == 0. {
            trace!(
                "Mat::look_at: degenerate basis (eye {}, center {}, up {})",
                eye, center, up,
            );
        }

        // Re-orthogonalize against the input up vector
        let up = right.cross(forward).norm();

        Mat::new(
               right.x,    right.y,    right.z, -right.dot(eye),
                  up.x,       up.y,       up.z,    -up.dot(eye),
            -forward.x, -forward.y, -forward.z, forward.dot(eye),
                   0.0,        0.0,        0.0,             1.0,
        )
    }

    /// Transforms a point (implicit `w = 1`), without perspective division
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        (*self * Vec4::point(point)).xyz()
    }

    pub fn approx_eq(&self, other: &Mat, tolerance: f32) -> bool {
        self.to_rows().iter()
            .zip(other.to_rows().iter())
            .all(|(a, b)| {
                a.iter().zip(b.iter()).all(|(a, b)| (a - b).abs() <= tolerance)
            })
    }
}

impl ops::Mul for Mat {
    type Output = Mat;

    fn mul(self, m: Mat) -> Mat {
        self.multiply(&m)
    }
}

impl<'a> ops::Mul<&'a Mat> for &'a Mat {
    type Output = Mat;

    fn mul(self, m: &'a Mat) -> Mat {
        self.multiply(m)
    }
}

impl ops::Mul<Vec4> for Mat {
    type Output = Vec4;

    fn mul(self, vec: Vec4) -> Vec4 {
        Vec4::new(
            self.x0 * vec.x + self.x1 * vec.y + self.x2 * vec.z + self.x3 * vec.w,
            self.y0 * vec.x + self.y1 * vec.y + self.y2 * vec.z + self.y3 * vec.w,
            self.z0 * vec.x + self.z1 * vec.y + self.z2 * vec.z + self.z3 * vec.w,
            self.w0 * vec.x + self.w1 * vec.y + self.w2 * vec.z + self.w3 * vec.w,
        )
    }
}

// Upper 3x3 only; translation is ignored
impl ops::Mul<Vec3> for Mat {
    type Output = Vec3;

    fn mul(self, vec: Vec3) -> Vec3 {
        Vec3::new(
            self.x0 * vec.x + self.x1 * vec.y + self.x2 * vec.z,
            self.y0 * vec.x + self.y1 * vec.y + self.y2 * vec.z,
            self.z0 * vec.x + self.z1 * vec.y + self.z2 * vec.z,
        )
    }
}

/// One `| a b c d |` line per row.
/// Honors the formatter precision, defaulting to six decimals.
impl fmt::Display for Mat {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        let precision = out.precision().unwrap_or(6);

        for (i, row) in self.to_rows().iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }

            write!(
                out,
                "| {:.*} {:.*} {:.*} {:.*} |",
                precision, row[0],
                precision, row[1],
                precision, row[2],
                precision, row[3],
            )?;
        }

        Ok(())
    }
}
