use derive_more::{Add, AddAssign, Display, From, Into, Sub, Sum};

/// A distance in texture pixels. All layout in this crate happens in texture
/// space: `x` grows to the right, `y` grows downward, matching the 2-D
/// drawing surfaces the output is rasterized onto.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Sub, Sum, Display, From,
    Into,
)]
pub struct Px(pub f32);

impl std::ops::Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Px {
        Px(self.0 * rhs)
    }
}

impl std::ops::Div<f32> for Px {
    type Output = Px;

    fn div(self, rhs: f32) -> Px {
        Px(self.0 / rhs)
    }
}
