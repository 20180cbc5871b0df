//! Elementwise scalar arithmetic.
//!
//! Every result, new or modified in place, has stale statistics. Division by
//! zero is not checked and follows IEEE 754 (infinities and NaN).

use std::ops;

use crate::imaging::greyscale::Image;

impl Image {
    /// New image with `f` applied to every pixel.
    pub fn map_pixels(&self, f: impl Fn(f32) -> f32) -> Image {
        Image::with_pixels(
            self.pixels.iter().map(|&p| f(p)).collect(),
            self.width,
            self.height,
        )
    }

    /// Applies `f` to every pixel in place.
    pub fn apply_in_place(&mut self, f: impl Fn(f32) -> f32) {
        self.stats_valid = false;
        self.pixels.iter_mut().for_each(|p| *p = f(*p));
    }

    pub fn add(&self, value: f32) -> Image {
        self.map_pixels(|p| p + value)
    }

    pub fn subtract(&self, value: f32) -> Image {
        self.map_pixels(|p| p - value)
    }

    pub fn multiply(&self, value: f32) -> Image {
        self.map_pixels(|p| p * value)
    }

    pub fn divide(&self, value: f32) -> Image {
        self.map_pixels(|p| p / value)
    }

    pub fn add_in_place(&mut self, value: f32) -> &mut Self {
        self.apply_in_place(|p| p + value);
        self
    }

    pub fn subtract_in_place(&mut self, value: f32) -> &mut Self {
        self.apply_in_place(|p| p - value);
        self
    }

    pub fn multiply_in_place(&mut self, value: f32) -> &mut Self {
        self.apply_in_place(|p| p * value);
        self
    }

    pub fn divide_in_place(&mut self, value: f32) -> &mut Self {
        self.apply_in_place(|p| p / value);
        self
    }
}

macro_rules! impl_scalar_op {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $method:ident, $in_place:ident) => {
        impl ops::$op<f32> for &Image {
            type Output = Image;

            fn $op_fn(self, rhs: f32) -> Image {
                Image::$method(self, rhs)
            }
        }

        impl ops::$op<f32> for Image {
            type Output = Image;

            fn $op_fn(mut self, rhs: f32) -> Image {
                Image::$in_place(&mut self, rhs);
                self
            }
        }

        impl ops::$assign<f32> for Image {
            fn $assign_fn(&mut self, rhs: f32) {
                Image::$in_place(self, rhs);
            }
        }
    };
}

impl_scalar_op!(Add, add, AddAssign, add_assign, add, add_in_place);
impl_scalar_op!(Sub, sub, SubAssign, sub_assign, subtract, subtract_in_place);
impl_scalar_op!(Mul, mul, MulAssign, mul_assign, multiply, multiply_in_place);
impl_scalar_op!(Div, div, DivAssign, div_assign, divide, divide_in_place);

// Scalar on the left, only for the commutative operations.
macro_rules! impl_commutative_op {
    ($op:ident, $op_fn:ident) => {
        impl ops::$op<&Image> for f32 {
            type Output = Image;

            fn $op_fn(self, rhs: &Image) -> Image {
                ops::$op::$op_fn(rhs, self)
            }
        }

        impl ops::$op<Image> for f32 {
            type Output = Image;

            fn $op_fn(self, rhs: Image) -> Image {
                ops::$op::$op_fn(rhs, self)
            }
        }
    };
}

impl_commutative_op!(Add, add);
impl_commutative_op!(Mul, mul);
