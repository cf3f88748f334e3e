use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Quat;

/// Named components of a [`Quat`], in storage order.
#[repr(C)]
pub struct WXYZ<T> {
    pub w: T,
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (),
}

impl<T> Deref for Quat<T> {
    type Target = WXYZ<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        // Safety: `Quat` wraps a `repr(transparent)` `[T; 4]`, matching the `repr(C)` layout above.
        unsafe { mem::transmute(self) }
    }
}

impl<T> DerefMut for Quat<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}
