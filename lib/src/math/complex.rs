use std::{
    fmt::{self, Display},
    io,
    ops::Add,
};

use serde::{Deserialize, Serialize};

/// Complex number `real + imag·i` over an arbitrary element type.
///
/// Both parts are always set together and never change after construction.
/// Arithmetic and formatting are delegated to `T` as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Complex<T> {
    real: T,
    imag: T,
}

impl<T> Complex<T> {
    pub fn new(real: T, imag: T) -> Self {
        Self { real, imag }
    }

    pub fn real(&self) -> &T {
        &self.real
    }

    pub fn imag(&self) -> &T {
        &self.imag
    }

    pub fn into_parts(self) -> (T, T) {
        (self.real, self.imag)
    }

    /// Writes `"<real> + <imag>i"` into `out`. Sink errors are returned unchanged.
    pub fn write_to<W>(&self, out: &mut W) -> io::Result<()>
    where
        T: Display,
        W: io::Write + ?Sized,
    {
        write!(out, "{}", self)
    }
}

impl<T> From<(T, T)> for Complex<T> {
    fn from(value: (T, T)) -> Self {
        Self {
            real: value.0,
            imag: value.1,
        }
    }
}

impl<T> From<Complex<T>> for (T, T) {
    fn from(value: Complex<T>) -> Self {
        value.into_parts()
    }
}

impl<T> Add for Complex<T>
where
    T: Add<Output = T>,
{
    type Output = Complex<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Self::Output {
            real: self.real + rhs.real,
            imag: self.imag + rhs.imag,
        }
    }
}

impl<'a, T> Add<&'a Complex<T>> for &'a Complex<T>
where
    T: Clone + Add<Output = T>,
{
    type Output = Complex<T>;

    fn add(self, rhs: &'a Complex<T>) -> Self::Output {
        Self::Output {
            real: self.real.clone() + rhs.real.clone(),
            imag: self.imag.clone() + rhs.imag.clone(),
        }
    }
}

// Flags such as `{:.2}` apply to each part separately.
impl<T> Display for Complex<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.real, f)?;
        f.write_str(" + ")?;
        Display::fmt(&self.imag, f)?;
        f.write_str("i")
    }
}
