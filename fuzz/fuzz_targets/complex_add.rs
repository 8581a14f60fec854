#![no_main]

use std::num::Wrapping;

use libfuzzer_sys::fuzz_target;
use my_math_lib::math::Complex;

// Checks addition laws and formatting on arbitrary wrapping integers.
fuzz_target!(|data: (i32, i32, i32, i32)| {
    let (a, b, c, d) = data;
    let x = Complex::new(Wrapping(a), Wrapping(b));
    let y = Complex::new(Wrapping(c), Wrapping(d));

    let sum = x + y;
    assert_eq!(sum, y + x);
    assert_eq!(sum, &x + &y);
    assert_eq!(sum.into_parts(), (Wrapping(a) + Wrapping(c), Wrapping(b) + Wrapping(d)));
    assert_eq!(x.into_parts(), (Wrapping(a), Wrapping(b)));

    let mut out = Vec::new();
    sum.write_to(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), sum.to_string());
    assert_eq!(
        sum.to_string(),
        format!("{} + {}i", a.wrapping_add(c), b.wrapping_add(d))
    );
});
