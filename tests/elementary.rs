use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, PI};

use approx::assert_relative_eq;
use diffy::{cos, cot, exp, sin, tan, Dual, Dual32, Dual64};

/// Central finite difference: (f(x+h) - f(x-h)) / 2h
fn finite_diff(f: impl Fn(f64) -> f64, x: f64) -> f64 {
    let h = 1e-7;
    (f(x + h) - f(x - h)) / (2.0 * h)
}

/// Evaluate `f` at a seeded variable for each `(x, (value, derivative))`.
fn check_table(f: impl Fn(Dual64) -> Dual64, cases: &[(f64, (f64, f64))]) {
    for &(x, (value, derivative)) in cases {
        let y = f(Dual::variable(x));
        assert_relative_eq!(y.value(), value, epsilon = 1e-12, max_relative = 1e-12);
        assert_relative_eq!(
            y.derivative(),
            derivative,
            epsilon = 1e-12,
            max_relative = 1e-12
        );
    }
}

/// Test a dual elemental against finite differences.
fn check_elemental(f_dual: impl Fn(Dual64) -> Dual64, f_f64: impl Fn(f64) -> f64, x: f64) {
    let d = f_dual(Dual::variable(x));
    assert_relative_eq!(d.value(), f_f64(x), max_relative = 1e-12);
    assert_relative_eq!(d.derivative(), finite_diff(&f_f64, x), max_relative = 1e-5);
}

// ── Closed forms ──

#[test]
fn sin_table() {
    let r3 = 3.0_f64.sqrt();
    let r2 = 2.0_f64.sqrt();
    check_table(
        sin,
        &[
            (0.0, (0.0, 1.0)),
            (FRAC_PI_6, (0.5, r3 / 2.0)),
            (FRAC_PI_4, (r2 / 2.0, r2 / 2.0)),
            (FRAC_PI_3, (r3 / 2.0, 0.5)),
            (FRAC_PI_2, (1.0, 0.0)),
            (PI, (0.0, -1.0)),
            (3.0 * FRAC_PI_2, (-1.0, 0.0)),
            (2.0 * PI, (0.0, 1.0)),
        ],
    );
}

#[test]
fn cos_table() {
    let r3 = 3.0_f64.sqrt();
    let r2 = 2.0_f64.sqrt();
    check_table(
        cos,
        &[
            (0.0, (1.0, 0.0)),
            (FRAC_PI_6, (r3 / 2.0, -0.5)),
            (FRAC_PI_4, (r2 / 2.0, -r2 / 2.0)),
            (FRAC_PI_3, (0.5, -r3 / 2.0)),
            (FRAC_PI_2, (0.0, -1.0)),
            (PI, (-1.0, 0.0)),
            (3.0 * FRAC_PI_2, (0.0, 1.0)),
            (2.0 * PI, (1.0, 0.0)),
        ],
    );
}

#[test]
fn tan_table() {
    let r3 = 3.0_f64.sqrt();
    check_table(
        tan,
        &[
            (0.0, (0.0, 1.0)),
            (FRAC_PI_6, (r3 / 3.0, 4.0 / 3.0)),
            (FRAC_PI_4, (1.0, 2.0)),
            (FRAC_PI_3, (r3, 4.0)),
            (PI, (0.0, 1.0)),
            (2.0 * PI, (0.0, 1.0)),
        ],
    );
}

#[test]
fn cot_table() {
    let r3 = 3.0_f64.sqrt();
    check_table(
        cot,
        &[
            (FRAC_PI_6, (r3, -4.0)),
            (FRAC_PI_4, (1.0, -2.0)),
            (FRAC_PI_3, (r3 / 3.0, -4.0 / 3.0)),
            (FRAC_PI_2, (0.0, -1.0)),
        ],
    );
}

#[test]
fn exp_table() {
    let e = 1.0_f64.exp();
    check_table(
        exp,
        &[
            (0.0, (1.0, 1.0)),
            (1.0, (e, e)),
            (2.0, (e * e, 2.0_f64.exp())),
            (-1.0, ((-1.0_f64).exp(), (-1.0_f64).exp())),
        ],
    );
}

// ── Finite differences ──

#[test]
fn sin_fd() { check_elemental(sin, f64::sin, 1.0); }

#[test]
fn cos_fd() { check_elemental(cos, f64::cos, 1.0); }

#[test]
fn tan_fd() { check_elemental(tan, f64::tan, 0.5); }

#[test]
fn cot_fd() { check_elemental(cot, |x| 1.0 / x.tan(), 0.7); }

#[test]
fn exp_fd() { check_elemental(exp, f64::exp, 1.5); }

// ── Chain rule ──

#[test]
fn derivative_scales_with_inner_derivative() {
    // d/dx sin(3x) = 3 cos(3x)
    let x = 0.4_f64;
    let y = sin(3.0 * Dual64::variable(x));
    assert_relative_eq!(y.derivative(), 3.0 * (3.0 * x).cos(), max_relative = 1e-12);
}

#[test]
fn constant_input_has_zero_derivative() {
    let fs: [fn(Dual64) -> Dual64; 5] = [sin, cos, tan, cot, exp];
    for f in fs {
        assert_eq!(f(Dual64::constant(0.3)).derivative(), 0.0);
    }
}

#[test]
fn sin_of_exp() {
    // d/dx sin(exp(x)) = cos(exp(x)) * exp(x)
    let x_val = 0.5_f64;
    let y = Dual64::variable(x_val).exp().sin();
    let expected = x_val.exp().cos() * x_val.exp();
    assert_relative_eq!(y.derivative(), expected, max_relative = 1e-12);
}

#[test]
fn tan_is_sin_over_cos() {
    let x = Dual64::variable(0.9);
    let via_quotient = sin(x) / cos(x);
    assert_relative_eq!(tan(x).value(), via_quotient.value(), max_relative = 1e-12);
    assert_relative_eq!(
        tan(x).derivative(),
        via_quotient.derivative(),
        max_relative = 1e-12
    );
}

#[test]
fn complex_composition() {
    // f(x) = x * sin(x) + cos(x²)
    // f'(x) = sin(x) + x*cos(x) - 2x*sin(x²)
    let x_val = 1.5_f64;
    let x = Dual64::variable(x_val);
    let y = x * x.sin() + (x * x).cos();
    let expected = x_val.sin() + x_val * x_val.cos() - 2.0 * x_val * (x_val * x_val).sin();
    assert_relative_eq!(y.derivative(), expected, max_relative = 1e-12);
}

#[test]
fn single_precision() {
    let y = sin(Dual32::variable(0.5));
    assert_relative_eq!(y.value(), 0.5_f32.sin());
    assert_relative_eq!(y.derivative(), 0.5_f32.cos());
}

// ── Poles ──

#[test]
fn cot_at_zero_is_unguarded() {
    let y = cot(Dual64::variable(0.0));
    assert_eq!(y.value(), f64::INFINITY);
    assert_eq!(y.derivative(), f64::NEG_INFINITY);
}
