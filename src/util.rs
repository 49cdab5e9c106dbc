use float_cmp::{F64Margin, approx_eq};
use ndarray::Array1;
use num::complex::Complex64;

pub fn comp_array_c64(
    exemplar: &Array1<Complex64>,
    calc: &Array1<Complex64>,
    precision: F64Margin,
    test: &str,
) {
    assert_eq!(
        exemplar.len(),
        calc.len(),
        " Failed test {}: length mismatch\n  exemplar: {}\n      calc: {}",
        test,
        exemplar.len(),
        calc.len()
    );
    for k in 0..calc.len() {
        comp_c64(
            &exemplar[k],
            &calc[k],
            precision,
            test,
            format!("({})", k).as_str(),
        );
    }
}

pub fn comp_array_f64(
    exemplar: &Array1<f64>,
    calc: &Array1<f64>,
    precision: F64Margin,
    test: &str,
) {
    assert_eq!(
        exemplar.len(),
        calc.len(),
        " Failed test {}: length mismatch\n  exemplar: {}\n      calc: {}",
        test,
        exemplar.len(),
        calc.len()
    );
    for k in 0..calc.len() {
        comp_f64(
            &exemplar[k],
            &calc[k],
            precision,
            test,
            format!("({})", k).as_str(),
        );
    }
}

pub fn comp_c64(
    exemplar: &Complex64,
    calc: &Complex64,
    precision: F64Margin,
    test: &str,
    idx: &str,
) {
    comp_f64(
        &(exemplar.re),
        &(calc.re),
        precision,
        test,
        &(idx.to_owned() + ".re"),
    );
    comp_f64(
        &(exemplar.im),
        &(calc.im),
        precision,
        test,
        &(idx.to_owned() + ".im"),
    );
}

pub fn comp_f64(exemplar: &f64, calc: &f64, precision: F64Margin, test: &str, idx: &str) {
    assert!(
        approx_eq!(f64, *calc, *exemplar, precision),
        " Failed test {} at location {}\n  exemplar: {}\n      calc: {}",
        test,
        idx,
        exemplar,
        calc
    );
}
