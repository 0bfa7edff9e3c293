use serde::{Deserialize, Serialize};

/// Polynomial in age with an open-ended coefficient list: `c0 + c1*age +
/// c2*age^2 + ...`. The bundled norms use degree 2, but nothing here fixes
/// the degree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionPoly {
    pub coefficients: Vec<f64>,
}

impl RegressionPoly {
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    /// Evaluate at the given age (Horner form).
    pub fn eval(&self, age: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, c| acc * age + c)
    }
}

/// Continuous child-age regression: one polynomial for the predicted mean and
/// one for the predicted standard deviation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildRegressionSpec {
    pub mean: RegressionPoly,
    pub sd: RegressionPoly,
}

/// Empirically fixed normative value that supersedes the regression estimate
/// at exactly one age.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorOverride {
    pub age: i64,
    pub predicted_mean: f64,
    pub predicted_sd: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_quadratic() {
        let poly = RegressionPoly::new(vec![170.0, -14.9, 0.475]);
        assert!((poly.eval(0.0) - 170.0).abs() < 1e-12);
        assert!((poly.eval(10.0) - (170.0 - 149.0 + 47.5)).abs() < 1e-9);
    }

    #[test]
    fn eval_supports_other_degrees() {
        let constant = RegressionPoly::new(vec![42.0]);
        assert!((constant.eval(88.0) - 42.0).abs() < 1e-12);
        let cubic = RegressionPoly::new(vec![1.0, 0.0, 0.0, 2.0]);
        assert!((cubic.eval(3.0) - 55.0).abs() < 1e-12);
    }

    #[test]
    fn eval_empty_is_zero() {
        assert_eq!(RegressionPoly::new(Vec::new()).eval(12.0), 0.0);
    }
}
