//! Activation transforms applied to a neuron's weighted input sum.

use neurite_data::ActivationKind;

/// Hyperbolic tangent, range (-1, 1).
#[must_use]
pub fn hyperbolic_tangent(x: f64) -> f64 {
    x.tanh()
}

/// Sign step: -1 below zero, +1 above, 0 at zero (and for NaN).
#[must_use]
pub fn threshold(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else if x > 0.0 {
        1.0
    } else {
        0.0
    }
}

pub trait ActivationLogic {
    fn apply(self, x: f64) -> f64;
}

impl ActivationLogic for ActivationKind {
    fn apply(self, x: f64) -> f64 {
        match self {
            ActivationKind::HyperbolicTangent => hyperbolic_tangent(x),
            ActivationKind::Threshold => threshold(x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_ternary() {
        assert_eq!(threshold(-0.0001), -1.0);
        assert_eq!(threshold(0.0), 0.0);
        assert_eq!(threshold(-0.0), 0.0);
        assert_eq!(threshold(12.0), 1.0);
        assert_eq!(threshold(f64::NAN), 0.0);
    }

    #[test]
    fn test_tanh_stays_open_interval() {
        for &x in &[-5.0, -1.0, 0.0, 0.3, 5.0] {
            let y = hyperbolic_tangent(x);
            assert!(y > -1.0 && y < 1.0, "tanh({x}) = {y}");
        }
        assert_eq!(hyperbolic_tangent(0.0), 0.0);
    }

    #[test]
    fn test_kind_dispatch() {
        assert_eq!(ActivationKind::Threshold.apply(0.3), 1.0);
        assert_eq!(ActivationKind::HyperbolicTangent.apply(1.0), 1.0_f64.tanh());
    }
}
