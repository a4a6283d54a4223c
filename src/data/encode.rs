//! Conversions between raw labeled records and the vectors a [`Network`](crate::Network)
//! consumes and produces.

use crate::error::{NetworkError, Result};

/// Target value for the labeled class.
pub const ON_TARGET: f64 = 0.99;
/// Target value for every other class. Never exactly 0 so the sigmoid is not
/// pushed towards saturation.
pub const OFF_TARGET: f64 = 0.01;

/// Maps 0–255 intensities onto [0.01, 1.0] so no input is exactly zero.
pub fn normalize_pixels(raw: &[u8]) -> Vec<f64> {
    raw.iter()
        .map(|&v| f64::from(v) / 255.0 * 0.99 + 0.01)
        .collect()
}

/// One-hot-like target: `ON_TARGET` at `label`, `OFF_TARGET` elsewhere.
pub fn one_hot(label: usize, classes: usize) -> Result<Vec<f64>> {
    if classes == 0 {
        return Err(NetworkError::InvalidConfiguration("classes must be positive".into()));
    }
    if label >= classes {
        return Err(NetworkError::LabelOutOfRange { label, classes });
    }
    let mut target = vec![OFF_TARGET; classes];
    target[label] = ON_TARGET;
    Ok(target)
}

/// Index of the largest component. Ties resolve to the lowest index.
pub fn argmax(v: &[f64]) -> Option<usize> {
    v.iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, &x)| match best {
            Some((_, top)) if !(x > top) => best,
            _ => Some((i, x)),
        })
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_range_endpoints() {
        let v = normalize_pixels(&[0, 255, 128]);
        assert!((v[0] - 0.01).abs() < 1e-12);
        assert!((v[1] - 1.0).abs() < 1e-12);
        assert!(v[2] > 0.01 && v[2] < 1.0);
    }

    #[test]
    fn one_hot_marks_the_label() {
        assert_eq!(one_hot(2, 4).unwrap(), vec![0.01, 0.01, 0.99, 0.01]);
    }

    #[test]
    fn one_hot_rejects_out_of_range_label() {
        assert!(matches!(
            one_hot(10, 10),
            Err(NetworkError::LabelOutOfRange { label: 10, classes: 10 })
        ));
        assert!(matches!(one_hot(0, 0), Err(NetworkError::InvalidConfiguration(_))));
    }

    #[test]
    fn argmax_picks_largest() {
        assert_eq!(argmax(&[0.1, 0.7, 0.3]), Some(1));
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn argmax_keeps_first_of_equal_maxima() {
        assert_eq!(argmax(&[0.5, 0.5, 0.1]), Some(0));
        assert_eq!(argmax(&[1.0, 1.0]), Some(0));
        assert_eq!(argmax(&[0.1, 0.9, 0.9]), Some(1));
    }
}
