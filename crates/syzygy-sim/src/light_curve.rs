use syzygy_core::constants::CONTACT_EPSILON;
use syzygy_core::{EclipseError, FluxSample};

/// Ordered, append-only sequence of flux samples.
///
/// Times strictly increase. The only way to remove samples is `clear`.
#[derive(Debug, Clone, Default)]
pub struct LightCurve {
    samples: Vec<FluxSample>,
}

/// Headline numbers of a light curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSummary {
    pub sample_count: usize,
    pub min_flux: f64,
    pub time_of_min_flux: f64,
    /// 1 - min_flux.
    pub depth: f64,
    pub max_umbra_fraction: f64,
    pub max_penumbra_fraction: f64,
    /// First and last sample with any light blocked.
    pub first_contact: Option<f64>,
    pub last_contact: Option<f64>,
}

impl LightCurve {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Append a sample. Rejects a time that does not follow the last one.
    pub fn push(&mut self, sample: FluxSample) -> Result<(), EclipseError> {
        if let Some(last) = self.samples.last() {
            if sample.time.partial_cmp(&last.time) != Some(std::cmp::Ordering::Greater) {
                return Err(EclipseError::NonMonotonicTime {
                    previous: last.time,
                    next: sample.time,
                });
            }
        }
        self.samples.push(sample);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn samples(&self) -> &[FluxSample] {
        &self.samples
    }

    pub fn last(&self) -> Option<&FluxSample> {
        self.samples.last()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time).collect()
    }

    pub fn fluxes(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.flux).collect()
    }

    pub fn umbra_fractions(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.umbra_fraction).collect()
    }

    pub fn penumbra_fractions(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.penumbra_fraction).collect()
    }

    /// Summarise the curve. `None` when empty.
    pub fn summary(&self) -> Option<CurveSummary> {
        let first = self.samples.first()?;
        let mut min = *first;
        let mut max_umbra = 0.0f64;
        let mut max_penumbra = 0.0f64;

        for sample in &self.samples {
            if sample.flux < min.flux {
                min = *sample;
            }
            max_umbra = max_umbra.max(sample.umbra_fraction);
            max_penumbra = max_penumbra.max(sample.penumbra_fraction);
        }

        let in_contact = |s: &&FluxSample| s.flux < 1.0 - CONTACT_EPSILON;
        let first_contact = self.samples.iter().find(in_contact).map(|s| s.time);
        let last_contact = self.samples.iter().rev().find(in_contact).map(|s| s.time);

        Some(CurveSummary {
            sample_count: self.samples.len(),
            min_flux: min.flux,
            time_of_min_flux: min.time,
            depth: 1.0 - min.flux,
            max_umbra_fraction: max_umbra,
            max_penumbra_fraction: max_penumbra,
            first_contact,
            last_contact,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(time: f64, flux: f64) -> FluxSample {
        FluxSample {
            time,
            flux,
            umbra_fraction: 0.0,
            penumbra_fraction: 0.0,
        }
    }

    #[test]
    fn test_push_keeps_order() {
        let mut curve = LightCurve::new();
        curve.push(sample(0.0, 1.0)).expect("first");
        curve.push(sample(0.5, 0.9)).expect("second");
        assert_eq!(curve.len(), 2);
        assert_eq!(curve.times(), vec![0.0, 0.5]);
        assert_eq!(curve.fluxes(), vec![1.0, 0.9]);
    }

    #[test]
    fn test_push_rejects_repeated_time() {
        let mut curve = LightCurve::new();
        curve.push(sample(1.0, 1.0)).expect("first");
        let err = curve.push(sample(1.0, 0.5)).expect_err("same time");
        assert_eq!(
            err,
            EclipseError::NonMonotonicTime {
                previous: 1.0,
                next: 1.0
            }
        );
        assert!(curve.push(sample(0.5, 0.5)).is_err());
        assert!(curve.push(sample(f64::NAN, 0.5)).is_err());
        assert_eq!(curve.len(), 1, "rejected samples must not be stored");
    }

    #[test]
    fn test_clear_empties() {
        let mut curve = LightCurve::new();
        curve.push(sample(0.0, 1.0)).expect("push");
        curve.clear();
        assert!(curve.is_empty());
        assert!(curve.summary().is_none());
        // Time restarts after a clear
        curve.push(sample(0.0, 1.0)).expect("push after clear");
    }

    #[test]
    fn test_summary_contacts_and_minimum() {
        let mut curve = LightCurve::new();
        for (t, f) in [(0.0, 1.0), (1.0, 0.8), (2.0, 0.3), (3.0, 0.7), (4.0, 1.0)] {
            curve.push(sample(t, f)).expect("push");
        }
        let summary = curve.summary().expect("non-empty");
        assert_eq!(summary.sample_count, 5);
        assert_eq!(summary.min_flux, 0.3);
        assert_eq!(summary.time_of_min_flux, 2.0);
        assert!((summary.depth - 0.7).abs() < 1e-12);
        assert_eq!(summary.first_contact, Some(1.0));
        assert_eq!(summary.last_contact, Some(3.0));
    }

    #[test]
    fn test_summary_without_contact() {
        let mut curve = LightCurve::new();
        curve.push(sample(0.0, 1.0)).expect("push");
        curve.push(sample(1.0, 1.0)).expect("push");
        let summary = curve.summary().expect("non-empty");
        assert_eq!(summary.first_contact, None);
        assert_eq!(summary.last_contact, None);
        assert_eq!(summary.depth, 0.0);
    }

    #[test]
    fn test_summary_shadow_maxima() {
        let mut curve = LightCurve::new();
        let shadowed = FluxSample {
            time: 1.0,
            flux: 0.2,
            umbra_fraction: 0.6,
            penumbra_fraction: 0.4,
        };
        curve.push(sample(0.0, 1.0)).expect("push");
        curve.push(shadowed).expect("push");
        let summary = curve.summary().expect("non-empty");
        assert_eq!(summary.max_umbra_fraction, 0.6);
        assert_eq!(summary.max_penumbra_fraction, 0.4);
    }
}
