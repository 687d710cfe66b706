//! Bounding box of a set of coordinates

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// The minimal axis-aligned box containing a set of coordinates
///
/// Used to fit a viewport to a computed route. Antimeridian crossings are not
/// handled; routes are assumed to stay within one hemisphere of longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// South-west corner
    pub min: Coordinate,
    /// North-east corner
    pub max: Coordinate,
}

impl Envelope {
    /// Envelope of a single point
    #[must_use]
    pub const fn point(c: Coordinate) -> Self {
        Self { min: c, max: c }
    }

    /// Envelope of all points, or `None` for an empty input
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Coordinate>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::point(*first), |env, c| env.extended(c)))
    }

    /// Return a copy grown to include `c`
    #[must_use]
    pub fn extended(&self, c: &Coordinate) -> Self {
        Self {
            min: Coordinate::new_unchecked(self.min.lat().min(c.lat()), self.min.lng().min(c.lng())),
            max: Coordinate::new_unchecked(self.max.lat().max(c.lat()), self.max.lng().max(c.lng())),
        }
    }

    /// Whether `c` lies inside or on the border of the envelope
    #[must_use]
    pub fn contains(&self, c: &Coordinate) -> bool {
        (self.min.lat()..=self.max.lat()).contains(&c.lat())
            && (self.min.lng()..=self.max.lng()).contains(&c.lng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    #[test]
    fn empty_input_has_no_envelope() {
        assert!(Envelope::from_points(&[]).is_none());
    }

    #[test]
    fn envelope_of_two_points() {
        let env = Envelope::from_points(&[c(-23.55, -46.63), c(-23.60, -46.70)]).unwrap();
        assert_eq!(env.min, c(-23.60, -46.70));
        assert_eq!(env.max, c(-23.55, -46.63));
    }

    #[test]
    fn envelope_contains_its_points() {
        let pts = [c(1.0, 1.0), c(-2.0, 5.0), c(3.0, -4.0)];
        let env = Envelope::from_points(&pts).unwrap();
        assert!(pts.iter().all(|p| env.contains(p)));
        assert!(!env.contains(&c(10.0, 0.0)));
    }
}
