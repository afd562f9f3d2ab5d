use crate::climate::{Location, Month};

/// Where the pool is located in each month of the year.
///
/// A vessel may move between months, so every month carries its own location.
/// A yearly savings summary requires all twelve months to be assigned.
///
/// # Example
///
/// ```
/// use poolheat_components::{climate::{Location, Month}, savings::Itinerary};
///
/// let mut itinerary = Itinerary::new();
/// itinerary.assign([Month::January, Month::February], Location::new(56.0, 3.0));
///
/// assert_eq!(itinerary.location(Month::February), Some(Location::new(56.0, 3.0)));
/// assert_eq!(itinerary.next_unassigned(), Some(Month::March));
/// assert!(!itinerary.is_complete());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Itinerary {
    stops: [Option<Location>; 12],
}

impl Itinerary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An itinerary that stays at one location all year.
    #[must_use]
    pub fn stationary(location: Location) -> Self {
        Self {
            stops: [Some(location); 12],
        }
    }

    /// Assigns `location` to each of `months`, replacing earlier assignments.
    pub fn assign<I>(&mut self, months: I, location: Location)
    where
        I: IntoIterator<Item = Month>,
    {
        for month in months {
            self.stops[month.index()] = Some(location);
        }
    }

    /// Removes the assignment of `month`.
    pub fn clear(&mut self, month: Month) {
        self.stops[month.index()] = None;
    }

    #[must_use]
    pub fn location(&self, month: Month) -> Option<Location> {
        self.stops[month.index()]
    }

    /// Months with a location, in calendar order.
    #[must_use]
    pub fn assigned_months(&self) -> Vec<Month> {
        Month::ALL
            .into_iter()
            .filter(|m| self.location(*m).is_some())
            .collect()
    }

    /// Months without a location, in calendar order.
    #[must_use]
    pub fn missing_months(&self) -> Vec<Month> {
        Month::ALL
            .into_iter()
            .filter(|m| self.location(*m).is_none())
            .collect()
    }

    /// The first month in calendar order that still needs a location.
    #[must_use]
    pub fn next_unassigned(&self) -> Option<Month> {
        Month::ALL.into_iter().find(|m| self.location(*m).is_none())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.stops.iter().all(Option::is_some)
    }

    /// Month and location pairs, or `None` unless every month is assigned.
    #[must_use]
    pub fn complete_stops(&self) -> Option<[(Month, Location); 12]> {
        let mut stops = [(Month::January, Location::new(0.0, 0.0)); 12];
        for (slot, month) in stops.iter_mut().zip(Month::ALL) {
            *slot = (month, self.location(month)?);
        }
        Some(stops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_itinerary_is_missing_everything() {
        let itinerary = Itinerary::new();
        assert_eq!(itinerary.missing_months(), Month::ALL.to_vec());
        assert_eq!(itinerary.next_unassigned(), Some(Month::January));
        assert!(itinerary.complete_stops().is_none());
    }

    #[test]
    fn later_assignment_replaces_earlier() {
        let mut itinerary = Itinerary::new();
        itinerary.assign([Month::May], Location::new(10.0, 10.0));
        itinerary.assign([Month::May, Month::June], Location::new(20.0, 20.0));

        assert_eq!(itinerary.location(Month::May), Some(Location::new(20.0, 20.0)));
        assert_eq!(itinerary.assigned_months(), vec![Month::May, Month::June]);
    }

    #[test]
    fn completes_when_all_months_assigned() {
        let mut itinerary = Itinerary::new();
        itinerary.assign(Month::ALL[..6].iter().copied(), Location::new(56.0, 3.0));
        assert!(!itinerary.is_complete());
        assert_eq!(itinerary.next_unassigned(), Some(Month::July));

        itinerary.assign(Month::ALL[6..].iter().copied(), Location::new(-33.0, 18.0));
        assert!(itinerary.is_complete());
        assert_eq!(itinerary.next_unassigned(), None);

        let stops = itinerary.complete_stops().unwrap();
        assert_eq!(stops[0], (Month::January, Location::new(56.0, 3.0)));
        assert_eq!(stops[11], (Month::December, Location::new(-33.0, 18.0)));
    }

    #[test]
    fn clearing_a_month_makes_it_missing() {
        let mut itinerary = Itinerary::stationary(Location::new(0.0, 0.0));
        itinerary.clear(Month::August);
        assert_eq!(itinerary.missing_months(), vec![Month::August]);
    }
}
