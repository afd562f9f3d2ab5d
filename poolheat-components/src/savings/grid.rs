use ndarray::Array1;

use crate::climate::Month;

/// Savings for one month evaluated at every point of a climate dataset.
///
/// All arrays share the order of the dataset records. Energy values are daily
/// totals in kWh, suitable for plotting as a map.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSavings {
    pub month: Month,
    pub latitude: Array1<f64>,
    pub longitude: Array1<f64>,
    pub total_loss: Array1<f64>,
    pub collector_gain: Array1<f64>,
    pub net_saving: Array1<f64>,
    pub evaporation: Array1<f64>,
    pub radiation: Array1<f64>,
    pub convection: Array1<f64>,
}

impl GridSavings {
    #[must_use]
    pub fn len(&self) -> usize {
        self.latitude.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.latitude.is_empty()
    }
}
