//! # Yearly Savings of a Solar-Heated Deck Pool
//!
//! This example loads a scenario describing a heated pool aboard a vessel,
//! the solar collector that supports its diesel-powered heating and the
//! vessel's itinerary for the year.
//!
//! - Each month uses the climate of the grid point nearest to the vessel.
//! - Heat loss covers evaporation, radiation and convection, with a night cover.
//! - Collector heat only counts up to the heating the pool still needs after
//!   direct solar gain.
//!
//! The program prints one row per month followed by the yearly totals.
//! Columns that do not add up over a year are marked with `-`.
//!
//! ## Running the Example
//!
//! To run this example with Cargo:
//!
//! ```sh
//! cargo run --example yearly_savings
//! ```
//!
//! Another scenario file can be passed as the first argument:
//!
//! ```sh
//! cargo run --example yearly_savings -- path/to/scenario.toml
//! ```

use std::{env, error::Error, path::PathBuf};

use poolheat_components::{
    savings::{MonthlySavings, YearlyTotals},
    scenario::Scenario,
};
use uom::si::{
    area::square_meter, energy::kilowatt_hour, f64::Energy, mass::kilogram,
    thermodynamic_temperature::degree_celsius, volume::liter,
};

const DEFAULT_SCENARIO: &str = "scenarios/vessel_itinerary.toml";

fn main() -> Result<(), Box<dyn Error>> {
    let path = env::args().nth(1).map_or_else(
        || PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_SCENARIO),
        PathBuf::from,
    );

    let scenario = Scenario::from_path(&path)?;
    let pool = scenario.pool();
    println!(
        "Pool: {:.1} °C, {:.0} m², cover {}\nWind: {}",
        pool.temperature.get::<degree_celsius>(),
        pool.area.get::<square_meter>(),
        if pool.cover_used { "used at night" } else { "not used" },
        scenario.shielding().description(),
    );
    println!(
        "Collector: {:.0} m², COP {:.1}, diesel {:.2} per litre\n",
        scenario.collector().area.get::<square_meter>(),
        scenario.economics().cop,
        scenario.economics().diesel_price_per_liter,
    );

    let yearly = scenario.yearly()?;

    print_header();
    for month in &yearly.months {
        print_month(month);
    }
    print_totals(&yearly.totals);

    Ok(())
}

fn kwh(energy: Energy) -> f64 {
    energy.get::<kilowatt_hour>()
}

fn print_header() {
    println!(
        "{:<10} {:>16} {:>9} {:>9} {:>9} {:>10} {:>10} {:>10} {:>9} {:>9} {:>9}",
        "Month",
        "Location",
        "Loss/d",
        "Gain/d",
        "Save/d",
        "Loss/mo",
        "Save/mo",
        "Elec kWh",
        "Diesel L",
        "Diesel kg",
        "Cost",
    );
}

fn print_month(m: &MonthlySavings) {
    println!(
        "{:<10} {:>16} {:>9.1} {:>9.1} {:>9.1} {:>10.0} {:>10.0} {:>10.0} {:>9.1} {:>9.1} {:>9.2}",
        m.month.name(),
        m.location.to_string(),
        kwh(m.daily.total_loss),
        kwh(m.daily.collector_gain),
        kwh(m.daily.net_saving),
        kwh(m.monthly_loss),
        kwh(m.monthly_net_saving),
        kwh(m.fuel.electrical),
        m.fuel.diesel_volume.get::<liter>(),
        m.fuel.diesel_mass.get::<kilogram>(),
        m.fuel.cost,
    );
}

fn print_totals(t: &YearlyTotals) {
    println!(
        "{:<10} {:>16} {:>9} {:>9} {:>9} {:>10.0} {:>10.0} {:>10.0} {:>9.1} {:>9.1} {:>9.2}",
        "Total",
        "-",
        "-",
        "-",
        "-",
        kwh(t.loss),
        kwh(t.net_saving),
        kwh(t.electrical_saving),
        t.diesel_volume.get::<liter>(),
        t.diesel_mass.get::<kilogram>(),
        t.cost_saved,
    );
}
