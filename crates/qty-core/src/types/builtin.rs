//! Built-in SI and imperial definitions
//!
//! To add a unit, add an entry to one of the tables below. Derived units may
//! only refer to units that appear earlier in [`DERIVED_UNITS`].

use std::sync::{Arc, LazyLock};

use super::{Definitions, DefinitionsBuilder};
use crate::error::QuantityResult;

/// Prefix metadata
pub struct PrefixDef {
    pub name: &'static str,
    pub value: f64,
    pub aliases: &'static [&'static str],
}

/// Irreducible unit of one physical dimension
pub struct BaseUnitDef {
    pub name: &'static str,
    /// Dimension label, e.g. `"length"`
    pub dimension: &'static str,
    pub aliases: &'static [&'static str],
}

/// Unit defined as `factor * definition`
pub struct UnitDef {
    pub name: &'static str,
    pub factor: f64,
    /// Unit expression over earlier units
    pub definition: &'static str,
    pub aliases: &'static [&'static str],
}

pub static PREFIXES: &[PrefixDef] = &[
    PrefixDef {
        name: "yotta",
        value: 1e24,
        aliases: &["Y"],
    },
    PrefixDef {
        name: "zetta",
        value: 1e21,
        aliases: &["Z"],
    },
    PrefixDef {
        name: "exa",
        value: 1e18,
        aliases: &["E"],
    },
    PrefixDef {
        name: "peta",
        value: 1e15,
        aliases: &["P"],
    },
    PrefixDef {
        name: "tera",
        value: 1e12,
        aliases: &["T"],
    },
    PrefixDef {
        name: "giga",
        value: 1e9,
        aliases: &["G"],
    },
    PrefixDef {
        name: "mega",
        value: 1e6,
        aliases: &["M"],
    },
    PrefixDef {
        name: "kilo",
        value: 1e3,
        aliases: &["k"],
    },
    PrefixDef {
        name: "hecto",
        value: 1e2,
        aliases: &["h"],
    },
    PrefixDef {
        name: "deca",
        value: 1e1,
        aliases: &["da"],
    },
    PrefixDef {
        name: "deci",
        value: 1e-1,
        aliases: &["d"],
    },
    PrefixDef {
        name: "centi",
        value: 1e-2,
        aliases: &["c"],
    },
    PrefixDef {
        name: "milli",
        value: 1e-3,
        aliases: &["m"],
    },
    PrefixDef {
        name: "micro",
        value: 1e-6,
        aliases: &["u"],
    },
    PrefixDef {
        name: "nano",
        value: 1e-9,
        aliases: &["n"],
    },
    PrefixDef {
        name: "pico",
        value: 1e-12,
        aliases: &["p"],
    },
    PrefixDef {
        name: "femto",
        value: 1e-15,
        aliases: &["f"],
    },
    PrefixDef {
        name: "atto",
        value: 1e-18,
        aliases: &["a"],
    },
    PrefixDef {
        name: "zepto",
        value: 1e-21,
        aliases: &["z"],
    },
    PrefixDef {
        name: "yocto",
        value: 1e-24,
        aliases: &["y"],
    },
];

pub static BASE_UNITS: &[BaseUnitDef] = &[
    BaseUnitDef {
        name: "meter",
        dimension: "length",
        aliases: &["m", "meters", "metre"],
    },
    BaseUnitDef {
        name: "gram",
        dimension: "mass",
        aliases: &["g", "grams"],
    },
    BaseUnitDef {
        name: "second",
        dimension: "time",
        aliases: &["s", "sec", "seconds"],
    },
    BaseUnitDef {
        name: "ampere",
        dimension: "current",
        aliases: &["A", "amp"],
    },
    BaseUnitDef {
        name: "kelvin",
        dimension: "temperature",
        aliases: &["K"],
    },
    BaseUnitDef {
        name: "mole",
        dimension: "substance",
        aliases: &["mol"],
    },
    BaseUnitDef {
        name: "candela",
        dimension: "luminosity",
        aliases: &["cd"],
    },
    BaseUnitDef {
        name: "byte",
        dimension: "information",
        aliases: &["B", "bytes"],
    },
];

pub static DERIVED_UNITS: &[UnitDef] = &[
    // Time
    UnitDef {
        name: "minute",
        factor: 60.0,
        definition: "second",
        aliases: &["min", "minutes"],
    },
    UnitDef {
        name: "hour",
        factor: 60.0,
        definition: "minute",
        aliases: &["h", "hr", "hours"],
    },
    UnitDef {
        name: "day",
        factor: 24.0,
        definition: "hour",
        aliases: &["d", "days"],
    },
    UnitDef {
        name: "week",
        factor: 7.0,
        definition: "day",
        aliases: &["wk", "weeks"],
    },
    // Length
    UnitDef {
        name: "foot",
        factor: 0.3048,
        definition: "meter",
        aliases: &["ft", "feet"],
    },
    UnitDef {
        name: "inch",
        factor: 1.0 / 12.0,
        definition: "foot",
        aliases: &["in", "inches"],
    },
    UnitDef {
        name: "yard",
        factor: 3.0,
        definition: "foot",
        aliases: &["yd", "yards"],
    },
    UnitDef {
        name: "mile",
        factor: 5280.0,
        definition: "foot",
        aliases: &["mi", "miles"],
    },
    // Mass
    UnitDef {
        name: "pound",
        factor: 453.59237,
        definition: "gram",
        aliases: &["lb", "lbs", "pounds"],
    },
    UnitDef {
        name: "ounce",
        factor: 1.0 / 16.0,
        definition: "pound",
        aliases: &["oz", "ounces"],
    },
    // Volume
    UnitDef {
        name: "liter",
        factor: 1.0,
        definition: "decimeter^3",
        aliases: &["L", "l", "litre", "liters"],
    },
    // Mechanics and electricity
    UnitDef {
        name: "hertz",
        factor: 1.0,
        definition: "1 / second",
        aliases: &["Hz"],
    },
    UnitDef {
        name: "newton",
        factor: 1.0,
        definition: "kilogram meter / second^2",
        aliases: &["N"],
    },
    UnitDef {
        name: "joule",
        factor: 1.0,
        definition: "newton meter",
        aliases: &["J"],
    },
    UnitDef {
        name: "watt",
        factor: 1.0,
        definition: "joule / second",
        aliases: &["W"],
    },
    UnitDef {
        name: "pascal",
        factor: 1.0,
        definition: "newton / meter^2",
        aliases: &["Pa"],
    },
    UnitDef {
        name: "coulomb",
        factor: 1.0,
        definition: "ampere second",
        aliases: &["C"],
    },
    UnitDef {
        name: "volt",
        factor: 1.0,
        definition: "watt / ampere",
        aliases: &["V"],
    },
    // Speed
    UnitDef {
        name: "mph",
        factor: 1.0,
        definition: "mile / hour",
        aliases: &[],
    },
    UnitDef {
        name: "kph",
        factor: 1.0,
        definition: "kilometer / hour",
        aliases: &[],
    },
    // Information
    UnitDef {
        name: "bit",
        factor: 0.125,
        definition: "byte",
        aliases: &["b", "bits"],
    },
];

static DEFAULT_DEFINITIONS: LazyLock<Arc<Definitions>> = LazyLock::new(|| {
    Arc::new(build_default().expect("built-in definitions table is malformed"))
});

/// The built-in definitions, built once per process
pub fn default_definitions() -> Arc<Definitions> {
    Arc::clone(&DEFAULT_DEFINITIONS)
}

fn build_default() -> QuantityResult<Definitions> {
    let builder = PREFIXES.iter().fold(DefinitionsBuilder::new(), |b, p| {
        b.prefix(p.name, p.value, p.aliases)
    });
    let builder = BASE_UNITS.iter().fold(builder, |b, u| {
        b.base(u.name, u.dimension, u.aliases)
    });
    DERIVED_UNITS
        .iter()
        .fold(builder, |b, u| b.unit(u.name, u.factor, u.definition, u.aliases))
        .build()
}
