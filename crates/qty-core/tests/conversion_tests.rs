//! Conversion engine scenarios over a small mechanics table

use std::sync::Arc;

use pretty_assertions::assert_eq;
use qty_core::{
    add, convert, convert_base, dimensionality, parse_quantity, parse_units, subtract,
    CompoundUnit, Definitions, DefinitionsBuilder, Quantity, QuantityError, SimpleUnit,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn mechanics_builder() -> DefinitionsBuilder {
    DefinitionsBuilder::new()
        .prefix("kilo", 1000.0, &["k"])
        .prefix("milli", 0.001, &["m"])
        .base("meter", "length", &["m"])
        .base("gram", "mass", &["g"])
        .base("second", "time", &["s"])
        .unit("foot", 0.3048, "meter", &["ft"])
        .unit("inch", 1.0 / 12.0, "foot", &["in"])
        .unit("mile", 5280.0, "foot", &["mi"])
        .unit("hour", 3600.0, "second", &["h"])
        .unit("mph", 1.0, "mile / hour", &[])
        .unit("newton", 1.0, "kilogram meter / second^2", &["N"])
}

fn mechanics() -> Arc<Definitions> {
    Arc::new(mechanics_builder().build().unwrap())
}

fn q(defs: &Arc<Definitions>, input: &str) -> Quantity {
    parse_quantity(defs, input).unwrap()
}

fn u(defs: &Arc<Definitions>, input: &str) -> CompoundUnit {
    parse_units(defs, input).unwrap()
}

#[test]
fn test_meter_to_foot() {
    init_logging();
    let defs = mechanics();
    let feet = convert(&q(&defs, "1 meter"), &u(&defs, "foot")).unwrap();
    assert!((feet.magnitude() - 3.280839895013123).abs() < 1e-12);
    assert_eq!(feet.units(), &u(&defs, "foot"));
}

#[test]
fn test_newton_to_base() {
    let defs = mechanics();
    let base = convert_base(&q(&defs, "1 newton"));
    assert_eq!(base.magnitude(), 1000.0);
    assert_eq!(
        base.units().terms(),
        &[
            SimpleUnit::plain("gram", 1.0),
            SimpleUnit::plain("meter", 1.0),
            SimpleUnit::plain("second", -2.0),
        ]
    );
    assert_eq!(base.to_string(), "1000 gram * meter / second ** 2");
}

#[test]
fn test_newton_dimensionality() {
    let defs = mechanics();
    let dims = dimensionality(&q(&defs, "1 newton"));
    assert_eq!(
        dims.terms(),
        &[
            SimpleUnit::plain("[length]", 1.0),
            SimpleUnit::plain("[mass]", 1.0),
            SimpleUnit::plain("[time]", -2.0),
        ]
    );
    assert_eq!(dims.to_string(), "[length] * [mass] / [time] ** 2");
}

#[test]
fn test_feet_plus_inches() {
    let defs = mechanics();
    let sum = add(&q(&defs, "2 foot"), &q(&defs, "6 inch")).unwrap();
    assert!((sum.magnitude() - 2.5).abs() < 1e-9);
    assert_eq!(sum.units(), &u(&defs, "foot"));
}

#[test]
fn test_meter_to_second_fails() {
    let defs = mechanics();
    let err = convert(&q(&defs, "1 meter"), &u(&defs, "second")).unwrap_err();
    match err {
        QuantityError::Dimensionality(from, to) => {
            assert_eq!(from.terms(), &[SimpleUnit::plain("[length]", 1.0)]);
            assert_eq!(to.terms(), &[SimpleUnit::plain("[time]", 1.0)]);
        }
        other => panic!("expected a dimensionality error, got {other:?}"),
    }
}

#[test]
fn test_different_definitions_fail() {
    let table_a = mechanics();
    let table_b = Arc::new(
        mechanics_builder()
            .unit("yard", 3.0, "foot", &["yd"])
            .build()
            .unwrap(),
    );
    assert_ne!(table_a.fingerprint(), table_b.fingerprint());

    let err = convert(&q(&table_a, "1 meter"), &u(&table_b, "foot")).unwrap_err();
    assert!(matches!(err, QuantityError::DifferentDefinitions(..)));
    assert!(err.is_incompatible());

    let err = add(&q(&table_a, "1 meter"), &q(&table_b, "1 meter")).unwrap_err();
    assert!(matches!(err, QuantityError::DifferentDefinitions(..)));
}

#[test]
fn test_identical_tables_are_compatible() {
    let table_a = mechanics();
    let table_b = mechanics();
    assert!(!Arc::ptr_eq(&table_a, &table_b));

    let feet = convert(&q(&table_a, "1 meter"), &u(&table_b, "foot")).unwrap();
    assert!((feet.magnitude() - 3.280839895013123).abs() < 1e-12);
}

#[test]
fn test_conversion_composes() {
    let defs = mechanics();
    let speed = q(&defs, "25 m/s");
    let via_mph = convert(&convert(&speed, &u(&defs, "mph")).unwrap(), &u(&defs, "km/h")).unwrap();
    let direct = convert(&speed, &u(&defs, "km/h")).unwrap();
    assert!((via_mph.magnitude() - direct.magnitude()).abs() < 1e-9);
    assert!((direct.magnitude() - 90.0).abs() < 1e-9);
}

#[test]
fn test_convert_base_is_idempotent() {
    let defs = mechanics();
    for input in ["3 mph", "2 kN", "7 ft^2 / h", "1"] {
        let once = convert_base(&q(&defs, input));
        let twice = convert_base(&once);
        assert!(
            (once.magnitude() - twice.magnitude()).abs() <= 1e-12 * once.magnitude().abs(),
            "{input}: {once} vs {twice}"
        );
    }
}

#[test]
fn test_self_conversion_is_identity() {
    let defs = mechanics();
    for input in ["0.1 inch", "12.5 mph", "3 kg m / s^2", "42"] {
        let quantity = q(&defs, input);
        let same = convert(&quantity, quantity.units()).unwrap();
        assert_eq!(same, quantity);
    }
}

#[test]
fn test_add_to_itself_doubles() {
    let defs = mechanics();
    let quantity = q(&defs, "1.25 mi/h");
    let doubled = add(&quantity, &quantity).unwrap();
    assert_eq!(doubled.magnitude(), 2.5);
    assert_eq!(doubled.units(), quantity.units());
}

#[test]
fn test_add_is_asymmetric_in_units() {
    let defs = mechanics();
    let meters = q(&defs, "25 m/s");
    let miles = q(&defs, "3 mph");

    let in_mps = add(&meters, &miles).unwrap();
    let in_mph = add(&miles, &meters).unwrap();

    assert_eq!(in_mps.units(), meters.units());
    assert_eq!(in_mph.units(), miles.units());

    let back = convert(&in_mph, meters.units()).unwrap();
    assert!((back.magnitude() - in_mps.magnitude()).abs() < 1e-9);
    assert!((in_mps.magnitude() - 26.34112).abs() < 1e-9);
}

#[test]
fn test_subtract() {
    let defs = mechanics();
    let diff = subtract(&q(&defs, "1 km"), &q(&defs, "250 m")).unwrap();
    assert!((diff.magnitude() - 0.75).abs() < 1e-12);
    assert_eq!(diff.units(), &u(&defs, "km"));
}

#[test]
fn test_subtract_incompatible_propagates() {
    let defs = mechanics();
    let err = subtract(&q(&defs, "1 km"), &q(&defs, "1 h")).unwrap_err();
    assert!(matches!(err, QuantityError::Dimensionality(..)));
}

#[test]
fn test_fractional_powers_convert() {
    let defs = mechanics();
    let root = q(&defs, "4 m^2").powf(0.5).unwrap();
    let feet = convert(&root, &u(&defs, "ft")).unwrap();
    assert!((feet.magnitude() - 2.0 / 0.3048).abs() < 1e-9);
}

#[test]
fn test_products_convert_without_simplification() {
    let defs = mechanics();
    let area = q(&defs, "2 m").multiply(&q(&defs, "3 ft")).unwrap();
    assert_eq!(area.units().terms().len(), 2);

    let square_feet = convert(&area, &u(&defs, "ft^2")).unwrap();
    assert!((square_feet.magnitude() - 6.0 / 0.3048).abs() < 1e-9);
}

#[test]
fn test_dimensionless_ratio() {
    let defs = mechanics();
    let ratio = q(&defs, "25 km").divide(&q(&defs, "100 m")).unwrap();
    let plain = convert(&ratio, &CompoundUnit::dimensionless(Arc::clone(&defs))).unwrap();
    assert!((plain.magnitude() - 250.0).abs() < 1e-9);
}
