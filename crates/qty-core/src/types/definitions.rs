//! The definitions store
//!
//! A [`Definitions`] value holds every prefix, unit expansion and dimension
//! label a family of quantities was built from. It is immutable once built
//! and shared behind an `Arc`. Two stores count as the same table when their
//! fingerprints (SHA-1 of the source text) match.

use std::collections::HashMap;
use std::fmt::Write as _;

use log::warn;
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

use super::unit::SimpleUnit;
use crate::engine::{simple_to_base, BaseQuantity};
use crate::error::{QuantityError, QuantityResult};
use crate::parser;

/// A unit's scalar multiplier and its expansion into base units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseExpansion {
    pub multiplier: f64,
    pub units: Vec<SimpleUnit>,
}

/// Immutable table of prefixes, unit expansions and dimension labels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Definitions {
    bases: HashMap<String, BaseExpansion>,
    prefix_values: HashMap<String, f64>,
    unit_types: HashMap<String, String>,
    #[serde(default)]
    synonyms: HashMap<String, String>,
    #[serde(default)]
    prefix_synonyms: HashMap<String, String>,
    def_string_hash: String,
}

impl Definitions {
    /// Assemble a store from tables produced by an external loader.
    ///
    /// `source` is the text the tables were read from; its digest becomes the
    /// fingerprint.
    pub fn from_parts(
        bases: HashMap<String, BaseExpansion>,
        mut prefix_values: HashMap<String, f64>,
        unit_types: HashMap<String, String>,
        synonyms: HashMap<String, String>,
        prefix_synonyms: HashMap<String, String>,
        source: &str,
    ) -> Self {
        prefix_values.entry(String::new()).or_insert(1.0);
        Self {
            bases,
            prefix_values,
            unit_types,
            synonyms,
            prefix_synonyms,
            def_string_hash: fingerprint(source),
        }
    }

    fn empty() -> Self {
        Self {
            bases: HashMap::new(),
            prefix_values: HashMap::from([(String::new(), 1.0)]),
            unit_types: HashMap::new(),
            synonyms: HashMap::new(),
            prefix_synonyms: HashMap::new(),
            def_string_hash: String::new(),
        }
    }

    /// Hex SHA-1 of the definitions source text
    pub fn fingerprint(&self) -> &str {
        &self.def_string_hash
    }

    /// Base-unit expansion of a canonical unit symbol
    pub fn base(&self, symbol: &str) -> Option<&BaseExpansion> {
        self.bases.get(symbol)
    }

    /// Multiplier of a canonical prefix name (`""` is always 1)
    pub fn prefix_value(&self, prefix: &str) -> Option<f64> {
        self.prefix_values.get(prefix).copied()
    }

    /// Dimension label of a base unit, e.g. `"length"` for `"meter"`
    pub fn unit_type(&self, symbol: &str) -> Option<&str> {
        self.unit_types.get(symbol).map(String::as_str)
    }

    /// Whether `symbol` is an irreducible base unit
    pub fn is_base_unit(&self, symbol: &str) -> bool {
        self.unit_types.contains_key(symbol)
    }

    /// All canonical unit symbols
    pub fn units(&self) -> impl Iterator<Item = &str> {
        self.bases.keys().map(String::as_str)
    }

    /// All canonical prefix names, excluding the empty prefix
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.prefix_values
            .keys()
            .map(String::as_str)
            .filter(|p| !p.is_empty())
    }

    /// Check that a term's symbol and prefix exist in this table
    pub fn validate(&self, term: &SimpleUnit) -> QuantityResult<()> {
        if !self.bases.contains_key(&term.symbol) {
            return Err(QuantityError::UndefinedUnit(term.symbol.clone()));
        }
        if !self.prefix_values.contains_key(&term.prefix) {
            return Err(QuantityError::UndefinedUnit(term.prefix.clone()));
        }
        Ok(())
    }

    /// Resolve a written unit name to its canonical `(prefix, symbol)` pair.
    ///
    /// Exact unit names win, then unit synonyms, then the longest prefix
    /// (name or synonym) whose remainder is itself a unit.
    pub fn resolve(&self, name: &str) -> QuantityResult<(String, String)> {
        if let Some(symbol) = self.canonical_unit(name) {
            return Ok((String::new(), symbol.to_string()));
        }

        let prefix_names = self
            .prefix_values
            .keys()
            .filter(|p| !p.is_empty())
            .map(|p| (p.as_str(), p.as_str()));
        let prefix_aliases = self
            .prefix_synonyms
            .iter()
            .map(|(alias, canonical)| (alias.as_str(), canonical.as_str()));

        prefix_names
            .chain(prefix_aliases)
            .filter(|(written, _)| name.len() > written.len() && name.starts_with(written))
            .filter_map(|(written, prefix)| {
                self.canonical_unit(&name[written.len()..])
                    .map(|symbol| (written.len(), prefix, symbol))
            })
            .max_by(|a, b| a.0.cmp(&b.0).then_with(|| b.1.cmp(a.1)))
            .map(|(_, prefix, symbol)| (prefix.to_string(), symbol.to_string()))
            .ok_or_else(|| QuantityError::UndefinedUnit(name.to_string()))
    }

    fn canonical_unit(&self, name: &str) -> Option<&str> {
        if let Some((symbol, _)) = self.bases.get_key_value(name) {
            return Some(symbol.as_str());
        }
        self.synonyms.get(name).map(String::as_str)
    }
}

/// Hex-encoded SHA-1 digest of a definitions source text
pub fn fingerprint(source: &str) -> String {
    let mut hasher = <Sha1 as Digest>::new();
    hasher.update(source.as_bytes());
    hasher
        .finalize()
        .iter()
        .fold(String::with_capacity(40), |mut hex, byte| {
            let _ = write!(hex, "{byte:02x}");
            hex
        })
}

/// Programmatic construction of a [`Definitions`] table.
///
/// Declarations are applied in order; a derived unit may only refer to
/// prefixes and units declared before it. Errors are reported by
/// [`build`](Self::build).
///
/// ```
/// use qty_core::DefinitionsBuilder;
///
/// let defs = DefinitionsBuilder::new()
///     .prefix("kilo", 1000.0, &["k"])
///     .base("meter", "length", &["m"])
///     .base("second", "time", &["s"])
///     .unit("kph", 1.0, "kilometer / hour", &[])
///     .build();
/// // "hour" was never declared
/// assert!(defs.is_err());
/// ```
#[derive(Debug)]
pub struct DefinitionsBuilder {
    defs: Definitions,
    source: String,
    error: Option<QuantityError>,
}

impl DefinitionsBuilder {
    pub fn new() -> Self {
        Self {
            defs: Definitions::empty(),
            source: String::new(),
            error: None,
        }
    }

    /// Declare a prefix, e.g. `kilo = 1000` with alias `k`
    pub fn prefix(mut self, name: &str, value: f64, aliases: &[&str]) -> Self {
        if self.error.is_some() {
            return self;
        }
        let _ = writeln!(self.source, "{name}- = {value}{}", alias_suffix(aliases));
        if self.defs.prefix_values.insert(name.to_string(), value).is_some() {
            warn!("prefix `{name}` redefined");
        }
        for alias in aliases {
            self.defs
                .prefix_synonyms
                .insert(alias.to_string(), name.to_string());
        }
        self
    }

    /// Declare an irreducible base unit of the given dimension
    pub fn base(mut self, name: &str, dimension: &str, aliases: &[&str]) -> Self {
        if self.error.is_some() {
            return self;
        }
        let _ = writeln!(self.source, "{name} = [{dimension}]{}", alias_suffix(aliases));
        let expansion = BaseExpansion {
            multiplier: 1.0,
            units: vec![SimpleUnit::plain(name, 1.0)],
        };
        if self.defs.bases.insert(name.to_string(), expansion).is_some() {
            warn!("unit `{name}` redefined");
        }
        self.defs
            .unit_types
            .insert(name.to_string(), dimension.to_string());
        self.add_synonyms(name, aliases);
        self
    }

    /// Declare a unit as `factor * definition`, where `definition` is a unit
    /// expression over previously declared units (e.g. `"kilogram meter / second^2"`)
    pub fn unit(mut self, name: &str, factor: f64, definition: &str, aliases: &[&str]) -> Self {
        if self.error.is_some() {
            return self;
        }
        let _ = writeln!(
            self.source,
            "{name} = {factor} * ({definition}){}",
            alias_suffix(aliases)
        );
        match self.expand(factor, definition) {
            Ok(expansion) => {
                if self.defs.bases.insert(name.to_string(), expansion).is_some() {
                    warn!("unit `{name}` redefined");
                }
                self.add_synonyms(name, aliases);
            }
            Err(e) => self.error = Some(e),
        }
        self
    }

    /// Finish the table, or report the first failed declaration
    pub fn build(self) -> QuantityResult<Definitions> {
        if let Some(e) = self.error {
            return Err(e);
        }
        let mut defs = self.defs;
        defs.def_string_hash = fingerprint(&self.source);
        Ok(defs)
    }

    fn expand(&self, factor: f64, definition: &str) -> QuantityResult<BaseExpansion> {
        let expr = parser::parse_expr(definition)?;
        let terms = parser::resolve_factors(&self.defs, &expr.factors)?;
        let reduced = terms
            .iter()
            .map(|term| simple_to_base(&self.defs, term))
            .fold(BaseQuantity::one(), BaseQuantity::multiply);
        Ok(BaseExpansion {
            multiplier: factor * expr.magnitude.unwrap_or(1.0) * reduced.magnitude,
            units: reduced.units,
        })
    }

    fn add_synonyms(&mut self, name: &str, aliases: &[&str]) {
        for alias in aliases {
            self.defs
                .synonyms
                .insert(alias.to_string(), name.to_string());
        }
    }
}

impl Default for DefinitionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn alias_suffix(aliases: &[&str]) -> String {
    aliases.iter().map(|a| format!(" = {a}")).collect()
}
