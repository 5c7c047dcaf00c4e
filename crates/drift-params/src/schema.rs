//! Parameter schemas: typed values plus the bounds metadata control surfaces bind to

/// A single tunable value. The schema default fixes the kind; persisted data
/// of the wrong kind is ignored at resolve time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Number(f64),
    Toggle(bool),
}

impl ParamValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Number(v) => Some(*v),
            ParamValue::Toggle(_) => None,
        }
    }

    pub fn as_toggle(&self) -> Option<bool> {
        match self {
            ParamValue::Toggle(v) => Some(*v),
            ParamValue::Number(_) => None,
        }
    }

    pub fn to_toml(&self) -> toml::Value {
        match self {
            ParamValue::Number(v) => toml::Value::Float(*v),
            ParamValue::Toggle(v) => toml::Value::Boolean(*v),
        }
    }
}

/// Description of one parameter: compiled-in default plus UI metadata.
///
/// `min`/`max`/`step` are control-surface hints, not runtime validation — the
/// panel constrains input range by construction, so values are never rejected
/// after the fact.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub default: ParamValue,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParamSpec {
    pub const fn number(
        key: &'static str,
        label: &'static str,
        default: f64,
        min: f64,
        max: f64,
        step: f64,
    ) -> Self {
        Self {
            key,
            label,
            default: ParamValue::Number(default),
            min,
            max,
            step,
        }
    }

    pub const fn toggle(key: &'static str, label: &'static str, default: bool) -> Self {
        Self {
            key,
            label,
            default: ParamValue::Toggle(default),
            min: 0.0,
            max: 1.0,
            step: 1.0,
        }
    }

    /// Coerce a persisted TOML value into this parameter's kind.
    /// Integer literals are accepted for number parameters (TOML writes
    /// `scale = 1` for whole numbers).
    pub fn coerce(&self, value: &toml::Value) -> Option<ParamValue> {
        match self.default {
            ParamValue::Number(_) => value
                .as_float()
                .or_else(|| value.as_integer().map(|i| i as f64))
                .map(ParamValue::Number),
            ParamValue::Toggle(_) => value.as_bool().map(ParamValue::Toggle),
        }
    }
}

/// A named, ordered set of parameter specs
#[derive(Debug)]
pub struct GroupSchema {
    pub name: &'static str,
    pub params: &'static [ParamSpec],
}

impl GroupSchema {
    pub fn spec(&self, key: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|s| s.key == key)
    }
}

/// A group with its resolved values: persisted where present, defaults
/// everywhere else. Carries the schema so control surfaces can bind
/// bounds/step/label without a second lookup.
#[derive(Debug, Clone)]
pub struct ResolvedGroup {
    schema: &'static GroupSchema,
    // Parallel to schema.params
    values: Vec<ParamValue>,
}

impl ResolvedGroup {
    /// All values at their compiled-in defaults
    pub fn defaults(schema: &'static GroupSchema) -> Self {
        Self {
            schema,
            values: schema.params.iter().map(|s| s.default).collect(),
        }
    }

    pub(crate) fn from_values(schema: &'static GroupSchema, values: Vec<ParamValue>) -> Self {
        debug_assert_eq!(values.len(), schema.params.len());
        Self { schema, values }
    }

    pub fn schema(&self) -> &'static GroupSchema {
        self.schema
    }

    pub fn name(&self) -> &'static str {
        self.schema.name
    }

    pub fn get(&self, key: &str) -> Option<ParamValue> {
        let idx = self.schema.params.iter().position(|s| s.key == key)?;
        Some(self.values[idx])
    }

    /// Numeric value for `key`; falls back to the schema default (or 0.0 for
    /// an unknown key, which is a caller bug and gets logged).
    pub fn number(&self, key: &str) -> f64 {
        match self.lookup(key) {
            Some((spec, value)) => value
                .as_number()
                .or_else(|| spec.default.as_number())
                .unwrap_or(0.0),
            None => {
                log::warn!("unknown parameter {}.{}", self.schema.name, key);
                0.0
            }
        }
    }

    /// Boolean value for `key`; same fallback rules as [`Self::number`]
    pub fn toggle(&self, key: &str) -> bool {
        match self.lookup(key) {
            Some((spec, value)) => value
                .as_toggle()
                .or_else(|| spec.default.as_toggle())
                .unwrap_or(false),
            None => {
                log::warn!("unknown parameter {}.{}", self.schema.name, key);
                false
            }
        }
    }

    pub fn set_number(&mut self, key: &str, value: f64) {
        self.set(key, ParamValue::Number(value));
    }

    pub fn set_toggle(&mut self, key: &str, value: bool) {
        self.set(key, ParamValue::Toggle(value));
    }

    pub fn set(&mut self, key: &str, value: ParamValue) {
        match self.schema.params.iter().position(|s| s.key == key) {
            Some(idx) => self.values[idx] = value,
            None => log::warn!("unknown parameter {}.{}", self.schema.name, key),
        }
    }

    /// Iterate `(spec, value)` pairs in schema order, mutably. This is the
    /// shape control surfaces want for building widgets.
    pub fn entries_mut(&mut self) -> impl Iterator<Item = (&ParamSpec, &mut ParamValue)> {
        self.schema.params.iter().zip(self.values.iter_mut())
    }

    /// Serialize the group into a TOML table keyed by parameter name
    pub fn to_table(&self) -> toml::Table {
        let mut table = toml::Table::new();
        for (spec, value) in self.schema.params.iter().zip(&self.values) {
            table.insert(spec.key.to_string(), value.to_toml());
        }
        table
    }

    fn lookup(&self, key: &str) -> Option<(&ParamSpec, ParamValue)> {
        let idx = self.schema.params.iter().position(|s| s.key == key)?;
        Some((&self.schema.params[idx], self.values[idx]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TEST_GROUP: GroupSchema = GroupSchema {
        name: "test",
        params: &[
            ParamSpec::number("scale", "Scale", 0.02, 0.0, 1.0, 0.01),
            ParamSpec::toggle("enabled", "Enabled", true),
        ],
    };

    #[test]
    fn defaults_match_schema() {
        let group = ResolvedGroup::defaults(&TEST_GROUP);
        assert!((group.number("scale") - 0.02).abs() < 1e-12);
        assert!(group.toggle("enabled"));
    }

    #[test]
    fn set_and_get() {
        let mut group = ResolvedGroup::defaults(&TEST_GROUP);
        group.set_number("scale", 0.5);
        group.set_toggle("enabled", false);
        assert!((group.number("scale") - 0.5).abs() < 1e-12);
        assert!(!group.toggle("enabled"));
    }

    #[test]
    fn unknown_key_falls_back() {
        let group = ResolvedGroup::defaults(&TEST_GROUP);
        assert_eq!(group.number("missing"), 0.0);
        assert!(!group.toggle("missing"));
    }

    #[test]
    fn coerce_accepts_integers_for_numbers() {
        let spec = ParamSpec::number("n", "N", 1.0, 0.0, 10.0, 1.0);
        let coerced = spec.coerce(&toml::Value::Integer(3));
        assert_eq!(coerced, Some(ParamValue::Number(3.0)));
    }

    #[test]
    fn coerce_rejects_kind_mismatch() {
        let spec = ParamSpec::toggle("t", "T", false);
        assert_eq!(spec.coerce(&toml::Value::Float(1.0)), None);
        let spec = ParamSpec::number("n", "N", 1.0, 0.0, 10.0, 1.0);
        assert_eq!(spec.coerce(&toml::Value::Boolean(true)), None);
    }

    #[test]
    fn to_table_round_trips_kinds() {
        let group = ResolvedGroup::defaults(&TEST_GROUP);
        let table = group.to_table();
        assert!(table.get("scale").and_then(|v| v.as_float()).is_some());
        assert!(table.get("enabled").and_then(|v| v.as_bool()).is_some());
    }
}
