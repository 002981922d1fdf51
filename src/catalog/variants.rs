//! Variant axis expansion: cartesian products with deterministic SKUs.
//!
//! A product document may declare variant axes:
//!
//! ```json
//! "variants": {
//!     "color": ["Midnight Black", "Arctic White"],
//!     "size": ["S", "M", "L"]
//! }
//! ```
//!
//! Expansion is a pure function of the document. Axes multiply in document
//! order and values stay in listed order, so the derived SKU list is
//! reproducible load over load: `TEE-MIDNIGHT-BLACK-S`, `TEE-MIDNIGHT-BLACK-M`,
//! … `TEE-ARCTIC-WHITE-L`. Per-locale names and descriptions may reference
//! axes as `{color}` / `{size}` placeholders; each combination interpolates
//! its own values.

use serde::Deserialize;
use serde::de::{MapAccess, Visitor};
use std::fmt;

/// One named variant axis with its values, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantAxis {
    pub name: String,
    pub values: Vec<String>,
}

/// Ordered list of axes. Deserialized through a map visitor rather than a
/// `HashMap` so that JSON document order survives — derived SKU ordering
/// depends on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantAxes(pub Vec<VariantAxis>);

impl<'de> Deserialize<'de> for VariantAxes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct AxesVisitor;

        impl<'de> Visitor<'de> for AxesVisitor {
            type Value = VariantAxes;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of axis name to value list")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut axes = Vec::new();
                while let Some((name, values)) = map.next_entry::<String, Vec<String>>()? {
                    axes.push(VariantAxis { name, values });
                }
                Ok(VariantAxes(axes))
            }
        }

        deserializer.deserialize_map(AxesVisitor)
    }
}

/// One value chosen per axis: `[("color", "Arctic White"), ("size", "M")]`.
pub type Combination<'a> = Vec<(&'a str, &'a str)>;

/// Cartesian product over the axes, axis order outermost-first.
///
/// No axes yields one empty combination (the base product itself). An axis
/// with no values collapses the product to zero combinations — a document
/// bug, surfaced as a vanishing product rather than a crash.
pub fn combinations(axes: &[VariantAxis]) -> Vec<Combination<'_>> {
    let mut combos: Vec<Combination<'_>> = vec![Vec::new()];
    for axis in axes {
        let mut next = Vec::with_capacity(combos.len() * axis.values.len().max(1));
        for combo in &combos {
            for value in &axis.values {
                let mut extended = combo.clone();
                extended.push((axis.name.as_str(), value.as_str()));
                next.push(extended);
            }
        }
        combos = next;
    }
    combos
}

/// Append one sanitized axis value per axis to the base SKU.
pub fn derive_sku(base: &str, combination: &Combination<'_>) -> String {
    let mut sku = base.to_string();
    for (_, value) in combination {
        sku.push('-');
        sku.push_str(&sanitized_upper(value));
    }
    sku
}

/// Replace `{axis}` placeholders in localized text with the combination's
/// values. Text without placeholders passes through unchanged.
pub fn interpolate(text: &str, combination: &Combination<'_>) -> String {
    let mut result = text.to_string();
    for (axis, value) in combination {
        result = result.replace(&format!("{{{axis}}}"), value);
    }
    result
}

/// Uppercase a value for SKU use: alphanumerics kept, every other run of
/// characters becomes a single hyphen, leading/trailing hyphens stripped.
fn sanitized_upper(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut pending_hyphen = false;
    for c in value.to_uppercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            out.push(c);
            pending_hyphen = false;
        } else {
            pending_hyphen = true;
        }
    }
    out
}
