//! Unit families and base-unit conversion for recipe quantities.
//!
//! Every known cooking unit belongs to exactly one family. Volume units
//! convert through milliliters, weight units through grams, and count units
//! ("clove", "can", "slice") do not convert at all.
//!
//! # Example
//!
//! ```
//! use ingredient_units::{convert_to_base, units_compatible};
//!
//! let cups_ml = convert_to_base(2.0, Some("cups")).unwrap();
//! let ml = convert_to_base(473.176, Some("ml")).unwrap();
//! assert!((cups_ml - ml).abs() < 0.01);
//!
//! assert!(units_compatible(Some("g"), Some("kg")));
//! assert!(!units_compatible(Some("g"), Some("ml")));
//! ```

mod units;

pub use units::{
    canonical_unit, convert_from_base, convert_to_base, unit_factor, unit_family,
    units_compatible, UnitFamily, ML_PER_CUP, ML_PER_FL_OZ, ML_PER_GALLON, ML_PER_PINT,
    ML_PER_QUART, ML_PER_TBSP, ML_PER_TSP,
};
