// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT

pub mod feature;
pub mod mix;

pub use feature::{
    assemble, assemble_with, Feature, FeatureVector, FEATURE_COUNT, FEATURE_NAMES,
    FEATURE_SCHEMA_VERSION,
};
pub use mix::{FieldBounds, InputBounds, Material, MixDesign};
