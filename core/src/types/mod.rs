//! Core type definitions for DICOM device identification
//!
//! This module provides the fundamental types used throughout the devident
//! library:
//! - [`Tag`]: a DICOM attribute tag, the (group, element) pair
//! - [`Vr`] / [`LengthForm`]: explicit value representation codes and how
//!   each encodes its value length
//! - [`TagValue`] / [`TagMap`]: tag-keyed datasets used for de-identification

mod dataset;
mod tag;
mod vr;

pub use dataset::{TagMap, TagValue};
pub use tag::Tag;
pub use vr::{LengthForm, Vr};
