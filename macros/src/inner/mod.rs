// Internal macros used only by inplace-optional itself
//
// - std_types: Destruct answers for primitive/core/alloc/std types

pub mod std_types;
