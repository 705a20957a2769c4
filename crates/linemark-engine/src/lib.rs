pub mod convert;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use convert::{
    ConvertError, ConvertOptions, Converter, ElementSerializer, source::Source,
};
pub use parsing::{
    classify::{Classification, LineBreakPolicy, LineClassifier},
    element::Element,
};
pub use render::html::HtmlSerializer;
