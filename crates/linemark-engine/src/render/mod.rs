//! Reference serializers for converted output.

pub mod html;

pub use html::HtmlSerializer;
