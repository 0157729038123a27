pub mod has_slug;
pub mod transliteration;
pub mod value_objects;

pub use has_slug::HasSlug;
pub use transliteration::{LocaleTables, TransliterationTable};
pub use value_objects::{Locale, Separator, Slug};
