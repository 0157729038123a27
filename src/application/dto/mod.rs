mod tags;

pub use tags::TagDto;
