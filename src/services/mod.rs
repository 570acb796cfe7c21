// linksnip services
// Services provide stateless functionality: serialization and preview projection.

pub mod preview;
pub mod serializer;
