mod zone;
mod zone_registry;

pub use zone::Zone;
pub use zone_registry::ZoneRegistry;
