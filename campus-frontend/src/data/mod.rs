//! Data-access entry points used by handlers, kept apart from the concrete
//! service clients so those can move without touching call sites.
pub mod notices;
