// Adapters layer: concrete implementations for external systems (http source, report output).

pub mod http;
pub mod stdout;
