use prometheus::{register_int_counter_with_registry, IntCounter, Registry};

#[derive(Clone)]
pub struct ServerMetrics {
    pub commands_performed: IntCounter,
    pub commands_ignored: IntCounter,
    pub flushes: IntCounter,
    pub flush_failures: IntCounter,
}

impl ServerMetrics {
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let commands_performed = register_int_counter_with_registry!(
            "server_commands_performed",
            "server_commands_performed",
            registry
        )?;

        let commands_ignored = register_int_counter_with_registry!(
            "server_commands_ignored",
            "server_commands_ignored",
            registry
        )?;

        let flushes = register_int_counter_with_registry!(
            "server_flushes",
            "server_flushes",
            registry
        )?;

        let flush_failures = register_int_counter_with_registry!(
            "server_flush_failures",
            "server_flush_failures",
            registry
        )?;

        Ok(Self {
            commands_performed,
            commands_ignored,
            flushes,
            flush_failures,
        })
    }
}
