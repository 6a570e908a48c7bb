//! Observability sink for domain events.
//!
//! Services receive a sink at construction instead of reaching for global
//! logger state. The production sink forwards to `tracing`.

use tracing::{error, info};

/// Receives named events with key/value fields.
pub trait EventSink: Send + Sync {
    /// Records a single event.
    fn record(&self, event: &str, fields: &[(&str, &str)]);
}

/// Sink that emits every event through `tracing`.
///
/// Events ending in `backend_failure` are logged at `ERROR`, everything else at
/// `INFO`. The keys the service uses (`alias`, `target`, `op`, `field`,
/// `error`) become structured fields; any other pair lands in `extra`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl TracingEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for TracingEventSink {
    fn record(&self, event: &str, fields: &[(&str, &str)]) {
        let f = EventFields::from_pairs(fields);
        let extra = (!f.extra.is_empty()).then(|| f.extra.join(" "));

        if event.ends_with("backend_failure") {
            error!(
                event,
                alias = f.alias,
                target = f.target,
                op = f.op,
                field = f.field,
                error = f.error,
                extra = extra.as_deref(),
                "domain event"
            );
        } else {
            info!(
                event,
                alias = f.alias,
                target = f.target,
                op = f.op,
                field = f.field,
                error = f.error,
                extra = extra.as_deref(),
                "domain event"
            );
        }
    }
}

/// Event pairs sorted into fixed `tracing` field slots.
#[derive(Debug, Default, PartialEq, Eq)]
struct EventFields<'a> {
    alias: Option<&'a str>,
    target: Option<&'a str>,
    op: Option<&'a str>,
    field: Option<&'a str>,
    error: Option<&'a str>,
    extra: Vec<String>,
}

impl<'a> EventFields<'a> {
    fn from_pairs(pairs: &[(&str, &'a str)]) -> Self {
        let mut fields = Self::default();
        for &(key, value) in pairs {
            let slot = match key {
                "alias" => &mut fields.alias,
                "target" => &mut fields.target,
                "op" => &mut fields.op,
                "field" => &mut fields.field,
                "error" => &mut fields.error,
                _ => {
                    fields.extra.push(format!("{key}={value}"));
                    continue;
                }
            };
            *slot = Some(value);
        }
        fields
    }
}
