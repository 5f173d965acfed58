//! Shared test utilities used across randgraph crates.

pub mod tracing {
    //! Recording layer for asserting spans and events emitted during tests.
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::Context;
    use tracing_subscriber::registry::LookupSpan;

    /// Layer that keeps every closed span and emitted event so tests can
    /// assert generator instrumentation deterministically.
    ///
    /// # Examples
    /// ```
    /// use randgraph_test_support::tracing::RecordingLayer;
    /// use tracing_subscriber::layer::SubscriberExt;
    ///
    /// let layer = RecordingLayer::default();
    /// let subscriber = tracing_subscriber::registry().with(layer.clone());
    /// tracing::subscriber::with_default(subscriber, || {
    ///     tracing::info!(edges = 3, "generated graph");
    /// });
    /// let events = layer.events_with_message("generated graph");
    /// assert_eq!(events.len(), 1);
    /// assert_eq!(events[0].field("edges"), Some("3"));
    /// ```
    #[derive(Clone, Default)]
    pub struct RecordingLayer {
        spans: Arc<Mutex<Vec<SpanRecord>>>,
        events: Arc<Mutex<Vec<EventRecord>>>,
    }

    impl RecordingLayer {
        /// Snapshot of the closed spans, in completion order.
        #[must_use]
        pub fn spans(&self) -> Vec<SpanRecord> {
            lock(&self.spans).clone()
        }

        /// Snapshot of the emitted events, in emission order.
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            lock(&self.events).clone()
        }

        /// Returns the events whose `message` field equals `message`.
        #[must_use]
        pub fn events_with_message(&self, message: &str) -> Vec<EventRecord> {
            lock(&self.events)
                .iter()
                .filter(|event| event.message() == Some(message))
                .cloned()
                .collect()
        }

        /// Returns the closed spans named `name`.
        #[must_use]
        pub fn spans_named(&self, name: &str) -> Vec<SpanRecord> {
            lock(&self.spans)
                .iter()
                .filter(|span| span.name == name)
                .cloned()
                .collect()
        }
    }

    fn lock<T>(records: &Mutex<T>) -> MutexGuard<'_, T> {
        records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A closed span with the fields recorded against it.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SpanRecord {
        /// Span name from the tracing metadata.
        pub name: String,
        /// Fields recorded at creation or later via `Span::record`.
        pub fields: HashMap<String, String>,
    }

    impl SpanRecord {
        /// Returns the rendered value of `name`, if recorded.
        #[must_use]
        pub fn field(&self, name: &str) -> Option<&str> {
            self.fields.get(name).map(String::as_str)
        }
    }

    /// An emitted event with its level, target and fields.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct EventRecord {
        /// Event level.
        pub level: Level,
        /// Event target, usually the emitting module path.
        pub target: String,
        /// Structured fields, including `message`.
        pub fields: HashMap<String, String>,
    }

    impl EventRecord {
        /// Returns the rendered value of `name`, if recorded.
        #[must_use]
        pub fn field(&self, name: &str) -> Option<&str> {
            self.fields.get(name).map(String::as_str)
        }

        /// Returns the event message, if any.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.field("message")
        }
    }

    struct PendingSpan {
        name: String,
        fields: HashMap<String, String>,
    }

    impl<S> Layer<S> for RecordingLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut pending = PendingSpan {
                name: attrs.metadata().name().to_owned(),
                fields: HashMap::new(),
            };
            attrs.record(&mut FieldRecorder(&mut pending.fields));
            span.extensions_mut().insert(pending);
        }

        fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            if let Some(pending) = span.extensions_mut().get_mut::<PendingSpan>() {
                values.record(&mut FieldRecorder(&mut pending.fields));
            }
        }

        fn on_close(&self, id: Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            let Some(pending) = span.extensions_mut().remove::<PendingSpan>() else {
                return;
            };
            lock(&self.spans).push(SpanRecord {
                name: pending.name,
                fields: pending.fields,
            });
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            event.record(&mut FieldRecorder(&mut fields));
            lock(&self.events).push(EventRecord {
                level: *event.metadata().level(),
                target: event.metadata().target().to_owned(),
                fields,
            });
        }
    }

    struct FieldRecorder<'a>(&'a mut HashMap<String, String>);

    impl FieldRecorder<'_> {
        fn insert(&mut self, field: &Field, value: String) {
            self.0.insert(field.name().to_owned(), value);
        }
    }

    impl Visit for FieldRecorder<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.insert(field, format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.insert(field, value.to_owned());
        }

        fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
            self.insert(field, value.to_string());
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            self.insert(field, value.to_string());
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.insert(field, value.to_string());
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.insert(field, value.to_string());
        }
    }
}

pub mod property {
    //! Property-test sizing shared by the randgraph suites.
    //!
    //! Suites read their case count and the largest vertex collection they
    //! may generate from the environment, so CI can widen a run without code
    //! changes.

    use std::env;

    /// Environment variable overriding the number of cases per property.
    pub const CASES_ENV_KEY: &str = "RANDGRAPH_PBT_CASES";
    /// Environment variable overriding the largest generated vertex count.
    pub const MAX_VERTICES_ENV_KEY: &str = "RANDGRAPH_PBT_MAX_VERTICES";

    /// Smallest vertex collection a generator accepts; the upper bound is
    /// never allowed below it.
    const MIN_MAX_VERTICES: usize = 2;

    /// Sizing applied to property suites.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct PropertyProfile {
        cases: u32,
        max_vertices: usize,
    }

    impl PropertyProfile {
        /// Loads the profile from the environment, falling back to the
        /// supplied defaults when a variable is unset or malformed.
        ///
        /// # Examples
        /// ```
        /// use randgraph_test_support::property::PropertyProfile;
        ///
        /// let profile = PropertyProfile::load(32, 16);
        /// assert!(profile.cases() > 0);
        /// assert!(profile.max_vertices() >= 2);
        /// ```
        #[must_use]
        pub fn load(default_cases: u32, default_max_vertices: usize) -> Self {
            Self::load_with_lookup(default_cases, default_max_vertices, |key| {
                env::var(key).ok()
            })
        }

        fn load_with_lookup<F>(default_cases: u32, default_max_vertices: usize, lookup: F) -> Self
        where
            F: Fn(&'static str) -> Option<String>,
        {
            let cases = override_or(&lookup, CASES_ENV_KEY, default_cases, |value| {
                value > 0
            });
            let max_vertices = override_or(
                &lookup,
                MAX_VERTICES_ENV_KEY,
                default_max_vertices.max(MIN_MAX_VERTICES),
                |value| value >= MIN_MAX_VERTICES,
            );
            Self {
                cases,
                max_vertices,
            }
        }

        /// Number of cases to run per property.
        #[must_use]
        pub const fn cases(self) -> u32 {
            self.cases
        }

        /// Largest vertex collection a property may generate.
        #[must_use]
        pub const fn max_vertices(self) -> usize {
            self.max_vertices
        }
    }

    fn override_or<T, F, A>(lookup: &F, key: &'static str, default: T, accept: A) -> T
    where
        T: std::str::FromStr + Copy,
        F: Fn(&'static str) -> Option<String>,
        A: Fn(T) -> bool,
    {
        let Some(raw) = lookup(key) else {
            return default;
        };
        match raw.trim().parse::<T>() {
            Ok(value) if accept(value) => value,
            _ => {
                tracing::warn!(env = key, raw = %raw, "ignoring invalid property-test override");
                default
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use rstest::rstest;

        use super::*;

        fn lookup_from(
            pairs: &'static [(&'static str, &'static str)],
        ) -> impl Fn(&'static str) -> Option<String> {
            move |key| {
                pairs
                    .iter()
                    .find(|(name, _)| *name == key)
                    .map(|(_, value)| (*value).to_owned())
            }
        }

        #[test]
        fn defaults_apply_without_overrides() {
            let profile = PropertyProfile::load_with_lookup(64, 24, lookup_from(&[]));
            assert_eq!(profile.cases(), 64);
            assert_eq!(profile.max_vertices(), 24);
        }

        #[rstest]
        #[case::cases(&[(CASES_ENV_KEY, "250")], 250, 24)]
        #[case::padded(&[(CASES_ENV_KEY, " 8 ")], 8, 24)]
        #[case::vertices(&[(MAX_VERTICES_ENV_KEY, "100")], 64, 100)]
        #[case::zero_cases(&[(CASES_ENV_KEY, "0")], 64, 24)]
        #[case::garbage(&[(CASES_ENV_KEY, "many")], 64, 24)]
        #[case::too_few_vertices(&[(MAX_VERTICES_ENV_KEY, "1")], 64, 24)]
        fn overrides_are_validated(
            #[case] pairs: &'static [(&'static str, &'static str)],
            #[case] cases: u32,
            #[case] max_vertices: usize,
        ) {
            let profile = PropertyProfile::load_with_lookup(64, 24, lookup_from(pairs));
            assert_eq!(profile.cases(), cases);
            assert_eq!(profile.max_vertices(), max_vertices);
        }

        #[test]
        fn default_upper_bound_is_clamped() {
            let profile = PropertyProfile::load_with_lookup(1, 0, lookup_from(&[]));
            assert_eq!(profile.max_vertices(), 2);
        }
    }
}
