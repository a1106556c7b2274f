use std::fmt::{self, Write};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{layer::Context, EnvFilter, Layer, Registry};

const DEFAULT_FILTER: &str = "warn,portfolio_backend=info";

/// Message plus the event's structured fields, in recording order.
#[derive(Debug, Default, PartialEq)]
struct EventLine {
    message: String,
    fields: Vec<(&'static str, String)>,
}

impl EventLine {
    fn push(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = value;
        } else {
            self.fields.push((field.name(), value));
        }
    }

    fn is_empty(&self) -> bool {
        self.message.is_empty() && self.fields.is_empty()
    }

    /// `message key=value key=value`
    fn body(&self) -> String {
        let mut body = self.message.clone();
        for (name, value) in &self.fields {
            if !body.is_empty() {
                body.push(' ');
            }
            let _ = write!(body, "{}={}", name, value);
        }
        body
    }

    fn render(&self, timestamp: &str, level: Level, target: &str) -> String {
        let marker = match level {
            Level::ERROR => "❌ Error: ",
            Level::WARN => "⚠️ Warning: ",
            Level::INFO => "ℹ️ ",
            _ => "🔄 ",
        };
        format!("[{}] {}{} - {}", timestamp, marker, target, self.body())
    }
}

impl Visit for EventLine {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.push(field, format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, value.to_string());
    }
}

/// One line per event: timestamp, level marker, target, message and fields.
struct CustomLayer;

impl<S: Subscriber> Layer<S> for CustomLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut line = EventLine::default();
        event.record(&mut line);
        if line.is_empty() {
            return;
        }

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
        let rendered = line.render(&timestamp, *metadata.level(), metadata.target());
        if *metadata.level() <= Level::WARN {
            eprintln!("{}", rendered);
        } else {
            println!("{}", rendered);
        }
    }
}

pub fn setup() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = Registry::default().with(env_filter).with(CustomLayer);

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Logging already initialised: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(message: &str, fields: &[(&'static str, &str)]) -> EventLine {
        EventLine {
            message: message.to_string(),
            fields: fields.iter().map(|(k, v)| (*k, v.to_string())).collect(),
        }
    }

    #[test]
    fn test_fields_follow_message() {
        let visit = line("👋 Website visit", &[("ip", "203.0.113.7"), ("path", "/"), ("status", "200")]);
        assert_eq!(
            visit.render("2024-01-01 00:00:00.000", Level::INFO, "portfolio_backend::routes"),
            "[2024-01-01 00:00:00.000] ℹ️ portfolio_backend::routes - 👋 Website visit ip=203.0.113.7 path=/ status=200"
        );
    }

    #[test]
    fn test_level_markers() {
        let failure = line("Error reading index.html", &[]);
        assert!(failure.render("t", Level::ERROR, "app").starts_with("[t] ❌ Error: app - "));
        assert!(failure.render("t", Level::WARN, "app").contains("⚠️ Warning: "));
        assert!(failure.render("t", Level::DEBUG, "app").contains("🔄 app"));
    }

    #[test]
    fn test_fields_without_message() {
        let bare = line("", &[("skills", "12")]);
        assert!(!bare.is_empty());
        assert_eq!(bare.body(), "skills=12");
        assert!(EventLine::default().is_empty());
    }
}
