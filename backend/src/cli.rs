//! Minimal CLI parsing for service and port overrides.

use std::env;

use crate::service_kind::ServiceKind;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub service_override: Option<ServiceKind>,
    pub port_override: Option<u16>,
}

impl CliOptions {
    pub fn from_args() -> Self {
        Self::parse(env::args().skip(1))
    }

    /// Parse arguments (without the program name). Unknown arguments are ignored;
    /// an unparsable value keeps whatever override came before it.
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = CliOptions::default();
        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--events" => options.service_override = Some(ServiceKind::Events),
                "--crud" => options.service_override = Some(ServiceKind::Crud),
                "--users" => options.service_override = Some(ServiceKind::Users),
                "--service" => match args.next() {
                    Some(value) => options.set_service(&value),
                    None => tracing::warn!("--service expects a value"),
                },
                "--port" => match args.next() {
                    Some(value) => options.set_port(&value),
                    None => tracing::warn!("--port expects a value"),
                },
                _ => {
                    if let Some(value) = arg.strip_prefix("--service=") {
                        options.set_service(value);
                    } else if let Some(value) = arg.strip_prefix("--port=") {
                        options.set_port(value);
                    }
                }
            }
        }
        options
    }

    fn set_service(&mut self, value: &str) {
        match ServiceKind::from_arg(value) {
            Some(service) => self.service_override = Some(service),
            None => tracing::warn!(value, "Ignoring unknown --service value"),
        }
    }

    fn set_port(&mut self, value: &str) {
        match value.parse() {
            Ok(port) => self.port_override = Some(port),
            Err(e) => tracing::warn!(value, error = %e, "Ignoring invalid --port value"),
        }
    }
}
