use log::{
    Record,
    kv::{Error, Key, Value, VisitSource},
};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::encode::{Color, Encode, Style, Write};
use serde::Deserialize;
use std::io;

const DEFAULT_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {h({l}):5} {t} - {m}";

#[derive(Debug, Deserialize)]
pub struct StructuredConsoleEncoderConfig {
    pub pattern: Option<String>,
}

/// Pattern encoder that appends the record's key-values as ` key=value` pairs.
///
/// Values containing whitespace or quotes are written as quoted strings so that
/// upstream error bodies stay on one readable field.
#[derive(Debug)]
pub struct StructuredConsoleEncoder {
    delegate: PatternEncoder,
}

impl StructuredConsoleEncoder {
    pub fn new(pattern: &str) -> Self {
        Self {
            delegate: PatternEncoder::new(pattern),
        }
    }
}

impl Encode for StructuredConsoleEncoder {
    fn encode(&self, w: &mut dyn Write, record: &Record) -> anyhow::Result<()> {
        self.delegate.encode(w, record)?;

        let mut visitor = KeyValueVisitor {
            writer: w,
            io_err: None,
        };

        if let Err(kv_err) = record.key_values().visit(&mut visitor) {
            if let Some(io_err) = visitor.io_err {
                return Err(io_err.into());
            }
            write!(w, " [KV Error: {}]", kv_err)?;
        }

        w.write_all(b"\n")?;
        Ok(())
    }
}

fn format_value(value: &Value<'_>) -> String {
    let rendered = value.to_string();
    if rendered.is_empty() || rendered.contains(char::is_whitespace) || rendered.contains('"') {
        format!("{:?}", rendered)
    } else {
        rendered
    }
}

struct KeyValueVisitor<'a> {
    writer: &'a mut dyn Write,
    io_err: Option<io::Error>,
}

impl<'kvs> VisitSource<'kvs> for KeyValueVisitor<'_> {
    fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> Result<(), Error> {
        let result = (|| {
            self.writer.set_style(Style::new().text(Color::Cyan))?;
            write!(self.writer, " {}=", key)?;

            self.writer.set_style(&Style::default())?;
            write!(self.writer, "{}", format_value(&value))?;
            Ok::<(), io::Error>(())
        })();

        if let Err(e) = result {
            self.io_err = Some(e);
            return Err(Error::msg("io error during visit"));
        }

        Ok(())
    }
}

pub struct StructuredConsoleEncoderDeserializer;

impl log4rs::config::Deserialize for StructuredConsoleEncoderDeserializer {
    type Trait = dyn Encode;
    type Config = StructuredConsoleEncoderConfig;

    fn deserialize(
        &self,
        config: StructuredConsoleEncoderConfig,
        _: &log4rs::config::Deserializers,
    ) -> anyhow::Result<Box<dyn Encode>> {
        let pattern = config.pattern.as_deref().unwrap_or(DEFAULT_PATTERN);
        Ok(Box::new(StructuredConsoleEncoder::new(pattern)))
    }
}
