use std::fmt;

use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

/// RFC 3339 UTC timestamp formatter.
#[derive(Debug, Clone, Copy)]
pub struct LoggerRfc3339;

impl FormatTime for LoggerRfc3339 {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        match OffsetDateTime::now_utc().format(&Rfc3339) {
            Ok(ts) => write!(w, "{ts}"),
            Err(_) => w.write_str("<invalid-time>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_utc_timestamp() {
        let mut out = String::new();
        LoggerRfc3339.format_time(&mut Writer::new(&mut out)).unwrap();

        assert!(out.ends_with('Z'), "expected UTC suffix in {out:?}");
        assert!(OffsetDateTime::parse(&out, &Rfc3339).is_ok());
    }
}
