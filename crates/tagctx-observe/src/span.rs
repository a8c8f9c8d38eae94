use tagctx_model::TagMap;
use tracing::{Span, info_span};

/// Open a span whose `tags` field renders `map`.
///
/// Events recorded while the span is entered are annotated with the map by any
/// subscriber that prints span fields.
pub fn tag_span(map: &TagMap) -> Span {
    info_span!("tags", tags = %map)
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use tagctx_model::{Key, Mutator, TagMap};

    use super::tag_span;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn events_inside_span_carry_rendered_map() {
        let map = TagMap::derive(
            None,
            [
                Mutator::upsert(Key::new("zone").unwrap(), "a"),
                Mutator::upsert(Key::new("region").unwrap(), "us"),
            ],
        )
        .unwrap();

        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let span = tag_span(&map);
            let _guard = span.enter();
            tracing::info!("request handled");
        });

        let out = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert!(out.contains("tags={ {region us}{zone a} }"), "got: {out}");
        assert!(out.contains("request handled"));
    }
}
