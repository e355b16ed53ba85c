use std::io::IsTerminal;
use tracing::Subscriber;
use tracing_subscriber::{
    fmt::MakeWriter, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Format of log lines written to stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fix_lf=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fix_lf=info"))
    }
}

fn fmt_layer<S, W>(writer: W, ansi: bool, format: LogFormat) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match format {
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

// Logs go to stderr; stdout is reserved for the per-file notices.
pub fn init_cli_logger(verbose: bool, format: LogFormat) {
    let ansi = std::io::stderr().is_terminal();

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(fmt_layer(std::io::stderr, ansi, format))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture(ansi: bool, format: LogFormat) -> String {
        let buf = SharedBuf::default();
        let writer = {
            let buf = buf.clone();
            move || buf.clone()
        };

        let subscriber = tracing_subscriber::registry().with(fmt_layer(writer, ansi, format));
        tracing::subscriber::with_default(subscriber, || {
            tracing::error!("Could not access contracts/usdcx.clar");
        });

        let bytes = buf.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_plain_output_without_terminal() {
        let out = capture(false, LogFormat::Compact);
        assert!(out.contains("ERROR"));
        assert!(out.contains("contracts/usdcx.clar"));
        assert!(!out.contains('\x1b'), "escape codes in {:?}", out);
    }

    #[test]
    fn test_colored_output_on_terminal() {
        let out = capture(true, LogFormat::Compact);
        assert!(out.contains('\x1b'));
    }

    #[test]
    fn test_json_output() {
        let out = capture(false, LogFormat::Json);
        assert!(out.contains("\"level\":\"ERROR\""));
        assert!(!out.contains('\x1b'));
    }
}
