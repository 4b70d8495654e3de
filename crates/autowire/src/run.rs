//! Demo runner
//!
//! Shared by the `autowire` binary and the end-to-end tests. Output goes to
//! the supplied writer; diagnostics go through `tracing`.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use autowire_application::{
    ImplementationRegistry, Injector, ObserverChain, RecordingObserver, TracingObserver,
    list_linked_implementations,
};
use autowire_domain::{Mapping, Result};
use autowire_infrastructure::ErrorContext;
use autowire_infrastructure::bootstrap::{ensure_mapping_file, render_mapping};
use autowire_infrastructure::config::{AppConfig, ConfigLoader};
use tracing::{debug, warn};

use crate::demo::{DEFAULT_MAPPING, SomeBean};

/// Load configuration, applying the command-line mapping override
pub fn load_config(config_path: Option<&Path>, mapping_path: Option<&Path>) -> Result<AppConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }

    let mut config = loader.load()?;
    if let Some(path) = mapping_path {
        config.mapping.path = path.to_path_buf();
    }
    Ok(config)
}

/// Run the demo against the configured mapping file
///
/// Returns the output of `SomeBean::foo` after injection.
pub fn run_demo(
    config: &AppConfig,
    registry: Arc<ImplementationRegistry>,
    json: bool,
    out: &mut dyn Write,
) -> Result<String> {
    let mapping_path = config.mapping.path.as_path();

    if config.mapping.create_default {
        ensure_mapping_file(mapping_path, &render_mapping(&DEFAULT_MAPPING))?;
    }

    writeln!(out, "1. Calling foo() before injection")
        .io_context("Failed to write demo output")?;
    match SomeBean::default().foo() {
        Ok(output) => warn!(%output, "Uninjected bean produced output"),
        Err(e) => writeln!(out, "   failed as expected: {e}")
            .io_context("Failed to write demo output")?,
    }

    let mapping = Mapping::load(mapping_path)?;
    writeln!(out, "2. Active mappings from {}", mapping_path.display())
        .io_context("Failed to write demo output")?;
    for (abstraction, implementation) in mapping.entries() {
        writeln!(out, "   {abstraction} = {implementation}")
            .io_context("Failed to write demo output")?;
    }

    let recorder = Arc::new(RecordingObserver::new());
    let observer = ObserverChain::new()
        .with(Arc::new(TracingObserver))
        .with(recorder.clone());
    let injector = Injector::new(mapping, registry).with_observer(Arc::new(observer));
    debug!(?injector, "Injector ready");

    let mut bean = SomeBean::default();
    injector.inject(&mut bean)?;

    writeln!(out, "3. Injected fields").io_context("Failed to write demo output")?;
    for record in recorder.take() {
        if json {
            let line = serde_json::to_string(&record)
                .io_context("Failed to serialize injection record")?;
            writeln!(out, "{line}").io_context("Failed to write demo output")?;
        } else {
            writeln!(
                out,
                "   {}.{}: {} <- {} ({})",
                record.target,
                record.field,
                record.abstraction,
                record.implementation,
                record.concrete_type
            )
            .io_context("Failed to write demo output")?;
        }
    }

    let output = bean.foo()?;
    writeln!(out, "4. foo() = {output}").io_context("Failed to write demo output")?;
    Ok(output)
}

/// Print every implementation linked into the binary
pub fn list_implementations(out: &mut dyn Write) -> Result<()> {
    for (name, description) in list_linked_implementations() {
        writeln!(out, "{name:<12} {description}").io_context("Failed to write listing")?;
    }
    Ok(())
}
