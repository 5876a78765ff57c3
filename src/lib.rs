use swc_core::{
    ecma::{
        ast::{Pass, Program},
        visit::{visit_mut_pass, VisitMutWith},
    },
    plugin::{
        metadata::TransformPluginMetadataContextKind, plugin_transform,
        proxies::TransformPluginProgramMetadata,
    },
};

pub mod config;
pub mod diagnostics;
pub mod imports;
pub mod matchers;
pub mod transform;
pub mod witness;

pub use config::{Config, ConfigError};
pub use diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticSink, HandlerSink};
pub use transform::TypedPathsTransform;

// -----------------------------------------------------------------------------
// Globals
// -----------------------------------------------------------------------------

/// Name and version the host uses to key its transform cache.
pub const PLUGIN_NAME: &str = "jest-typed-paths";
pub const PLUGIN_VERSION: u32 = 1;

/// Package exporting the compile-time-only `transformToModuleName<T>()` helper.
pub const HELPER_MODULE: &str = "ts-jest-typed-paths";
pub const HELPER_NAME: &str = "transformToModuleName";

pub const MOCK_NAMESPACE: &str = "jest";
pub static MOCK_METHODS: &[&str] = &[
    "mock",
    "doMock",
    "unstable_mockModule",
    "setMock",
    "createMockFromModule",
    "requireActual",
    "requireMock",
    "genMockFromModule",
];

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

/// In-process pass for hosts that compose SWC passes themselves.
pub fn typed_paths<S: DiagnosticSink>(file: impl Into<String>, config: &Config, sink: S) -> impl Pass {
    visit_mut_pass(TypedPathsTransform::new(file, config, sink))
}

#[plugin_transform]
pub fn process_transform(mut program: Program, metadata: TransformPluginProgramMetadata) -> Program {
    let config = metadata
        .get_transform_plugin_config()
        .map(|raw| {
            Config::from_json(&raw).unwrap_or_else(|err| {
                tracing::warn!("{err}; falling back to defaults");
                Config::default()
            })
        })
        .unwrap_or_default();
    let file = metadata
        .get_context(&TransformPluginMetadataContextKind::Filename)
        .unwrap_or_else(|| "unknown".to_string());

    let mut transform = TypedPathsTransform::new(file, &config, HandlerSink);
    program.visit_mut_with(&mut transform);
    program
}
