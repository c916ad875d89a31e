//! End-to-end export discovery over package trees on disk
//!
//! Uses the built-in file system, resolver and scanner. The runtime loader
//! is replaced by an in-memory one so no Node.js installation is needed.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::tempdir;
use cjs_exports::{
    error::Result,
    models::{config::Settings, scan::RuntimeValue},
    EvaluationMode, ExportResolver, ExportsError, FallbackPolicy, ModuleLoader, ResolutionRequest,
};

/// Loader returning a fixed value and recording what it was asked to load
#[derive(Clone)]
struct RecordingLoader {
    value: Option<RuntimeValue>,
    calls: Arc<Mutex<Vec<(PathBuf, EvaluationMode)>>>,
}

impl RecordingLoader {
    fn returning(value: RuntimeValue) -> Self {
        Self {
            value: Some(value),
            calls: Arc::default(),
        }
    }

    fn failing() -> Self {
        Self {
            value: None,
            calls: Arc::default(),
        }
    }

    fn calls(&self) -> Vec<(PathBuf, EvaluationMode)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ModuleLoader for RecordingLoader {
    fn load(&self, path: &Path, mode: EvaluationMode) -> Result<RuntimeValue> {
        self.calls.lock().unwrap().push((path.to_path_buf(), mode));
        self.value
            .clone()
            .ok_or_else(|| ExportsError::runtime_load(path, "Error: cannot load in test"))
    }
}

fn write(base: &Path, relative: &str, content: &str) -> Result<()> {
    let path = base.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

fn resolver_with(loader: RecordingLoader) -> ExportResolver {
    ExportResolver::new(&Settings::default()).with_loader(loader)
}

fn resolve(build_dir: &Path, specifier: &str) -> Result<Vec<String>> {
    let resolver = resolver_with(RecordingLoader::failing());
    let result = resolver.resolve_exports(&ResolutionRequest::new(build_dir, specifier))?;
    Ok(result.sorted())
}

#[test]
fn test_json_entry() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "data.json", r#"{"x":1,"y":2}"#)?;

    assert_eq!(resolve(dir.path(), "./data.json")?, vec!["x", "y"]);
    Ok(())
}

#[test]
fn test_direct_member_exports() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "index.js", "module.exports.foo = 1; module.exports.bar = 2;")?;

    assert_eq!(resolve(dir.path(), "./index.js")?, vec!["bar", "foo"]);
    Ok(())
}

#[test]
fn test_reexport_resolves_from_entry_directory() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "lib/index.js", "module.exports = require('./other')")?;
    write(dir.path(), "lib/other.js", "exports.a = 1; exports.b = 2;")?;
    // Decoy next to the build directory root
    write(dir.path(), "other.js", "exports.wrong = 1;")?;

    assert_eq!(resolve(dir.path(), "./lib/index.js")?, vec!["a", "b"]);
    Ok(())
}

#[test]
fn test_fallback_for_allow_listed_package() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "node_modules/he/package.json", r#"{"name":"he","main":"he.js"}"#)?;
    write(
        dir.path(),
        "node_modules/he/he.js",
        r#";(function(root) {
            var freeExports = typeof exports == 'object' && exports;
            var freeModule = typeof module == 'object' && module && module.exports == freeExports && module;
            var he = { 'version': '1.2.0' };
            freeModule.exports = he;
        }(this));"#,
    )?;

    let loader = RecordingLoader::returning(RuntimeValue::object(["encode", "decode", ""]));
    let resolver = resolver_with(loader.clone());
    let request = ResolutionRequest::new(dir.path(), "he").with_mode(EvaluationMode::Development);
    let result = resolver.resolve_exports(&request)?;

    assert_eq!(result.sorted(), vec!["decode", "encode"]);

    let calls = loader.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].0.ends_with("node_modules/he/he.js"));
    assert_eq!(calls[0].1, EvaluationMode::Development);
    Ok(())
}

#[test]
fn test_fallback_skipped_for_other_packages_and_when_disabled() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "node_modules/opaque/index.js", "(function(){ this.x = 1; })();")?;
    write(dir.path(), "node_modules/he/index.js", "")?;

    let loader = RecordingLoader::returning(RuntimeValue::object(["x"]));

    let resolver = resolver_with(loader.clone());
    let result = resolver.resolve_exports(&ResolutionRequest::new(dir.path(), "opaque"))?;
    assert!(result.is_empty());

    let resolver = resolver_with(loader.clone()).with_fallback_policy(FallbackPolicy::disabled());
    let result = resolver.resolve_exports(&ResolutionRequest::new(dir.path(), "he"))?;
    assert!(result.is_empty());

    assert!(loader.calls().is_empty());
    Ok(())
}

#[test]
fn test_fallback_not_used_when_scan_finds_exports() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "node_modules/typescript/package.json", r#"{"main":"lib/typescript.js"}"#)?;
    write(dir.path(), "node_modules/typescript/lib/typescript.js", "exports.createProgram = 1;")?;

    let loader = RecordingLoader::returning(RuntimeValue::object(["other"]));
    let resolver = resolver_with(loader.clone());
    let result = resolver.resolve_exports(&ResolutionRequest::new(dir.path(), "typescript"))?;

    assert_eq!(result.exports, vec!["createProgram"]);
    assert!(loader.calls().is_empty());
    Ok(())
}

#[test]
fn test_fallback_load_failure_is_fatal() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "node_modules/he/index.js", "")?;

    let err = resolver_with(RecordingLoader::failing())
        .resolve_exports(&ResolutionRequest::new(dir.path(), "he/index.js"))
        .unwrap_err();
    assert!(matches!(err, ExportsError::RuntimeLoad { .. }));
    Ok(())
}

#[test]
fn test_json_reexport_is_merged() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "index.js", "exports.a = 1; Object.assign(exports, require('./data.json'));")?;
    write(dir.path(), "data.json", r#"{"c":1}"#)?;

    assert_eq!(resolve(dir.path(), "./index.js")?, vec!["a", "c"]);
    Ok(())
}

#[test]
fn test_es_module_marker_never_surfaces() -> Result<()> {
    let dir = tempdir()?;
    write(
        dir.path(),
        "index.js",
        r#""use strict";
        Object.defineProperty(exports, "__esModule", { value: true });
        exports.__esModule = true;
        exports.default = void 0;
        exports.named = 1;"#,
    )?;

    let exports = resolve(dir.path(), "./index.js")?;
    assert_eq!(exports, vec!["named"]);
    Ok(())
}

#[test]
fn test_node_env_selects_build() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "node_modules/react/package.json", r#"{"name":"react","main":"index.js"}"#)?;
    write(
        dir.path(),
        "node_modules/react/index.js",
        r#"'use strict';
        if (process.env.NODE_ENV === 'production') {
          module.exports = require('./cjs/react.production.min.js');
        } else {
          module.exports = require('./cjs/react.development.js');
        }"#,
    )?;
    write(
        dir.path(),
        "node_modules/react/cjs/react.production.min.js",
        "exports.Children = c; exports.useState = u;",
    )?;
    write(
        dir.path(),
        "node_modules/react/cjs/react.development.js",
        r#"'use strict';
        if (process.env.NODE_ENV !== "production") {
          (function() {
            exports.Children = c;
            exports.useState = u;
            exports.unstable_debug = d;
          })();
        }"#,
    )?;

    let resolver = resolver_with(RecordingLoader::failing());

    let prod = resolver.resolve_exports(&ResolutionRequest::new(dir.path(), "react"))?;
    assert_eq!(prod.sorted(), vec!["Children", "useState"]);

    let dev = resolver.resolve_exports(
        &ResolutionRequest::new(dir.path(), "react").with_mode(EvaluationMode::Development),
    )?;
    assert_eq!(dev.sorted(), vec!["Children", "unstable_debug", "useState"]);
    Ok(())
}

#[test]
fn test_typescript_compiled_barrel() -> Result<()> {
    let dir = tempdir()?;
    write(
        dir.path(),
        "node_modules/barrel/package.json",
        r#"{"name":"barrel","exports":{".":{"import":"./esm/index.mjs","require":"./cjs/index.js"}}}"#,
    )?;
    write(
        dir.path(),
        "node_modules/barrel/cjs/index.js",
        r#""use strict";
        var __exportStar = (this && this.__exportStar) || function(m, exports) {
            for (var p in m) if (p !== "default" && !Object.prototype.hasOwnProperty.call(exports, p)) exports[p] = m[p];
        };
        Object.defineProperty(exports, "__esModule", { value: true });
        exports.helper = exports.VERSION = void 0;
        __exportStar(require("./types"), exports);
        exports.VERSION = "1.0.0";
        function helper() {}
        exports.helper = helper;"#,
    )?;
    write(
        dir.path(),
        "node_modules/barrel/cjs/types.js",
        r#""use strict";
        Object.defineProperty(exports, "__esModule", { value: true });
        exports.Kind = void 0;
        var Kind;
        (function (Kind) { Kind[Kind["A"] = 0] = "A"; })(Kind || (exports.Kind = Kind = {}));"#,
    )?;

    assert_eq!(resolve(dir.path(), "barrel")?, vec!["Kind", "VERSION", "helper"]);
    Ok(())
}

#[test]
fn test_call_mode_reexport() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "index.js", "module.exports = require('./factory')();")?;
    write(
        dir.path(),
        "factory.js",
        r#"module.exports = function create() {
            return { start: start, stop: stop };
        };
        module.exports.internal = true;"#,
    )?;

    assert_eq!(resolve(dir.path(), "./index.js")?, vec!["start", "stop"]);
    Ok(())
}

#[test]
fn test_non_commonjs_entry_is_empty() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "mod.mjs", "export const a = 1;")?;

    assert!(resolve(dir.path(), "./mod.mjs")?.is_empty());
    Ok(())
}

#[test]
fn test_non_commonjs_entry_of_allow_listed_package_is_not_loaded() -> Result<()> {
    let dir = tempdir()?;
    write(
        dir.path(),
        "node_modules/he/package.json",
        r#"{"name":"he","module":"he.mjs","main":"he.js"}"#,
    )?;
    write(dir.path(), "node_modules/he/he.mjs", "export function encode() {}")?;
    write(dir.path(), "node_modules/he/he.js", "exports.encode = 1;")?;
    write(dir.path(), "node_modules/typescript/lib/typescript.d.ts", "export declare const x: number;")?;

    let loader = RecordingLoader::returning(RuntimeValue::object(["encode"]));
    let resolver = resolver_with(loader.clone());

    let result = resolver.resolve_exports(&ResolutionRequest::new(dir.path(), "he"))?;
    assert!(result.is_empty());

    let result = resolver.resolve_exports(&ResolutionRequest::new(
        dir.path(),
        "typescript/lib/typescript.d.ts",
    ))?;
    assert!(result.is_empty());

    assert!(loader.calls().is_empty());
    Ok(())
}

#[test]
fn test_non_utf8_source_is_scanned() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("index.js"), b"// caf\xe9\nexports.a = 1;")?;

    assert_eq!(resolve(dir.path(), "./index.js")?, vec!["a"]);
    Ok(())
}

#[test]
fn test_invalid_names_are_dropped() -> Result<()> {
    let dir = tempdir()?;
    write(
        dir.path(),
        "index.js",
        "exports['kebab-case'] = 1; exports['class'] = 2; exports.ok = 3; exports.ok = 4;",
    )?;

    assert_eq!(resolve(dir.path(), "./index.js")?, vec!["ok"]);
    Ok(())
}

#[test]
fn test_failures_abort_the_run() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "missing.js", "module.exports = require('./nowhere');")?;
    write(dir.path(), "bad.json", "{ nope")?;
    write(dir.path(), "broken.js", "exports.a = 1; module.exports = {")?;
    write(dir.path(), "via-bad.js", "exports.a = 1; module.exports = require('./bad.json');")?;

    let err = resolve(dir.path(), "./missing.js").unwrap_err();
    assert!(matches!(err, ExportsError::ModuleNotFound { .. }));

    let err = resolve(dir.path(), "./bad.json").unwrap_err();
    assert!(matches!(err, ExportsError::MalformedJson { .. }));

    let err = resolve(dir.path(), "./broken.js").unwrap_err();
    assert!(matches!(err, ExportsError::Scan { .. }));

    let err = resolve(dir.path(), "./via-bad.js").unwrap_err();
    assert!(matches!(err, ExportsError::MalformedJson { .. }));

    let err = resolve(dir.path(), "left-pad").unwrap_err();
    assert!(matches!(err, ExportsError::ModuleNotFound { .. }));
    Ok(())
}

#[test]
fn test_cyclic_reexports_hit_the_hop_limit() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "a.js", "exports.a = 1; __exportStar(require('./b'), exports);")?;
    write(dir.path(), "b.js", "exports.b = 1; __exportStar(require('./a'), exports);")?;

    let resolver = resolver_with(RecordingLoader::failing()).with_max_hops(20);
    let err = resolver
        .resolve_exports(&ResolutionRequest::new(dir.path(), "./a.js"))
        .unwrap_err();

    match err {
        ExportsError::CycleLimitExceeded { limit, .. } => assert_eq!(limit, 20),
        other => panic!("Expected CycleLimitExceeded, got {:?}", other),
    }
    Ok(())
}
