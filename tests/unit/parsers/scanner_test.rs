use std::path::Path;
use cjs_exports::{
    error::Result,
    parsers::{ExportScanner, OxcScanner},
    EvaluationMode, ScanResult,
};

fn scan(source: &str) -> Result<ScanResult> {
    OxcScanner::new().scan(Path::new("/pkg/index.js"), source, EvaluationMode::Production, false)
}

#[test]
fn test_babel_interop_output() -> Result<()> {
    let result = scan(
        r#"
        "use strict";
        Object.defineProperty(exports, "__esModule", { value: true });
        var _exportNames = { util: true };
        exports.util = void 0;
        var _core = _interopRequireWildcard(require("./core"));
        Object.keys(_core).forEach(function (key) {
          if (key === "default" || key === "__esModule") return;
          if (Object.prototype.hasOwnProperty.call(_exportNames, key)) return;
          exports[key] = _core[key];
        });
        var util = exports.util = function util() {};
        "#,
    )?;

    assert_eq!(result.exports, vec!["__esModule", "util", "util"]);
    assert_eq!(result.reexports, vec!["./core"]);
    Ok(())
}

#[test]
fn test_tslib_indirect_call() -> Result<()> {
    let result = scan(
        r#"
        "use strict";
        Object.defineProperty(exports, "__esModule", { value: true });
        var tslib_1 = require("tslib");
        (0, tslib_1.__exportStar)(require("./client"), exports);
        (0, tslib_1.__exportStar)(require("./errors"), exports);
        "#,
    )?;

    assert_eq!(result.reexports, vec!["./client", "./errors"]);
    Ok(())
}

#[test]
fn test_esbuild_reexport_helper() -> Result<()> {
    let result = scan(
        r#"
        var src_exports = {};
        __export(src_exports, { run: () => run });
        module.exports = __toCommonJS(src_exports);
        __reExport(src_exports, require("./dep"), module.exports);
        "#,
    )?;

    assert_eq!(result.exports, vec!["run"]);
    assert_eq!(result.reexports, vec!["./dep"]);
    Ok(())
}

#[test]
fn test_evaluation_mode_picks_ternary_branch() -> Result<()> {
    let source = "module.exports = process.env.NODE_ENV === 'production' ? { prod: 1 } : { dev: 1, debug: 1 };";
    let scanner = OxcScanner::new();

    let prod = scanner.scan(Path::new("/pkg/index.js"), source, EvaluationMode::Production, false)?;
    assert_eq!(prod.exports, vec!["prod"]);

    let dev = scanner.scan(Path::new("/pkg/index.js"), source, EvaluationMode::Development, false)?;
    assert_eq!(dev.exports, vec!["dev", "debug"]);
    Ok(())
}

#[test]
fn test_call_mode_marks_nested_reexports() -> Result<()> {
    let scanner = OxcScanner::new();
    let source = "var impl = require('./impl');\nmodule.exports = impl;\nexports.ignored = 1;";

    let called = scanner.scan(Path::new("/pkg/index.js"), source, EvaluationMode::Production, true)?;
    assert!(called.exports.is_empty());
    assert_eq!(called.reexports, vec!["./impl()"]);
    Ok(())
}

#[test]
fn test_strict_mode_violations_still_scan() -> Result<()> {
    // Sloppy-mode scripts are common in published packages
    let result = scan("with (obj) { x = 1; }\nexports.ok = 1;")?;
    assert_eq!(result.exports, vec!["ok"]);
    Ok(())
}
