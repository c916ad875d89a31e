//! CommonJS export detection over the OXC AST
//!
//! Two passes over the program. The first records what top-level names are
//! bound to (object literals, `require` calls, factories and the properties
//! later assigned onto them). The second collects names assigned onto
//! `exports`/`module.exports` and the specifiers of modules re-exported
//! wholesale, using the bindings to see through `module.exports = api`.

use crate::models::request::EvaluationMode;
use crate::models::scan::{ScanResult, CALL_MODE_MARKER};
use oxc_ast::ast::*;
use oxc_syntax::operator::{BinaryOperator, LogicalOperator, UnaryOperator};
use std::collections::HashMap;

/// Helpers emitted by TypeScript, Babel and esbuild to re-export a required module
const REEXPORT_HELPERS: &[&str] = &["__exportStar", "__export", "__reExport"];

/// What a top-level name is known to hold
#[derive(Debug, Default, Clone)]
struct Binding {
    /// Own keys: object literal keys plus later `name.key = …` assignments
    keys: Vec<String>,
    /// Specifiers spread into the object literal
    reexports: Vec<String>,
    /// Set when the name holds `require(specifier)`
    require: Option<String>,
    /// Keys of the object literal a function binding returns
    returns: Vec<String>,
}

/// Extracts exported names and re-export targets from one CommonJS program
pub struct CjsLexer {
    mode: EvaluationMode,
    call_mode: bool,
    bindings: HashMap<String, Binding>,
    exports: Vec<String>,
    reexports: Vec<String>,
}

impl CjsLexer {
    /// Create a lexer for the given evaluation mode
    pub fn new(mode: EvaluationMode, call_mode: bool) -> Self {
        Self {
            mode,
            call_mode,
            bindings: HashMap::new(),
            exports: Vec::new(),
            reexports: Vec::new(),
        }
    }

    /// Analyze a parsed program
    pub fn analyze(mut self, program: &Program<'_>) -> ScanResult {
        self.collect_bindings(&program.body);
        self.collect_exports(&program.body);

        ScanResult {
            exports: self.exports,
            reexports: self.reexports,
        }
    }

    fn push_reexport(&mut self, specifier: &str, call_mode: bool) {
        if call_mode {
            self.reexports.push(format!("{}{}", specifier, CALL_MODE_MARKER));
        } else {
            self.reexports.push(specifier.to_string());
        }
    }
}

// First pass: bindings
impl CjsLexer {
    fn collect_bindings<'a>(&mut self, statements: &[Statement<'a>]) {
        for stmt in statements {
            self.bind_statement(stmt);
        }
    }

    fn bind_statement<'a>(&mut self, stmt: &Statement<'a>) {
        match stmt {
            Statement::VariableDeclaration(decl) => {
                for declarator in decl.declarations.iter() {
                    let (Some(id), Some(init)) =
                        (declarator.id.get_binding_identifier(), &declarator.init)
                    else {
                        continue;
                    };
                    let binding = self.binding_for_value(init);
                    self.bindings.insert(id.name.to_string(), binding);
                }
            }
            Statement::FunctionDeclaration(func) => {
                if let Some(id) = &func.id {
                    let binding = Binding {
                        returns: returned_keys(func),
                        ..Binding::default()
                    };
                    self.bindings.insert(id.name.to_string(), binding);
                }
            }
            Statement::ClassDeclaration(class) => {
                if let Some(id) = &class.id {
                    self.bindings.insert(id.name.to_string(), Binding::default());
                }
            }
            Statement::ExpressionStatement(expr_stmt) => {
                self.bind_expression(&expr_stmt.expression);
            }
            Statement::BlockStatement(block) => self.collect_bindings(&block.body),
            Statement::TryStatement(try_stmt) => self.collect_bindings(&try_stmt.block.body),
            Statement::IfStatement(if_stmt) => {
                for branch in self.taken_branches(if_stmt) {
                    self.bind_statement(branch);
                }
            }
            _ => {}
        }
    }

    fn bind_expression<'a>(&mut self, expr: &Expression<'a>) {
        if let Some(body) = iife_body(expr) {
            self.collect_bindings(body);
            return;
        }

        match without_parens(expr) {
            Expression::SequenceExpression(seq) => {
                for expr in seq.expressions.iter() {
                    self.bind_expression(expr);
                }
            }
            Expression::AssignmentExpression(assign) => {
                if let Some((object, key)) = member_assignment_target(&assign.left) {
                    if let Expression::Identifier(ident) = without_parens(object) {
                        if let Some(binding) = self.bindings.get_mut(ident.name.as_str()) {
                            binding.keys.push(key);
                        }
                    }
                }
                self.bind_expression(&assign.right);
            }
            Expression::CallExpression(call) => {
                // __export(target, { a: () => a }) and Object.defineProperty(target, 'a', …)
                let is_define = is_member_call(&call.callee, "Object", "defineProperty");
                let is_export = callee_name(&call.callee) == Some("__export");
                if !is_define && !is_export {
                    return;
                }

                let Some(Expression::Identifier(target)) =
                    call.arguments.first().and_then(Argument::as_expression).map(without_parens)
                else {
                    return;
                };
                let keys = match call.arguments.get(1).and_then(Argument::as_expression) {
                    Some(Expression::StringLiteral(lit)) if is_define => vec![lit.value.to_string()],
                    Some(Expression::ObjectExpression(obj)) if is_export => object_keys(obj),
                    _ => return,
                };
                if let Some(binding) = self.bindings.get_mut(target.name.as_str()) {
                    binding.keys.extend(keys);
                }
            }
            _ => {}
        }
    }

    /// Describe the value a name is initialized with
    fn binding_for_value<'a>(&self, init: &Expression<'a>) -> Binding {
        match without_parens(init) {
            Expression::ObjectExpression(obj) => {
                let mut binding = Binding {
                    keys: object_keys(obj),
                    ..Binding::default()
                };
                for property in obj.properties.iter() {
                    if let ObjectPropertyKind::SpreadProperty(spread) = property {
                        if let Some(specifier) = require_specifier(&spread.argument) {
                            binding.reexports.push(specifier.to_string());
                        }
                    }
                }
                binding
            }
            Expression::CallExpression(_) if require_specifier(init).is_some() => Binding {
                require: require_specifier(init).map(str::to_string),
                ..Binding::default()
            },
            Expression::CallExpression(call) if is_interop_require(call) => Binding {
                require: call
                    .arguments
                    .first()
                    .and_then(Argument::as_expression)
                    .and_then(require_specifier)
                    .map(str::to_string),
                ..Binding::default()
            },
            Expression::FunctionExpression(func) => Binding {
                returns: returned_keys(func),
                ..Binding::default()
            },
            Expression::ArrowFunctionExpression(arrow) => Binding {
                returns: arrow_returned_keys(arrow),
                ..Binding::default()
            },
            Expression::AssignmentExpression(assign) => self.binding_for_value(&assign.right),
            _ => Binding::default(),
        }
    }
}

// Second pass: exports
impl CjsLexer {
    fn collect_exports<'a>(&mut self, statements: &[Statement<'a>]) {
        for stmt in statements {
            self.visit_statement(stmt);
        }
    }

    fn visit_statement<'a>(&mut self, stmt: &Statement<'a>) {
        match stmt {
            Statement::ExpressionStatement(expr_stmt) => {
                self.visit_expression(&expr_stmt.expression);
            }
            Statement::VariableDeclaration(var_decl) => {
                for declarator in var_decl.declarations.iter() {
                    if let Some(init) = &declarator.init {
                        self.visit_expression(init);
                    }
                }
            }
            Statement::BlockStatement(block) => self.collect_exports(&block.body),
            Statement::TryStatement(try_stmt) => self.collect_exports(&try_stmt.block.body),
            Statement::IfStatement(if_stmt) => {
                for branch in self.taken_branches(if_stmt) {
                    self.visit_statement(branch);
                }
            }
            _ => {}
        }
    }

    fn visit_expression<'a>(&mut self, expr: &Expression<'a>) {
        if let Some(body) = iife_body(expr) {
            self.collect_exports(body);
            return;
        }

        match without_parens(expr) {
            Expression::AssignmentExpression(assign) => self.visit_assignment_expression(assign),
            Expression::CallExpression(call) => self.visit_call_expression(call),
            Expression::SequenceExpression(seq) => {
                for expr in seq.expressions.iter() {
                    self.visit_expression(expr);
                }
            }
            Expression::ConditionalExpression(cond) => {
                match self.evaluate_env_condition(&cond.test) {
                    Some(true) => self.visit_expression(&cond.consequent),
                    Some(false) => self.visit_expression(&cond.alternate),
                    None => {
                        self.visit_expression(&cond.consequent);
                        self.visit_expression(&cond.alternate);
                    }
                }
            }
            Expression::LogicalExpression(logical) => {
                let skip_right = match (logical.operator, self.evaluate_env_condition(&logical.left)) {
                    (LogicalOperator::And, Some(false)) => true,
                    (LogicalOperator::Or, Some(true)) => true,
                    _ => false,
                };
                if !skip_right {
                    self.visit_expression(&logical.right);
                }
            }
            Expression::UnaryExpression(unary) => self.visit_expression(&unary.argument),
            _ => {}
        }
    }

    fn visit_assignment_expression<'a>(&mut self, expr: &AssignmentExpression<'a>) {
        if is_module_exports_target(&expr.left) {
            // module.exports = <value>
            self.export_value(&expr.right, self.call_mode);
        } else if let Some((object, key)) = member_assignment_target(&expr.left) {
            // exports.a = … / module.exports.a = … / exports['a'] = …
            if !self.call_mode && is_exports_object(object) {
                self.exports.push(key);
            }
        }

        // exports.a = exports.b = void 0
        if let Expression::AssignmentExpression(inner) = without_parens(&expr.right) {
            self.visit_assignment_expression(inner);
        }
    }

    fn visit_call_expression<'a>(&mut self, call: &CallExpression<'a>) {
        let first_arg = call.arguments.first().and_then(Argument::as_expression);

        if is_member_call(&call.callee, "Object", "defineProperty") {
            if let (Some(target), Some(Expression::StringLiteral(key))) = (
                first_arg,
                call.arguments.get(1).and_then(Argument::as_expression),
            ) {
                if !self.call_mode && is_exports_object(target) {
                    self.exports.push(key.value.to_string());
                }
            }
            return;
        }

        if is_member_call(&call.callee, "Object", "assign") {
            if first_arg.is_some_and(is_exports_object) && !self.call_mode {
                for source in call.arguments.iter().skip(1) {
                    if let Some(source) = source.as_expression() {
                        self.export_value(source, false);
                    }
                }
            }
            return;
        }

        if let Some(helper) = callee_name(&call.callee) {
            if REEXPORT_HELPERS.contains(&helper) {
                for arg in call.arguments.iter().filter_map(Argument::as_expression) {
                    if let Some(specifier) = self.required_by(arg) {
                        self.push_reexport(&specifier, false);
                    }
                }

                // esbuild: __export(exports, { a: () => a })
                if let (Some(target), Some(Expression::ObjectExpression(obj))) = (
                    first_arg,
                    call.arguments.get(1).and_then(Argument::as_expression),
                ) {
                    if is_exports_object(target) {
                        self.exports.extend(object_keys(obj));
                    }
                }
                return;
            }
        }

        // Object.keys(_x).forEach(function (key) { exports[key] = _x[key] })
        if let Expression::StaticMemberExpression(member) = without_parens(&call.callee) {
            if member.property.name.as_str() == "forEach" {
                if let Expression::CallExpression(keys_call) = without_parens(&member.object) {
                    if is_member_call(&keys_call.callee, "Object", "keys") {
                        if let Some(source) = keys_call.arguments.first().and_then(Argument::as_expression) {
                            self.export_spread(source);
                        }
                    }
                }
            }
        }
    }

    /// Record the exports of a value assigned to (or merged into) `module.exports`
    fn export_value<'a>(&mut self, value: &Expression<'a>, call_mode: bool) {
        match without_parens(value) {
            Expression::ObjectExpression(obj) if !call_mode => {
                self.exports.extend(object_keys(obj));
                for property in obj.properties.iter() {
                    if let ObjectPropertyKind::SpreadProperty(spread) = property {
                        self.export_spread(&spread.argument);
                    }
                }
            }
            Expression::CallExpression(call) => {
                if let Some(specifier) = require_specifier(value) {
                    self.push_reexport(specifier, call_mode);
                } else if let Some(specifier) = require_specifier(&call.callee) {
                    // require('x')()
                    self.push_reexport(specifier, true);
                } else if is_member_call(&call.callee, "Object", "assign") {
                    for arg in call.arguments.iter().filter_map(Argument::as_expression) {
                        self.export_value(arg, false);
                    }
                } else if callee_name(&call.callee) == Some("__toCommonJS") || is_interop_require(call) {
                    if let Some(arg) = call.arguments.first().and_then(Argument::as_expression) {
                        self.export_value(arg, call_mode);
                    }
                } else if let Some(keys) = self.factory_result(&call.callee) {
                    // module.exports = factory() / (function () { return {…} })()
                    if !call_mode {
                        self.exports.extend(keys);
                    }
                }
            }
            Expression::Identifier(ident) => {
                let Some(binding) = self.bindings.get(ident.name.as_str()).cloned() else {
                    return;
                };
                if let Some(specifier) = &binding.require {
                    self.push_reexport(specifier, call_mode);
                } else if call_mode {
                    self.exports.extend(binding.returns);
                } else {
                    self.exports.extend(binding.keys);
                    for specifier in &binding.reexports {
                        self.push_reexport(specifier, false);
                    }
                }
            }
            Expression::FunctionExpression(func) if call_mode => {
                self.exports.extend(returned_keys(func));
            }
            Expression::ArrowFunctionExpression(arrow) if call_mode => {
                self.exports.extend(arrow_returned_keys(arrow));
            }
            Expression::ConditionalExpression(cond) => match self.evaluate_env_condition(&cond.test) {
                Some(true) => self.export_value(&cond.consequent, call_mode),
                Some(false) => self.export_value(&cond.alternate, call_mode),
                None => {
                    self.export_value(&cond.consequent, call_mode);
                    self.export_value(&cond.alternate, call_mode);
                }
            },
            Expression::AssignmentExpression(assign) => self.export_value(&assign.right, call_mode),
            _ => {}
        }
    }

    /// `...source` inside an exported object or `Object.keys(source)` copied onto exports
    fn export_spread<'a>(&mut self, source: &Expression<'a>) {
        if let Some(specifier) = self.required_by(source) {
            self.push_reexport(&specifier, false);
        } else if let Expression::Identifier(ident) = without_parens(source) {
            if let Some(binding) = self.bindings.get(ident.name.as_str()) {
                let (keys, reexports) = (binding.keys.clone(), binding.reexports.clone());
                self.exports.extend(keys);
                for specifier in reexports {
                    self.push_reexport(&specifier, false);
                }
            }
        }
    }

    /// Specifier required by an expression or by the name it references
    fn required_by<'a>(&self, expr: &Expression<'a>) -> Option<String> {
        if let Some(specifier) = require_specifier(expr) {
            return Some(specifier.to_string());
        }
        match without_parens(expr) {
            Expression::Identifier(ident) => self.bindings.get(ident.name.as_str())?.require.clone(),
            Expression::CallExpression(call) if is_interop_require(call) => call
                .arguments
                .first()
                .and_then(Argument::as_expression)
                .and_then(|arg| self.required_by(arg)),
            _ => None,
        }
    }

    /// Keys returned by calling a known factory
    fn factory_result<'a>(&self, callee: &Expression<'a>) -> Option<Vec<String>> {
        match without_parens(callee) {
            Expression::FunctionExpression(func) => Some(returned_keys(func)),
            Expression::ArrowFunctionExpression(arrow) => Some(arrow_returned_keys(arrow)),
            Expression::Identifier(ident) => {
                let binding = self.bindings.get(ident.name.as_str())?;
                (!binding.returns.is_empty()).then(|| binding.returns.clone())
            }
            _ => None,
        }
    }
}

// process.env.NODE_ENV branches
impl CjsLexer {
    /// Branches of an `if` that can run in the current mode
    fn taken_branches<'s, 'a>(&self, stmt: &'s IfStatement<'a>) -> Vec<&'s Statement<'a>> {
        match self.evaluate_env_condition(&stmt.test) {
            Some(true) => vec![&stmt.consequent],
            Some(false) => stmt.alternate.iter().collect(),
            None => std::iter::once(&stmt.consequent).chain(stmt.alternate.iter()).collect(),
        }
    }

    /// Statically evaluate a condition over `process.env.NODE_ENV`
    fn evaluate_env_condition<'a>(&self, test: &Expression<'a>) -> Option<bool> {
        match without_parens(test) {
            Expression::UnaryExpression(unary) if unary.operator == UnaryOperator::LogicalNot => {
                self.evaluate_env_condition(&unary.argument).map(|value| !value)
            }
            Expression::LogicalExpression(logical) => {
                let left = self.evaluate_env_condition(&logical.left);
                let right = self.evaluate_env_condition(&logical.right);
                match logical.operator {
                    LogicalOperator::And => match (left, right) {
                        (Some(false), _) | (_, Some(false)) => Some(false),
                        (Some(true), Some(true)) => Some(true),
                        _ => None,
                    },
                    LogicalOperator::Or => match (left, right) {
                        (Some(true), _) | (_, Some(true)) => Some(true),
                        (Some(false), Some(false)) => Some(false),
                        _ => None,
                    },
                    LogicalOperator::Coalesce => None,
                }
            }
            Expression::BinaryExpression(binary) => {
                let negated = match binary.operator {
                    BinaryOperator::StrictEquality | BinaryOperator::Equality => false,
                    BinaryOperator::StrictInequality | BinaryOperator::Inequality => true,
                    _ => return None,
                };
                let literal = match (without_parens(&binary.left), without_parens(&binary.right)) {
                    (env, Expression::StringLiteral(lit)) if is_node_env(env) => lit,
                    (Expression::StringLiteral(lit), env) if is_node_env(env) => lit,
                    _ => return None,
                };
                Some((literal.value.as_str() == self.mode.as_str()) != negated)
            }
            _ => None,
        }
    }
}

fn without_parens<'b, 'a>(mut expr: &'b Expression<'a>) -> &'b Expression<'a> {
    while let Expression::ParenthesizedExpression(paren) = expr {
        expr = &paren.expression;
    }
    expr
}

/// `require('x')` → `x`
fn require_specifier<'b>(expr: &'b Expression<'_>) -> Option<&'b str> {
    let Expression::CallExpression(call) = without_parens(expr) else {
        return None;
    };
    let Expression::Identifier(callee) = without_parens(&call.callee) else {
        return None;
    };
    if callee.name.as_str() != "require" || call.arguments.len() != 1 {
        return None;
    }
    match &call.arguments[0] {
        Argument::StringLiteral(lit) => Some(lit.value.as_str()),
        _ => None,
    }
}

/// `_interopRequireWildcard(require('x'))` and friends
fn is_interop_require(call: &CallExpression<'_>) -> bool {
    let Some(name) = callee_name(&call.callee) else {
        return false;
    };
    let is_helper = name.starts_with("_interopRequire")
        || name == "__importStar"
        || name == "__importDefault"
        || name == "__toESM";
    is_helper && call.arguments.first().and_then(Argument::as_expression).is_some()
}

/// Name of a called helper: `f(…)` or `tslib.f(…)`
fn callee_name<'b>(callee: &'b Expression<'_>) -> Option<&'b str> {
    match without_parens(callee) {
        Expression::Identifier(ident) => Some(ident.name.as_str()),
        Expression::StaticMemberExpression(member) => Some(member.property.name.as_str()),
        // (0, tslib.__exportStar)(…)
        Expression::SequenceExpression(seq) => seq.expressions.last().and_then(callee_name),
        _ => None,
    }
}

fn is_member_call(callee: &Expression<'_>, object: &str, property: &str) -> bool {
    match without_parens(callee) {
        Expression::StaticMemberExpression(member) => {
            member.property.name.as_str() == property
                && matches!(without_parens(&member.object), Expression::Identifier(ident) if ident.name.as_str() == object)
        }
        _ => false,
    }
}

/// `module.exports`
fn is_module_exports(expr: &Expression<'_>) -> bool {
    is_member_call(expr, "module", "exports")
}

/// `exports` or `module.exports`
fn is_exports_object(expr: &Expression<'_>) -> bool {
    match without_parens(expr) {
        Expression::Identifier(ident) => ident.name.as_str() == "exports",
        other => is_module_exports(other),
    }
}

fn is_module_exports_target(target: &AssignmentTarget<'_>) -> bool {
    match target {
        AssignmentTarget::StaticMemberExpression(member) => {
            member.property.name.as_str() == "exports"
                && matches!(without_parens(&member.object), Expression::Identifier(ident) if ident.name.as_str() == "module")
        }
        _ => false,
    }
}

/// `object.key = …` or `object['key'] = …`
fn member_assignment_target<'b, 'a>(
    target: &'b AssignmentTarget<'a>,
) -> Option<(&'b Expression<'a>, String)> {
    match target {
        AssignmentTarget::StaticMemberExpression(member) => {
            Some((&member.object, member.property.name.to_string()))
        }
        AssignmentTarget::ComputedMemberExpression(member) => match without_parens(&member.expression) {
            Expression::StringLiteral(lit) => Some((&member.object, lit.value.to_string())),
            _ => None,
        },
        _ => None,
    }
}

/// `process.env.NODE_ENV`
fn is_node_env(expr: &Expression<'_>) -> bool {
    let Expression::StaticMemberExpression(member) = without_parens(expr) else {
        return false;
    };
    member.property.name.as_str() == "NODE_ENV" && is_member_call(&member.object, "process", "env")
}

/// Statically named keys of an object literal
fn object_keys(obj: &ObjectExpression<'_>) -> Vec<String> {
    obj.properties
        .iter()
        .filter_map(|property| match property {
            ObjectPropertyKind::ObjectProperty(prop) => prop.key.static_name().map(|name| name.to_string()),
            ObjectPropertyKind::SpreadProperty(_) => None,
        })
        .collect()
}

/// Statements run by an immediately invoked function
fn iife_body<'b, 'a>(expr: &'b Expression<'a>) -> Option<&'b [Statement<'a>]> {
    let call = match without_parens(expr) {
        Expression::CallExpression(call) => call,
        // !function () { … }()
        Expression::UnaryExpression(unary) => match without_parens(&unary.argument) {
            Expression::CallExpression(call) => call,
            _ => return None,
        },
        _ => return None,
    };

    let mut callee = without_parens(&call.callee);
    // (function () { … }).call(this)
    if let Expression::StaticMemberExpression(member) = callee {
        if matches!(member.property.name.as_str(), "call" | "apply") {
            callee = without_parens(&member.object);
        }
    }

    let statements: &[Statement<'a>] = match callee {
        Expression::FunctionExpression(func) => &func.body.as_ref()?.statements,
        Expression::ArrowFunctionExpression(arrow) if !arrow.expression => &arrow.body.statements,
        _ => return None,
    };
    Some(statements)
}

/// Keys of the object literals a function returns
fn returned_keys(func: &Function<'_>) -> Vec<String> {
    func.body
        .as_ref()
        .map(|body| ReturnCollector::collect(&body.statements))
        .unwrap_or_default()
}

fn arrow_returned_keys(arrow: &ArrowFunctionExpression<'_>) -> Vec<String> {
    if arrow.expression {
        match arrow.body.statements.first() {
            Some(Statement::ExpressionStatement(stmt)) => match without_parens(&stmt.expression) {
                Expression::ObjectExpression(obj) => object_keys(obj),
                _ => Vec::new(),
            },
            _ => Vec::new(),
        }
    } else {
        ReturnCollector::collect(&arrow.body.statements)
    }
}

/// Follows `return` statements of one function body, without entering nested functions
#[derive(Default)]
struct ReturnCollector {
    locals: HashMap<String, Vec<String>>,
    keys: Vec<String>,
}

impl ReturnCollector {
    fn collect(statements: &[Statement<'_>]) -> Vec<String> {
        let mut collector = Self::default();
        collector.visit_statements(statements);
        collector.keys
    }

    fn visit_statements(&mut self, statements: &[Statement<'_>]) {
        for stmt in statements {
            match stmt {
                Statement::VariableDeclaration(decl) => {
                    for declarator in decl.declarations.iter() {
                        if let (Some(id), Some(Expression::ObjectExpression(obj))) = (
                            declarator.id.get_binding_identifier(),
                            declarator.init.as_ref().map(without_parens),
                        ) {
                            self.locals.insert(id.name.to_string(), object_keys(obj));
                        }
                    }
                }
                Statement::ExpressionStatement(expr_stmt) => {
                    if let Expression::AssignmentExpression(assign) = without_parens(&expr_stmt.expression) {
                        if let Some((Expression::Identifier(object), key)) =
                            member_assignment_target(&assign.left).map(|(object, key)| (without_parens(object), key))
                        {
                            if let Some(keys) = self.locals.get_mut(object.name.as_str()) {
                                keys.push(key);
                            }
                        }
                    }
                }
                Statement::ReturnStatement(ret) => match ret.argument.as_ref().map(without_parens) {
                    Some(Expression::ObjectExpression(obj)) => self.keys.extend(object_keys(obj)),
                    Some(Expression::Identifier(ident)) => {
                        if let Some(keys) = self.locals.get(ident.name.as_str()) {
                            self.keys.extend(keys.iter().cloned());
                        }
                    }
                    _ => {}
                },
                Statement::BlockStatement(block) => self.visit_statements(&block.body),
                Statement::IfStatement(if_stmt) => {
                    self.visit_statements(std::slice::from_ref(&if_stmt.consequent));
                    if let Some(alternate) = &if_stmt.alternate {
                        self.visit_statements(std::slice::from_ref(alternate));
                    }
                }
                _ => {}
            }
        }
    }
}
