use log::{debug, trace};

use crate::{
    ast::{Assign, Block, Compound, Declaration, Expr, ProcedureDecl, Program, Statement, TypeRef,
          VarDecl, VarRef},
    error::SemanticError,
    interpreter::semantic::{
        scope::{ScopeArena, ScopeId},
        symbol::{ParamSignature, Symbol},
    },
};

/// Result type used by the semantic analyzer.
pub type AnalysisResult<T> = Result<T, SemanticError>;

/// Name of the outermost scope.
pub const GLOBAL_SCOPE: &str = "global";

/// What to do when a name is declared twice in the same scope.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RedeclarationPolicy {
    /// The later declaration replaces the earlier one.
    #[default]
    Overwrite,
    /// The second declaration is a [`SemanticError::DuplicateIdentifier`].
    Reject,
}

/// Records which scope a variable reference resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The referenced name.
    pub name:  String,
    /// Line of the reference.
    pub line:  usize,
    /// Name of the scope that defines the symbol.
    pub scope: String,
    /// Level of the scope that defines the symbol.
    pub level: usize,
}

/// Walks a [`Program`] and checks that every name resolves in the scope
/// chain visible at its use site.
///
/// One scope is created for the program and one for every procedure body,
/// each linked to its lexically enclosing scope. The analyzer never mutates
/// the tree and may be run any number of times over it.
///
/// ## Example
/// ```
/// use minipas::{
///     error::SemanticError,
///     interpreter::semantic::core::{RedeclarationPolicy, SemanticAnalyzer},
///     parse_program,
/// };
///
/// let program = parse_program("PROGRAM T; VAR a : INTEGER; BEGIN b := a END.").unwrap();
/// let mut analyzer = SemanticAnalyzer::new(RedeclarationPolicy::Overwrite);
///
/// let err = analyzer.analyze(&program).unwrap_err();
/// assert!(matches!(err, SemanticError::UnknownIdentifier { ref name, .. } if name == "b"));
/// ```
#[derive(Debug, Default)]
pub struct SemanticAnalyzer {
    arena:       ScopeArena,
    policy:      RedeclarationPolicy,
    resolutions: Vec<Resolution>,
}

impl SemanticAnalyzer {
    /// Creates an analyzer with the given redeclaration policy.
    #[must_use]
    pub fn new(policy: RedeclarationPolicy) -> Self {
        Self { arena: ScopeArena::default(),
               policy,
               resolutions: Vec::new() }
    }

    /// Checks `program`.
    ///
    /// Any state from a previous run is discarded first.
    ///
    /// # Errors
    /// - `UnknownIdentifier` if a variable reference does not resolve.
    /// - `UnknownType` if a declared type does not resolve to a type symbol.
    /// - `DuplicateIdentifier` if a name is declared twice in one scope under
    ///   [`RedeclarationPolicy::Reject`].
    pub fn analyze(&mut self, program: &Program) -> AnalysisResult<()> {
        self.arena = ScopeArena::default();
        self.resolutions.clear();

        self.visit_program(program)
    }

    /// The scopes built by the last run.
    #[must_use]
    pub const fn scopes(&self) -> &ScopeArena {
        &self.arena
    }

    /// Every variable reference resolved by the last run, in visiting order.
    #[must_use]
    pub fn resolutions(&self) -> &[Resolution] {
        &self.resolutions
    }

    fn visit_program(&mut self, program: &Program) -> AnalysisResult<()> {
        let global = self.arena.push(GLOBAL_SCOPE, 1, None);
        debug!("Entering scope '{GLOBAL_SCOPE}' for program '{}'", program.name);

        self.visit_block(&program.block, global)?;

        self.leave_scope(global);
        Ok(())
    }

    fn visit_block(&mut self, block: &Block, scope: ScopeId) -> AnalysisResult<()> {
        for declaration in &block.declarations {
            match declaration {
                Declaration::Variable(decl) => self.visit_var_decl(decl, scope)?,
                Declaration::Procedure(decl) => self.visit_procedure_decl(decl, scope)?,
            }
        }

        self.visit_compound(&block.body, scope)
    }

    fn visit_var_decl(&mut self, decl: &VarDecl, scope: ScopeId) -> AnalysisResult<()> {
        let type_name = self.resolve_type(&decl.type_spec, scope)?;

        self.define(scope,
                    Symbol::variable(&decl.variable.name, &type_name),
                    decl.variable.line)
    }

    /// The procedure's own symbol goes into the enclosing scope before the
    /// body is visited, so the body can refer to it.
    fn visit_procedure_decl(&mut self, decl: &ProcedureDecl, scope: ScopeId) -> AnalysisResult<()> {
        let params = decl.params
                         .iter()
                         .map(|p| ParamSignature { name:      p.variable.name.clone(),
                                                   type_name: p.type_spec.name.clone(), })
                         .collect();
        self.define(scope, Symbol::procedure(&decl.name, params), decl.line)?;

        let level = self.arena[scope].level + 1;
        let inner = self.arena.push(&decl.name, level, Some(scope));
        debug!("Entering scope '{}' at level {level}", decl.name);

        for param in &decl.params {
            let type_name = self.resolve_type(&param.type_spec, inner)?;
            self.define(inner,
                        Symbol::variable(&param.variable.name, &type_name),
                        param.variable.line)?;
        }

        self.visit_block(&decl.block, inner)?;

        self.leave_scope(inner);
        Ok(())
    }

    fn visit_compound(&mut self, compound: &Compound, scope: ScopeId) -> AnalysisResult<()> {
        for statement in &compound.statements {
            match statement {
                Statement::Compound(inner) => self.visit_compound(inner, scope)?,
                Statement::Assign(assign) => self.visit_assign(assign, scope)?,
                Statement::NoOp => {},
            }
        }
        Ok(())
    }

    fn visit_assign(&mut self, assign: &Assign, scope: ScopeId) -> AnalysisResult<()> {
        self.resolve_variable(&assign.target, scope)?;
        self.visit_expr(&assign.value, scope)
    }

    fn visit_expr(&mut self, expr: &Expr, scope: ScopeId) -> AnalysisResult<()> {
        match expr {
            Expr::Literal { .. } => Ok(()),
            Expr::Variable(var) => self.resolve_variable(var, scope),
            Expr::UnaryOp { expr, .. } => self.visit_expr(expr, scope),
            Expr::BinaryOp { left, right, .. } => {
                self.visit_expr(left, scope)?;
                self.visit_expr(right, scope)
            },
        }
    }

    fn resolve_variable(&mut self, var: &VarRef, scope: ScopeId) -> AnalysisResult<()> {
        let Some((owner, _)) = self.arena.resolve(scope, &var.name) else {
            return Err(SemanticError::UnknownIdentifier { name: var.name.clone(),
                                                          line: var.line, });
        };

        let owner = &self.arena[owner];
        trace!("Resolved '{}' on line {} in scope '{}'", var.name, var.line, owner.name);
        self.resolutions.push(Resolution { name:  var.name.clone(),
                                           line:  var.line,
                                           scope: owner.name.clone(),
                                           level: owner.level, });
        Ok(())
    }

    fn resolve_type(&self, type_ref: &TypeRef, scope: ScopeId) -> AnalysisResult<String> {
        match self.arena.resolve(scope, &type_ref.name) {
            Some((_, symbol)) if symbol.is_type() => Ok(symbol.name.clone()),
            _ => Err(SemanticError::UnknownType { name: type_ref.name.clone(),
                                                  line: type_ref.line, }),
        }
    }

    fn define(&mut self, scope: ScopeId, symbol: Symbol, line: usize) -> AnalysisResult<()> {
        let target = &mut self.arena[scope];

        if self.policy == RedeclarationPolicy::Reject && target.lookup(&symbol.name).is_some() {
            return Err(SemanticError::DuplicateIdentifier { name: symbol.name,
                                                            scope: target.name.clone(),
                                                            line });
        }

        trace!("Defining {symbol} in scope '{}'", target.name);
        if let Some(previous) = target.define(symbol) {
            debug!("Redeclaration on line {line} replaced {previous} in scope '{}'",
                   target.name);
        }
        Ok(())
    }

    fn leave_scope(&self, scope: ScopeId) {
        let scope = &self.arena[scope];
        let enclosing = scope.parent.map_or("none", |parent| self.arena[parent].name.as_str());
        debug!("Leaving scope '{}' (enclosing: {enclosing})\n{scope}", scope.name);
    }
}
