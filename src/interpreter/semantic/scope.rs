use std::{
    collections::HashMap,
    ops::{Index, IndexMut},
};

use crate::interpreter::semantic::symbol::{BUILTIN_TYPES, Symbol};

/// Index of a scope inside a [`ScopeArena`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

/// A single lexical scope: a name-to-symbol mapping plus a link to the
/// enclosing scope.
#[derive(Debug, Clone)]
pub struct Scope {
    /// The scope's name: `global` or the procedure's name.
    pub name:   String,
    /// Lexical nesting depth. The global scope is level 1.
    pub level:  usize,
    /// The enclosing scope, absent for the global scope.
    pub parent: Option<ScopeId>,
    symbols:    HashMap<String, Symbol>,
}

impl Scope {
    /// Creates a scope. A root scope (one without a parent) is seeded with the
    /// built-in type symbols; nested scopes see them through chain lookup.
    #[must_use]
    pub fn new(name: &str, level: usize, parent: Option<ScopeId>) -> Self {
        let mut scope = Self { name: name.to_string(),
                               level,
                               parent,
                               symbols: HashMap::new() };

        if parent.is_none() {
            for builtin in BUILTIN_TYPES {
                scope.define(Symbol::builtin(builtin));
            }
        }

        scope
    }

    /// Inserts a symbol, overwriting any symbol with the same name.
    ///
    /// # Returns
    /// The symbol previously defined under that name, if any.
    pub fn define(&mut self, symbol: Symbol) -> Option<Symbol> {
        self.symbols.insert(symbol.name.clone(), symbol)
    }

    /// Looks a name up in this scope only. Enclosing scopes are not
    /// consulted; see [`ScopeArena::resolve`] for chain lookup.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    /// Number of symbols defined directly in this scope.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if nothing is defined directly in this scope.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Scope name  : {}", self.name)?;
        writeln!(f, "Scope level : {}", self.level)?;
        write!(f, "Contents    :")?;

        let mut names: Vec<&String> = self.symbols.keys().collect();
        names.sort();
        for name in names {
            write!(f, "\n  {name:>9}: {}", self.symbols[name])?;
        }

        Ok(())
    }
}

/// Owns every scope created during one analysis pass.
///
/// Scopes are never freed individually; the whole arena is dropped once the
/// pass is over.
///
/// ## Example
/// ```
/// use minipas::interpreter::semantic::{scope::ScopeArena, symbol::Symbol};
///
/// let mut arena = ScopeArena::default();
/// let global = arena.push("global", 1, None);
/// let inner = arena.push("P1", 2, Some(global));
///
/// arena[global].define(Symbol::variable("a", "INTEGER"));
/// arena[inner].define(Symbol::variable("a", "REAL"));
///
/// let (owner, symbol) = arena.resolve(inner, "a").unwrap();
/// assert_eq!(owner, inner);
/// assert_eq!(symbol, &Symbol::variable("a", "REAL"));
///
/// // Built-ins live in the root scope only and are found through the chain.
/// assert!(arena[inner].lookup("INTEGER").is_none());
/// assert_eq!(arena.resolve(inner, "INTEGER").unwrap().0, global);
/// ```
#[derive(Debug, Default)]
pub struct ScopeArena {
    scopes: Vec<Scope>,
}

impl ScopeArena {
    /// Creates a new scope and returns its id.
    pub fn push(&mut self, name: &str, level: usize, parent: Option<ScopeId>) -> ScopeId {
        self.scopes.push(Scope::new(name, level, parent));
        ScopeId(self.scopes.len() - 1)
    }

    /// Resolves `name` starting at `from` and walking outward through the
    /// parent links.
    ///
    /// # Returns
    /// The id of the innermost scope defining `name`, together with the
    /// symbol, or `None` if no scope in the chain defines it.
    #[must_use]
    pub fn resolve(&self, from: ScopeId, name: &str) -> Option<(ScopeId, &Symbol)> {
        let mut cursor = Some(from);

        while let Some(id) = cursor {
            let scope = &self[id];
            if let Some(symbol) = scope.lookup(name) {
                return Some((id, symbol));
            }
            cursor = scope.parent;
        }

        None
    }

    /// Number of scopes created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Returns `true` if no scope has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Iterates over every scope in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (ScopeId, &Scope)> {
        self.scopes.iter().enumerate().map(|(i, scope)| (ScopeId(i), scope))
    }
}

impl Index<ScopeId> for ScopeArena {
    type Output = Scope;

    fn index(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.0]
    }
}

impl IndexMut<ScopeId> for ScopeArena {
    fn index_mut(&mut self, id: ScopeId) -> &mut Scope {
        &mut self.scopes[id.0]
    }
}
